// SPDX-License-Identifier: MPL-2.0
//! Renderer for documents stored as page images.
//!
//! A locator may name a single image (a one-page document) or a directory
//! whose image files, sorted by file name, are the pages.

use super::{DocumentInfo, DocumentLocator, DocumentRenderer, RenderedPage};
use crate::error::DocumentError;
use iced::widget::image;
use image_rs::GenericImageView;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

/// Lowercase file extensions accepted as pages.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "webp", "bmp", "gif", "tiff"];

/// Checks whether `path` has an extension accepted as a page.
#[must_use]
pub fn is_supported_page(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PageImageRenderer;

impl PageImageRenderer {
    fn pages(locator: &DocumentLocator) -> Result<Vec<PathBuf>, DocumentError> {
        let path = locator.path();
        let display = path.display().to_string();
        let metadata =
            std::fs::metadata(path).map_err(|err| DocumentError::from_io(&err, &display))?;

        if metadata.is_file() {
            return if is_supported_page(path) {
                Ok(vec![path.to_path_buf()])
            } else {
                Err(DocumentError::UnsupportedFormat(display))
            };
        }

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|err| DocumentError::from_io(&err, &display))? {
            let entry = entry.map_err(|err| DocumentError::from_io(&err, &display))?;
            let page = entry.path();
            if page.is_file() && is_supported_page(&page) {
                pages.push(page);
            }
        }
        pages.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(pages)
    }
}

impl DocumentRenderer for PageImageRenderer {
    fn load(&self, locator: &DocumentLocator) -> Result<DocumentInfo, DocumentError> {
        let pages = Self::pages(locator)?;
        let count = u32::try_from(pages.len()).unwrap_or(u32::MAX);
        let page_count = NonZeroU32::new(count).ok_or(DocumentError::Empty)?;
        tracing::debug!("Loaded {locator} with {page_count} page(s)");
        Ok(DocumentInfo { page_count })
    }

    fn render_page(
        &self,
        locator: &DocumentLocator,
        index: u32,
    ) -> Result<RenderedPage, DocumentError> {
        let pages = Self::pages(locator)?;
        let path = usize::try_from(index)
            .ok()
            .and_then(|i| pages.get(i))
            .ok_or(DocumentError::PageOutOfRange(index.saturating_add(1)))?;

        let decoded = image_rs::open(path)
            .map_err(|err| DocumentError::DecodingFailed(format!("{}: {err}", path.display())))?;
        let (width, height) = decoded.dimensions();
        let pixels = decoded.to_rgba8().into_vec();

        Ok(RenderedPage {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        })
    }
}
