// SPDX-License-Identifier: MPL-2.0
//! Document rendering used by the preview overlay.
//!
//! The overlay only knows the [`DocumentRenderer`] trait. It asks for the page
//! count once per mount and then for one page image at a time. Rendering
//! runs on the blocking thread pool so the UI thread never decodes pixels.

mod page_images;

pub use page_images::{is_supported_page, PageImageRenderer, SUPPORTED_EXTENSIONS};

use crate::error::DocumentError;
use iced::widget::image;
use std::fmt;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Identifies the document to preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLocator(PathBuf);

impl DocumentLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for DocumentLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Facts learned when a document is first opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {
    pub page_count: NonZeroU32,
}

/// One page ready for display at its natural size.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

/// Turns a locator into page images.
///
/// A document with zero pages must be reported as [`DocumentError::Empty`].
pub trait DocumentRenderer: Send + Sync + fmt::Debug {
    fn load(&self, locator: &DocumentLocator) -> Result<DocumentInfo, DocumentError>;

    /// Renders the page at zero-based `index`.
    fn render_page(
        &self,
        locator: &DocumentLocator,
        index: u32,
    ) -> Result<RenderedPage, DocumentError>;
}

/// A renderer bound to the document it renders.
#[derive(Debug, Clone)]
pub struct DocumentSource {
    renderer: Arc<dyn DocumentRenderer>,
    locator: DocumentLocator,
}

impl DocumentSource {
    pub fn new(renderer: Arc<dyn DocumentRenderer>, locator: DocumentLocator) -> Self {
        Self { renderer, locator }
    }

    /// Source backed by [`PageImageRenderer`].
    pub fn page_images(path: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(PageImageRenderer), DocumentLocator::new(path))
    }

    #[must_use]
    pub fn locator(&self) -> &DocumentLocator {
        &self.locator
    }

    /// Loads document facts off the UI thread.
    pub async fn load(self) -> Result<DocumentInfo, DocumentError> {
        tokio::task::spawn_blocking(move || self.renderer.load(&self.locator))
            .await
            .map_err(|err| DocumentError::IoError(err.to_string()))?
    }

    /// Renders one page off the UI thread.
    pub async fn render(self, index: u32) -> Result<RenderedPage, DocumentError> {
        tokio::task::spawn_blocking(move || self.renderer.render_page(&self.locator, index))
            .await
            .map_err(|err| DocumentError::IoError(err.to_string()))?
    }
}
