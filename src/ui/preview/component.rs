// SPDX-License-Identifier: MPL-2.0
//! Preview overlay state and message handling.

use super::geometry;
use super::lifecycle::{open_progress, GraceTimer, Phase};
use crate::document::{DocumentInfo, DocumentSource, RenderedPage};
use crate::error::DocumentError;
use crate::ui::keys::NavKey;
use crate::ui::state::{PageNumber, ZoomScale};
use iced::{Point, Rectangle, Size, Task, Vector};
use std::num::NonZeroU32;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Viewport size after layout.
    LaidOut(Size),
    /// Bounds of the control that invoked the preview.
    AnchorMeasured(Rectangle),
    DocumentLoaded {
        session: u64,
        result: Result<DocumentInfo, DocumentError>,
    },
    PageRendered {
        session: u64,
        page: PageNumber,
        result: Result<RenderedPage, DocumentError>,
    },
    PreviousPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    CloseRequested,
    BackdropPressed,
    Key(NavKey),
    Tick(Instant),
}

/// Outcome reported to the owner of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The grace period elapsed; the owner must unmount the overlay.
    Closed,
}

#[derive(Debug, Clone)]
pub enum DocumentStatus {
    Loading,
    Ready(DocumentInfo),
    Failed(DocumentError),
}

#[derive(Debug, Clone)]
pub enum PageView {
    Pending,
    Ready(RenderedPage),
    Failed(DocumentError),
}

#[derive(Debug)]
pub struct State {
    session: u64,
    source: Option<DocumentSource>,
    phase: Phase,
    page: PageNumber,
    zoom: ZoomScale,
    document: DocumentStatus,
    page_view: PageView,
    anchor: Option<Point>,
    viewport: Option<Size>,
    origin: Option<Vector>,
    opened_at: Instant,
    reveal: f32,
}

impl State {
    /// Mounts an overlay for `source` and starts loading it.
    ///
    /// `session` tags renderer responses; responses carrying another session
    /// belong to an earlier mount and are dropped.
    pub fn open(session: u64, source: Option<DocumentSource>, now: Instant) -> (Self, Task<Message>) {
        let document = if source.is_some() {
            DocumentStatus::Loading
        } else {
            tracing::warn!("Preview opened without a document");
            DocumentStatus::Failed(DocumentError::NotConfigured)
        };

        let state = Self {
            session,
            source,
            phase: Phase::Open,
            page: PageNumber::FIRST,
            zoom: ZoomScale::default(),
            document,
            page_view: PageView::Pending,
            anchor: None,
            viewport: None,
            origin: None,
            opened_at: now,
            reveal: 0.0,
        };

        tracing::debug!(session, "Preview mounted");
        let task = Task::batch([state.load_task(), state.render_task()]);
        (state, task)
    }

    #[must_use]
    pub fn session(&self) -> u64 {
        self.session
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn page_count(&self) -> Option<NonZeroU32> {
        match &self.document {
            DocumentStatus::Ready(info) => Some(info.page_count),
            DocumentStatus::Loading | DocumentStatus::Failed(_) => None,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomScale {
        self.zoom
    }

    #[must_use]
    pub fn document(&self) -> &DocumentStatus {
        &self.document
    }

    #[must_use]
    pub fn page_view(&self) -> &PageView {
        &self.page_view
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    /// Offset of the transform origin from the modal's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Option<Vector> {
        self.origin
    }

    /// Eased visibility of the modal in `[0, 1]`.
    #[must_use]
    pub fn reveal(&self) -> f32 {
        geometry::ease_out(self.reveal)
    }

    /// Whether animation ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        match self.phase {
            Phase::Open => self.reveal < 1.0,
            Phase::Closing(_) => true,
            Phase::Finished => false,
        }
    }

    fn accepts_input(&self) -> bool {
        self.phase.is_open()
    }

    fn document_failed(&self) -> bool {
        matches!(self.document, DocumentStatus::Failed(_))
    }

    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.accepts_input() && !self.document_failed() && self.page.has_previous()
    }

    /// Next page is allowed while the count is unknown.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.accepts_input() && !self.document_failed() && self.page.has_next(self.page_count())
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.accepts_input() && !self.zoom.is_max()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.accepts_input() && !self.zoom.is_min()
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::LaidOut(size) => {
                self.viewport = Some(size);
                self.fix_origin();
                (Effect::None, Task::none())
            }
            Message::AnchorMeasured(bounds) => {
                if self.anchor.is_none() {
                    self.anchor = Some(bounds.center());
                    self.fix_origin();
                }
                (Effect::None, Task::none())
            }
            Message::DocumentLoaded { session, result } => {
                if session != self.session {
                    tracing::debug!(session, "Dropping stale document load");
                    return (Effect::None, Task::none());
                }
                (Effect::None, self.document_loaded(result))
            }
            Message::PageRendered {
                session,
                page,
                result,
            } => {
                if session == self.session && page == self.page {
                    self.page_view = match result {
                        Ok(rendered) => PageView::Ready(rendered),
                        Err(err) => {
                            tracing::warn!("Failed to render page {page}: {err}");
                            PageView::Failed(err)
                        }
                    };
                }
                (Effect::None, Task::none())
            }
            Message::PreviousPage => (Effect::None, self.retreat_page()),
            Message::NextPage => (Effect::None, self.advance_page()),
            Message::ZoomIn => {
                self.zoom_in();
                (Effect::None, Task::none())
            }
            Message::ZoomOut => {
                self.zoom_out();
                (Effect::None, Task::none())
            }
            Message::CloseRequested | Message::BackdropPressed => {
                self.request_close(Instant::now());
                (Effect::None, Task::none())
            }
            Message::Key(key) => self.handle_key(key),
            Message::Tick(now) => (self.tick(now), Task::none()),
        }
    }

    fn handle_key(&mut self, key: NavKey) -> (Effect, Task<Message>) {
        let task = match key {
            NavKey::Left => self.retreat_page(),
            NavKey::Right => self.advance_page(),
            NavKey::Escape => {
                self.request_close(Instant::now());
                Task::none()
            }
            _ => Task::none(),
        };
        (Effect::None, task)
    }

    /// Fixes the transform origin once both the layout and the invoking
    /// control's bounds are known. Later layouts keep it.
    fn fix_origin(&mut self) {
        if self.origin.is_some() {
            return;
        }
        if let (Some(viewport), Some(anchor)) = (self.viewport, self.anchor) {
            let modal = geometry::modal_bounds(viewport);
            self.origin = Some(geometry::transform_origin(Some(anchor), modal));
        }
    }

    fn document_loaded(&mut self, result: Result<DocumentInfo, DocumentError>) -> Task<Message> {
        match result {
            Ok(info) => {
                tracing::debug!("Document has {} page(s)", info.page_count);
                self.document = DocumentStatus::Ready(info);
                let reconciled = self.page.clamp_to(info.page_count);
                if reconciled == self.page {
                    Task::none()
                } else {
                    self.page = reconciled;
                    self.show_current_page()
                }
            }
            Err(err) => {
                tracing::warn!("Failed to load preview document: {err}");
                self.document = DocumentStatus::Failed(err);
                Task::none()
            }
        }
    }

    pub fn advance_page(&mut self) -> Task<Message> {
        if !self.can_advance() {
            return Task::none();
        }
        self.page = self.page.next(self.page_count());
        self.show_current_page()
    }

    pub fn retreat_page(&mut self) -> Task<Message> {
        if !self.can_retreat() {
            return Task::none();
        }
        self.page = self.page.previous();
        self.show_current_page()
    }

    pub fn zoom_in(&mut self) {
        if self.accepts_input() {
            self.zoom = self.zoom.zoom_in();
        }
    }

    pub fn zoom_out(&mut self) {
        if self.accepts_input() {
            self.zoom = self.zoom.zoom_out();
        }
    }

    /// Starts the grace period. No-op unless open.
    pub fn request_close(&mut self, now: Instant) {
        if self.phase.is_open() {
            tracing::debug!(session = self.session, "Preview closing");
            self.phase = Phase::Closing(GraceTimer::start(now));
        }
    }

    /// Advances animations; reports [`Effect::Closed`] once the grace period ends.
    pub fn tick(&mut self, now: Instant) -> Effect {
        match self.phase {
            Phase::Open => {
                self.reveal = open_progress(self.opened_at, now);
                Effect::None
            }
            Phase::Closing(timer) => {
                // Shrink from wherever the entrance animation got to.
                self.reveal = self.reveal.min(1.0 - timer.progress(now));
                if timer.is_due(now) {
                    self.phase = Phase::Finished;
                    tracing::debug!(session = self.session, "Preview closed");
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Phase::Finished => Effect::None,
        }
    }

    fn show_current_page(&mut self) -> Task<Message> {
        self.page_view = PageView::Pending;
        self.render_task()
    }

    fn load_task(&self) -> Task<Message> {
        let Some(source) = self.source.clone() else {
            return Task::none();
        };
        let session = self.session;
        Task::perform(source.load(), move |result| Message::DocumentLoaded {
            session,
            result,
        })
    }

    fn render_task(&self) -> Task<Message> {
        let Some(source) = self.source.clone() else {
            return Task::none();
        };
        let session = self.session;
        let page = self.page;
        Task::perform(source.render(page.index()), move |result| {
            Message::PageRendered {
                session,
                page,
                result,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CLOSE_GRACE_PERIOD;
    use crate::document::{DocumentLocator, DocumentRenderer};
    use iced::widget::image;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug)]
    struct NeverCalled;

    impl DocumentRenderer for NeverCalled {
        fn load(&self, _: &DocumentLocator) -> Result<DocumentInfo, DocumentError> {
            Err(DocumentError::Empty)
        }

        fn render_page(&self, _: &DocumentLocator, index: u32) -> Result<RenderedPage, DocumentError> {
            Err(DocumentError::PageOutOfRange(index + 1))
        }
    }

    fn mounted(session: u64) -> State {
        let source = DocumentSource::new(Arc::new(NeverCalled), DocumentLocator::new("doc.pdf"));
        State::open(session, Some(source), Instant::now()).0
    }

    fn loaded(state: &mut State, pages: u32) {
        let info = DocumentInfo {
            page_count: NonZeroU32::new(pages).expect("non-zero"),
        };
        let session = state.session();
        let _ = state.handle_message(Message::DocumentLoaded {
            session,
            result: Ok(info),
        });
    }

    fn blank_page() -> RenderedPage {
        RenderedPage {
            handle: image::Handle::from_rgba(1, 1, vec![255; 4]),
            width: 1,
            height: 1,
        }
    }

    #[test]
    fn opens_on_first_page_at_natural_zoom() {
        let state = mounted(1);
        assert_eq!(state.page().get(), 1);
        assert_eq!(state.zoom().value(), 1.0);
        assert_eq!(state.page_count(), None);
        assert!(matches!(state.document(), DocumentStatus::Loading));
        assert!(state.phase().is_open());
    }

    #[test]
    fn right_arrow_is_unbounded_until_count_is_known() {
        let mut state = mounted(1);
        for _ in 0..3 {
            let _ = state.handle_message(Message::Key(NavKey::Right));
        }
        assert_eq!(state.page().get(), 4);

        loaded(&mut state, 2);
        assert_eq!(state.page().get(), 2);
        assert_eq!(state.page_count().map(NonZeroU32::get), Some(2));
    }

    #[test]
    fn right_arrow_stops_at_last_known_page() {
        let mut state = mounted(1);
        loaded(&mut state, 2);
        for _ in 0..5 {
            let _ = state.handle_message(Message::Key(NavKey::Right));
        }
        assert_eq!(state.page().get(), 2);
        assert!(!state.can_advance());
    }

    #[test]
    fn left_arrow_stops_at_first_page() {
        let mut state = mounted(1);
        let _ = state.handle_message(Message::Key(NavKey::Left));
        assert_eq!(state.page().get(), 1);
        assert!(!state.can_retreat());

        let _ = state.handle_message(Message::NextPage);
        let _ = state.handle_message(Message::PreviousPage);
        assert_eq!(state.page().get(), 1);
    }

    #[test]
    fn zoom_stays_within_bounds() {
        let mut state = mounted(1);
        for _ in 0..10 {
            let _ = state.handle_message(Message::ZoomIn);
        }
        assert_eq!(state.zoom().value(), 2.0);
        assert!(!state.can_zoom_in());
        let _ = state.handle_message(Message::ZoomIn);
        assert_eq!(state.zoom().value(), 2.0);

        for _ in 0..10 {
            let _ = state.handle_message(Message::ZoomOut);
        }
        assert_eq!(state.zoom().value(), 0.5);
        assert!(!state.can_zoom_out());
    }

    #[test]
    fn close_waits_for_grace_period_and_fires_once() {
        let start = Instant::now();
        let mut state = mounted(1);
        state.request_close(start);
        assert!(state.phase().is_closing());

        assert_eq!(state.tick(start + CLOSE_GRACE_PERIOD / 2), Effect::None);
        assert!(state.phase().is_closing());

        let after = start + CLOSE_GRACE_PERIOD + Duration::from_millis(1);
        assert_eq!(state.tick(after), Effect::Closed);
        assert_eq!(state.tick(after + Duration::from_millis(50)), Effect::None);
        assert_eq!(state.phase(), Phase::Finished);
    }

    #[test]
    fn repeated_close_requests_keep_first_deadline() {
        let start = Instant::now();
        let mut state = mounted(1);
        state.request_close(start);
        state.request_close(start + Duration::from_millis(150));

        assert_eq!(state.tick(start + CLOSE_GRACE_PERIOD), Effect::Closed);
    }

    #[test]
    fn close_control_backdrop_and_escape_share_closing() {
        for message in [
            Message::CloseRequested,
            Message::BackdropPressed,
            Message::Key(NavKey::Escape),
        ] {
            let mut state = mounted(1);
            let (effect, _) = state.handle_message(message);
            assert_eq!(effect, Effect::None);
            assert!(state.phase().is_closing());
            assert!(state.is_animating());
        }
    }

    #[test]
    fn input_is_ignored_while_closing() {
        let mut state = mounted(1);
        state.request_close(Instant::now());
        let _ = state.handle_message(Message::Key(NavKey::Right));
        let _ = state.handle_message(Message::ZoomIn);
        assert_eq!(state.page().get(), 1);
        assert_eq!(state.zoom().value(), 1.0);
    }

    #[test]
    fn load_failure_disables_navigation() {
        let mut state = mounted(1);
        let _ = state.handle_message(Message::DocumentLoaded {
            session: 1,
            result: Err(DocumentError::Empty),
        });
        assert!(matches!(state.document(), DocumentStatus::Failed(DocumentError::Empty)));
        assert!(!state.can_advance());
        assert!(!state.can_retreat());
    }

    #[test]
    fn missing_source_fails_immediately() {
        let (state, _) = State::open(7, None, Instant::now());
        assert!(matches!(
            state.document(),
            DocumentStatus::Failed(DocumentError::NotConfigured)
        ));
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut state = mounted(2);
        let _ = state.handle_message(Message::DocumentLoaded {
            session: 1,
            result: Ok(DocumentInfo {
                page_count: NonZeroU32::MIN,
            }),
        });
        assert!(matches!(state.document(), DocumentStatus::Loading));

        let _ = state.handle_message(Message::PageRendered {
            session: 1,
            page: PageNumber::FIRST,
            result: Ok(blank_page()),
        });
        assert!(matches!(state.page_view(), PageView::Pending));
    }

    #[test]
    fn render_for_previous_page_is_ignored() {
        let mut state = mounted(1);
        let _ = state.handle_message(Message::NextPage);
        let _ = state.handle_message(Message::PageRendered {
            session: 1,
            page: PageNumber::FIRST,
            result: Ok(blank_page()),
        });
        assert!(matches!(state.page_view(), PageView::Pending));

        let _ = state.handle_message(Message::PageRendered {
            session: 1,
            page: PageNumber::new(2),
            result: Ok(blank_page()),
        });
        assert!(matches!(state.page_view(), PageView::Ready(_)));
    }

    #[test]
    fn page_render_failure_keeps_navigation() {
        let mut state = mounted(1);
        let _ = state.handle_message(Message::PageRendered {
            session: 1,
            page: PageNumber::FIRST,
            result: Err(DocumentError::DecodingFailed("bad".into())),
        });
        assert!(matches!(state.page_view(), PageView::Failed(_)));
        assert!(state.can_advance());
    }

    #[test]
    fn origin_waits_for_layout_and_anchor() {
        let mut state = mounted(1);
        let _ = state.handle_message(Message::LaidOut(Size::new(1000.0, 800.0)));
        assert_eq!(state.origin(), None);

        let button = Rectangle::new(Point::new(440.0, 682.0), Size::new(120.0, 36.0));
        let _ = state.handle_message(Message::AnchorMeasured(button));
        // Modal sits at (100, 60); the button centre is (500, 700).
        assert_eq!(state.origin(), Some(Vector::new(400.0, 640.0)));
    }

    #[test]
    fn anchor_before_layout_still_fixes_origin() {
        let mut state = mounted(1);
        let button = Rectangle::new(Point::new(440.0, 682.0), Size::new(120.0, 36.0));
        let _ = state.handle_message(Message::AnchorMeasured(button));
        assert_eq!(state.origin(), None);

        let _ = state.handle_message(Message::LaidOut(Size::new(1000.0, 800.0)));
        assert_eq!(state.origin(), Some(Vector::new(400.0, 640.0)));
    }

    #[test]
    fn origin_is_computed_once() {
        let mut state = mounted(1);
        let _ = state.handle_message(Message::AnchorMeasured(Rectangle::new(
            Point::new(440.0, 682.0),
            Size::new(120.0, 36.0),
        )));
        let _ = state.handle_message(Message::LaidOut(Size::new(1000.0, 800.0)));
        let first = state.origin();
        assert!(first.is_some());

        let _ = state.handle_message(Message::LaidOut(Size::new(400.0, 300.0)));
        let _ = state.handle_message(Message::AnchorMeasured(Rectangle::new(
            Point::new(0.0, 0.0),
            Size::new(10.0, 10.0),
        )));
        assert_eq!(state.origin(), first);
        assert_eq!(state.viewport(), Some(Size::new(400.0, 300.0)));
    }

    #[test]
    fn entrance_animation_completes() {
        let start = Instant::now();
        let source = DocumentSource::new(Arc::new(NeverCalled), DocumentLocator::new("doc"));
        let (mut state, _) = State::open(1, Some(source), start);
        assert!(state.is_animating());

        state.tick(start + Duration::from_secs(1));
        assert_eq!(state.reveal(), 1.0);
        assert!(!state.is_animating());
    }
}
