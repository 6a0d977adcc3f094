//! Reading sessions.
//!
//! A [`ReadingSession`] is the caller-owned state of one page's reading
//! view: the current [`ReaderMode`], the extraction shown while active, and
//! the observers told about changes. Failed extraction leaves the session
//! inactive and the page untouched.

use dom_query::Document;

use crate::error::Result;
use crate::events::{ReaderEvent, ReaderMode, ReaderObserver};
use crate::extractor::Extractor;
use crate::result::ExtractResult;

/// Reading-mode state for one page.
pub struct ReadingSession {
    extractor: Extractor,
    mode: ReaderMode,
    current: Option<ExtractResult>,
    observers: Vec<Box<dyn ReaderObserver>>,
}

impl ReadingSession {
    /// New, inactive session.
    #[must_use]
    pub fn new(extractor: Extractor) -> Self {
        Self {
            extractor,
            mode: ReaderMode::Inactive,
            current: None,
            observers: Vec::new(),
        }
    }

    /// Register an observer. Observers are notified in registration order.
    pub fn subscribe(&mut self, observer: impl ReaderObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> ReaderMode {
        self.mode
    }

    /// Extraction currently shown, if active.
    #[must_use]
    pub fn current(&self) -> Option<&ExtractResult> {
        self.current.as_ref()
    }

    /// Extract the page and switch to the reading view.
    ///
    /// Re-extracts when already active, since the page may have changed.
    pub fn enable(&mut self, doc: &Document) -> Result<&ExtractResult> {
        let result = match self.extractor.extract(doc) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(error = %err, "reading view unavailable");
                self.emit(&ReaderEvent::ExtractionFailed {
                    reason: err.to_string(),
                });
                return Err(err);
            }
        };

        self.emit(&ReaderEvent::ContentExtracted {
            stage: result.stage,
            word_count: result.word_count,
        });
        self.set_mode(ReaderMode::Active);

        Ok(self.current.insert(result))
    }

    /// Leave the reading view and drop the extraction.
    pub fn disable(&mut self) {
        self.current = None;
        self.set_mode(ReaderMode::Inactive);
    }

    /// Switch modes. Returns the mode after the call.
    ///
    /// Enabling can fail; the session then stays inactive.
    pub fn toggle(&mut self, doc: &Document) -> Result<ReaderMode> {
        match self.mode {
            ReaderMode::Active => self.disable(),
            ReaderMode::Inactive => {
                self.enable(doc)?;
            }
        }
        Ok(self.mode)
    }

    fn set_mode(&mut self, mode: ReaderMode) {
        if self.mode == mode {
            return;
        }
        let event = ReaderEvent::ModeChanged {
            from: self.mode,
            to: mode,
        };
        self.mode = mode;
        self.emit(&event);
    }

    fn emit(&self, event: &ReaderEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}

impl std::fmt::Debug for ReadingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadingSession")
            .field("mode", &self.mode)
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Reading progress through a scrolled page, in percent.
///
/// Pages that do not scroll count as fully read. The result is clamped to
/// `0.0..=100.0`.
#[must_use]
pub fn reading_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 100.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}
