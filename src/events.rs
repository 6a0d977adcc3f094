//! Reading-mode events and observers.
//!
//! A [`ReadingSession`](crate::ReadingSession) reports what happens to it
//! through explicitly registered observers rather than events dispatched
//! on the page. Closures and `mpsc` senders are observers out of the box.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

use crate::extractor::LocateStage;

/// Whether the reading view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReaderMode {
    /// Original page shown.
    #[default]
    Inactive,
    /// Reading view shown.
    Active,
}

impl ReaderMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Inactive => Self::Active,
            Self::Active => Self::Inactive,
        }
    }
}

/// Something that happened in a reading session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReaderEvent {
    /// Main content was located and sanitized.
    ContentExtracted {
        /// Stage that found the content.
        stage: LocateStage,
        /// Words in the sanitized content.
        word_count: usize,
    },
    /// No main content could be located; the page is left as it was.
    ExtractionFailed {
        /// Human-readable reason.
        reason: String,
    },
    /// The session switched modes.
    ModeChanged {
        /// Mode before the switch.
        from: ReaderMode,
        /// Mode after the switch.
        to: ReaderMode,
    },
}

/// Receives reading session events.
pub trait ReaderObserver {
    /// Called once per event, in the order events happen.
    fn notify(&self, event: &ReaderEvent);
}

impl<F> ReaderObserver for F
where
    F: Fn(&ReaderEvent),
{
    fn notify(&self, event: &ReaderEvent) {
        self(event);
    }
}

/// Forwards events into a channel. A disconnected receiver is ignored.
impl ReaderObserver for Sender<ReaderEvent> {
    fn notify(&self, event: &ReaderEvent) {
        if self.send(event.clone()).is_err() {
            tracing::trace!("reader event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::mpsc;

    #[test]
    fn test_mode_toggle() {
        assert_eq!(ReaderMode::default(), ReaderMode::Inactive);
        assert_eq!(ReaderMode::Inactive.toggled(), ReaderMode::Active);
        assert_eq!(ReaderMode::Active.toggled(), ReaderMode::Inactive);
    }

    #[test]
    fn test_closure_observer() {
        let seen = RefCell::new(Vec::new());
        let observer = |e: &ReaderEvent| seen.borrow_mut().push(e.clone());

        observer.notify(&ReaderEvent::ExtractionFailed { reason: "none".to_string() });
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_channel_observer() {
        let (tx, rx) = mpsc::channel();
        let event = ReaderEvent::ModeChanged {
            from: ReaderMode::Inactive,
            to: ReaderMode::Active,
        };

        tx.notify(&event);
        assert_eq!(rx.try_recv().ok(), Some(event));
    }

    #[test]
    fn test_channel_observer_tolerates_dropped_receiver() {
        let (tx, rx) = mpsc::channel::<ReaderEvent>();
        drop(rx);
        tx.notify(&ReaderEvent::ExtractionFailed { reason: "gone".to_string() });
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let json = serde_json::to_string(&ReaderEvent::ContentExtracted {
            stage: LocateStage::Density,
            word_count: 12,
        })
        .unwrap_or_default();

        assert_eq!(json, r#"{"event":"content_extracted","stage":"density","word_count":12}"#);
    }
}
