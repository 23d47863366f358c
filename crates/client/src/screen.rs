//! Lookup screen state.
//!
//! ```text
//! Idle --input--> Typing --submit--> ResultShown --open_detail--> DetailOpen
//!   ^               |                    ^                             |
//!   +--blank input--+                    +---------close_detail--------+
//! ```
//!
//! Every transition is user-driven. Only the current screen's transient fields are held;
//! nothing is persisted.

use crate::lookup::MedicineLookup;
use crate::search::{search, SearchOutcome};
use crate::suggest::{SuggestionFeed, Suggestions};
use api_shared::MedicineRes;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing,
    ResultShown,
    DetailOpen,
}

pub struct Screen<L> {
    lookup: Arc<L>,
    feed: SuggestionFeed<L>,
    input: String,
    phase: Phase,
    outcome: SearchOutcome,
    detail: Option<MedicineRes>,
}

impl<L: MedicineLookup> Screen<L> {
    pub fn new(lookup: Arc<L>, suggest_debounce: Duration) -> Self {
        Self {
            feed: SuggestionFeed::new(Arc::clone(&lookup), suggest_debounce),
            lookup,
            input: String::new(),
            phase: Phase::Idle,
            outcome: SearchOutcome::default(),
            detail: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Suggestions for the current input, or an empty list while they are still loading.
    pub fn suggestions(&self) -> Vec<String> {
        let current = self.feed.current();
        if current.query == self.input {
            current.names
        } else {
            Vec::new()
        }
    }

    pub fn subscribe_suggestions(&self) -> watch::Receiver<Suggestions> {
        self.feed.subscribe()
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn detail(&self) -> Option<&MedicineRes> {
        self.detail.as_ref()
    }

    /// Replaces the text field and requests suggestions for it.
    ///
    /// Typing closes an open detail view.
    pub fn type_text(&mut self, text: &str) {
        self.input = text.to_owned();
        self.detail = None;
        self.phase = if text.trim().is_empty() {
            Phase::Idle
        } else {
            Phase::Typing
        };
        self.feed.push(text);
    }

    /// Runs the search flow for the current input.
    ///
    /// Returns `false`, leaving the state untouched, when the field is blank.
    pub async fn submit(&mut self) -> bool {
        match search(self.lookup.as_ref(), &self.input).await {
            Ok(outcome) => {
                self.outcome = outcome;
                self.detail = None;
                self.phase = Phase::ResultShown;
                true
            }
            Err(e) => {
                tracing::debug!("Submit refused: {}", e);
                false
            }
        }
    }

    /// Opens the detail view for the substitute at `index`.
    ///
    /// Returns `false` when no result is shown, the index is out of range, or the detail
    /// cannot be loaded.
    pub async fn open_detail(&mut self, index: usize) -> bool {
        if !matches!(self.phase, Phase::ResultShown | Phase::DetailOpen) {
            return false;
        }
        let Some(name) = self.outcome.substitutes.get(index).map(|s| s.name.clone()) else {
            return false;
        };

        match self.lookup.medicine(&name).await {
            Ok(Some(medicine)) => {
                self.detail = Some(medicine);
                self.phase = Phase::DetailOpen;
                true
            }
            Ok(None) => {
                tracing::info!("Substitute {:?} has no detail record", name);
                false
            }
            Err(e) => {
                tracing::warn!("Detail for substitute {:?} failed: {}", name, e);
                false
            }
        }
    }

    pub fn close_detail(&mut self) {
        if self.phase == Phase::DetailOpen {
            self.detail = None;
            self.phase = Phase::ResultShown;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::tests::FakeLookup;

    fn screen() -> Screen<FakeLookup> {
        Screen::new(Arc::new(FakeLookup::with_augmentin()), Duration::ZERO)
    }

    #[tokio::test]
    async fn typing_moves_between_idle_and_typing() {
        let mut screen = screen();
        assert_eq!(screen.phase(), Phase::Idle);

        screen.type_text("Aug");
        assert_eq!(screen.phase(), Phase::Typing);

        screen.type_text("");
        assert_eq!(screen.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn suggestions_follow_the_current_input() {
        let mut screen = screen();
        let mut rx = screen.subscribe_suggestions();

        screen.type_text("Aug");
        rx.changed().await.unwrap();
        assert_eq!(screen.suggestions(), vec!["Augmentin 625 Duo Tablet"]);

        screen.type_text("Augx");
        // The list for "Aug" no longer belongs to the field.
        assert!(screen.suggestions().is_empty());
    }

    #[tokio::test]
    async fn blank_submit_is_refused() {
        let mut screen = screen();
        screen.type_text("  ");
        assert!(!screen.submit().await);
        assert_eq!(screen.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn submit_then_open_and_close_detail() {
        let mut screen = screen();
        screen.type_text("augmentin 625 duo tablet");
        assert!(screen.submit().await);
        assert_eq!(screen.phase(), Phase::ResultShown);
        assert_eq!(screen.outcome().substitutes.len(), 2);

        assert!(screen.open_detail(0).await);
        assert_eq!(screen.phase(), Phase::DetailOpen);
        assert_eq!(
            screen.detail().map(|m| m.name.as_str()),
            Some("Moxikind-CV 625 Tablet")
        );

        screen.close_detail();
        assert_eq!(screen.phase(), Phase::ResultShown);
        assert!(screen.detail().is_none());
    }

    #[tokio::test]
    async fn open_detail_needs_a_known_listed_substitute() {
        let mut screen = screen();
        assert!(!screen.open_detail(0).await);

        screen.type_text("Augmentin 625 Duo Tablet");
        assert!(screen.submit().await);
        // "Clavam 625 Tablet" is listed as similar but has no detail record.
        assert!(!screen.open_detail(1).await);
        assert!(!screen.open_detail(9).await);
        assert_eq!(screen.phase(), Phase::ResultShown);
    }
}
