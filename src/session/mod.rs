use chrono::Utc;
use tracing::warn;

use crate::{
    core::WordEntry,
    persistence::ProgressBackend,
    progress::{
        self,
        ProgressStore,
        ProgressSummary,
    },
    queue::PracticeQueue,
    vocabulary,
};


/// One practice sitting: the shuffled queue, the per-word statistics, and the
/// backend they are mirrored to. Presentation layers drive it through plain
/// method calls; the pass/fail judgment itself comes from outside (the video
/// inference collaborator, or stdin in the bundled driver).
pub struct PracticeSession<B: ProgressBackend> {
    store: ProgressStore,
    queue: PracticeQueue,
    backend: B,
}

impl<B: ProgressBackend> PracticeSession<B> {
    /// Rehydrate saved statistics and deal a shuffled queue over the full
    /// vocabulary.
    pub fn start(backend: B) -> Self {
        let store = ProgressStore::load(&backend);
        let queue = PracticeQueue::new(vocabulary::english_words());
        Self { store, queue, backend }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.queue.current_word()
    }

    /// The full {english, korean} pair for the current word.
    pub fn current_entry(&self) -> Option<&'static WordEntry> {
        self.current_word().and_then(vocabulary::find_entry)
    }

    /// Record the collaborator's judgment for the current word and mirror the
    /// store to the backend. A failed save only costs durability for the next
    /// session, so it is logged and swallowed.
    pub fn record_outcome(&mut self, correct: bool) {
        let word = match self.queue.current_word() {
            Some(word) => word.to_string(),
            None => return,
        };

        self.store.record(&word, correct, Utc::now().timestamp_millis());
        if let Err(e) = self.store.save(&self.backend) {
            warn!("Failed to persist progress: {}", e);
        }
    }

    pub fn next(&mut self) {
        self.queue.advance();
    }

    pub fn previous(&mut self) {
        self.queue.retreat();
    }

    pub fn shuffle(&mut self) {
        self.queue.reshuffle();
    }

    /// Wipe all statistics, clear the persisted copy, and deal a fresh queue.
    pub fn reset(&mut self) {
        self.store = ProgressStore::reset(&self.backend);
        self.queue.reshuffle();
    }

    pub fn summary(&self) -> ProgressSummary {
        progress::summarize(&self.store)
    }

    /// 1-based position and pass length, for "K of N" display.
    pub fn position(&self) -> (usize, usize) {
        (self.queue.position() + 1, self.queue.len())
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }
}
