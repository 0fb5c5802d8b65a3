use std::collections::HashMap;

use tracing::warn;

use crate::{
    core::{
        SuhwaError,
        WordProgress,
    },
    persistence::ProgressBackend,
    scheduler,
    vocabulary,
};

/// Per-word statistics for the whole vocabulary, keyed by the English
/// identifier. Lives in memory for the session and is mirrored to the backend
/// after every recorded judgment.
///
/// Loading never fails: an absent or unparseable save falls back to a fresh
/// store, and a word missing from the map gets a default record on first
/// access. Entries are never removed, only reset to defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressStore {
    records: HashMap<String, WordProgress>,
}

impl ProgressStore {
    /// Fresh store with a default record for every vocabulary word.
    pub fn initialize() -> Self {
        let records = vocabulary::WORD_LIST
            .iter()
            .map(|entry| (entry.english.to_string(), WordProgress::new(entry.english)))
            .collect();
        Self { records }
    }

    /// Rehydrate from the backend, falling back to `initialize` when nothing
    /// was persisted or the payload does not parse.
    pub fn load(backend: &dyn ProgressBackend) -> Self {
        let payload = match backend.read() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Self::initialize(),
            Err(e) => {
                warn!("Failed to read saved progress: {}. Starting fresh.", e);
                return Self::initialize();
            }
        };

        match serde_json::from_str::<HashMap<String, WordProgress>>(&payload) {
            Ok(mut records) => {
                // Words added to the vocabulary since the save get defaults;
                // stale entries for removed words stay but are never surfaced.
                for entry in vocabulary::WORD_LIST {
                    records
                        .entry(entry.english.to_string())
                        .or_insert_with(|| WordProgress::new(entry.english));
                }
                Self { records }
            }
            Err(e) => {
                warn!("Saved progress did not parse: {}. Starting fresh.", e);
                Self::initialize()
            }
        }
    }

    /// Serialize the full map to the backend. Callers treat failure as a
    /// durability loss for the next session, not a session error.
    pub fn save(&self, backend: &dyn ProgressBackend) -> Result<(), SuhwaError> {
        let payload = serde_json::to_string_pretty(&self.records)?;
        backend.write(&payload)
    }

    /// Wipe the persisted copy and return a fresh store.
    pub fn reset(backend: &dyn ProgressBackend) -> Self {
        if let Err(e) = backend.clear() {
            warn!("Failed to clear saved progress: {}", e);
        }
        Self::initialize()
    }

    pub fn get(&self, word: &str) -> Option<&WordProgress> {
        self.records.get(word)
    }

    /// Record for `word`, synthesized with defaults if the vocabulary changed
    /// under a stale save.
    pub fn get_or_default(&mut self, word: &str) -> &mut WordProgress {
        self.records.entry(word.to_string()).or_insert_with(|| WordProgress::new(word))
    }

    /// Apply one pass/fail judgment to `word` at time `now_ms`.
    pub fn record(&mut self, word: &str, correct: bool, now_ms: i64) {
        let entry = self.get_or_default(word);
        let next = scheduler::next_state(entry, correct, now_ms);
        *entry = next;
    }

    pub fn records(&self) -> impl Iterator<Item = &WordProgress> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
