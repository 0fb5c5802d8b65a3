use serde::{
    Deserialize,
    Serialize,
};

/// Starting ease factor for a word that has never been reviewed.
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// One canonical vocabulary pair. The English side is the identity key used
/// by the progress store and the practice queue; the Korean side is display
/// text for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    pub english: &'static str,
    pub korean: &'static str,
}

/// Per-word mastery statistics. Serialized field names stay camelCase so the
/// on-disk layout round-trips with saves written by earlier builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    pub word: String,
    pub correct_count: u32,
    pub incorrect_count: u32,
    /// Milliseconds since epoch; 0 if the word has never been reviewed.
    pub last_seen: i64,
    /// Days until the next scheduled review.
    pub interval: u32,
    pub ease_factor: f64,
}

impl WordProgress {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            correct_count: 0,
            incorrect_count: 0,
            last_seen: 0,
            interval: 0,
            ease_factor: DEFAULT_EASE_FACTOR,
        }
    }

    pub fn is_practiced(&self) -> bool {
        self.correct_count > 0 || self.incorrect_count > 0
    }
}
