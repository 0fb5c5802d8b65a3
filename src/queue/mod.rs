use rand::{
    rng,
    seq::SliceRandom,
    Rng,
};

/// Shuffled working order of the vocabulary for one practice pass. The cursor
/// always sits inside the queue; running off the end deals a fresh shuffle
/// instead of terminating.
#[derive(Debug, Clone)]
pub struct PracticeQueue {
    order: Vec<String>,
    cursor: usize,
}

impl PracticeQueue {
    pub fn new(words: Vec<String>) -> Self {
        Self::with_rng(words, &mut rng())
    }

    /// Deterministic construction for tests.
    pub fn with_rng<R: Rng + ?Sized>(mut words: Vec<String>, rng: &mut R) -> Self {
        words.shuffle(rng);
        Self { order: words, cursor: 0 }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.order.get(self.cursor).map(String::as_str)
    }

    /// Step forward one word. At the end of the pass the queue reshuffles and
    /// starts over; it never runs out.
    pub fn advance(&mut self) {
        if self.cursor + 1 < self.order.len() {
            self.cursor += 1;
        } else {
            self.reshuffle();
        }
    }

    /// Step back one word, clamped at the start of the pass.
    pub fn retreat(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Deal a fresh permutation and rewind to the start.
    pub fn reshuffle(&mut self) {
        self.order.shuffle(&mut rng());
        self.cursor = 0;
    }

    /// 0-based cursor position within the current pass.
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
