use super::store::ProgressStore;
use crate::vocabulary;

/// A word counts as mastered once it has this many correct judgments...
pub const MASTERY_MIN_CORRECT: u32 = 3;
/// ...and its review interval has grown to at least this many days.
pub const MASTERY_MIN_INTERVAL: u32 = 7;

/// Display snapshot derived from the store on demand; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub practiced: usize,
    pub mastered: usize,
}

/// Words with at least one recorded judgment, pass or fail.
pub fn practiced_count(store: &ProgressStore) -> usize {
    store.records().filter(|record| record.is_practiced()).count()
}

pub fn mastered_count(store: &ProgressStore) -> usize {
    store
        .records()
        .filter(|record| {
            record.correct_count >= MASTERY_MIN_CORRECT && record.interval >= MASTERY_MIN_INTERVAL
        })
        .count()
}

pub fn summarize(store: &ProgressStore) -> ProgressSummary {
    ProgressSummary {
        total: vocabulary::word_count(),
        practiced: practiced_count(store),
        mastered: mastered_count(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000_000;

    #[test]
    fn practiced_counts_any_recorded_judgment() {
        let mut store = ProgressStore::initialize();
        assert_eq!(practiced_count(&store), 0);

        store.record("hi", true, NOW);
        store.record("name", false, NOW);
        assert_eq!(practiced_count(&store), 2);

        // Repeat judgments on the same word do not double-count.
        store.record("hi", false, NOW + 1);
        assert_eq!(practiced_count(&store), 2);
    }

    #[test]
    fn mastery_needs_both_correct_count_and_interval() {
        let mut store = ProgressStore::initialize();

        let record = store.get_or_default("hi");
        record.correct_count = 3;
        record.interval = 7;

        let almost = store.get_or_default("name");
        almost.correct_count = 3;
        almost.interval = 6;

        let unproven = store.get_or_default("food");
        unproven.correct_count = 2;
        unproven.interval = 12;

        assert_eq!(mastered_count(&store), 1);
    }

    #[test]
    fn summary_is_consistent_with_the_store_snapshot() {
        let mut store = ProgressStore::initialize();
        store.record("hi", true, NOW);

        let summary = summarize(&store);
        assert_eq!(summary.total, crate::vocabulary::word_count());
        assert_eq!(summary.practiced, 1);
        assert_eq!(summary.mastered, 0);
    }
}
