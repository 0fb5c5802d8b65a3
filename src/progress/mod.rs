pub mod stats;
pub mod store;

pub use stats::{
    mastered_count,
    practiced_count,
    summarize,
    ProgressSummary,
    MASTERY_MIN_CORRECT,
    MASTERY_MIN_INTERVAL,
};
pub use store::ProgressStore;
