pub mod core;
pub mod persistence;
pub mod progress;
pub mod queue;
pub mod scheduler;
pub mod session;
pub mod vocabulary;

pub use crate::{
    core::{
        SuhwaError,
        WordEntry,
        WordProgress,
    },
    persistence::{
        FileBackend,
        MemoryBackend,
        ProgressBackend,
    },
    progress::{
        ProgressStore,
        ProgressSummary,
    },
    queue::PracticeQueue,
    session::PracticeSession,
};
