pub mod errors;
pub mod models;

pub use errors::SuhwaError;
pub use models::{
    WordEntry,
    WordProgress,
    DEFAULT_EASE_FACTOR,
};
