use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuhwaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("SuhwaError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SuhwaError {
    fn from(error: std::io::Error) -> Self {
        SuhwaError::Io(Box::new(error))
    }
}
