use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown worksheet type: {0} (expected meaning, sentence, hanja or quiz)")]
    UnknownWorksheetKind(String),

    #[error("No vocabulary entry with id {0}")]
    UnknownEntry(String),

    #[error("Failed to load file {path}: {reason}")]
    FailedToLoadFile { path: String, reason: String },
}

impl From<std::io::Error> for SheetError {
    fn from(error: std::io::Error) -> Self {
        SheetError::Io(Box::new(error))
    }
}
