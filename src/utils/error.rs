use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("OCR analysis error: {0}")]
    Ocr(String),

    #[error("Field extraction error: {0}")]
    Extraction(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
