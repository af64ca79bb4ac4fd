pub mod export;
pub mod extractor;
pub mod ocr;

pub use extractor::FieldExtractor;
pub use ocr::{OcrClient, OcrResult};
