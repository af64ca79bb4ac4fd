use std::fs;
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::models::{ClaimForm, ValidationReport};
use crate::processing::{FieldExtractor, OcrClient};
use crate::utils::FormError;
use crate::validation::ClaimValidator;

/// Result of running the full pipeline over one document.
#[derive(Debug)]
pub struct ProcessedForm {
    pub form: ClaimForm,
    pub report: ValidationReport,
}

pub struct FormProcessor {
    ocr: OcrClient,
    extractor: FieldExtractor,
    validator: ClaimValidator,
}

impl FormProcessor {
    pub fn new(config: &Config) -> Self {
        FormProcessor {
            ocr: OcrClient::new(config),
            extractor: FieldExtractor::new(config),
            validator: ClaimValidator::new(),
        }
    }

    // Main processing function that orchestrates the entire pipeline
    pub fn process(&self, document_path: &Path) -> Result<ProcessedForm, FormError> {
        info!("Processing document: {}", document_path.display());

        // Step 1: Read the document
        let file_bytes = fs::read(document_path)?;
        let content_type = content_type_for(document_path);

        // Step 2: Run layout analysis on the document
        let ocr_result = self.ocr.analyze_document(&file_bytes, content_type)?;

        // Step 3: Extract structured fields from the recognized text
        let form = self.extractor.extract_fields(&ocr_result.combined_text());

        // Step 4: Validate the extracted fields
        let report = self.validator.validate(&form);

        Ok(ProcessedForm { form, report })
    }
}

fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/pdf",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(content_type_for(Path::new("scan.pdf")), "application/pdf");
        assert_eq!(content_type_for(Path::new("scan.JPG")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("scan.jpeg")), "image/jpeg");
        assert_eq!(content_type_for(Path::new("scan.png")), "image/png");
        // Unknown or missing extensions fall back to PDF
        assert_eq!(content_type_for(Path::new("scan.tiff")), "application/pdf");
        assert_eq!(content_type_for(Path::new("scan")), "application/pdf");
    }
}
