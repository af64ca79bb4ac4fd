use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ClaimForm;
use crate::utils::FormError;

/// Download artifact name: the original file name with the export prefix.
pub fn export_file_name(original_name: &str) -> String {
    format!("extracted_data_{}.json", original_name)
}

/// Pretty-printed UTF-8 JSON with 2-space indentation. Non-ASCII text stays
/// literal, which matters for the Hebrew field values.
pub fn to_pretty_json(form: &ClaimForm) -> Result<String, FormError> {
    Ok(serde_json::to_string_pretty(form)?)
}

pub fn write_export(
    form: &ClaimForm,
    output_dir: &Path,
    original_name: &str,
) -> Result<PathBuf, FormError> {
    let path = output_dir.join(export_file_name(original_name));
    fs::write(&path, to_pretty_json(form)?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name_keeps_original_extension() {
        assert_eq!(
            export_file_name("sample.pdf"),
            "extracted_data_sample.pdf.json"
        );
    }

    #[test]
    fn test_pretty_json_format() {
        let form = ClaimForm {
            last_name: "כהן".to_string(),
            ..ClaimForm::default()
        };
        let json = to_pretty_json(&form).unwrap();
        // 2-space indentation, camelCase keys, Hebrew preserved literally
        assert!(json.contains("\n  \"lastName\": \"כהן\","));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_export_round_trip() {
        let form = ClaimForm {
            first_name: "דוד".to_string(),
            ..ClaimForm::default()
        };
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&form, dir.path(), "claim.pdf").unwrap();
        assert!(path.ends_with("extracted_data_claim.pdf.json"));

        let written = fs::read_to_string(&path).unwrap();
        let parsed: ClaimForm = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, form);
    }
}
