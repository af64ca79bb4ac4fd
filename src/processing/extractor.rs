use std::time::Duration;

use log::{error, info};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::models::ClaimForm;
use crate::utils::FormError;

// Token-limit guard for the chat request
const MAX_PROMPT_CHARS: usize = 8000;

const EXTRACTION_PROMPT: &str = r#"You are an expert at extracting structured data from Israeli National Insurance Institute (ביטוח לאומי) work-injury claim forms. The forms are filled in Hebrew, English, or a mix of both.

You will receive OCR output of one scanned form: detected key-value pairs, page lines, and paragraphs. Extract the requested fields and return ONLY a JSON object with exactly this structure:

{
  "lastName": "",
  "firstName": "",
  "idNumber": "",
  "gender": "",
  "dateOfBirth": {"day": "", "month": "", "year": ""},
  "address": {"street": "", "houseNumber": "", "entrance": "", "apartment": "", "city": "", "postalCode": "", "poBox": ""},
  "landlinePhone": "",
  "mobilePhone": "",
  "jobType": "",
  "dateOfInjury": {"day": "", "month": "", "year": ""},
  "timeOfInjury": "",
  "accidentLocation": "",
  "accidentAddress": "",
  "accidentDescription": "",
  "injuredBodyPart": "",
  "signature": "",
  "formFillingDate": {"day": "", "month": "", "year": ""},
  "formReceiptDateAtClinic": {"day": "", "month": "", "year": ""},
  "medicalInstitutionFields": {"healthFundMember": "", "natureOfAccident": "", "medicalDiagnoses": ""}
}

Rules:
- Keep extracted values in their original language; do not translate.
- Every value is a string. Use an empty string for anything missing or unreadable.
- Dates are split into day, month, and year parts as written on the form.
- Do not invent values. Do not add fields. Return the JSON object and nothing else."#;

/// Turns OCR text into a structured claim form through an Azure OpenAI chat
/// deployment. Extraction failures degrade to the empty record so the
/// pipeline always has something to validate.
pub struct FieldExtractor {
    endpoint: String,
    key: String,
    api_version: String,
    deployment: String,
    client: Client,
}

impl FieldExtractor {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_else(|_| Client::new());

        info!("Field extractor initialized");
        FieldExtractor {
            endpoint: config.azure_openai_endpoint.trim_end_matches('/').to_string(),
            key: config.azure_openai_key.clone(),
            api_version: config.azure_openai_version.clone(),
            deployment: config.azure_openai_deployment.clone(),
            client,
        }
    }

    pub fn extract_fields(&self, ocr_text: &str) -> ClaimForm {
        match self.request_extraction(ocr_text) {
            Ok(form) => {
                info!("Successfully extracted fields from OCR text");
                form
            }
            Err(err) => {
                error!("Error extracting fields: {}", err);
                ClaimForm::default()
            }
        }
    }

    fn request_extraction(&self, ocr_text: &str) -> Result<ClaimForm, FormError> {
        let text = truncate_chars(ocr_text, MAX_PROMPT_CHARS);
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        );

        let body = json!({
            "messages": [
                {"role": "system", "content": EXTRACTION_PROMPT},
                {
                    "role": "user",
                    "content": format!("Extract the required fields from this OCR text:\n\n{}", text)
                }
            ],
            "temperature": 0,
            "max_tokens": 2000
        });

        let response: ChatResponse = self
            .client
            .post(&url)
            .header("api-key", &self.key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| FormError::Extraction("empty completion response".to_string()))?;

        let cleaned = strip_code_fences(content.trim());
        match serde_json::from_str(cleaned) {
            Ok(form) => Ok(form),
            Err(err) => {
                // Malformed model output is a degraded extraction, not a
                // pipeline failure
                error!("Failed to parse JSON response: {}", err);
                Ok(ClaimForm::default())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: String,
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((index, _)) => format!("{}...", &text[..index]),
        None => text.to_string(),
    }
}

fn strip_code_fences(text: &str) -> &str {
    if let Some(rest) = text.strip_prefix("```json") {
        rest.strip_suffix("```").unwrap_or(rest).trim()
    } else if let Some(rest) = text.strip_prefix("```") {
        rest.strip_suffix("```").unwrap_or(rest).trim()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fence() {
        let reply = "```json\n{\"firstName\": \"דוד\"}\n```";
        assert_eq!(strip_code_fences(reply), "{\"firstName\": \"דוד\"}");
    }

    #[test]
    fn test_strip_bare_fence() {
        let reply = "```\n{}\n```";
        assert_eq!(strip_code_fences(reply), "{}");
    }

    #[test]
    fn test_unfenced_reply_unchanged() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_truncate_long_text() {
        let text = "א".repeat(9000);
        let truncated = truncate_chars(&text, MAX_PROMPT_CHARS);
        assert_eq!(truncated.chars().count(), MAX_PROMPT_CHARS + 3);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("short", MAX_PROMPT_CHARS), "short");
    }

    #[test]
    fn test_fenced_form_parses() {
        let reply = "```json\n{\"firstName\": \"דוד\", \"idNumber\": \"123456789\"}\n```";
        let form: ClaimForm = serde_json::from_str(strip_code_fences(reply)).unwrap();
        assert_eq!(form.first_name, "דוד");
        assert_eq!(form.id_number, "123456789");
    }
}
