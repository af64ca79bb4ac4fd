use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::utils::FormError;

const API_VERSION: &str = "2023-07-31";
const POLL_INTERVAL: Duration = Duration::from_secs(1);
// Layout analysis of a multi-page PDF can take a while on the service side
const MAX_POLL_ATTEMPTS: u32 = 120;

/// Client for the Azure Document Intelligence layout model. Submits the
/// document, waits for the analysis operation, and hands back the recognized
/// text structure.
pub struct OcrClient {
    endpoint: String,
    key: String,
    client: Client,
}

impl OcrClient {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        info!("OCR client initialized");
        OcrClient {
            endpoint: config
                .document_intelligence_endpoint
                .trim_end_matches('/')
                .to_string(),
            key: config.document_intelligence_key.clone(),
            client,
        }
    }

    /// Analyze a document with the `prebuilt-layout` model, key/value pair
    /// detection enabled. Blocks until the service operation completes.
    pub fn analyze_document(
        &self,
        file_bytes: &[u8],
        content_type: &str,
    ) -> Result<OcrResult, FormError> {
        let url = format!(
            "{}/formrecognizer/documentModels/prebuilt-layout:analyze?api-version={}&features=keyValuePairs",
            self.endpoint, API_VERSION
        );

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(file_bytes.to_vec())
            .send()?;

        if !response.status().is_success() {
            return Err(FormError::Ocr(format!(
                "analysis request rejected with status {}",
                response.status()
            )));
        }

        let operation_url = response
            .headers()
            .get("operation-location")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| FormError::Ocr("missing operation-location header".to_string()))?;

        self.poll_operation(&operation_url)
    }

    fn poll_operation(&self, operation_url: &str) -> Result<OcrResult, FormError> {
        for _ in 0..MAX_POLL_ATTEMPTS {
            thread::sleep(POLL_INTERVAL);

            let operation: AnalyzeOperation = self
                .client
                .get(operation_url)
                .header("Ocp-Apim-Subscription-Key", &self.key)
                .send()?
                .error_for_status()?
                .json()?;

            match operation.status.as_str() {
                "succeeded" => {
                    let result = operation.analyze_result.unwrap_or_default();
                    info!(
                        "Document analysis succeeded: {} page(s), {} key-value pair(s)",
                        result.pages.len(),
                        result.key_value_pairs.len()
                    );
                    return Ok(result);
                }
                "failed" => {
                    return Err(FormError::Ocr("document analysis failed".to_string()));
                }
                _ => {}
            }
        }

        Err(FormError::Ocr("document analysis timed out".to_string()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeOperation {
    status: String,
    #[serde(default)]
    analyze_result: Option<OcrResult>,
}

/// Recognized document structure as returned by the layout model.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OcrResult {
    pub content: String,
    pub pages: Vec<OcrPage>,
    pub paragraphs: Vec<OcrParagraph>,
    pub key_value_pairs: Vec<OcrKeyValuePair>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OcrPage {
    pub lines: Vec<OcrLine>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OcrLine {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OcrParagraph {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OcrKeyValuePair {
    pub key: Option<OcrKvElement>,
    pub value: Option<OcrKvElement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OcrKvElement {
    pub content: String,
}

impl OcrResult {
    /// Flatten the recognized structure into the text blob the field
    /// extractor consumes: detected key/value pairs first, then page lines,
    /// then paragraphs the line pass missed.
    pub fn combined_text(&self) -> String {
        let page_lines: Vec<&str> = self
            .pages
            .iter()
            .flat_map(|page| page.lines.iter().map(|line| line.content.as_str()))
            .collect();
        let line_set: HashSet<&str> = page_lines.iter().copied().collect();

        let leftover_paragraphs: Vec<&str> = self
            .paragraphs
            .iter()
            .map(|paragraph| paragraph.content.as_str())
            .filter(|content| !line_set.contains(content))
            .collect();

        let mut key_value_lines = Vec::new();
        for pair in &self.key_value_pairs {
            let key = pair
                .key
                .as_ref()
                .map(|element| element.content.trim())
                .unwrap_or("");
            let value = pair
                .value
                .as_ref()
                .map(|element| element.content.trim())
                .unwrap_or("");
            if !key.is_empty() || !value.is_empty() {
                key_value_lines.push(format!("{} : {}", key, value));
            }
        }

        let mut sections = vec!["*Key-Value Pairs:*".to_string()];
        sections.extend(key_value_lines);
        sections.push("*Pages:*".to_string());
        sections.extend(page_lines.iter().map(|line| line.to_string()));
        sections.push("*Paragraphs not in pages:*".to_string());
        sections.extend(leftover_paragraphs.iter().map(|p| p.to_string()));
        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(content: &str) -> OcrLine {
        OcrLine {
            content: content.to_string(),
        }
    }

    fn kv(key: &str, value: &str) -> OcrKeyValuePair {
        OcrKeyValuePair {
            key: Some(OcrKvElement {
                content: key.to_string(),
            }),
            value: Some(OcrKvElement {
                content: value.to_string(),
            }),
        }
    }

    #[test]
    fn test_combined_text_sections() {
        let result = OcrResult {
            content: String::new(),
            pages: vec![OcrPage {
                lines: vec![line("שם משפחה"), line("כהן")],
            }],
            paragraphs: vec![
                OcrParagraph {
                    content: "כהן".to_string(),
                },
                OcrParagraph {
                    content: "הצהרת הנפגע".to_string(),
                },
            ],
            key_value_pairs: vec![kv("שם משפחה", "כהן")],
        };

        let text = result.combined_text();
        assert_eq!(
            text,
            "*Key-Value Pairs:*\nשם משפחה : כהן\n*Pages:*\nשם משפחה\nכהן\n*Paragraphs not in pages:*\nהצהרת הנפגע"
        );
    }

    #[test]
    fn test_blank_key_value_pairs_dropped() {
        let result = OcrResult {
            key_value_pairs: vec![kv("", ""), kv("טלפון", ""), OcrKeyValuePair::default()],
            ..OcrResult::default()
        };
        let text = result.combined_text();
        assert!(text.contains("טלפון : "));
        assert_eq!(text.matches(" : ").count(), 1);
    }

    #[test]
    fn test_deserialize_analyze_result() {
        let json = r#"{
            "content": "full text",
            "pages": [{"lines": [{"content": "a line", "polygon": [1, 2]}]}],
            "paragraphs": [{"content": "a paragraph"}],
            "keyValuePairs": [{"key": {"content": "k"}, "value": {"content": "v"}}]
        }"#;
        let result: OcrResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.content, "full text");
        assert_eq!(result.pages[0].lines[0].content, "a line");
        assert_eq!(result.key_value_pairs[0].key.as_ref().unwrap().content, "k");
    }
}
