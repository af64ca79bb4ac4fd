use std::env;

use crate::utils::FormError;

const REQUIRED_VARS: [&str; 4] = [
    "DOCUMENT_INTELLIGENCE_ENDPOINT",
    "DOCUMENT_INTELLIGENCE_KEY",
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_KEY",
];

/// Service credentials and deployment settings, loaded from the environment
/// (a `.env` file is honored when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub document_intelligence_endpoint: String,
    pub document_intelligence_key: String,
    pub azure_openai_endpoint: String,
    pub azure_openai_key: String,
    pub azure_openai_version: String,
    pub azure_openai_deployment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, FormError> {
        dotenv::dotenv().ok();

        let missing: Vec<&str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|name| env::var(name).map(|v| v.is_empty()).unwrap_or(true))
            .collect();
        if !missing.is_empty() {
            return Err(FormError::Config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Config {
            document_intelligence_endpoint: env::var("DOCUMENT_INTELLIGENCE_ENDPOINT")
                .unwrap_or_default(),
            document_intelligence_key: env::var("DOCUMENT_INTELLIGENCE_KEY").unwrap_or_default(),
            azure_openai_endpoint: env::var("AZURE_OPENAI_ENDPOINT").unwrap_or_default(),
            azure_openai_key: env::var("AZURE_OPENAI_KEY").unwrap_or_default(),
            azure_openai_version: env::var("AZURE_OPENAI_VERSION")
                .unwrap_or_else(|_| "2024-02-01".to_string()),
            azure_openai_deployment: env::var("AZURE_OPENAI_DEPLOYMENT_NAME")
                .unwrap_or_else(|_| "gpt-4o".to_string()),
        })
    }
}
