use serde::Serialize;

/// Outcome of one validation rule applied to one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFinding {
    pub field: String,
    pub value: String,
    pub valid: bool,
    pub message: String,
}

impl ValidationFinding {
    pub fn new(
        field: impl Into<String>,
        value: impl Into<String>,
        valid: bool,
        message: impl Into<String>,
    ) -> Self {
        ValidationFinding {
            field: field.into(),
            value: value.into(),
            valid,
            message: message.into(),
        }
    }
}

/// Aggregate result of validating one claim form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub overall_score: f64,
    pub total_checks: usize,
    pub passed_checks: usize,
    pub validation_details: Vec<ValidationFinding>,
    pub completeness_score: f64,
    pub summary: String,
}
