use log::info;

use crate::models::{ClaimForm, ValidationFinding, ValidationReport};
use crate::validation::{
    completeness::completeness_score, AccidentInfoValidator, ContactInfoValidator, DateValidator,
    PersonalInfoValidator,
};

// How many failing findings the summary spells out before truncating
const SUMMARY_ISSUE_LIMIT: usize = 5;

/// Rule-based validator for extracted claim forms. Holds no state; a single
/// instance can serve any number of concurrent validations.
pub struct ClaimValidator;

impl ClaimValidator {
    pub fn new() -> Self {
        ClaimValidator
    }

    /// Run every rule group over the form and aggregate the findings into a
    /// report. Infallible: missing or empty fields fail or skip their own
    /// checks, they never abort the run.
    pub fn validate(&self, form: &ClaimForm) -> ValidationReport {
        info!("Starting data validation");

        let mut findings = Vec::new();
        findings.extend(PersonalInfoValidator::validate(form));
        findings.extend(DateValidator::validate(form));
        findings.extend(ContactInfoValidator::validate(form));
        findings.extend(AccidentInfoValidator::validate(form));

        let total_checks = findings.len();
        let passed_checks = findings.iter().filter(|f| f.valid).count();
        let overall_score = if total_checks > 0 {
            round2(passed_checks as f64 / total_checks as f64 * 100.0)
        } else {
            0.0
        };

        info!(
            "Validation completed - Overall score: {}%, Passed: {}/{}",
            overall_score, passed_checks, total_checks
        );

        let summary = Self::generate_summary(&findings);
        ValidationReport {
            overall_score,
            total_checks,
            passed_checks,
            completeness_score: completeness_score(form),
            validation_details: findings,
            summary,
        }
    }

    fn generate_summary(findings: &[ValidationFinding]) -> String {
        let issues: Vec<&ValidationFinding> = findings.iter().filter(|f| !f.valid).collect();

        if issues.is_empty() {
            return "All validations passed successfully.".to_string();
        }

        let mut summary = format!("Found {} validation issues:\n", issues.len());
        for issue in issues.iter().take(SUMMARY_ISSUE_LIMIT) {
            summary.push_str(&format!("- {}: {}\n", issue.field, issue.message));
        }
        if issues.len() > SUMMARY_ISSUE_LIMIT {
            summary.push_str(&format!(
                "...and {} more issues.",
                issues.len() - SUMMARY_ISSUE_LIMIT
            ));
        }
        summary
    }
}

impl Default for ClaimValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
