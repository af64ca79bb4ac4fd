use crate::models::{ClaimForm, ValidationFinding};

// Accepted gender values: Hebrew and English words plus single-letter
// abbreviations in both scripts.
const VALID_GENDERS: [&str; 8] = ["זכר", "נקבה", "male", "female", "M", "F", "ז", "נ"];

pub struct PersonalInfoValidator;

impl PersonalInfoValidator {
    pub fn validate(form: &ClaimForm) -> Vec<ValidationFinding> {
        let mut findings = Vec::new();

        // ID number is only checked when the extractor produced one
        if !form.id_number.is_empty() {
            let valid = Self::validate_id_number(&form.id_number);
            findings.push(ValidationFinding::new(
                "idNumber",
                form.id_number.clone(),
                valid,
                if valid {
                    "Valid Israeli ID format"
                } else {
                    "Invalid Israeli ID format"
                },
            ));
        }

        let has_first = !form.first_name.trim().is_empty();
        findings.push(ValidationFinding::new(
            "firstName",
            form.first_name.clone(),
            has_first,
            if has_first {
                "First name provided"
            } else {
                "First name missing"
            },
        ));

        let has_last = !form.last_name.trim().is_empty();
        findings.push(ValidationFinding::new(
            "lastName",
            form.last_name.clone(),
            has_last,
            if has_last {
                "Last name provided"
            } else {
                "Last name missing"
            },
        ));

        let valid_gender = VALID_GENDERS.contains(&form.gender.trim());
        findings.push(ValidationFinding::new(
            "gender",
            form.gender.clone(),
            valid_gender,
            if valid_gender {
                "Valid gender value"
            } else {
                "Invalid or missing gender"
            },
        ));

        findings
    }

    // Israeli ID: exactly 9 digits once separators are stripped. The weighted
    // mod-10 checksum is deliberately not enforced; see DESIGN.md.
    fn validate_id_number(id_number: &str) -> bool {
        let digits: String = id_number.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.len() == 9
    }
}
