use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{ClaimForm, ValidationFinding};

lazy_static! {
    // H:MM, H.MM and H:MM:SS with a 1-2 digit hour
    static ref TIME_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"^\d{1,2}:\d{2}$").unwrap(),
        Regex::new(r"^\d{1,2}\.\d{2}$").unwrap(),
        Regex::new(r"^\d{1,2}:\d{2}:\d{2}$").unwrap(),
    ];
}

pub struct AccidentInfoValidator;

impl AccidentInfoValidator {
    pub fn validate(form: &ClaimForm) -> Vec<ValidationFinding> {
        let mut findings = Vec::new();

        // A usable accident description needs more than a couple of words
        let description = &form.accident_description;
        let adequate = description.trim().chars().count() > 10;
        findings.push(ValidationFinding::new(
            "accidentDescription",
            description.clone(),
            adequate,
            if adequate {
                "Adequate accident description"
            } else {
                "Missing or insufficient accident description"
            },
        ));

        let injured_part = &form.injured_body_part;
        let specified = !injured_part.trim().is_empty();
        findings.push(ValidationFinding::new(
            "injuredBodyPart",
            injured_part.clone(),
            specified,
            if specified {
                "Injured body part specified"
            } else {
                "Injured body part not specified"
            },
        ));

        if !form.time_of_injury.is_empty() {
            let valid = Self::validate_time_format(&form.time_of_injury);
            findings.push(ValidationFinding::new(
                "timeOfInjury",
                form.time_of_injury.clone(),
                valid,
                if valid {
                    "Valid time format"
                } else {
                    "Invalid time format"
                },
            ));
        }

        findings
    }

    fn validate_time_format(time: &str) -> bool {
        let trimmed = time.trim();
        TIME_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formats() {
        for time in ["8:30", "08:30", "8.15", "14:45:30", " 9:05 "] {
            assert!(
                AccidentInfoValidator::validate_time_format(time),
                "rejected {:?}",
                time
            );
        }
        for time in ["830", "8:5", "8h30", "123:45", "8.15.30", "morning"] {
            assert!(
                !AccidentInfoValidator::validate_time_format(time),
                "accepted {:?}",
                time
            );
        }
    }

    #[test]
    fn test_description_length_in_characters() {
        let form = ClaimForm {
            accident_description: "נפלתי מהסולם".to_string(),
            ..ClaimForm::default()
        };
        let findings = AccidentInfoValidator::validate(&form);
        assert!(findings[0].valid);

        // 7 characters but 13 bytes: the threshold counts characters
        let short = ClaimForm {
            accident_description: "כאב ביד".to_string(),
            ..ClaimForm::default()
        };
        let findings = AccidentInfoValidator::validate(&short);
        assert!(!findings[0].valid);
        assert_eq!(
            findings[0].message,
            "Missing or insufficient accident description"
        );
    }

    #[test]
    fn test_body_part_presence() {
        let form = ClaimForm {
            injured_body_part: "יד שמאל".to_string(),
            ..ClaimForm::default()
        };
        let findings = AccidentInfoValidator::validate(&form);
        assert!(findings[1].valid);
    }

    #[test]
    fn test_empty_time_skipped() {
        let findings = AccidentInfoValidator::validate(&ClaimForm::default());
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.field != "timeOfInjury"));
    }

    #[test]
    fn test_invalid_time_reported() {
        let form = ClaimForm {
            time_of_injury: "8h30".to_string(),
            ..ClaimForm::default()
        };
        let findings = AccidentInfoValidator::validate(&form);
        let time = findings.iter().find(|f| f.field == "timeOfInjury").unwrap();
        assert!(!time.valid);
        assert_eq!(time.message, "Invalid time format");
    }
}
