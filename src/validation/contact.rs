use crate::models::{ClaimForm, ValidationFinding};

pub struct ContactInfoValidator;

impl ContactInfoValidator {
    pub fn validate(form: &ClaimForm) -> Vec<ValidationFinding> {
        let mut findings = Vec::new();

        // Phones are conditional checks: absent numbers produce no finding
        if !form.landline_phone.is_empty() {
            let valid = Self::validate_phone(&form.landline_phone, false);
            findings.push(ValidationFinding::new(
                "landlinePhone",
                form.landline_phone.clone(),
                valid,
                if valid {
                    "Valid landline format"
                } else {
                    "Invalid landline format"
                },
            ));
        }

        if !form.mobile_phone.is_empty() {
            let valid = Self::validate_phone(&form.mobile_phone, true);
            findings.push(ValidationFinding::new(
                "mobilePhone",
                form.mobile_phone.clone(),
                valid,
                if valid {
                    "Valid mobile format"
                } else {
                    "Invalid mobile format"
                },
            ));
        }

        let address = &form.address;
        let has_street = !address.street.trim().is_empty();
        let has_city = !address.city.trim().is_empty();
        findings.push(ValidationFinding::new(
            "address",
            format!("{} {}, {}", address.street, address.house_number, address.city),
            has_street && has_city,
            if has_street && has_city {
                "Address has street and city"
            } else {
                "Incomplete address information"
            },
        ));

        findings
    }

    // Israeli phone numbering: mobile numbers are 9 digits starting with 5,
    // landlines are 8-9 digits under any other area code.
    fn validate_phone(phone: &str, is_mobile: bool) -> bool {
        let digits = Self::normalize_phone(phone);
        if is_mobile {
            digits.len() == 9 && digits.starts_with('5')
        } else {
            (digits.len() == 8 || digits.len() == 9) && !digits.starts_with('5')
        }
    }

    // Keep digits and '+', then drop one country-code prefix or trunk zero
    fn normalize_phone(phone: &str) -> String {
        let cleaned: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();

        if let Some(rest) = cleaned.strip_prefix("+972") {
            rest.to_string()
        } else if let Some(rest) = cleaned.strip_prefix("972") {
            rest.to_string()
        } else if let Some(rest) = cleaned.strip_prefix('0') {
            rest.to_string()
        } else {
            cleaned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    #[test]
    fn test_mobile_with_separator() {
        assert!(ContactInfoValidator::validate_phone("050-1234567", true));
    }

    #[test]
    fn test_mobile_with_country_code() {
        assert!(ContactInfoValidator::validate_phone("+972-50-1234567", true));
        assert!(ContactInfoValidator::validate_phone("972501234567", true));
    }

    #[test]
    fn test_mobile_wrong_length() {
        assert!(!ContactInfoValidator::validate_phone("050-123456", true));
    }

    #[test]
    fn test_landline_valid() {
        assert!(ContactInfoValidator::validate_phone("021234567", false));
        assert!(ContactInfoValidator::validate_phone("02-123-4567", false));
    }

    #[test]
    fn test_mobile_number_as_landline_rejected() {
        // A mobile prefix handed in as a landline fails the landline rule
        assert!(!ContactInfoValidator::validate_phone("0501234567", false));
    }

    #[test]
    fn test_landline_number_as_mobile_rejected() {
        assert!(!ContactInfoValidator::validate_phone("021234567", true));
    }

    #[test]
    fn test_empty_phones_skipped() {
        let findings = ContactInfoValidator::validate(&ClaimForm::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "address");
    }

    #[test]
    fn test_address_requires_street_and_city() {
        let form = ClaimForm {
            address: Address {
                street: "הרצל".to_string(),
                house_number: "12".to_string(),
                city: "תל אביב".to_string(),
                ..Address::default()
            },
            ..ClaimForm::default()
        };
        let findings = ContactInfoValidator::validate(&form);
        let finding = &findings[0];
        assert!(finding.valid);
        assert_eq!(finding.value, "הרצל 12, תל אביב");

        let incomplete = ClaimForm {
            address: Address {
                street: "הרצל".to_string(),
                ..Address::default()
            },
            ..ClaimForm::default()
        };
        let findings = ContactInfoValidator::validate(&incomplete);
        assert!(!findings[0].valid);
        assert_eq!(findings[0].message, "Incomplete address information");
    }
}
