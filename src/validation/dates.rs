use chrono::{Datelike, Local, NaiveDate};

use crate::models::{ClaimForm, DateField, ValidationFinding};

pub struct DateValidator;

impl DateValidator {
    pub fn validate(form: &ClaimForm) -> Vec<ValidationFinding> {
        let date_fields: [(&str, &str, &DateField); 4] = [
            ("dateOfBirth", "Date of birth", &form.date_of_birth),
            ("dateOfInjury", "Date of injury", &form.date_of_injury),
            ("formFillingDate", "Form filling date", &form.form_filling_date),
            (
                "formReceiptDateAtClinic",
                "Form receipt date",
                &form.form_receipt_date_at_clinic,
            ),
        ];

        let mut findings = Vec::new();
        for (field, label, date) in date_fields {
            let (valid, verdict) = Self::check_date(date);
            findings.push(ValidationFinding::new(
                field,
                date.render(),
                valid,
                format!("{}: {}", label, verdict),
            ));
        }
        findings
    }

    fn check_date(date: &DateField) -> (bool, &'static str) {
        if date.day.is_empty() || date.month.is_empty() || date.year.is_empty() {
            return (false, "Incomplete date information");
        }

        let (day, month, year) = match (
            date.day.trim().parse::<i64>(),
            date.month.trim().parse::<i64>(),
            date.year.trim().parse::<i64>(),
        ) {
            (Ok(d), Ok(m), Ok(y)) => (d, m, y),
            _ => return (false, "Invalid date format"),
        };

        if !(1..=31).contains(&day) {
            return (false, "Invalid day");
        }
        if !(1..=12).contains(&month) {
            return (false, "Invalid month");
        }
        let current_year = i64::from(Local::now().year());
        if !(1900..=current_year + 1).contains(&year) {
            return (false, "Invalid year");
        }

        // Ranges alone allow dates like 31/4; the calendar has the last word
        match NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32) {
            Some(_) => (true, "Valid date"),
            None => (false, "Invalid date format"),
        }
    }
}
