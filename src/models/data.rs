use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Extracted claim form record. Every leaf is a string and defaults to empty;
// the extractor may legitimately hand back a record with any subset filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClaimForm {
    #[serde(deserialize_with = "de_lenient_string")]
    pub last_name: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub first_name: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub id_number: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub gender: String,
    #[serde(deserialize_with = "de_lenient_object")]
    pub date_of_birth: DateField,
    #[serde(deserialize_with = "de_lenient_object")]
    pub address: Address,
    #[serde(deserialize_with = "de_lenient_string")]
    pub landline_phone: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub mobile_phone: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub job_type: String,
    #[serde(deserialize_with = "de_lenient_object")]
    pub date_of_injury: DateField,
    #[serde(deserialize_with = "de_lenient_string")]
    pub time_of_injury: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub accident_location: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub accident_address: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub accident_description: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub injured_body_part: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub signature: String,
    #[serde(deserialize_with = "de_lenient_object")]
    pub form_filling_date: DateField,
    #[serde(deserialize_with = "de_lenient_object")]
    pub form_receipt_date_at_clinic: DateField,
    #[serde(deserialize_with = "de_lenient_object")]
    pub medical_institution_fields: MedicalInstitutionFields,
}

/// A form date as three raw strings, exactly as they were read off the
/// document. Interpretation happens in validation, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateField {
    #[serde(deserialize_with = "de_lenient_string")]
    pub day: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub month: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub year: String,
}

impl DateField {
    // Display rendering keeps the raw strings, no zero padding
    pub fn render(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    #[serde(deserialize_with = "de_lenient_string")]
    pub street: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub house_number: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub entrance: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub apartment: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub city: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub postal_code: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub po_box: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MedicalInstitutionFields {
    #[serde(deserialize_with = "de_lenient_string")]
    pub health_fund_member: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub nature_of_accident: String,
    #[serde(deserialize_with = "de_lenient_string")]
    pub medical_diagnoses: String,
}

// The language model occasionally returns numbers or nulls where the schema
// says string. Coerce scalars, default everything else, never error.
fn de_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

// Same lenience for nested objects: a non-object value becomes the empty
// default rather than a deserialization failure.
fn de_lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).unwrap_or_default())
    } else {
        Ok(T::default())
    }
}
