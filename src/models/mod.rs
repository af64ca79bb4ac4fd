pub mod data;
pub mod report;

pub use data::{Address, ClaimForm, DateField, MedicalInstitutionFields};
pub use report::{ValidationFinding, ValidationReport};
