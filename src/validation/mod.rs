pub mod accident;
pub mod completeness;
pub mod contact;
pub mod dates;
pub mod personal;
pub mod validator;

pub use accident::AccidentInfoValidator;
pub use contact::ContactInfoValidator;
pub use dates::DateValidator;
pub use personal::PersonalInfoValidator;
pub use validator::ClaimValidator;
