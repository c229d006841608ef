pub mod aptitude_code;
pub mod patient;
pub mod result;

pub use aptitude_code::AptitudeCode;
pub use patient::{Gender, PatientIdentity};
pub use result::ResultRecord;
