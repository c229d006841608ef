//! Data directory layout.
//!
//! Pure string functions. These define where the file-backed store keeps
//! each patient's results relative to the configured data directory.

use uuid::Uuid;

pub const RESULTS_DIR: &str = "results";

pub fn results(patient_id: Uuid) -> String {
    format!("{RESULTS_DIR}/{patient_id}.json")
}

/// Parse the patient id back out of a results file name (`<uuid>.json`).
pub fn patient_id_from_file_name(file_name: &str) -> Option<Uuid> {
    let stem = file_name.strip_suffix(".json")?;
    Uuid::parse_str(stem).ok()
}
