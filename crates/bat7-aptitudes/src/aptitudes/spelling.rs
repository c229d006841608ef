use crate::Aptitude;

/// O: Spelling. Detection of misspelled words.
pub struct Spelling;

impl Aptitude for Spelling {
    fn code(&self) -> &str {
        "O"
    }

    fn name(&self) -> &str {
        "Spelling"
    }

    fn description(&self) -> &str {
        "Knowledge of spelling rules and ability to detect misspelled words."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Writes with few spelling errors",
            "Spots errors when proofreading",
            "Has internalized spelling rules",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Frequent spelling errors in written work",
            "Misses errors when reviewing text",
            "Inconsistent application of spelling rules",
        ]
    }

    fn recommendation(&self) -> &str {
        "Practice dictation and proofreading, and keep a personal list of frequently \
         misspelled words."
    }
}
