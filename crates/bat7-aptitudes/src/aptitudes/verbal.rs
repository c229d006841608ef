use crate::Aptitude;

/// V: Verbal aptitude. Understanding of verbal concepts and relations
/// between words (analogies, synonyms, antonyms).
pub struct Verbal;

impl Aptitude for Verbal {
    fn code(&self) -> &str {
        "V"
    }

    fn name(&self) -> &str {
        "Verbal Aptitude"
    }

    fn description(&self) -> &str {
        "Ability to understand verbal concepts and to reason with the meaning of words, \
         including analogies, synonyms and antonyms."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Grasps abstract verbal concepts quickly",
            "Broad, precise vocabulary",
            "Expresses ideas clearly in speech and writing",
            "Readily identifies relationships between words",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Difficulty understanding complex written instructions",
            "Limited working vocabulary",
            "Struggles to identify analogies between concepts",
            "May need ideas restated in concrete terms",
        ]
    }

    fn recommendation(&self) -> &str {
        "Encourage daily reading with vocabulary tracking and practice with analogy and \
         synonym exercises."
    }
}
