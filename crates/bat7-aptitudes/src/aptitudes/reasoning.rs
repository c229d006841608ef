use crate::Aptitude;

/// R: Abstract reasoning. Inductive reasoning over series of figures.
pub struct Reasoning;

impl Aptitude for Reasoning {
    fn code(&self) -> &str {
        "R"
    }

    fn name(&self) -> &str {
        "Reasoning"
    }

    fn description(&self) -> &str {
        "Ability to identify rules and patterns in abstract material and apply them to \
         new situations."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Discovers underlying rules quickly",
            "Transfers solutions to new problems",
            "Handles novel, unstructured problems well",
            "Thinks systematically about alternatives",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Difficulty inferring rules from examples",
            "Prefers familiar, concrete procedures",
            "Needs worked examples before tackling new problems",
        ]
    }

    fn recommendation(&self) -> &str {
        "Work through series completion and logic puzzles, verbalizing the rule found at \
         each step."
    }
}
