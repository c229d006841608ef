use crate::Aptitude;

/// N: Numerical aptitude. Quantitative reasoning and problem solving.
pub struct Numerical;

impl Aptitude for Numerical {
    fn code(&self) -> &str {
        "N"
    }

    fn name(&self) -> &str {
        "Numerical Aptitude"
    }

    fn description(&self) -> &str {
        "Ability to reason with numbers, understand quantitative relationships and solve \
         arithmetic problems."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Solves numerical problems quickly and accurately",
            "Understands quantitative relationships",
            "Comfortable with estimation and mental arithmetic",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Difficulty with multi-step arithmetic problems",
            "Relies on calculators for simple operations",
            "Struggles to translate word problems into operations",
        ]
    }

    fn recommendation(&self) -> &str {
        "Reinforce basic operations and practice word problems that require choosing the \
         right operation before calculating."
    }
}
