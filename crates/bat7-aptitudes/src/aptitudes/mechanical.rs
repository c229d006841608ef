use crate::Aptitude;

/// M: Mechanical aptitude. Understanding of physical and mechanical
/// principles from everyday situations.
pub struct Mechanical;

impl Aptitude for Mechanical {
    fn code(&self) -> &str {
        "M"
    }

    fn name(&self) -> &str {
        "Mechanical Aptitude"
    }

    fn description(&self) -> &str {
        "Understanding of basic physical and mechanical principles such as levers, \
         pulleys, gears and forces."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Predicts how mechanisms will behave",
            "Understands cause and effect in physical systems",
            "Learns to operate tools and machines quickly",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Difficulty anticipating the effect of forces",
            "Less familiar with how everyday machines work",
            "Needs demonstrations to understand mechanisms",
        ]
    }

    fn recommendation(&self) -> &str {
        "Explore hands-on activities with simple machines and discuss the physical \
         principle behind each one."
    }
}
