use crate::Aptitude;

/// E: Spatial aptitude. Mental rotation and manipulation of figures.
pub struct Spatial;

impl Aptitude for Spatial {
    fn code(&self) -> &str {
        "E"
    }

    fn name(&self) -> &str {
        "Spatial Aptitude"
    }

    fn description(&self) -> &str {
        "Ability to visualize, rotate and manipulate objects and figures mentally in two \
         and three dimensions."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Visualizes objects from different perspectives",
            "Reads maps, plans and diagrams with ease",
            "Solves assembly and layout problems quickly",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Difficulty imagining rotated or unfolded figures",
            "Relies on step-by-step instructions for assembly tasks",
            "Slower orientation in unfamiliar spaces",
        ]
    }

    fn recommendation(&self) -> &str {
        "Practice with puzzles, construction games and mental rotation exercises, \
         progressing from 2D to 3D figures."
    }
}
