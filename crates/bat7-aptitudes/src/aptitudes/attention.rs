use crate::Aptitude;

/// A: Attention. Speed and accuracy when scanning for target stimuli.
/// Produces the concentration index alongside the raw score.
pub struct Attention;

impl Aptitude for Attention {
    fn code(&self) -> &str {
        "A"
    }

    fn name(&self) -> &str {
        "Attention"
    }

    fn description(&self) -> &str {
        "Ability to focus on relevant stimuli quickly and accurately while ignoring \
         distractors."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Sustains focus on repetitive tasks",
            "Detects relevant details quickly",
            "Few omission errors under time pressure",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Easily distracted by irrelevant stimuli",
            "Misses details in visual search tasks",
            "Performance drops as tasks get longer",
        ]
    }

    fn recommendation(&self) -> &str {
        "Use short, structured work blocks with visual search and cancellation exercises, \
         increasing duration gradually."
    }

    fn is_attention_type(&self) -> bool {
        true
    }
}
