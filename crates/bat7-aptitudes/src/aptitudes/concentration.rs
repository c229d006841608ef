use crate::Aptitude;

/// CON: Concentration. Derived from the attention subtest as the balance
/// between hits and errors.
pub struct Concentration;

impl Aptitude for Concentration {
    fn code(&self) -> &str {
        "CON"
    }

    fn name(&self) -> &str {
        "Concentration"
    }

    fn description(&self) -> &str {
        "Precision of attentional work: how many of the responses given are correct, \
         independent of speed."
    }

    fn high_characteristics(&self) -> &[&'static str] {
        &[
            "Works accurately with few errors",
            "Keeps precision steady over time",
            "Checks work before moving on",
        ]
    }

    fn low_characteristics(&self) -> &[&'static str] {
        &[
            "Error rate rises with speed",
            "Impulsive responses on detailed tasks",
            "Accuracy fluctuates within a session",
        ]
    }

    fn recommendation(&self) -> &str {
        "Train self-checking routines and favour accuracy over speed in practice tasks \
         before reintroducing time limits."
    }

    fn is_attention_type(&self) -> bool {
        true
    }
}
