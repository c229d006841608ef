use thiserror::Error;

#[derive(Debug, Error)]
pub enum AptitudeError {
    #[error("unknown aptitude: {0}")]
    UnknownAptitude(String),
}
