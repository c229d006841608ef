use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid aptitude code: {0:?}")]
    InvalidAptitudeCode(String),
}
