use thiserror::Error;

/// Errors raised by operations that refuse their input.
///
/// Missing hands and unknown shapes at the generator entry point are normal
/// states and never surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HoloError {
    #[error("target set is empty")]
    EmptyTargetSet,
    #[error("particle count must be greater than zero")]
    ZeroParticleCount,
    #[error("unknown shape identifier: {0}")]
    UnknownShape(String),
    #[error("invalid parameter: {0}")]
    InvalidParams(&'static str),
}

pub type Result<T> = std::result::Result<T, HoloError>;
