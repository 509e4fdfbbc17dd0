use thiserror::Error;

/// Failures surfaced by the synthesis core.
///
/// The core validates its inputs eagerly and fails before any evaluation;
/// the pure numeric computation itself has no recoverable failure modes.
#[derive(Error, Debug)]
pub enum RippleError {
    /// Ill-formed grid resolution or domain bounds.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
