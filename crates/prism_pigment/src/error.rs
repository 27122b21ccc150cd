//! Error types for prism_pigment.

/// Errors raised while turning untyped input into style parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PigmentError {
    #[error("Unsupported {kind} option '{value}' (expected one of: {expected})")]
    UnsupportedOption {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

pub type Result<T> = std::result::Result<T, PigmentError>;
