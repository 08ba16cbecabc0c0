use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Malformed name '{name}': {reason}")]
    MalformedName { name: String, reason: &'static str },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative magnitude for {what}: {value}")]
    NegativeMagnitude { what: &'static str, value: f64 },

    #[error("Phase position out of range: {position}")]
    PhaseOutOfRange { position: usize },
}
