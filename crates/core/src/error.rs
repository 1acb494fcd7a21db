#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A field is out of range or outside its closed category set.
    #[error("Invalid input: {field} {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Area was zero or non-finite when deriving per-area metrics.
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput { field, .. } => Some(*field),
            _ => None,
        }
    }
}
