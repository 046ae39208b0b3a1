use std::fmt;

/// Errors while parsing a form definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// The definition is missing a required top-level member.
    MissingField { field: String },
    /// A field entry is malformed.
    FieldError { id: String, message: String },
    /// The definition structure is invalid.
    InvalidDefinition(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingField { field } => {
                write!(f, "definition missing required field: '{}'", field)
            }
            FormError::FieldError { id, message } => {
                write!(f, "field '{}': {}", id, message)
            }
            FormError::InvalidDefinition(msg) => {
                write!(f, "invalid definition: {}", msg)
            }
        }
    }
}

impl std::error::Error for FormError {}
