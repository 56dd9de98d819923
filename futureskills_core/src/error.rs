//! Error taxonomy shared by the registry, catalog, store and engine.

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrientationError {
    /// Bad name, rating out of range, unknown competency key or malformed catalog entry
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Lookup by name (or list position) that does not exist
    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },
}

impl OrientationError {
    pub fn validation(message: impl Into<String>) -> Self {
        OrientationError::Validation(message.into())
    }

    pub fn not_found(kind: &'static str, name: impl Into<String>) -> Self {
        OrientationError::NotFound {
            kind,
            name: name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrientationError>;
