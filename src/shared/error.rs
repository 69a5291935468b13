// src/shared/error.rs

/// Caller-facing classification shared by every use case error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    Internal,
}

/// Implemented by use case errors so route handlers can render them uniformly.
pub trait ClassifiedError {
    fn kind(&self) -> ErrorKind;

    /// Stable machine-readable code for the JSON envelope.
    fn code(&self) -> &'static str;
}
