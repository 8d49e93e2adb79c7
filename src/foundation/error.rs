/// Convenience result type used across satcollage.
pub type SatResult<T> = Result<T, SatError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum SatError {
    /// Invalid request or settings; reported before any decode or canvas work starts.
    #[error("validation error: {0}")]
    Validation(String),

    /// A single source image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The finished canvas could not be encoded to the output artifact.
    #[error("encode error: {0}")]
    Encode(String),

    /// Canvas or text rendering failed.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SatError {
    /// Build a [`SatError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SatError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SatError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SatError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// True for errors reported before a build does any work.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
