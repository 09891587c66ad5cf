/// Convenience result type used across fishplot.
pub type FishResult<T> = Result<T, FishError>;

/// Top-level error taxonomy used by the plotting APIs.
#[derive(thiserror::Error, Debug)]
pub enum FishError {
    /// Invalid user-provided data (fractions, parents, colors) or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a drawing surface or rasterizer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing input documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FishError {
    /// Build a [`FishError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FishError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FishError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
