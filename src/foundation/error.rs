/// Result alias used by every fallible scrollscape API.
pub type ScrollResult<T> = Result<T, ScrollError>;

/// Error taxonomy. Progress math itself never fails; these cover configuration and I/O.
#[derive(thiserror::Error, Debug)]
pub enum ScrollError {
    /// Out-of-range or non-finite input (viewports, damping, easing names, envelopes).
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed timeline windows, stops or staggers.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// A scene config that cannot be evaluated (bad ids, activation, property/profile kinds).
    #[error("scene error: {0}")]
    Scene(String),

    /// JSON (de)serialization failures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollError {
    /// Build a [`ScrollError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollError::Timeline`] value.
    pub fn timeline(msg: impl Into<String>) -> Self {
        Self::Timeline(msg.into())
    }

    /// Build a [`ScrollError::Scene`] value.
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene(msg.into())
    }

    /// Build a [`ScrollError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
