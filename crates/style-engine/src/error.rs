use crate::types::Dimension;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that can occur while parsing style guides or loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// One or more dimensions ended up without any signals.
    ///
    /// Always carries every empty dimension, in check order.
    #[error("Missing content in sections: {}", join_headings(.missing))]
    MalformedProfile { missing: Vec<Dimension> },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document could not be read as JSON or TOML
    #[error("Config parse error: {0}")]
    ConfigParse(String),
}

impl EngineError {
    /// Create a malformed profile error
    pub fn malformed_profile(missing: Vec<Dimension>) -> Self {
        Self::MalformedProfile { missing }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a config parse error
    pub fn config_parse(msg: impl Into<String>) -> Self {
        Self::ConfigParse(msg.into())
    }

    /// Dimensions reported missing, empty for every other variant
    #[must_use]
    pub fn missing_dimensions(&self) -> &[Dimension] {
        match self {
            Self::MalformedProfile { missing } => missing,
            _ => &[],
        }
    }
}

fn join_headings(missing: &[Dimension]) -> String {
    missing
        .iter()
        .map(|dimension| dimension.heading())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_profile_names_every_dimension() {
        let err = EngineError::malformed_profile(vec![
            Dimension::EmotionalTone,
            Dimension::Relatability,
        ]);
        assert_eq!(
            err.to_string(),
            "Missing content in sections: Emotional Tone, Relatability"
        );
        assert_eq!(
            err.missing_dimensions(),
            &[Dimension::EmotionalTone, Dimension::Relatability]
        );
    }

    #[test]
    fn other_variants_report_no_missing_dimensions() {
        let err = EngineError::invalid_config("speaker_prefix must not be empty");
        assert!(err.missing_dimensions().is_empty());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: speaker_prefix must not be empty"
        );
    }
}
