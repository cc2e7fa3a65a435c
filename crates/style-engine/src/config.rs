use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Default prefix for quoted-speaker lines in a style guide
pub const DEFAULT_SPEAKER_PREFIX: &str = "Speaker 1:";

/// Configuration for style guide parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    /// Line prefix that marks a quoted example from the speaker
    pub speaker_prefix: String,

    /// Drop a leading `---` front-matter block before splitting
    pub strip_front_matter: bool,

    /// Remove `:shortcode:` emoji tokens before splitting
    pub strip_emoji_shortcodes: bool,

    /// Fail when any dimension has no signals
    pub require_all_dimensions: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            speaker_prefix: DEFAULT_SPEAKER_PREFIX.to_string(),
            strip_front_matter: true,
            strip_emoji_shortcodes: false,
            require_all_dimensions: true,
        }
    }
}

impl ParserConfig {
    /// Every dimension must carry at least one signal
    pub fn strict() -> Self {
        Self::default()
    }

    /// Empty dimensions are allowed and never flagged by the annotator
    pub fn lenient() -> Self {
        Self {
            require_all_dimensions: false,
            ..Self::default()
        }
    }

    /// Load a config document, trying JSON first and TOML second
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let config = match serde_json::from_slice::<Self>(bytes) {
            Ok(config) => config,
            Err(json_err) => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|err| EngineError::config_parse(format!("{json_err}; {err}")))?;
                toml::from_str::<Self>(text).map_err(|toml_err| {
                    EngineError::config_parse(format!(
                        "not valid JSON ({json_err}); TOML parse error: {toml_err}"
                    ))
                })?
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.speaker_prefix.trim().is_empty() {
            return Err(EngineError::invalid_config(
                "speaker_prefix must not be empty",
            ));
        }

        if self.speaker_prefix.starts_with(['-', '*']) {
            return Err(EngineError::invalid_config(format!(
                "speaker_prefix ({:?}) cannot start with a bullet marker",
                self.speaker_prefix
            )));
        }

        Ok(())
    }
}
