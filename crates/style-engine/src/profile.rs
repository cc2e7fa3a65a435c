use crate::config::ParserConfig;
use crate::error::{EngineError, Result};
use crate::sections::{split_sections, split_sections_verbatim, strip_emoji_shortcodes};
use crate::signals::SignalExtractor;
use crate::types::{Dimension, StyleProfile};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Encoding hint for raw style guide bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// UTF-8, falling back to Latin-1 on invalid input
    #[default]
    Utf8,

    /// Single-byte Latin-1
    Latin1,
}

/// Decode raw bytes. Never fails: invalid UTF-8 is read as Latin-1.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> Cow<'_, str> {
    match encoding {
        TextEncoding::Utf8 => match std::str::from_utf8(bytes) {
            Ok(text) => Cow::Borrowed(text),
            Err(err) => {
                log::warn!("style guide is not valid UTF-8 ({err}), decoding as Latin-1");
                Cow::Owned(decode_latin1(bytes))
            }
        },
        TextEncoding::Latin1 => Cow::Owned(decode_latin1(bytes)),
    }
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Turns style guide documents into a [`StyleProfile`]
#[derive(Debug, Clone)]
pub struct StyleProfileParser {
    config: ParserConfig,
    extractor: SignalExtractor,
}

impl Default for StyleProfileParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl StyleProfileParser {
    /// Create a new parser with configuration
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        let extractor = SignalExtractor::new(config.speaker_prefix.clone());
        Self { config, extractor }
    }

    /// Create a parser from configuration, validating it first
    pub fn try_new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse raw bytes, decoding as UTF-8 with Latin-1 fallback
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<StyleProfile> {
        self.parse_bytes_with(bytes, TextEncoding::Utf8)
    }

    /// Parse raw bytes with an explicit encoding hint
    pub fn parse_bytes_with(&self, bytes: &[u8], encoding: TextEncoding) -> Result<StyleProfile> {
        self.parse_str(&decode_text(bytes, encoding))
    }

    /// Parse a decoded style guide
    pub fn parse_str(&self, content: &str) -> Result<StyleProfile> {
        let content = if self.config.strip_emoji_shortcodes {
            strip_emoji_shortcodes(content)
        } else {
            Cow::Borrowed(content)
        };
        let sections = if self.config.strip_front_matter {
            split_sections(&content)
        } else {
            split_sections_verbatim(&content)
        };

        let mut profile = StyleProfile::default();
        for section in sections {
            let Some(dimension) = Dimension::from_heading(&section.title) else {
                log::debug!("ignoring section {:?}", section.title);
                continue;
            };

            // A repeated heading replaces the earlier one's signals.
            let signals = self.extractor.extract(&section.body);
            log::debug!("{dimension}: {} signals", signals.len());
            *profile.signals_mut(dimension) = signals;
        }

        if self.config.require_all_dimensions {
            let missing = profile.empty_dimensions();
            if !missing.is_empty() {
                return Err(EngineError::malformed_profile(missing));
            }
        }

        Ok(profile)
    }
}

/// Parse a style guide with the default configuration
pub fn parse_style_profile(content: &str) -> Result<StyleProfile> {
    StyleProfileParser::default().parse_str(content)
}
