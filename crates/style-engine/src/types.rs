use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the five fixed style categories a draft is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Voice,
    Themes,
    Values,
    EmotionalTone,
    Relatability,
}

impl Dimension {
    /// All dimensions in check order
    pub const ALL: [Self; 5] = [
        Self::Voice,
        Self::Themes,
        Self::Values,
        Self::EmotionalTone,
        Self::Relatability,
    ];

    /// Snake-case key used in serialized profiles
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Voice => "voice",
            Self::Themes => "themes",
            Self::Values => "values",
            Self::EmotionalTone => "emotional_tone",
            Self::Relatability => "relatability",
        }
    }

    /// Section title that introduces this dimension in a style guide
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Voice => "Voice",
            Self::Themes => "Themes",
            Self::Values => "Values",
            Self::EmotionalTone => "Emotional Tone",
            Self::Relatability => "Relatability",
        }
    }

    /// Map a section title to its dimension (exact, case-sensitive)
    #[must_use]
    pub fn from_heading(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dimension| dimension.heading() == title)
    }

    /// Short label written into misalignment markers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Voice => "Voice",
            Self::Themes => "Theme",
            Self::Values => "Values",
            Self::EmotionalTone => "Tone",
            Self::Relatability => "Relatability",
        }
    }

    /// Fixed remediation hint for reviewers
    #[must_use]
    pub const fn remediation(self) -> &'static str {
        match self {
            Self::Voice => "review tone and style",
            Self::Themes => "align with core topics",
            Self::Values => "incorporate key principles",
            Self::EmotionalTone => "adjust emotional resonance",
            Self::Relatability => "add personal connection",
        }
    }

    /// `"<label> - <remediation>"`, the note carried by a marker
    #[must_use]
    pub fn note(self) -> String {
        format!("{} - {}", self.label(), self.remediation())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Signals extracted from a style guide, one list per dimension.
///
/// Lists keep discovery order and are never deduplicated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleProfile {
    pub voice: Vec<String>,
    pub themes: Vec<String>,
    pub values: Vec<String>,
    pub emotional_tone: Vec<String>,
    pub relatability: Vec<String>,
}

impl StyleProfile {
    /// Signals for one dimension
    #[must_use]
    pub fn signals(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Voice => &self.voice,
            Dimension::Themes => &self.themes,
            Dimension::Values => &self.values,
            Dimension::EmotionalTone => &self.emotional_tone,
            Dimension::Relatability => &self.relatability,
        }
    }

    /// Mutable signals for one dimension
    pub fn signals_mut(&mut self, dimension: Dimension) -> &mut Vec<String> {
        match dimension {
            Dimension::Voice => &mut self.voice,
            Dimension::Themes => &mut self.themes,
            Dimension::Values => &mut self.values,
            Dimension::EmotionalTone => &mut self.emotional_tone,
            Dimension::Relatability => &mut self.relatability,
        }
    }

    /// Iterate dimensions with their signals in check order
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &[String])> + '_ {
        Dimension::ALL
            .into_iter()
            .map(move |dimension| (dimension, self.signals(dimension)))
    }

    /// Dimensions that have no signals, in check order
    #[must_use]
    pub fn empty_dimensions(&self) -> Vec<Dimension> {
        self.iter()
            .filter(|(_, signals)| signals.is_empty())
            .map(|(dimension, _)| dimension)
            .collect()
    }

    /// Total number of signals across all dimensions
    #[must_use]
    pub fn total_signals(&self) -> usize {
        self.iter().map(|(_, signals)| signals.len()).sum()
    }
}

/// A titled block of a style guide
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Section {
    /// Heading text without `#` markers
    pub title: String,

    /// Lines up to the next heading, joined and trimmed
    pub body: String,
}

impl Section {
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Kind of a draft chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// A single heading line, passed through untouched
    Heading,

    /// A run of non-heading lines, checked against the profile
    Body,
}

/// Result of checking one draft chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkAssessment {
    pub kind: ChunkKind,

    /// Trimmed chunk text
    pub text: String,

    /// Dimensions with no matching signal, in check order
    pub flagged: Vec<Dimension>,
}

impl ChunkAssessment {
    #[must_use]
    pub const fn heading(text: String) -> Self {
        Self {
            kind: ChunkKind::Heading,
            text,
            flagged: Vec::new(),
        }
    }

    #[must_use]
    pub const fn body(text: String, flagged: Vec<Dimension>) -> Self {
        Self {
            kind: ChunkKind::Body,
            text,
            flagged,
        }
    }

    #[must_use]
    pub fn is_aligned(&self) -> bool {
        self.flagged.is_empty()
    }
}

/// Annotated text together with the per-chunk assessments it was rendered from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedDraft {
    pub text: String,
    pub chunks: Vec<ChunkAssessment>,
}

/// Summary of an annotation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationStats {
    pub total_chunks: usize,
    pub body_chunks: usize,
    pub flagged_chunks: usize,
    pub total_markers: usize,
    pub per_dimension: BTreeMap<Dimension, usize>,
}

impl AnnotationStats {
    #[must_use]
    pub fn from_chunks(chunks: &[ChunkAssessment]) -> Self {
        let mut stats = Self {
            total_chunks: chunks.len(),
            ..Self::default()
        };

        for chunk in chunks.iter().filter(|c| c.kind == ChunkKind::Body) {
            stats.body_chunks += 1;
            if !chunk.is_aligned() {
                stats.flagged_chunks += 1;
            }
            stats.total_markers += chunk.flagged.len();
            for dimension in &chunk.flagged {
                *stats.per_dimension.entry(*dimension).or_insert(0) += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_lookup_is_exact() {
        assert_eq!(Dimension::from_heading("Voice"), Some(Dimension::Voice));
        assert_eq!(
            Dimension::from_heading("Emotional Tone"),
            Some(Dimension::EmotionalTone)
        );
        assert_eq!(Dimension::from_heading("voice"), None);
        assert_eq!(Dimension::from_heading("Emotional tone"), None);
        assert_eq!(Dimension::from_heading("Theme"), None);
    }

    #[test]
    fn test_notes() {
        let notes: Vec<String> = Dimension::ALL.into_iter().map(Dimension::note).collect();
        assert_eq!(
            notes,
            vec![
                "Voice - review tone and style",
                "Theme - align with core topics",
                "Values - incorporate key principles",
                "Tone - adjust emotional resonance",
                "Relatability - add personal connection",
            ]
        );
    }

    #[test]
    fn test_profile_serializes_with_snake_case_keys() {
        let profile = StyleProfile {
            emotional_tone: vec!["warm".to_string()],
            ..StyleProfile::default()
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["emotional_tone"][0], "warm");
        assert!(json["voice"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_dimensions_in_check_order() {
        let mut profile = StyleProfile::default();
        profile.signals_mut(Dimension::Themes).push("growth".into());
        profile.signals_mut(Dimension::Values).push("honesty".into());

        assert_eq!(
            profile.empty_dimensions(),
            vec![
                Dimension::Voice,
                Dimension::EmotionalTone,
                Dimension::Relatability
            ]
        );
        assert_eq!(profile.total_signals(), 2);
    }

    #[test]
    fn test_stats_ignore_headings() {
        let chunks = vec![
            ChunkAssessment::heading("# Title".into()),
            ChunkAssessment::body("aligned".into(), vec![]),
            ChunkAssessment::body(
                "off".into(),
                vec![Dimension::Voice, Dimension::Relatability],
            ),
        ];
        let stats = AnnotationStats::from_chunks(&chunks);

        assert_eq!(stats.total_chunks, 3);
        assert_eq!(stats.body_chunks, 2);
        assert_eq!(stats.flagged_chunks, 1);
        assert_eq!(stats.total_markers, 2);
        assert_eq!(stats.per_dimension.get(&Dimension::Voice), Some(&1));
        assert_eq!(stats.per_dimension.get(&Dimension::Themes), None);
    }
}
