//! # Draft Review Engine
//!
//! Style-conformance annotation for auto-generated content drafts.
//!
//! ## Architecture
//!
//! ```text
//! Style guide (text or bytes)
//!     │
//!     ├──> Decode (UTF-8, Latin-1 fallback)
//!     │
//!     ├──> Section splitting (# / ## headings)
//!     │
//!     └──> Signal extraction (bullets, speaker quotes)
//!          └─> StyleProfile { voice, themes, values, emotional_tone, relatability }
//!
//! Draft + StyleProfile
//!     │
//!     ├──> Chunking (# / ## / ### heading lines)
//!     │
//!     ├──> Case-insensitive substring check per dimension
//!     │
//!     └──> Annotated draft with MISALIGNMENT markers
//! ```
//!
//! Every entry point is a pure function of its inputs: no I/O, no shared state.
//!
//! ## Example
//!
//! ```rust
//! use draft_review_engine::{annotate, StyleProfileParser};
//!
//! let guide = concat!(
//!     "# Voice\n- calm\n# Themes\n- growth\n# Values\n- honesty\n",
//!     "# Emotional Tone\n- warm\n# Relatability\n- family\n",
//! );
//! let profile = StyleProfileParser::default().parse_str(guide).unwrap();
//!
//! let annotated = annotate("# Title\nJust a generic sentence.", &profile);
//! assert!(annotated.contains("<!-- MISALIGNMENT: Voice - review tone and style -->"));
//! ```

mod annotator;
mod config;
mod counter;
mod error;
mod profile;
mod sections;
mod signals;
mod types;

pub use annotator::{
    annotate, annotate_with_report, assess, misaligned_dimensions, render, render_marker,
    split_chunks, MARKER_CLOSE, MARKER_OPEN,
};
pub use config::{ParserConfig, DEFAULT_SPEAKER_PREFIX};
pub use counter::{count_markers, tally_markers};
pub use error::{EngineError, Result};
pub use profile::{decode_text, parse_style_profile, StyleProfileParser, TextEncoding};
pub use signals::SignalExtractor;
pub use types::{
    AnnotatedDraft, AnnotationStats, ChunkAssessment, ChunkKind, Dimension, StyleProfile,
};
