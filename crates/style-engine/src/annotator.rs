//! Revision annotation of drafts against a [`StyleProfile`].
//!
//! A draft is cut into chunks around every level 1-3 heading line. Heading
//! chunks pass through untouched; every other chunk is checked against each
//! dimension's signals with a case-insensitive substring test and receives one
//! marker line per dimension that has no match.

use crate::types::{AnnotatedDraft, ChunkAssessment, ChunkKind, Dimension, StyleProfile};
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening token of every misalignment marker
pub const MARKER_OPEN: &str = "<!-- MISALIGNMENT:";

/// Closing token of every misalignment marker
pub const MARKER_CLOSE: &str = "-->";

static DRAFT_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,3}\s+\S").expect("valid draft heading regex"));

/// Marker line for one misaligned dimension
#[must_use]
pub fn render_marker(dimension: Dimension) -> String {
    format!("{MARKER_OPEN} {} {MARKER_CLOSE}", dimension.note())
}

fn is_heading_line(line: &str) -> bool {
    DRAFT_HEADING.is_match(line)
}

/// Cut a draft into heading and body chunks, dropping blank runs.
///
/// Unlike style guide sectioning, text before the first heading is kept as
/// its own chunk.
pub fn split_chunks(draft: &str) -> Vec<(ChunkKind, &str)> {
    fn flush<'a>(
        draft: &'a str,
        run: &mut Option<(usize, usize)>,
        out: &mut Vec<(ChunkKind, &'a str)>,
    ) {
        if let Some((start, end)) = run.take() {
            let text = draft[start..end].trim();
            if !text.is_empty() {
                out.push((ChunkKind::Body, text));
            }
        }
    }

    let mut chunks = Vec::new();
    let mut run: Option<(usize, usize)> = None;
    let mut offset = 0;

    for line in draft.split('\n') {
        let start = offset;
        let end = start + line.len();
        offset = end + 1;

        if is_heading_line(line) {
            flush(draft, &mut run, &mut chunks);
            chunks.push((ChunkKind::Heading, line.trim()));
        } else {
            run = Some(run.map_or((start, end), |(run_start, _)| (run_start, end)));
        }
    }
    flush(draft, &mut run, &mut chunks);

    chunks
}

/// Dimensions with no signal found in `text`, in check order.
///
/// A dimension without signals is never flagged.
#[must_use]
pub fn misaligned_dimensions(text: &str, profile: &StyleProfile) -> Vec<Dimension> {
    let haystack = text.to_lowercase();
    profile
        .iter()
        .filter(|(_, signals)| {
            !signals.is_empty()
                && !signals
                    .iter()
                    .any(|signal| haystack.contains(&signal.to_lowercase()))
        })
        .map(|(dimension, _)| dimension)
        .collect()
}

/// Check every chunk of a draft without rendering
#[must_use]
pub fn assess(draft: &str, profile: &StyleProfile) -> Vec<ChunkAssessment> {
    split_chunks(draft)
        .into_iter()
        .map(|(kind, text)| match kind {
            ChunkKind::Heading => ChunkAssessment::heading(text.to_string()),
            ChunkKind::Body => {
                let flagged = misaligned_dimensions(text, profile);
                log::debug!(
                    "chunk of {} bytes: {} misaligned dimensions",
                    text.len(),
                    flagged.len()
                );
                ChunkAssessment::body(text.to_string(), flagged)
            }
        })
        .collect()
}

/// Render assessed chunks into annotated text
#[must_use]
pub fn render(chunks: &[ChunkAssessment]) -> String {
    chunks
        .iter()
        .map(|chunk| {
            if chunk.flagged.is_empty() {
                return chunk.text.clone();
            }
            let markers: Vec<String> = chunk.flagged.iter().copied().map(render_marker).collect();
            format!("{}\n{}", markers.join("\n"), chunk.text)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Annotate a draft, returning new text with markers inserted
#[must_use]
pub fn annotate(draft: &str, profile: &StyleProfile) -> String {
    render(&assess(draft, profile))
}

/// Annotate a draft and keep the per-chunk assessments
#[must_use]
pub fn annotate_with_report(draft: &str, profile: &StyleProfile) -> AnnotatedDraft {
    let chunks = assess(draft, profile);
    AnnotatedDraft {
        text: render(&chunks),
        chunks,
    }
}
