//! Header-delimited sectioning of style guide documents.

use crate::types::Section;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

static FRONT_MATTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\A---\n.*?\n---\n").expect("valid front matter regex"));

static EMOJI_SHORTCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":[a-zA-Z_]+:").expect("valid shortcode regex"));

static SECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,2}\s+(.+)$").expect("valid heading regex"));

/// Remove a leading `---` delimited front-matter block, if any
pub(crate) fn strip_front_matter(text: &str) -> Cow<'_, str> {
    FRONT_MATTER.replace(text, "")
}

/// Remove every `:shortcode:` emoji token
pub(crate) fn strip_emoji_shortcodes(text: &str) -> Cow<'_, str> {
    EMOJI_SHORTCODE.replace_all(text, "")
}

/// Title of a level one or two heading line, if `line` is one
fn heading_title(line: &str) -> Option<&str> {
    SECTION_HEADING
        .captures(line.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Split a document into `(title, body)` sections after removing front matter.
///
/// Text before the first heading belongs to no section and is dropped.
pub(crate) fn split_sections(text: &str) -> Vec<Section> {
    split_sections_verbatim(&strip_front_matter(text))
}

/// Split a document into sections without touching front matter.
///
/// A heading on the final line with nothing after it opens no section.
pub(crate) fn split_sections_verbatim(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<(&str, Vec<&str>)> = None;

    for line in text.split('\n') {
        if let Some(title) = heading_title(line) {
            if let Some((prev_title, body)) = current.take() {
                sections.push(Section::new(prev_title, body.join("\n").trim()));
            }
            current = Some((title, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }

    if let Some((title, body)) = current.filter(|(_, body)| !body.is_empty()) {
        sections.push(Section::new(title, body.join("\n").trim()));
    }

    log::debug!("split {} sections", sections.len());
    sections
}
