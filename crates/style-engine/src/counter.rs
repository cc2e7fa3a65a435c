use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static MARKER_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s*MISALIGNMENT:").expect("valid marker regex"));

/// Count existing misalignment markers in a document
#[must_use]
pub fn count_markers(text: &str) -> usize {
    MARKER_TOKEN.find_iter(text).count()
}

/// Marker counts keyed by file name.
///
/// A name seen twice keeps the count of its last document.
pub fn tally_markers<'a, I>(documents: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    documents
        .into_iter()
        .map(|(name, text)| (name.to_string(), count_markers(text)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotator::render_marker;
    use crate::types::Dimension;

    #[test]
    fn test_count_markers() {
        let blog = "# Blog Post\n<!-- MISALIGNMENT: Voice - too formal -->\nContent here\n\
                    <!-- MISALIGNMENT: Values - missing key point -->\nMore content";
        assert_eq!(count_markers(blog), 2);
        assert_eq!(count_markers("<!--MISALIGNMENT: tight -->"), 1);
        assert_eq!(count_markers("<!-- note -->\nMISALIGNMENT: bare"), 0);
        assert_eq!(count_markers(""), 0);
    }

    #[test]
    fn test_counts_rendered_markers() {
        let text = Dimension::ALL
            .into_iter()
            .map(render_marker)
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(count_markers(&text), 5);
    }

    #[test]
    fn test_tally_markers() {
        let tally = tally_markers([
            ("social_kit.md", "<!-- MISALIGNMENT: Tone -->\n<!-- MISALIGNMENT: Theme -->"),
            ("blog_post.md", "<!-- MISALIGNMENT: Voice -->"),
            ("clean.md", "all good"),
        ]);
        assert_eq!(
            tally.into_iter().collect::<Vec<_>>(),
            vec![
                ("blog_post.md".to_string(), 1),
                ("clean.md".to_string(), 0),
                ("social_kit.md".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_tally_last_name_wins() {
        let tally = tally_markers([
            ("draft.md", "<!-- MISALIGNMENT: Voice -->"),
            ("draft.md", "clean"),
        ]);
        assert_eq!(tally.get("draft.md"), Some(&0));
    }
}
