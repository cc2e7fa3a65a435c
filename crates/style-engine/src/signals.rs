use crate::config::DEFAULT_SPEAKER_PREFIX;

/// Opening and closing characters of the quote pairs stripped from speaker lines
const QUOTE_PAIRS: [(char, char); 4] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
];

/// Pulls signal strings out of a section body
#[derive(Debug, Clone)]
pub struct SignalExtractor {
    speaker_prefix: String,
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SPEAKER_PREFIX)
    }
}

impl SignalExtractor {
    #[must_use]
    pub fn new(speaker_prefix: impl Into<String>) -> Self {
        Self {
            speaker_prefix: speaker_prefix.into(),
        }
    }

    /// Extract bullet items and speaker quotes in document order
    pub fn extract(&self, body: &str) -> Vec<String> {
        body.split('\n')
            .filter_map(|line| self.extract_line(line.trim()))
            .collect()
    }

    fn extract_line(&self, line: &str) -> Option<String> {
        if let Some(rest) = line.strip_prefix(['-', '*']) {
            return non_empty(rest.trim());
        }

        if let Some(rest) = line.strip_prefix(self.speaker_prefix.as_str()) {
            return non_empty(strip_enclosing_quotes(rest.trim()));
        }

        None
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Strip one layer of matching straight or curly quotes
fn strip_enclosing_quotes(text: &str) -> &str {
    let mut chars = text.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return text;
    };

    if QUOTE_PAIRS.contains(&(first, last)) {
        &text[first.len_utf8()..text.len() - last.len_utf8()]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(body: &str) -> Vec<String> {
        SignalExtractor::default().extract(body)
    }

    #[test]
    fn test_bullets_and_quotes_interleaved() {
        let body = "- Clear and concise\nSpeaker 1: \"Keep it simple\"\n* Warm\nplain prose";
        assert_eq!(
            extract(body),
            vec!["Clear and concise", "Keep it simple", "Warm"]
        );
    }

    #[test]
    fn test_empty_bullets_dropped() {
        assert_eq!(extract("-\n*   \n- kept"), vec!["kept"]);
    }

    #[test]
    fn test_indented_lines_are_trimmed() {
        assert_eq!(extract("    - nested item   "), vec!["nested item"]);
    }

    #[test]
    fn test_curly_and_single_quotes() {
        let body = "Speaker 1: \u{201C}Be kind\u{201D}\nSpeaker 1: 'Stay curious'\nSpeaker 1: \u{2018}Own it\u{2019}";
        assert_eq!(extract(body), vec!["Be kind", "Stay curious", "Own it"]);
    }

    #[test]
    fn test_only_one_quote_layer_stripped() {
        assert_eq!(extract("Speaker 1: \"'nested'\""), vec!["'nested'"]);
    }

    #[test]
    fn test_mismatched_quotes_kept() {
        assert_eq!(extract("Speaker 1: \"half open"), vec!["\"half open"]);
        assert_eq!(extract("Speaker 1: \"odd'"), vec!["\"odd'"]);
    }

    #[test]
    fn test_empty_quote_dropped() {
        assert!(extract("Speaker 1: \"\"").is_empty());
        assert!(extract("Speaker 1:").is_empty());
    }

    #[test]
    fn test_lone_quote_char_kept() {
        assert_eq!(extract("Speaker 1: \""), vec!["\""]);
    }

    #[test]
    fn test_other_speakers_ignored() {
        assert!(extract("Speaker 2: \"not ours\"").is_empty());
    }

    #[test]
    fn test_custom_prefix() {
        let extractor = SignalExtractor::new("Host:");
        assert_eq!(
            extractor.extract("Host: \"welcome\"\nSpeaker 1: \"ignored\""),
            vec!["welcome"]
        );
    }

    #[test]
    fn test_empty_body() {
        assert!(extract("").is_empty());
    }
}
