use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

static HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("horizontal whitespace pattern"));

// Sentence-ending punctuation followed by whitespace, counting the
// information separators U+001C..U+001F as whitespace. The punctuation is
// kept with the preceding piece, the whitespace is the separator.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?][\s\x1C-\x1F]+").expect("sentence break pattern"));

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    #[default]
    Auto,
    Newlines,
    Sentences,
}

impl SplitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Auto => "auto",
            SplitMode::Newlines => "newlines",
            SplitMode::Sentences => "sentences",
        }
    }

    fn resolve(self, cleaned: &str) -> SplitMode {
        match self {
            SplitMode::Auto if cleaned.matches('\n').count() >= 2 => SplitMode::Newlines,
            SplitMode::Auto => SplitMode::Sentences,
            other => other,
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whitespace as the splitting rules see it: Unicode whitespace plus the
/// information separators U+001C..U+001F.
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// Trim the script and collapse runs of spaces and tabs into a single space.
pub fn clean(text: &str) -> String {
    HORIZONTAL_WS.replace_all(trim_blank(text), " ").into_owned()
}

/// Split a script into ordered, trimmed, non-empty cue texts.
///
/// Empty or whitespace-only input gives an empty vector; rejecting such a
/// script is left to the caller.
pub fn segment(text: &str, mode: SplitMode) -> Vec<String> {
    let cleaned = clean(text);
    let effective = mode.resolve(&cleaned);
    debug!("Segmenting {} chars using {} mode (requested {})", cleaned.len(), effective, mode);

    let pieces: Vec<&str> = match effective {
        SplitMode::Newlines => cleaned.split(is_line_break).collect(),
        _ => split_sentences(&cleaned),
    };

    pieces
        .into_iter()
        .map(trim_blank)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in SENTENCE_BREAK.find_iter(text) {
        // the punctuation mark is a single ASCII byte
        pieces.push(&text[last..m.start() + 1]);
        last = m.end();
    }
    pieces.push(&text[last..]);
    pieces
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences_on_punctuation_and_whitespace() {
        assert_eq!(
            segment("Hello world. How are you?", SplitMode::Sentences),
            vec!["Hello world.", "How are you?"]
        );
        assert_eq!(
            segment("Stop!  Go?\tMaybe.", SplitMode::Sentences),
            vec!["Stop!", "Go?", "Maybe."]
        );
    }

    #[test]
    fn punctuation_without_whitespace_does_not_split() {
        assert_eq!(
            segment("Version 1.5 is out.Really", SplitMode::Sentences),
            vec!["Version 1.5 is out.Really"]
        );
    }

    #[test]
    fn abbreviations_are_split_like_any_sentence_end() {
        assert_eq!(
            segment("Mr. Smith arrived.", SplitMode::Sentences),
            vec!["Mr.", "Smith arrived."]
        );
    }

    #[test]
    fn auto_with_many_lines_uses_newlines() {
        assert_eq!(
            segment("line one\nline two\nline three", SplitMode::Auto),
            vec!["line one", "line two", "line three"]
        );
    }

    #[test]
    fn auto_matches_explicit_modes() {
        let many = "First. Second\nthird\n\nfourth! fifth";
        assert_eq!(segment(many, SplitMode::Auto), segment(many, SplitMode::Newlines));

        let few = "One. Two!\nThree? Four";
        assert_eq!(segment(few, SplitMode::Auto), segment(few, SplitMode::Sentences));

        let none = "no breaks here. at all";
        assert_eq!(segment(none, SplitMode::Auto), segment(none, SplitMode::Sentences));
    }

    #[test]
    fn sentence_break_consumes_newlines() {
        assert_eq!(
            segment("Hi there.\nBye now", SplitMode::Auto),
            vec!["Hi there.", "Bye now"]
        );
    }

    #[test]
    fn newlines_drop_blank_lines_and_trim() {
        assert_eq!(
            segment("  a  \n\n\n   \n\tb\t\tc \r\nd", SplitMode::Newlines),
            vec!["a", "b c", "d"]
        );
    }

    #[test]
    fn newlines_mode_ignores_sentence_punctuation() {
        assert_eq!(
            segment("One. Two.\nThree", SplitMode::Newlines),
            vec!["One. Two.", "Three"]
        );
    }

    #[test]
    fn collapses_horizontal_whitespace() {
        assert_eq!(clean("  a \t\t b   c  "), "a b c");
        assert_eq!(clean("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn empty_input_gives_no_cues() {
        for mode in [SplitMode::Auto, SplitMode::Newlines, SplitMode::Sentences] {
            assert!(segment("", mode).is_empty());
            assert!(segment(" \t\n \n ", mode).is_empty());
        }
    }

    #[test]
    fn never_emits_empty_cues() {
        let inputs = ["a.  b.   ", "\n\n\n", "x!\n\n\ny?", "...   !!!  ??", " . "];
        for input in inputs {
            for mode in [SplitMode::Auto, SplitMode::Newlines, SplitMode::Sentences] {
                let cues = segment(input, mode);
                assert!(cues.iter().all(|c| !c.is_empty() && c.trim() == c), "{input:?} {mode}");
            }
        }
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(
            segment("Ça va? Très bien. 日本語", SplitMode::Sentences),
            vec!["Ça va?", "Très bien.", "日本語"]
        );
    }

    #[test]
    fn information_separators_count_as_whitespace() {
        for mode in [SplitMode::Auto, SplitMode::Newlines, SplitMode::Sentences] {
            assert!(segment("\u{1F}", mode).is_empty());
            assert!(segment(" \u{1C}\u{1F} ", mode).is_empty());
        }
        assert_eq!(
            segment("a.\u{1F}b", SplitMode::Sentences),
            vec!["a.", "b"]
        );
        assert_eq!(
            segment("\u{1F}one. two\u{1F}", SplitMode::Sentences),
            vec!["one.", "two"]
        );
    }

    #[test]
    fn mode_names_are_lowercase() {
        assert_eq!(SplitMode::Sentences.to_string(), "sentences");
        assert_eq!(
            serde_json::to_string(&SplitMode::Newlines).unwrap(),
            "\"newlines\""
        );
    }
}
