//! Word list loading utilities
//!
//! Word lists are plain text, one `WORD FREQUENCY` pair per line. Blank lines
//! are skipped and `#` starts a comment.

use crate::core::{Word, WordError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: expected `WORD FREQUENCY`, got {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: frequency must be a non-negative number, got {value:?}")]
    InvalidFrequency { line: usize, value: String },
    #[error("line {line}: {source}")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("word list is empty")]
    Empty,
}

/// Parse a word list
///
/// # Errors
///
/// Returns the first malformed line, or `LoadError::Empty` if no words remain
/// after skipping blanks and comments.
///
/// # Examples
/// ```
/// use wordle_cheat::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("crane 120\n# comment\nslate 80\n").unwrap();
/// assert_eq!(words[0].text(), "CRANE");
/// assert_eq!(words[1].frequency(), 80.0);
/// ```
pub fn parse_word_list(text: &str) -> Result<Vec<Word>, LoadError> {
    let mut words = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_whitespace();
        let (Some(text), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(LoadError::MalformedLine {
                line,
                content: content.to_string(),
            });
        };

        let frequency = value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && *f >= 0.0)
            .ok_or_else(|| LoadError::InvalidFrequency {
                line,
                value: value.to_string(),
            })?;

        let word = Word::new(text, frequency).map_err(|source| LoadError::InvalidWord { line, source })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(words)
}

/// Load and parse a word list file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise any error
/// from [`parse_word_list`].
///
/// # Examples
/// ```no_run
/// use wordle_cheat::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content)
}

/// Convert embedded `(word, frequency)` pairs to words, skipping invalid ones
#[must_use]
pub fn words_from_entries(entries: &[(&str, f64)]) -> Vec<Word> {
    entries
        .iter()
        .filter_map(|&(text, frequency)| Word::new(text, frequency).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn parses_words_and_frequencies() {
        let words = parse_word_list("crane 120\nSlate 80.5\n").unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert!((words[0].frequency() - 120.0).abs() < f64::EPSILON);
        assert_eq!(words[1].text(), "SLATE");
        assert!((words[1].frequency() - 80.5).abs() < f64::EPSILON);
    }

    #[test]
    fn skips_blanks_and_comments() {
        let text = "# header\n\n  crane 3  # trailing\n\t\nslate 1\n";
        let words = parse_word_list(text).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE"]);
    }

    #[test_case("crane" ; "missing frequency")]
    #[test_case("crane 1 2" ; "extra field")]
    fn malformed_lines(text: &str) {
        assert!(matches!(
            parse_word_list(text),
            Err(LoadError::MalformedLine { line: 1, .. })
        ));
    }

    #[test_case("crane abc" ; "not a number")]
    #[test_case("crane -1" ; "negative")]
    #[test_case("crane NaN" ; "nan")]
    #[test_case("crane inf" ; "infinite")]
    fn invalid_frequencies(text: &str) {
        assert!(matches!(
            parse_word_list(text),
            Err(LoadError::InvalidFrequency { line: 1, .. })
        ));
    }

    #[test]
    fn invalid_word_reports_its_line() {
        let result = parse_word_list("crane 1\ntoolong 2\n");
        assert!(matches!(
            result,
            Err(LoadError::InvalidWord {
                line: 2,
                source: WordError::InvalidLength(7)
            })
        ));
    }

    #[test]
    fn empty_list_is_an_error() {
        assert!(matches!(parse_word_list("# nothing\n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_file("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.txt"));
    }

    #[test]
    fn entries_skip_invalid() {
        let words = words_from_entries(&[("crane", 1.0), ("toolong", 2.0), ("abc", 3.0), ("slate", 4.0)]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }
}
