//! Guess feedback
//!
//! A `GuessFeedback` is one submitted guess: five letters, each tagged with
//! how it matched the answer. Tags are replaced by reconstruction, never
//! mutated through a shared reference.

use super::word::{WordError, parse_letters};
use super::{ALPHABET_SIZE, WORD_LENGTH, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// How a single guessed letter matched the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterFeedback {
    /// Letter is not in the answer (or not any more times than already marked)
    #[default]
    NotPresent,
    /// Letter is in the answer, but not at this position
    WrongPosition,
    /// Letter is at this position in the answer
    Correct,
}

impl LetterFeedback {
    /// Next tag in the cycle (NotPresent → WrongPosition → Correct → NotPresent)
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::NotPresent => Self::WrongPosition,
            Self::WrongPosition => Self::Correct,
            Self::Correct => Self::NotPresent,
        }
    }

    /// Previous tag in the cycle
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::NotPresent => Self::Correct,
            Self::WrongPosition => Self::NotPresent,
            Self::Correct => Self::WrongPosition,
        }
    }

    /// Square emoji used in share output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::NotPresent => '⬛',
            Self::WrongPosition => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse one feedback mark
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'.'/⬛/⬜.
    #[must_use]
    pub const fn from_mark(mark: char) -> Option<Self> {
        match mark {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::WrongPosition),
            '-' | '_' | '.' | '⬛' | '⬜' => Some(Self::NotPresent),
            _ => None,
        }
    }
}

/// One letter of a guess with its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessedLetter {
    letter: u8,
    feedback: LetterFeedback,
}

impl GuessedLetter {
    /// Tag one ASCII letter; lowercase is uppercased
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` for anything but an ASCII letter.
    pub const fn new(letter: u8, feedback: LetterFeedback) -> Result<Self, WordError> {
        if !letter.is_ascii_alphabetic() {
            return Err(WordError::InvalidCharacters);
        }
        Ok(Self::tagged(letter.to_ascii_uppercase(), feedback))
    }

    /// Caller guarantees `letter` is uppercase ASCII
    const fn tagged(letter: u8, feedback: LetterFeedback) -> Self {
        Self { letter, feedback }
    }

    /// Uppercase ASCII letter
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[must_use]
    pub const fn feedback(&self) -> LetterFeedback {
        self.feedback
    }
}

/// Error type for unparseable feedback marks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Word(#[from] WordError),
    #[error("Feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback mark '{0}' (use G, Y or -)")]
    InvalidMark(char),
}

/// A submitted guess with per-letter feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessFeedback {
    letters: [GuessedLetter; WORD_LENGTH],
}

impl GuessFeedback {
    /// Build from five already-tagged letters
    ///
    /// Every `GuessedLetter` holds an uppercase letter, so no further check is
    /// needed.
    #[must_use]
    pub const fn from_letters(letters: [GuessedLetter; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// A guess whose letters are all still `NotPresent`
    ///
    /// # Errors
    /// Returns `WordError` if `word` is not five ASCII letters.
    pub fn unscored(word: &str) -> Result<Self, WordError> {
        let letters = parse_letters(word)?;
        Ok(Self::from_letters(
            letters.map(|letter| GuessedLetter::tagged(letter, LetterFeedback::NotPresent)),
        ))
    }

    /// Parse a guess and its marks, e.g. `("crane", "-YG-G")`
    ///
    /// # Errors
    /// Returns `FeedbackError` for an invalid word, wrong mark count or an
    /// unknown mark.
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::{GuessFeedback, LetterFeedback};
    ///
    /// let feedback = GuessFeedback::from_marks("crane", "--G-G").unwrap();
    /// assert_eq!(feedback.letters()[2].feedback(), LetterFeedback::Correct);
    /// ```
    pub fn from_marks(word: &str, marks: &str) -> Result<Self, FeedbackError> {
        let letters = parse_letters(word)?;
        let marks: Vec<char> = marks.trim().chars().collect();
        if marks.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(marks.len()));
        }

        let mut tagged = [GuessedLetter::tagged(b'A', LetterFeedback::NotPresent); WORD_LENGTH];
        for (i, (&letter, &mark)) in letters.iter().zip(&marks).enumerate() {
            let feedback = LetterFeedback::from_mark(mark).ok_or(FeedbackError::InvalidMark(mark))?;
            tagged[i] = GuessedLetter::tagged(letter, feedback);
        }
        Ok(Self::from_letters(tagged))
    }

    /// Score `guess` against `answer` with Wordle's colouring rules
    ///
    /// # Algorithm
    /// 1. Exact matches are marked correct and consume one of that letter from
    ///    the answer's letter budget
    /// 2. Remaining positions, left to right, are marked wrong-position while
    ///    the answer still has that letter available
    /// 3. Everything else is not-present
    ///
    /// # Examples
    /// ```
    /// use wordle_cheat::core::{GuessFeedback, Word};
    ///
    /// let guess = Word::new("robin", 1.0).unwrap();
    /// let answer = Word::new("robot", 1.0).unwrap();
    /// let feedback = GuessFeedback::evaluate(&guess, &answer);
    /// assert_eq!(feedback.marks(), "GGG--");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        Self::evaluate_letters(guess.letters(), answer.letters())
    }

    /// Letters of a `Word` are always uppercase
    fn evaluate_letters(guess: &[u8; WORD_LENGTH], answer: &[u8; WORD_LENGTH]) -> Self {
        let mut available = [0u8; ALPHABET_SIZE];
        for &letter in answer {
            available[letter_index(letter)] += 1;
        }

        let mut feedback = [LetterFeedback::NotPresent; WORD_LENGTH];

        // Index needed to compare guess[i] with answer[i] and set feedback[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess[i] == answer[i] {
                feedback[i] = LetterFeedback::Correct;
                available[letter_index(guess[i])] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if feedback[i] == LetterFeedback::Correct {
                continue;
            }
            let remaining = &mut available[letter_index(guess[i])];
            if *remaining > 0 {
                feedback[i] = LetterFeedback::WrongPosition;
                *remaining -= 1;
            }
        }

        Self::from_letters(std::array::from_fn(|i| GuessedLetter::tagged(guess[i], feedback[i])))
    }

    /// A copy with the tag at `index` replaced
    ///
    /// # Panics
    /// Panics if `index >= 5`.
    #[must_use]
    pub fn with_feedback(self, index: usize, feedback: LetterFeedback) -> Self {
        let mut letters = self.letters;
        letters[index] = GuessedLetter::tagged(letters[index].letter, feedback);
        Self::from_letters(letters)
    }

    #[must_use]
    pub const fn letters(&self) -> &[GuessedLetter; WORD_LENGTH] {
        &self.letters
    }

    /// The guessed word as an uppercase string
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| char::from(l.letter)).collect()
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.letters
            .iter()
            .all(|l| l.feedback == LetterFeedback::Correct)
    }

    /// Marks as a `G`/`Y`/`-` string
    #[must_use]
    pub fn marks(&self) -> String {
        self.letters
            .iter()
            .map(|l| match l.feedback {
                LetterFeedback::Correct => 'G',
                LetterFeedback::WrongPosition => 'Y',
                LetterFeedback::NotPresent => '-',
            })
            .collect()
    }

    /// Marks as a row of coloured squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.letters.iter().map(|l| l.feedback.emoji()).collect()
    }
}

impl fmt::Display for GuessFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.marks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn score(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess, 0.0).unwrap();
        let answer = Word::new(answer, 0.0).unwrap();
        GuessFeedback::evaluate(&guess, &answer).marks()
    }

    #[test_case("crane", "slate", "--G-G" ; "crane against slate")]
    #[test_case("robin", "robot", "GGG--" ; "duplicate o in answer only")]
    #[test_case("speed", "erase", "Y-YY-" ; "two e both present")]
    #[test_case("robot", "floor", "YY-G-" ; "green o consumes before yellow o")]
    #[test_case("eerie", "there", "Y-Y-G" ; "three e against two")]
    #[test_case("abcde", "fghij", "-----" ; "nothing shared")]
    #[test_case("slate", "slate", "GGGGG" ; "exact match")]
    #[test_case("lolly", "hello", "-YGG-" ; "greens spend the letter budget first")]
    fn evaluate_colours(guess: &str, answer: &str, expected: &str) {
        assert_eq!(score(guess, answer), expected);
    }

    #[test]
    fn unscored_defaults_to_not_present() {
        let feedback = GuessFeedback::unscored("crane").unwrap();
        assert_eq!(feedback.word(), "CRANE");
        assert_eq!(feedback.marks(), "-----");
        assert!(!feedback.is_solved());
    }

    #[test]
    fn unscored_rejects_bad_words() {
        assert!(GuessFeedback::unscored("cran").is_err());
        assert!(GuessFeedback::unscored("cr4ne").is_err());
    }

    #[test_case("GY-GY", "GY-GY" ; "letters")]
    #[test_case("gy_gy", "GY-GY" ; "lowercase and underscore")]
    #[test_case("🟩🟨⬛🟩🟨", "GY-GY" ; "emoji")]
    #[test_case("..G..", "--G--" ; "dots")]
    fn from_marks_parses(marks: &str, expected: &str) {
        let feedback = GuessFeedback::from_marks("hello", marks).unwrap();
        assert_eq!(feedback.marks(), expected);
    }

    #[test]
    fn from_marks_errors() {
        assert_eq!(
            GuessFeedback::from_marks("hello", "GYG"),
            Err(FeedbackError::InvalidLength(3))
        );
        assert_eq!(
            GuessFeedback::from_marks("hello", "GYGXG"),
            Err(FeedbackError::InvalidMark('X'))
        );
        assert!(matches!(
            GuessFeedback::from_marks("hell", "GGGGG"),
            Err(FeedbackError::Word(WordError::InvalidLength(4)))
        ));
    }

    #[test]
    fn with_feedback_leaves_the_source_unchanged() {
        let source = GuessFeedback::unscored("crane").unwrap();
        let updated = source.with_feedback(2, LetterFeedback::Correct);

        assert_eq!(source.marks(), "-----");
        assert_eq!(updated.marks(), "--G--");
        assert_eq!(updated.letters()[2].letter(), b'A');
    }

    #[test]
    fn feedback_cycles() {
        for tag in [
            LetterFeedback::NotPresent,
            LetterFeedback::WrongPosition,
            LetterFeedback::Correct,
        ] {
            assert_eq!(tag.next().previous(), tag);
            assert_eq!(tag.next().next().next(), tag);
        }
        assert_eq!(LetterFeedback::NotPresent.next(), LetterFeedback::WrongPosition);
        assert_eq!(LetterFeedback::NotPresent.previous(), LetterFeedback::Correct);
    }

    #[test]
    fn guessed_letter_uppercases_lowercase_input() {
        let letter = GuessedLetter::new(b'c', LetterFeedback::Correct).unwrap();
        assert_eq!(letter.letter(), b'C');
        assert_eq!(letter.feedback(), LetterFeedback::Correct);
    }

    #[test_case(b'4' ; "digit")]
    #[test_case(b' ' ; "space")]
    #[test_case(0xC3 ; "non ascii")]
    fn guessed_letter_rejects_non_letters(letter: u8) {
        assert_eq!(
            GuessedLetter::new(letter, LetterFeedback::NotPresent),
            Err(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn from_letters_built_from_lowercase_matches_parsed() {
        let letters = std::array::from_fn(|i| {
            GuessedLetter::new(b"crane"[i], LetterFeedback::NotPresent).unwrap()
        });
        assert_eq!(
            GuessFeedback::from_letters(letters),
            GuessFeedback::unscored("CRANE").unwrap()
        );
    }

    #[test]
    fn emoji_row() {
        let feedback = GuessFeedback::from_marks("crane", "GY---").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛⬛");
    }

    #[test]
    fn solved_only_when_all_correct() {
        let word = Word::new("slate", 0.0).unwrap();
        assert!(GuessFeedback::evaluate(&word, &word).is_solved());
        assert!(!GuessFeedback::from_marks("slate", "GGGGY").unwrap().is_solved());
    }

    #[test]
    fn display_shows_word_and_marks() {
        let feedback = GuessFeedback::from_marks("crane", "--G-G").unwrap();
        assert_eq!(feedback.to_string(), "CRANE --G-G");
    }
}
