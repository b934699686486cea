use lazy_static::lazy_static;

use crate::engine::error::CalibrationError;

/// Spelled-out number words; a word's index is its value.
pub static NUMBER_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

pub static DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

lazy_static! {
    static ref DIGITS_AND_WORDS: Vec<&'static str> =
        NUMBER_WORDS.iter().chain(DIGITS.iter()).copied().collect();
    static ref DIGITS_AND_WORDS_PATTERN: String = render_pattern(&DIGITS_AND_WORDS);
    static ref DIGITS_PATTERN: String = render_pattern(&DIGITS);
}

fn render_pattern(tokens: &[&str]) -> String {
    format!("({})", tokens.join("|"))
}

/// Which tokens count as a calibration digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Vocabulary {
    /// Digit characters and the words "zero" through "nine".
    #[default]
    DigitsAndWords,
    /// Digit characters only.
    Digits,
}

impl Vocabulary {
    pub fn tokens(&self) -> &'static [&'static str] {
        match self {
            Vocabulary::DigitsAndWords => DIGITS_AND_WORDS.as_slice(),
            Vocabulary::Digits => &DIGITS,
        }
    }

    /// Alternation of every token, e.g. `(zero|one|...|9)`.
    pub fn pattern(&self) -> &'static str {
        match self {
            Vocabulary::DigitsAndWords => DIGITS_AND_WORDS_PATTERN.as_str(),
            Vocabulary::Digits => DIGITS_PATTERN.as_str(),
        }
    }
}

/// A token occurrence inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// Byte offset of the first character of the token.
    pub start: usize,
    pub text: &'static str,
}

impl TokenMatch {
    pub fn value(&self) -> Result<u8, CalibrationError> {
        resolve(self.text)
    }
}

/// Maps a vocabulary token to its value 0-9.
pub fn resolve(token: &str) -> Result<u8, CalibrationError> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(digit) = c.to_digit(10) {
            return Ok(digit as u8);
        }
    }

    NUMBER_WORDS
        .iter()
        .position(|word| *word == token)
        .map(|index| index as u8)
        .ok_or_else(|| CalibrationError::InvalidToken(token.to_string()))
}
