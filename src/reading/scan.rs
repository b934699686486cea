// Line scanning - locates the first and last calibration tokens in a line

use super::token::{TokenMatch, Vocabulary};
use crate::engine::error::CalibrationError;

/// Every token occurrence in `line`, ordered by start offset.
///
/// Each character position is tried as a start and nothing is consumed after a
/// match, so overlapping tokens such as "twone" yield both "two" and "one".
pub fn token_matches(line: &str, vocabulary: Vocabulary) -> impl Iterator<Item = TokenMatch> + '_ {
    line.char_indices().filter_map(move |(start, _)| {
        let rest = &line[start..];
        vocabulary
            .tokens()
            .iter()
            .find(|token| rest.starts_with(**token))
            .map(|text| TokenMatch { start, text: *text })
    })
}

/// Value of the token with the smallest start offset.
pub fn first_token(line: &str, vocabulary: Vocabulary) -> Result<u8, CalibrationError> {
    token_matches(line, vocabulary)
        .next()
        .ok_or_else(|| no_token(line))?
        .value()
}

/// Value of the token with the greatest start offset.
pub fn last_token(line: &str, vocabulary: Vocabulary) -> Result<u8, CalibrationError> {
    token_matches(line, vocabulary)
        .last()
        .ok_or_else(|| no_token(line))?
        .value()
}

fn no_token(line: &str) -> CalibrationError {
    CalibrationError::NoTokenFound {
        line_number: 0,
        line: line.to_string(),
    }
}
