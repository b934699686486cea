use super::scan::{first_token, last_token, token_matches};
use super::token::{resolve, Vocabulary};
use proptest::prelude::*;

const LINE: &str =
    "(zero|one|two|three|four|five|six|seven|eight|nine|twone|oneight|[a-z]|[0-9]){0,12}";

/// Earliest token starting anywhere in `s`, found by searching for each token.
fn leftmost(s: &str, vocabulary: Vocabulary) -> Option<&'static str> {
    vocabulary
        .tokens()
        .iter()
        .filter_map(|token| s.find(*token).map(|start| (start, *token)))
        .min_by_key(|(start, _)| *start)
        .map(|(_, token)| token)
}

/// Retries the search on ever longer suffixes until something matches.
fn last_by_suffix_retry(line: &str, vocabulary: Vocabulary) -> Option<&'static str> {
    (0..line.len())
        .rev()
        .filter(|i| line.is_char_boundary(*i))
        .find_map(|i| leftmost(&line[i..], vocabulary))
}

// Property: the forward scan picks the same last token as the suffix-retry scan
proptest! {
    #[test]
    fn prop_last_token_matches_suffix_retry(line in LINE, digits_only in any::<bool>()) {
        let vocabulary = if digits_only { Vocabulary::Digits } else { Vocabulary::DigitsAndWords };

        match last_by_suffix_retry(&line, vocabulary) {
            Some(token) => prop_assert_eq!(last_token(&line, vocabulary).unwrap(), resolve(token).unwrap()),
            None => prop_assert!(last_token(&line, vocabulary).is_err()),
        }
    }
}

// Property: the first token is the one with the smallest start offset
proptest! {
    #[test]
    fn prop_first_token_is_leftmost(line in LINE, digits_only in any::<bool>()) {
        let vocabulary = if digits_only { Vocabulary::Digits } else { Vocabulary::DigitsAndWords };

        match leftmost(&line, vocabulary) {
            Some(token) => prop_assert_eq!(first_token(&line, vocabulary).unwrap(), resolve(token).unwrap()),
            None => prop_assert!(first_token(&line, vocabulary).is_err()),
        }
    }
}

// Property: match offsets are strictly increasing and each names a real occurrence
proptest! {
    #[test]
    fn prop_matches_ordered_and_in_place(line in LINE) {
        let mut previous = None;
        for m in token_matches(&line, Vocabulary::DigitsAndWords) {
            prop_assert!(line[m.start..].starts_with(m.text));
            if let Some(p) = previous {
                prop_assert!(m.start > p);
            }
            previous = Some(m.start);
        }
    }
}
