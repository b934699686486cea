// Configuration for a calibration run

use std::path::PathBuf;

use crate::input::DEFAULT_INPUT;
use crate::reading::Vocabulary;

#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationConfig {
    /// Puzzle input, one calibration line per line (default `input`)
    pub input: PathBuf,

    /// Tokens recognised as digits (default digits and number words)
    pub vocabulary: Vocabulary,

    /// Print the token pattern before the total (default off)
    pub show_pattern: bool,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            vocabulary: Vocabulary::default(),
            show_pattern: false,
        }
    }
}
