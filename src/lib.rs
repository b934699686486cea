//! Sums trebuchet calibration values: the first and last digit of every line,
//! where a digit may be spelled out as "zero" through "nine".

pub mod engine;
pub mod input;
pub mod reading;

pub use engine::{calibrate_file, line_value, sum_lines, sum_text, CalibrationConfig, CalibrationError};
pub use reading::{first_token, last_token, resolve, token_matches, TokenMatch, Vocabulary};
