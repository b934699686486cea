// Calibration engine - per-line values and the running total

use std::io;

use log::{debug, info, log_enabled, trace, Level};

use super::config::CalibrationConfig;
use super::error::CalibrationError;
use crate::input::open_lines;
use crate::reading::{first_token, last_token, token_matches, Vocabulary};

/// Two-digit calibration value of a line: first token value, then last.
pub fn line_value(line: &str, vocabulary: Vocabulary) -> Result<u32, CalibrationError> {
    let first = first_token(line, vocabulary)?;
    let last = last_token(line, vocabulary)?;
    Ok(10 * u32::from(first) + u32::from(last))
}

/// Sums the calibration values of `lines`.
///
/// The first line without a token, or the first read failure, aborts the sum.
pub fn sum_lines<I, S>(lines: I, vocabulary: Vocabulary) -> Result<u64, CalibrationError>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut total: u64 = 0;
    let mut count = 0;

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let line = line.as_ref();

        if log_enabled!(Level::Trace) {
            trace!(
                "line {}: {} token matches",
                line_number,
                token_matches(line, vocabulary).count()
            );
        }

        let value = line_value(line, vocabulary).map_err(|e| e.at_line(line_number))?;
        debug!("line {}: {:?} -> {}", line_number, line, value);

        total += u64::from(value);
        count += 1;
    }

    info!("Read {} lines", count);
    Ok(total)
}

/// Sums the calibration values of in-memory text.
pub fn sum_text(text: &str, vocabulary: Vocabulary) -> Result<u64, CalibrationError> {
    sum_lines(text.lines().map(Ok), vocabulary)
}

/// Sums the calibration values of the configured input file.
pub fn calibrate_file(config: &CalibrationConfig) -> Result<u64, CalibrationError> {
    let lines = open_lines(&config.input)?;
    sum_lines(lines, config.vocabulary)
}
