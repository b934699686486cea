use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::debug;

use crate::engine::error::CalibrationError;

/// Input file read when no path is given.
pub const DEFAULT_INPUT: &str = "input";

/// Opens `path` for line-by-line reading.
///
/// The file handle is owned by the returned iterator and closed when it is dropped.
pub fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, CalibrationError> {
    if !path.exists() {
        return Err(CalibrationError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    debug!("Reading calibration lines from {}", path.display());
    Ok(BufReader::new(file).lines())
}
