pub mod calibrate;
pub mod config;
pub mod error;

pub use calibrate::{calibrate_file, line_value, sum_lines, sum_text};
pub use config::CalibrationConfig;
pub use error::CalibrationError;
