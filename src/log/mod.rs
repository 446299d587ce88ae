//! Log parsing for cycle collector graph dumps.

pub mod error;
pub mod line;
pub mod parse;
pub mod roots;

pub use error::{LogError, Section, UnrecognizedLine};
pub use parse::{ParsedLog, parse_log, parse_log_file};
pub use roots::RootClassifier;
