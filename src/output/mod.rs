//! Output rendering for profiles and offers

pub mod formatter;

pub use formatter::{formatter_for, ConsoleFormatter, JsonFormatter, OutputFormatter};
