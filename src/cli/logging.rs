//! Console output helpers

/// Output level selected by the global flags
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output except warnings and errors
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with per-source details
    Verbose,
}

/// Print a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

/// Print a warning to stderr, regardless of level
pub fn warn(msg: &str) {
    eprintln!("Warning: {msg}");
}
