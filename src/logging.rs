// logging.rs - Timestamped progress messages

use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a progress line with a green, bold timestamp prefix
pub fn format_line(message: &str) -> String {
    format!(
        "\x1b[92m \x1b[1m {} \x1b[0m {}",
        Local::now().format(TIMESTAMP_FORMAT),
        message
    )
}

/// Print a timestamped progress line to stdout
pub fn info<S: AsRef<str>>(message: S) {
    println!("{}", format_line(message.as_ref()));
}
