use std::io::Write;

use log::info;

/// Destination for formatted request lines.
///
/// Writers must not panic or fail the request; I/O errors are dropped.
pub trait LogWriter: Send + Sync {
    fn write(&self, line: &str);
}

impl<F> LogWriter for F
    where
        F: Fn(&str) + Send + Sync,
{
    fn write(&self, line: &str) {
        self(line)
    }
}

/// Writes each line to the process stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutWriter;

impl LogWriter for StdoutWriter {
    fn write(&self, line: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{}", line);
    }
}

/// Forwards lines to the `log` facade under the `access_log` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessLogWriter;

impl LogWriter for AccessLogWriter {
    fn write(&self, line: &str) {
        info!(target: "access_log", "{}", line);
    }
}
