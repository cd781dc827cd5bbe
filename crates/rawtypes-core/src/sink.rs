//! Output sinks for trace lines
//!
//! The runner only needs to write ordered lines of text. Callers choose where
//! they go: a capture buffer in tests, `tracing` in the binary, or nowhere.

/// Destination for human-readable trace lines
pub trait TraceSink {
    /// Append one line
    fn write(&mut self, line: &str);
}

/// Capture buffer
impl TraceSink for Vec<String> {
    fn write(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn write(&mut self, _line: &str) {}
}

/// Forwards every line to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn write(&mut self, line: &str) {
        tracing::debug!(target: "rawtypes::trace", "{line}");
    }
}
