//! Output sink port
//!
//! Reporters never touch the process streams directly. They are handed an
//! [`OutputSink`] at construction and write whole lines to it.

use std::io;
use std::sync::{Arc, Mutex};

/// Line-oriented destination for reporter output.
///
/// Implementations append the line terminator themselves.
pub trait OutputSink: Send {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// In-memory sink that records every written line.
///
/// Clones share the same buffer: hand one clone to a reporter and keep
/// another to inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Everything written so far, each line terminated by `\n`
    pub fn contents(&self) -> String {
        self.lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_sink_clones_share_buffer() {
        let sink = CaptureSink::new();
        let mut writer = sink.clone();
        writer.write_line("1..1").unwrap();
        writer.write_line("ok 1 - a.yaml").unwrap();

        assert_eq!(sink.lines(), vec!["1..1", "ok 1 - a.yaml"]);
        assert_eq!(sink.contents(), "1..1\nok 1 - a.yaml\n");
    }

    #[test]
    fn test_boxed_sink_delegates() {
        let sink = CaptureSink::new();
        let mut boxed: Box<dyn OutputSink> = Box::new(sink.clone());
        boxed.write_line("hello").unwrap();
        assert_eq!(sink.lines(), vec!["hello"]);
    }
}
