//! [`OutputSink`] over any [`Write`] implementation

use kubereport_application::OutputSink;
use std::io::{self, Stdout, Write};

/// Writes each line, newline-terminated, straight to the wrapped writer.
pub struct WriterSink<W: Write + Send> {
    writer: W,
}

/// Sink for the process's standard output
pub type StdoutSink = WriterSink<Stdout>;

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()
    }
}
