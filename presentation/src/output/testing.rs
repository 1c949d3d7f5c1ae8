//! Test doubles for reporter tests

use kubereport_application::OutputSink;
use std::io;
use std::sync::{Arc, Mutex};

/// Sink that accepts a fixed number of lines, then fails every write.
#[derive(Clone)]
pub(crate) struct FailingSink {
    remaining: Arc<Mutex<usize>>,
    delivered: Arc<Mutex<Vec<String>>>,
}

impl FailingSink {
    pub(crate) fn new(accepted: usize) -> Self {
        Self {
            remaining: Arc::new(Mutex::new(accepted)),
            delivered: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn delivered(&self) -> Vec<String> {
        self.delivered.lock().unwrap().clone()
    }
}

impl OutputSink for FailingSink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut remaining = self.remaining.lock().unwrap();
        if *remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        *remaining -= 1;
        self.delivered.lock().unwrap().push(line.to_string());
        Ok(())
    }
}
