//! Output sink adapters

mod writer;

pub use writer::{StdoutSink, WriterSink};
