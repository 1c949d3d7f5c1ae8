//! Loading validation results produced by an external engine

mod reader;

pub use reader::{ReadError, ResultReader};
