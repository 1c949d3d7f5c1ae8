//! Output reporters
//!
//! Three protocols, one per reporter. [`manager::OutputManager`] is the
//! closed set the rest of the program picks from.

pub mod buffer;
pub mod console;
pub mod json;
pub mod manager;
pub mod tap;

#[cfg(test)]
pub(crate) mod testing;
