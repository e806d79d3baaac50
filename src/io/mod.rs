//! Console I/O boundary.

pub mod console;

pub use console::{ask, Console, LineConsole};
