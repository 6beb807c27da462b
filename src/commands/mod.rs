//! Command implementations
//!
//! decho has a single action: collect text, assemble a message, post it.

pub mod send;

pub use send::{run as send_run, SendArgs};
