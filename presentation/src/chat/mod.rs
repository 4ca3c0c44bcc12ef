//! Interactive session module
//!
//! Provides a readline-based interactive generation session.

mod repl;

pub use repl::ChatRepl;
