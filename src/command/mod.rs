//! Command module: the line-oriented protocol and its executor.
//!
//! This module contains:
//! - [`Command`]: one parsed command, with all token decoding and the
//!   1-indexed → 0-indexed coordinate translation
//! - [`Session`]: dispatch of parsed commands over an owned canvas
//! - [`Reply`]: what a successful command owes the caller

mod executor;
mod parse;

pub use executor::{Reply, Session};
pub use parse::Command;
