//! Run predefined commands from your Cargo.toml.
//!
//! Commands live under `[package.metadata.exec.commands]` as plain
//! shell strings; `cargo exec <name> [args…]` looks one up, optionally
//! rewrites nested `cargo exec` calls into their literal definitions,
//! appends the extra arguments with safe quoting, and runs the result
//! under the user's shell from the manifest's directory.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod parse;
pub mod resolve;
