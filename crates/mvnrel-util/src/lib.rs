//! Shared utilities for mvnrel.
//!
//! This crate provides cross-cutting concerns used by all other mvnrel crates:
//! the release error catalog, process spawning, and terminal status lines.

pub mod errors;
pub mod process;
pub mod progress;
