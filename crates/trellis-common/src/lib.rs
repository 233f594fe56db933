//! Common utilities for the Trellis selector builder.
//!
//! This crate provides shared infrastructure used by the library and the CLI:
//! - **Warning System** - colored terminal output for questionable input

pub mod warning;
