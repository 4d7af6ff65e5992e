//! Common utilities for the Wren engine.
//!
//! This crate provides shared infrastructure used by all engine components:
//! - **Warning System** - deduplicated, colored reports of recoverable parse errors

pub mod warning;
