//! Chord sheet WASM API
//!
//! This module provides the JavaScript-facing API for the chord sheet engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, validation and logging
//! - `core`: Exported functions (`prepareDocument`, `transposeDocument`, ...)

pub mod helpers;
pub mod core;

// Re-export all public functions to keep the API flat
pub use self::core::*;
