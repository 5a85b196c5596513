//! Core domain types
//!
//! Pure types with no I/O dependencies: errors, waveform shapes and run
//! configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
