//! wavelab
//!
//! Periodic signal generation, amplitude modulation, and AM demodulation by
//! spectrum-domain low-pass filtering.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Errors, waveform shapes and run configuration, no I/O
//! - `dsp/` - Signals, waves, spectra and filters (pure functions, no I/O)
//! - `modem/` - AM modulator, demodulator and the end-to-end pipeline
//! - `ports/` - Trait definitions for playback and plotting backends
//! - `adapters/` - In-memory implementations of the ports
//! - `store` - Reading run profiles from JSON files

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod modem;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;
pub mod store;

pub use domain::{Configuration, WaveError, WaveResult};
pub use dsp::{Signal, Spectrum, Wave};
pub use modem::{AmDemodulator, AmModulator, Pipeline};
