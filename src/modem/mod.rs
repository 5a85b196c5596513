//! Amplitude modulation
//!
//! AM modulation/demodulation and the end-to-end pipeline that ties signal
//! generation, modulation and spectrum-domain filtering together.

pub mod am;
pub mod demodulator;
pub mod pipeline;

pub use am::{AmModulator, BaseDemodulator, Modulator};
pub use demodulator::AmDemodulator;
pub use pipeline::{Pipeline, PipelineOutput};
