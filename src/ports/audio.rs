//! Audio playback port

use crate::domain::{Sample, WaveResult};

/// Consumes samples at a given rate and makes them audible
pub trait AudioSink {
    /// Play `samples` recorded at `sample_rate` Hz
    fn play(&mut self, samples: &[Sample], sample_rate: f64) -> WaveResult<()>;
}
