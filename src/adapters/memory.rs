//! In-memory sinks for development and testing without audio or plot backends.
//!
//! Every call is logged at INFO level and recorded so tests can inspect
//! exactly what a real backend would have received.

use crate::domain::{Sample, WaveResult};
use crate::ports::{AudioSink, PlotSink};

/// Records every `play` call as `(samples, sample_rate)`
#[derive(Debug, Default)]
pub struct MemoryAudioSink {
    played: Vec<(Vec<Sample>, f64)>,
}

impl MemoryAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[(Vec<Sample>, f64)] {
        &self.played
    }

    /// Total seconds of audio received
    pub fn total_seconds(&self) -> f64 {
        self.played
            .iter()
            .map(|(samples, rate)| samples.len() as f64 / rate)
            .sum()
    }
}

impl AudioSink for MemoryAudioSink {
    fn play(&mut self, samples: &[Sample], sample_rate: f64) -> WaveResult<()> {
        log::info!(
            "[MEMORY AUDIO] PLAY {} samples at {sample_rate} Hz ({:.3} s)",
            samples.len(),
            samples.len() as f64 / sample_rate
        );
        self.played.push((samples.to_vec(), sample_rate));
        Ok(())
    }
}

/// Records every `plot` call as `(timestamps, samples)`
#[derive(Debug, Default)]
pub struct MemoryPlotSink {
    plots: Vec<(Vec<f64>, Vec<Sample>)>,
}

impl MemoryPlotSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plots(&self) -> &[(Vec<f64>, Vec<Sample>)] {
        &self.plots
    }
}

impl PlotSink for MemoryPlotSink {
    fn plot(&mut self, timestamps: &[f64], samples: &[Sample]) -> WaveResult<()> {
        match (timestamps.first(), timestamps.last()) {
            (Some(first), Some(last)) => log::info!(
                "[MEMORY PLOT] PLOT {} points, t = {first:.4}..{last:.4} s",
                samples.len()
            ),
            _ => log::info!("[MEMORY PLOT] PLOT empty window"),
        }
        self.plots.push((timestamps.to_vec(), samples.to_vec()));
        Ok(())
    }
}
