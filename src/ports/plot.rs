//! Plotting port

use crate::domain::{Sample, WaveResult};

/// Renders `(timestamp, sample)` pairs
pub trait PlotSink {
    /// Draw the given window. `timestamps` and `samples` have equal length.
    fn plot(&mut self, timestamps: &[f64], samples: &[Sample]) -> WaveResult<()>;
}
