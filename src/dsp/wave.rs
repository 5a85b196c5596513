//! Time-domain sampled waves

use crate::domain::error::ensure_positive;
use crate::domain::{Sample, WaveError, WaveResult};
use crate::dsp::iter::{IterationOrder, SampleIter};
use crate::dsp::spectrum::Spectrum;
use crate::ports::{AudioSink, PlotSink};

/// Default plot window, in samples
pub const DEFAULT_PLOT_RANGE: (usize, usize) = (0, 100);

/// A sampled signal: amplitudes, their timestamps and the sample rate.
///
/// `samples` and `timestamps` always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    samples: Vec<Sample>,
    timestamps: Vec<f64>,
    sample_rate: f64,
}

impl Wave {
    pub fn new(samples: Vec<Sample>, timestamps: Vec<f64>, sample_rate: f64) -> WaveResult<Self> {
        ensure_positive("sample rate", sample_rate)?;
        if samples.len() != timestamps.len() {
            return Err(WaveError::ShapeMismatch(format!(
                "{} samples but {} timestamps",
                samples.len(),
                timestamps.len()
            )));
        }
        Ok(Self {
            samples,
            timestamps,
            sample_rate,
        })
    }

    /// Build a wave on an evenly spaced grid starting at `start`
    pub fn from_samples(samples: Vec<Sample>, start: f64, sample_rate: f64) -> WaveResult<Self> {
        ensure_positive("sample rate", sample_rate)?;
        let timestamps = (0..samples.len())
            .map(|i| start + i as f64 / sample_rate)
            .collect();
        Self::new(samples, timestamps, sample_rate)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn timestamps(&self) -> &[f64] {
        &self.timestamps
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp of the first sample (0.0 for an empty wave)
    pub fn start(&self) -> f64 {
        self.timestamps.first().copied().unwrap_or(0.0)
    }

    /// Length in seconds
    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate
    }

    /// Multiply every sample by `factor` in place
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        for s in &mut self.samples {
            *s *= factor;
        }
        self
    }

    /// Copy of this wave with every sample multiplied by `factor`
    pub fn scaled(&self, factor: f64) -> Self {
        let mut wave = self.clone();
        wave.scale(factor);
        wave
    }

    /// Fail unless `other` has the same length and sample rate
    pub fn ensure_same_shape(&self, other: &Wave) -> WaveResult<()> {
        if self.len() != other.len() {
            return Err(WaveError::ShapeMismatch(format!(
                "wave lengths differ: {} vs {}",
                self.len(),
                other.len()
            )));
        }
        if self.sample_rate != other.sample_rate {
            return Err(WaveError::ShapeMismatch(format!(
                "sample rates differ: {} Hz vs {} Hz",
                self.sample_rate, other.sample_rate
            )));
        }
        Ok(())
    }

    /// Elementwise product, keeping this wave's timestamps
    pub fn multiply(&self, other: &Wave) -> WaveResult<Wave> {
        self.ensure_same_shape(other)?;
        let samples = self
            .samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| a * b)
            .collect();
        Ok(Self {
            samples,
            timestamps: self.timestamps.clone(),
            sample_rate: self.sample_rate,
        })
    }

    /// Pearson correlation coefficient between the two sample arrays.
    ///
    /// Returns 0.0 when either wave is constant (zero variance).
    pub fn correlation(&self, other: &Wave) -> WaveResult<f64> {
        if self.len() != other.len() {
            return Err(WaveError::ShapeMismatch(format!(
                "cannot correlate {} samples with {}",
                self.len(),
                other.len()
            )));
        }
        if self.is_empty() {
            return Ok(0.0);
        }

        let n = self.len() as f64;
        let mean_a = self.samples.iter().sum::<f64>() / n;
        let mean_b = other.samples.iter().sum::<f64>() / n;

        let mut cov = 0.0;
        let mut var_a = 0.0;
        let mut var_b = 0.0;
        for (a, b) in self.samples.iter().zip(&other.samples) {
            let da = a - mean_a;
            let db = b - mean_b;
            cov += da * db;
            var_a += da * da;
            var_b += db * db;
        }

        let denom = (var_a * var_b).sqrt();
        if denom < 1e-300 {
            return Ok(0.0);
        }
        Ok(cov / denom)
    }

    /// Convert to the frequency domain
    pub fn make_spectrum(&self) -> Spectrum {
        Spectrum::from_wave(self)
    }

    /// Lazily walk the samples in the given order
    pub fn iter(&self, order: IterationOrder) -> SampleIter<'_> {
        SampleIter::new(&self.samples, order)
    }

    /// Hand the samples to an audio backend
    pub fn play(&self, sink: &mut dyn AudioSink) -> WaveResult<()> {
        sink.play(&self.samples, self.sample_rate)
    }

    /// Hand the `[slice_from, slice_to)` window to a plotting backend.
    ///
    /// Bounds past the end of the wave are clamped.
    pub fn plot(
        &self,
        sink: &mut dyn PlotSink,
        slice_from: usize,
        slice_to: usize,
    ) -> WaveResult<()> {
        let to = slice_to.min(self.len());
        let from = slice_from.min(to);
        if (from, to) != (slice_from, slice_to) {
            log::warn!(
                "plot range {slice_from}..{slice_to} clamped to {from}..{to} ({} samples)",
                self.len()
            );
        }
        sink.plot(&self.timestamps[from..to], &self.samples[from..to])
    }
}

impl<'a> IntoIterator for &'a Wave {
    type Item = Sample;
    type IntoIter = SampleIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter(IterationOrder::Sequential)
    }
}
