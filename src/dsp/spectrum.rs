//! Frequency-domain representation of a wave

use num_complex::Complex64;

use crate::domain::WaveResult;
use crate::dsp::fft::FftProcessor;
use crate::dsp::filter::{HighPassFilter, LowPassFilter, SpectralFilter};
use crate::dsp::wave::Wave;

/// Two-sided spectrum of a wave.
///
/// Bin `k` of an `n`-point transform sits at `k * rate / n` Hz for `k <= n/2`
/// and at `(k - n) * rate / n` Hz above that, so every negative frequency
/// mirrors a positive one and `|f|` never exceeds Nyquist.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    amplitudes: Vec<Complex64>,
    frequencies: Vec<f64>,
    sample_rate: f64,
    start: f64,
}

/// Frequencies of the bins of an `n`-point transform at `sample_rate`
pub fn bin_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    let half = n / 2;
    (0..n)
        .map(|k| {
            let k = if k <= half { k as f64 } else { k as f64 - n as f64 };
            k * sample_rate / n as f64
        })
        .collect()
}

impl Spectrum {
    /// Forward-transform the wave's samples
    pub fn from_wave(wave: &Wave) -> Self {
        let n = wave.len();
        let amplitudes = if n == 0 {
            Vec::new()
        } else {
            FftProcessor::new(n).forward(wave.samples())
        };

        Self {
            amplitudes,
            frequencies: bin_frequencies(n, wave.sample_rate()),
            sample_rate: wave.sample_rate(),
            start: wave.start(),
        }
    }

    /// Inverse-transform back to a wave on the original time grid
    pub fn make_wave(&self) -> WaveResult<Wave> {
        let n = self.amplitudes.len();
        let samples = if n == 0 {
            Vec::new()
        } else {
            FftProcessor::new(n).inverse(&self.amplitudes)
        };
        Wave::from_samples(samples, self.start, self.sample_rate)
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    pub fn amplitudes_mut(&mut self) -> &mut [Complex64] {
        &mut self.amplitudes
    }

    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }

    /// Highest representable frequency
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Non-negative frequency with the largest magnitude, if any
    pub fn peak_frequency(&self) -> Option<f64> {
        self.frequencies
            .iter()
            .zip(&self.amplitudes)
            .filter(|(f, _)| **f >= 0.0)
            .max_by(|(_, a), (_, b)| a.norm().total_cmp(&b.norm()))
            .map(|(f, _)| *f)
    }

    /// Run a filter over the bins in place
    pub fn apply(&mut self, filter: &dyn SpectralFilter) {
        filter.filter(&mut self.amplitudes, &self.frequencies);
    }

    /// Zero every bin above `cutoff` Hz
    pub fn low_pass(&mut self, cutoff: f64) -> WaveResult<()> {
        self.apply(&LowPassFilter::new(cutoff)?);
        Ok(())
    }

    /// Zero every bin below `cutoff` Hz
    pub fn high_pass(&mut self, cutoff: f64) -> WaveResult<()> {
        self.apply(&HighPassFilter::new(cutoff)?);
        Ok(())
    }
}
