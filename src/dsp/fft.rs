//! FFT processing for spectrum conversion

use std::sync::Arc;
use rustfft::{Fft, FftPlanner, num_complex::Complex};

/// Forward/inverse FFT for a fixed transform length.
///
/// Each direction is planned on first use and the plan is reused by every
/// later call, so a processor that only ever runs forward never plans the
/// inverse.
pub struct FftProcessor {
    planner: FftPlanner<f64>,
    forward: Option<Arc<dyn Fft<f64>>>,
    inverse: Option<Arc<dyn Fft<f64>>>,
    fft_size: usize,
}

impl FftProcessor {
    /// Create a new FFT processor with the given size
    pub fn new(fft_size: usize) -> Self {
        Self {
            planner: FftPlanner::new(),
            forward: None,
            inverse: None,
            fft_size,
        }
    }

    fn forward_plan(&mut self) -> Arc<dyn Fft<f64>> {
        let (planner, size) = (&mut self.planner, self.fft_size);
        self.forward
            .get_or_insert_with(|| {
                log::debug!("planned {size}-point forward FFT");
                planner.plan_fft_forward(size)
            })
            .clone()
    }

    fn inverse_plan(&mut self) -> Arc<dyn Fft<f64>> {
        let (planner, size) = (&mut self.planner, self.fft_size);
        self.inverse
            .get_or_insert_with(|| {
                log::debug!("planned {size}-point inverse FFT");
                planner.plan_fft_inverse(size)
            })
            .clone()
    }

    /// Whether the forward and inverse plans have been built yet
    pub fn planned(&self) -> (bool, bool) {
        (self.forward.is_some(), self.inverse.is_some())
    }

    /// Transform real samples into `fft_size` complex bins.
    ///
    /// Input shorter than `fft_size` is zero-padded, longer input is truncated.
    pub fn forward(&mut self, samples: &[f64]) -> Vec<Complex<f64>> {
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .take(self.fft_size)
            .map(|&s| Complex::new(s, 0.0))
            .collect();
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.forward_plan().process(&mut buffer);
        buffer
    }

    /// Transform complex bins back into real samples.
    ///
    /// rustfft does not normalize, so the output is scaled by `1/n` and the
    /// imaginary part (rounding noise for a conjugate-symmetric spectrum) is dropped.
    pub fn inverse(&mut self, bins: &[Complex<f64>]) -> Vec<f64> {
        let mut buffer = bins.to_vec();
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.inverse_plan().process(&mut buffer);

        let scale = 1.0 / self.fft_size.max(1) as f64;
        buffer.iter().map(|c| c.re * scale).collect()
    }

    /// Get the FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }
}
