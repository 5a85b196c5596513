//! Amplitude scaling as a standalone capability

use crate::dsp::wave::Wave;

/// Multiplies a wave's samples by a fixed factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    factor: f64,
}

impl Scaler {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Scaler that doubles amplitude
    pub fn double() -> Self {
        Self::new(2.0)
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// The scaler that undoes this one, if the factor is non-zero
    pub fn inverse(&self) -> Option<Self> {
        (self.factor != 0.0).then(|| Self::new(1.0 / self.factor))
    }

    pub fn apply<'a>(&self, wave: &'a mut Wave) -> &'a mut Wave {
        wave.scale(self.factor)
    }
}
