//! AM demodulator with spectrum-domain low-pass filtering
//!
//! Pipeline: modulated wave × carrier → FFT → zero bins above cutoff → IFFT

use crate::domain::{WaveError, WaveResult};
use crate::dsp::{LowPassFilter, Wave};
use crate::modem::am::{AmModulator, BaseDemodulator};

/// Recovers a message from a modulated wave and its carrier.
///
/// The first step is delegated to `B` (a product detector by default); the
/// result is then low-pass filtered in the frequency domain.
#[derive(Debug, Clone)]
pub struct AmDemodulator<B = AmModulator> {
    base: B,
    filter: LowPassFilter,
}

impl AmDemodulator<AmModulator> {
    /// Product-detector demodulator with the given cutoff in Hz
    pub fn new(cutoff: f64) -> WaveResult<Self> {
        Self::with_base(AmModulator::new(), cutoff)
    }
}

impl Default for AmDemodulator<AmModulator> {
    /// 10 kHz cutoff
    fn default() -> Self {
        Self {
            base: AmModulator::new(),
            filter: LowPassFilter::default(),
        }
    }
}

impl<B: BaseDemodulator> AmDemodulator<B> {
    pub fn with_base(base: B, cutoff: f64) -> WaveResult<Self> {
        Ok(Self {
            base,
            filter: LowPassFilter::new(cutoff)?,
        })
    }

    /// Use a pre-built filter (e.g. with partial attenuation)
    pub fn with_filter(base: B, filter: LowPassFilter) -> Self {
        Self { base, filter }
    }

    pub fn cutoff(&self) -> f64 {
        self.filter.cutoff()
    }

    pub fn filter(&self) -> &LowPassFilter {
        &self.filter
    }

    pub fn demodulate(&self, modulated: &Wave, carrier: &Wave) -> WaveResult<Wave> {
        // Checked here too since `B` may not validate its inputs
        if modulated.len() != carrier.len() || modulated.sample_rate() != carrier.sample_rate() {
            return Err(WaveError::ShapeMismatch(format!(
                "modulated wave ({} samples at {} Hz) does not match carrier ({} samples at {} Hz)",
                modulated.len(),
                modulated.sample_rate(),
                carrier.len(),
                carrier.sample_rate()
            )));
        }

        let mixed = self.base.demodulate(modulated, carrier)?;
        let mut spectrum = mixed.make_spectrum();
        spectrum.apply(&self.filter);

        log::debug!(
            "demodulated {} samples, low-pass at {} Hz (Nyquist {} Hz)",
            mixed.len(),
            self.filter.cutoff(),
            spectrum.nyquist()
        );
        spectrum.make_wave()
    }
}
