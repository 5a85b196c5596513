//! AM modulator — multiplies a message onto a carrier
//!
//! Modulation: `y = message * carrier` (double-sideband, suppressed carrier).
//! Coherent demodulation multiplies by the same carrier again:
//!
//! ```text
//! m·c·c = m·cos²(ωt) = m/2 + (m/2)·cos(2ωt)
//! ```
//!
//! so the message reappears at half amplitude next to a copy shifted up to
//! twice the carrier frequency, which a low-pass filter then removes.

use crate::domain::WaveResult;
use crate::dsp::Wave;

/// Combines a message with a carrier
pub trait Modulator {
    fn modulate(&self, message: &Wave, carrier: &Wave) -> WaveResult<Wave>;
}

/// First (unfiltered) demodulation step
pub trait BaseDemodulator {
    fn demodulate(&self, modulated: &Wave, carrier: &Wave) -> WaveResult<Wave>;
}

/// Product modulator / product detector
#[derive(Debug, Clone, Copy, Default)]
pub struct AmModulator;

impl AmModulator {
    pub fn new() -> Self {
        Self
    }
}

impl Modulator for AmModulator {
    fn modulate(&self, message: &Wave, carrier: &Wave) -> WaveResult<Wave> {
        let modulated = carrier.multiply(message)?;
        log::debug!("modulated {} samples at {} Hz", modulated.len(), modulated.sample_rate());
        Ok(modulated)
    }
}

impl BaseDemodulator for AmModulator {
    fn demodulate(&self, modulated: &Wave, carrier: &Wave) -> WaveResult<Wave> {
        modulated.multiply(carrier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WaveError;
    use crate::dsp::Signal;

    #[test]
    fn modulate_is_sample_product() {
        let message = Signal::sine(5.0).unwrap().create_wave(1.0, 0.0, 100.0).unwrap();
        let carrier = Signal::sine(40.0).unwrap().create_wave(1.0, 0.0, 100.0).unwrap();

        let modulated = AmModulator::new().modulate(&message, &carrier).unwrap();

        for i in 0..modulated.len() {
            let expected = message.samples()[i] * carrier.samples()[i];
            assert!((modulated.samples()[i] - expected).abs() < 1e-15);
        }
        assert_eq!(modulated.timestamps(), carrier.timestamps());
    }

    #[test]
    fn modulate_rejects_mismatched_waves() {
        let message = Signal::sine(5.0).unwrap().create_wave(1.0, 0.0, 100.0).unwrap();
        let carrier = Signal::sine(40.0).unwrap().create_wave(0.5, 0.0, 100.0).unwrap();
        let result = AmModulator::new().modulate(&message, &carrier);
        assert!(matches!(result, Err(WaveError::ShapeMismatch(_))));
    }

    #[test]
    fn base_demodulation_squares_carrier() {
        let carrier = Signal::sine(40.0).unwrap().create_wave(1.0, 0.0, 100.0).unwrap();
        let ones = crate::dsp::Wave::from_samples(vec![1.0; 100], 0.0, 100.0).unwrap();
        let modulated = AmModulator::new().modulate(&ones, &carrier).unwrap();
        let product = AmModulator::new().demodulate(&modulated, &carrier).unwrap();

        // Mean of sin² over whole cycles is 1/2
        let mean = product.samples().iter().sum::<f64>() / product.len() as f64;
        assert!((mean - 0.5).abs() < 1e-9, "mean = {mean}");
    }
}
