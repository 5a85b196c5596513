//! End-to-end AM run driven by a `Configuration`
//!
//! message signal ─┐
//!                 ├─ modulate ─ demodulate (× carrier, low-pass) ─ recovered
//! carrier signal ─┘

use crate::domain::{Configuration, WaveResult};
use crate::dsp::{Signal, Wave};
use crate::modem::am::{AmModulator, Modulator};
use crate::modem::demodulator::AmDemodulator;

/// Every wave produced by one run, plus how well the message survived
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub message: Wave,
    pub carrier: Wave,
    pub modulated: Wave,
    pub recovered: Wave,
    /// Pearson correlation between `recovered` and `message`
    pub correlation: f64,
}

/// Validated signals and demodulator for a configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: Configuration,
    message: Signal,
    carrier: Signal,
    modulator: AmModulator,
    demodulator: AmDemodulator,
}

impl Pipeline {
    pub fn new(config: Configuration) -> WaveResult<Self> {
        config.validate()?;
        let message = Signal::from_config(&config.message)?;
        let carrier = Signal::from_config(&config.carrier)?;
        let demodulator = AmDemodulator::new(config.cutoff_freq)?;

        Ok(Self {
            config,
            message,
            carrier,
            modulator: AmModulator::new(),
            demodulator,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn run(&self) -> WaveResult<PipelineOutput> {
        let config = &self.config;
        let (duration, start, rate) = (config.duration, config.start, config.sample_rate);
        let message = self.message.create_wave(duration, start, rate)?;
        let carrier = self.carrier.create_wave(duration, start, rate)?;
        let modulated = self.modulator.modulate(&message, &carrier)?;
        let recovered = self.demodulator.demodulate(&modulated, &carrier)?;
        let correlation = recovered.correlation(&message)?;

        log::info!(
            "'{}': {} Hz on {} Hz carrier, cutoff {} Hz, {} samples, corr {correlation:.4}",
            config.name,
            self.message.frequency(),
            self.carrier.frequency(),
            self.demodulator.cutoff(),
            message.len()
        );

        Ok(PipelineOutput {
            message,
            carrier,
            modulated,
            recovered,
            correlation,
        })
    }
}
