//! Run one AM modulation/demodulation pass and report how well the message
//! was recovered.
//!
//!   RUST_LOG=wavelab_lib=debug wavelab [profile.json]
//!
//! Without an argument the default profile is used.

use std::path::Path;
use std::process::ExitCode;

use wavelab_lib::dsp::Wave;
use wavelab_lib::store;
use wavelab_lib::{Configuration, Pipeline, WaveResult};

fn describe(label: &str, wave: &Wave) {
    let peak = wave.make_spectrum().peak_frequency().unwrap_or(0.0);
    let max = wave.samples().iter().fold(0.0f64, |m, s| m.max(s.abs()));
    println!(
        "{label:<10} {:>8} samples  {:>8.3} s  peak {:>9.1} Hz  |max| {max:.3}",
        wave.len(),
        wave.duration(),
        peak
    );
}

fn run(profile: Option<&str>) -> WaveResult<()> {
    let config = match profile {
        Some(path) => store::load_file(Path::new(path))?,
        None => Configuration::default(),
    };

    let output = Pipeline::new(config)?.run()?;

    describe("message", &output.message);
    describe("carrier", &output.carrier);
    describe("modulated", &output.modulated);
    describe("recovered", &output.recovered);
    println!("correlation(recovered, message) = {:.4}", output.correlation);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let profile = std::env::args().nth(1);
    match run(profile.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("wavelab: {e}");
            ExitCode::FAILURE
        }
    }
}
