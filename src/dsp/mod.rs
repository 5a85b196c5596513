//! Digital Signal Processing
//!
//! Pure functions and value types for signal processing. No I/O dependencies.

pub mod fft;
pub mod filter;
pub mod iter;
pub mod scale;
pub mod signal;
pub mod spectrum;
pub mod wave;

// Re-export commonly used items
pub use fft::FftProcessor;
pub use filter::{HighPassFilter, LowPassFilter, SpectralFilter};
pub use iter::{IterationOrder, SampleIter};
pub use scale::Scaler;
pub use signal::{Signal, SignalBuilder, SignalParams, WaveParams};
pub use spectrum::Spectrum;
pub use wave::Wave;
