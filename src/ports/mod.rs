//! Port traits (interfaces)
//!
//! These traits define the boundaries between wave data and presentation
//! backends. Adapters implement them to connect to real audio or plotting
//! libraries; the crate itself only ships in-memory recorders.

pub mod audio;
pub mod plot;

pub use audio::*;
pub use plot::*;
