//! Adapters implementing the port traits

pub mod memory;

pub use memory::{MemoryAudioSink, MemoryPlotSink};
