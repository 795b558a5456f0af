//! Display output
//!
//! Until the panel driver lands, every draw request becomes a defmt
//! text line over RTT describing what each display would show.

pub mod renderer;

pub use renderer::LogRenderer;
