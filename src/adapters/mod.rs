//! Concrete adapter implementations for ports.

pub mod embedded_presets;
