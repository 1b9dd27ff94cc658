//! Port traits implemented by adapters.

pub mod preset_port;
