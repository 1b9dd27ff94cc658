//! Core domain types and logic.

pub mod timeframe;
pub mod record;
pub mod defaults;
pub mod overrides;
pub mod registry;
pub mod bootstrap;
pub mod error;
