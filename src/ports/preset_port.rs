//! Preset data port: where default and override tables come from.

use crate::domain::defaults::DefaultsTable;
use crate::domain::overrides::Override;
use crate::domain::record::RecordKind;

/// Overrides for one (symbol, timeframe, kind) triple, as supplied by a loader.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetEntry {
    pub symbol: String,
    pub timeframe: String,
    pub kind: RecordKind,
    pub overrides: Vec<Override>,
}

pub trait PresetPort {
    fn indicator_defaults(&self) -> DefaultsTable;
    fn strategy_defaults(&self) -> DefaultsTable;
    fn presets(&self) -> Vec<PresetEntry>;
}
