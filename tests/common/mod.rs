#![allow(dead_code)]

use bullsparams::domain::defaults::DefaultsTable;
use bullsparams::domain::record::{FieldValue, RecordKind};
use bullsparams::ports::preset_port::{PresetEntry, PresetPort};

pub struct MockPresetPort {
    pub indicator_defaults: DefaultsTable,
    pub strategy_defaults: DefaultsTable,
    pub entries: Vec<PresetEntry>,
}

impl MockPresetPort {
    pub fn new() -> Self {
        Self {
            indicator_defaults: DefaultsTable::create(RecordKind::Indicator),
            strategy_defaults: DefaultsTable::create(RecordKind::Strategy),
            entries: Vec::new(),
        }
    }

    pub fn with_entry(
        mut self,
        symbol: &str,
        timeframe: &str,
        kind: RecordKind,
        overrides: &[(&str, FieldValue)],
    ) -> Self {
        self.entries.push(PresetEntry {
            symbol: symbol.to_string(),
            timeframe: timeframe.to_string(),
            kind,
            overrides: overrides
                .iter()
                .map(|(field, value)| (field.to_string(), *value))
                .collect(),
        });
        self
    }

    /// Adds indicator and strategy entries for the pair with no overrides.
    pub fn with_pair(self, symbol: &str, timeframe: &str) -> Self {
        self.with_entry(symbol, timeframe, RecordKind::Indicator, &[])
            .with_entry(symbol, timeframe, RecordKind::Strategy, &[])
    }

    pub fn with_strategy_defaults(mut self, defaults: DefaultsTable) -> Self {
        self.strategy_defaults = defaults;
        self
    }
}

impl PresetPort for MockPresetPort {
    fn indicator_defaults(&self) -> DefaultsTable {
        self.indicator_defaults.clone()
    }

    fn strategy_defaults(&self) -> DefaultsTable {
        self.strategy_defaults.clone()
    }

    fn presets(&self) -> Vec<PresetEntry> {
        self.entries.clone()
    }
}

pub fn int(v: i64) -> FieldValue {
    FieldValue::Int(v)
}

pub fn dec(v: f64) -> FieldValue {
    FieldValue::Decimal(v)
}
