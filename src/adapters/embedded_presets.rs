//! Built-in Bulls Power preset tables.

use crate::domain::defaults::DefaultsTable;
use crate::domain::overrides::Override;
use crate::domain::record::{AppliedPrice, FieldValue, RecordKind};
use crate::ports::preset_port::{PresetEntry, PresetPort};

use crate::domain::record::FieldValue::{Decimal, Int, Price};

const EURUSD_M5_INDICATOR: &[(&str, FieldValue)] = &[
    ("applied_price", Price(AppliedPrice::Close)),
    ("period", Int(14)),
    ("shift", Int(0)),
];

const EURUSD_M5_STRATEGY: &[(&str, FieldValue)] = &[
    ("lot_size", Decimal(0.0)),
    ("signal_open_method", Int(0)),
    ("signal_open_filter", Int(1)),
    ("signal_open_level", Decimal(0.0)),
    ("signal_open_boost", Int(0)),
    ("signal_close_method", Int(0)),
    ("signal_close_level", Decimal(0.0)),
    ("price_stop_method", Int(0)),
    ("price_stop_level", Decimal(2.0)),
    ("tick_filter_method", Int(1)),
    ("max_spread", Decimal(0.0)),
];

const EURUSD_M15_INDICATOR: &[(&str, FieldValue)] = &[("shift", Int(0))];

const EURUSD_M15_STRATEGY: &[(&str, FieldValue)] = EURUSD_M5_STRATEGY;

const EURUSD_M30_INDICATOR: &[(&str, FieldValue)] = &[
    ("applied_price", Price(AppliedPrice::Low)),
    ("period", Int(8)),
    ("shift", Int(0)),
];

const EURUSD_M30_STRATEGY: &[(&str, FieldValue)] = &[
    ("lot_size", Decimal(0.0)),
    ("signal_open_method", Int(2)),
    ("signal_open_level", Decimal(0.0)),
    ("signal_open_boost", Int(0)),
    ("signal_close_method", Int(2)),
    ("signal_close_level", Decimal(0.0)),
    ("price_profit_method", Int(60)),
    ("price_profit_level", Decimal(6.0)),
    ("price_stop_method", Int(60)),
    ("price_stop_level", Decimal(6.0)),
    ("tick_filter_method", Int(32)),
    ("max_spread", Decimal(0.0)),
];

/// (symbol, timeframe, kind, overrides)
const TABLE: &[(&str, &str, RecordKind, &[(&str, FieldValue)])] = &[
    ("EURUSD", "M5", RecordKind::Indicator, EURUSD_M5_INDICATOR),
    ("EURUSD", "M5", RecordKind::Strategy, EURUSD_M5_STRATEGY),
    ("EURUSD", "M15", RecordKind::Indicator, EURUSD_M15_INDICATOR),
    ("EURUSD", "M15", RecordKind::Strategy, EURUSD_M15_STRATEGY),
    ("EURUSD", "M30", RecordKind::Indicator, EURUSD_M30_INDICATOR),
    ("EURUSD", "M30", RecordKind::Strategy, EURUSD_M30_STRATEGY),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPresets;

impl EmbeddedPresets {
    pub fn new() -> Self {
        EmbeddedPresets
    }
}

impl PresetPort for EmbeddedPresets {
    fn indicator_defaults(&self) -> DefaultsTable {
        DefaultsTable::create(RecordKind::Indicator)
    }

    fn strategy_defaults(&self) -> DefaultsTable {
        DefaultsTable::create(RecordKind::Strategy)
    }

    fn presets(&self) -> Vec<PresetEntry> {
        TABLE
            .iter()
            .map(|(symbol, timeframe, kind, overrides)| PresetEntry {
                symbol: symbol.to_string(),
                timeframe: timeframe.to_string(),
                kind: *kind,
                overrides: overrides
                    .iter()
                    .map(|(field, value)| -> Override { (field.to_string(), *value) })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_has_both_kinds() {
        let presets = EmbeddedPresets::new().presets();
        assert_eq!(presets.len(), 6);
        for tf in ["M5", "M15", "M30"] {
            for kind in RecordKind::ALL {
                assert!(
                    presets
                        .iter()
                        .any(|p| p.symbol == "EURUSD" && p.timeframe == tf && p.kind == kind),
                    "missing EURUSD {} {}",
                    tf,
                    kind
                );
            }
        }
    }

    #[test]
    fn override_fields_belong_to_their_kind() {
        for entry in EmbeddedPresets::new().presets() {
            for (field, _) in &entry.overrides {
                assert!(
                    entry.kind.field_names().contains(&field.as_str()),
                    "{} is not a {} field",
                    field,
                    entry.kind
                );
            }
        }
    }

    #[test]
    fn m15_indicator_only_pins_shift() {
        let presets = EmbeddedPresets::new().presets();
        let m15 = presets
            .iter()
            .find(|p| p.timeframe == "M15" && p.kind == RecordKind::Indicator)
            .unwrap();
        assert_eq!(m15.overrides, vec![("shift".to_string(), Int(0))]);
    }
}
