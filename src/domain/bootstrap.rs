//! Startup construction of the parameter registry.
//!
//! Every preset entry is resolved eagerly against the matching defaults
//! table. The first failure aborts the build, so callers never see a
//! partially populated registry.

use crate::domain::error::ParamsError;
use crate::domain::overrides::TimeframeOverride;
use crate::domain::record::RecordKind;
use crate::domain::registry::{ConfigRegistry, normalize_symbol};
use crate::domain::timeframe::Timeframe;
use crate::ports::preset_port::PresetPort;
use std::collections::BTreeSet;
use tracing::info;

pub fn build_registry(port: &dyn PresetPort) -> Result<ConfigRegistry, ParamsError> {
    let indicator_defaults = port.indicator_defaults();
    let strategy_defaults = port.strategy_defaults();
    check_kind(indicator_defaults.kind(), RecordKind::Indicator)?;
    check_kind(strategy_defaults.kind(), RecordKind::Strategy)?;

    let mut registry = ConfigRegistry::new();
    let mut seen: BTreeSet<(String, Timeframe, RecordKind)> = BTreeSet::new();

    for entry in port.presets() {
        let timeframe: Timeframe = entry.timeframe.parse()?;
        let defaults = match entry.kind {
            RecordKind::Indicator => &indicator_defaults,
            RecordKind::Strategy => &strategy_defaults,
        };
        let record = TimeframeOverride::new(defaults, timeframe)
            .with_all(entry.overrides)
            .resolve()?;
        registry.register(&entry.symbol, timeframe, entry.kind, record)?;
        seen.insert((normalize_symbol(&entry.symbol), timeframe, entry.kind));
    }

    check_pairs_complete(&seen)?;
    registry.seal();
    info!(entries = registry.len(), "parameter registry ready");
    Ok(registry)
}

fn check_kind(actual: RecordKind, expected: RecordKind) -> Result<(), ParamsError> {
    if actual != expected {
        return Err(ParamsError::Configuration {
            reason: format!("{} defaults supplied where {} defaults expected", actual, expected),
        });
    }
    Ok(())
}

/// Each (symbol, timeframe) that appears must carry both record kinds.
fn check_pairs_complete(
    seen: &BTreeSet<(String, Timeframe, RecordKind)>,
) -> Result<(), ParamsError> {
    for (symbol, timeframe, kind) in seen {
        for partner in RecordKind::ALL {
            if partner != *kind && !seen.contains(&(symbol.clone(), *timeframe, partner)) {
                return Err(ParamsError::NotFound {
                    symbol: symbol.clone(),
                    timeframe: timeframe.to_string(),
                    kind: partner.to_string(),
                });
            }
        }
    }
    Ok(())
}
