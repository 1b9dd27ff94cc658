//! Named baseline parameter tables.

use crate::domain::error::ParamsError;
use crate::domain::record::{IndicatorParams, ParameterRecord, RecordKind, StrategyParams};

pub const INDICATOR_DEFAULTS_NAME: &str = "indi_bulls_defaults";
pub const STRATEGY_DEFAULTS_NAME: &str = "stg_bulls_defaults";

/// A symbol- and timeframe-agnostic baseline for one record kind.
///
/// Built once at startup and only ever lent out by shared reference, so the
/// baseline cannot change underneath the overrides derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsTable {
    name: String,
    record: ParameterRecord,
}

impl DefaultsTable {
    /// Baseline Bulls Power table for `kind`.
    pub fn create(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Indicator => DefaultsTable {
                name: INDICATOR_DEFAULTS_NAME.to_string(),
                record: ParameterRecord::Indicator(IndicatorParams::default()),
            },
            RecordKind::Strategy => DefaultsTable {
                name: STRATEGY_DEFAULTS_NAME.to_string(),
                record: ParameterRecord::Strategy(StrategyParams::default()),
            },
        }
    }

    /// Like [`DefaultsTable::create`], taking the kind as a text tag.
    pub fn for_kind(kind: &str) -> Result<Self, ParamsError> {
        Ok(Self::create(kind.parse()?))
    }

    /// Wraps an externally supplied baseline, which must be valid on its own.
    pub fn named(name: impl Into<String>, record: ParameterRecord) -> Result<Self, ParamsError> {
        record.validate()?;
        Ok(DefaultsTable {
            name: name.into(),
            record,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RecordKind {
        self.record.kind()
    }

    pub fn record(&self) -> &ParameterRecord {
        &self.record
    }
}
