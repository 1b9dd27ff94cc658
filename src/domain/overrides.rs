//! Per-timeframe specialisation of a defaults table.
//!
//! Resolution copies the baseline, applies each `(field, value)` pair in
//! order (last write wins) and validates the finished record.

use crate::domain::defaults::DefaultsTable;
use crate::domain::error::ParamsError;
use crate::domain::record::{FieldValue, ParameterRecord};
use crate::domain::timeframe::Timeframe;
use tracing::debug;

pub type Override = (String, FieldValue);

/// Resolves `overrides` on top of `defaults` for the timeframe tagged `timeframe`.
pub fn resolve(
    defaults: &DefaultsTable,
    timeframe: &str,
    overrides: &[Override],
) -> Result<ParameterRecord, ParamsError> {
    let timeframe: Timeframe = timeframe.parse()?;
    apply(defaults, timeframe, overrides)
}

fn apply(
    defaults: &DefaultsTable,
    timeframe: Timeframe,
    overrides: &[Override],
) -> Result<ParameterRecord, ParamsError> {
    let mut record = defaults.record().clone();
    for (field, value) in overrides {
        record.set(field, *value)?;
    }
    record.validate()?;
    debug!(
        defaults = defaults.name(),
        %timeframe,
        overrides = overrides.len(),
        "resolved parameter record"
    );
    Ok(record)
}

/// A defaults table plus the sparse overrides for one timeframe.
#[derive(Debug, Clone)]
pub struct TimeframeOverride<'a> {
    defaults: &'a DefaultsTable,
    timeframe: Timeframe,
    overrides: Vec<Override>,
}

impl<'a> TimeframeOverride<'a> {
    pub fn new(defaults: &'a DefaultsTable, timeframe: Timeframe) -> Self {
        TimeframeOverride {
            defaults,
            timeframe,
            overrides: Vec::new(),
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.overrides.push((field.to_string(), value.into()));
        self
    }

    pub fn with_all(mut self, overrides: impl IntoIterator<Item = Override>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    pub fn resolve(&self) -> Result<ParameterRecord, ParamsError> {
        apply(self.defaults, self.timeframe, &self.overrides)
    }
}
