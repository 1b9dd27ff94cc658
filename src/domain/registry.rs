//! Process-wide lookup of resolved parameter records.
//!
//! The registry is filled during single-threaded startup, then sealed. After
//! `seal()` it only hands out shared references, so one instance can be read
//! from any number of threads without locking.

use crate::domain::error::ParamsError;
use crate::domain::record::{IndicatorParams, ParameterRecord, RecordKind, StrategyParams};
use crate::domain::timeframe::Timeframe;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryKey {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub kind: RecordKind,
}

impl RegistryKey {
    pub fn new(symbol: &str, timeframe: Timeframe, kind: RecordKind) -> Self {
        RegistryKey {
            symbol: normalize_symbol(symbol),
            timeframe,
            kind,
        }
    }
}

pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Building,
    Sealed,
}

#[derive(Debug)]
pub struct ConfigRegistry {
    state: RegistryState,
    entries: BTreeMap<RegistryKey, ParameterRecord>,
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRegistry {
    pub fn new() -> Self {
        ConfigRegistry {
            state: RegistryState::Building,
            entries: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> RegistryState {
        self.state
    }

    pub fn is_sealed(&self) -> bool {
        self.state == RegistryState::Sealed
    }

    /// Inserts or replaces the record for `(symbol, timeframe, kind)`.
    pub fn register(
        &mut self,
        symbol: &str,
        timeframe: Timeframe,
        kind: RecordKind,
        record: ParameterRecord,
    ) -> Result<(), ParamsError> {
        let key = RegistryKey::new(symbol, timeframe, kind);
        if self.is_sealed() {
            return Err(ParamsError::SealedRegistry {
                symbol: key.symbol,
                timeframe: timeframe.to_string(),
                kind: kind.to_string(),
            });
        }
        if record.kind() != kind {
            return Err(ParamsError::Configuration {
                reason: format!(
                    "{} record registered under {} key for {} {}",
                    record.kind(),
                    kind,
                    key.symbol,
                    timeframe
                ),
            });
        }
        record.validate()?;
        debug!(symbol = %key.symbol, %timeframe, %kind, "registered parameters");
        self.entries.insert(key, record);
        Ok(())
    }

    /// Ends the building phase. Sealing an already sealed registry is a no-op.
    pub fn seal(&mut self) {
        if !self.is_sealed() {
            debug!(entries = self.entries.len(), "registry sealed");
            self.state = RegistryState::Sealed;
        }
    }

    pub fn lookup(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        kind: RecordKind,
    ) -> Result<&ParameterRecord, ParamsError> {
        if !self.is_sealed() {
            return Err(ParamsError::RegistryNotReady);
        }
        let key = RegistryKey::new(symbol, timeframe, kind);
        self.entries.get(&key).ok_or_else(|| ParamsError::NotFound {
            symbol: key.symbol.clone(),
            timeframe: timeframe.to_string(),
            kind: kind.to_string(),
        })
    }

    pub fn indicator(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<&IndicatorParams, ParamsError> {
        match self.lookup(symbol, timeframe, RecordKind::Indicator)? {
            ParameterRecord::Indicator(params) => Ok(params),
            ParameterRecord::Strategy(_) => Err(kind_mismatch(RecordKind::Indicator)),
        }
    }

    pub fn strategy(
        &self,
        symbol: &str,
        timeframe: Timeframe,
    ) -> Result<&StrategyParams, ParamsError> {
        match self.lookup(symbol, timeframe, RecordKind::Strategy)? {
            ParameterRecord::Strategy(params) => Ok(params),
            ParameterRecord::Indicator(_) => Err(kind_mismatch(RecordKind::Strategy)),
        }
    }

    /// Every registered entry in key order.
    pub fn entries(
        &self,
    ) -> Result<impl Iterator<Item = (&RegistryKey, &ParameterRecord)>, ParamsError> {
        if !self.is_sealed() {
            return Err(ParamsError::RegistryNotReady);
        }
        Ok(self.entries.iter())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn kind_mismatch(expected: RecordKind) -> ParamsError {
    ParamsError::Configuration {
        reason: format!("registry entry does not hold {} parameters", expected),
    }
}
