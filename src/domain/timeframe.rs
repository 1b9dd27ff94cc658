//! Bar-aggregation timeframes.

use crate::domain::error::ParamsError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Timeframe {
    M1,
    M5,
    M15,
    M30,
    H1,
    H4,
    D1,
    W1,
    MN1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 9] = [
        Timeframe::M1,
        Timeframe::M5,
        Timeframe::M15,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H4,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::MN1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Timeframe::M1 => "M1",
            Timeframe::M5 => "M5",
            Timeframe::M15 => "M15",
            Timeframe::M30 => "M30",
            Timeframe::H1 => "H1",
            Timeframe::H4 => "H4",
            Timeframe::D1 => "D1",
            Timeframe::W1 => "W1",
            Timeframe::MN1 => "MN1",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = ParamsError;

    /// Accepts `M15`, `m15` and the `PERIOD_M15` spelling.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let upper = tag.trim().to_uppercase();
        let name = upper.strip_prefix("PERIOD_").unwrap_or(upper.as_str());
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.as_str() == name)
            .ok_or_else(|| ParamsError::UnknownTimeframe(tag.to_string()))
    }
}
