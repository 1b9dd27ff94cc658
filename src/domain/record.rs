//! Parameter records for the Bulls Power indicator and strategy.
//!
//! A record is a flat bundle of typed fields. Fields are addressed by name so
//! that sparse override tables can be supplied as data:
//! - `IndicatorParams`: inputs to the indicator computation
//! - `StrategyParams`: signal, stop/profit and tick-filter settings
//! - `ParameterRecord`: either of the two, with name-based get/set

use crate::domain::error::ParamsError;
use std::fmt;
use std::str::FromStr;

/// Price component an indicator reads from each bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppliedPrice {
    Close,
    Open,
    High,
    Low,
    Median,
    Typical,
    Weighted,
}

impl fmt::Display for AppliedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppliedPrice::Close => "close",
            AppliedPrice::Open => "open",
            AppliedPrice::High => "high",
            AppliedPrice::Low => "low",
            AppliedPrice::Median => "median",
            AppliedPrice::Typical => "typical",
            AppliedPrice::Weighted => "weighted",
        };
        f.write_str(name)
    }
}

/// A single field value in an override table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Decimal(f64),
    Price(AppliedPrice),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Decimal(v) => write!(f, "{}", v),
            FieldValue::Price(p) => write!(f, "{}", p),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Decimal(v)
    }
}

impl From<AppliedPrice> for FieldValue {
    fn from(p: AppliedPrice) -> Self {
        FieldValue::Price(p)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordKind {
    Indicator,
    Strategy,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Indicator, RecordKind::Strategy];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Indicator => "indicator",
            RecordKind::Strategy => "strategy",
        }
    }

    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            RecordKind::Indicator => IndicatorParams::FIELDS,
            RecordKind::Strategy => StrategyParams::FIELDS,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "indicator" | "indi" => Ok(RecordKind::Indicator),
            "strategy" | "stg" => Ok(RecordKind::Strategy),
            _ => Err(ParamsError::Configuration {
                reason: format!("unrecognised record kind '{}'", s),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorParams {
    pub applied_price: AppliedPrice,
    pub period: u32,
    pub shift: u32,
}

impl IndicatorParams {
    pub const FIELDS: &'static [&'static str] = &["applied_price", "period", "shift"];
}

impl Default for IndicatorParams {
    fn default() -> Self {
        IndicatorParams {
            applied_price: AppliedPrice::Close,
            period: 13,
            shift: 0,
        }
    }
}

/// Strategy-side settings. Method codes of 0 disable the rule; the meaning of
/// levels is owned by the signal engine.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyParams {
    /// 0 means framework default sizing.
    pub lot_size: f64,
    pub signal_open_method: i32,
    pub signal_open_filter: i32,
    pub signal_open_level: f64,
    pub signal_open_boost: i32,
    pub signal_close_method: i32,
    pub signal_close_level: f64,
    pub price_stop_method: i32,
    pub price_stop_level: f64,
    pub price_profit_method: i32,
    pub price_profit_level: f64,
    pub tick_filter_method: i32,
    /// 0 means no spread cap.
    pub max_spread: f64,
}

impl StrategyParams {
    pub const FIELDS: &'static [&'static str] = &[
        "lot_size",
        "signal_open_method",
        "signal_open_filter",
        "signal_open_level",
        "signal_open_boost",
        "signal_close_method",
        "signal_close_level",
        "price_stop_method",
        "price_stop_level",
        "price_profit_method",
        "price_profit_level",
        "tick_filter_method",
        "max_spread",
    ];
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams {
            lot_size: 0.0,
            signal_open_method: 0,
            signal_open_filter: 1,
            signal_open_level: 0.0,
            signal_open_boost: 0,
            signal_close_method: 0,
            signal_close_level: 0.0,
            price_stop_method: 0,
            price_stop_level: 2.0,
            price_profit_method: 0,
            price_profit_level: 0.0,
            tick_filter_method: 1,
            max_spread: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterRecord {
    Indicator(IndicatorParams),
    Strategy(StrategyParams),
}

impl ParameterRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            ParameterRecord::Indicator(_) => RecordKind::Indicator,
            ParameterRecord::Strategy(_) => RecordKind::Strategy,
        }
    }

    pub fn as_indicator(&self) -> Option<&IndicatorParams> {
        match self {
            ParameterRecord::Indicator(p) => Some(p),
            ParameterRecord::Strategy(_) => None,
        }
    }

    pub fn as_strategy(&self) -> Option<&StrategyParams> {
        match self {
            ParameterRecord::Strategy(p) => Some(p),
            ParameterRecord::Indicator(_) => None,
        }
    }

    pub fn get(&self, field: &str) -> Result<FieldValue, ParamsError> {
        let value = match self {
            ParameterRecord::Indicator(p) => match field {
                "applied_price" => FieldValue::Price(p.applied_price),
                "period" => FieldValue::Int(p.period.into()),
                "shift" => FieldValue::Int(p.shift.into()),
                _ => return Err(self.unknown_field(field)),
            },
            ParameterRecord::Strategy(p) => match field {
                "lot_size" => FieldValue::Decimal(p.lot_size),
                "signal_open_method" => FieldValue::Int(p.signal_open_method.into()),
                "signal_open_filter" => FieldValue::Int(p.signal_open_filter.into()),
                "signal_open_level" => FieldValue::Decimal(p.signal_open_level),
                "signal_open_boost" => FieldValue::Int(p.signal_open_boost.into()),
                "signal_close_method" => FieldValue::Int(p.signal_close_method.into()),
                "signal_close_level" => FieldValue::Decimal(p.signal_close_level),
                "price_stop_method" => FieldValue::Int(p.price_stop_method.into()),
                "price_stop_level" => FieldValue::Decimal(p.price_stop_level),
                "price_profit_method" => FieldValue::Int(p.price_profit_method.into()),
                "price_profit_level" => FieldValue::Decimal(p.price_profit_level),
                "tick_filter_method" => FieldValue::Int(p.tick_filter_method.into()),
                "max_spread" => FieldValue::Decimal(p.max_spread),
                _ => return Err(self.unknown_field(field)),
            },
        };
        Ok(value)
    }

    /// Writes one field, checking its type and range.
    pub fn set(&mut self, field: &str, value: FieldValue) -> Result<(), ParamsError> {
        let kind = self.kind();
        match self {
            ParameterRecord::Indicator(p) => match field {
                "applied_price" => p.applied_price = price(field, value)?,
                "period" => {
                    let period = to_u32(field, int(field, value)?)?;
                    if period == 0 {
                        return Err(invalid(field, "period must be positive"));
                    }
                    p.period = period;
                }
                "shift" => p.shift = to_u32(field, int(field, value)?)?,
                _ => return Err(unknown_field(kind, field)),
            },
            ParameterRecord::Strategy(p) => match field {
                "lot_size" => p.lot_size = non_negative(field, decimal(field, value)?)?,
                "signal_open_method" => p.signal_open_method = code(field, value)?,
                "signal_open_filter" => p.signal_open_filter = code(field, value)?,
                "signal_open_level" => p.signal_open_level = decimal(field, value)?,
                "signal_open_boost" => p.signal_open_boost = code(field, value)?,
                "signal_close_method" => p.signal_close_method = code(field, value)?,
                "signal_close_level" => p.signal_close_level = decimal(field, value)?,
                "price_stop_method" => p.price_stop_method = code(field, value)?,
                "price_stop_level" => p.price_stop_level = decimal(field, value)?,
                "price_profit_method" => p.price_profit_method = code(field, value)?,
                "price_profit_level" => p.price_profit_level = decimal(field, value)?,
                "tick_filter_method" => {
                    let mask = code(field, value)?;
                    if mask < 0 {
                        return Err(invalid(field, "tick filter mask must be non-negative"));
                    }
                    p.tick_filter_method = mask;
                }
                "max_spread" => p.max_spread = non_negative(field, decimal(field, value)?)?,
                _ => return Err(unknown_field(kind, field)),
            },
        }
        Ok(())
    }

    /// Checks every invariant of the record as a whole.
    pub fn validate(&self) -> Result<(), ParamsError> {
        match self {
            ParameterRecord::Indicator(p) => {
                if p.period == 0 {
                    return Err(invalid("period", "period must be positive"));
                }
            }
            ParameterRecord::Strategy(p) => {
                non_negative("lot_size", finite("lot_size", p.lot_size)?)?;
                finite("signal_open_level", p.signal_open_level)?;
                finite("signal_close_level", p.signal_close_level)?;
                finite("price_stop_level", p.price_stop_level)?;
                finite("price_profit_level", p.price_profit_level)?;
                non_negative("max_spread", finite("max_spread", p.max_spread)?)?;
                if p.tick_filter_method < 0 {
                    return Err(invalid(
                        "tick_filter_method",
                        "tick filter mask must be non-negative",
                    ));
                }
            }
        }
        Ok(())
    }

    fn unknown_field(&self, field: &str) -> ParamsError {
        unknown_field(self.kind(), field)
    }
}

impl fmt::Display for ParameterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in self.kind().field_names() {
            match self.get(name) {
                Ok(value) => writeln!(f, "{} = {}", name, value)?,
                Err(_) => return Err(fmt::Error),
            }
        }
        Ok(())
    }
}

fn unknown_field(kind: RecordKind, field: &str) -> ParamsError {
    ParamsError::UnknownField {
        kind: kind.to_string(),
        field: field.to_string(),
    }
}

fn invalid(field: &str, reason: impl Into<String>) -> ParamsError {
    ParamsError::InvalidValue {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn int(field: &str, value: FieldValue) -> Result<i64, ParamsError> {
    match value {
        FieldValue::Int(v) => Ok(v),
        other => Err(invalid(field, format!("expected an integer, got {}", other))),
    }
}

fn to_u32(field: &str, v: i64) -> Result<u32, ParamsError> {
    u32::try_from(v).map_err(|_| invalid(field, format!("{} is out of range", v)))
}

fn code(field: &str, value: FieldValue) -> Result<i32, ParamsError> {
    let v = int(field, value)?;
    i32::try_from(v).map_err(|_| invalid(field, format!("{} is out of range", v)))
}

fn decimal(field: &str, value: FieldValue) -> Result<f64, ParamsError> {
    match value {
        FieldValue::Decimal(v) => finite(field, v),
        FieldValue::Int(v) => Ok(v as f64),
        FieldValue::Price(p) => Err(invalid(field, format!("expected a number, got {}", p))),
    }
}

fn price(field: &str, value: FieldValue) -> Result<AppliedPrice, ParamsError> {
    match value {
        FieldValue::Price(p) => Ok(p),
        other => Err(invalid(field, format!("expected an applied price, got {}", other))),
    }
}

fn finite(field: &str, v: f64) -> Result<f64, ParamsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(invalid(field, "value must be finite"))
    }
}

fn non_negative(field: &str, v: f64) -> Result<f64, ParamsError> {
    if v < 0.0 {
        Err(invalid(field, format!("{} must be non-negative", field)))
    } else {
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator() -> ParameterRecord {
        ParameterRecord::Indicator(IndicatorParams::default())
    }

    fn strategy() -> ParameterRecord {
        ParameterRecord::Strategy(StrategyParams::default())
    }

    #[test]
    fn kind_parses_long_and_short_names() {
        assert_eq!("indicator".parse::<RecordKind>().unwrap(), RecordKind::Indicator);
        assert_eq!("STG".parse::<RecordKind>().unwrap(), RecordKind::Strategy);
    }

    #[test]
    fn unrecognised_kind_is_configuration_error() {
        let err = "oscillator".parse::<RecordKind>().unwrap_err();
        assert!(matches!(err, ParamsError::Configuration { .. }));
    }

    #[test]
    fn unrecognised_kind_error_quotes_input_as_typed() {
        let err = " Bears ".parse::<RecordKind>().unwrap_err();
        assert_eq!(err.to_string(), "configuration error: unrecognised record kind ' Bears '");
    }

    #[test]
    fn every_listed_field_is_readable() {
        for record in [indicator(), strategy()] {
            for name in record.kind().field_names() {
                assert!(record.get(name).is_ok(), "{} not readable", name);
            }
        }
    }

    #[test]
    fn get_unknown_field_fails() {
        let err = indicator().get("lot_size").unwrap_err();
        assert!(matches!(err, ParamsError::UnknownField { field, .. } if field == "lot_size"));
    }

    #[test]
    fn set_period_and_read_back() {
        let mut record = indicator();
        record.set("period", FieldValue::Int(21)).unwrap();
        assert_eq!(record.get("period").unwrap(), FieldValue::Int(21));
    }

    #[test]
    fn zero_period_rejected() {
        let mut record = indicator();
        let err = record.set("period", FieldValue::Int(0)).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidValue { field, .. } if field == "period"));
        assert_eq!(record, indicator());
    }

    #[test]
    fn negative_shift_rejected() {
        let mut record = indicator();
        let err = record.set("shift", FieldValue::Int(-1)).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidValue { field, .. } if field == "shift"));
    }

    #[test]
    fn applied_price_requires_price_value() {
        let mut record = indicator();
        assert!(record.set("applied_price", FieldValue::Int(2)).is_err());
        record
            .set("applied_price", FieldValue::Price(AppliedPrice::Low))
            .unwrap();
        assert_eq!(
            record.get("applied_price").unwrap(),
            FieldValue::Price(AppliedPrice::Low)
        );
    }

    #[test]
    fn integer_widens_into_decimal_field() {
        let mut record = strategy();
        record.set("price_profit_level", FieldValue::Int(6)).unwrap();
        assert_eq!(
            record.get("price_profit_level").unwrap(),
            FieldValue::Decimal(6.0)
        );
    }

    #[test]
    fn decimal_rejected_for_method_code() {
        let mut record = strategy();
        let err = record
            .set("signal_open_method", FieldValue::Decimal(2.5))
            .unwrap_err();
        assert!(
            matches!(err, ParamsError::InvalidValue { field, .. } if field == "signal_open_method")
        );
    }

    #[test]
    fn method_code_out_of_i32_range_rejected() {
        let mut record = strategy();
        assert!(
            record
                .set("price_stop_method", FieldValue::Int(i64::from(i32::MAX) + 1))
                .is_err()
        );
    }

    #[test]
    fn negative_lot_size_and_spread_rejected() {
        let mut record = strategy();
        assert!(record.set("lot_size", FieldValue::Decimal(-0.1)).is_err());
        assert!(record.set("max_spread", FieldValue::Int(-3)).is_err());
        assert!(record.set("tick_filter_method", FieldValue::Int(-1)).is_err());
    }

    #[test]
    fn non_finite_level_rejected() {
        let mut record = strategy();
        assert!(
            record
                .set("signal_open_level", FieldValue::Decimal(f64::NAN))
                .is_err()
        );
    }

    #[test]
    fn validate_catches_directly_built_records() {
        let bad = ParameterRecord::Indicator(IndicatorParams {
            period: 0,
            ..IndicatorParams::default()
        });
        assert!(bad.validate().is_err());

        let bad = ParameterRecord::Strategy(StrategyParams {
            max_spread: -1.0,
            ..StrategyParams::default()
        });
        assert!(matches!(
            bad.validate().unwrap_err(),
            ParamsError::InvalidValue { field, .. } if field == "max_spread"
        ));

        assert!(indicator().validate().is_ok());
        assert!(strategy().validate().is_ok());
    }

    #[test]
    fn display_lists_fields_in_order() {
        let text = indicator().to_string();
        assert_eq!(text, "applied_price = close\nperiod = 13\nshift = 0\n");
    }
}
