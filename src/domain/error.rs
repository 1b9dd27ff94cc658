//! Domain error types.

/// Top-level error type for bullsparams.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("configuration error: {reason}")]
    Configuration { reason: String },

    #[error("unknown field '{field}' for {kind} parameters")]
    UnknownField { kind: String, field: String },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("unknown timeframe '{0}'")]
    UnknownTimeframe(String),

    #[error("no {kind} parameters registered for {symbol} {timeframe}")]
    NotFound {
        symbol: String,
        timeframe: String,
        kind: String,
    },

    #[error("registry is sealed, cannot register {symbol} {timeframe} {kind}")]
    SealedRegistry {
        symbol: String,
        timeframe: String,
        kind: String,
    },

    #[error("registry is not sealed yet, lookups are not allowed")]
    RegistryNotReady,
}

impl ParamsError {
    /// Process exit status for this error class.
    pub fn exit_status(&self) -> u8 {
        match self {
            ParamsError::Configuration { .. }
            | ParamsError::UnknownField { .. }
            | ParamsError::InvalidValue { .. }
            | ParamsError::UnknownTimeframe(_) => 2,
            ParamsError::SealedRegistry { .. } | ParamsError::RegistryNotReady => 3,
            ParamsError::NotFound { .. } => 4,
        }
    }
}

impl From<&ParamsError> for std::process::ExitCode {
    fn from(err: &ParamsError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_names_the_key() {
        let err = ParamsError::UnknownField {
            kind: "indicator".into(),
            field: "perod".into(),
        };
        assert_eq!(err.to_string(), "unknown field 'perod' for indicator parameters");
    }

    #[test]
    fn not_found_message() {
        let err = ParamsError::NotFound {
            symbol: "EURUSD".into(),
            timeframe: "H4".into(),
            kind: "strategy".into(),
        };
        assert_eq!(
            err.to_string(),
            "no strategy parameters registered for EURUSD H4"
        );
    }

    #[test]
    fn exit_codes_group_by_error_class() {
        let config = ParamsError::UnknownTimeframe("M2".into());
        let lifecycle = ParamsError::RegistryNotReady;
        let missing = ParamsError::NotFound {
            symbol: "EURUSD".into(),
            timeframe: "M5".into(),
            kind: "indicator".into(),
        };
        assert_eq!(config.exit_status(), 2);
        assert_eq!(lifecycle.exit_status(), 3);
        assert_eq!(missing.exit_status(), 4);
    }
}
