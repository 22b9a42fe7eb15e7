//! Configuration validation.
//!
//! Runs before any command uses config values, so bad files fail with a
//! section/key pointer instead of a confusing form error later.

use crate::domain::amount::{parse_amount, Currency};
use crate::domain::error::WealthPathError;
use crate::ports::config_port::ConfigPort;

const CALCULATOR_AMOUNTS: [&str; 3] = ["initial_amount", "monthly_contribution", "years"];

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), WealthPathError> {
    validate_calculator_config(config)?;
    validate_display_config(config)?;
    validate_session_config(config)?;
    Ok(())
}

/// Every `[calculator]` key is optional, but present keys must parse.
pub fn validate_calculator_config(config: &dyn ConfigPort) -> Result<(), WealthPathError> {
    for key in CALCULATOR_AMOUNTS {
        if let Some(value) = calculator_value(config, key)? {
            if value < 0.0 {
                return Err(invalid("calculator", key, format!("{key} must be non-negative")));
            }
        }
    }
    calculator_value(config, "annual_rate_percent")?;
    Ok(())
}

pub fn validate_display_config(config: &dyn ConfigPort) -> Result<(), WealthPathError> {
    match config.get_string("display", "currency") {
        Some(code) => code
            .parse::<Currency>()
            .map(|_| ())
            .map_err(|e| invalid("display", "currency", e.to_string())),
        None => Ok(()),
    }
}

fn validate_session_config(config: &dyn ConfigPort) -> Result<(), WealthPathError> {
    match config.get_string("session", "path") {
        Some(path) if path.trim().is_empty() => {
            Err(invalid("session", "path", "path must not be empty".to_string()))
        }
        _ => Ok(()),
    }
}

fn calculator_value(config: &dyn ConfigPort, key: &str) -> Result<Option<f64>, WealthPathError> {
    match config.get_string("calculator", key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse_amount(&raw)
            .map(Some)
            .map_err(|e| invalid("calculator", key, e.to_string())),
    }
}

fn invalid(section: &str, key: &str, reason: String) -> WealthPathError {
    WealthPathError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    fn assert_invalid(result: Result<(), WealthPathError>, section: &str, key: &str) {
        match result {
            Err(WealthPathError::ConfigInvalid {
                section: s, key: k, ..
            }) => {
                assert_eq!(s, section);
                assert_eq!(k, key);
            }
            other => panic!("expected ConfigInvalid [{section}] {key}, got {other:?}"),
        }
    }

    #[test]
    fn empty_config_is_valid() {
        assert!(validate_config(&FileConfigAdapter::empty()).is_ok());
    }

    #[test]
    fn full_config_is_valid() {
        let config = adapter(
            "[calculator]\ninitial_amount = $5,000\nmonthly_contribution = 500\n\
             annual_rate_percent = 7\nyears = 10\n[display]\ncurrency = vnd\n\
             [session]\npath = s.json\n",
        );
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn negative_years_rejected() {
        let config = adapter("[calculator]\nyears = -1\n");
        assert_invalid(validate_calculator_config(&config), "calculator", "years");
    }

    #[test]
    fn negative_rate_allowed() {
        let config = adapter("[calculator]\nannual_rate_percent = -0.5\n");
        assert!(validate_calculator_config(&config).is_ok());
    }

    #[test]
    fn unparseable_amount_rejected() {
        let config = adapter("[calculator]\ninitial_amount = plenty\n");
        assert_invalid(validate_calculator_config(&config), "calculator", "initial_amount");

        let config = adapter("[calculator]\nannual_rate_percent = high\n");
        assert_invalid(
            validate_calculator_config(&config),
            "calculator",
            "annual_rate_percent",
        );
    }

    #[test]
    fn unknown_currency_rejected() {
        let config = adapter("[display]\ncurrency = DOGE\n");
        assert_invalid(validate_display_config(&config), "display", "currency");
    }
}
