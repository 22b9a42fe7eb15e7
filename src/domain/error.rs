//! Domain error types.

/// Failure to turn free text into an amount.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("not a valid amount: {raw:?}")]
    Invalid { raw: String },
}

/// Failure to build a projection from calculator form fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("invalid {field}: {source}")]
    Invalid {
        field: &'static str,
        source: AmountParseError,
    },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

/// Top-level error type for wealthpath.
#[derive(Debug, thiserror::Error)]
pub enum WealthPathError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("session storage error at {path}: {reason}")]
    SessionIo { path: String, reason: String },

    #[error("corrupt session data at {path}: {reason}")]
    SessionCorrupt { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&WealthPathError> for std::process::ExitCode {
    fn from(err: &WealthPathError) -> Self {
        let code: u8 = match err {
            WealthPathError::Io(_) => 1,
            WealthPathError::ConfigParse { .. }
            | WealthPathError::ConfigMissing { .. }
            | WealthPathError::ConfigInvalid { .. } => 2,
            WealthPathError::SessionIo { .. } | WealthPathError::SessionCorrupt { .. } => 3,
            WealthPathError::Form(_) => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_error_wraps_parse_error_message() {
        let err = FormError::Invalid {
            field: "years",
            source: AmountParseError::Invalid {
                raw: "ten".to_string(),
            },
        };
        assert_eq!(err.to_string(), "invalid years: not a valid amount: \"ten\"");
    }

    #[test]
    fn form_error_converts_into_top_level() {
        let err: WealthPathError = FormError::Missing { field: "years" }.into();
        assert!(matches!(err, WealthPathError::Form(FormError::Missing { .. })));
        assert_eq!(err.to_string(), "years is required");
    }

    #[test]
    fn config_invalid_message_names_section_and_key() {
        let err = WealthPathError::ConfigInvalid {
            section: "display".into(),
            key: "currency".into(),
            reason: "unknown currency".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value [display] currency: unknown currency"
        );
    }

    fn exit_repr(err: &WealthPathError) -> String {
        format!("{:?}", std::process::ExitCode::from(err))
    }

    #[test]
    fn every_error_maps_to_its_exit_code() {
        let cases = [
            (WealthPathError::Io(std::io::Error::other("disk full")), 1),
            (
                WealthPathError::ConfigParse {
                    file: "a.ini".into(),
                    reason: "bad".into(),
                },
                2,
            ),
            (
                WealthPathError::ConfigMissing {
                    section: "calculator".into(),
                    key: "years".into(),
                },
                2,
            ),
            (
                WealthPathError::ConfigInvalid {
                    section: "display".into(),
                    key: "currency".into(),
                    reason: "unknown".into(),
                },
                2,
            ),
            (
                WealthPathError::SessionIo {
                    path: "s.json".into(),
                    reason: "denied".into(),
                },
                3,
            ),
            (
                WealthPathError::SessionCorrupt {
                    path: "s.json".into(),
                    reason: "eof".into(),
                },
                3,
            ),
            (FormError::Negative { field: "years" }.into(), 4),
        ];
        for (err, code) in &cases {
            assert_eq!(
                exit_repr(err),
                format!("{:?}", std::process::ExitCode::from(*code)),
                "{err}"
            );
        }
    }
}
