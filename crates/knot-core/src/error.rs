use thiserror::Error;

/// Failure to read a color written as `#rrggbb`, `rrggbb` or `0xrrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in {0:?}")]
    Digits(String),
}

/// Rejected startup configuration value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid color for `{key}`: {source}")]
    Color {
        key: String,
        #[source]
        source: ColorParseError,
    },
    #[error("invalid number for `{key}`: {value:?}")]
    Number { key: String, value: String },
    #[error("invalid switch for `{key}`: {value:?} (expected on/off)")]
    Switch { key: String, value: String },
}
