use thiserror::Error;

/// Errors that can occur while spelling out a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Num2WordsError {
    /// The magnitude exceeds the largest scale word the language defines.
    #[error("number out of range: {value} (magnitude must be below {limit})")]
    OutOfRange {
        /// The rejected value, as written by the caller.
        value: String,
        /// The exclusive upper bound on the magnitude.
        limit: String,
    },

    /// Script name other than `latin` or `cyrillic`.
    #[error("unknown script: {0:?} (expected \"latin\" or \"cyrillic\")")]
    UnknownScript(String),

    /// Conversion mode name that no formatter entry point answers to.
    #[error("unknown conversion mode: {0:?}")]
    UnknownMode(String),

    /// No currency forms for this code and no fallback able to render it.
    #[error("currency not supported: {0}")]
    UnsupportedCurrency(String),

    /// Amount that cannot be split into whole units and subunits.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Num2WordsError>;
