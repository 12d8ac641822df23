//! Capability contracts shared between a language formatter and its
//! collaborators.

use rust_decimal::Decimal;
use tracing::debug;

use super::error::{Num2WordsError, Result};

/// Default separator between the unit phrase and the subunit phrase.
pub const DEFAULT_SEPARATOR: &str = " va ";

/// Anything that can spell out an integer as a cardinal numeral.
pub trait CardinalConverter {
    /// Spell `number` as a cardinal.
    fn to_cardinal(&self, number: i128) -> Result<String>;
}

/// Renders currency amounts for codes a formatter has no forms for.
pub trait CurrencyFallback: Send + Sync {
    /// Spell out `request`, using `cardinal` for the numeral parts.
    fn to_currency(
        &self,
        cardinal: &dyn CardinalConverter,
        request: &CurrencyRequest,
    ) -> Result<String>;
}

/// A currency amount together with its rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyRequest {
    /// Amount in whole units; subunits live in the fractional part.
    pub value: Decimal,
    /// ISO 4217 code (e.g. "UZS").
    pub currency: String,
    /// Spell subunits (`true`) or leave the subunit phrase out.
    pub cents: bool,
    /// Text placed between the unit phrase and the subunit phrase.
    pub separator: String,
    /// Request adjectival currency names where a language has them.
    pub adjective: bool,
}

impl CurrencyRequest {
    /// Request with default options: spelled cents, `" va "` separator, no adjective.
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
            cents: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            adjective: false,
        }
    }

    /// Include or drop the subunit phrase.
    pub fn cents(mut self, cents: bool) -> Self {
        self.cents = cents;
        self
    }

    /// Set the unit/subunit separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Ask for adjectival currency names.
    pub fn adjective(mut self, adjective: bool) -> Self {
        self.adjective = adjective;
        self
    }
}

/// Fallback that knows no currencies at all.
///
/// Used when a formatter is built without a collaborator; every
/// delegated request fails with [`Num2WordsError::UnsupportedCurrency`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCurrencyFallback;

impl CurrencyFallback for NoCurrencyFallback {
    fn to_currency(
        &self,
        _cardinal: &dyn CardinalConverter,
        request: &CurrencyRequest,
    ) -> Result<String> {
        debug!(currency = %request.currency, "no fallback for currency");
        Err(Num2WordsError::UnsupportedCurrency(request.currency.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    struct Digits;

    impl CardinalConverter for Digits {
        fn to_cardinal(&self, number: i128) -> Result<String> {
            Ok(number.to_string())
        }
    }

    #[test]
    fn request_defaults() {
        let req = CurrencyRequest::new(dec!(12.50), "EUR");
        assert!(req.cents);
        assert_eq!(req.separator, " va ");
        assert!(!req.adjective);
    }

    #[test]
    fn request_setters() {
        let req = CurrencyRequest::new(dec!(1), "USD")
            .cents(false)
            .separator(", ")
            .adjective(true);
        assert!(!req.cents);
        assert_eq!(req.separator, ", ");
        assert!(req.adjective);
    }

    #[test]
    fn no_fallback_rejects() {
        let req = CurrencyRequest::new(dec!(5), "EUR");
        assert_eq!(
            NoCurrencyFallback.to_currency(&Digits, &req),
            Err(Num2WordsError::UnsupportedCurrency("EUR".into()))
        );
    }
}
