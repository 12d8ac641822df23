use std::fmt;
use std::sync::Arc;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::{debug, trace, warn};

use super::currency::currency_forms;
use super::phrase::{
    append_suffix, hyphenate, inflect_last_word, join_words, money_phrase, negate,
};
use super::tables::{MAGNITUDE_LIMIT, MAX_SCALE_EXPONENT, WordTables};
use crate::core::{
    CardinalConverter, ConversionMode, CurrencyFallback, CurrencyRequest, FormatterConfig,
    NoCurrencyFallback, Num2WordsError, Result, Script,
};

/// Spells numbers in Uzbek.
///
/// The script is fixed at construction; every table the formatter reads
/// belongs to that script.
///
/// ```rust
/// use num2words_uz::UzbekFormatter;
///
/// let latin = UzbekFormatter::latin();
/// assert_eq!(latin.to_cardinal(23).unwrap(), "yigirma uch");
/// assert_eq!(latin.to_ordinal(21).unwrap(), "yigirma birinchi");
///
/// let cyrillic = UzbekFormatter::cyrillic();
/// assert_eq!(cyrillic.to_cardinal(12).unwrap(), "ўн икки");
/// ```
#[derive(Clone)]
pub struct UzbekFormatter {
    tables: WordTables,
    fallback: Arc<dyn CurrencyFallback>,
}

impl fmt::Debug for UzbekFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UzbekFormatter")
            .field("script", &self.tables.script())
            .finish_non_exhaustive()
    }
}

impl Default for UzbekFormatter {
    fn default() -> Self {
        Self::new(Script::default())
    }
}

impl UzbekFormatter {
    /// Create a formatter for `script` with no currency fallback.
    pub fn new(script: Script) -> Self {
        debug!(%script, "building uzbek word tables");
        Self {
            tables: WordTables::build(script),
            fallback: Arc::new(NoCurrencyFallback),
        }
    }

    /// Create a formatter from deserialized settings.
    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(config.script)
    }

    /// Latin-script formatter.
    pub fn latin() -> Self {
        Self::new(Script::Latin)
    }

    /// Cyrillic-script formatter.
    pub fn cyrillic() -> Self {
        Self::new(Script::Cyrillic)
    }

    /// Route currencies without local forms to `fallback`.
    pub fn with_fallback(mut self, fallback: Arc<dyn CurrencyFallback>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Script this formatter writes in.
    pub fn script(&self) -> Script {
        self.tables.script()
    }

    /// Word used in front of negative numbers ("minus" / "минус").
    pub fn negword(&self) -> &'static str {
        self.tables.negword()
    }

    /// Cardinal numeral: 105 → "yuz besh", -3 → "minus uch".
    pub fn to_cardinal(&self, number: i128) -> Result<String> {
        let magnitude = self.checked_magnitude(number)?;
        let words = self.spell(magnitude)?;
        Ok(if number < 0 {
            negate(self.tables.negword(), &words)
        } else {
            words
        })
    }

    /// Ordinal numeral: only the final word is inflected.
    pub fn to_ordinal(&self, number: i128) -> Result<String> {
        let magnitude = self.checked_magnitude(number)?;
        let cardinal = self.spell(magnitude)?;
        let words = inflect_last_word(&cardinal, |word| self.tables.ordinal_word(word));
        Ok(if number < 0 {
            negate(self.tables.negword(), &words)
        } else {
            words
        })
    }

    /// Digits, a hyphen, then the ordinal: 21 → "21-yigirma birinchi".
    pub fn to_ordinal_num(&self, number: i128) -> Result<String> {
        Ok(hyphenate(&number.to_string(), &self.to_ordinal(number)?))
    }

    /// Year reading, optionally followed by an era `suffix`.
    ///
    /// Negative years are read by magnitude and take the script's
    /// "before our era" phrase unless a suffix is given. Years such as 1984
    /// are read as two pairs ("o'n to'qqiz sakson to'rt"); years with a
    /// round tens-of-hundreds part (2023), years below 100 and years of five
    /// digits or more are plain cardinals.
    ///
    /// `longval = false` reads every year as a plain cardinal. This is an
    /// addition: the num2words `uz` converter accepts the flag but ignores it.
    pub fn to_year(&self, year: i128, suffix: Option<&str>, longval: bool) -> Result<String> {
        let suffix = match suffix.filter(|s| !s.is_empty()) {
            None if year < 0 => Some(self.tables.bce()),
            other => other,
        };
        let value = self.checked_magnitude(year)?;
        let (high, low) = (value / 100, value % 100);

        let text = if !longval || high == 0 || high % 10 == 0 || high >= 100 {
            self.spell(value)?
        } else {
            let high_text = self.spell(high)?;
            let low_text = if low == 0 {
                self.tables.hundred().to_string()
            } else if low < 10 {
                hyphenate(self.tables.low(0), &self.spell(low)?)
            } else {
                self.spell(low)?
            };
            join_words([high_text.as_str(), low_text.as_str()])
        };
        Ok(append_suffix(&text, suffix))
    }

    /// Currency amount with default options (spelled subunits, " va ").
    pub fn to_currency(&self, value: Decimal, currency: &str) -> Result<String> {
        self.format_currency(&CurrencyRequest::new(value, currency))
    }

    /// Currency amount with explicit options.
    ///
    /// Codes without local forms go to the configured fallback.
    pub fn format_currency(&self, request: &CurrencyRequest) -> Result<String> {
        let Some(forms) = currency_forms(&request.currency) else {
            debug!(currency = %request.currency, "delegating to currency fallback");
            return self.fallback.to_currency(self, request);
        };
        if request.adjective {
            trace!(currency = %request.currency, "no adjective forms, ignoring");
        }
        let (unit, subunit) = forms.names(self.script());

        let (negative, whole, cents) = split_amount(request.value)?;
        let amount = self.to_cardinal(whole)?;
        let cents_text = if request.cents {
            Some(self.to_cardinal(cents)?)
        } else {
            None
        };
        let phrase = money_phrase(
            &amount,
            unit,
            &request.separator,
            cents_text.as_deref().map(|count| (count, subunit)),
        );
        Ok(if negative {
            negate(self.tables.negword(), &phrase)
        } else {
            phrase
        })
    }

    /// Dispatch on `mode`. Integer modes reject values with a fractional part;
    /// currency mode renders so'm with default options.
    pub fn convert(&self, value: Decimal, mode: ConversionMode) -> Result<String> {
        match mode {
            ConversionMode::Cardinal => self.to_cardinal(integral(value, mode)?),
            ConversionMode::Ordinal => self.to_ordinal(integral(value, mode)?),
            ConversionMode::OrdinalNum => self.to_ordinal_num(integral(value, mode)?),
            ConversionMode::Year => self.to_year(integral(value, mode)?, None, true),
            ConversionMode::Currency => self.to_currency(value, "UZS"),
        }
    }

    fn checked_magnitude(&self, number: i128) -> Result<u128> {
        let magnitude = number.unsigned_abs();
        if magnitude >= MAGNITUDE_LIMIT {
            return Err(self.out_of_range(number.to_string()));
        }
        Ok(magnitude)
    }

    fn out_of_range(&self, value: String) -> Num2WordsError {
        warn!(%value, "number out of range");
        Num2WordsError::OutOfRange {
            value,
            limit: format!("10^{}", MAX_SCALE_EXPONENT + 1),
        }
    }

    /// Words for a non-negative magnitude below [`MAGNITUDE_LIMIT`].
    ///
    /// A count of one is silent before "yuz", and before a larger scale
    /// word only when nothing follows it: "ming", but "bir ming bir".
    fn spell(&self, n: u128) -> Result<String> {
        if n < 20 {
            return Ok(self.tables.low(n).to_string());
        }
        if n < 100 {
            let (tens, ones) = (n / 10, n % 10);
            let ones = if ones == 0 { "" } else { self.tables.low(ones) };
            return Ok(join_words([self.tables.tens(tens), ones]));
        }
        if n < 1000 {
            let (hundreds, rest) = (n / 100, n % 100);
            let lead = if hundreds == 1 {
                String::new()
            } else {
                self.spell(hundreds)?
            };
            let rest = if rest == 0 {
                String::new()
            } else {
                self.spell(rest)?
            };
            return Ok(join_words([lead.as_str(), self.tables.hundred(), rest.as_str()]));
        }

        let Some((threshold, name)) = self.tables.scale_for(n) else {
            return Err(self.out_of_range(n.to_string()));
        };
        let (count, rest) = (n / threshold, n % threshold);
        let lead = if count == 1 && rest == 0 {
            String::new()
        } else {
            self.spell(count)?
        };
        let rest = if rest == 0 {
            String::new()
        } else {
            self.spell(rest)?
        };
        Ok(join_words([lead.as_str(), name, rest.as_str()]))
    }
}

impl CardinalConverter for UzbekFormatter {
    fn to_cardinal(&self, number: i128) -> Result<String> {
        UzbekFormatter::to_cardinal(self, number)
    }
}

/// `value` as an integer, for the modes that need one.
fn integral(value: Decimal, mode: ConversionMode) -> Result<i128> {
    if !value.fract().is_zero() {
        return Err(Num2WordsError::InvalidAmount(format!(
            "{value} is not an integer ({mode} needs one)"
        )));
    }
    value
        .to_i128()
        .ok_or_else(|| Num2WordsError::InvalidAmount(value.to_string()))
}

/// Split an amount into (negative, whole units, subunits), rounding to
/// two places half away from zero first.
fn split_amount(value: Decimal) -> Result<(bool, i128, i128)> {
    let rounded = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let whole = rounded.trunc();
    let cents = ((rounded - whole) * dec!(100))
        .to_i128()
        .ok_or_else(|| Num2WordsError::InvalidAmount(value.to_string()))?;
    let whole = whole
        .to_i128()
        .ok_or_else(|| Num2WordsError::InvalidAmount(value.to_string()))?;
    let negative = value.is_sign_negative() && !rounded.is_zero();
    Ok((negative, whole, cents))
}
