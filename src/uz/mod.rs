//! Uzbek (`uz`) numeral formatter, Latin and Cyrillic script.

mod currency;
mod formatter;
mod phrase;
mod tables;

pub use currency::{CurrencyForms, currency_forms};
pub use formatter::UzbekFormatter;
