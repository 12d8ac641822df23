//! # num2words-uz
//!
//! Spell numbers out in Uzbek, in Latin or Cyrillic script: cardinals,
//! ordinals, ordinals with a numeral prefix, years and currency amounts.
//!
//! Currency amounts use [`rust_decimal::Decimal`], never floating point.
//! Integers are `i128`; magnitudes up to 10^34 − 1 are supported.
//!
//! ## Quick Start
//!
//! ```rust
//! use num2words_uz::*;
//! use rust_decimal_macros::dec;
//!
//! let uz = UzbekFormatter::new("latin".parse::<Script>().unwrap());
//!
//! assert_eq!(uz.to_cardinal(105).unwrap(), "yuz besh");
//! assert_eq!(uz.to_ordinal_num(21).unwrap(), "21-yigirma birinchi");
//! assert_eq!(uz.to_year(2023, None, true).unwrap(), "ikki ming yigirma uch");
//! assert_eq!(
//!     uz.to_currency(dec!(1001.01), "UZS").unwrap(),
//!     "bir ming bir so'm va bir tiyin"
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | Errors, script and mode selection, converter/fallback traits |
//! | `uz` | The Uzbek formatter and its word tables |

pub mod core;
pub mod uz;

// Re-export the public API at crate root for convenience
pub use crate::core::*;
pub use crate::uz::*;
