use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::Num2WordsError;

/// Output form requested from a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    /// "yigirma uch"
    #[default]
    Cardinal,
    /// "yigirma uchinchi"
    Ordinal,
    /// "23-yigirma uchinchi"
    OrdinalNum,
    /// "ikki ming yigirma uch"
    Year,
    /// "yuz ellik sakkiz so'm va o'ttiz tiyin"
    Currency,
}

impl ConversionMode {
    /// Mode name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::Cardinal => "cardinal",
            ConversionMode::Ordinal => "ordinal",
            ConversionMode::OrdinalNum => "ordinal_num",
            ConversionMode::Year => "year",
            ConversionMode::Currency => "currency",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = Num2WordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cardinal" => Ok(ConversionMode::Cardinal),
            "ordinal" => Ok(ConversionMode::Ordinal),
            "ordinal_num" => Ok(ConversionMode::OrdinalNum),
            "year" => Ok(ConversionMode::Year),
            "currency" => Ok(ConversionMode::Currency),
            other => Err(Num2WordsError::UnknownMode(other.to_string())),
        }
    }
}
