//! Writing systems and formatter configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::Num2WordsError;

/// Writing system used for every word a formatter emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    /// Official Latin alphabet ("o'n ikki").
    #[default]
    Latin,
    /// Cyrillic alphabet ("ўн икки").
    Cyrillic,
}

impl Script {
    /// Lowercase configuration name of the script.
    pub fn as_str(&self) -> &'static str {
        match self {
            Script::Latin => "latin",
            Script::Cyrillic => "cyrillic",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Script {
    type Err = Num2WordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" => Ok(Script::Latin),
            "cyrillic" => Ok(Script::Cyrillic),
            _ => Err(Num2WordsError::UnknownScript(s.to_string())),
        }
    }
}

/// Construction-time settings for a formatter.
///
/// Deserializes from `{"script": "cyrillic"}`; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Script used for the formatter's whole lifetime.
    pub script: Script,
}

impl FormatterConfig {
    /// Config selecting the given script.
    pub fn new(script: Script) -> Self {
        Self { script }
    }
}
