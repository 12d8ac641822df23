//! Currency names known to the Uzbek formatter.

use crate::core::Script;

/// Unit and subunit names of one currency in both scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyForms {
    /// (unit, subunit) in Latin script.
    pub latin: (&'static str, &'static str),
    /// (unit, subunit) in Cyrillic script.
    pub cyrillic: (&'static str, &'static str),
}

impl CurrencyForms {
    /// (unit, subunit) for `script`.
    pub fn names(&self, script: Script) -> (&'static str, &'static str) {
        match script {
            Script::Latin => self.latin,
            Script::Cyrillic => self.cyrillic,
        }
    }
}

/// Look up the forms for an ISO 4217 code. Codes are case-sensitive.
pub fn currency_forms(code: &str) -> Option<&'static CurrencyForms> {
    CURRENCY_FORMS
        .binary_search_by(|(c, _)| c.cmp(&code))
        .ok()
        .map(|idx| &CURRENCY_FORMS[idx].1)
}

/// Sorted by code for binary search.
static CURRENCY_FORMS: &[(&str, CurrencyForms)] = &[(
    "UZS", // Uzbekistani So'm
    CurrencyForms {
        latin: ("so'm", "tiyin"),
        cyrillic: ("сўм", "тийин"),
    },
)];
