//! Uzbek word tables, one fully populated set per script.
//!
//! Tables are built once when a formatter is constructed and only read
//! afterwards.

use crate::core::Script;

/// Largest scale exponent with a name (10^33, decillion).
pub(crate) const MAX_SCALE_EXPONENT: u32 = 33;

/// Exclusive bound on the magnitude any conversion accepts.
pub(crate) const MAGNITUDE_LIMIT: u128 = 10u128.pow(MAX_SCALE_EXPONENT + 1);

/// Exponent of the first generated scale word (million).
const HIGH_SCALE_START: u32 = 6;

/// Static lexicon of one script.
struct Lexicon {
    /// 0..=20
    low: [&'static str; 21],
    /// 20, 30, .., 90 ascending, indexed by `tens digit - 2`.
    tens: [&'static str; 8],
    hundred: &'static str,
    thousand: &'static str,
    /// Stems for 10^6, 10^9, .., 10^33.
    high_stems: [&'static str; 10],
    giga_suffix: &'static str,
    mega_suffix: &'static str,
    /// Ordinals that do not follow the suffix rule, keyed by final word.
    ordinals: &'static [(&'static str, &'static str)],
    ordinal_suffix: &'static str,
    negword: &'static str,
    bce: &'static str,
}

static LATIN: Lexicon = Lexicon {
    low: [
        "nol", "bir", "ikki", "uch", "to'rt", "besh", "olti", "yetti", "sakkiz", "to'qqiz",
        "o'n", "o'n bir", "o'n ikki", "o'n uch", "o'n to'rt", "o'n besh", "o'n olti",
        "o'n yetti", "o'n sakkiz", "o'n to'qqiz", "yigirma",
    ],
    tens: [
        "yigirma", "o'ttiz", "qirq", "ellik", "oltmish", "etmish", "sakson", "to'qson",
    ],
    hundred: "yuz",
    thousand: "ming",
    high_stems: [
        "m", "m", "tr", "kvadr", "kvint", "sext", "sept", "okt", "non", "dec",
    ],
    giga_suffix: "illiard",
    mega_suffix: "illion",
    ordinals: &[
        ("bir", "birinchi"),
        ("ikki", "ikkinchi"),
        ("uch", "uchinchi"),
        ("to'rt", "to'rtinchi"),
        ("besh", "beshinchi"),
        ("olti", "oltinchi"),
        ("yetti", "yettinchi"),
        ("sakkiz", "sakkizinchi"),
        ("to'qqiz", "to'qqizinchi"),
        ("o'n", "o'ninchi"),
    ],
    ordinal_suffix: "inchi",
    negword: "minus",
    bce: "miloddan avval",
};

static CYRILLIC: Lexicon = Lexicon {
    low: [
        "нол", "бир", "икки", "уч", "тўрт", "беш", "олти", "етти", "саккиз", "тўққиз",
        "ўн", "ўн бир", "ўн икки", "ўн уч", "ўн тўрт", "ўн беш", "ўн олти",
        "ўн етти", "ўн саккиз", "ўн тўққиз", "йигирма",
    ],
    tens: [
        "йигирма", "ўттиз", "қирқ", "эллик", "олтмиш", "етмиш", "саксон", "тўқсон",
    ],
    hundred: "йуз",
    thousand: "минг",
    high_stems: [
        "м", "м", "тр", "квадр", "квинт", "секст", "септ", "окт", "нон", "дец",
    ],
    giga_suffix: "иллиард",
    mega_suffix: "иллион",
    ordinals: &[
        ("бир", "биринчи"),
        ("икки", "иккинчи"),
        ("уч", "учинчи"),
        ("тўрт", "тўртинчи"),
        ("беш", "бешинчи"),
        ("олти", "олтинчи"),
        ("етти", "еттинчи"),
        ("саккиз", "саккизинчи"),
        ("тўққиз", "тўққизинчи"),
        ("ўн", "ўнинчи"),
    ],
    ordinal_suffix: "инчи",
    negword: "минус",
    bce: "милоддан аввал",
};

/// Read-only tables consulted by every conversion of one formatter.
#[derive(Debug, Clone)]
pub(crate) struct WordTables {
    script: Script,
    low: &'static [&'static str; 21],
    tens: &'static [&'static str; 8],
    hundred: &'static str,
    /// (threshold, name), strictly descending from 10^33 to 10^3.
    scales: Vec<(u128, String)>,
    ordinals: &'static [(&'static str, &'static str)],
    ordinal_suffix: &'static str,
    negword: &'static str,
    bce: &'static str,
}

impl WordTables {
    /// Build the full table set for `script`.
    pub(crate) fn build(script: Script) -> Self {
        let lex = match script {
            Script::Latin => &LATIN,
            Script::Cyrillic => &CYRILLIC,
        };
        let mut tables = Self {
            script,
            low: &lex.low,
            tens: &lex.tens,
            hundred: lex.hundred,
            scales: vec![(1000, lex.thousand.to_string())],
            ordinals: lex.ordinals,
            ordinal_suffix: lex.ordinal_suffix,
            negword: lex.negword,
            bce: lex.bce,
        };
        tables.register_high_scale_words(
            &lex.high_stems,
            HIGH_SCALE_START,
            lex.giga_suffix,
            lex.mega_suffix,
        );
        tables
    }

    /// Add scale names for 10^start, 10^(start+3), .. from ascending stems.
    ///
    /// 10^9 takes `giga_suffix` ("milliard"); every other exponent takes
    /// `mega_suffix` ("million", "trillion", ..).
    pub(crate) fn register_high_scale_words(
        &mut self,
        stems: &[&str],
        start_exponent: u32,
        giga_suffix: &str,
        mega_suffix: &str,
    ) {
        for (exponent, stem) in (start_exponent..).step_by(3).zip(stems) {
            let threshold = 10u128.pow(exponent);
            let suffix = if exponent == 9 { giga_suffix } else { mega_suffix };
            self.scales.retain(|(t, _)| *t != threshold);
            self.scales.push((threshold, format!("{stem}{suffix}")));
        }
        self.scales.sort_by(|a, b| b.0.cmp(&a.0));
    }

    pub(crate) fn script(&self) -> Script {
        self.script
    }

    /// Word for 0..=20.
    pub(crate) fn low(&self, n: u128) -> &'static str {
        self.low[n as usize]
    }

    /// Word for `tens * 10`, tens in 2..=9.
    pub(crate) fn tens(&self, tens: u128) -> &'static str {
        self.tens[tens as usize - 2]
    }

    pub(crate) fn hundred(&self) -> &'static str {
        self.hundred
    }

    /// Largest scale whose threshold does not exceed `n`.
    pub(crate) fn scale_for(&self, n: u128) -> Option<(u128, &str)> {
        self.scales
            .iter()
            .find(|(threshold, _)| n >= *threshold)
            .map(|(threshold, name)| (*threshold, name.as_str()))
    }

    /// Ordinal form of a single cardinal word.
    pub(crate) fn ordinal_word(&self, word: &str) -> String {
        match self.ordinals.iter().find(|(cardinal, _)| *cardinal == word) {
            Some((_, ordinal)) => (*ordinal).to_string(),
            None => format!("{word}{}", self.ordinal_suffix),
        }
    }

    pub(crate) fn negword(&self) -> &'static str {
        self.negword
    }

    /// Era phrase used for negative years without an explicit suffix.
    pub(crate) fn bce(&self) -> &'static str {
        self.bce
    }

    #[cfg(test)]
    fn scales(&self) -> &[(u128, String)] {
        &self.scales
    }
}
