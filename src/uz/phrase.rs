//! Pure phrase-assembly helpers.
//!
//! Every separator the formatter emits is passed in explicitly here, so
//! punctuation rules stay in one place.

/// Join non-empty words with single spaces.
pub(crate) fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for word in words.into_iter().filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// `"{left}-{right}"`, as in "nol-besh" or "21-yigirma birinchi".
pub(crate) fn hyphenate(left: &str, right: &str) -> String {
    format!("{left}-{right}")
}

/// Prefix a phrase with the negative word.
pub(crate) fn negate(negword: &str, phrase: &str) -> String {
    join_words([negword, phrase])
}

/// Apply `inflect` to the final space-separated word only.
pub(crate) fn inflect_last_word(phrase: &str, inflect: impl FnOnce(&str) -> String) -> String {
    match phrase.rsplit_once(' ') {
        Some((head, last)) => format!("{head} {}", inflect(last)),
        None => inflect(phrase),
    }
}

/// Append an optional trailing phrase (era marker, unit name).
pub(crate) fn append_suffix(text: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) if !suffix.is_empty() => join_words([text, suffix]),
        _ => text.to_string(),
    }
}

/// `"{amount} {unit}"`, then `"{separator}{subunits} {subunit}"` when present.
pub(crate) fn money_phrase(
    amount: &str,
    unit: &str,
    separator: &str,
    subunits: Option<(&str, &str)>,
) -> String {
    let mut out = join_words([amount, unit]);
    if let Some((count, subunit)) = subunits {
        out.push_str(separator);
        out.push_str(&join_words([count, subunit]));
    }
    out
}
