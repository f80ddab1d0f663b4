//! Caseless, accent-insensitive normalization of names and terms.
//!
//! Both sides of a match go through the same [`normalize_token`], so
//! "S.à r.l." in a name meets "s.à r.l." in the term table as `["sa", "rl"]`.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Trailing run of symbols that are neither word characters nor dots.
static RE_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.\w]+$").unwrap());

/// Letters that carry no canonical decomposition and survive NFKD unchanged.
fn fold_non_decomposable(c: char) -> Option<&'static str> {
    let folded = match c {
        'ł' => "l",
        'ø' => "o",
        'æ' => "ae",
        'œ' => "oe",
        'ß' => "ss",
        'đ' | 'ð' => "d",
        'þ' => "th",
        'ı' => "i",
        'ħ' => "h",
        'ŧ' => "t",
        'ŋ' => "n",
        _ => return None,
    };
    Some(folded)
}

/// Casefold and strip diacritics: "Säätämö" → "saatamo", "Łoś" → "los".
pub fn remove_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.to_lowercase().nfkd().filter(|c| !is_combining_mark(*c)) {
        match fold_non_decomposable(c) {
            Some(s) => out.push_str(s),
            None => out.push(c),
        }
    }
    out
}

/// Remove the punctuation that legal forms are written with or without:
/// "s.r.o." and "sro", "co-op" and "coop".
pub fn strip_punct(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '.' | ',' | '-')).collect()
}

/// Remove trailing symbols except dots: "Hello World," → "Hello World",
/// "Sony Europe B.V." is kept as is.
pub fn strip_tail(name: &str) -> &str {
    match RE_TAIL.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

/// The comparison key of a single token.
pub fn normalize_token(token: &str) -> String {
    strip_punct(&remove_accents(token))
}

/// A whitespace-delimited piece of a name, with its comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Original spelling, used to rebuild the output
    pub text: &'a str,
    pub key: String,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            key: normalize_token(text),
        }
    }
}

pub fn tokenize(name: &str) -> Vec<Token<'_>> {
    name.split_whitespace().map(Token::new).collect()
}
