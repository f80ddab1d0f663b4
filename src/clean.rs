//! The name cleaner: strips legal-form terms from the ends (and optionally
//! the middle) of a company name.
//!
//! ```
//! use cleanco::{MatchFlags, basename};
//!
//! assert_eq!(basename("Daddy & Sons, Ltd.", MatchFlags::all()), "Daddy & Sons");
//! ```

use std::sync::LazyLock;

use cleanco_types::MatchFlags;
use regex::Regex;
use tracing::debug;

use crate::error::Result;
use crate::finnish::{self, MutualInsurer};
use crate::normalize::{Token, strip_tail, tokenize};
use crate::terms::{CountryScope, TermTable};

/// A trailing country name after one of these is part of the name:
/// "Skultuna Reklam of Sweden", "Hue people in Finland".
const COUNTRY_PREPOSITIONS: &[&str] = &["in", "of"];

/// Words before "Group" shorter than this in total keep it: "ME Group".
const MIN_GROUP_NAME_LENGTH: usize = 5;

static RE_PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(.*\)\s*").unwrap());
static RE_GROUP_FOLLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+group[.,\s-]*").unwrap());
static RE_TRAILING_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?P<before>.+?)\s+group\s*$").unwrap());
static RE_TECHNOLOGIES_NORDIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+technologies\s+nordic\s*$").unwrap());

static DEFAULT_CLEANER: LazyLock<Cleaner> = LazyLock::new(|| Cleaner::new(None));

/// Clean `name` against the terms of every country.
pub fn basename(name: &str, flags: MatchFlags) -> String {
    DEFAULT_CLEANER.basename(name, flags)
}

/// Clean `name` against the terms of one country, given as an ISO code
/// ("FI") or a name ("Finland").
pub fn basename_in(name: &str, flags: MatchFlags, country: Option<&str>) -> String {
    match country {
        None => basename(name, flags),
        Some(_) => Cleaner::new(country).basename(name, flags),
    }
}

/// A prepared term table bound to a country scope.
///
/// Building one normalizes and sorts the whole table, so keep it around
/// when cleaning many names.
#[derive(Debug, Clone)]
pub struct Cleaner {
    scope: CountryScope,
    table: TermTable,
    trailing_names: Vec<&'static str>,
}

impl Cleaner {
    pub fn new(country: Option<&str>) -> Self {
        let scope = CountryScope::resolve(country);
        Self {
            table: TermTable::for_scope(&scope),
            trailing_names: scope.trailing_names(),
            scope,
        }
    }

    /// Also strip `extra` terms, e.g. "Holding".
    pub fn with_extra_terms(mut self, extra: &[String]) -> Result<Self> {
        if !extra.is_empty() {
            self.table = self.table.with_extra(extra)?;
        }
        Ok(self)
    }

    pub fn table(&self) -> &TermTable {
        &self.table
    }

    pub fn scope(&self) -> &CountryScope {
        &self.scope
    }

    /// One matching pass over the tokens of `name`.
    pub fn strip_terms(&self, name: &str, flags: MatchFlags) -> String {
        let mut tokens = tokenize(strip_tail(name));

        if flags.suffix {
            for term in &self.table {
                let n = term.len();
                if tokens.len() < n || !keys_match(&tokens[tokens.len() - n..], term.parts()) {
                    continue;
                }
                if term.is_country_name() && follows_preposition(&tokens) {
                    continue;
                }
                tokens.truncate(tokens.len() - n);
            }
        }

        if flags.prefix {
            for term in &self.table {
                let n = term.len();
                // Country names lead real names: "Suomi Teline"
                if term.is_country_name() {
                    continue;
                }
                if tokens.len() >= n && keys_match(&tokens[..n], term.parts()) {
                    tokens.drain(..n);
                }
            }
        }

        if flags.middle {
            for term in &self.table {
                let n = term.len();
                if n > 1 {
                    let mut i = 0;
                    while tokens.len() > n + 1 && i + n <= tokens.len() {
                        if keys_match(&tokens[i..i + n], term.parts()) {
                            tokens.drain(i..i + n);
                        } else {
                            i += 1;
                        }
                    }
                } else if tokens.len() > 2 {
                    let inner = &tokens[1..tokens.len() - 1];
                    if let Some(i) = inner.iter().position(|t| t.key == term.parts()[0]) {
                        tokens.remove(i + 1);
                    }
                }
            }
        }

        for country in &self.trailing_names {
            let Some(last) = tokens.last() else {
                break;
            };
            if last.text.to_lowercase() == *country && !follows_preposition(&tokens) {
                tokens.pop();
            }
        }

        let joined = tokens.iter().map(|t| t.text).collect::<Vec<_>>().join(" ");
        strip_tail(&joined).to_string()
    }

    /// The base name of `name`, with legal forms, branch phrases and
    /// bilingual duplicates removed.
    pub fn basename(&self, name: &str, flags: MatchFlags) -> String {
        let finnish_rules = self.scope.allows_finnish();
        let mut name = name.to_string();
        let mut keep_cooperative = false;

        if finnish_rules {
            match finnish::mutual_insurer(&name) {
                MutualInsurer::Genitive => {
                    debug!("genitive mutual insurer kept whole: {name:?}");
                    return name.trim().to_string();
                }
                MutualInsurer::Named(insurer) => {
                    debug!("mutual insurer {name:?} → {insurer:?}");
                    name = insurer;
                }
                MutualInsurer::NotInsurer => {}
            }
            keep_cooperative = finnish::has_genitive_cooperative(&name);
            name = finnish::split_bilingual_name(&name).to_string();
        }

        let group_before_form = self.group_precedes_legal_form(&name);

        let before_branch = name.clone();
        let mut branch_removed = false;
        if finnish_rules {
            if let Some(stripped) = finnish::remove_branch_phrase(&name) {
                name = stripped;
                branch_removed = true;
            }
        }

        let mut working = RE_PARENTHESIS.replace_all(&name, " ").trim().to_string();
        if keep_cooperative {
            working = finnish::protect_cooperative(&working);
        }

        // Nested forms: "Company Ltd Oy". Every pass that changes the name
        // drops a token, so this ends.
        let mut cleaned = self.strip_terms(&working, flags);
        loop {
            let next = self.strip_terms(&cleaned, flags);
            if next == cleaned {
                break;
            }
            cleaned = next;
        }

        if cleaned.is_empty() {
            return name.trim().to_string();
        }

        if branch_removed {
            cleaned = RE_TECHNOLOGIES_NORDIC
                .replace(&cleaned, " Technologies")
                .trim()
                .to_string();
        }

        if group_before_form {
            cleaned = remove_group_if_safe(&cleaned);
        }

        if keep_cooperative {
            cleaned = finnish::restore_cooperative(&cleaned, &before_branch);
        }

        cleaned
    }

    /// Whether "Group" is directly followed by a legal form:
    /// "Anora Group Oyj", but not "Posti Group Logistics".
    fn group_precedes_legal_form(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if !lower.contains(" group ") && !lower.ends_with(" group") {
            return false;
        }
        RE_GROUP_FOLLOWED
            .find(&lower)
            .is_some_and(|m| self.table.starts_with_term(lower[m.end()..].trim()))
    }
}

fn keys_match(tokens: &[Token<'_>], parts: &[String]) -> bool {
    tokens.len() == parts.len() && tokens.iter().zip(parts).all(|(t, p)| t.key == *p)
}

/// Whether the token before the last one is "in" or "of".
fn follows_preposition(tokens: &[Token<'_>]) -> bool {
    tokens.len() >= 2
        && COUNTRY_PREPOSITIONS.contains(&tokens[tokens.len() - 2].text.to_lowercase().as_str())
}

/// "Anora Group" → "Anora", "ME Group" stays.
fn remove_group_if_safe(name: &str) -> String {
    let Some(caps) = RE_TRAILING_GROUP.captures(name) else {
        return name.to_string();
    };
    let before = caps["before"].trim();

    let length: usize = before
        .split_whitespace()
        .map(|word| word.strip_suffix(['-', '–', '—']).unwrap_or(word))
        .filter(|word| !word.is_empty() && !word.chars().all(|c| matches!(c, '-' | '–' | '—')))
        .map(|word| word.chars().count())
        .sum();

    if length < MIN_GROUP_NAME_LENGTH {
        return name.to_string();
    }
    debug!("trailing Group removed: {name:?}");
    before.to_string()
}
