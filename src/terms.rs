use std::cmp::Reverse;

use crate::error::{Error, Result};
use crate::normalize::normalize_token;
use crate::termdata::{
    COUNTRIES, Country, GLOBAL_TERMS, TERMS_BY_TYPE, all_country_names, find_country,
    is_country_name,
};

// ── Country scope ────────────────────────────────────────────────────

/// Which part of the term table applies to a name.
#[derive(Debug, Clone, Copy)]
pub enum CountryScope {
    /// No country given: every term of every country, plus country names
    Any,
    Known(&'static Country),
    /// A country the table doesn't know. Matched with every term, but no
    /// trailing country name is removed.
    Unknown,
}

impl CountryScope {
    pub fn resolve(country: Option<&str>) -> Self {
        match country {
            None => Self::Any,
            Some(key) => find_country(key).map_or(Self::Unknown, Self::Known),
        }
    }

    /// Finnish handling runs for Finland and for names of unknown origin.
    pub fn allows_finnish(&self) -> bool {
        match self {
            Self::Any => true,
            Self::Known(c) => c.code == "FI",
            Self::Unknown => false,
        }
    }

    /// Country names dropped when they trail a name: "EV Finland" → "EV".
    pub fn trailing_names(&self) -> Vec<&'static str> {
        match self {
            Self::Any => all_country_names().collect(),
            Self::Known(c) => c.names.to_vec(),
            Self::Unknown => Vec::new(),
        }
    }

    /// Raw spellings of every term in scope, unsorted and possibly repeated.
    pub fn raw_terms(&self) -> Vec<&'static str> {
        let mut raw: Vec<&'static str> = GLOBAL_TERMS.to_vec();
        match self {
            Self::Known(c) => raw.extend_from_slice(c.terms),
            Self::Any | Self::Unknown => {
                for (_, terms) in TERMS_BY_TYPE {
                    raw.extend_from_slice(terms);
                }
                for c in COUNTRIES {
                    raw.extend_from_slice(c.terms);
                }
                raw.extend(all_country_names());
            }
        }
        raw
    }
}

// ── Prepared terms ───────────────────────────────────────────────────

/// A legal-form term split into normalized tokens: "S.à r.l." → ["sa", "rl"].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    parts: Vec<String>,
    country_name: bool,
}

impl Term {
    fn parse(raw: &str) -> Option<Self> {
        let parts: Vec<String> = raw
            .split_whitespace()
            .map(normalize_token)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.is_empty() {
            return None;
        }
        let country_name = parts.len() == 1 && is_country_name(&parts[0]);
        Some(Self {
            parts,
            country_name,
        })
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Single-token terms that name a country ("suomi", "finland") are
    /// protected in some positions.
    pub fn is_country_name(&self) -> bool {
        self.country_name
    }
}

/// Terms ordered for longest-match-first matching: descending by token
/// count, then ascending by tokens. The order never depends on the order
/// terms were supplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermTable {
    terms: Vec<Term>,
    /// Lowercase raw spellings, sorted and deduplicated
    raw: Vec<String>,
}

impl TermTable {
    pub fn for_scope(scope: &CountryScope) -> Self {
        Self::from_raw(scope.raw_terms())
    }

    pub fn for_country(country: Option<&str>) -> Self {
        Self::for_scope(&CountryScope::resolve(country))
    }

    /// Build a table from raw term spellings. Terms that normalize to
    /// nothing are skipped.
    pub fn from_raw<I, S>(raw_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw: Vec<String> = raw_terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        raw.sort();
        raw.dedup();

        let mut terms: Vec<Term> = raw.iter().filter_map(|t| Term::parse(t)).collect();
        terms.sort_by(|a, b| (Reverse(a.len()), &a.parts).cmp(&(Reverse(b.len()), &b.parts)));
        terms.dedup_by(|a, b| a.parts == b.parts);

        Self { terms, raw }
    }

    /// The same table with additional terms, e.g. from a config file.
    pub fn with_extra(&self, extra: &[String]) -> Result<Self> {
        if let Some(bad) = extra.iter().find(|t| Term::parse(t).is_none()) {
            return Err(Error::InvalidTerm(bad.clone()));
        }
        Ok(Self::from_raw(self.raw.iter().chain(extra)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether lowercase `text` begins with the raw spelling of some term.
    pub fn starts_with_term(&self, text: &str) -> bool {
        self.raw.iter().any(|t| text.starts_with(t.as_str()))
    }
}

impl<'a> IntoIterator for &'a TermTable {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
