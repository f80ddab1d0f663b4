use serde::{Deserialize, Serialize};

// ── Match flags ──────────────────────────────────────────────────────────

/// Which positions of a name legal-form terms are stripped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchFlags {
    /// Leading terms: "Oy Hello World" → "Hello World"
    pub prefix: bool,
    /// Trailing terms: "Hello World Ltd" → "Hello World"
    pub suffix: bool,
    /// Embedded terms: "Hello Oy World" → "Hello World"
    pub middle: bool,
}

impl Default for MatchFlags {
    fn default() -> Self {
        Self {
            prefix: true,
            suffix: true,
            middle: false,
        }
    }
}

impl MatchFlags {
    /// Every position enabled.
    pub const fn all() -> Self {
        Self {
            prefix: true,
            suffix: true,
            middle: true,
        }
    }

    /// Only trailing terms.
    pub const fn suffix_only() -> Self {
        Self {
            prefix: false,
            suffix: true,
            middle: false,
        }
    }
}

// ── Cleaning results ─────────────────────────────────────────────────────

/// A single input name and its cleaned base name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedName {
    pub input: String,
    pub output: String,
}

impl CleanedName {
    pub fn changed(&self) -> bool {
        self.input.trim() != self.output
    }
}

// ── JSON output format ─────────────────────────────────────────────────

/// Per-file result of a batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Source file the names were read from
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub flags: MatchFlags,
    pub total: usize,
    /// How many names came out different from their input
    pub changed: usize,
    pub names: Vec<CleanedName>,
}

impl BatchReport {
    pub fn new(
        file: String,
        country: Option<String>,
        flags: MatchFlags,
        names: Vec<CleanedName>,
    ) -> Self {
        let changed = names.iter().filter(|n| n.changed()).count();
        Self {
            file,
            country,
            flags,
            total: names.len(),
            changed,
            names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let flags = MatchFlags::default();
        assert!(flags.prefix);
        assert!(flags.suffix);
        assert!(!flags.middle);
    }

    #[test]
    fn test_report_counts_changes() {
        let names = vec![
            CleanedName {
                input: "Hello World Oy".into(),
                output: "Hello World".into(),
            },
            CleanedName {
                input: " Äätämö ".into(),
                output: "Äätämö".into(),
            },
        ];
        let report = BatchReport::new("names.txt".into(), None, MatchFlags::default(), names);
        assert_eq!(report.total, 2);
        assert_eq!(report.changed, 1);
    }
}
