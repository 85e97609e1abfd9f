use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Built-in raw -> canonical agency synonyms. Canonical names map to
/// themselves so lookups are idempotent.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    (
        "Agency for International Development (USAID)",
        "Agency for International Development",
    ),
    (
        "Agency for International Development",
        "Agency for International Development",
    ),
    (
        "Department of Health and Human Services (HHS)",
        "Department of Health and Human Services",
    ),
    (
        "Department of Health and Human Services",
        "Department of Health and Human Services",
    ),
    (
        "National Science Foundation (NSF)",
        "National Science Foundation",
    ),
    ("National Science Foundation", "National Science Foundation"),
    ("Department of Justice (DOJ)", "Department of Justice"),
    ("Department of Justice", "Department of Justice"),
    ("Department of Defense (DOD)", "Department of Defense"),
    ("Department of Defense", "Department of Defense"),
    ("Department of Education (ED)", "Department of Education"),
    ("Department of Education", "Department of Education"),
    (
        "Environmental Protection Agency (EPA)",
        "Environmental Protection Agency",
    ),
    (
        "Environmental Protection Agency",
        "Environmental Protection Agency",
    ),
];

static BUILTIN: Lazy<AgencyCatalog> = Lazy::new(AgencyCatalog::builtin);

/// Canonicalize with the built-in synonym table only
pub fn canonicalize(raw: &str) -> &str {
    BUILTIN.canonicalize(raw)
}

/// An alias set that would make canonicalization non-idempotent:
/// `alias` maps to `target`, but `target` itself maps to `remapped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasConflict {
    pub alias: String,
    pub target: String,
    pub remapped: String,
}

impl fmt::Display for AliasConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "agency alias '{}' -> '{}' is not canonical: '{}' maps to '{}'",
            self.alias, self.target, self.target, self.remapped
        )
    }
}

impl std::error::Error for AliasConflict {}

/// Static synonym table mapping raw agency names to canonical names.
#[derive(Debug, Clone)]
pub struct AgencyCatalog {
    aliases: BTreeMap<String, String>,
}

impl Default for AgencyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AgencyCatalog {
    pub fn builtin() -> Self {
        let aliases = BUILTIN_ALIASES
            .iter()
            .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
            .collect();
        Self { aliases }
    }

    /// Merge extra aliases over the current table. Every canonical target
    /// becomes a fixed point; a target that already maps elsewhere is rejected.
    pub fn with_aliases<I, K, V>(mut self, extra: I) -> Result<Self, AliasConflict>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (raw, canonical) in extra {
            self.aliases.insert(raw.into(), canonical.into());
        }

        let targets: BTreeSet<String> = self.aliases.values().cloned().collect();
        for target in targets {
            match self.aliases.get(&target) {
                Some(remapped) if *remapped != target => {
                    let alias = self
                        .aliases
                        .iter()
                        .find(|(k, v)| **v == target && **k != target)
                        .map(|(k, _)| k.clone())
                        .unwrap_or_default();
                    return Err(AliasConflict {
                        alias,
                        remapped: remapped.clone(),
                        target,
                    });
                }
                Some(_) => {}
                None => {
                    self.aliases.insert(target.clone(), target);
                }
            }
        }

        Ok(self)
    }

    /// Canonical name for `raw`; unknown names are returned unchanged.
    pub fn canonicalize<'a>(&'a self, raw: &'a str) -> &'a str {
        self.aliases.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn is_known(&self, raw: &str) -> bool {
        self.aliases.contains_key(raw)
    }

    pub fn canonical_names(&self) -> BTreeSet<&str> {
        self.aliases.values().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
