//! Read-only name → constant registry

use sciconst_core::{Category, Constant, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Catalog entry for one canonical constant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantDef {
    /// Canonical snake_case name (e.g. "speed_of_light" is an alias of "c")
    pub name: String,
    pub category: Category,
    #[serde(flatten)]
    pub constant: Constant,
}

impl ConstantDef {
    pub fn value(&self) -> f64 {
        self.constant.value
    }
}

#[derive(Debug, Clone)]
struct Alias {
    name: String,
    target: String,
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    #[serde(flatten)]
    def: &'a ConstantDef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    aliases: Vec<&'a str>,
}

/// Registry of named constants
///
/// Lookups ignore case and separators, so `SpeedOfLight`, `SPEED_OF_LIGHT`
/// and `speed_of_light` all resolve to the same entry. There is no public way
/// to add entries; the only populated instance is [`crate::CATALOG`].
#[derive(Debug, Clone, Default)]
pub struct ConstantRegistry {
    constants: HashMap<String, ConstantDef>,
    aliases: HashMap<String, Alias>,
}

/// Lookup key: ASCII alphanumerics only, lowercased
pub(crate) fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl ConstantRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a canonical constant. Constants without a unit inherit
    /// their category's unit.
    pub(crate) fn register(&mut self, name: &str, category: Category, constant: Constant) {
        let constant = match (constant.unit.is_none(), category.unit()) {
            (true, Some(unit)) => constant.with_unit(unit),
            _ => constant,
        };
        let def = ConstantDef {
            name: name.to_string(),
            category,
            constant,
        };
        if self.constants.insert(lookup_key(name), def).is_some() {
            tracing::warn!(name, "constant registered twice");
        }
    }

    /// Register `alias` as another name for the canonical constant `canonical`
    pub(crate) fn alias(&mut self, alias: &str, canonical: &str) {
        let target = lookup_key(canonical);
        if !self.constants.contains_key(&target) {
            tracing::warn!(alias, canonical, "alias target not registered");
            return;
        }
        self.aliases.insert(
            lookup_key(alias),
            Alias {
                name: alias.to_string(),
                target,
            },
        );
    }

    /// Get a constant by canonical name or alias
    pub fn get(&self, name: &str) -> Option<&ConstantDef> {
        let key = lookup_key(name);
        // Try direct lookup first
        if let Some(def) = self.constants.get(&key) {
            return Some(def);
        }
        self.aliases
            .get(&key)
            .and_then(|alias| self.constants.get(&alias.target))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get a constant, or an error listing similar names
    pub fn describe(&self, name: &str) -> Result<&ConstantDef> {
        match self.get(name) {
            Some(def) => Ok(def),
            None => {
                tracing::debug!(name, "constant lookup miss");
                Err(Error::UnknownConstant {
                    name: name.to_string(),
                    similar: self.find_similar(name).into_iter().take(5).collect(),
                })
            }
        }
    }

    pub fn value(&self, name: &str) -> Result<f64> {
        self.describe(name).map(ConstantDef::value)
    }

    /// All constants in a category, sorted by name
    pub fn by_category(&self, category: Category) -> Vec<&ConstantDef> {
        let mut defs: Vec<&ConstantDef> = self
            .constants
            .values()
            .filter(|d| d.category == category)
            .collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Canonical names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constants.values().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Alias names pointing at the same constant as `name`, sorted
    pub fn aliases_of(&self, name: &str) -> Vec<&str> {
        let Some(def) = self.get(name) else {
            return Vec::new();
        };
        let target = lookup_key(&def.name);
        let mut names: Vec<&str> = self
            .aliases
            .values()
            .filter(|a| a.target == target)
            .map(|a| a.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstantDef> {
        self.constants.values()
    }

    /// Number of canonical constants (aliases not counted)
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }

    /// Pretty JSON array of every constant with its aliases, sorted by name
    pub fn to_json(&self) -> serde_json::Result<String> {
        let entries: Vec<CatalogEntry<'_>> = self
            .names()
            .into_iter()
            .filter_map(|name| self.constants.get(&lookup_key(name)))
            .map(|def| CatalogEntry {
                def,
                aliases: self.aliases_of(&def.name),
            })
            .collect();
        serde_json::to_string_pretty(&entries)
    }

    /// Find names similar to the given name (for error suggestions)
    fn find_similar(&self, name: &str) -> Vec<String> {
        let query = lookup_key(name);
        let candidates = self
            .constants
            .values()
            .map(|d| d.name.as_str())
            .chain(self.aliases.values().map(|a| a.name.as_str()));

        let mut matches: Vec<(&str, usize)> = candidates
            .filter_map(|candidate| {
                let score = Self::similarity_score(&query, &lookup_key(candidate));
                (score > 0).then_some((candidate, score))
            })
            .collect();

        // Higher score first, then alphabetical for a stable order
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches.into_iter().map(|(name, _)| name.to_string()).collect()
    }

    /// Similarity score between two lookup keys
    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if candidate.len() >= 3 && query.contains(candidate) {
            // single-letter symbols would match almost anything
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        score += query_chars.intersection(&candidate_chars).count() * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}
