//! Synonym dictionary mapping phrase lists to canonical terms.
//!
//! Each entry maps a comma-separated list of synonym phrases to one canonical
//! replacement, e.g. `"Ruby on Rails, rails" → "ruby-on-rails"`. An empty
//! canonical string marks phrases to be removed from the output.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{JargonError, Result};

/// Ordered list of `(synonyms, canonical)` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SynonymDictionary {
    entries: Vec<(String, String)>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        SynonymDictionary::default()
    }

    /// Build a dictionary from `(synonyms, canonical)` pairs, keeping their order.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        SynonymDictionary {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load a dictionary from a JSON file.
    ///
    /// The file holds one object whose keys are comma-separated synonym lists
    /// and whose values are the canonical terms:
    ///
    /// ```json
    /// {
    ///   "Ruby on Rails, rails": "ruby-on-rails",
    ///   "nodeJS, iojs": "node.js"
    /// }
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            JargonError::dictionary(format!(
                "Failed to read synonym dictionary file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            JargonError::dictionary(format!(
                "Failed to parse synonym dictionary JSON from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a dictionary from a JSON object string.
    pub fn from_json(json: &str) -> Result<Self> {
        let map: Map<String, Value> = serde_json::from_str(json)?;
        let mut entries = Vec::with_capacity(map.len());
        for (synonyms, canonical) in map {
            match canonical {
                Value::String(canonical) => entries.push((synonyms, canonical)),
                other => {
                    return Err(JargonError::dictionary(format!(
                        "canonical for {synonyms:?} must be a string, got {other}"
                    )));
                }
            }
        }
        Ok(SynonymDictionary { entries })
    }

    /// Append an entry.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, synonyms: K, canonical: V) {
        self.entries.push((synonyms.into(), canonical.into()));
    }

    /// Iterate over `(synonyms, canonical)` entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, c)| (s.as_str(), c.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SynonymDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SynonymDictionary::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_pairs_keeps_order() {
        let dict = SynonymDictionary::from_pairs([("b", "2"), ("a", "1")]);
        let entries: Vec<_> = dict.entries().collect();
        assert_eq!(entries, vec![("b", "2"), ("a", "1")]);
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_from_json() {
        let dict = SynonymDictionary::from_json(r#"{"Ruby on Rails, rails": "ruby-on-rails"}"#)
            .unwrap();
        assert_eq!(
            dict.entries().next(),
            Some(("Ruby on Rails, rails", "ruby-on-rails"))
        );
    }

    #[test]
    fn test_from_json_rejects_non_string_canonical() {
        let result = SynonymDictionary::from_json(r#"{"a": 1}"#);
        assert!(matches!(result, Err(JargonError::Dictionary(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodeJS, iojs": "node.js"}}"#).unwrap();

        let dict = SynonymDictionary::load_from_file(file.path()).unwrap();
        assert_eq!(dict.entries().next(), Some(("nodeJS, iojs", "node.js")));
    }

    #[test]
    fn test_load_missing_file() {
        let result = SynonymDictionary::load_from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(JargonError::Dictionary(_))));
    }
}
