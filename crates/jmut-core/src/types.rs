//! Core types for jmut-core.
//!
//! This module defines the data structures shared by every stage of the
//! mutation pipeline: the canonical [`Record`] mapping, the [`ToRecord`]
//! conversion contract, and the ordered [`FieldMap`] of [`RenameRule`]s.

use std::collections::{BTreeMap, HashMap};

use crate::options::OptionError;

/// A journal entry as a flat mapping from field name to string value.
///
/// Keys are kept sorted so that serializing the same record twice always
/// yields the same bytes.
pub type Record = BTreeMap<String, String>;

/// Conversion into the canonical [`Record`] form.
///
/// The engine never inspects richer record types; anything it accepts must
/// first be flattened through this trait.
pub trait ToRecord {
    fn to_record(&self) -> Record;
}

impl ToRecord for Record {
    fn to_record(&self) -> Record {
        self.clone()
    }
}

impl ToRecord for HashMap<String, String> {
    fn to_record(&self) -> Record {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> ToRecord for [(K, V)] {
    fn to_record(&self) -> Record {
        self.iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> ToRecord for [(K, V); N] {
    fn to_record(&self) -> Record {
        self.as_slice().to_record()
    }
}

/// JSON objects flatten to strings: string values are taken verbatim, every
/// other value is rendered as its compact JSON text. `null` values are dropped.
impl ToRecord for serde_json::Map<String, serde_json::Value> {
    fn to_record(&self) -> Record {
        self.iter()
            .filter_map(|(k, v)| match v {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some((k.clone(), s.clone())),
                other => Some((k.clone(), other.to_string())),
            })
            .collect()
    }
}

impl<T: ToRecord + ?Sized> ToRecord for &T {
    fn to_record(&self) -> Record {
        (**self).to_record()
    }
}

/// One `field_map` entry: a source field routed to one or more targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRule {
    /// Field read from the original record. Never empty.
    pub source: String,
    /// Fields the source value is appended to, in declaration order.
    pub targets: Vec<String>,
}

/// Insertion-ordered set of [`RenameRule`]s keyed by source name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    rules: Vec<RenameRule>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. Re-inserting an existing source replaces its targets
    /// without moving it.
    pub fn insert<S, I, T>(&mut self, source: S, targets: I) -> Result<(), OptionError>
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let source = source.into();
        if source.is_empty() {
            return Err(OptionError::EmptySource);
        }
        let targets: Vec<String> = targets.into_iter().map(Into::into).collect();

        match self.rules.iter_mut().find(|r| r.source == source) {
            Some(rule) => rule.targets = targets,
            None => self.rules.push(RenameRule { source, targets }),
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &RenameRule> {
        self.rules.iter()
    }

    pub fn is_source(&self, field: &str) -> bool {
        self.rules.iter().any(|r| r.source == field)
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = &'a RenameRule;
    type IntoIter = std::slice::Iter<'a, RenameRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
