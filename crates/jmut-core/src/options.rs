//! Option validation.
//!
//! [`MutatorOptions::validate`] turns loosely typed options (a JSON-shaped
//! mapping, as handed over by whatever loaded the configuration) into an
//! immutable, checked [`MutatorOptions`]. Every structural problem surfaces
//! here as an [`OptionError`], before any record is processed.

use serde_json::{Map, Value};

use crate::types::FieldMap;

pub const FIELD_MAP: &str = "field_map";
pub const FIELD_MAP_STRICT: &str = "field_map_strict";
pub const FIELDS_STRIP_UNDERSCORES: &str = "fields_strip_underscores";
pub const FIELDS_LOWERCASE: &str = "fields_lowercase";

/// Every option name the mutator recognizes.
pub const OPTION_NAMES: &[&str] = &[
    FIELD_MAP,
    FIELD_MAP_STRICT,
    FIELDS_STRIP_UNDERSCORES,
    FIELDS_LOWERCASE,
];

/// Structurally invalid mutator configuration.
#[derive(Debug, thiserror::Error)]
pub enum OptionError {
    #[error("options must be a mapping, got {found}")]
    NotAMapping { found: &'static str },

    #[error("`{option}` must be a boolean, got {found}")]
    NotBoolean {
        option: &'static str,
        found: &'static str,
    },

    #[error("`field_map` must be a mapping, got {found}")]
    FieldMapNotObject { found: &'static str },

    #[error("`field_map` is not valid JSON: {0}")]
    FieldMapJson(#[source] serde_json::Error),

    #[error("`field_map` source names must be non-empty strings")]
    EmptySource,

    #[error("`field_map` target for `{source_field}` must be a string or a list of strings, got {found}")]
    InvalidTarget {
        source_field: String,
        found: &'static str,
    },

    #[error("`field_map` target #{index} for `{source_field}` must be a string, got {found}")]
    InvalidTargetElement {
        source_field: String,
        index: usize,
        found: &'static str,
    },
}

/// Validated mutator configuration. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutatorOptions {
    field_map: FieldMap,
    field_map_strict: bool,
    fields_strip_underscores: bool,
    fields_lowercase: bool,
}

impl MutatorOptions {
    /// Validate raw options. `raw` must be a mapping; absent options take
    /// their defaults.
    pub fn validate(raw: &Value) -> Result<Self, OptionError> {
        match raw {
            Value::Object(map) => Self::from_map(map),
            // An absent options block is the same as an empty one.
            Value::Null => Ok(Self::default()),
            other => Err(OptionError::NotAMapping {
                found: type_name(other),
            }),
        }
    }

    /// Names outside [`OPTION_NAMES`] are ignored; reporting them is up to
    /// the host.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, OptionError> {
        let field_map = match map.get(FIELD_MAP) {
            Some(v) => parse_field_map(v)?,
            None => FieldMap::default(),
        };

        Ok(Self {
            field_map,
            field_map_strict: flag(map, FIELD_MAP_STRICT)?,
            fields_strip_underscores: flag(map, FIELDS_STRIP_UNDERSCORES)?,
            fields_lowercase: flag(map, FIELDS_LOWERCASE)?,
        })
    }

    pub fn builder() -> MutatorOptionsBuilder {
        MutatorOptionsBuilder::default()
    }

    pub fn field_map(&self) -> &FieldMap {
        &self.field_map
    }

    pub fn field_map_strict(&self) -> bool {
        self.field_map_strict
    }

    pub fn fields_strip_underscores(&self) -> bool {
        self.fields_strip_underscores
    }

    pub fn fields_lowercase(&self) -> bool {
        self.fields_lowercase
    }

    /// Strict mode with nothing to keep. Legal, but every record comes out
    /// empty; hosts should warn about it.
    pub fn drops_everything(&self) -> bool {
        self.field_map_strict && self.field_map.is_empty()
    }
}

/// Typed construction path for callers that already hold Rust values.
#[derive(Debug, Default)]
pub struct MutatorOptionsBuilder {
    options: MutatorOptions,
}

impl MutatorOptionsBuilder {
    /// Route `source` to each of `targets`, in order.
    pub fn rename<S, I, T>(mut self, source: S, targets: I) -> Result<Self, OptionError>
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options.field_map.insert(source, targets)?;
        Ok(self)
    }

    pub fn field_map_strict(mut self, strict: bool) -> Self {
        self.options.field_map_strict = strict;
        self
    }

    pub fn fields_strip_underscores(mut self, strip: bool) -> Self {
        self.options.fields_strip_underscores = strip;
        self
    }

    pub fn fields_lowercase(mut self, lowercase: bool) -> Self {
        self.options.fields_lowercase = lowercase;
        self
    }

    pub fn build(self) -> MutatorOptions {
        self.options
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn flag(map: &Map<String, Value>, option: &'static str) -> Result<bool, OptionError> {
    match map.get(option) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(other) => Err(OptionError::NotBoolean {
            option,
            found: type_name(other),
        }),
    }
}

fn parse_field_map(value: &Value) -> Result<FieldMap, OptionError> {
    // Hash-typed config parameters arrive as JSON text.
    let parsed;
    let object = match value {
        Value::Object(obj) => obj,
        Value::String(text) => {
            parsed = serde_json::from_str::<Value>(text).map_err(OptionError::FieldMapJson)?;
            match &parsed {
                Value::Object(obj) => obj,
                other => {
                    return Err(OptionError::FieldMapNotObject {
                        found: type_name(other),
                    })
                }
            }
        }
        other => {
            return Err(OptionError::FieldMapNotObject {
                found: type_name(other),
            })
        }
    };

    let mut field_map = FieldMap::new();
    for (source, targets) in object {
        let targets = match targets {
            Value::String(t) => vec![t.clone()],
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(t) => Ok(t.clone()),
                    other => Err(OptionError::InvalidTargetElement {
                        source_field: source.clone(),
                        index,
                        found: type_name(other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(OptionError::InvalidTarget {
                    source_field: source.clone(),
                    found: type_name(other),
                })
            }
        };
        field_map.insert(source.as_str(), targets)?;
    }
    Ok(field_map)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
