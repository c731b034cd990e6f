//! Configuration loading for jmut.
//!
//! [`Config::load`] layers, from lowest to highest precedence: the built-in
//! defaults, an optional TOML/YAML/JSON file, and `JMUT_`-prefixed environment
//! variables (`JMUT_ENTRY__FIELDS_LOWERCASE=true`). [`Config::defaults`]
//! returns the built-in defaults without touching the filesystem.
//!
//! The `[entry]` section carries the four mutator options. `field_map` is
//! usually written as JSON text, the form hash parameters take in plugin
//! configs. A table works too; its key order is kept, so rule order holds
//! either way:
//!
//! ```toml
//! [entry]
//! field_map = '{"_PID": ["msg", "_PID"], "MESSAGE": "msg"}'
//! field_map_strict = false
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[entry]
field_map_strict         = false
fields_strip_underscores = false
fields_lowercase         = false
"#;

const BOOL_OPTIONS: &[&str] = &[
    jmut_core::options::FIELD_MAP_STRICT,
    jmut_core::options::FIELDS_STRIP_UNDERSCORES,
    jmut_core::options::FIELDS_LOWERCASE,
];

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub entry: EntrySection,
}

/// `[entry]` section: mutator options exactly as the config source gave them.
///
/// Values are kept loosely typed; checking them is the core validator's job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct EntrySection(Map<String, Value>);

impl EntrySection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, option: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.0.insert(option.into(), value.into());
        self
    }

    pub fn get(&self, option: &str) -> Option<&Value> {
        self.0.get(option)
    }

    /// Option names the mutator does not recognize, in section order.
    pub fn unknown_options(&self) -> impl Iterator<Item = &str> {
        self.0
            .keys()
            .map(String::as_str)
            .filter(|k| !jmut_core::options::OPTION_NAMES.contains(k))
    }

    /// Raw options for [`jmut_core::build`].
    ///
    /// Boolean options written as the text `true`/`false` become booleans;
    /// anything else is passed through untouched so the validator can reject it.
    pub fn to_options(&self) -> Value {
        let coerced = self
            .0
            .iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(text) if BOOL_OPTIONS.contains(&k.as_str()) => {
                        match text.trim() {
                            "true" => Value::Bool(true),
                            "false" => Value::Bool(false),
                            _ => v.clone(),
                        }
                    }
                    _ => v.clone(),
                };
                (k.clone(), v)
            })
            .collect();
        Value::Object(coerced)
    }
}

impl From<Map<String, Value>> for EntrySection {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when
    /// `path` is `None`. An explicit path must exist; the default one may not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("JMUT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("jmut")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
