//! Mutator: the per-record entry point.
//!
//! A [`Mutator`] owns an immutable [`MutatorOptions`] and applies it to one
//! record at a time: coerce to [`Record`], remap, then normalize names. It
//! holds no mutable state, so a single instance can be shared across threads
//! and called concurrently.

use serde_json::Value;

use crate::names;
use crate::options::{MutatorOptions, OptionError};
use crate::remap;
use crate::types::{Record, ToRecord};

/// Configured record mutator.
#[derive(Debug, Clone, Default)]
pub struct Mutator {
    options: MutatorOptions,
}

/// Validate `raw` options and build a [`Mutator`] from them.
pub fn build(raw: &Value) -> Result<Mutator, OptionError> {
    MutatorOptions::validate(raw).map(Mutator::new)
}

impl Mutator {
    pub fn new(options: MutatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MutatorOptions {
        &self.options
    }

    /// True when no configured step can change a record.
    pub fn is_identity(&self) -> bool {
        self.options.field_map().is_empty()
            && !self.options.field_map_strict()
            && !self.options.fields_strip_underscores()
            && !self.options.fields_lowercase()
    }

    /// Mutate one record. The input is never modified.
    pub fn run<R: ToRecord + ?Sized>(&self, record: &R) -> Record {
        let record = record.to_record();
        let remapped = remap::apply(
            &record,
            self.options.field_map(),
            self.options.field_map_strict(),
        );
        names::apply(
            remapped,
            self.options.fields_strip_underscores(),
            self.options.fields_lowercase(),
        )
    }
}
