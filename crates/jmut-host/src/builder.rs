//! Builds a [`Mutator`] from an `[entry]` section.
//!
//! This is the single place where host configuration meets the core
//! validator: option errors come back as [`ConfigError::Option`], while
//! unrecognized option names and a configuration that drops every field are
//! reported as warnings.

use jmut_core::Mutator;

use crate::config::EntrySection;
use crate::error::ConfigError;

pub struct MutatorBuilder<'a> {
    section: &'a EntrySection,
}

impl<'a> MutatorBuilder<'a> {
    pub fn new(section: &'a EntrySection) -> Self {
        Self { section }
    }

    pub fn build(&self) -> Result<Mutator, ConfigError> {
        let mutator = jmut_core::build(&self.section.to_options())?;

        for option in self.section.unknown_options() {
            tracing::warn!(option, "unknown entry option ignored");
        }

        if mutator.options().drops_everything() {
            tracing::warn!("`field_map_strict` set to true with empty `field_map`, expect no fields");
        }
        tracing::debug!(
            rules = mutator.options().field_map().len(),
            strict = mutator.options().field_map_strict(),
            strip_underscores = mutator.options().fields_strip_underscores(),
            lowercase = mutator.options().fields_lowercase(),
            "entry mutator configured"
        );
        Ok(mutator)
    }
}
