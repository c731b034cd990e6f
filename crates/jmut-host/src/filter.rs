//! Entry filter: an optional mutator embedded in a host component.
//!
//! Without an `[entry]` section the filter passes records through, only
//! flattening them to the canonical [`Record`] form.

use jmut_core::{Mutator, Record, ToRecord};

use crate::builder::MutatorBuilder;
use crate::config::EntrySection;
use crate::error::ConfigError;

#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    mutator: Option<Mutator>,
}

impl EntryFilter {
    /// Configure from an optional section. A present section, even an empty
    /// one, always produces a mutator.
    pub fn configure(section: Option<&EntrySection>) -> Result<Self, ConfigError> {
        let mutator = section
            .map(|s| MutatorBuilder::new(s).build())
            .transpose()?;
        Ok(Self { mutator })
    }

    pub fn mutator(&self) -> Option<&Mutator> {
        self.mutator.as_ref()
    }

    pub fn mutate_entry<R: ToRecord + ?Sized>(&self, entry: &R) -> Record {
        match &self.mutator {
            Some(m) if !m.is_identity() => m.run(entry),
            _ => entry.to_record(),
        }
    }
}
