//! jmut-host: everything around the mutation engine.
//!
//! The core crate only knows how to validate options and mutate a record.
//! This crate supplies what a host needs to put it to work: loading the
//! `[entry]` options from configuration, building a mutator with host-level
//! errors and warnings, embedding it as an optional [`EntryFilter`], and
//! adapting `journalctl -o json` output into records.

pub mod builder;
pub mod config;
pub mod error;
pub mod filter;
pub mod journal;

pub use builder::MutatorBuilder;
pub use config::{Config, EntrySection};
pub use error::ConfigError;
pub use filter::EntryFilter;
pub use journal::{JournalEntry, JournalError};
