//! jmut-core: journal entry mutation engine.
//!
//! Takes one flat journal record (field name → string value) and produces a
//! new one by renaming and merging fields and normalizing field names.
//!
//! # Pipeline
//!
//! ```text
//! raw options ──► MutatorOptions::validate ──► Mutator
//!
//! record ──► ToRecord ──► remap::apply ──► names::apply ──► Record
//! ```
//!
//! Validation is the only fallible step and runs once, when the [`Mutator`]
//! is built. [`Mutator::run`] never fails and never logs.

pub mod mutator;
pub mod names;
pub mod options;
pub mod remap;
pub mod types;

pub use mutator::{build, Mutator};
pub use options::{MutatorOptions, MutatorOptionsBuilder, OptionError};
pub use types::{FieldMap, Record, RenameRule, ToRecord};
