//! Test builders: ergonomic constructors for records and option sets.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use jmut_core::{Mutator, Record};
use jmut_host::JournalEntry;

/// Fluent builder for [`Record`] fixtures.
///
/// ```rust
/// let record = RecordBuilder::new()
///     .field("_PID", "141")
///     .field("MESSAGE", "m")
///     .build();
/// ```
#[derive(Default)]
pub struct RecordBuilder {
    fields: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn build(self) -> Record {
        self.fields
    }
}

/// Build a record from literal pairs.
pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .fold(RecordBuilder::new(), |b, (k, v)| b.field(*k, *v))
        .build()
}

/// Build a mutator from a JSON options literal, panicking if it is invalid.
pub fn mutator(options: serde_json::Value) -> Mutator {
    jmut_core::build(&options).unwrap_or_else(|e| panic!("invalid test options {options}: {e}"))
}

/// The shared journal fixture, parsed.
pub fn journal_entry() -> JournalEntry {
    JournalEntry::from_json(crate::common::JOURNAL_ENTRY_JSON).expect("fixture entry parses")
}

/// Scenario input used by the rename/merge scenarios.
pub fn scenario_record() -> Record {
    record(&[
        ("_PID", "141"),
        ("MESSAGE", "m"),
        ("_COMM", "c"),
        ("_EXE", "e"),
        ("_CMDLINE", "x"),
    ])
}
