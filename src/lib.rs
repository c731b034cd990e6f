//! jmut: journal entry mutator.
//!
//! Reads journal entries as JSON lines (`journalctl -o json`), renames,
//! merges, and normalizes their fields, and writes one JSON object per line.
//!
//! # Architecture
//!
//! ```text
//! config file / flags ──► EntrySection ──► MutatorBuilder ──► EntryFilter
//!                                                                 │
//! input lines ──► JournalEntry ──► EntryFilter::mutate_entry ─────┴──► output lines
//! ```
//!
//! The mutation engine lives in `jmut-core`; configuration, the journal
//! adapter, and the filter live in `jmut-host`. This crate wires them to the
//! command line.

pub mod cli;
pub mod stream;

pub use stream::StreamStats;
