//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use jmut_core::options::{FIELDS_LOWERCASE, FIELDS_STRIP_UNDERSCORES, FIELD_MAP, FIELD_MAP_STRICT};
use jmut_host::EntrySection;

#[derive(Debug, Parser)]
#[command(
    name = "jmut",
    version,
    about = "Rename, merge, and normalize journal entry fields"
)]
pub struct Cli {
    /// Configuration file. Defaults to $XDG_CONFIG_HOME/jmut/config.toml if present.
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Field map as JSON, e.g. '{"_PID": ["msg", "_PID"], "MESSAGE": "msg"}'.
    #[arg(long, value_name = "JSON")]
    pub field_map: Option<String>,

    /// Keep only fields produced by the field map.
    #[arg(long)]
    pub strict: bool,

    /// Strip leading underscores from field names.
    #[arg(long)]
    pub strip_underscores: bool,

    /// Lowercase field names.
    #[arg(long)]
    pub lowercase: bool,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    pub debug: bool,

    /// Input file of JSON lines. Reads stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Layer command-line options over the configured `[entry]` section.
    /// Flags only ever switch options on.
    pub fn entry_section(&self, mut section: EntrySection) -> EntrySection {
        if let Some(map) = &self.field_map {
            section.set(FIELD_MAP, map.as_str());
        }
        if self.strict {
            section.set(FIELD_MAP_STRICT, true);
        }
        if self.strip_underscores {
            section.set(FIELDS_STRIP_UNDERSCORES, true);
        }
        if self.lowercase {
            section.set(FIELDS_LOWERCASE, true);
        }
        section
    }
}
