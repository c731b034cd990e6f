//! Field name normalizer: underscore stripping and lowercasing.
//!
//! Only names change; values are carried over untouched. When two fields
//! normalize to the same name the one visited last (in sorted key order) wins.

use crate::types::Record;

/// Rename every field of `record` according to the two flags.
pub fn apply(record: Record, strip_underscores: bool, lowercase: bool) -> Record {
    if !strip_underscores && !lowercase {
        return record;
    }
    record
        .into_iter()
        .map(|(name, value)| (normalize(&name, strip_underscores, lowercase), value))
        .collect()
}

/// Normalize a single field name.
///
/// All leading underscores are removed, so `__REALTIME` and `_REALTIME` both
/// become `REALTIME`. A name made only of underscores is left alone rather
/// than collapsing to the empty string. Lowercasing is ASCII-only and runs
/// after stripping.
pub fn normalize(name: &str, strip_underscores: bool, lowercase: bool) -> String {
    let name = if strip_underscores {
        match name.trim_start_matches('_') {
            "" => name,
            stripped => stripped,
        }
    } else {
        name
    };

    if lowercase {
        name.to_ascii_lowercase()
    } else {
        name.to_string()
    }
}
