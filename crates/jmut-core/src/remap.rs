//! Field remapper: routes source fields into target fields and merges them.
//!
//! The merge runs in two passes over the *original* record: first every rule
//! appends its source value to each of its targets' contribution lists, then
//! the contributions are joined onto a copy of the record with all source
//! fields removed. Reading only from the untouched input keeps the result
//! independent of rule order when a field is both a source and a target.

use crate::types::{FieldMap, Record};

/// Apply `field_map` to `record`.
///
/// In loose mode every non-source field survives and a target's pre-existing
/// value is kept in front of its contributions. In strict mode only targets
/// that received a contribution are emitted, without their pre-existing value.
pub fn apply(record: &Record, field_map: &FieldMap, strict: bool) -> Record {
    if field_map.is_empty() {
        return if strict { Record::new() } else { record.clone() };
    }

    let contributions = collect(record, field_map);

    if strict {
        return contributions
            .into_iter()
            .map(|(target, values)| (target.to_string(), values.join(" ")))
            .collect();
    }

    let mut base: Record = record
        .iter()
        .filter(|(k, _)| !field_map.is_source(k))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    for (target, values) in contributions {
        let merged = match base.get(target) {
            Some(existing) => {
                let mut parts = Vec::with_capacity(values.len() + 1);
                parts.push(existing.as_str());
                parts.extend(values);
                parts.join(" ")
            }
            None => values.join(" "),
        };
        base.insert(target.to_string(), merged);
    }
    base
}

/// Ordered contribution lists, one per target that received at least one
/// value. Targets appear in the order they were first contributed to.
fn collect<'a>(record: &'a Record, field_map: &'a FieldMap) -> Vec<(&'a str, Vec<&'a str>)> {
    let mut contributions: Vec<(&str, Vec<&str>)> = Vec::new();

    for rule in field_map {
        let Some(value) = record.get(&rule.source) else {
            continue;
        };
        for target in &rule.targets {
            match contributions.iter_mut().find(|(t, _)| *t == target.as_str()) {
                Some((_, values)) => values.push(value.as_str()),
                None => contributions.push((target.as_str(), vec![value.as_str()])),
            }
        }
    }
    contributions
}
