//! Line-oriented driver: one journal entry in, one mutated record out.

use std::io::{self, BufRead, Write};

use jmut_host::{EntryFilter, JournalEntry};

/// Counters for one pass over an input stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Non-blank lines seen.
    pub read: usize,
    pub written: usize,
    /// Lines that were not a JSON object.
    pub skipped: usize,
}

/// Mutate every entry of `input` and write the results to `output`.
///
/// Blank lines are ignored. Malformed lines are logged and skipped; only I/O
/// failures abort the stream.
pub fn run<R: BufRead, W: Write>(
    filter: &EntryFilter,
    input: R,
    mut output: W,
) -> io::Result<StreamStats> {
    let mut stats = StreamStats::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        stats.read += 1;

        let entry = match JournalEntry::from_json(&line) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "skipping malformed entry");
                stats.skipped += 1;
                continue;
            }
        };

        let record = filter.mutate_entry(&entry);
        serde_json::to_writer(&mut output, &record)?;
        output.write_all(b"\n")?;
        stats.written += 1;
    }

    output.flush()?;
    tracing::info!(
        read = stats.read,
        written = stats.written,
        skipped = stats.skipped,
        "stream finished"
    );
    Ok(stats)
}
