//! Text-family trace generation: naive substring matching
//!
//! Every candidate offset is tested character by character, one `Compare`
//! step per comparison, stopping the inner walk at the first mismatch. A
//! full match records one `Complete`-tagged milestone highlighting the
//! matched span — so a text trace may carry several `Complete` steps (one
//! per match location) or, when nothing matches, none at all. This is a
//! deliberate per-family exception to the single-terminal-complete rule
//! the sequence and graph families follow.
//!
//! Indices are `char` offsets into the text, so every highlight index is
//! addressable in the snapshot regardless of encoding.

use crate::generate::recorder::TraceBuilder;
use crate::trace::step::{Action, Highlights};
use crate::trace::{Snapshot, TextSnapshot, Trace};

/// Runs naive matching of `pattern` against `text` and returns the trace
pub fn generate(text: &str, pattern: &str) -> Trace {
    let mut rec = TraceBuilder::new();
    let t: Vec<char> = text.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    let base = TextSnapshot::of(text, pattern);

    rec.record(
        Action::Mark,
        format!(
            "Scanning a text of {} characters for a {}-character pattern",
            t.len(),
            p.len()
        ),
        Snapshot::Text(base.clone()),
        Highlights::indices([]),
    );

    if p.is_empty() || p.len() > t.len() {
        log::warn!(
            "degenerate pattern ({} characters against {}): no alignments to test",
            p.len(),
            t.len()
        );
        rec.work();
        rec.record(
            Action::Complete,
            "Scan complete: no alignments to test",
            Snapshot::Text(base),
            Highlights::indices([]),
        );
        return rec.finish();
    }

    for offset in 0..=t.len() - p.len() {
        let mut matched = true;
        for j in 0..p.len() {
            let ti = offset + j;
            rec.compare();
            rec.record(
                Action::Compare,
                format!(
                    "Comparing text[{}]='{}' with pattern[{}]='{}'",
                    ti, t[ti], j, p[j]
                ),
                Snapshot::Text(base.clone().with_probe(ti, j)),
                Highlights::indices([ti]),
            );
            if t[ti] != p[j] {
                matched = false;
                break;
            }
        }
        if matched {
            rec.work();
            rec.record(
                Action::Complete,
                format!("Pattern matched at offset {}", offset),
                Snapshot::Text(base.clone().with_match(offset)),
                Highlights::indices(offset..offset + p.len()),
            );
        }
    }

    rec.finish()
}
