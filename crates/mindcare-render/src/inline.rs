use crate::block::InlineRun;

const MARKER: &str = "**";

/// Split text into runs on complete `**...**` pairs.
///
/// A pair encloses the shortest non-empty span up to the next `**`. A
/// marker with no closing partner is literal text through to the end.
/// Empty segments are dropped and adjacent literal text is merged.
///
/// A lone `*` inside a pair stays part of the bold text, so `**a*b**` is
/// bold `a*b`. The web frontend's `[^*]+` split leaves that input literal.
pub fn parse_inline(text: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find(MARKER) {
        push_plain(&mut runs, &remaining[..start]);

        let after_start = &remaining[start + MARKER.len()..];
        match after_start.find(MARKER) {
            Some(0) => {
                // `****`: nothing to embolden, keep the opener literal.
                push_plain(&mut runs, MARKER);
                remaining = after_start;
            }
            Some(end) => {
                runs.push(InlineRun::bold(&after_start[..end]));
                remaining = &after_start[end + MARKER.len()..];
            }
            None => {
                push_plain(&mut runs, &remaining[start..]);
                return runs;
            }
        }
    }

    push_plain(&mut runs, remaining);
    runs
}

fn push_plain(runs: &mut Vec<InlineRun>, text: &str) {
    if text.is_empty() {
        return;
    }
    match runs.last_mut() {
        Some(last) if !last.bold => last.text.push_str(text),
        _ => runs.push(InlineRun::plain(text)),
    }
}
