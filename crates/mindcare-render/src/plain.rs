use crate::block::{InlineRun, TextBlock};

/// Render blocks back to terminal-friendly text.
///
/// Bullets become `•`, numbered items are renumbered from 1, bold runs are
/// wrapped with `bold_open`/`bold_close` (pass empty strings to drop
/// emphasis), and blocks are separated by a blank line.
pub fn to_plain_text(blocks: &[TextBlock], bold_open: &str, bold_close: &str) -> String {
    let runs = |runs: &[InlineRun]| -> String {
        runs.iter()
            .map(|r| {
                if r.bold {
                    format!("{bold_open}{}{bold_close}", r.text)
                } else {
                    r.text.clone()
                }
            })
            .collect()
    };

    let mut out = Vec::with_capacity(blocks.len());
    for block in blocks {
        let rendered = match block {
            TextBlock::Paragraph { runs: r } => runs(r),
            TextBlock::BulletList { items } => items
                .iter()
                .map(|item| format!("\u{2022} {}", runs(item)))
                .collect::<Vec<_>>()
                .join("\n"),
            TextBlock::NumberedList { items } => items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, runs(item)))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        out.push(rendered);
    }
    out.join("\n\n")
}
