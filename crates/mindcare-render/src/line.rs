//! Per-line classification.

/// What a single trimmed line contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `-`, `*` or `•`, whitespace, then content.
    Bullet(&'a str),
    /// Digits, `.` or `)`, whitespace, then content.
    Numbered(&'a str),
    Blank,
    Plain(&'a str),
}

const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];

/// Classify one line. The line is trimmed first. Bullet is checked before
/// numbered, numbered before blank, and anything left over is plain.
pub fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();

    if let Some(content) = bullet_item(line) {
        Line::Bullet(content)
    } else if let Some(content) = numbered_item(line) {
        Line::Numbered(content)
    } else if line.is_empty() {
        Line::Blank
    } else {
        Line::Plain(line)
    }
}

fn bullet_item(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(BULLET_MARKERS)?;
    after_separator(rest)
}

fn numbered_item(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    let rest = rest.strip_prefix(['.', ')'])?;
    after_separator(rest)
}

/// Require at least one whitespace character followed by some content.
fn after_separator(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim_start();
    (!content.is_empty()).then_some(content)
}
