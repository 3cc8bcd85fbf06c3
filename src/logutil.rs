//! Keeps raw player input on a single log line.

/// Commands are a verb and at most two subjects; anything longer than this
/// is noise in a log line.
pub const PREVIEW_CHARS: usize = 80;

/// Render a raw input line for logging: control characters are escaped so a
/// line can't split or forge log records, and long input is cut with a note of
/// how much was dropped.
pub fn input_preview(line: &str) -> String {
    let mut out = String::with_capacity(line.len().min(PREVIEW_CHARS) + 8);
    let mut chars = line.chars();
    for ch in chars.by_ref().take(PREVIEW_CHARS) {
        if ch.is_control() || ch == '\\' {
            out.extend(ch.escape_debug());
        } else {
            out.push(ch);
        }
    }
    let dropped = chars.count();
    if dropped > 0 {
        out.push_str(&format!("…(+{})", dropped));
    }
    out
}
