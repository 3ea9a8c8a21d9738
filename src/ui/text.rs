//! Width-aware text helpers for the selector frame
//!
//! Widths are terminal columns (`unicode-width`). ANSI escape sequences and
//! control characters never count toward them.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthChar;

const ELLIPSIS: char = '…';

// CSI, OSC (BEL or ST terminated) and two-byte escapes
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b(?:\[[0-?]*[ -/]*[@-~]|\][^\x07\x1b]*(?:\x07|\x1b\\)|[@-Z\\-_])")
        .expect("ANSI escape pattern is valid")
});

/// Remove ANSI escape sequences
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(text, "")
}

/// Visible width of `text` in terminal columns
#[must_use]
pub fn display_width(text: &str) -> usize {
    strip_ansi(text).chars().map(char_width).sum()
}

// control characters have no width of their own
fn char_width(ch: char) -> usize {
    if ch.is_control() { 0 } else { ch.width().unwrap_or(0) }
}

/// Shorten `text` to at most `limit` columns, ending in `…` when cut.
///
/// Escape sequences are kept in place so styling survives a cut. A limit of
/// zero yields an empty string.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if limit == 0 {
        return String::new();
    }
    if display_width(text) <= limit {
        return text.to_string();
    }

    let budget = limit - 1;
    let mut out = String::with_capacity(text.len() + ELLIPSIS.len_utf8());
    let mut used = 0;
    let mut cut_at = None;
    let mut last = 0;

    // escapes after the cut point are still copied so resets are not lost
    for escape in ANSI_ESCAPE.find_iter(text) {
        if cut_at.is_none() && push_visible(&text[last..escape.start()], budget, &mut used, &mut out) {
            cut_at = Some(out.len());
        }
        out.push_str(escape.as_str());
        last = escape.end();
    }
    if cut_at.is_none() && push_visible(&text[last..], budget, &mut used, &mut out) {
        cut_at = Some(out.len());
    }

    out.insert(cut_at.unwrap_or(out.len()), ELLIPSIS);
    out
}

/// Append characters of `segment` until `budget` columns are used.
/// Returns true when the segment did not fit.
fn push_visible(segment: &str, budget: usize, used: &mut usize, out: &mut String) -> bool {
    for ch in segment.chars() {
        let w = char_width(ch);
        if *used + w > budget {
            return true;
        }
        out.push(ch);
        *used += w;
    }
    false
}

/// [`truncate`] when `limit` is positive, otherwise `text` unchanged
#[must_use]
pub fn limit_text(text: &str, limit: usize) -> String {
    if limit == 0 {
        text.to_string()
    } else {
        truncate(text, limit)
    }
}

/// Greedy word wrap of a single line to `width` columns.
///
/// Runs of whitespace collapse to one space. A word wider than `width` is
/// broken across lines by column. A width of zero disables wrapping.
#[must_use]
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        if display_width(word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = break_word(word, width);
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
        } else if current.is_empty() {
            current.push_str(word);
        } else if display_width(&current) + 1 + display_width(word) > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split `word` into pieces of at most `width` columns, keeping escape
/// sequences attached to the piece they appear in
fn break_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    let mut last = 0;

    let mut push_chars = |segment: &str, current: &mut String, used: &mut usize| {
        for ch in segment.chars() {
            let w = char_width(ch);
            if *used + w > width && *used > 0 {
                pieces.push(std::mem::take(current));
                *used = 0;
            }
            current.push(ch);
            *used += w;
        }
    };

    for escape in ANSI_ESCAPE.find_iter(word) {
        push_chars(&word[last..escape.start()], &mut current, &mut used);
        current.push_str(escape.as_str());
        last = escape.end();
    }
    push_chars(&word[last..], &mut current, &mut used);

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Prefix every line with `prefix`, leaving empty lines empty
#[must_use]
pub fn indent(lines: &[String], prefix: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect()
}

/// First `max_lines` lines of the trimmed `content`, followed by a lone `…`
/// line when there is more. Empty content gives no lines.
#[must_use]
pub fn snippet(content: &str, max_lines: usize) -> Vec<String> {
    let trimmed = content.trim();
    if max_lines == 0 || trimmed.is_empty() {
        return Vec::new();
    }

    let mut lines: Vec<String> = trimmed
        .lines()
        .take(max_lines + 1)
        .map(ToString::to_string)
        .collect();
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        lines.push(ELLIPSIS.to_string());
    }
    lines
}
