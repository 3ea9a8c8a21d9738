//! Pure projection of [`SelectorState`] into a text frame
//!
//! The frame is a list of tagged lines. The terminal driver styles them by
//! kind; [`Frame::to_text`] gives the plain rendition used by tests and
//! non-styled output.

use super::UiOptions;
use super::selector::{Mode, SelectorState};
use super::text::{indent, limit_text, snippet, truncate, wrap};
use crate::prompt::Prompt;

const TYPING_HINT: &str = " Typing mode (Esc to switch to navigation). ↑/↓ move, Enter confirms, Ctrl+C cancels";
const NAVIGATION_HINT: &str =
    " Navigation mode (Esc to switch to typing). ↑/↓/j/k move, Enter confirms, Ctrl+C cancels";
const NO_MATCHES: &str = "  No matches. Keep typing, or press Ctrl+C to cancel.";

/// Rows reserved for the header, hint and preview around the list
const CHROME_ROWS: usize = 10;
const MIN_LIST_ROWS: usize = 3;
const MIN_PREVIEW_WIDTH: usize = 40;
const PREVIEW_LINES: usize = 5;

/// What a frame line shows, for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// ` Filter: <query>`
    Header,
    /// Mode-specific key help
    Hint,
    /// An unselected list entry
    Entry,
    /// The list entry under the cursor
    Selected,
    /// The "no matches" notice
    Notice,
    /// A preview section label
    Heading,
    /// The preview tag line
    Tags,
    /// Preview body text
    Preview,
}

/// One line of a rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub kind: LineKind,
    pub text: String,
}

/// A fully rendered selector screen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<FrameLine>,
}

impl Frame {
    fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(FrameLine {
            kind,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(LineKind::Blank, "");
    }

    /// Lines of the given kind
    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .filter(move |line| line.kind == kind)
            .map(|line| line.text.as_str())
    }

    /// Plain text, one line per frame line
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl SelectorState {
    /// Render at the last reported viewport size
    #[must_use]
    pub fn frame(&self, options: UiOptions) -> Frame {
        let (width, height) = self.viewport();
        render(self, width, height, options.truncate_length())
    }
}

/// Render `state` for a `width` x `height` viewport.
///
/// Entry titles and preview text are cut to `truncate_length` columns when
/// that is positive.
#[must_use]
pub fn render(state: &SelectorState, width: u16, height: u16, truncate_length: usize) -> Frame {
    let width = usize::from(width);
    let height = usize::from(height);
    let mut frame = Frame::default();

    frame.blank();
    frame.push(LineKind::Header, format!(" Filter: {}", state.query()));
    frame.push(
        LineKind::Hint,
        match state.mode() {
            Mode::Typing => TYPING_HINT,
            Mode::Navigating => NAVIGATION_HINT,
        },
    );
    frame.blank();

    let Some(current) = state.current() else {
        frame.push(LineKind::Notice, NO_MATCHES);
        return frame;
    };

    let list_rows = height.saturating_sub(CHROME_ROWS).max(MIN_LIST_ROWS);
    let (start, end) = visible_range(state.filtered_len(), state.cursor(), list_rows);
    for position in start..end {
        let Some(prompt) = state.entry(position) else {
            break;
        };
        let title = entry_title(prompt, width, truncate_length);
        if position == state.cursor() {
            frame.push(LineKind::Selected, format!("> {title}"));
        } else {
            frame.push(LineKind::Entry, format!("  {title}"));
        }
    }

    frame.blank();
    render_preview(&mut frame, current, width, truncate_length);
    frame
}

/// Window of at most `rows` entries, centred on `cursor` where possible
#[must_use]
pub fn visible_range(total: usize, cursor: usize, rows: usize) -> (usize, usize) {
    if total <= rows {
        return (0, total);
    }
    let start = cursor.saturating_sub(rows / 2).min(total - rows);
    (start, start + rows)
}

fn entry_title(prompt: &Prompt, width: usize, truncate_length: usize) -> String {
    let mut limit = width.saturating_sub(4);
    if truncate_length > 0 && truncate_length < limit {
        limit = truncate_length;
    }

    let name = truncate(&prompt.name, limit);
    if prompt.tags.is_empty() {
        return name;
    }
    truncate(&format!("{name}  [{}]", prompt.tags.join(", ")), limit)
}

fn render_preview(frame: &mut Frame, prompt: &Prompt, width: usize, truncate_length: usize) {
    let width = width.saturating_sub(2).max(MIN_PREVIEW_WIDTH);
    let mut sections: Vec<Vec<(LineKind, String)>> = Vec::new();

    if let Some(summary) = prompt.summary() {
        let body = wrap(&limit_text(&summary, truncate_length), width);
        let mut section = vec![(LineKind::Heading, "Summary:".to_string())];
        section.extend(indent(&body, "  ").into_iter().map(|l| (LineKind::Preview, l)));
        sections.push(section);
    }

    if !prompt.tags.is_empty() {
        let tags = limit_text(&prompt.tags.join(", "), truncate_length);
        sections.push(vec![(LineKind::Tags, format!("Tags: {tags}"))]);
    }

    let preview = snippet(&prompt.content, PREVIEW_LINES);
    if !preview.is_empty() {
        let body: Vec<String> = preview
            .iter()
            .flat_map(|line| wrap(&limit_text(line, truncate_length), width))
            .collect();
        let mut section = vec![(LineKind::Heading, "Preview:".to_string())];
        section.extend(indent(&body, "  ").into_iter().map(|l| (LineKind::Preview, l)));
        sections.push(section);
    }

    for (i, section) in sections.into_iter().enumerate() {
        if i > 0 {
            frame.blank();
        }
        for (kind, text) in section {
            frame.push(kind, text);
        }
    }
}
