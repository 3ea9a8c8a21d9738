//! Interactive selector state machine
//!
//! Holds the live query, the ranked view and the cursor, and turns one
//! [`SelectorEvent`] at a time into state changes. It knows nothing about
//! terminals: the driver feeds it events and paints [`render`](super::render)
//! frames between them.
//!
//! Two input modes disambiguate single-letter keys. In [`Mode::Typing`]
//! every printable character edits the query. In [`Mode::Navigating`] the
//! query is frozen and `j`/`k` move the cursor.

use super::error::{Result, UiError};
use crate::prompt::Prompt;
use crate::search::{RankOptions, rank_matches, sorted_by_name};

/// Viewport used until the first resize event arrives
pub const DEFAULT_VIEWPORT: (u16, u16) = (80, 24);

/// How single-character input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Characters extend the query
    #[default]
    Typing,
    /// Characters are navigation commands
    Navigating,
}

impl Mode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Typing => Self::Navigating,
            Self::Navigating => Self::Typing,
        }
    }
}

/// A discrete input event, independent of the terminal that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// Abort the session
    Cancel,
    /// Accept the highlighted prompt
    Confirm,
    /// Switch between typing and navigating
    ToggleMode,
    /// Cursor up, wrapping to the bottom
    MoveUp,
    /// Cursor down, wrapping to the top
    MoveDown,
    /// Printable text, one key or a paste
    Input(String),
    /// Delete the last query character
    Backspace,
    /// Empty the query
    ClearQuery,
    /// The viewport changed size
    Resize { width: u16, height: u16 },
}

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user confirmed this prompt
    Chosen(Prompt),
    /// The user confirmed while no prompt was visible
    EmptySelection,
    /// The user cancelled
    Cancelled,
}

/// Live state of one interactive selection session
#[derive(Debug, Clone)]
pub struct SelectorState {
    candidates: Vec<Prompt>,
    options: RankOptions,
    query: String,
    /// Indices into `candidates`, in display order
    filtered: Vec<usize>,
    cursor: usize,
    mode: Mode,
    cancelled: bool,
    width: u16,
    height: u16,
}

impl SelectorState {
    /// Start a session over `candidates`, seeded with `query`.
    ///
    /// # Errors
    ///
    /// Returns `UiError::NoCandidates` when `candidates` is empty.
    pub fn new(candidates: Vec<Prompt>, query: &str, options: RankOptions) -> Result<Self> {
        if candidates.is_empty() {
            return Err(UiError::NoCandidates);
        }

        let mut state = Self {
            candidates,
            options,
            query: query.to_string(),
            filtered: Vec::new(),
            cursor: 0,
            mode: Mode::Typing,
            cancelled: false,
            width: 0,
            height: 0,
        };
        state.refilter();
        state.cursor = 0;
        Ok(state)
    }

    /// Apply one event. Returns the outcome once the session has ended.
    ///
    /// After a cancel every further call reports [`Outcome::Cancelled`].
    pub fn handle(&mut self, event: SelectorEvent) -> Option<Outcome> {
        if self.cancelled {
            return Some(Outcome::Cancelled);
        }

        match event {
            SelectorEvent::Cancel => {
                self.cancelled = true;
                return Some(Outcome::Cancelled);
            }
            SelectorEvent::Confirm => {
                return Some(
                    self.current()
                        .map_or(Outcome::EmptySelection, |p| Outcome::Chosen(p.clone())),
                );
            }
            SelectorEvent::ToggleMode => self.mode = self.mode.toggled(),
            SelectorEvent::MoveUp => self.move_up(),
            SelectorEvent::MoveDown => self.move_down(),
            SelectorEvent::Input(text) => self.input(&text),
            SelectorEvent::Backspace => {
                if self.mode == Mode::Typing && self.query.pop().is_some() {
                    self.refilter();
                }
            }
            SelectorEvent::ClearQuery => {
                if self.mode == Mode::Typing && !self.query.is_empty() {
                    self.query.clear();
                    self.refilter();
                }
            }
            SelectorEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
            }
        }
        None
    }

    fn input(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        if self.mode == Mode::Navigating {
            let mut chars = text.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                match c {
                    'j' | 'J' => self.move_down(),
                    'k' | 'K' => self.move_up(),
                    _ => {}
                }
            }
            return;
        }

        if self.query.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
            let target = text.parse::<usize>().ok().filter(|n| (1..=self.filtered.len()).contains(n));
            if let Some(n) = target {
                self.cursor = n - 1;
                return;
            }
        }

        self.query.push_str(text);
        self.refilter();
    }

    /// Recompute the view for the current query and bring the cursor back
    /// in range. A non-empty query always restarts at the top.
    fn refilter(&mut self) {
        let trimmed = self.query.trim();
        self.filtered = if trimmed.is_empty() {
            sorted_by_name(&self.candidates).into_iter().map(|(i, _)| i).collect()
        } else {
            rank_matches(&self.candidates, trimmed, self.options)
                .into_iter()
                .map(|m| m.index)
                .collect()
        };

        if self.filtered.is_empty() || !trimmed.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.filtered.len() {
            self.cursor = self.filtered.len() - 1;
        }
    }

    fn move_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.filtered.len() - 1);
    }

    fn move_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.filtered.len();
    }

    /// Current query text, untrimmed
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the highlighted entry in [`Self::filtered`]
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Number of visible entries
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Visible entries in display order
    pub fn filtered(&self) -> impl Iterator<Item = &Prompt> {
        self.filtered.iter().map(|&i| &self.candidates[i])
    }

    /// Visible entry at `position`
    #[must_use]
    pub fn entry(&self, position: usize) -> Option<&Prompt> {
        self.filtered.get(position).map(|&i| &self.candidates[i])
    }

    /// Highlighted prompt, if any entry is visible
    #[must_use]
    pub fn current(&self) -> Option<&Prompt> {
        self.entry(self.cursor)
    }

    /// Last reported viewport, or [`DEFAULT_VIEWPORT`] for unknown dimensions
    #[must_use]
    pub const fn viewport(&self) -> (u16, u16) {
        let width = if self.width == 0 { DEFAULT_VIEWPORT.0 } else { self.width };
        let height = if self.height == 0 { DEFAULT_VIEWPORT.1 } else { self.height };
        (width, height)
    }
}
