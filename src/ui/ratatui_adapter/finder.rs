//! Ratatui-based selector driver
//!
//! Owns the terminal for the length of one session: raw mode and the
//! alternate screen on stderr, a blocking read loop feeding
//! [`SelectorState`], and a redraw after every event.

use super::events::translate;
use super::theme::Theme;
use crate::ui::UiOptions;
use crate::ui::error::{Result, UiError};
use crate::ui::render::{Frame as SelectorFrame, LineKind};
use crate::ui::selector::{Mode, Outcome, SelectorEvent, SelectorState};
use crate::ui::text::display_width;
use crossterm::{
    cursor::Show,
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::Position,
    text::Line,
    widgets::Paragraph,
};
use std::io::{self, Stderr};

type SelectorTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Full-screen interactive selector
pub struct RatatuiSelector {
    theme: Theme,
}

impl RatatuiSelector {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Run `state` to completion.
    ///
    /// The terminal is restored on every exit path.
    ///
    /// # Errors
    ///
    /// Returns `UiError::Terminal` when the terminal cannot be set up, drawn
    /// to, or read from.
    pub fn run(&self, mut state: SelectorState, options: UiOptions) -> Result<Outcome> {
        let mut terminal = Self::setup_terminal().map_err(UiError::Terminal)?;

        let result = self.run_loop(&mut terminal, &mut state, options);

        if let Err(e) = Self::cleanup_terminal() {
            log::warn!("Terminal cleanup failed: {e}");
        }

        result
    }

    fn setup_terminal() -> io::Result<SelectorTerminal> {
        enable_raw_mode()?;
        let terminal = execute!(io::stderr(), EnterAlternateScreen, EnableBracketedPaste)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stderr())));
        if terminal.is_err()
            && let Err(e) = Self::cleanup_terminal()
        {
            log::debug!("Cleanup after failed setup: {e}");
        }
        terminal
    }

    fn cleanup_terminal() -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), DisableBracketedPaste, LeaveAlternateScreen, Show)
    }

    fn run_loop(
        &self,
        terminal: &mut SelectorTerminal,
        state: &mut SelectorState,
        options: UiOptions,
    ) -> Result<Outcome> {
        let size = terminal.size().map_err(UiError::Terminal)?;
        state.handle(SelectorEvent::Resize {
            width: size.width,
            height: size.height,
        });

        loop {
            let frame = state.frame(options);
            let cursor = if state.mode() == Mode::Typing {
                query_cursor(&frame)
            } else {
                None
            };
            terminal
                .draw(|f| self.draw(f, &frame, cursor))
                .map_err(UiError::Terminal)?;

            let event = event::read().map_err(UiError::Terminal)?;
            if let Some(outcome) = translate(&event).and_then(|e| state.handle(e)) {
                log::debug!("Selector finished: {outcome:?}");
                return Ok(outcome);
            }
        }
    }

    fn draw(&self, f: &mut Frame, frame: &SelectorFrame, cursor: Option<Position>) {
        let lines: Vec<Line> = frame
            .lines
            .iter()
            .map(|line| Line::styled(line.text.clone(), self.theme.style_for(line.kind)))
            .collect();
        f.render_widget(Paragraph::new(lines), f.area());

        if let Some(position) = cursor {
            f.set_cursor_position(position);
        }
    }
}

impl Default for RatatuiSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen position just after the query on the filter line
fn query_cursor(frame: &SelectorFrame) -> Option<Position> {
    let row = frame
        .lines
        .iter()
        .position(|line| line.kind == LineKind::Header)?;
    let x = u16::try_from(display_width(&frame.lines[row].text)).ok()?;
    let y = u16::try_from(row).ok()?;
    Some(Position::new(x, y))
}
