//! Color theme for the terminal selector

use crate::ui::render::LineKind;
use ratatui::style::{Color, Modifier, Style};

/// Colors for each kind of frame line
#[derive(Debug, Clone)]
pub struct Theme {
    /// Foreground of the entry under the cursor
    pub selection_fg: Color,
    /// Filter line
    pub header: Color,
    /// Key help and the preview body
    pub dimmed: Color,
    /// "No matches" notice
    pub warning: Color,
    /// Preview section labels
    pub heading: Color,
    /// Tag list in the preview
    pub tag: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selection_fg: Color::Indexed(213),
            header: Color::Cyan,
            dimmed: Color::DarkGray,
            warning: Color::Yellow,
            heading: Color::Cyan,
            tag: Color::Magenta,
        }
    }
}

impl Theme {
    /// Style for the currently selected entry
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the filter line
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().fg(self.header).add_modifier(Modifier::BOLD)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }

    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for tags
    #[must_use]
    pub fn tag_style(&self) -> Style {
        Style::default().fg(self.tag)
    }

    /// Style for a frame line of the given kind
    #[must_use]
    pub fn style_for(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Blank | LineKind::Entry => Style::default(),
            LineKind::Header => self.header_style(),
            LineKind::Hint | LineKind::Preview => self.dimmed_style(),
            LineKind::Selected => self.selected_style(),
            LineKind::Notice => self.warning_style(),
            LineKind::Heading => self.heading_style(),
            LineKind::Tags => self.tag_style(),
        }
    }
}
