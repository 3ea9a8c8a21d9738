//! Key handling for the terminal selector
//!
//! Maps crossterm events onto [`SelectorEvent`]s. Anything without a mapping
//! is dropped.

use crate::ui::selector::SelectorEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a terminal event into a selector event
#[must_use]
pub fn translate(event: &Event) -> Option<SelectorEvent> {
    match event {
        Event::Key(key) => translate_key(*key),
        Event::Paste(text) => {
            let text: String = text.chars().filter(|c| !c.is_control()).collect();
            (!text.is_empty()).then_some(SelectorEvent::Input(text))
        }
        Event::Resize(width, height) => Some(SelectorEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(key: KeyEvent) -> Option<SelectorEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let event = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => SelectorEvent::Cancel,
        (KeyCode::Enter, _) => SelectorEvent::Confirm,
        (KeyCode::Esc, _) => SelectorEvent::ToggleMode,
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => SelectorEvent::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => SelectorEvent::MoveDown,
        (KeyCode::Backspace | KeyCode::Delete, _) | (KeyCode::Char('h'), KeyModifiers::CONTROL) => {
            SelectorEvent::Backspace
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => SelectorEvent::ClearQuery,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            SelectorEvent::Input(c.to_string())
        }
        _ => return None,
    };
    Some(event)
}
