//! Ratatui front end for the prompt selector
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              RatatuiSelector              │
//! │   (drives SelectorState until an outcome) │
//! └─────────────────────┬─────────────────────┘
//!                       │
//!         ┌─────────────┼─────────────┐
//!         ▼             ▼             ▼
//!  ┌─────────────┐ ┌───────────┐ ┌───────────┐
//!  │   render    │ │  Ratatui  │ │ Crossterm │
//!  │  (frames)   │ │ (drawing) │ │  (events) │
//!  └─────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod finder;
mod theme;

pub use events::translate;
pub use finder::RatatuiSelector;
pub use theme::Theme;
