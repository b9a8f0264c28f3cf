//! agdeck-tui - Terminal UI for Agency Deck
//!
//! Creates an Engine from agdeck-app and adds terminal rendering, event
//! polling, and the page and companion widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
