//! agdeck-app - Application state and orchestration for Agency Deck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management,
//! the Engine abstraction that owns the message channel, configuration loading, the
//! assistant collaborator, and the system appearance watcher.

pub mod actions;
pub mod appearance;
pub mod assistant;
pub mod chat;
pub mod config;
pub mod contact;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod pages;
pub mod process;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use assistant::{Assistant, TextGenerator};
pub use engine::{Engine, EngineOptions};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
