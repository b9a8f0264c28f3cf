//! # agdeck-core - Core Domain Types
//!
//! Foundation crate for Agency Deck. Provides domain types, the static
//! studio catalog, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing, toml).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ThemePreference`] - Tri-state light/dark/system preference
//! - [`ViewState`] - Top-level view currently on screen
//! - [`HomeSection`] - Scroll anchors inside the home view
//! - [`ChatMessage`], [`ChatRole`] - Companion chat history entries
//! - [`Mood`] - Transient mascot expression
//!
//! ### Catalog (`catalog`)
//! - [`Service`] and friends - Immutable studio data loaded at startup
//! - [`find_service()`] - Lookup by id, `None` for stale or unknown ids
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum; assistant failures are singled out for the chat fallback
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Log an error with context on the way up
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use agdeck_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Agency Deck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    find_service, ContactInfo, FaqItem, PortfolioItem, PricingPlan, Service, ServiceDetails,
    ServiceIcon, Testimonial, CONTACT_INFO, FAQ_ITEMS, PORTFOLIO_ITEMS, SERVICES, TESTIMONIALS,
};
pub use error::{Error, Result, ResultExt};
pub use types::{ChatMessage, ChatRole, HomeSection, Mood, ThemePreference, ViewState};
