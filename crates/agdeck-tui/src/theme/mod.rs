//! Light and dark palettes plus the style builders widgets draw with.
//!
//! Every frame picks one [`Palette`] from the resolved theme; widgets never
//! reach for raw colors.

pub mod palette;
pub mod styles;

pub use palette::Palette;
