//! Custom widget components

pub mod companion;
mod footer;
mod header;
mod help;
pub mod hints;
pub mod modal_overlay;
pub mod page;
pub mod pages;
mod services_menu;

pub use companion::{AttentionToast, ChatPanel, CompanionAreas, CompanionMenu, Mascot};
pub use footer::Footer;
pub use header::NavBar;
pub use help::HelpOverlay;
pub use page::{PageBuilder, PageContent};
pub use services_menu::ServicesDropdown;
