//! One content builder per top-level view

mod about;
mod contact;
mod home;
mod portfolio;
mod service_detail;

use agdeck_app::state::AppState;
use agdeck_core::ViewState;

use super::page::{PageBuilder, PageContent};
use crate::theme::Palette;

/// Build the content of the view on screen.
///
/// `None` means the view has nothing to draw, which is the case for a
/// service detail whose id names no service.
pub fn build(state: &AppState, palette: &Palette, width: u16) -> Option<PageContent> {
    let mut page = PageBuilder::new(palette, width);
    match state.view() {
        ViewState::Home => home::build(&mut page, state),
        ViewState::About => about::build(&mut page, state),
        ViewState::Portfolio => portfolio::build(&mut page, state),
        ViewState::Contact => contact::build(&mut page, state),
        ViewState::ServiceDetail => service_detail::build(&mut page, state.active_service()?),
    }
    Some(page.finish())
}
