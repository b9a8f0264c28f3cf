//! Main render/view function (View in TEA pattern)


use agdeck_app::navigation::{ScrollRequest, ScrollState};
use agdeck_app::state::AppState;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{styles, Palette};
use crate::widgets::PageContent;

/// Render the complete UI (View function in TEA)
///
/// The only state this touches is the page scroll: pending scroll requests
/// are resolved against the laid-out content and the offset is clamped.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.is_dark());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.deepest_bg)),
        area,
    );

    let areas = layout::create(area);

    let navbar = widgets::NavBar::new(&palette, state.view())
        .theme(state.theme.preference(), state.is_dark())
        .services_open(state.pages.services_menu.open);
    frame.render_widget(navbar, areas.header);

    render_page(frame, areas.body, state, &palette);

    frame.render_widget(widgets::Footer::new(&palette, state), areas.footer);

    // Overlays, lowest first
    if state.pages.services_menu.open {
        let dropdown_area = widgets::ServicesDropdown::area(
            area,
            widgets::NavBar::services_column(),
            areas.header.bottom().saturating_sub(1),
        );
        frame.render_widget(
            widgets::ServicesDropdown::new(&palette, &state.pages.services_menu),
            dropdown_area,
        );
    }

    if state.companion_visible() {
        render_companion(frame, areas.body, state, &palette);
    }

    if state.show_help {
        frame.render_widget(widgets::HelpOverlay::new(&palette), area);
    }
}

/// Draw the one page for the current view
fn render_page(frame: &mut Frame, area: Rect, state: &mut AppState, palette: &Palette) {
    let block = styles::glass_block(palette, false);
    let inner = block.inner(area).inner(Margin::new(1, 0));
    frame.render_widget(block, area);

    // An unknown service id leaves the body empty
    let Some(content) = widgets::pages::build(state, palette, inner.width) else {
        return;
    };

    let offset = resolve_scroll(&mut state.nav.scroll, &content, inner.height);
    frame.render_widget(
        Paragraph::new(content.into_lines()).scroll((offset, 0)),
        inner,
    );
}

/// Apply a pending scroll request and clamp the offset so the last line
/// never scrolls above the bottom of the viewport.
pub fn resolve_scroll(scroll: &mut ScrollState, content: &PageContent, viewport: u16) -> u16 {
    let max = content.height().saturating_sub(viewport);
    if let Some(request) = scroll.request.take() {
        scroll.offset = match request {
            // Missing anchors land at the top
            ScrollRequest::Section(section) => content.anchor_line(section).unwrap_or(0),
            ScrollRequest::Bottom => max,
        };
    }
    scroll.offset = scroll.offset.min(max);
    scroll.offset
}

fn render_companion(frame: &mut Frame, body: Rect, state: &AppState, palette: &Palette) {
    let chat = &state.chat;
    let areas = widgets::CompanionAreas::new(body);

    if chat.is_panel_open() {
        frame.render_widget(widgets::ChatPanel::new(palette, chat), areas.panel);
    } else if chat.is_menu_open() {
        frame.render_widget(
            widgets::CompanionMenu::new(palette, chat.menu_selected()),
            widgets::CompanionMenu::area(areas.bubble),
        );
    } else if chat.is_toast_visible() {
        frame.render_widget(
            widgets::AttentionToast::new(palette),
            widgets::AttentionToast::area(areas.bubble),
        );
    }

    frame.render_widget(widgets::Mascot::new(palette, chat), areas.mascot);
}
