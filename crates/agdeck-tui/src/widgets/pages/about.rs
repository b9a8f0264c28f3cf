//! About: studio intro, operating intent, standards, FAQ accordion

use agdeck_app::state::AppState;
use agdeck_core::catalog::{ABOUT_INTRO, OPERATING_INTENT, PROFESSIONAL_STANDARDS, STUDIO_NAME};
use agdeck_core::FAQ_ITEMS;
use ratatui::text::{Line, Span};

use crate::theme::styles;
use crate::widgets::page::PageBuilder;

pub fn build(page: &mut PageBuilder<'_>, state: &AppState) {
    let p = *page.palette();

    page.title(&format!("About {STUDIO_NAME}"))
        .paragraph(ABOUT_INTRO)
        .blank();

    page.heading("Operating Intent").blank();
    for intent in OPERATING_INTENT {
        page.bullet(intent);
    }
    page.blank();

    page.heading("Professional Standards").blank();
    for standard in &PROFESSIONAL_STANDARDS {
        page.line(Line::from(Span::styled(
            format!("  {}", standard.title),
            styles::heading(&p),
        )))
        .indented("    ", "    ", standard.description, styles::text_secondary(&p));
    }
    page.blank();

    page.heading("FAQ").blank();
    for (i, item) in FAQ_ITEMS.iter().enumerate() {
        let open = state.pages.faq_open == Some(i);
        let marker = if open { "▾" } else { "▸" };
        page.line(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), styles::keybinding(&p)),
            Span::styled(format!("{marker} "), styles::accent(&p)),
            Span::styled(
                item.question,
                if open {
                    styles::accent_bold(&p)
                } else {
                    styles::text_primary(&p)
                },
            ),
        ]));
        if open {
            page.indented("      ", "      ", item.answer, styles::text_secondary(&p));
        }
    }
}
