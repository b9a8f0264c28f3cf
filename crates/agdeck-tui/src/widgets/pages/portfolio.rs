//! Portfolio: category chips and the filtered project list

use agdeck_app::state::AppState;
use agdeck_core::catalog::PORTFOLIO_CATEGORIES;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;
use crate::widgets::hints::key_hints;
use crate::widgets::page::PageBuilder;

pub fn build(page: &mut PageBuilder<'_>, state: &AppState) {
    let p = *page.palette();

    page.title("Portfolio")
        .muted("A curated archive of brand systems, platforms and motion work.")
        .blank();

    // Chips wrap onto as many rows as the width needs
    let selected = state.pages.category();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;
    for category in PORTFOLIO_CATEGORIES {
        let chip = format!(" {category} ");
        let chip_width = UnicodeWidthStr::width(chip.as_str()) + 1;
        if row_width + chip_width > page.width() && !row.is_empty() {
            page.line(Line::from(std::mem::take(&mut row)));
            row_width = 0;
        }
        let style = if category == selected {
            styles::focused_selected(&p)
        } else {
            styles::text_secondary(&p)
        };
        row.push(Span::styled(chip, style));
        row.push(Span::raw(" "));
        row_width += chip_width;
    }
    if !row.is_empty() {
        page.line(Line::from(row));
    }
    page.line(key_hints(&p, &[("[ ]", "filter")])).blank();

    let items = state.pages.filtered_portfolio();
    if items.is_empty() {
        page.muted("No projects in this category yet.");
        return;
    }

    for item in items {
        page.line(Line::from(vec![
            Span::styled("▣ ", styles::accent(&p)),
            Span::styled(item.title, styles::heading(&p)),
        ]))
        .line(Line::from(Span::styled(
            format!("  {}", item.category),
            styles::text_secondary(&p),
        )))
        .indented("  ", "  ", item.image, styles::text_muted(&p))
        .blank();
    }
}
