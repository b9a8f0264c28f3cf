//! Navbar: studio mark, view tabs, services dropdown label, theme indicator

use agdeck_core::catalog::STUDIO_NAME;
use agdeck_core::{ThemePreference, ViewState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Palette};

const BRAND_MARK: &str = "◆ ";
const SERVICES_LABEL: &str = "Services ▾";

/// Navbar hotkey for a view tab
fn tab_key(view: ViewState) -> char {
    match view {
        ViewState::Home => 'h',
        ViewState::About => 'a',
        ViewState::Portfolio => 'p',
        ViewState::Contact => 'c',
        ViewState::ServiceDetail => 's',
    }
}

pub struct NavBar<'a> {
    palette: &'a Palette,
    view: ViewState,
    preference: ThemePreference,
    is_dark: bool,
    services_open: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(palette: &'a Palette, view: ViewState) -> Self {
        Self {
            palette,
            view,
            preference: ThemePreference::default(),
            is_dark: true,
            services_open: false,
        }
    }

    pub fn theme(mut self, preference: ThemePreference, is_dark: bool) -> Self {
        self.preference = preference;
        self.is_dark = is_dark;
        self
    }

    pub fn services_open(mut self, open: bool) -> Self {
        self.services_open = open;
        self
    }

    /// Column of the services label relative to the navbar's left edge,
    /// where the dropdown hangs from.
    pub fn services_column() -> u16 {
        // Border plus a leading space
        let mut column = 2 + UnicodeWidthStr::width(BRAND_MARK) + STUDIO_NAME.len() + 3;
        for view in ViewState::NAV_ORDER {
            column += tab_text(view).len() + 1;
        }
        u16::try_from(column).unwrap_or(u16::MAX)
    }

    fn theme_indicator(&self) -> Line<'static> {
        let p = self.palette;
        let (glyph, mode) = if self.is_dark {
            ("☾", "dark")
        } else {
            ("☀", "light")
        };
        let mut spans = vec![
            Span::styled(format!("{glyph} {mode}"), styles::accent(p)),
        ];
        if self.preference == ThemePreference::System {
            spans.push(Span::styled(" (system)", styles::text_muted(p)));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

fn tab_text(view: ViewState) -> String {
    format!(" {} {} ", tab_key(view), view.label())
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(BRAND_MARK, styles::accent(p)),
            Span::styled(STUDIO_NAME.to_uppercase(), styles::heading(p)),
            Span::raw("   "),
        ];

        for view in ViewState::NAV_ORDER {
            let style = if view == self.view {
                styles::focused_selected(p)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(tab_text(view), style));
            spans.push(Span::raw(" "));
        }

        let services_style = if self.services_open || self.view == ViewState::ServiceDetail {
            styles::focused_selected(p)
        } else {
            styles::text_secondary(p)
        };
        spans.push(Span::styled(format!(" s {SERVICES_LABEL} "), services_style));

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(p.card_bg))
            .render(inner, buf);

        let indicator = self.theme_indicator();
        let width = u16::try_from(indicator.width())
            .unwrap_or(u16::MAX)
            .min(inner.width);
        let indicator_area = Rect {
            x: inner.x + inner.width - width,
            width,
            ..inner
        };
        Paragraph::new(indicator).render(indicator_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_navbar_renders_brand_and_tabs() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        term.render_widget(NavBar::new(&palette, ViewState::Home), Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains("AG CREATORZ"));
        assert!(term.buffer_contains("h Home"));
        assert!(term.buffer_contains("c Contact"));
        assert!(term.buffer_contains("Services ▾"));
    }

    #[test]
    fn test_navbar_theme_indicator() {
        let mut term = TestTerminal::new();
        let palette = Palette::light();
        let bar = NavBar::new(&palette, ViewState::About).theme(ThemePreference::System, false);
        term.render_widget(bar, Rect::new(0, 0, 100, 3));

        assert!(term.buffer_contains("☀ light (system)"));
    }

    #[test]
    fn test_active_tab_highlighted() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        term.render_widget(NavBar::new(&palette, ViewState::About), Rect::new(0, 0, 100, 3));

        let content = term.content();
        let row = content.lines().nth(1).unwrap_or_default();
        let column = row.find(" a About").unwrap();
        let x = u16::try_from(row[..column].chars().count()).unwrap() + 1;
        assert_eq!(term.buffer()[(x, 1)].bg, palette.accent);
    }

    #[test]
    fn test_services_column_points_at_label() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        term.render_widget(NavBar::new(&palette, ViewState::Home), Rect::new(0, 0, 100, 3));

        let column = NavBar::services_column();
        assert_eq!(term.buffer()[(column + 1, 1)].symbol(), "s");
    }
}
