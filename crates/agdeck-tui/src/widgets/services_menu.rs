//! Navbar services dropdown

use agdeck_app::pages::ServicesMenu;
use agdeck_core::SERVICES;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay::{clear_area, render_shadow};
use crate::theme::{styles, Palette};

const MENU_WIDTH: u16 = 36;

pub struct ServicesDropdown<'a> {
    palette: &'a Palette,
    menu: &'a ServicesMenu,
}

impl<'a> ServicesDropdown<'a> {
    pub fn new(palette: &'a Palette, menu: &'a ServicesMenu) -> Self {
        Self { palette, menu }
    }

    /// Where the dropdown goes when it hangs from `column` just below `top`,
    /// kept inside `bounds`
    pub fn area(bounds: Rect, column: u16, top: u16) -> Rect {
        let height = u16::try_from(SERVICES.len()).unwrap_or(u16::MAX) + 2;
        let width = MENU_WIDTH.min(bounds.width);
        let x = (bounds.x + column).min(bounds.right().saturating_sub(width));
        let height = height.min(bounds.bottom().saturating_sub(top));
        Rect::new(x, top, width, height)
    }
}

impl Widget for ServicesDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        clear_area(buf, area);
        render_shadow(buf, area, p);

        let block = styles::modal_block(p, " Services ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = SERVICES
            .iter()
            .enumerate()
            .map(|(i, service)| {
                let selected = i == self.menu.selected;
                let style = if selected {
                    styles::focused_selected(p)
                } else {
                    styles::text_primary(p)
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", service.icon.glyph()), style),
                    Span::styled(format!("{:<18}", service.title), style),
                    Span::styled(
                        format!("{} ", service.price),
                        if selected {
                            style
                        } else {
                            styles::text_muted(p)
                        },
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_dropdown_lists_services() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        let menu = ServicesMenu {
            open: true,
            selected: 1,
        };
        let area = ServicesDropdown::area(term.area(), 10, 2);
        term.render_widget(ServicesDropdown::new(&palette, &menu), area);

        assert!(term.buffer_contains("Web Engineering"));
        assert!(term.buffer_contains("Brand Design"));
        assert!(term.buffer_contains("Post-Production"));
    }

    #[test]
    fn test_area_stays_in_bounds() {
        let bounds = Rect::new(0, 0, 50, 20);
        let area = ServicesDropdown::area(bounds, 40, 2);
        assert!(area.right() <= bounds.right());
        assert_eq!(area.height, 5);
    }
}
