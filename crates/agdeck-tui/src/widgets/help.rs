//! Help overlay listing every binding

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::{styles, Palette};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigate",
        &[
            ("h a p c", "home, about, portfolio, contact"),
            ("s", "services menu"),
            ("b / Esc", "back to home"),
            ("Tab / S-Tab", "next / previous home section"),
            ("1-3", "open a service (home), toggle FAQ (about)"),
            ("j k PgUp PgDn g G", "scroll"),
        ],
    ),
    (
        "Theme",
        &[("t", "toggle light / dark"), ("T", "cycle light, dark, system")],
    ),
    (
        "AG-Bot",
        &[
            ("w", "wake"),
            ("m", "quick menu (help, grid, sleep)"),
            ("1-4", "quick prompt in an empty chat"),
        ],
    ),
    ("General", &[("?", "toggle help"), ("q / Ctrl+c", "quit")]),
];

const KEY_COLUMN: usize = 20;

pub struct HelpOverlay<'a> {
    palette: &'a Palette,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();
        for (i, (title, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(*title, styles::accent_bold(p))));
            for (keys, action) in bindings.iter() {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<KEY_COLUMN$}"), styles::keybinding(p)),
                    Span::styled(*action, styles::text_primary(p)),
                ]));
            }
        }
        lines
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let lines = self.lines();
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX) + 2;
        let modal = centered_rect(66, height, area);

        dim_background(buf, area, p);
        clear_area(buf, modal);
        render_shadow(buf, modal, p);

        let block = styles::modal_block(p, " Keys ");
        let inner = block.inner(modal);
        block.render(modal, buf);
        Paragraph::new(lines).render(inner, buf);
    }
}
