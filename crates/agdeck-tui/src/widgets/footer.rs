//! Footer: key hints for the current mode, appearance watcher errors

use agdeck_app::state::{AppState, UiMode};
use agdeck_core::ViewState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::hints::key_hints;
use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    palette: &'a Palette,
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(palette: &'a Palette, state: &'a AppState) -> Self {
        Self { palette, state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        let state = self.state;
        match state.ui_mode() {
            UiMode::Help => vec![("Esc", "close help")],
            UiMode::Chat => vec![
                ("Enter", "send"),
                ("1-4", "quick prompt"),
                ("Ctrl+u", "clear"),
                ("Esc", "close"),
            ],
            UiMode::CompanionMenu => vec![
                ("↑↓", "select"),
                ("Enter", "choose"),
                ("h/g/z", "help/grid/sleep"),
                ("Esc", "close"),
            ],
            UiMode::ServicesMenu => {
                vec![("↑↓", "select"), ("Enter", "open"), ("Esc", "close")]
            }
            UiMode::ContactEdit => vec![
                ("Tab", "next field"),
                ("Ctrl+s", "send"),
                ("Esc", "done"),
            ],
            UiMode::Normal => {
                let mut hints = vec![("j/k", "scroll")];
                match state.view() {
                    ViewState::Home => hints.push(("Tab", "next section")),
                    ViewState::About => hints.push(("1-3", "faq")),
                    ViewState::Portfolio => hints.push(("[ ]", "filter")),
                    ViewState::Contact | ViewState::ServiceDetail => hints.push(("b", "back")),
                }
                hints.push(("t", "theme"));
                if state.companion_enabled && !state.chat.is_visible() {
                    hints.push(("w", "wake AG-Bot"));
                } else if state.companion_visible() {
                    hints.push(("m", "AG-Bot menu"));
                }
                hints.push(("?", "help"));
                hints.push(("q", "quit"));
                hints
            }
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut line = key_hints(p, &self.hints());
        line.spans.insert(0, Span::raw(" "));

        Paragraph::new(line)
            .style(Style::default().bg(p.deepest_bg))
            .render(area, buf);

        if let Some(error) = &self.state.watcher_error {
            let text = format!("⚠ {error} ");
            let width = u16::try_from(unicode_width::UnicodeWidthStr::width(text.as_str()))
                .unwrap_or(u16::MAX)
                .min(area.width);
            let error_area = Rect {
                x: area.x + area.width - width,
                width,
                ..area
            };
            Paragraph::new(Line::from(Span::styled(text, styles::status_red(p))))
                .render(error_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_footer_normal_hints() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        let state = AppState::new();
        term.render_widget(Footer::new(&palette, &state), Rect::new(0, 0, 100, 1));

        assert!(term.buffer_contains("[t] theme"));
        assert!(term.buffer_contains("[w] wake AG-Bot"));
        assert!(term.buffer_contains("[q] quit"));
    }

    #[test]
    fn test_footer_shows_watcher_error() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        let mut state = AppState::new();
        state.watcher_error = Some("no signal".into());
        term.render_widget(Footer::new(&palette, &state), Rect::new(0, 0, 100, 1));

        assert!(term.buffer_contains("⚠ no signal"));
    }

    #[test]
    fn test_footer_hides_wake_when_disabled() {
        let mut term = TestTerminal::new();
        let palette = Palette::dark();
        let mut state = AppState::new();
        state.companion_enabled = false;
        term.render_widget(Footer::new(&palette, &state), Rect::new(0, 0, 100, 1));

        assert!(!term.buffer_contains("wake"));
    }
}
