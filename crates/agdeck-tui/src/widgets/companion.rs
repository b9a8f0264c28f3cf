//! AG-Bot companion: mascot, attention toast, quick menu, chat panel

use agdeck_app::chat::{ChatState, MenuItem, QUICK_PROMPTS, TOAST_TEXT};
use agdeck_core::ChatRole;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use super::hints::key_hints;
use super::modal_overlay::{clear_area, render_shadow};
use super::page::wrap;
use crate::theme::{styles, Palette};

const BOT_NAME: &str = "AG-Bot";
const MASCOT_WIDTH: u16 = 12;
const MASCOT_HEIGHT: u16 = 4;
const MENU_WIDTH: u16 = 16;
const PANEL_WIDTH: u16 = 52;
const INPUT_PLACEHOLDER: &str = "Type a message…";

/// Where each companion piece sits inside the page body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanionAreas {
    pub mascot: Rect,
    /// Above the mascot, for the toast or the quick menu
    pub bubble: Rect,
    pub panel: Rect,
}

impl CompanionAreas {
    pub fn new(body: Rect) -> Self {
        let mascot_width = MASCOT_WIDTH.min(body.width);
        let mascot_height = MASCOT_HEIGHT.min(body.height);
        let mascot = Rect::new(
            body.right().saturating_sub(mascot_width + 1).max(body.x),
            body.bottom().saturating_sub(mascot_height),
            mascot_width,
            mascot_height,
        );

        let bubble_height = (u16::try_from(MenuItem::ALL.len()).unwrap_or(3) + 2)
            .min(mascot.y.saturating_sub(body.y));
        let bubble_width = 26.min(body.width);
        let bubble = Rect::new(
            body.right().saturating_sub(bubble_width + 1).max(body.x),
            mascot.y.saturating_sub(bubble_height),
            bubble_width,
            bubble_height,
        );

        let panel_width = PANEL_WIDTH.min(body.width);
        let panel = Rect::new(
            body.right().saturating_sub(panel_width),
            body.y,
            panel_width,
            mascot.y.saturating_sub(body.y),
        );

        Self {
            mascot,
            bubble,
            panel,
        }
    }
}

/// The mascot face, drawn while the companion is awake
pub struct Mascot<'a> {
    palette: &'a Palette,
    chat: &'a ChatState,
}

impl<'a> Mascot<'a> {
    pub fn new(palette: &'a Palette, chat: &'a ChatState) -> Self {
        Self { palette, chat }
    }
}

impl Widget for Mascot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        clear_area(buf, area);
        let focused = self.chat.is_menu_open() || self.chat.is_panel_open();
        let block = styles::glass_block(p, focused)
            .title(Span::styled(format!(" {BOT_NAME} "), styles::accent_bold(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        let face_style = if self.chat.is_closing() {
            styles::text_muted(p)
        } else {
            styles::accent_bold(p)
        };
        let lines = vec![
            Line::from(Span::styled(format!("[{}]", self.chat.mood().face()), face_style))
                .centered(),
            Line::from(Span::styled("╰──╯", styles::text_muted(p))).centered(),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}

/// "Request Assistance?" bubble
pub struct AttentionToast<'a> {
    palette: &'a Palette,
}

impl<'a> AttentionToast<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn area(bubble: Rect) -> Rect {
        let height = 3.min(bubble.height);
        Rect {
            y: bubble.bottom().saturating_sub(height),
            height,
            ..bubble
        }
    }
}

impl Widget for AttentionToast<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        clear_area(buf, area);
        let block = styles::glass_block(p, true);
        let inner = block.inner(area);
        block.render(area, buf);
        Paragraph::new(Line::from(vec![
            Span::styled(TOAST_TEXT, styles::heading(p)),
            Span::styled(" [m]", styles::keybinding(p)),
        ]))
        .centered()
        .render(inner, buf);
    }
}

/// Help / Grid / Sleep menu above the mascot
pub struct CompanionMenu<'a> {
    palette: &'a Palette,
    selected: MenuItem,
}

impl<'a> CompanionMenu<'a> {
    pub fn new(palette: &'a Palette, selected: MenuItem) -> Self {
        Self { palette, selected }
    }

    pub fn area(bubble: Rect) -> Rect {
        let width = MENU_WIDTH.min(bubble.width);
        Rect {
            x: bubble.right().saturating_sub(width),
            width,
            ..bubble
        }
    }
}

impl Widget for CompanionMenu<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        clear_area(buf, area);
        render_shadow(buf, area, p);
        let block = styles::modal_block(p, " Menu ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = MenuItem::ALL
            .iter()
            .map(|item| {
                let style = if *item == self.selected {
                    styles::focused_selected(p)
                } else {
                    styles::text_primary(p)
                };
                Line::from(vec![
                    Span::styled(format!(" {} ", item.hotkey()), styles::keybinding(p)),
                    Span::styled(format!("{:<width$}", item.label(), width = 8), style),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Chat history, quick prompts and the input line
pub struct ChatPanel<'a> {
    palette: &'a Palette,
    chat: &'a ChatState,
}

impl<'a> ChatPanel<'a> {
    pub fn new(palette: &'a Palette, chat: &'a ChatState) -> Self {
        Self { palette, chat }
    }

    /// History wrapped to `width`, oldest first
    fn history_lines(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();
        for message in self.chat.messages() {
            let (name, name_style) = match message.role {
                ChatRole::User => ("You", styles::accent_bold(p)),
                ChatRole::Assistant => (BOT_NAME, styles::status_green(p).add_modifier(Modifier::BOLD)),
            };
            lines.push(Line::from(vec![
                Span::styled(name, name_style),
                Span::styled(format!("  {}", message.formatted_time()), styles::text_muted(p)),
            ]));
            for chunk in wrap(&message.text, width.saturating_sub(2)) {
                lines.push(Line::from(Span::styled(
                    format!("  {chunk}"),
                    styles::text_primary(p),
                )));
            }
            lines.push(Line::default());
        }
        if self.chat.is_pending() {
            lines.push(Line::from(vec![
                Span::styled(BOT_NAME, styles::status_green(p).add_modifier(Modifier::BOLD)),
                Span::styled("  ◌ scanning…", styles::text_muted(p)),
            ]));
        }
        lines
    }

    fn prompt_lines(&self, width: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        let mut lines = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
            let chip = format!("[{}] {}", i + 1, prompt.label);
            let chip_width = unicode_width::UnicodeWidthStr::width(chip.as_str()) + 2;
            if used + chip_width > width && !spans.is_empty() {
                lines.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            spans.push(Span::styled(format!("[{}]", i + 1), styles::keybinding(p)));
            spans.push(Span::styled(format!(" {}  ", prompt.label), styles::text_secondary(p)));
            used += chip_width;
        }
        if !spans.is_empty() {
            lines.push(Line::from(spans));
        }
        lines
    }
}

impl Widget for ChatPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        clear_area(buf, area);
        let block = styles::modal_block(p, " CLIENT ASSISTANT ")
            .title_bottom(key_hints(p, &[("Esc", "close")]).right_aligned());
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height < 3 || inner.width < 4 {
            return;
        }

        let width = usize::from(inner.width);
        let prompts = if self.chat.quick_prompts_visible() && self.chat.input().is_empty() {
            self.prompt_lines(width)
        } else {
            Vec::new()
        };
        let prompt_height = u16::try_from(prompts.len()).unwrap_or(0);

        let [status_area, history_area, prompt_area, input_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(prompt_height),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled("● ", styles::status_green(p)),
            Span::styled("System Status: Active", styles::text_muted(p)),
        ]))
        .render(status_area, buf);

        // Stick to the newest messages
        let history = self.history_lines(width);
        let visible = usize::from(history_area.height);
        let skip = history.len().saturating_sub(visible);
        Paragraph::new(history.into_iter().skip(skip).collect::<Vec<_>>())
            .render(history_area, buf);

        Paragraph::new(prompts).render(prompt_area, buf);

        let input = self.chat.input();
        let mut spans = vec![Span::styled("› ", styles::accent_bold(p))];
        if input.is_empty() {
            spans.push(Span::styled("▏", styles::accent(p)));
            spans.push(Span::styled(
                INPUT_PLACEHOLDER,
                styles::text_muted(p).add_modifier(Modifier::ITALIC),
            ));
        } else {
            let room = width.saturating_sub(3);
            let shown: String = {
                let chars: Vec<char> = input.chars().collect();
                let start = chars.len().saturating_sub(room);
                chars[start..].iter().collect()
            };
            spans.push(Span::styled(shown, styles::text_primary(p)));
            spans.push(Span::styled("▏", styles::accent(p)));
        }
        Paragraph::new(Line::from(spans)).render(input_area, buf);
    }
}
