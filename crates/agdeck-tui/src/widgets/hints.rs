//! Key hint spans: `[key] label` pairs

use ratatui::text::{Line, Span};

use crate::theme::{styles, Palette};

/// Build a hint line like `[t] theme  [?] help`
pub fn key_hints(palette: &Palette, hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{key}]"), styles::keybinding(palette)));
        spans.push(Span::styled(
            format!(" {label}"),
            styles::text_muted(palette),
        ));
    }
    Line::from(spans)
}
