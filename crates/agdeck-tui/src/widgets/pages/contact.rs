//! Contact: studio coordinates and the mock project brief form

use agdeck_app::contact::{ContactField, ContactForm, ContactStatus};
use agdeck_app::state::AppState;
use agdeck_core::CONTACT_INFO;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};

use crate::theme::styles;
use crate::widgets::hints::key_hints;
use crate::widgets::page::PageBuilder;

const CURSOR: &str = "▏";

pub fn build(page: &mut PageBuilder<'_>, state: &AppState) {
    let p = *page.palette();
    let form = &state.contact;

    page.title("Start a Project")
        .muted("Tell us what you are building. We reply within one business day.")
        .blank();

    page.heading("Direct Lines").blank();
    page.line(Line::from(vec![
        Span::styled("  ✉ ", styles::accent(&p)),
        Span::styled(CONTACT_INFO.email, styles::text_primary(&p)),
    ]))
    .line(Line::from(vec![
        Span::styled("  ☎ ", styles::accent(&p)),
        Span::styled(CONTACT_INFO.phone, styles::text_primary(&p)),
        Span::styled(format!("  {}", CONTACT_INFO.phone_note), styles::text_muted(&p)),
    ]))
    .indented("  ⌂ ", "    ", CONTACT_INFO.address, styles::text_secondary(&p))
    .blank();

    page.heading("Project Brief").blank();

    match form.status() {
        ContactStatus::Success => {
            page.text("✓ Transmission Sent", styles::status_green(&p))
                .muted("We will initiate contact shortly.")
                .blank()
                .line(key_hints(&p, &[("Enter", "new brief")]));
        }
        ContactStatus::Submitting => {
            render_fields(page, form);
            page.blank()
                .text("◌ Transmitting…", styles::status_yellow(&p));
        }
        ContactStatus::Idle => {
            render_fields(page, form);
            page.blank();
            if let Some(error) = form.error() {
                page.text(&format!("✗ {error}"), styles::status_red(&p));
            }
            let hints: &[(&str, &str)] = if form.is_editing() {
                &[
                    ("Tab", "next field"),
                    ("Ctrl+s", "send transmission"),
                    ("Esc", "done"),
                ]
            } else {
                &[("Enter", "fill in the brief"), ("r", "clear")]
            };
            page.line(key_hints(&p, hints));
        }
    }
}

fn render_fields(page: &mut PageBuilder<'_>, form: &ContactForm) {
    let p = *page.palette();

    for field in ContactField::ALL {
        let focused = form.is_editing() && form.focus() == field;
        let label_style = if focused {
            styles::accent_bold(&p)
        } else {
            styles::text_secondary(&p)
        };
        page.line(Line::from(Span::styled(
            format!("  {}", field.label().to_uppercase()),
            label_style,
        )));

        let value = form.value(field);
        let mut spans = vec![Span::styled(
            if focused { "  › " } else { "    " },
            styles::accent(&p),
        )];
        if field == ContactField::Category {
            spans.push(Span::styled(
                if focused { "‹ " } else { "" },
                styles::keybinding(&p),
            ));
            spans.push(Span::styled(value.to_string(), styles::text_primary(&p)));
            spans.push(Span::styled(
                if focused { " ›" } else { "" },
                styles::keybinding(&p),
            ));
            page.line(Line::from(spans));
            continue;
        }

        if value.is_empty() {
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent(&p)));
            }
            spans.push(Span::styled(
                field.placeholder(),
                styles::text_muted(&p).add_modifier(Modifier::ITALIC),
            ));
            page.line(Line::from(spans));
            continue;
        }

        // The brief can be long; keep its tail visible while typing
        let shown = tail_fitting(value, page.width().saturating_sub(6));
        spans.push(Span::styled(shown.to_string(), styles::text_primary(&p)));
        if focused {
            spans.push(Span::styled(CURSOR, styles::accent(&p)));
        }
        page.line(Line::from(spans));
    }
}

/// Longest suffix of `text` whose display width fits in `width`
fn tail_fitting(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &text[start..]
}
