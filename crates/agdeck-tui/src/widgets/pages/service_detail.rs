//! Service detail: headline, capabilities, execution steps, pricing

use agdeck_core::Service;
use ratatui::text::{Line, Span};

use crate::theme::styles;
use crate::widgets::hints::key_hints;
use crate::widgets::page::PageBuilder;

pub fn build(page: &mut PageBuilder<'_>, service: &Service) {
    let p = *page.palette();

    page.line(Line::from(vec![
        Span::styled(format!("{} ", service.icon.glyph()), styles::accent(&p)),
        Span::styled(service.title, styles::accent_bold(&p)),
        Span::styled(format!("  {}", service.price), styles::status_green(&p)),
    ]))
    .blank();

    let Some(details) = &service.details else {
        page.paragraph(service.description)
            .blank()
            .line(key_hints(&p, &[("Enter", "start project"), ("b", "back")]));
        return;
    };

    page.title(details.headline).muted(details.subhead).blank();

    page.heading("Services Included").blank();
    for feature in details.features {
        page.bullet(feature);
    }
    page.blank();

    page.heading("Execution").blank();
    for (i, step) in details.process.iter().enumerate() {
        page.indented(
            &format!("  {:02}  ", i + 1),
            "      ",
            step,
            styles::text_primary(&p),
        );
    }
    page.blank();

    if let Some(plans) = details.pricing_plans {
        page.heading("Engagement Tiers").blank();
        for plan in plans {
            page.line(Line::from(vec![
                Span::styled(format!("  {}", plan.name), styles::heading(&p)),
                Span::styled(format!("  {}", plan.price), styles::status_green(&p)),
            ]));
        }
        page.blank();
    }

    if let Some(reasons) = details.why_choose_us {
        page.heading("Why Choose Us").blank();
        for reason in reasons {
            page.bullet(reason);
        }
        page.blank();
    }

    page.line(key_hints(&p, &[("Enter", "start project"), ("b", "back")]));
}
