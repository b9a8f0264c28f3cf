//! Home: hero, services, selected work, process, testimonials, contact

use agdeck_app::state::AppState;
use agdeck_core::catalog::{HERO_HEADLINE, HERO_SUBHEAD, PROCESS_STEPS, STUDIO_NAME};
use agdeck_core::{HomeSection, CONTACT_INFO, PORTFOLIO_ITEMS, SERVICES, TESTIMONIALS};
use ratatui::text::{Line, Span};

use crate::theme::styles;
use crate::widgets::hints::key_hints;
use crate::widgets::page::PageBuilder;

/// Projects teased on the home page
const FEATURED_WORK: usize = 4;

pub fn build(page: &mut PageBuilder<'_>, state: &AppState) {
    let p = *page.palette();

    page.anchor(HomeSection::Hero)
        .text(STUDIO_NAME, styles::accent_bold(&p))
        .blank()
        .title(HERO_HEADLINE)
        .muted(HERO_SUBHEAD)
        .blank()
        .line(key_hints(&p, &[("Enter", "start a project"), ("s", "services")]))
        .blank();

    page.anchor(HomeSection::Services).heading("Services").blank();
    for (i, service) in SERVICES.iter().enumerate() {
        page.line(Line::from(vec![
            Span::styled(format!("[{}] ", i + 1), styles::keybinding(&p)),
            Span::styled(format!("{} ", service.icon.glyph()), styles::accent(&p)),
            Span::styled(service.title, styles::heading(&p)),
            Span::styled(format!("  {}", service.price), styles::status_green(&p)),
        ]))
        .indented("    ", "    ", service.description, styles::text_secondary(&p))
        .blank();
    }

    page.anchor(HomeSection::Portfolio).heading("Selected Work").blank();
    for item in PORTFOLIO_ITEMS.iter().take(FEATURED_WORK) {
        page.line(Line::from(vec![
            Span::styled("  ▣ ", styles::accent(&p)),
            Span::styled(item.title, styles::text_primary(&p)),
            Span::styled(format!("  {}", item.category), styles::text_muted(&p)),
        ]));
    }
    page.blank()
        .line(key_hints(&p, &[("p", "full portfolio")]))
        .blank();

    page.anchor(HomeSection::Process).heading("Process").blank();
    for (i, step) in PROCESS_STEPS.iter().enumerate() {
        page.line(Line::from(vec![
            Span::styled(format!("  0{} ", i + 1), styles::text_muted(&p)),
            Span::styled(format!("{:<9}", step.code), styles::accent(&p)),
            Span::styled(step.title, styles::heading(&p)),
        ]))
        .indented("     ", "     ", step.description, styles::text_secondary(&p));
    }
    page.blank();

    page.anchor(HomeSection::Testimonials).heading("Testimonials").blank();
    let index = state.pages.testimonial % TESTIMONIALS.len();
    let testimonial = &TESTIMONIALS[index];
    page.indented("  “", "   ", testimonial.quote, styles::text_primary(&p))
        .line(Line::from(vec![
            Span::styled(format!("   {}", testimonial.name), styles::heading(&p)),
            Span::styled(format!(", {}", testimonial.role), styles::text_muted(&p)),
        ]))
        .blank()
        .line(Line::from(vec![
            Span::styled(
                format!("  {}/{}  ", index + 1, TESTIMONIALS.len()),
                styles::text_muted(&p),
            ),
            Span::styled("[", styles::keybinding(&p)),
            Span::styled(" prev  ", styles::text_muted(&p)),
            Span::styled("]", styles::keybinding(&p)),
            Span::styled(" next", styles::text_muted(&p)),
        ]))
        .blank();

    page.anchor(HomeSection::Contact).heading("Contact").blank();
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
    .blank()
    .line(key_hints(&p, &[("c", "open the contact form")]));
}
