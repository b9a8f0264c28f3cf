//! Presentational page state
//!
//! Small pieces of state owned by individual pages: the about page's FAQ
//! accordion, the home testimonial carousel, the portfolio category filter,
//! and the navbar's services dropdown.

use agdeck_core::catalog::{portfolio_in_category, PORTFOLIO_CATEGORIES};
use agdeck_core::{PortfolioItem, Service, FAQ_ITEMS, SERVICES, TESTIMONIALS};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicesMenu {
    pub open: bool,
    pub selected: usize,
}

impl ServicesMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn up(&mut self) {
        let len = SERVICES.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % SERVICES.len();
    }

    pub fn selected_service(&self) -> &'static Service {
        &SERVICES[self.selected % SERVICES.len()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    /// Index into `FAQ_ITEMS` of the expanded answer. At most one is open.
    pub faq_open: Option<usize>,
    /// Index into `TESTIMONIALS`
    pub testimonial: usize,
    /// Index into `PORTFOLIO_CATEGORIES`
    pub portfolio_category: usize,
    pub services_menu: ServicesMenu,
}

impl PageState {
    /// Expand an FAQ entry, or collapse it if it is already open.
    pub fn toggle_faq(&mut self, index: usize) {
        if index >= FAQ_ITEMS.len() {
            return;
        }
        self.faq_open = match self.faq_open {
            Some(open) if open == index => None,
            _ => Some(index),
        };
    }

    pub fn next_testimonial(&mut self) {
        self.testimonial = (self.testimonial + 1) % TESTIMONIALS.len();
    }

    pub fn prev_testimonial(&mut self) {
        let len = TESTIMONIALS.len();
        self.testimonial = (self.testimonial + len - 1) % len;
    }

    pub fn next_category(&mut self) {
        self.portfolio_category = (self.portfolio_category + 1) % PORTFOLIO_CATEGORIES.len();
    }

    pub fn prev_category(&mut self) {
        let len = PORTFOLIO_CATEGORIES.len();
        self.portfolio_category = (self.portfolio_category + len - 1) % len;
    }

    pub fn category(&self) -> &'static str {
        PORTFOLIO_CATEGORIES[self.portfolio_category % PORTFOLIO_CATEGORIES.len()]
    }

    pub fn filtered_portfolio(&self) -> Vec<&'static PortfolioItem> {
        portfolio_in_category(self.category()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_accordion_single_open() {
        let mut pages = PageState::default();
        pages.toggle_faq(0);
        assert_eq!(pages.faq_open, Some(0));
        pages.toggle_faq(2);
        assert_eq!(pages.faq_open, Some(2));
        pages.toggle_faq(2);
        assert_eq!(pages.faq_open, None);
        pages.toggle_faq(99);
        assert_eq!(pages.faq_open, None);
    }

    #[test]
    fn test_testimonial_carousel_wraps() {
        let mut pages = PageState::default();
        pages.prev_testimonial();
        assert_eq!(pages.testimonial, TESTIMONIALS.len() - 1);
        pages.next_testimonial();
        assert_eq!(pages.testimonial, 0);
    }

    #[test]
    fn test_portfolio_filter_cycles() {
        let mut pages = PageState::default();
        assert_eq!(pages.category(), "All");
        assert_eq!(pages.filtered_portfolio().len(), 8);

        pages.next_category();
        assert_eq!(pages.category(), "Brand Design");
        assert_eq!(pages.filtered_portfolio().len(), 2);

        pages.prev_category();
        pages.prev_category();
        assert_eq!(pages.category(), "Modern UI");
    }

    #[test]
    fn test_services_menu_selection() {
        let mut menu = ServicesMenu::default();
        menu.toggle();
        assert!(menu.open);
        menu.up();
        assert_eq!(menu.selected_service().id, "video");
        menu.down();
        assert_eq!(menu.selected_service().id, "web");
    }
}
