//! View navigation
//!
//! Tracks the top-level view, the selected service and the page scroll
//! position. There is no back stack; "back" is `navigate(Home, None)`.

use std::time::Duration;

use agdeck_core::{find_service, HomeSection, Service, ViewState};

/// Delay between switching to the home view and scrolling to an anchor,
/// so the home view has been laid out at least once.
pub const DEFERRED_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Lines moved by a page scroll
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Where the renderer should move the viewport on its next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    Section(HomeSection),
    Bottom,
}

/// Vertical scroll state of the page area.
///
/// `offset` is clamped by the renderer, which is the only place that
/// knows the content height. Section positions are also resolved there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset: u16,
    pub request: Option<ScrollRequest>,
    /// Last home section jumped to, for stepping between sections
    pub last_section: Option<HomeSection>,
}

impl ScrollState {
    pub fn to_top(&mut self) {
        self.offset = 0;
        self.request = None;
        self.last_section = None;
    }

    pub fn to_bottom(&mut self) {
        self.request = Some(ScrollRequest::Bottom);
    }

    pub fn to_section(&mut self, section: HomeSection) {
        self.request = Some(ScrollRequest::Section(section));
        self.last_section = Some(section);
    }

    pub fn up(&mut self, lines: u16) {
        self.request = None;
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn down(&mut self, lines: u16) {
        self.request = None;
        self.offset = self.offset.saturating_add(lines);
    }
}

/// A scroll to an anchor that fires after [`DEFERRED_SCROLL_DELAY`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredScroll {
    pub generation: u64,
    pub anchor: String,
}

#[derive(Debug, Clone, Default)]
pub struct ViewNavigator {
    view: ViewState,
    selected_service: Option<String>,
    /// Bumped by every navigation; a deferred scroll from an older
    /// navigation is dropped.
    generation: u64,
    pub scroll: ScrollState,
}

impl ViewNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Raw selected id. Only meaningful while the view is `ServiceDetail`.
    pub fn selected_service_id(&self) -> Option<&str> {
        match self.view {
            ViewState::ServiceDetail => self.selected_service.as_deref(),
            _ => None,
        }
    }

    /// Switch views.
    ///
    /// Home with a non-empty anchor schedules a deferred scroll and returns
    /// it; every other case scrolls to the top immediately.
    pub fn navigate(&mut self, view: ViewState, anchor: Option<&str>) -> Option<DeferredScroll> {
        self.generation = self.generation.wrapping_add(1);
        self.view = view;
        self.selected_service = None;

        let anchor = anchor.map(str::trim).filter(|a| !a.is_empty());
        match (view, anchor) {
            (ViewState::Home, Some(anchor)) => Some(DeferredScroll {
                generation: self.generation,
                anchor: anchor.to_string(),
            }),
            _ => {
                self.scroll.to_top();
                None
            }
        }
    }

    /// Show the detail view for a service id. The id is not validated here.
    pub fn select_service(&mut self, id: impl Into<String>) {
        self.generation = self.generation.wrapping_add(1);
        self.view = ViewState::ServiceDetail;
        self.selected_service = Some(id.into());
        self.scroll.to_top();
    }

    /// Fire a deferred scroll. Returns `false` when it was superseded.
    ///
    /// An anchor that names no section scrolls to the top.
    pub fn apply_deferred_scroll(&mut self, scroll: &DeferredScroll) -> bool {
        if scroll.generation != self.generation {
            return false;
        }
        match HomeSection::from_anchor(&scroll.anchor) {
            Some(section) => self.scroll.to_section(section),
            None => self.scroll.to_top(),
        }
        true
    }

    /// The service to render in the detail view.
    ///
    /// `None` outside `ServiceDetail` and for ids missing from the catalog.
    pub fn active_service(&self) -> Option<&'static Service> {
        self.selected_service_id().and_then(find_service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = ViewNavigator::new();
        assert_eq!(nav.view(), ViewState::Home);
        assert!(nav.selected_service_id().is_none());
    }

    #[test]
    fn test_navigate_other_view_clears_selection_and_scrolls_top() {
        let mut nav = ViewNavigator::new();
        nav.select_service("web");
        nav.scroll.down(40);

        assert!(nav.navigate(ViewState::About, None).is_none());
        assert_eq!(nav.view(), ViewState::About);
        assert!(nav.selected_service_id().is_none());
        assert_eq!(nav.scroll.offset, 0);
    }

    #[test]
    fn test_navigate_home_is_idempotent() {
        let mut a = ViewNavigator::new();
        a.scroll.down(12);
        a.navigate(ViewState::Home, None);
        let once = (a.view(), a.selected_service_id().map(String::from), a.scroll.clone());
        a.navigate(ViewState::Home, None);
        let twice = (a.view(), a.selected_service_id().map(String::from), a.scroll.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_navigate_home_with_anchor_defers_scroll() {
        let mut nav = ViewNavigator::new();
        nav.navigate(ViewState::About, None);

        let deferred = nav.navigate(ViewState::Home, Some("services")).unwrap();
        assert_eq!(nav.view(), ViewState::Home);
        assert_eq!(nav.scroll.request, None);

        assert!(nav.apply_deferred_scroll(&deferred));
        assert_eq!(
            nav.scroll.request,
            Some(ScrollRequest::Section(HomeSection::Services))
        );
    }

    #[test]
    fn test_empty_anchor_is_no_anchor() {
        let mut nav = ViewNavigator::new();
        assert!(nav.navigate(ViewState::Home, Some("  ")).is_none());
    }

    #[test]
    fn test_unknown_anchor_scrolls_to_top() {
        let mut nav = ViewNavigator::new();
        nav.scroll.down(30);
        let deferred = nav.navigate(ViewState::Home, Some("pricing")).unwrap();
        assert!(nav.apply_deferred_scroll(&deferred));
        assert_eq!(nav.scroll.offset, 0);
        assert_eq!(nav.scroll.request, None);
    }

    #[test]
    fn test_last_navigate_wins_over_deferred_scroll() {
        let mut nav = ViewNavigator::new();
        let deferred = nav.navigate(ViewState::Home, Some("process")).unwrap();
        nav.navigate(ViewState::Contact, None);

        assert!(!nav.apply_deferred_scroll(&deferred));
        assert_eq!(nav.view(), ViewState::Contact);
        assert_eq!(nav.scroll.request, None);
    }

    #[test]
    fn test_select_service_then_active_service() {
        let mut nav = ViewNavigator::new();
        nav.select_service("video");
        assert_eq!(nav.view(), ViewState::ServiceDetail);
        assert_eq!(nav.active_service().map(|s| s.id), Some("video"));
    }

    #[test]
    fn test_select_unknown_service_has_no_active_service() {
        let mut nav = ViewNavigator::new();
        nav.select_service("nonexistent");
        assert_eq!(nav.view(), ViewState::ServiceDetail);
        assert_eq!(nav.selected_service_id(), Some("nonexistent"));
        assert!(nav.active_service().is_none());
    }

    #[test]
    fn test_scroll_saturates() {
        let mut scroll = ScrollState::default();
        scroll.up(5);
        assert_eq!(scroll.offset, 0);
        scroll.down(PAGE_SCROLL_LINES);
        scroll.up(3);
        assert_eq!(scroll.offset, 7);
    }
}
