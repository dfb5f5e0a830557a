//! Integration tests for the navigation header behavior against an
//! in-memory viewport

use folio_nav_core::{
    handle_link_click, ClickOutcome, IntersectionEntry, MemoryViewport, MenuLifecycle, NavConfig,
    NavState, PageScroll, SectionTracking,
};
use std::cell::RefCell;
use std::rc::Rc;

const SECTIONS: [&str; 5] = ["about", "skills", "projects", "experience", "contact"];

fn portfolio_viewport() -> MemoryViewport {
    // hero occupies the first screen, then the five nav sections
    MemoryViewport::new(1000.0)
        .with_section("hero", 0.0, 1000.0)
        .with_section("about", 1000.0, 1000.0)
        .with_section("skills", 2000.0, 1000.0)
        .with_section("projects", 3000.0, 1000.0)
        .with_section("experience", 4000.0, 1000.0)
        .with_section("contact", 5000.0, 1000.0)
}

/// Wire tracking into a shared state the way the header component does
fn track(
    viewport: &MemoryViewport,
    config: &NavConfig,
) -> (Rc<RefCell<NavState>>, SectionTracking<MemoryViewport>) {
    let state = Rc::new(RefCell::new(NavState::new()));
    let sink = Rc::clone(&state);
    let callback_config = config.clone();
    let tracking = SectionTracking::start(viewport.clone(), config, move |entries| {
        sink.borrow_mut().apply_intersections(&callback_config, entries);
    });
    (state, tracking)
}

#[test]
fn test_init_tracing_subscriber() {
    // Logging must not interfere with behavior
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let viewport = portfolio_viewport();
    let mut state = NavState::new();
    handle_link_click(&viewport, &NavConfig::default(), &mut state, "#about");
    assert_eq!(viewport.scroll_calls().len(), 1);
}

#[test]
fn test_anchor_click_prevents_default_when_target_exists() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();

    for link in &config.nav_links {
        let mut state = NavState::new();
        let outcome = handle_link_click(&viewport, &config, &mut state, &link.href);
        assert!(outcome.prevents_default(), "{} should be intercepted", link.name);
        assert!(matches!(outcome, ClickOutcome::Scrolled { .. }));
    }
}

#[test]
fn test_brand_link_scrolls_to_hero() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let mut state = NavState::new().with_menu_open(true);

    let outcome = handle_link_click(&viewport, &config, &mut state, &config.brand_href);
    assert_eq!(
        outcome,
        ClickOutcome::Scrolled {
            target: "#hero".to_string(),
            top: -20.0
        }
    );
    assert!(!state.menu_open());
    assert_eq!(viewport.scroll_y(), 0.0);
}

#[test]
fn test_social_links_never_scroll_or_close() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();

    for social in &config.social_links {
        let mut state = NavState::new().with_menu_open(true);
        let outcome = handle_link_click(&viewport, &config, &mut state, &social.href);
        assert_eq!(outcome, ClickOutcome::External);
        assert!(state.menu_open());
    }
    assert!(viewport.scroll_calls().is_empty());
}

#[test]
fn test_escape_closes_open_menu_and_releases_scroll() {
    let viewport = portfolio_viewport();
    let state = Rc::new(RefCell::new(NavState::new()));
    let mut lifecycle = MenuLifecycle::new(viewport.clone());
    let sync = |lifecycle: &mut MenuLifecycle<MemoryViewport>| {
        let sink = Rc::clone(&state);
        let open = state.borrow().menu_open();
        lifecycle.sync(open, move |key| {
            sink.borrow_mut().handle_key(key);
        });
    };

    state.borrow_mut().toggle_menu();
    sync(&mut lifecycle);
    assert_eq!(viewport.page_scroll(), PageScroll::Locked);
    assert!(viewport.is_listening_keys());

    // other keys leave the menu alone
    viewport.press_key("Enter");
    sync(&mut lifecycle);
    assert!(state.borrow().menu_open());
    assert_eq!(viewport.page_scroll(), PageScroll::Locked);

    viewport.press_key("Escape");
    sync(&mut lifecycle);
    assert!(!state.borrow().menu_open());
    assert_eq!(viewport.page_scroll(), PageScroll::Enabled);
    assert!(!viewport.is_listening_keys());
}

#[test]
fn test_anchor_click_in_open_menu_releases_scroll_lock() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let mut state = NavState::new().with_menu_open(true);
    let mut lifecycle = MenuLifecycle::new(viewport.clone());
    lifecycle.sync(state.menu_open(), |_| {});
    assert_eq!(viewport.page_scroll(), PageScroll::Locked);

    handle_link_click(&viewport, &config, &mut state, "#experience");
    lifecycle.sync(state.menu_open(), |_| {});
    assert_eq!(viewport.page_scroll(), PageScroll::Enabled);
    assert_eq!(viewport.scroll_calls(), vec![3980.0]);
}

#[test]
fn test_unmount_with_open_menu_restores_page() {
    let viewport = portfolio_viewport();
    let mut lifecycle = MenuLifecycle::new(viewport.clone());
    lifecycle.sync(true, |_| {});
    drop(lifecycle);

    assert_eq!(viewport.page_scroll(), PageScroll::Enabled);
    assert!(!viewport.is_listening_keys());
    assert!(!viewport.press_key("Escape"));
}

#[test]
fn test_scrolling_updates_active_section() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let (state, tracking) = track(&viewport, &config);
    assert_eq!(tracking.observed(), SECTIONS);

    // hero in the band, nothing tracked yet
    viewport.scroll_window_to(0.0);
    assert_eq!(state.borrow().active_section(), None);

    // band is 200..300px from the viewport top
    viewport.scroll_window_to(1500.0);
    assert_eq!(state.borrow().active_section(), Some("about"));

    viewport.scroll_window_to(2500.0);
    assert_eq!(state.borrow().active_section(), Some("skills"));

    // scrolling back up moves the highlight back
    viewport.scroll_window_to(850.0);
    assert_eq!(state.borrow().active_section(), Some("about"));
}

#[test]
fn test_anchor_scroll_then_observer_marks_target_active() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let (state, _tracking) = track(&viewport, &config);

    let outcome = handle_link_click(&viewport, &config, &mut state.borrow_mut(), "#projects");
    let ClickOutcome::Scrolled { top, .. } = outcome.clone() else {
        panic!("expected a scroll, got {outcome:?}");
    };
    assert_eq!(viewport.scroll_calls(), vec![2980.0]);

    viewport.scroll_window_to(top);
    assert_eq!(state.borrow().active_section(), Some("projects"));
}

#[test]
fn test_simultaneous_entries_last_one_wins() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let (state, _tracking) = track(&viewport, &config);

    viewport.deliver(&[
        IntersectionEntry::new("experience", true),
        IntersectionEntry::new("about", true),
        IntersectionEntry::new("contact", false),
    ]);
    assert_eq!(state.borrow().active_section(), Some("about"));
}

#[test]
fn test_missing_sections_are_skipped() {
    let viewport = MemoryViewport::new(1000.0)
        .with_section("about", 0.0, 1000.0)
        .with_section("contact", 1000.0, 1000.0);
    let config = NavConfig::default();
    let (state, tracking) = track(&viewport, &config);
    assert_eq!(tracking.observed(), ["about", "contact"]);

    let mut nav = NavState::new().with_menu_open(true);
    let outcome = handle_link_click(&viewport, &config, &mut nav, "#skills");
    assert!(matches!(outcome, ClickOutcome::MissingTarget { .. }));
    assert!(!nav.menu_open());
    assert!(viewport.scroll_calls().is_empty());

    viewport.scroll_window_to(900.0);
    assert_eq!(state.borrow().active_section(), Some("contact"));
}

#[test]
fn test_tracking_stops_after_teardown() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let (state, tracking) = track(&viewport, &config);

    viewport.scroll_window_to(1500.0);
    drop(tracking);
    viewport.scroll_window_to(2500.0);

    assert_eq!(state.borrow().active_section(), Some("about"));
    assert!(!viewport.is_observing());
}

#[test]
fn test_band_straddling_two_sections_picks_later_one() {
    let viewport = portfolio_viewport();
    let config = NavConfig::default();
    let (state, _tracking) = track(&viewport, &config);

    // band 2000..2100 touches the end of about and the start of skills
    viewport.scroll_window_to(1800.0);
    assert_eq!(state.borrow().active_section(), Some("skills"));
}
