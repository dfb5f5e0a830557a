//! Leptos hooks wiring the core navigation behavior to the browser
//!
//! Every browser resource lives in a local `StoredValue`, so it is released
//! when the menu closes or the owning component is disposed.

use crate::viewport::BrowserViewport;
use folio_nav_core::{
    handle_link_click, ClickOutcome, MenuLifecycle, NavConfig, NavState, SectionTracking,
};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Click handler shared by every in-page link: `(event, href)`
pub type LinkClick = Callback<(MouseEvent, String)>;

/// Lock page scroll and listen for Escape while the menu is open
pub fn use_menu_session(state: RwSignal<NavState>) {
    let lifecycle = StoredValue::new_local(None::<MenuLifecycle<BrowserViewport>>);
    let menu_open = Memo::new(move |_| state.with(NavState::menu_open));

    Effect::new(move |_| {
        let open = menu_open.get();
        lifecycle.update_value(|lifecycle| {
            if lifecycle.is_none() {
                *lifecycle = BrowserViewport::new().map(MenuLifecycle::new);
            }
            if let Some(lifecycle) = lifecycle {
                lifecycle.sync(open, move |key| {
                    state.maybe_update(|nav| nav.handle_key(key));
                });
            }
        });
    });

    on_cleanup(move || {
        lifecycle.try_update_value(|lifecycle| *lifecycle = None);
    });
}

/// Track the section being read for the component's lifetime
pub fn use_section_tracking(config: StoredValue<NavConfig>, state: RwSignal<NavState>) {
    let tracking = StoredValue::new_local(None::<SectionTracking<BrowserViewport>>);

    // Runs once after mount, when the sections are in the document
    Effect::new(move |_| {
        let Some(viewport) = BrowserViewport::new() else {
            return;
        };
        let nav_config = config.get_value();
        let callback_config = nav_config.clone();
        let started = SectionTracking::start(viewport, &nav_config, move |entries| {
            state.maybe_update(|nav| nav.apply_intersections(&callback_config, entries));
        });
        tracking.set_value(Some(started));
    });

    on_cleanup(move || {
        tracking.try_update_value(|tracking| *tracking = None);
    });
}

/// Smooth-scroll handler for anchor links; closes the menu on the way
pub fn use_link_click(config: StoredValue<NavConfig>, state: RwSignal<NavState>) -> LinkClick {
    Callback::new(move |(event, href): (MouseEvent, String)| {
        let Some(viewport) = BrowserViewport::new() else {
            return;
        };

        let mut outcome = None;
        state.maybe_update(|nav| {
            let was_open = nav.menu_open();
            outcome = Some(config.with_value(|config| handle_link_click(&viewport, config, nav, &href)));
            was_open != nav.menu_open()
        });

        if outcome.as_ref().is_some_and(ClickOutcome::prevents_default) {
            event.prevent_default();
        }
    })
}
