//! Navigation header: mobile top bar, mobile overlay menu, desktop sidebar

use folio_nav_core::{NavConfig, NavState};
use leptos::prelude::*;

use super::{DesktopSidebar, MobileBar, MobileMenu};
use crate::hooks::{use_link_click, use_menu_session, use_section_tracking};

/// Portfolio navigation.
///
/// Owns the menu-open flag and the active section unless the parent passes
/// its own `state`. Uses [`NavConfig::default`] when no `config` is given.
#[component]
pub fn NavHeader(
    #[prop(optional)] config: Option<NavConfig>,
    #[prop(optional)] state: Option<RwSignal<NavState>>,
) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let state = state.unwrap_or_else(|| RwSignal::new(NavState::new()));

    use_menu_session(state);
    use_section_tracking(config, state);
    let on_link_click = use_link_click(config, state);

    view! {
        <>
            <MobileBar config state on_link_click />

            <Show when=move || state.with(NavState::menu_open)>
                <MobileMenu config state on_link_click />
            </Show>

            <DesktopSidebar config state on_link_click />
        </>
    }
}
