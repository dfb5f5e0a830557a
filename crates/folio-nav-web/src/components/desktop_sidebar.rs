//! Desktop sidebar drawer

use folio_nav_core::{NavConfig, NavState};
use leptos::prelude::*;

use super::{NavLinkList, NavListVariant, DRAWER_TOGGLE_ID};
use crate::hooks::LinkClick;

/// Sidebar, always open on large screens
#[component]
pub fn DesktopSidebar(
    config: StoredValue<NavConfig>,
    state: RwSignal<NavState>,
    on_link_click: LinkClick,
) -> impl IntoView {
    let (brand, brand_href) = config.with_value(|c| (c.brand.clone(), c.brand_href.clone()));
    let click_href = brand_href.clone();

    view! {
        <aside class="drawer lg:drawer-open" role="navigation" aria-label="Main navigation">
            <input id=DRAWER_TOGGLE_ID type="checkbox" class="drawer-toggle" />

            <div class="drawer-content flex flex-col items-center justify-center">
                <label for=DRAWER_TOGGLE_ID class="btn drawer-button lg:hidden">
                    "Open drawer"
                </label>
            </div>

            <a
                href=brand_href
                class="mb-8 focus:outline-none focus:ring-2 focus:ring-primary focus:ring-offset-2 rounded-lg"
                on:click=move |e| on_link_click.run((e, click_href.clone()))
            >
                <h1 class="text-2xl font-bold text-primary">{brand}</h1>
            </a>

            <nav class="drawer-side">
                <label for=DRAWER_TOGGLE_ID aria-label="close sidebar" class="drawer-overlay"></label>
                <NavLinkList config state on_link_click variant=NavListVariant::Desktop />
            </nav>
        </aside>
    }
}
