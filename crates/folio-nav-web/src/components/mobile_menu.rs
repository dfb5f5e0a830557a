//! Mobile overlay menu

use folio_nav_core::{NavConfig, NavState};
use leptos::prelude::*;

use super::{NavLinkList, NavListVariant, SocialLinks, MOBILE_MENU_ID};
use crate::hooks::LinkClick;

/// Full-screen menu below the top bar, mounted only while open
#[component]
pub fn MobileMenu(
    config: StoredValue<NavConfig>,
    state: RwSignal<NavState>,
    on_link_click: LinkClick,
) -> impl IntoView {
    let heading = config.with_value(|c| c.social_heading.clone());

    view! {
        <div
            id=MOBILE_MENU_ID
            class="lg:hidden fixed inset-0 top-16 bg-base-100 z-50"
            role="dialog"
            aria-modal="true"
            aria-label="Mobile navigation menu"
        >
            <nav class="flex flex-col h-full px-4 py-6">
                <NavLinkList config state on_link_click variant=NavListVariant::Mobile />

                <div class="mt-auto pt-6 border-t border-base-300">
                    <p class="text-sm text-base-content/60 mb-3 px-4">{heading}</p>
                    <SocialLinks config />
                </div>
            </nav>
        </div>
    }
}
