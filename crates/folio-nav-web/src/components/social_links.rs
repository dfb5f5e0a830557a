//! External profile links

use folio_nav_core::NavConfig;
use leptos::prelude::*;

/// Social links open in a new tab; no in-page click handling
#[component]
pub fn SocialLinks(config: StoredValue<NavConfig>) -> impl IntoView {
    let links = config.with_value(|c| c.social_links.clone());

    view! {
        <div class="flex gap-2">
            {links
                .into_iter()
                .map(|social| {
                    view! {
                        <a
                            href=social.href
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex-1 flex items-center justify-center px-4 py-2 rounded-lg bg-base-200 hover:bg-base-300 hover:text-primary transition-colors focus:outline-none focus:ring-2 focus:ring-primary"
                            aria-label=social.name
                        >
                            <span class="font-bold">{social.icon}</span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
