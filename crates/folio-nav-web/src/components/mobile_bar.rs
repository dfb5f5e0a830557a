//! Mobile top bar with brand mark and menu toggle

use folio_nav_core::{NavConfig, NavState};
use leptos::prelude::*;

use super::MOBILE_MENU_ID;
use crate::hooks::LinkClick;

/// Top bar, hidden on large screens
#[component]
pub fn MobileBar(
    config: StoredValue<NavConfig>,
    state: RwSignal<NavState>,
    on_link_click: LinkClick,
) -> impl IntoView {
    let menu_open = Memo::new(move |_| state.with(NavState::menu_open));
    let (brand, brand_href) = config.with_value(|c| (c.brand.clone(), c.brand_href.clone()));
    let click_href = brand_href.clone();
    let menu_label = move || if menu_open.get() { "Close menu" } else { "Open menu" };

    view! {
        <header class="lg:hidden navbar bg-base-100/95 backdrop-blur-sm shadow-md" role="banner">
            <nav class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=brand_href
                        class="btn btn-ghost text-xl"
                        on:click=move |e| on_link_click.run((e, click_href.clone()))
                    >
                        {brand}
                    </a>

                    <button
                        class="btn btn-circle swap swap-rotate"
                        on:click=move |_| state.update(NavState::toggle_menu)
                        aria-label=menu_label
                        aria-expanded=move || menu_open.get().to_string()
                        aria-controls=MOBILE_MENU_ID
                    >
                        // Swap state follows the button, the checkbox is display only
                        <input
                            type="checkbox"
                            prop:checked=move || menu_open.get()
                            aria-hidden="true"
                            tabindex="-1"
                        />

                        <svg
                            class="swap-off fill-current"
                            xmlns="http://www.w3.org/2000/svg"
                            width="32"
                            height="32"
                            viewBox="0 0 512 512"
                        >
                            <path d="M64,384H448V341.33H64Zm0-106.67H448V234.67H64ZM64,128v42.67H448V128Z" />
                        </svg>

                        <svg
                            class="swap-on fill-current"
                            xmlns="http://www.w3.org/2000/svg"
                            width="32"
                            height="32"
                            viewBox="0 0 512 512"
                        >
                            <polygon points="400 145.49 366.51 112 256 222.51 145.49 112 112 145.49 222.51 256 112 366.51 145.49 400 256 289.49 366.51 400 400 366.51 289.49 256 400 145.49" />
                        </svg>
                    </button>
                </div>
            </nav>
        </header>
    }
}
