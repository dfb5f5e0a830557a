//! Section link list shared by the mobile menu and the desktop sidebar

use folio_nav_core::{NavConfig, NavState};
use leptos::prelude::*;

use crate::hooks::LinkClick;

const MOBILE_LINK: &str = "flex items-center gap-3 px-4 py-3 rounded-lg text-lg font-medium transition-colors hover:bg-base-200 hover:text-primary focus:outline-none focus:ring-2 focus:ring-primary";
const DESKTOP_LINK: &str = "flex items-center gap-3 px-4 py-3 rounded-lg font-medium transition-all hover:bg-base-200 hover:text-primary hover:translate-x-1 focus:outline-none focus:ring-2 focus:ring-primary";

/// Where the list is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavListVariant {
    Mobile,
    Desktop,
}

impl NavListVariant {
    pub fn list_class(&self) -> &'static str {
        match self {
            NavListVariant::Mobile => "flex flex-col space-y-2 mb-8",
            NavListVariant::Desktop => "menu bg-base-200 min-h-full w-80 p-4",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            NavListVariant::Mobile => "text-2xl",
            NavListVariant::Desktop => "text-xl",
        }
    }

    pub fn link_class(&self, active: bool) -> String {
        let (base, state) = match (self, active) {
            (NavListVariant::Mobile, true) => (MOBILE_LINK, "text-primary bg-base-200"),
            (NavListVariant::Mobile, false) => (MOBILE_LINK, "text-base-content"),
            (NavListVariant::Desktop, true) => (DESKTOP_LINK, "text-primary bg-base-200 translate-x-1"),
            (NavListVariant::Desktop, false) => (DESKTOP_LINK, "text-base-content"),
        };
        format!("{base} {state}")
    }
}

/// Nav links with the active one highlighted and marked `aria-current`
#[component]
pub fn NavLinkList(
    config: StoredValue<NavConfig>,
    state: RwSignal<NavState>,
    on_link_click: LinkClick,
    variant: NavListVariant,
) -> impl IntoView {
    let links = config.with_value(|c| c.nav_links.clone());

    view! {
        <ul class={variant.list_class()}>
            {links
                .into_iter()
                .map(move |link| {
                    let href = link.href.clone();
                    let current = {
                        let link = link.clone();
                        Memo::new(move |_| state.with(|nav| nav.aria_current(&link)))
                    };

                    view! {
                        <li>
                            <a
                                href=link.href
                                class=move || variant.link_class(current.get().is_some())
                                aria-current=move || current.get()
                                on:click=move |e| on_link_click.run((e, href.clone()))
                            >
                                <span class={variant.icon_class()}>{link.icon}</span>
                                {link.name}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
