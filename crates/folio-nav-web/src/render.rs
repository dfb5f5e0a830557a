//! Server-side rendering of the navigation to static HTML

use folio_nav_core::{NavConfig, NavState};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::components::NavHeader;

/// Render the navigation header for `state` as an HTML string.
///
/// Browser-only behavior (observers, listeners) is not attached.
pub fn render_nav_header(config: NavConfig, state: NavState) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let state = RwSignal::new(state);
        view! { <NavHeader config state /> }.to_html()
    })
}

/// Render the full portfolio page shell
pub fn render_app() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <crate::App /> }.to_html())
}
