//! Link click resolution: in-page anchors scroll, external links navigate.

use crate::config::{is_anchor, NavConfig};
use crate::state::NavState;
use crate::viewport::Viewport;
use tracing::{debug, warn};

/// What a link click did
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Not an anchor; the browser navigates as usual
    External,
    /// Smooth scroll started towards `top`
    Scrolled { target: String, top: f64 },
    /// Anchor without a matching element; nothing scrolled
    MissingTarget { target: String },
}

impl ClickOutcome {
    /// Whether the browser's default jump must be suppressed
    pub fn prevents_default(&self) -> bool {
        !matches!(self, ClickOutcome::External)
    }

    pub fn closes_menu(&self) -> bool {
        !matches!(self, ClickOutcome::External)
    }
}

/// Scroll to the element `href` names, leaving `offset` pixels above it
pub fn scroll_to_anchor<V: Viewport + ?Sized>(viewport: &V, href: &str, offset: f64) -> ClickOutcome {
    if !is_anchor(href) {
        return ClickOutcome::External;
    }

    match viewport.offset_top(href) {
        Some(offset_top) => {
            let top = offset_top - offset;
            viewport.scroll_to(top);
            debug!(anchor = href, top, "Scrolling to section");
            ClickOutcome::Scrolled {
                target: href.to_string(),
                top,
            }
        }
        None => {
            warn!(anchor = href, "Anchor target not found");
            ClickOutcome::MissingTarget {
                target: href.to_string(),
            }
        }
    }
}

/// Full click handling: resolve the link and close the menu for anchors
pub fn handle_link_click<V: Viewport + ?Sized>(
    viewport: &V,
    config: &NavConfig,
    state: &mut NavState,
    href: &str,
) -> ClickOutcome {
    let outcome = scroll_to_anchor(viewport, href, config.scroll_offset);
    if outcome.closes_menu() {
        state.close_menu();
    }
    outcome
}
