//! Navigation UI state: menu open flag and active section.
//!
//! The two axes are independent. The menu axis is driven by user input,
//! the active section only by intersection entries.

use crate::config::{NavConfig, NavLink};
use crate::viewport::IntersectionEntry;
use tracing::debug;

/// Key that dismisses the open mobile menu
pub const ESCAPE_KEY: &str = "Escape";

/// `aria-current` value for the link of the section being read
pub const ARIA_CURRENT_PAGE: &str = "page";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    active_section: Option<String>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the active section, e.g. for server rendering.
    ///
    /// Ids that are not a nav link section of `config` are ignored.
    pub fn with_active_section(mut self, config: &NavConfig, section_id: &str) -> Self {
        if config.is_tracked_section(section_id) {
            self.active_section = Some(section_id.to_string());
        } else {
            debug!(section = section_id, "Ignoring untracked section");
        }
        self
    }

    pub fn with_menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active_section.as_deref()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(menu_open = self.menu_open, "Menu toggled");
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            self.menu_open = false;
            debug!("Menu closed");
        }
    }

    /// Handle a key press while the keyboard listener is attached.
    ///
    /// Returns true when the key closed the menu.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == ESCAPE_KEY && self.menu_open {
            self.close_menu();
            return true;
        }
        false
    }

    /// Apply one observer callback batch.
    ///
    /// Entries are processed in order; the last intersecting entry for a
    /// tracked section wins. Returns true when the active section changed.
    pub fn apply_intersections(&mut self, config: &NavConfig, entries: &[IntersectionEntry]) -> bool {
        match resolve_active_section(config, entries) {
            Some(section_id) if self.active_section.as_deref() != Some(section_id) => {
                debug!(section = section_id, "Active section changed");
                self.active_section = Some(section_id.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        match (self.active_section.as_deref(), link.section_id()) {
            (Some(active), Some(section_id)) => active == section_id,
            _ => false,
        }
    }

    /// `aria-current` attribute for `link`, absent unless it is active
    pub fn aria_current(&self, link: &NavLink) -> Option<&'static str> {
        self.is_active(link).then_some(ARIA_CURRENT_PAGE)
    }
}

/// Last intersecting entry that names a tracked section
pub fn resolve_active_section<'a>(
    config: &NavConfig,
    entries: &'a [IntersectionEntry],
) -> Option<&'a str> {
    entries
        .iter()
        .filter(|entry| entry.is_intersecting && config.is_tracked_section(&entry.target_id))
        .map(|entry| entry.target_id.as_str())
        .last()
}
