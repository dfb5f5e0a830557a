//! Viewport capability: the slice of the browser the navigation header needs.
//!
//! The web crate implements this over `web-sys`; [`MemoryViewport`] is an
//! in-memory implementation used by tests and native rendering.

mod memory;

pub use memory::{MemorySection, MemoryViewport};

use crate::config::VisibilityBand;
use std::rc::Rc;

/// Page-level scrolling state (body overflow)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageScroll {
    #[default]
    Enabled,
    Locked,
}

impl PageScroll {
    /// CSS `overflow` value applied to the document body
    pub fn overflow(&self) -> &'static str {
        match self {
            PageScroll::Enabled => "unset",
            PageScroll::Locked => "hidden",
        }
    }
}

/// Visibility change for one observed section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target_id: String,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target_id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            target_id: target_id.into(),
            is_intersecting,
        }
    }
}

/// Receives every batch of intersection entries, in delivery order
pub type SectionCallback = Box<dyn Fn(&[IntersectionEntry])>;

/// Receives the `key` of every keydown event
pub type KeyCallback = Box<dyn Fn(&str)>;

/// Element lookup, scroll control and observation registration
pub trait Viewport {
    /// Document offset of the element matching `selector`, if it exists
    fn offset_top(&self, selector: &str) -> Option<f64>;

    /// Smoothly scroll the window to document offset `top`
    fn scroll_to(&self, top: f64);

    fn set_page_scroll(&self, scroll: PageScroll);

    /// Start observing the given sections against `band`.
    ///
    /// Returns the ids actually observed; ids without a matching element are
    /// skipped. Replaces any previous registration.
    fn observe_sections(
        &self,
        band: &VisibilityBand,
        section_ids: &[String],
        callback: SectionCallback,
    ) -> Vec<String>;

    /// Stop observing; no callbacks are delivered afterwards
    fn disconnect_sections(&self);

    /// Register a page-wide keydown listener, replacing any previous one
    fn listen_keys(&self, callback: KeyCallback);

    fn stop_listening_keys(&self);
}

impl<V: Viewport + ?Sized> Viewport for Rc<V> {
    fn offset_top(&self, selector: &str) -> Option<f64> {
        (**self).offset_top(selector)
    }

    fn scroll_to(&self, top: f64) {
        (**self).scroll_to(top)
    }

    fn set_page_scroll(&self, scroll: PageScroll) {
        (**self).set_page_scroll(scroll)
    }

    fn observe_sections(
        &self,
        band: &VisibilityBand,
        section_ids: &[String],
        callback: SectionCallback,
    ) -> Vec<String> {
        (**self).observe_sections(band, section_ids, callback)
    }

    fn disconnect_sections(&self) {
        (**self).disconnect_sections()
    }

    fn listen_keys(&self, callback: KeyCallback) {
        (**self).listen_keys(callback)
    }

    fn stop_listening_keys(&self) {
        (**self).stop_listening_keys()
    }
}
