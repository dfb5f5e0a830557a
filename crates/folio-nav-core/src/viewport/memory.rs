//! In-memory viewport with a fixed document layout.
//!
//! Records scroll calls and page scroll state, and delivers intersection
//! entries either explicitly ([`MemoryViewport::deliver`]) or by simulating a
//! window scroll ([`MemoryViewport::scroll_window_to`]). Key presses reach
//! the registered listener through [`MemoryViewport::press_key`].

use super::{IntersectionEntry, KeyCallback, PageScroll, SectionCallback, Viewport};
use crate::config::VisibilityBand;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A section element laid out in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySection {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

struct Observation {
    band: VisibilityBand,
    ids: Vec<String>,
    callback: Rc<SectionCallback>,
    last_state: HashMap<String, bool>,
}

struct Inner {
    sections: Vec<MemorySection>,
    viewport_height: f64,
    scroll_y: f64,
    scroll_calls: Vec<f64>,
    page_scroll: PageScroll,
    page_scroll_changes: usize,
    observation: Option<Observation>,
    disconnects: usize,
    key_listener: Option<Rc<KeyCallback>>,
}

/// Cloneable handle; clones share the same document
#[derive(Clone)]
pub struct MemoryViewport {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryViewport {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                sections: Vec::new(),
                viewport_height,
                scroll_y: 0.0,
                scroll_calls: Vec::new(),
                page_scroll: PageScroll::Enabled,
                page_scroll_changes: 0,
                observation: None,
                disconnects: 0,
                key_listener: None,
            })),
        }
    }

    /// Add a section element to the document
    pub fn with_section(self, id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        self.inner.borrow_mut().sections.push(MemorySection {
            id: id.into(),
            offset_top,
            height,
        });
        self
    }

    /// Lay out sections back to back, each `height` tall, starting at 0
    pub fn with_stacked_sections(mut self, ids: &[&str], height: f64) -> Self {
        for (index, id) in ids.iter().enumerate() {
            self = self.with_section(*id, index as f64 * height, height);
        }
        self
    }

    /// Targets of every `scroll_to` call, in order
    pub fn scroll_calls(&self) -> Vec<f64> {
        self.inner.borrow().scroll_calls.clone()
    }

    pub fn page_scroll(&self) -> PageScroll {
        self.inner.borrow().page_scroll
    }

    /// Number of times page scroll state was written
    pub fn page_scroll_changes(&self) -> usize {
        self.inner.borrow().page_scroll_changes
    }

    /// Ids currently observed, empty when disconnected
    pub fn observed(&self) -> Vec<String> {
        self.inner
            .borrow()
            .observation
            .as_ref()
            .map(|observation| observation.ids.clone())
            .unwrap_or_default()
    }

    pub fn is_observing(&self) -> bool {
        self.inner.borrow().observation.is_some()
    }

    pub fn disconnects(&self) -> usize {
        self.inner.borrow().disconnects
    }

    /// Deliver a batch of entries to the registered callback.
    ///
    /// Returns false when nothing is observing.
    pub fn deliver(&self, entries: &[IntersectionEntry]) -> bool {
        // Release the borrow before calling out
        let callback = self
            .inner
            .borrow()
            .observation
            .as_ref()
            .map(|observation| Rc::clone(&observation.callback));

        match callback {
            Some(callback) => {
                callback(entries);
                true
            }
            None => false,
        }
    }

    /// Move the window and deliver entries for sections whose band
    /// intersection changed, in registration order.
    pub fn scroll_window_to(&self, scroll_y: f64) {
        let entries = {
            let mut inner = self.inner.borrow_mut();
            inner.scroll_y = scroll_y;
            let viewport_height = inner.viewport_height;
            let sections = inner.sections.clone();
            let Some(observation) = inner.observation.as_mut() else {
                return;
            };

            let mut entries = Vec::new();
            for id in &observation.ids {
                let Some(section) = sections.iter().find(|section| &section.id == id) else {
                    continue;
                };
                let top = section.offset_top - scroll_y;
                let bottom = top + section.height;
                let intersecting = observation.band.intersects(top, bottom, viewport_height);
                let previous = observation.last_state.insert(id.clone(), intersecting);
                if previous != Some(intersecting) {
                    entries.push(IntersectionEntry::new(id.clone(), intersecting));
                }
            }
            entries
        };

        if !entries.is_empty() {
            self.deliver(&entries);
        }
    }

    pub fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    pub fn is_listening_keys(&self) -> bool {
        self.inner.borrow().key_listener.is_some()
    }

    /// Dispatch a keydown. Returns false when no listener is registered.
    pub fn press_key(&self, key: &str) -> bool {
        let listener = self.inner.borrow().key_listener.clone();
        match listener {
            Some(listener) => {
                listener(key);
                true
            }
            None => false,
        }
    }
}

impl Viewport for MemoryViewport {
    fn offset_top(&self, selector: &str) -> Option<f64> {
        let id = selector.strip_prefix('#')?;
        self.inner
            .borrow()
            .sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.offset_top)
    }

    fn scroll_to(&self, top: f64) {
        let mut inner = self.inner.borrow_mut();
        inner.scroll_calls.push(top);
        inner.scroll_y = top.max(0.0);
    }

    fn set_page_scroll(&self, scroll: PageScroll) {
        let mut inner = self.inner.borrow_mut();
        inner.page_scroll = scroll;
        inner.page_scroll_changes += 1;
    }

    fn observe_sections(
        &self,
        band: &VisibilityBand,
        section_ids: &[String],
        callback: SectionCallback,
    ) -> Vec<String> {
        let mut inner = self.inner.borrow_mut();
        let ids: Vec<String> = section_ids
            .iter()
            .filter(|id| inner.sections.iter().any(|section| &section.id == *id))
            .cloned()
            .collect();

        inner.observation = Some(Observation {
            band: *band,
            ids: ids.clone(),
            callback: Rc::new(callback),
            last_state: HashMap::new(),
        });
        ids
    }

    fn disconnect_sections(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.observation.take().is_some() {
            inner.disconnects += 1;
        }
    }

    fn listen_keys(&self, callback: KeyCallback) {
        self.inner.borrow_mut().key_listener = Some(Rc::new(callback));
    }

    fn stop_listening_keys(&self) {
        self.inner.borrow_mut().key_listener = None;
    }
}
