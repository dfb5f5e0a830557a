//! Scroll-based active section tracking.

use crate::config::NavConfig;
use crate::viewport::{IntersectionEntry, Viewport};
use tracing::{debug, warn};

/// Observation of the nav link sections, disconnected when dropped
pub struct SectionTracking<V: Viewport> {
    viewport: V,
    observed: Vec<String>,
}

impl<V: Viewport> SectionTracking<V> {
    /// Observe every nav link section that exists in the document.
    ///
    /// `on_entries` receives each observer batch unchanged.
    pub fn start(
        viewport: V,
        config: &NavConfig,
        on_entries: impl Fn(&[IntersectionEntry]) + 'static,
    ) -> Self {
        let wanted = config.section_ids();
        let observed = viewport.observe_sections(&config.band, &wanted, Box::new(on_entries));

        for id in wanted.iter().filter(|id| !observed.contains(id)) {
            warn!(section = %id, "Section not found, skipping observation");
        }
        debug!(
            observed = observed.len(),
            root_margin = %config.band.root_margin(),
            "Section tracking started"
        );

        Self { viewport, observed }
    }

    /// Section ids being observed, in registration order
    pub fn observed(&self) -> &[String] {
        &self.observed
    }
}

impl<V: Viewport> Drop for SectionTracking<V> {
    fn drop(&mut self) {
        self.viewport.disconnect_sections();
        debug!("Section tracking stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::MemoryViewport;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_start_observes_existing_sections_only() {
        let viewport = MemoryViewport::new(800.0)
            .with_section("about", 0.0, 800.0)
            .with_section("contact", 800.0, 800.0);
        let tracking = SectionTracking::start(viewport.clone(), &NavConfig::default(), |_| {});
        assert_eq!(tracking.observed(), ["about", "contact"]);
    }

    #[test]
    fn test_drop_disconnects() {
        let viewport = MemoryViewport::new(800.0).with_section("about", 0.0, 800.0);
        let tracking = SectionTracking::start(viewport.clone(), &NavConfig::default(), |_| {});
        assert!(viewport.is_observing());
        drop(tracking);
        assert!(!viewport.is_observing());
        assert_eq!(viewport.disconnects(), 1);
    }

    #[test]
    fn test_entries_forwarded_in_order() {
        let viewport = MemoryViewport::new(800.0).with_section("about", 0.0, 800.0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _tracking = SectionTracking::start(viewport.clone(), &NavConfig::default(), move |entries| {
            sink.borrow_mut().extend(entries.iter().map(|e| e.target_id.clone()));
        });

        viewport.deliver(&[
            IntersectionEntry::new("about", true),
            IntersectionEntry::new("skills", true),
        ]);
        assert_eq!(*seen.borrow(), vec!["about", "skills"]);
    }
}
