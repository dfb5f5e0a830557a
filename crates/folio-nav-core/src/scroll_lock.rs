//! Page scroll lock held while the mobile menu is open.

use crate::viewport::{PageScroll, Viewport};
use tracing::debug;

/// Suspends page scrolling until dropped
pub struct ScrollLock<V: Viewport> {
    viewport: V,
}

impl<V: Viewport> ScrollLock<V> {
    pub fn acquire(viewport: V) -> Self {
        viewport.set_page_scroll(PageScroll::Locked);
        debug!("Page scroll locked");
        Self { viewport }
    }

    /// Restore page scrolling now
    pub fn release(self) {
        drop(self);
    }
}

impl<V: Viewport> Drop for ScrollLock<V> {
    fn drop(&mut self) {
        self.viewport.set_page_scroll(PageScroll::Enabled);
        debug!("Page scroll restored");
    }
}
