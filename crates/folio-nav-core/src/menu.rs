//! Resources tied to the open mobile menu: page scroll lock and the
//! Escape key listener.

use crate::scroll_lock::ScrollLock;
use crate::viewport::Viewport;
use tracing::debug;

/// Held while the menu is open; dropping it detaches the key listener and
/// restores page scrolling
pub struct MenuSession<V: Viewport + Clone> {
    viewport: V,
    _scroll_lock: ScrollLock<V>,
}

impl<V: Viewport + Clone> MenuSession<V> {
    pub fn open(viewport: V, on_key: impl Fn(&str) + 'static) -> Self {
        let scroll_lock = ScrollLock::acquire(viewport.clone());
        viewport.listen_keys(Box::new(on_key));
        debug!("Menu session opened");
        Self {
            viewport,
            _scroll_lock: scroll_lock,
        }
    }
}

impl<V: Viewport + Clone> Drop for MenuSession<V> {
    fn drop(&mut self) {
        // Scroll lock is released right after, when the field drops
        self.viewport.stop_listening_keys();
        debug!("Menu session closed");
    }
}

/// Keeps a [`MenuSession`] in step with the menu-open flag
pub struct MenuLifecycle<V: Viewport + Clone> {
    viewport: V,
    session: Option<MenuSession<V>>,
}

impl<V: Viewport + Clone> MenuLifecycle<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            session: None,
        }
    }

    /// Open or close the session to match `menu_open`.
    ///
    /// `on_key` is only used when a session is opened.
    pub fn sync(&mut self, menu_open: bool, on_key: impl Fn(&str) + 'static) {
        match (menu_open, self.session.is_some()) {
            (true, false) => {
                self.session = Some(MenuSession::open(self.viewport.clone(), on_key));
            }
            (false, true) => self.session = None,
            _ => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }
}
