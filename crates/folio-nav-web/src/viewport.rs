//! Browser implementation of the viewport capability over `web-sys`

use folio_nav_core::{
    IntersectionEntry, KeyCallback, PageScroll, SectionCallback, Viewport, VisibilityBand,
};
use leptos::logging::warn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, ScrollToOptions, Window,
};

type ObserverClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

/// Window keydown listener, removed on drop
struct KeyListener {
    window: Window,
    callback: KeyClosure,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to remove keydown listener: {:?}", e);
        }
    }
}

/// Live observer plus the JS closure it calls into
struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

impl Drop for ActiveObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Viewport backed by the browser window and document
#[derive(Clone)]
pub struct BrowserViewport {
    window: Window,
    document: Document,
    observer: Rc<RefCell<Option<ActiveObserver>>>,
    key_listener: Rc<RefCell<Option<KeyListener>>>,
}

impl BrowserViewport {
    /// None outside a browser (no window or document)
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            observer: Rc::new(RefCell::new(None)),
            key_listener: Rc::new(RefCell::new(None)),
        })
    }

    fn query(&self, selector: &str) -> Option<web_sys::Element> {
        // Invalid selectors behave like missing elements
        self.document.query_selector(selector).ok().flatten()
    }
}

impl Viewport for BrowserViewport {
    fn offset_top(&self, selector: &str) -> Option<f64> {
        let element = self.query(selector)?.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(element.offset_top()))
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn set_page_scroll(&self, scroll: PageScroll) {
        let Some(body) = self.document.body() else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", scroll.overflow()) {
            warn!("Failed to set body overflow: {:?}", e);
        }
    }

    fn observe_sections(
        &self,
        band: &VisibilityBand,
        section_ids: &[String],
        callback: SectionCallback,
    ) -> Vec<String> {
        self.disconnect_sections();

        let closure: ObserverClosure = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let entries: Vec<IntersectionEntry> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| IntersectionEntry::new(entry.target().id(), entry.is_intersecting()))
                    .collect();
                callback(&entries);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&band.root_margin());
        options.set_threshold(&JsValue::from_f64(0.0));

        let observer = match IntersectionObserver::new_with_options(
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("Failed to create IntersectionObserver: {:?}", e);
                return Vec::new();
            }
        };

        let mut observed = Vec::new();
        for id in section_ids {
            if let Some(element) = self.query(&format!("#{id}")) {
                observer.observe(&element);
                observed.push(id.clone());
            }
        }

        *self.observer.borrow_mut() = Some(ActiveObserver {
            observer,
            _callback: closure,
        });
        observed
    }

    fn disconnect_sections(&self) {
        // Dropping the observer disconnects it
        self.observer.borrow_mut().take();
    }

    fn listen_keys(&self, callback: KeyCallback) {
        self.stop_listening_keys();

        let closure: KeyClosure = Closure::new(move |event: KeyboardEvent| callback(&event.key()));
        if let Err(e) = self
            .window
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        {
            warn!("Failed to add keydown listener: {:?}", e);
            return;
        }

        *self.key_listener.borrow_mut() = Some(KeyListener {
            window: self.window.clone(),
            callback: closure,
        });
    }

    fn stop_listening_keys(&self) {
        self.key_listener.borrow_mut().take();
    }
}
