//! folio-nav-core - Core library for folio-nav
//!
//! Navigation state machine, configuration and the viewport capability the
//! portfolio header is written against.

pub mod click;
pub mod config;
pub mod error;
pub mod menu;
pub mod scroll_lock;
pub mod state;
pub mod tracking;
pub mod viewport;

pub use click::{handle_link_click, scroll_to_anchor, ClickOutcome};
pub use config::{is_anchor, NavConfig, NavLink, SocialLink, VisibilityBand};
pub use error::NavError;
pub use menu::{MenuLifecycle, MenuSession};
pub use scroll_lock::ScrollLock;
pub use state::NavState;
pub use tracking::SectionTracking;
pub use viewport::{
    IntersectionEntry, KeyCallback, MemoryViewport, PageScroll, SectionCallback, Viewport,
};
