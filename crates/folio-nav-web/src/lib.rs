//! folio-nav-web - Portfolio navigation header and sidebar using Leptos

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod hooks;
#[cfg(feature = "ssr")]
pub mod render;
pub mod viewport;

pub use app::App;
pub use components::NavHeader;
pub use viewport::BrowserViewport;
