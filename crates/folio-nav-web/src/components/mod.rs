//! Leptos UI components

mod desktop_sidebar;
mod mobile_bar;
mod mobile_menu;
mod nav_header;
mod nav_link_list;
mod social_links;

pub use desktop_sidebar::DesktopSidebar;
pub use mobile_bar::MobileBar;
pub use mobile_menu::MobileMenu;
pub use nav_header::NavHeader;
pub use nav_link_list::{NavLinkList, NavListVariant};
pub use social_links::SocialLinks;

/// Id of the mobile overlay, referenced by the menu button's `aria-controls`
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Id of the checkbox driving the desktop drawer
pub const DRAWER_TOGGLE_ID: &str = "nav-drawer-toggle";
