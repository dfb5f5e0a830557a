//! Navigation configuration: link lists, brand mark, scroll offset and
//! visibility band.
//!
//! The defaults are the portfolio's hardcoded lists. A different set can be
//! embedded as JSON and is validated before use.

use crate::error::{NavError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Pixels left above a section after an anchor scroll
pub const DEFAULT_SCROLL_OFFSET: f64 = 20.0;

/// Returns true for in-page anchor references (`#about`)
pub fn is_anchor(href: &str) -> bool {
    href.starts_with('#')
}

/// In-page navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub name: String,
    /// Anchor reference, e.g. `#about`
    pub href: String,
    /// Display glyph
    pub icon: String,
}

impl NavLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon: icon.into(),
        }
    }

    /// Id of the section this link points to (href without `#`)
    pub fn section_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

/// External profile link, opened in a new browsing context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub icon: String,
}

impl SocialLink {
    pub fn new(name: impl Into<String>, href: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon: icon.into(),
        }
    }
}

/// Vertical viewport region in which a section counts as "being read".
///
/// Expressed as insets from the viewport edges, in percent of its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityBand {
    pub top_inset_pct: u8,
    pub bottom_inset_pct: u8,
}

impl Default for VisibilityBand {
    fn default() -> Self {
        Self {
            top_inset_pct: 20,
            bottom_inset_pct: 70,
        }
    }
}

impl VisibilityBand {
    /// Observer root margin, e.g. `-20% 0px -70% 0px`
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            self.top_inset_pct, self.bottom_inset_pct
        )
    }

    /// Band bounds in pixels for the given viewport height
    pub fn bounds(&self, viewport_height: f64) -> (f64, f64) {
        // Integer percentages keep the edges exact (1.0 - 0.7 is not 0.3)
        let top = viewport_height * f64::from(self.top_inset_pct) / 100.0;
        let bottom =
            viewport_height * f64::from(100u8.saturating_sub(self.bottom_inset_pct)) / 100.0;
        (top, bottom)
    }

    /// Whether a rectangle (viewport coordinates) touches the band.
    ///
    /// Edge-adjacent rectangles count, matching a zero threshold observer.
    pub fn intersects(&self, rect_top: f64, rect_bottom: f64, viewport_height: f64) -> bool {
        let (band_top, band_bottom) = self.bounds(viewport_height);
        rect_top <= band_bottom && rect_bottom >= band_top
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_inset_pct > 100 || self.bottom_inset_pct > 100 {
            return Err(NavError::InvalidBand {
                message: format!(
                    "insets must be within 0..=100, got {} and {}",
                    self.top_inset_pct, self.bottom_inset_pct
                ),
            });
        }
        if u16::from(self.top_inset_pct) + u16::from(self.bottom_inset_pct) > 100 {
            return Err(NavError::InvalidBand {
                message: format!(
                    "insets {} + {} leave no visible band",
                    self.top_inset_pct, self.bottom_inset_pct
                ),
            });
        }
        Ok(())
    }
}

/// Everything the navigation header renders and reacts to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Brand glyph shown in the mobile bar and the sidebar
    pub brand: String,
    pub brand_href: String,
    pub nav_links: Vec<NavLink>,
    pub social_links: Vec<SocialLink>,
    pub social_heading: String,
    pub scroll_offset: f64,
    pub band: VisibilityBand,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: "K".to_string(),
            brand_href: "#hero".to_string(),
            nav_links: vec![
                NavLink::new("About", "#about", "👤"),
                NavLink::new("Skills", "#skills", "⚡"),
                NavLink::new("Projects", "#projects", "💼"),
                NavLink::new("Experience", "#experience", "🎯"),
                NavLink::new("Contact", "#contact", "📧"),
            ],
            social_links: vec![
                SocialLink::new("GitHub", "https://github.com/yourusername", "G"),
                SocialLink::new("LinkedIn", "https://linkedin.com/in/yourusername", "in"),
                SocialLink::new("Twitter", "https://twitter.com/yourusername", "X"),
            ],
            social_heading: "Connect with me".to_string(),
            scroll_offset: DEFAULT_SCROLL_OFFSET,
            band: VisibilityBand::default(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a JSON link set. Missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|source| NavError::ConfigParse {
            message: source.to_string(),
            source,
        })?;
        config.validate()?;
        debug!(
            nav_links = config.nav_links.len(),
            social_links = config.social_links.len(),
            "Loaded navigation config"
        );
        Ok(config)
    }

    /// Check the link lists and band for shapes the header cannot handle
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for link in &self.nav_links {
            if !is_anchor(&link.href) {
                return Err(NavError::NotAnAnchor {
                    name: link.name.clone(),
                    href: link.href.clone(),
                });
            }
            let section_id = link.section_id().ok_or_else(|| NavError::EmptySectionId {
                name: link.name.clone(),
            })?;
            if !seen.insert(section_id) {
                return Err(NavError::DuplicateSection {
                    section_id: section_id.to_string(),
                });
            }
        }

        for social in &self.social_links {
            if !(social.href.starts_with("https://") || social.href.starts_with("http://")) {
                return Err(NavError::NotExternal {
                    name: social.name.clone(),
                    href: social.href.clone(),
                });
            }
        }

        self.band.validate()
    }

    /// Section ids referenced by the nav links, in display order
    pub fn section_ids(&self) -> Vec<String> {
        self.nav_links
            .iter()
            .filter_map(|link| link.section_id().map(str::to_string))
            .collect()
    }

    /// Whether `id` belongs to one of the nav link sections
    pub fn is_tracked_section(&self, id: &str) -> bool {
        self.nav_links
            .iter()
            .any(|link| link.section_id() == Some(id))
    }
}
