//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application,
//! including the routing table. The deployment base path is baked in at
//! compile time so the router never reads ambient process state.

use crate::models::{MatchRule, Page, RouteEntry};

// =============================================================================
// Site Metadata
// =============================================================================

/// Site name displayed in the header and browser tab.
pub const SITE_NAME: &str = "Pilar Lokko";

/// Tagline displayed on the landing page.
pub const SITE_TAGLINE: &str = "Writer · Photographer · Occasional Cook";

/// Contact email surfaced on the contact page.
pub const CONTACT_EMAIL: &str = "hello@pilarlokko.com";

/// Social links rendered in the footer.
pub const GITHUB_URL: &str = "https://github.com/pilarlokko";
pub const INSTAGRAM_URL: &str = "https://instagram.com/pilarlokko";

/// Copyright line rendered in the footer.
pub const COPYRIGHT: &str = "© 2026 Pilar Lokko";

// =============================================================================
// Deployment Configuration
// =============================================================================

/// Base path prefix the site is deployed under.
///
/// Set `PUBLIC_URL` at build time when the site is served from a
/// subdirectory (e.g. `PUBLIC_URL=/pilarlokko`); defaults to the domain
/// root. Passed into the router at construction.
pub const BASE_PATH: &str = match option_env!("PUBLIC_URL") {
    Some(base) => base,
    None => "",
};

// =============================================================================
// Routing Table
// =============================================================================

/// Ordered routing table: first match wins.
///
/// The catch-all entry must stay last; it turns every unknown path into
/// the not-found page instead of an error.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::new(MatchRule::Exact("/"), Page::Landing),
    RouteEntry::new(MatchRule::Prefix("/newsletter"), Page::Newsletter),
    RouteEntry::new(MatchRule::Prefix("/contact"), Page::Contact),
    RouteEntry::new(MatchRule::CatchAll, Page::NotFound),
];

/// Navigation links rendered in the header, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Newsletter", "/newsletter"),
    ("Contact", "/contact"),
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Footer color theme.
///
/// Only `Main` exists today; the footer takes the theme as a prop so page
/// shells can opt into alternates later without touching the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FooterTheme {
    #[default]
    Main,
}

/// Footer theme used site-wide.
pub const FOOTER_THEME: FooterTheme = FooterTheme::Main;
