//! Hash-based routing: pages, match rules, and path resolution.
//!
//! The routing table is an ordered list of `(MatchRule, Page)` pairs.
//! Resolution walks the table and the first matching entry wins; a final
//! catch-all entry makes resolution total, so every path yields exactly
//! one page and the not-found page is a normal outcome rather than an
//! error condition.

use crate::config;

/// The renderable pages of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Landing page: `#/`
    Landing,
    /// Newsletter signup: `#/newsletter`
    Newsletter,
    /// Contact details: `#/contact`
    Contact,
    /// Catch-all for everything else.
    NotFound,
}

impl Page {
    /// Document title shown in the browser tab for this page.
    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Pilar Lokko",
            Self::Newsletter => "Newsletter · Pilar Lokko",
            Self::Contact => "Contact · Pilar Lokko",
            Self::NotFound => "Page not found · Pilar Lokko",
        }
    }

    /// Get the current page from the browser URL hash.
    pub fn current(base: &str) -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        resolve(&normalize(&hash, base))
    }
}

/// Match strategy for a single route entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    /// Full-path equality.
    Exact(&'static str),
    /// Segment-aware starts-with: `/contact` matches `/contact` and
    /// `/contact/anything`, but not `/contactinfo`.
    Prefix(&'static str),
    /// Matches unconditionally; must be the last entry in the table.
    CatchAll,
}

impl MatchRule {
    fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(pattern) => path == pattern,
            Self::Prefix(pattern) => path
                .strip_prefix(pattern)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
            Self::CatchAll => true,
        }
    }
}

/// One row of the routing table: a match rule bound to a page.
#[derive(Clone, Copy, Debug)]
pub struct RouteEntry {
    pub rule: MatchRule,
    pub page: Page,
}

impl RouteEntry {
    pub const fn new(rule: MatchRule, page: Page) -> Self {
        Self { rule, page }
    }
}

/// Normalize a raw URL hash into a routable path.
///
/// Strips the leading `#`, strips the deployment base prefix when present,
/// and guarantees a leading slash so the empty hash resolves as the root.
/// Base stripping is segment-aware: the base only counts when the path
/// ends there or continues with a `/`, so a sibling path like
/// `/sitenewsletter` under base `/site` is left intact.
pub fn normalize(hash: &str, base: &str) -> String {
    let path = hash.trim_start_matches('#');
    let path = match path.strip_prefix(base) {
        Some(rest) if !base.is_empty() && (rest.is_empty() || rest.starts_with('/')) => rest,
        _ => path,
    };

    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Resolve a normalized path against the routing table.
///
/// The table is ordered; the first matching entry wins and there is no
/// fallthrough. The trailing catch-all guarantees a result for every
/// input.
pub fn resolve(path: &str) -> Page {
    config::ROUTES
        .iter()
        .find(|entry| entry.rule.matches(path))
        .map(|entry| entry.page)
        .unwrap_or(Page::NotFound)
}

/// Build a hash href for a navigation link, e.g. `#/newsletter`.
pub fn hash_href(base: &str, path: &str) -> String {
    format!("#{base}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_hash_forms() {
        assert_eq!(normalize("", ""), "/");
        assert_eq!(normalize("#", ""), "/");
        assert_eq!(normalize("#/", ""), "/");
        assert_eq!(normalize("#/newsletter", ""), "/newsletter");
        assert_eq!(normalize("newsletter", ""), "/newsletter");
    }

    #[test]
    fn test_normalize_strips_base_prefix() {
        assert_eq!(normalize("#/site/contact", "/site"), "/contact");
        assert_eq!(normalize("#/site", "/site"), "/");
        // Base not present in the hash: path passes through unchanged.
        assert_eq!(normalize("#/contact", "/site"), "/contact");
    }

    #[test]
    fn test_normalize_base_strip_is_segment_aware() {
        // A sibling path that merely shares the base's characters is not
        // under the base and must not be stripped into a route match.
        assert_eq!(normalize("#/sitenewsletter", "/site"), "/sitenewsletter");
        assert_eq!(resolve(&normalize("#/sitenewsletter", "/site")), Page::NotFound);
        // The base itself and paths under it still strip.
        assert_eq!(normalize("#/site/newsletter", "/site"), "/newsletter");
        assert_eq!(resolve(&normalize("#/site/newsletter", "/site")), Page::Newsletter);
    }

    #[test]
    fn test_resolve_exact_root() {
        assert_eq!(resolve("/"), Page::Landing);
        // Root is an exact match; deeper unknown paths fall through.
        assert_eq!(resolve("/landing"), Page::NotFound);
    }

    #[test]
    fn test_resolve_prefix_routes() {
        assert_eq!(resolve("/newsletter"), Page::Newsletter);
        assert_eq!(resolve("/newsletter/"), Page::Newsletter);
        assert_eq!(resolve("/newsletter/archive/2023"), Page::Newsletter);
        assert_eq!(resolve("/contact"), Page::Contact);
        assert_eq!(resolve("/contact/extra/segments"), Page::Contact);
    }

    #[test]
    fn test_resolve_prefix_is_segment_aware() {
        assert_eq!(resolve("/newsletterx"), Page::NotFound);
        assert_eq!(resolve("/contactinfo"), Page::NotFound);
    }

    #[test]
    fn test_resolve_is_total() {
        // Anything the table doesn't name lands on the catch-all.
        for path in ["/unknown", "/a/b/c", "/NEWSLETTER", "//", "/."] {
            assert_eq!(resolve(path), Page::NotFound, "path: {path}");
        }
    }

    #[test]
    fn test_route_table_shape() {
        let catch_alls = config::ROUTES
            .iter()
            .filter(|e| matches!(e.rule, MatchRule::CatchAll))
            .count();
        assert_eq!(catch_alls, 1);
        assert!(matches!(
            config::ROUTES.last().map(|e| e.rule),
            Some(MatchRule::CatchAll)
        ));
    }

    #[test]
    fn test_hash_href() {
        assert_eq!(hash_href("", "/"), "#/");
        assert_eq!(hash_href("", "/newsletter"), "#/newsletter");
        assert_eq!(hash_href("/site", "/contact"), "#/site/contact");
    }
}
