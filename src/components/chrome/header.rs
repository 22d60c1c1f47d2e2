//! Site header with brand and navigation links.
//!
//! Links are plain hash anchors; the browser fires `hashchange` and the
//! router re-resolves, so no click handlers are needed.

use leptos::prelude::*;

use crate::config::{NAV_LINKS, SITE_NAME};
use crate::models::hash_href;

stylance::import_crate_style!(css, "src/components/chrome/chrome.module.css");

/// Site header. Rendered on every page.
///
/// # Props
/// - `base`: deployment base-path prefix, prepended to every nav href
#[component]
pub fn Header(base: &'static str) -> impl IntoView {
    view! {
        <header class=css::header>
            <a class=css::brand href=hash_href(base, "/")>{SITE_NAME}</a>
            <nav class=css::nav>
                {NAV_LINKS
                    .iter()
                    .map(|(label, path)| {
                        view! {
                            <a class=css::navLink href=hash_href(base, path)>{*label}</a>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
