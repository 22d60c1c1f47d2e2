//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works from any
//! static host without server-side rewrites. Uses native hashchange events
//! instead of leptos_router; the routing table is small enough that a
//! data-driven matcher keeps everything in one place.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current page is derived from
//!   `#/path` on every navigation
//! - **Chrome never re-renders on navigation**: Header and Footer mount
//!   once; only the selected page view swaps
//! - **hashchange events**: browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::chrome::{Footer, Header};
use crate::components::pages::{Contact, LandingPage, Newsletter, NotFound};
use crate::config::FOOTER_THEME;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Selects exactly one page for the current hash and renders it inside the
/// persistent chrome shell:
/// - `#/` → LandingPage (exact)
/// - `#/newsletter` → Newsletter (prefix)
/// - `#/contact` → Contact (prefix)
/// - anything else → NotFound (catch-all)
///
/// # Props
/// - `base`: deployment base-path prefix, stripped before matching
#[component]
pub fn AppRouter(base: &'static str) -> impl IntoView {
    // Create page signal from the current URL hash
    let page = RwSignal::new(Page::current(base));

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            page.set(Page::current(base));
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Keep the browser tab title in sync with the selected page
    Effect::new(move || {
        document().set_title(page.get().title());
    });

    view! {
        <div class=css::site>
            <div class=css::siteContent>
                <Header base=base />
                {move || match page.get() {
                    Page::Landing => view! { <LandingPage /> }.into_any(),
                    Page::Newsletter => view! { <Newsletter /> }.into_any(),
                    Page::Contact => view! { <Contact /> }.into_any(),
                    Page::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </div>
            <Footer theme=FOOTER_THEME />
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn renders_chrome_and_exactly_one_page() {
        let document = document();
        let body = document.body().unwrap();
        mount_to(body, || view! { <AppRouter base="" /> }).forget();

        assert!(document.query_selector("header").unwrap().is_some());
        assert!(document.query_selector("footer").unwrap().is_some());
        assert_eq!(document.query_selector_all("section").unwrap().length(), 1);
    }
}
