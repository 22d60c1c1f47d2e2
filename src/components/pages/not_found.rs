//! Not-found page, rendered by the router's catch-all entry.

use leptos::prelude::*;

use crate::config::BASE_PATH;
use crate::models::hash_href;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Default page for paths no route entry matches.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::pageTitle>"404"</h1>
            <p class=css::body>"There's nothing at this address."</p>
            <p class=css::body>
                <a class=css::inlineLink href=hash_href(BASE_PATH, "/")>
                    "Back to the front page"
                </a>
            </p>
        </section>
    }
}
