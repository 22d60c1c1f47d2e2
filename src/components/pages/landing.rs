//! Landing page.

use leptos::prelude::*;

use crate::config::{SITE_NAME, SITE_TAGLINE};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Landing page shown at the site root.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <section class=css::page>
            <div class=css::hero>
                <h1 class=css::heroTitle>{SITE_NAME}</h1>
                <p class=css::heroTagline>{SITE_TAGLINE}</p>
            </div>
            <p class=css::lede>
                "Essays, photographs, and recipes from wherever I happen to be. \
                 New writing lands in the newsletter first."
            </p>
        </section>
    }
}
