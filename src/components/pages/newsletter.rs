//! Newsletter signup page.

use leptos::prelude::*;

use crate::config::CONTACT_EMAIL;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Newsletter page. Signup itself happens off-site; this page only
/// describes the letter and links out.
#[component]
pub fn Newsletter() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::pageTitle>"The Newsletter"</h1>
            <p class=css::body>
                "A short letter, once a month: one essay, a few photographs, \
                 and whatever I've been cooking. No tracking, no schedule \
                 slips announced with great fanfare."
            </p>
            <p class=css::body>
                "To subscribe, send a note to "
                <a class=css::inlineLink href=format!("mailto:{CONTACT_EMAIL}?subject=Subscribe")>
                    {CONTACT_EMAIL}
                </a>
                " and you'll be added to the list."
            </p>
        </section>
    }
}
