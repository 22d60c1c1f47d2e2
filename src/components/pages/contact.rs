//! Contact page.

use leptos::prelude::*;

use crate::config::{CONTACT_EMAIL, GITHUB_URL, INSTAGRAM_URL};

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Contact page listing the ways to reach me.
#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::pageTitle>"Contact"</h1>
            <p class=css::body>
                "Email is best: "
                <a class=css::inlineLink href=format!("mailto:{CONTACT_EMAIL}")>
                    {CONTACT_EMAIL}
                </a>
            </p>
            <ul class=css::linkList>
                <li>
                    <a class=css::inlineLink href=GITHUB_URL target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                </li>
                <li>
                    <a class=css::inlineLink href=INSTAGRAM_URL target="_blank" rel="noreferrer">
                        "Instagram"
                    </a>
                </li>
            </ul>
        </section>
    }
}
