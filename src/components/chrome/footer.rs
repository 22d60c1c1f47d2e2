//! Site footer with social links.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{CONTACT_EMAIL, COPYRIGHT, FooterTheme, GITHUB_URL, INSTAGRAM_URL};

stylance::import_crate_style!(css, "src/components/chrome/chrome.module.css");

/// Site footer. Rendered on every page below the content area.
///
/// # Props
/// - `theme`: color theme; the site-wide value lives in `config`
#[component]
pub fn Footer(theme: FooterTheme) -> impl IntoView {
    let theme_class = match theme {
        FooterTheme::Main => css::footerMain,
    };

    view! {
        <footer class=format!("{} {}", css::footer, theme_class)>
            <div class=css::social>
                <a
                    class=css::socialLink
                    href=GITHUB_URL
                    target="_blank"
                    rel="noreferrer"
                    title="GitHub"
                >
                    <Icon icon=ic::GITHUB />
                </a>
                <a
                    class=css::socialLink
                    href=INSTAGRAM_URL
                    target="_blank"
                    rel="noreferrer"
                    title="Instagram"
                >
                    <Icon icon=ic::INSTAGRAM />
                </a>
                <a
                    class=css::socialLink
                    href=format!("mailto:{CONTACT_EMAIL}")
                    title="Email"
                >
                    <Icon icon=ic::MAIL />
                </a>
            </div>
            <span class=css::copyright>{COPYRIGHT}</span>
        </footer>
    }
}
