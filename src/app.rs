//! Root application module.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::BASE_PATH;

/// Root application component.
///
/// Provides the deployment base path to the router explicitly and wraps
/// the tree in an ErrorBoundary so a rendering error surfaces as a
/// visible message instead of a blank page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="padding: 2rem; font-family: sans-serif;">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please reload the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            <AppRouter base=BASE_PATH />
        </ErrorBoundary>
    }
}
