use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardHeader};

use crate::routes::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let requested = format!("/{}", route.join("/"));
    tracing::debug!(path = %requested, "No route matched");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "not-found-page",
            Card { class: "not-found-card",
                span { class: "not-found-code", "404" }
                CardHeader {
                    title: "Nothing here",
                    subtitle: "SYOS has no page at {requested}",
                }
                CardContent {
                    nav { class: "not-found-links",
                        Link { to: Route::Login {}, class: "not-found-link", "Sign in" }
                        Link { to: Route::Register {}, class: "not-found-link", "Create an account" }
                    }
                }
            }
        }
    }
}
