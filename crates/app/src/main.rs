use api::ApiClient;
use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod routes;
use auth::AuthState;
use routes::Route;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AuthState::new);

    let client = use_hook(|| {
        let client = ApiClient::from_config();
        match &client {
            Ok(c) => tracing::info!(base_url = c.base_url(), "API client ready"),
            Err(e) => tracing::error!(error = %e, "Failed to create API client"),
        }
        client
    });

    let body = match client {
        Ok(client) => rsx! { Connected { client } },
        Err(e) => rsx! {
            div { class: "startup-error",
                h1 { "SYOS is unavailable" }
                p { "{e.friendly_message()}" }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        {body}
    }
}

/// Everything below the root once the backend client exists.
#[component]
fn Connected(client: ApiClient) -> Element {
    use_context_provider(|| client.clone());

    rsx! {
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
