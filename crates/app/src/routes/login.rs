use crate::auth::{use_api, use_auth};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Button, Card, CardContent, CardHeader, ErrorText, Input};

/// Username/password sign-in. A successful login lands on `/home`, which
/// picks the dashboard for the user's role.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form.
    use_effect(move || {
        if auth.is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let request = LoginRequest {
                username: username().trim().to_string(),
                password: password(),
            };
            if request.username.is_empty() || request.password.is_empty() {
                error_msg.set(Some("Enter your username and password".to_string()));
                return;
            }
            loading.set(true);
            error_msg.set(None);

            match api.login(&request).await {
                Ok(user) => {
                    tracing::info!(username = %user.username, role_id = user.role_id, "Logged in");
                    auth.set_user(user);
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: "Sign In",
                    subtitle: "SYOS point of sale and online store",
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        ErrorText { message: err }
                    }
                    form { onsubmit: handle_login,
                        Input {
                            label: "Username",
                            value: username(),
                            placeholder: "Enter your username",
                            required: true,
                            on_input: move |e: FormEvent| username.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            placeholder: "Enter your password",
                            required: true,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            busy: loading(),
                            busy_text: "Signing in...",
                            "Sign In"
                        }
                    }
                    p { class: "auth-switch",
                        "New customer? "
                        Link { to: Route::Register {}, "Create an account" }
                    }
                }
            }
        }
    }
}
