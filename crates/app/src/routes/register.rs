use crate::auth::use_api;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{RegisterRequest, MIN_PASSWORD_LEN};
use shared_ui::{notice_options, use_toast, Button, Card, CardContent, CardHeader, ErrorText, Input};

/// Customer self-registration.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let nav = navigator();
    let toast = use_toast();
    let mut user_id = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut contact_number = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let request = RegisterRequest {
                user_id: user_id().trim().to_string(),
                full_name: full_name().trim().to_string(),
                email: email().trim().to_string(),
                contact_number: contact_number().trim().to_string(),
                password: password(),
            };
            if let Err(problem) = request.validate(&confirm()) {
                error_msg.set(Some(problem));
                return;
            }
            loading.set(true);
            error_msg.set(None);

            match api.register(&request).await {
                Ok(message) => {
                    tracing::info!(user_id = %request.user_id, "Registered new customer");
                    toast.success(message, notice_options());
                    nav.push(Route::Login {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Registration failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    let password_hint = format!("At least {MIN_PASSWORD_LEN} characters");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    title: "Create Account",
                    subtitle: "Register to shop online",
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        ErrorText { message: err }
                    }
                    form { onsubmit: handle_register,
                        Input {
                            label: "User ID",
                            value: user_id(),
                            required: true,
                            on_input: move |e: FormEvent| user_id.set(e.value()),
                        }
                        Input {
                            label: "Full Name",
                            value: full_name(),
                            required: true,
                            on_input: move |e: FormEvent| full_name.set(e.value()),
                        }
                        Input {
                            label: "Email",
                            input_type: "email",
                            value: email(),
                            required: true,
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                        Input {
                            label: "Contact Number",
                            input_type: "tel",
                            value: contact_number(),
                            required: true,
                            on_input: move |e: FormEvent| contact_number.set(e.value()),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            value: password(),
                            placeholder: password_hint,
                            required: true,
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                        Input {
                            label: "Confirm Password",
                            input_type: "password",
                            value: confirm(),
                            required: true,
                            on_input: move |e: FormEvent| confirm.set(e.value()),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            busy: loading(),
                            busy_text: "Creating account...",
                            "Register"
                        }
                    }
                    p { class: "auth-switch",
                        "Already registered? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                }
            }
        }
    }
}
