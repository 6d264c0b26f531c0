use crate::auth::{use_api, use_auth};
use crate::routes::dashboard::{AdminDashboard, CashierDashboard, CustomerDashboard};
use crate::routes::Route;
use api::SessionApi;
use dioxus::prelude::*;
use shared_types::{AppError, DashboardKind, SessionInfo, SessionUser};

/// What `/home` does with the result of the session check.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeOutcome {
    Render(DashboardKind, SessionUser),
    /// No session, or the check itself failed.
    RedirectToLogin,
    /// Logged in with a role id no dashboard serves.
    UnknownRole(i32),
}

pub fn resolve_home(session: Result<SessionInfo, AppError>) -> HomeOutcome {
    let info = match session {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!(error = %e, "Session check failed");
            return HomeOutcome::RedirectToLogin;
        }
    };
    let Some(user) = info.into_user() else {
        tracing::info!("No active session");
        return HomeOutcome::RedirectToLogin;
    };
    match user.role() {
        Some(role) => {
            let kind = role.dashboard();
            tracing::debug!(username = %user.username, ?kind, "Dispatching to dashboard");
            HomeOutcome::Render(kind, user)
        }
        None => {
            tracing::warn!(role_id = user.role_id, "Unrecognised role");
            HomeOutcome::UnknownRole(user.role_id)
        }
    }
}

/// End the session. Local state is cleared and the login page shown
/// whether or not the backend call succeeds; failures are only logged.
pub async fn logout_flow<S: SessionApi>(
    api: &S,
    clear: impl FnOnce(),
    to_login: impl FnOnce(),
) {
    if let Err(e) = api.logout().await {
        tracing::warn!(error = %e, "Logout request failed");
    }
    clear();
    tracing::info!("Logged out");
    to_login();
}

/// Role router: checks the session, then shows the matching dashboard.
#[component]
pub fn Home() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = navigator();

    let session_api = api.clone();
    let outcome = use_resource(move || {
        let api = session_api.clone();
        async move { resolve_home(api.current_session().await) }
    });

    // Navigation and auth updates run after render, never during it.
    use_effect(move || {
        match &*outcome.read() {
            Some(HomeOutcome::Render(_, user)) => {
                if auth.current_user.peek().as_ref() != Some(user) {
                    auth.set_user(user.clone());
                }
            }
            Some(HomeOutcome::RedirectToLogin) | Some(HomeOutcome::UnknownRole(_)) => {
                auth.clear_auth();
                nav.replace(Route::Login {});
            }
            None => {}
        }
    });

    let on_logout = move |_: ()| {
        let api = api.clone();
        spawn(async move {
            logout_flow(&api, move || auth.clear_auth(), move || {
                nav.replace(Route::Login {});
            })
            .await;
        });
    };

    rsx! {
        HomeBody { outcome: outcome(), on_logout }
    }
}

/// Renders exactly one dashboard for a resolved session, a placeholder
/// while the check runs, and nothing while a redirect is pending.
#[component]
fn HomeBody(outcome: Option<HomeOutcome>, on_logout: EventHandler<()>) -> Element {
    match outcome {
        None => rsx! {
            div { class: "home-loading",
                p { "Checking session..." }
            }
        },
        Some(HomeOutcome::Render(DashboardKind::Admin, user)) => rsx! {
            AdminDashboard { user, on_logout }
        },
        Some(HomeOutcome::Render(DashboardKind::Cashier, user)) => rsx! {
            CashierDashboard { user, on_logout }
        },
        Some(HomeOutcome::Render(DashboardKind::Customer, user)) => rsx! {
            CustomerDashboard { user, on_logout }
        },
        Some(HomeOutcome::RedirectToLogin) | Some(HomeOutcome::UnknownRole(_)) => rsx! {},
    }
}
