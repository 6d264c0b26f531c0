pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;

use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes. The bare root goes straight to the login page.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/home")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
