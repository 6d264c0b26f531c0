use dioxus::prelude::*;
use dioxus_primitives::toast as prim;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, Toasts};

/// Seconds a toast stays on screen before it dismisses itself.
pub const TOAST_SECONDS: u64 = 3;

/// Options for the dashboards' transient notices.
pub fn notice_options() -> ToastOptions {
    ToastOptions::new().duration(std::time::Duration::from_secs(TOAST_SECONDS))
}

/// Hosts the toast stack; wrap the router in it once.
#[component]
pub fn ToastProvider(props: prim::ToastProviderProps) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::ToastProvider { ..props }
    }
}
