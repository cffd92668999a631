use dioxus::prelude::*;

mod alert;
mod routes;

use alert::{AlertHandle, BlockingAlert};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        tracing::info!(platform = client_platform(), "starting sesame");
    });

    // The blocking-alert surface lives app-wide so every screen can reach it.
    use_context_provider(AlertHandle::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        BlockingAlert {}
        Router::<Route> {}
    }
}
