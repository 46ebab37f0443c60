use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::{LoginView, Page, SearchView},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let api = use_hook(|| ApiClient::from_env().map_err(|e| e.to_string()));

    let content = match api {
        Ok(api) => rsx!( Shell { api } ),
        Err(e) => rsx!(
            Page { centered: true,
                p { class: "error-message", "{e}" }
            }
        ),
    };

    rsx!(
        document::Stylesheet { href: MAIN_CSS }
        {content}
    )
}

/// Checks the session once, then shows the login or the search screen.
#[component]
fn Shell(api: ApiClient) -> Element {
    let api = use_context_provider(|| api);
    let mut authenticated = use_signal(|| None::<bool>);

    use_future(move || {
        let api = api.clone();
        async move {
            let result = api.check_auth().await;
            tracing::debug!("Session authenticated: {}", result);
            authenticated.set(Some(result));
        }
    });

    match authenticated() {
        None => rsx!(
            Page { centered: true,
                div { class: "loading-spinner" }
                p { "Se încarcă..." }
            }
        ),
        Some(true) => rsx!(
            SearchView { on_logout: move |_| authenticated.set(Some(false)) }
        ),
        Some(false) => rsx!(
            LoginView { on_success: move |_| authenticated.set(Some(true)) }
        ),
    }
}
