use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronLeft, FaChevronRight, FaMagnifyingGlass};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    api::ApiClient,
    components::{Header, ManifestCard, Page},
    search::{SearchFlow, SearchState},
};

#[component]
pub fn SearchView(on_logout: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let mut flow = use_signal(SearchFlow::new);
    let selected_year = use_memo(move || flow.read().form.year);

    let years_api = api.clone();
    use_future(move || {
        let api = years_api.clone();
        async move {
            match api.years().await {
                Ok(years) => flow.write().set_years(years),
                Err(e) => tracing::warn!("Failed to load years: {}", e),
            }
        }
    });

    let latest_api = api.clone();
    let _latest = use_resource(move || {
        let api = latest_api.clone();
        async move {
            let Some(year) = selected_year() else {
                return;
            };

            match api.latest_manifest(Some(year)).await {
                Ok(latest) => flow.write().set_latest(Some(year), latest),
                Err(e) => tracing::warn!("Failed to load latest manifest for {}: {}", year, e),
            }
        }
    });

    let search_api = api.clone();
    let on_search = move |e: FormEvent| {
        e.prevent_default();
        let api = search_api.clone();

        async move {
            let Some(query) = flow.write().begin_search() else {
                return;
            };

            let result = api.search(&query).await;
            flow.write().finish_search(result);
        }
    };

    let logout_api = api.clone();
    let on_logout_click = move |_| {
        let api = logout_api.clone();

        async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("Logout request failed: {}", e);
            }
            on_logout.call(());
        }
    };

    let current = flow.read().clone();
    let searching = current.state() == &SearchState::Searching;
    let message = current.message().map(str::to_string);
    let is_error = matches!(current.state(), SearchState::Error(_));

    rsx!(
        Header {
            year: current.form.year,
            on_home: move |_| flow.write().home(),
            on_logout: on_logout_click,
        }
        Page {
            div { class: "card",
                h2 { "Căutare Manifest" }
                if let Some(latest) = current.latest() {
                    p { class: "latest-banner",
                        "Ultimul manifest înregistrat: nr. {latest.numar_curent} ({latest.numar_manifest})"
                    }
                }
                form {
                    onsubmit: on_search,
                    div { class: "form-row",
                        div { class: "form-group",
                            label { r#for: "year", "An" }
                            select {
                                id: "year",
                                onchange: move |e| flow.write().select_year(e.value().parse::<i32>().ok()),
                                for year in current.years().iter() {
                                    option {
                                        key: "{year.id}",
                                        value: "{year.year}",
                                        selected: current.form.year == Some(year.year),
                                        "{year.year}"
                                    }
                                }
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "container", "Container" }
                            input {
                                id: "container",
                                r#type: "text",
                                placeholder: "Introduceți numărul containerului",
                                value: "{current.form.container}",
                                oninput: move |e| flow.write().form.container = e.value(),
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "numar_manifest", "Număr Manifest" }
                            input {
                                id: "numar_manifest",
                                r#type: "text",
                                placeholder: "Introduceți numărul manifestului",
                                value: "{current.form.numar_manifest}",
                                oninput: move |e| flow.write().form.numar_manifest = e.value(),
                            }
                        }
                    }
                    if let Some(message) = message {
                        div {
                            class: if is_error { "error-message" } else { "info-message" },
                            "{message}"
                        }
                    }
                    div { class: "navigation",
                        button {
                            class: "btn",
                            r#type: "submit",
                            disabled: searching,
                            Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                            if searching { "Se caută..." } else { "Căutare" }
                        }
                    }
                }
            }
            if let Some(entry) = current.current() {
                ManifestCard { entry: entry.clone() }
                div { class: "navigation",
                    button {
                        class: "btn secondary",
                        disabled: !current.can_previous(),
                        onclick: move |_| flow.write().previous(),
                        Icon { width: 16, height: 16, icon: FaChevronLeft }
                        "Anterior"
                    }
                    span { "{current.position().unwrap_or_default()}" }
                    button {
                        class: "btn secondary",
                        disabled: !current.can_next(),
                        onclick: move |_| flow.write().next(),
                        "Următor"
                        Icon { width: 16, height: 16, icon: FaChevronRight }
                    }
                }
            }
        }
    )
}
