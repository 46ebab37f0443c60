use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{api::ApiClient, components::Page};

/// Shown for any failed login, whatever the cause.
pub const LOGIN_FAILED: &str = "Nume utilizator sau parolă incorecte";

#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let api = use_context::<ApiClient>();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let api = api.clone();

        async move {
            error.set(None);
            loading.set(true);

            match api.login(&username(), &password()).await {
                Ok(response) => {
                    tracing::info!("Logged in as {}", response.username);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::debug!("Login failed: {}", e);
                    error.set(Some(LOGIN_FAILED.to_string()));
                    loading.set(false);
                }
            }
        }
    };

    rsx!(
        Page { centered: true,
            div { class: "card",
                h1 { "Registru Import" }
                p { "Sistem de Gestiune Manifeste" }
                form {
                    onsubmit: on_submit,
                    div { class: "form-group",
                        label { r#for: "username", "Nume Utilizator" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Introduceți numele de utilizator",
                            autofocus: true,
                            value: "{username}",
                            oninput: move |e| username.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "password", "Parolă" }
                        input {
                            id: "password",
                            r#type: "password",
                            placeholder: "Introduceți parola",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    if let Some(message) = error() {
                        div { class: "error-message", "{message}" }
                    }
                    button {
                        class: "btn",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Se conectează..." } else { "Conectare" }
                    }
                }
            }
        }
    )
}
