use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaHouse, FaRightFromBracket};
use dioxus_free_icons::Icon;

#[component]
pub fn Header(year: Option<i32>, on_home: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let title = match year {
        Some(year) => format!("Registru Import {year}"),
        None => "Registru Import".to_string(),
    };

    rsx!(
        div { class: "header",
            h1 { "{title}" }
            div { class: "form-row",
                button {
                    class: "btn secondary",
                    onclick: move |_| on_home.call(()),
                    Icon { width: 16, height: 16, icon: FaHouse }
                    "Acasă"
                }
                button {
                    class: "btn secondary",
                    onclick: move |_| on_logout.call(()),
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Deconectare"
                }
            }
        }
    )
}
