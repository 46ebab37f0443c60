use dioxus::prelude::*;

/// Full-height screen body. `centered` stacks the content in the middle of the window,
/// as used by the login and loading screens.
#[component]
pub fn Page(#[props(default)] centered: bool, children: Element) -> Element {
    rsx!(
        main {
            class: if centered { "page centered" } else { "page" },
            {children}
        }
    )
}
