use dioxus::prelude::*;

use crate::client::render::FALLBACK_IMAGE;

/// An image that swaps itself for the placeholder when loading fails.
#[component]
pub fn FallbackImage(src: String, alt: String) -> Element {
    let mut failed_src = use_signal(|| None::<String>);

    let shown = if failed_src.read().as_deref() == Some(src.as_str()) {
        FALLBACK_IMAGE.to_string()
    } else {
        src.clone()
    };

    rsx!(
        img {
            src: "{shown}",
            alt: "{alt}",
            title: "{alt}",
            onerror: move |_| {
                if src != FALLBACK_IMAGE {
                    failed_src.set(Some(src.clone()));
                }
            },
        }
    )
}
