//! Desktop client: API access, search state and the Dioxus user interface.

pub mod api;
pub mod error;
pub mod render;
pub mod search;

#[cfg(feature = "desktop")]
pub mod app;
#[cfg(feature = "desktop")]
pub mod components;

#[cfg(feature = "desktop")]
pub use app::App;
