#![allow(non_snake_case)]

pub mod admin;
pub mod model;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;
