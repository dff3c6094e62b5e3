//! # marker-map
//!
//! Leptos + WASM image map block: an image with user-placed markers that link
//! to URLs and show tooltips.
//!
//! The crate has two halves that only share the attribute schema in
//! [`state::attributes`]: the interactive editor ([`app::MarkerMapEditor`] and
//! its [`components`]) and the pure saved-markup renderer ([`render`]).
//! Browser glue for embedding the editor in a host page lives in `bridge`
//! behind the `hydrate` feature.

pub mod app;
pub mod block;
#[cfg(feature = "hydrate")]
pub mod bridge;
pub mod components;
pub mod config;
pub mod media;
pub mod render;
pub mod state;
pub mod util;
