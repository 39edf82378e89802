//! Leptos 0.7 CSR admin console for the formations catalogue
//!
//! Lists, creates, edits and deletes formations against the REST backend.
//! View state machines and validation live in `formations-core`; this crate
//! is the browser shell around them.
//!
//! ## Architecture
//! - Pure CSR with Leptos 0.7, compiled to `wasm32-unknown-unknown` by Trunk
//! - Routing with `leptos_router`
//! - HTTP through `gloo-net`, behind the `FormationApi` trait
//!
//! ## Module Structure
//! - `app`: root component and context setup
//! - `router`: route constants and the router
//! - `pages`: list, create and not-found pages
//! - `components`: navigation, card, form and image components
//! - `client`: `gloo-net` implementation of `FormationApi`
//! - `dialog`: `alert`/`confirm` wrappers
//! - `error`: browser-side errors

#![forbid(unsafe_code)]

pub mod app;
pub mod client;
pub mod components;
pub mod dialog;
pub mod error;
pub mod pages;
pub mod router;

pub use app::App;

#[cfg(test)]
mod tests;
