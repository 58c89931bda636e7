//! # beautyflow
//!
//! Leptos + WASM client for the beauty import storefront.
//!
//! This crate contains the login/signup pages, the custom-packaging wizard,
//! the smart-picks vibe generator, and the chat composer. Transition logic
//! lives in DOM-free `state` modules; pages forward DOM events into those
//! reducers and render the result. The backend is reached only through the
//! JSON endpoints wrapped by `net::api`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
