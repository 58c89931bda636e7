//! Networking modules for the storefront's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the request/response
//! schema plus the error taxonomy callers render.

pub mod api;
pub mod types;
