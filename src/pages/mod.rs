//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal, turns DOM events into reducer calls, and
//! runs whatever request the reducer asks for. Rendering details live in
//! `components`.

pub mod chat;
pub mod custom_design;
pub mod login;
pub mod signup;
pub mod smart_picks;

use std::future::Future;

/// Run `task` on the browser event loop. Native builds drop it unpolled.
pub(crate) fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

/// Full page navigation, used for server-rendered destinations.
pub(crate) fn navigate_to(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                leptos::logging::warn!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}
