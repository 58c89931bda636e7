//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each page owns one explicitly constructed state value held in a signal.
//! DOM events become reducer calls on that value, so every transition can be
//! exercised without a browser.

pub mod chat;
pub mod form;
pub mod smart_picks;
pub mod transcript;
pub mod wizard;
