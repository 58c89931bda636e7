//! Root application component with routing and the config context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{
    chat::ChatPage, custom_design::CustomDesignPage, login::LoginPage, signup::SignupPage,
    smart_picks::SmartPicksPage,
};

/// Root application component.
///
/// Reads client config once from the document and provides it to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_document());

    view! {
        <Stylesheet id="beautyflow" href="/static/style.css"/>
        <Title text="BeautyFlow"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("AI") view=CustomDesignPage/>
                <Route path=StaticSegment("smartPicks") view=SmartPicksPage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
            </Routes>
        </Router>
    }
}
