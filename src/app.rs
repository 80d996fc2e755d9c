//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::pages::{login::LoginPage, register::RegisterPage, welcome::WelcomePage};
use crate::state::notifications::NotificationState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared notification state context and sets up client-side
/// routing. The bare root path redirects to the login screen, matching the
/// server's historical behavior for unauthenticated visitors.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notifications = RwSignal::new(NotificationState::default());
    provide_context(notifications);

    view! {
        <Stylesheet id="leptos" href="/pkg/notify-client.css"/>
        <Title text="Notifications"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("welcome") view=WelcomePage/>
            </Routes>
        </Router>
    }
}
