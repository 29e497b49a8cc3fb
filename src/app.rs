//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    admin::AdminPage, login::LoginPage, profile::ProfilePage, signup::SignupPage,
    ticket_detail::TicketDetailPage, tickets::TicketsPage,
};
use crate::state::{session::SessionState, tickets::TicketsState};

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
/// Provides the session and ticket-list contexts and sets up client-side
/// routing. The session signal is the single update channel for
/// authentication state: views read it reactively, and only the two store
/// mutators write to it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let tickets = RwSignal::new(TicketsState::default());

    provide_context(session);
    provide_context(tickets);

    view! {
        <Stylesheet id="leptos" href="/pkg/ticketdesk.css"/>
        <Title text="TicketDesk"/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TicketsPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
                <Route
                    path=(StaticSegment("tickets"), ParamSegment("number"))
                    view=TicketDetailPage
                />
            </Routes>
        </Router>
    }
}
