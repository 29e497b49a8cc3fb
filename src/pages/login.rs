//! Login page. Authentication itself happens against the remote API and its
//! session cookie; this page is the navigation target for the navbar link.

use leptos::prelude::*;

/// Login landing page.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"TicketDesk"</h1>
            <p>"Log in to submit and track support tickets."</p>
            <a href="/" class="btn btn--primary">
                "Back to tickets"
            </a>
        </div>
    }
}
