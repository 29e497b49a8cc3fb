//! Signup page, the navigation target for the navbar link.

use leptos::prelude::*;

/// Signup landing page.
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="signup-page">
            <h1>"TicketDesk"</h1>
            <p>"Create an account to submit support tickets."</p>
            <a href="/login" class="btn">
                "Already have an account? Log in"
            </a>
        </div>
    }
}
