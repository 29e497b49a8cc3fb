//! Detail page for a numbered ticket.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Landing page for `/tickets/{number}`. Only tickets with an assigned
/// number link here; numberless tickets are guarded at the card level.
#[component]
pub fn TicketDetailPage() -> impl IntoView {
    let params = use_params_map();
    let number = move || params.get().get("number").unwrap_or_default();

    view! {
        <div class="ticket-detail-page">
            <h2>{move || format!("Ticket #{}", number())}</h2>
            <a href="/" class="btn">
                "Back to tickets"
            </a>
        </div>
    }
}
