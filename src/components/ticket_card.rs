#[cfg(test)]
#[path = "ticket_card_test.rs"]
mod ticket_card_test;

use leptos::prelude::*;

use crate::net::types::Ticket;

/// Message shown when a ticket has no number assigned yet.
pub const TICKET_PENDING_MESSAGE: &str =
    "Ticket is still being processed. Please try again in a moment.";

/// Where a ticket card navigates: `None` until the backend assigns a number.
pub fn ticket_href(ticket: &Ticket) -> Option<String> {
    ticket.ticket_number.map(|n| format!("/tickets/{n}"))
}

/// A single ticket in the list.
///
/// Numberless tickets render but do not navigate; clicking one shows an
/// informational alert instead of following the link.
#[component]
pub fn TicketCard(ticket: Ticket) -> impl IntoView {
    let href = ticket_href(&ticket).unwrap_or_else(|| "#".to_owned());
    let navigable = ticket.ticket_number.is_some();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if !navigable {
            ev.prevent_default();
            #[cfg(feature = "hydrate")]
            {
                if let Some(w) = web_sys::window() {
                    let _ = w.alert_with_message(TICKET_PENDING_MESSAGE);
                }
            }
        }
    };

    let Ticket { title, description, ticket_number, created_at, .. } = ticket;

    view! {
        <a class="ticket-card" href=href on:click=on_click>
            <h3 class="ticket-card__title">{title}</h3>
            <p class="ticket-card__description">{description}</p>
            {ticket_number
                .map(|n| {
                    view! { <p class="ticket-card__number">{format!("Ticket #{n}")}</p> }
                })}
            <p class="ticket-card__created">{format!("Created At: {created_at}")}</p>
        </a>
    }
}
