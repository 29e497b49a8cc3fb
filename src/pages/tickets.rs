//! Ticket submission form and ticket list.

use leptos::prelude::*;

use crate::components::ticket_card::TicketCard;
use crate::state::session::SessionState;
use crate::state::tickets::TicketsState;

/// Home page: a create-ticket form above the list of all tickets.
///
/// The list is fetched on mount and re-fetched when the held token changes.
/// Submitting the form posts the ticket; a success response carrying the
/// created ticket is prepended to the list immediately (even before the
/// backend assigns a ticket number), a success response without a payload
/// falls back to a full re-fetch, and a failure surfaces a blocking alert
/// while leaving the form populated for retry.
#[component]
pub fn TicketsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let tickets = expect_context::<RwSignal<TicketsState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    // Track only the token, not the whole session, so verification noise
    // does not retrigger the fetch.
    let token = Memo::new(move |_| session.with(|s| s.token.clone()));

    Effect::new(move || {
        let token = token.get();
        #[cfg(feature = "hydrate")]
        {
            tickets.update(|t| t.loading = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_tickets(token.as_deref()).await {
                    Some(list) => tickets.update(|t| t.set_list(list)),
                    None => tickets.update(|t| t.loading = false),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::CreateTicketOutcome;

            if tickets.get_untracked().submit_pending {
                return;
            }
            tickets.update(|t| t.submit_pending = true);

            let form_title = title.get_untracked();
            let form_description = description.get_untracked();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().token;
                let outcome = crate::net::api::create_ticket(
                    token.as_deref(),
                    &form_title,
                    &form_description,
                )
                .await;

                match outcome {
                    CreateTicketOutcome::Created(ticket) => {
                        title.set(String::new());
                        description.set(String::new());
                        tickets.update(|t| t.prepend(ticket));
                    }
                    CreateTicketOutcome::Refetch => {
                        title.set(String::new());
                        description.set(String::new());
                        let refreshed = crate::net::api::fetch_tickets(token.as_deref()).await;
                        tickets.update(|t| {
                            t.submit_pending = false;
                            if let Some(list) = refreshed {
                                t.set_list(list);
                            }
                        });
                    }
                    CreateTicketOutcome::Failed(message) => {
                        // The form stays populated for retry.
                        tickets.update(|t| t.submit_pending = false);
                        if let Some(w) = web_sys::window() {
                            let _ = w.alert_with_message(&message);
                        }
                    }
                }
            });
        }
    };

    view! {
        <div class="tickets-page">
            <h2 class="tickets-page__heading">"Create Ticket"</h2>

            <form class="tickets-page__form" on:submit=on_submit>
                <input
                    class="tickets-page__input"
                    type="text"
                    placeholder="Ticket Title"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="tickets-page__textarea"
                    placeholder="Ticket Description"
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || tickets.get().submit_pending
                >
                    {move || {
                        if tickets.get().submit_pending { "Submitting..." } else { "Submit Ticket" }
                    }}
                </button>
            </form>

            <h2 class="tickets-page__heading">"All Tickets"</h2>
            <div class="tickets-page__list">
                {move || {
                    let items = tickets.get().items;
                    if items.is_empty() {
                        view! { <p>"No tickets submitted yet."</p> }.into_any()
                    } else {
                        view! {
                            <div class="tickets-page__cards">
                                {items
                                    .into_iter()
                                    .map(|ticket| view! { <TicketCard ticket=ticket/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
