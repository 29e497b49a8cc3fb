//! Admin landing page, the navigation target for the admin-only navbar link.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Admin landing page. The navbar only links here for the `admin` role;
/// anyone else who navigates directly sees the access note.
#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let is_admin = move || {
        session
            .get()
            .user
            .is_some_and(|u| u.role == "admin")
    };

    view! {
        <div class="admin-page">
            <h2>"Admin"</h2>
            <Show
                when=is_admin
                fallback=|| view! { <p>"Admin access required."</p> }
            >
                <p>"Ticket administration."</p>
            </Show>
        </div>
    }
}
