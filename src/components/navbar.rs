//! Top navigation bar: verifies the session on mount and renders
//! auth-aware links.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Navigation bar shown on every page.
///
/// On mount it asks the backend to verify the session; a negative result
/// explicitly clears local state so a stale client-held session self-heals
/// to match remote truth. Renders Signup/Login links when unauthenticated,
/// and a greeting, an admin link (for the `admin` role), and a Logout
/// button when authenticated.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Verify authentication status with the backend on mount. The closure
    // reads nothing reactively, so this runs once per mount.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                // `None` means this check was superseded by a newer one.
                if let Some(outcome) = crate::net::api::verify(session).await {
                    if !outcome.authenticated {
                        session.update(SessionState::logout);
                    }
                }
            });
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                if crate::net::api::logout(session).await {
                    // Navigate to login via window.location for a clean state.
                    if let Some(w) = web_sys::window() {
                        let _ = w.location().set_href("/login");
                    }
                }
            });
        }
    };

    let is_authenticated = move || session.get().is_authenticated;
    let user_name = move || session.get().user.map(|u| u.name);
    let is_admin = move || {
        session
            .get()
            .user
            .is_some_and(|u| u.role == "admin")
    };

    view! {
        <div class="navbar">
            <a href="/" class="navbar__brand">
                "TicketDesk"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=is_authenticated
                fallback=|| {
                    view! {
                        <a href="/signup" class="btn btn--small">
                            "Signup"
                        </a>
                        <a href="/login" class="btn btn--small">
                            "Login"
                        </a>
                    }
                }
            >
                {move || {
                    user_name()
                        .map(|name| {
                            view! {
                                <a href="/profile" class="navbar__greeting">
                                    {format!("Hi, {name}")}
                                </a>
                            }
                        })
                }}
                <Show when=is_admin>
                    <a href="/admin" class="btn btn--small">
                        "Admin"
                    </a>
                </Show>
                <button class="btn btn--small navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </div>
    }
}
