//! Profile page for the authenticated user.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionState;

/// Shows the current user's profile, fetched from the backend on mount.
/// Falls back to the session's copy of the identity while the fetch is in
/// flight (or if it fails).
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let profile = RwSignal::new(None::<User>);

    Effect::new(move || {
        let current = session.get();
        #[cfg(feature = "hydrate")]
        {
            let Some(user) = current.user else {
                return;
            };
            let token = current.token;
            leptos::task::spawn_local(async move {
                if let Some(fetched) =
                    crate::net::api::fetch_user_profile(token.as_deref(), &user.id).await
                {
                    profile.set(Some(fetched));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current;
        }
    });

    view! {
        <div class="profile-page">
            <h2>"Profile"</h2>
            {move || {
                match profile.get().or_else(|| session.get().user) {
                    Some(user) => {
                        view! {
                            <div class="profile-page__card">
                                <p class="profile-page__name">{user.name}</p>
                                <p class="profile-page__role">{format!("Role: {}", user.role)}</p>
                            </div>
                        }
                            .into_any()
                    }
                    None => view! { <p>"Not signed in."</p> }.into_any(),
                }
            }}
        </div>
    }
}
