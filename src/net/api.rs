//! REST API helpers for communicating with the ticketing backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sent with
//! same-origin credentials (cookies) and an `Authorization: Bearer` header
//! whenever a token is held. Server-side (SSR): stubs returning
//! `None`/negative outcomes since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and malformed envelopes are all
//! caught here and normalized to `Option`/outcome values — callers never
//! see a panic or an unhandled error, so auth and ticket fetch failures
//! degrade UI behavior without crashing hydration. Response classification
//! lives in the ungated helpers at the bottom of this module so it can be
//! tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use leptos::prelude::GetUntracked;

use super::types::{CreateTicketResponse, ProfileEnvelope, Ticket, User, VerifyResponse};
use crate::state::session::SessionState;

/// Outcome of a session verification call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyOutcome {
    pub authenticated: bool,
    pub user: Option<User>,
}

impl VerifyOutcome {
    /// The normalized negative result shared by every failure class.
    pub fn unauthenticated() -> Self {
        Self { authenticated: false, user: None }
    }
}

/// Outcome of a ticket creation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateTicketOutcome {
    /// 2xx with the created ticket in the body: prepend it, no re-fetch.
    Created(Ticket),
    /// 2xx without a ticket payload: the caller should re-fetch the list.
    Refetch,
    /// Non-2xx or transport failure, with the message to surface.
    Failed(String),
}

/// Verify the session with the backend via `GET /auth/verify`.
///
/// A positive response installs the returned identity into `session`
/// (keeping the held token unless the server rotated it); any other
/// response, transport failure, or malformed envelope resolves to
/// [`VerifyOutcome::unauthenticated`] and mutates nothing — whether a
/// negative result should clear the session is the caller's decision.
///
/// Responses are sequenced through the session store: if a newer
/// verification settled while this one was in flight, the stale result is
/// discarded and `None` is returned so the caller acts on nothing.
pub async fn verify(session: RwSignal<SessionState>) -> Option<VerifyOutcome> {
    #[cfg(feature = "hydrate")]
    {
        let (seq, token) =
            session.try_update(|s| (s.begin_verify(), s.token.clone()))?;

        let req = with_auth(
            gloo_net::http::Request::get(&api_url("/auth/verify"))
                .credentials(web_sys::RequestCredentials::Include),
            token.as_deref(),
        );

        let outcome = match req.send().await {
            Ok(resp) => match resp.json::<serde_json::Value>().await {
                Ok(body) => verify_outcome(body),
                Err(_) => VerifyOutcome::unauthenticated(),
            },
            Err(e) => {
                leptos::logging::warn!("auth verification failed: {e}");
                VerifyOutcome::unauthenticated()
            }
        };

        let applied = session
            .try_update(|s| s.apply_verify(seq, outcome.user.clone()))
            .unwrap_or(false);

        applied.then_some(outcome)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        None
    }
}

/// Log out: best-effort remote invalidation via `POST /auth/logout`,
/// unconditional local clear. A user can always log out locally, whatever
/// the network does. Always reports success.
pub async fn logout(session: RwSignal<SessionState>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let token = session.try_get_untracked().and_then(|s| s.token);
        let req = with_auth(
            gloo_net::http::Request::post(&api_url("/auth/logout"))
                .credentials(web_sys::RequestCredentials::Include)
                .header("Content-Type", "application/json"),
            token.as_deref(),
        );
        if let Err(e) = req.send().await {
            leptos::logging::warn!("remote logout failed: {e}");
        }
    }

    // Always clear local state, even when the remote call fails.
    session.try_update(SessionState::logout);
    true
}

/// Fetch a user's profile via `GET /users/profile/{id}`.
///
/// Returns `Some` only for a 2xx response carrying a well-formed
/// `{success: true, data}` envelope.
pub async fn fetch_user_profile(token: Option<&str>, user_id: &str) -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(&format!("/users/profile/{user_id}"));
        let req = with_auth(
            gloo_net::http::Request::get(&url)
                .credentials(web_sys::RequestCredentials::Include),
            token,
        );
        let resp = req.send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<serde_json::Value>().await.ok()?;
        profile_from_envelope(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user_id);
        None
    }
}

/// Fetch the ticket list via `GET /tickets`.
///
/// Returns `None` on transport failure or an unreadable body, in which case
/// the caller should leave its current list untouched.
pub async fn fetch_tickets(token: Option<&str>) -> Option<Vec<Ticket>> {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(
            gloo_net::http::Request::get(&api_url("/tickets"))
                .credentials(web_sys::RequestCredentials::Include),
            token,
        );
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                leptos::logging::warn!("failed to fetch tickets: {e}");
                return None;
            }
        };
        let body = resp.json::<super::types::TicketListResponse>().await.ok()?;
        Some(body.tickets)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        None
    }
}

/// Create a ticket via `POST /tickets` with `{title, description}`.
pub async fn create_ticket(
    token: Option<&str>,
    title: &str,
    description: &str,
) -> CreateTicketOutcome {
    #[cfg(feature = "hydrate")]
    {
        let req = with_auth(
            gloo_net::http::Request::post(&api_url("/tickets"))
                .credentials(web_sys::RequestCredentials::Include),
            token,
        );
        let req = match req.json(&serde_json::json!({
            "title": title,
            "description": description,
        })) {
            Ok(req) => req,
            Err(e) => return CreateTicketOutcome::Failed(e.to_string()),
        };

        match req.send().await {
            Ok(resp) => {
                let status_ok = resp.ok();
                let body = resp.json::<serde_json::Value>().await.ok();
                create_ticket_outcome(status_ok, body)
            }
            Err(e) => {
                leptos::logging::warn!("ticket creation failed: {e}");
                CreateTicketOutcome::Failed("Error creating ticket".to_owned())
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, title, description);
        CreateTicketOutcome::Failed("not available on server".to_owned())
    }
}

/// Attach the bearer header when a token is held.
#[cfg(feature = "hydrate")]
fn with_auth(
    req: gloo_net::http::RequestBuilder,
    token: Option<&str>,
) -> gloo_net::http::RequestBuilder {
    match token {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Base URL for API requests. `TICKET_API_URL` is baked in at compile time
/// when set; otherwise requests go to same-origin `/api` paths.
pub fn api_url(path: &str) -> String {
    let base = option_env!("TICKET_API_URL").unwrap_or("/api");
    format!("{}{path}", base.trim_end_matches('/'))
}

/// Classify a verify response body. Anything short of
/// `{authenticated: true, user: {...}}` is not-authenticated.
pub fn verify_outcome(body: serde_json::Value) -> VerifyOutcome {
    match serde_json::from_value::<VerifyResponse>(body) {
        Ok(VerifyResponse { authenticated: true, user: Some(user) }) => VerifyOutcome {
            authenticated: true,
            user: Some(user),
        },
        _ => VerifyOutcome::unauthenticated(),
    }
}

/// Extract the profile from a `{success, data}` envelope.
pub fn profile_from_envelope(body: serde_json::Value) -> Option<User> {
    match serde_json::from_value::<ProfileEnvelope>(body) {
        Ok(ProfileEnvelope { success: true, data: Some(user) }) => Some(user),
        _ => None,
    }
}

/// Classify a ticket creation response by status and body. `body` is `None`
/// when the response could not be read as JSON at all, which is a failure
/// regardless of status.
pub fn create_ticket_outcome(
    status_ok: bool,
    body: Option<serde_json::Value>,
) -> CreateTicketOutcome {
    let Some(body) = body else {
        return CreateTicketOutcome::Failed("Error creating ticket".to_owned());
    };
    let parsed = serde_json::from_value::<CreateTicketResponse>(body).unwrap_or_default();
    if status_ok {
        match parsed.ticket {
            Some(ticket) => CreateTicketOutcome::Created(ticket),
            None => CreateTicketOutcome::Refetch,
        }
    } else {
        CreateTicketOutcome::Failed(
            parsed
                .message
                .unwrap_or_else(|| "Ticket creation failed".to_owned()),
        )
    }
}
