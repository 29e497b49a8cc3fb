use super::*;

// =============================================================
// verify_outcome
// =============================================================

#[test]
fn verify_outcome_authenticated_with_user() {
    let out = verify_outcome(serde_json::json!({
        "authenticated": true,
        "user": {"_id": "u-1", "name": "Alice", "role": "admin"}
    }));
    assert!(out.authenticated);
    let user = out.user.expect("user payload");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, "admin");
    assert!(user.token.is_none());
}

#[test]
fn verify_outcome_carries_rotated_token() {
    let out = verify_outcome(serde_json::json!({
        "authenticated": true,
        "user": {"_id": "u-1", "name": "Alice", "role": "user", "token": "tok-new"}
    }));
    assert_eq!(out.user.and_then(|u| u.token).as_deref(), Some("tok-new"));
}

#[test]
fn verify_outcome_requires_user_payload() {
    let out = verify_outcome(serde_json::json!({"authenticated": true}));
    assert_eq!(out, VerifyOutcome::unauthenticated());
}

#[test]
fn verify_outcome_not_authenticated() {
    let out = verify_outcome(serde_json::json!({"authenticated": false}));
    assert!(!out.authenticated);
    assert!(out.user.is_none());
}

#[test]
fn verify_outcome_malformed_envelope_is_negative() {
    assert_eq!(
        verify_outcome(serde_json::json!("nope")),
        VerifyOutcome::unauthenticated()
    );
    assert_eq!(
        verify_outcome(serde_json::json!({"authenticated": "yes"})),
        VerifyOutcome::unauthenticated()
    );
}

// =============================================================
// profile_from_envelope
// =============================================================

#[test]
fn profile_envelope_success_with_data() {
    let user = profile_from_envelope(serde_json::json!({
        "success": true,
        "data": {"_id": "u-1", "name": "Alice", "role": "user"}
    }))
    .expect("profile");
    assert_eq!(user.name, "Alice");
}

#[test]
fn profile_envelope_failure_ignores_data() {
    let user = profile_from_envelope(serde_json::json!({
        "success": false,
        "data": {"_id": "u-1", "name": "Alice", "role": "user"}
    }));
    assert!(user.is_none());
}

#[test]
fn profile_envelope_success_without_data_is_absent() {
    assert!(profile_from_envelope(serde_json::json!({"success": true})).is_none());
}

#[test]
fn profile_envelope_malformed_is_absent() {
    assert!(profile_from_envelope(serde_json::json!([1, 2, 3])).is_none());
}

// =============================================================
// create_ticket_outcome
// =============================================================

#[test]
fn create_with_payload_yields_created() {
    let out = create_ticket_outcome(
        true,
        Some(serde_json::json!({
            "ticket": {
                "_id": "t-1",
                "title": "VPN down",
                "description": "Cannot connect since 9am",
                "createdAt": "2025-06-01T09:12:00Z"
            }
        })),
    );
    match out {
        CreateTicketOutcome::Created(ticket) => {
            assert_eq!(ticket.id, "t-1");
            // number may still be unassigned at creation time
            assert!(ticket.ticket_number.is_none());
        }
        other => panic!("expected Created, got {other:?}"),
    }
}

#[test]
fn create_without_payload_requests_refetch() {
    let out = create_ticket_outcome(true, Some(serde_json::json!({"message": "queued"})));
    assert_eq!(out, CreateTicketOutcome::Refetch);
}

#[test]
fn create_http_error_carries_server_message() {
    let out = create_ticket_outcome(
        false,
        Some(serde_json::json!({"message": "Title required"})),
    );
    assert_eq!(out, CreateTicketOutcome::Failed("Title required".to_owned()));
}

#[test]
fn create_http_error_without_message_uses_fallback() {
    let out = create_ticket_outcome(false, Some(serde_json::json!({})));
    assert_eq!(
        out,
        CreateTicketOutcome::Failed("Ticket creation failed".to_owned())
    );
}

#[test]
fn create_malformed_error_body_uses_fallback() {
    let out = create_ticket_outcome(false, Some(serde_json::Value::Null));
    assert_eq!(
        out,
        CreateTicketOutcome::Failed("Ticket creation failed".to_owned())
    );
}

#[test]
fn create_unreadable_body_is_failure_even_on_success_status() {
    let out = create_ticket_outcome(true, None);
    assert_eq!(
        out,
        CreateTicketOutcome::Failed("Error creating ticket".to_owned())
    );
}

// =============================================================
// logout
// =============================================================

/// Drive a future that must resolve without suspending. The logout future
/// has no await points outside the browser, so one poll settles it.
#[cfg(not(feature = "hydrate"))]
fn poll_once<F: core::future::Future>(fut: F) -> F::Output {
    let mut fut = core::pin::pin!(fut);
    let waker = core::task::Waker::noop();
    let mut cx = core::task::Context::from_waker(waker);
    match fut.as_mut().poll(&mut cx) {
        core::task::Poll::Ready(out) => out,
        core::task::Poll::Pending => panic!("future did not resolve in one poll"),
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn logout_clears_session_regardless_of_remote_outcome() {
    use leptos::prelude::{GetUntracked, RwSignal, Update};

    let session = RwSignal::new(crate::state::session::SessionState::default());
    session.update(|s| {
        s.set_auth(
            User {
                id: "u-1".to_owned(),
                name: "Alice".to_owned(),
                role: "user".to_owned(),
                token: None,
            },
            Some("tok-1".to_owned()),
        );
    });

    // No remote round-trip happens here at all; the local clear must not
    // depend on one.
    assert!(poll_once(logout(session)));

    let state = session.get_untracked();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
}

// =============================================================
// api_url
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/tickets");
    assert!(url.ends_with("/tickets"));
    assert!(!url.contains("//tickets"));
}
