#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Client-held session: the current authenticated identity and credential.
///
/// Held in an `RwSignal<SessionState>` provided via context. The only
/// mutators are [`SessionState::set_auth`] and [`SessionState::logout`],
/// both total and synchronous, so `is_authenticated == user.is_some()`
/// holds after every mutation. Tab-lifetime only; nothing is persisted.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True while the newest verification request is in flight.
    pub loading: bool,
    verify_seq: u64,
    applied_seq: u64,
}

impl SessionState {
    /// Install an authenticated identity and its credential.
    pub fn set_auth(&mut self, user: User, token: Option<String>) {
        self.user = Some(user);
        self.token = token;
        self.is_authenticated = true;
    }

    /// Clear the session. Total: safe to call on an already-empty session.
    pub fn logout(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    /// Issue a sequence number for a new verification request and mark the
    /// session as loading.
    pub fn begin_verify(&mut self) -> u64 {
        self.verify_seq += 1;
        self.loading = true;
        self.verify_seq
    }

    /// Apply a verification response. Responses are sequenced: anything not
    /// newer than the last applied response is rejected, so a slow stale
    /// verify can never overwrite fresher state.
    ///
    /// A positive outcome installs the returned identity, preferring a token
    /// rotated by the server over the one already held. A negative outcome
    /// (`user` is `None`) settles the request without clearing the session;
    /// clearing is the caller's explicit decision.
    ///
    /// Returns `true` if the response was applied, `false` if stale.
    pub fn apply_verify(&mut self, seq: u64, user: Option<User>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        if seq == self.verify_seq {
            self.loading = false;
        }
        if let Some(user) = user {
            let token = user.token.clone().or_else(|| self.token.clone());
            self.set_auth(user, token);
        }
        true
    }
}
