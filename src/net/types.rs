//! Wire types for the ticketing API.

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
///
/// `role` feeds the single authorization branch in the client (the
/// admin-only navigation link). `token` is present when the server rotates
/// the bearer credential during verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A support ticket.
///
/// `ticket_number` is assigned asynchronously by the backend: a ticket is
/// visible in the list the moment it is created, but is not navigable until
/// the number arrives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "ticketNumber", default, skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<u64>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// `GET /auth/verify` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

/// `GET /users/profile/{id}` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct ProfileEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<User>,
}

/// `GET /tickets` response envelope.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TicketListResponse {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// `POST /tickets` response envelope. Carries either the created ticket or
/// an error message, depending on status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateTicketResponse {
    #[serde(default)]
    pub ticket: Option<Ticket>,
    #[serde(default)]
    pub message: Option<String>,
}
