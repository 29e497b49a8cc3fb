//! Routed page components.

pub mod admin;
pub mod login;
pub mod profile;
pub mod signup;
pub mod ticket_detail;
pub mod tickets;
