//! Reusable UI components.

pub mod navbar;
pub mod ticket_card;
