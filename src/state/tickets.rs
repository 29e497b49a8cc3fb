#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use crate::net::types::Ticket;

/// Shared ticket list state for the tickets page.
#[derive(Clone, Debug, Default)]
pub struct TicketsState {
    pub items: Vec<Ticket>,
    pub loading: bool,
    pub submit_pending: bool,
}

impl TicketsState {
    /// Replace the list with a fresh server snapshot.
    pub fn set_list(&mut self, items: Vec<Ticket>) {
        self.items = items;
        self.loading = false;
    }

    /// Insert a newly created ticket at the head of the list, without
    /// waiting for a re-fetch. If the server already pushed a copy with the
    /// same id it is replaced in place instead of duplicated.
    pub fn prepend(&mut self, ticket: Ticket) {
        if let Some(existing) = self.items.iter_mut().find(|t| t.id == ticket.id) {
            *existing = ticket;
        } else {
            self.items.insert(0, ticket);
        }
        self.submit_pending = false;
    }
}
