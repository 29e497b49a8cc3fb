use super::*;

fn ticket(id: &str, number: Option<u64>) -> Ticket {
    Ticket {
        id: id.to_owned(),
        title: "Printer on fire".to_owned(),
        description: "Third floor, again.".to_owned(),
        ticket_number: number,
        created_at: "2025-06-01T12:00:00Z".to_owned(),
    }
}

#[test]
fn default_list_is_empty() {
    let state = TicketsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(!state.submit_pending);
}

#[test]
fn set_list_replaces_items_and_clears_loading() {
    let mut state = TicketsState::default();
    state.loading = true;
    state.items.push(ticket("t-old", Some(1)));

    state.set_list(vec![ticket("t-1", Some(2)), ticket("t-2", None)]);

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "t-1");
    assert!(!state.loading);
}

#[test]
fn prepend_inserts_at_head() {
    let mut state = TicketsState::default();
    state.set_list(vec![ticket("t-1", Some(1))]);

    state.prepend(ticket("t-2", None));

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "t-2");
    // visible immediately even before the backend assigns a number
    assert!(state.items[0].ticket_number.is_none());
}

#[test]
fn prepend_replaces_existing_copy_by_id() {
    let mut state = TicketsState::default();
    state.set_list(vec![ticket("t-1", None), ticket("t-2", Some(7))]);

    state.prepend(ticket("t-1", Some(9)));

    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].ticket_number, Some(9));
}

#[test]
fn prepend_clears_submit_pending() {
    let mut state = TicketsState::default();
    state.submit_pending = true;
    state.prepend(ticket("t-1", None));
    assert!(!state.submit_pending);
}
