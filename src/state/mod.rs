//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `tickets`) so individual components
//! can depend on small focused models. Each model is a plain struct held in
//! an `RwSignal` provided via context by the root `App` component — there is
//! no ambient global store; every reader and writer goes through the signal
//! it was handed.

pub mod session;
pub mod tickets;
