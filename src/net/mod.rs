//! Network layer: REST API helpers and the wire types they exchange.

pub mod api;
pub mod types;
