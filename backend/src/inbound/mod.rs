//! Inbound adapters translating external requests into directory service
//! calls while keeping framework details at the edge.

pub mod http;
