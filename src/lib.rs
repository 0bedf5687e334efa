//! Health-check Lambda for the application's API Gateway integration.
//!
//! The only logic here is [`handler::handle_request`]: it logs the incoming
//! request together with its invocation context and acknowledges with a fixed
//! `200 OK!` response. Event-envelope parsing, concurrency, and timeouts are
//! the runtime's concern, not this crate's.

pub mod handler;

pub use crate::handler::handle_request;
