//! Application layer services implementing business logic.
//!
//! Services own the in-memory state and expose a synchronous API for the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation, lookup and counters

pub mod services;
