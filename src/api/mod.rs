//! HTTP API layer for request/response handling.
//!
//! This layer rejects malformed requests at the boundary and adapts the rest
//! to [`LinkService`](crate::application::services::LinkService) calls.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration and composition

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
