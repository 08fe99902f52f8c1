//! # memlink
//!
//! A small in-memory URL shortener built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link records and counter snapshots
//! - **Application Layer** ([`application`]) - The mapping engine ([`LinkService`])
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Utilities** ([`utils`]) - Deterministic short code generation
//!
//! ## Features
//!
//! - Deterministic 7-character base-62 codes derived from the URL
//! - Idempotent shortening: one code per long URL
//! - Collision resolution by suffixing, with no attempt cap
//! - Redirect and shortening counters
//!
//! Nothing is persisted; all links are lost when the process exits.
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=8080 HOST=localhost
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -d '{"long_url":"https://www.google.com"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use application::services::LinkService;
pub use error::AppError;
pub use state::AppState;
