//! Domain layer containing the core data model.
//!
//! The domain layer has no dependencies on the HTTP layer. The mapping engine
//! that owns these entities lives in [`crate::application::services`].
//!
//! - [`entities`] - Short link records and statistics snapshots

pub mod entities;
