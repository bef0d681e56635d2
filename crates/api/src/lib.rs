//! Movies catalog API server library.
//!
//! Exposes the core building blocks (config, state, error handling,
//! extractors, representations, routes) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod query;
pub mod representation;
pub mod router;
pub mod routes;
pub mod state;
