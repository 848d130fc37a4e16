//! ograph HTTP API
//!
//! Exposes a liveness endpoint and a graph-generation endpoint that resolves
//! a free-form complexity string, samples the growth curve, and returns it
//! rendered as a PNG.

pub mod api;

pub use api::{create_router, start_server, AppState};
