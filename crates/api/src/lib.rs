//! HTTP API: server, routing, and request/response mapping.

pub mod app;
pub mod credentials;
pub mod middleware;
pub mod session;
