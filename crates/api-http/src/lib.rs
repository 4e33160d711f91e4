//! HTTP API Layer
//!
//! Exposes the queue registry over JSON request/response endpoints.

pub mod error;
pub mod handler;
pub mod server;
pub mod types;


pub use handler::ApiState;
pub use server::{create_router, HttpServer, HttpServerConfig};
