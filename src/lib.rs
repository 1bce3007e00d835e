//! Keysmith: a small HTTP service that generates passwords and proxies
//! placeholder posts from a third-party API.
//!
//! The binary in `main.rs` wires configuration, logging and the server;
//! everything it uses is exposed here so integration tests can build the
//! same router.

pub mod config;
pub mod error;
pub mod middleware;
pub mod outbound;
pub mod password;
pub mod routes;
pub mod server;
pub mod state;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
