//! Health check endpoint for container orchestration.
//!
//! Liveness only: returns 200 OK whenever the process can answer HTTP. It
//! never touches the placeholder upstream.

pub async fn health() -> &'static str {
    "ok"
}
