//! Index route: liveness check and endpoint listing.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Routes advertised on the index, with descriptions
const ENDPOINTS: [(&str, &str); 3] = [
    ("/", "Initial route. Lists available endpoints."),
    ("/generate-password/", "Generate a random password."),
    ("/placeholders/", "Get a random placeholder."),
];

#[derive(Debug, Serialize)]
pub struct IndexPayload {
    pub message: String,
    pub base_url: String,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Welcome payload listing the available endpoints.
pub async fn index(State(state): State<AppState>) -> Json<IndexPayload> {
    Json(IndexPayload {
        message: state.config.site.welcome_message.clone(),
        base_url: state.config.public_base_url(),
        endpoints: ENDPOINTS.into_iter().collect(),
    })
}
