//! Placeholder route: proxies a random post from the placeholder upstream.

use axum::{extract::State, Json};
use rand::Rng;
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Fetch a post with a random id in `1..=max_post_id` and return it verbatim.
#[instrument(name = "placeholders::random", skip_all, fields(post_id))]
pub async fn random(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let placeholders = &state.config.placeholders;
    let post_id = rand::rng().random_range(1..=placeholders.max_post_id);
    tracing::Span::current().record("post_id", post_id);

    let post = state.outbound.get(placeholders.post_url(post_id)).await?;
    Ok(Json(post))
}
