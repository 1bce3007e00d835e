//! Password generation route.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::error::AppError;
use crate::password::PasswordOptions;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PasswordPayload {
    pub password: String,
    /// Length in characters
    pub length: usize,
}

/// Generate a password from the JSON options object in the request body.
#[instrument(name = "password::generate", skip_all)]
pub async fn generate(
    State(state): State<AppState>,
    Json(params): Json<Map<String, Value>>,
) -> Result<Json<PasswordPayload>, AppError> {
    let options = PasswordOptions::from_params(&params)?;
    let password = state.passwords.generate(&options, &mut rand::rng())?;

    let length = password.chars().count();
    tracing::debug!(
        passphrase = options.use_passphrase,
        special = options.allow_special_chars,
        length,
        "Generated password"
    );

    Ok(Json(PasswordPayload { password, length }))
}
