//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::outbound::{OutboundError, OutboundRequester};
use crate::password::{PasswordGenerator, WordList, WordListError};

/// Failure while assembling state from configuration
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to load passphrase word list: {0}")]
    WordList(#[from] WordListError),

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] OutboundError),
}

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Immutable after startup: handlers only read configuration and call the
/// stateless password generator and outbound requester.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub passwords: PasswordGenerator,
    pub outbound: OutboundRequester,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        passwords: PasswordGenerator,
        outbound: OutboundRequester,
    ) -> Self {
        Self {
            config: Arc::new(config),
            passwords,
            outbound,
        }
    }

    /// Build the word source and HTTP client described by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, StateError> {
        let words = match &config.passphrase.word_list {
            Some(path) => WordList::from_file(path)?,
            None => WordList::embedded(),
        };
        tracing::debug!(words = words.len(), "Loaded passphrase dictionary");

        let passwords = PasswordGenerator::new(Arc::new(words), config.password.max_length);
        let outbound = OutboundRequester::new(&config.outbound)?;
        Ok(Self::new(config, passwords, outbound))
    }
}
