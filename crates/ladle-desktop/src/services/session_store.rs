//! Desktop token persistence using the OS keyring.
//!
//! Only the bearer token pair is durable; identity fields are re-fetched
//! from the server on every start.

use keyring::Entry;

use ladle_core::error::{ApiError, Result};
use ladle_core::models::AuthTokens;
use ladle_core::session::TokenPersistence;

const KEYRING_SERVICE_NAME: &str = "ladle";
const KEYRING_TOKENS_USERNAME: &str = "session_tokens";

/// Keyring-backed token store (`keyring` crate).
#[derive(Debug, Clone)]
pub struct KeyringTokenStore {
    service_name: String,
    username: String,
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self {
            service_name: KEYRING_SERVICE_NAME.to_string(),
            username: KEYRING_TOKENS_USERNAME.to_string(),
        }
    }
}

impl KeyringTokenStore {
    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service_name, &self.username)
            .map_err(|error| ApiError::SecureStorage(error.to_string()))
    }
}

impl TokenPersistence for KeyringTokenStore {
    fn load_tokens(&self) -> Result<Option<AuthTokens>> {
        let entry = self.entry()?;
        match entry.get_password() {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(error) => Err(ApiError::SecureStorage(error.to_string())),
        }
    }

    fn save_tokens(&self, tokens: &AuthTokens) -> Result<()> {
        let serialized = serde_json::to_string(tokens)?;
        self.entry()?
            .set_password(&serialized)
            .map_err(|error| ApiError::SecureStorage(error.to_string()))
    }

    fn clear_tokens(&self) -> Result<()> {
        let entry = self.entry()?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(error) => Err(ApiError::SecureStorage(error.to_string())),
        }
    }
}
