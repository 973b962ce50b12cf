//! Client session store.
//!
//! Holds the bearer token pair and the identity derived from it. Only the
//! tokens are durably persisted (behind [`TokenPersistence`]); identity
//! fields are re-fetched from the server on every application start. The
//! bootstrap identity fetch is a single attempt: failure purges the tokens
//! and falls back to a guest session, with no retry loop.

use std::sync::{Arc, RwLock};

use crate::error::Result;
use crate::models::{AuthTokens, Profile};

/// Durable storage for the token pair. The desktop app backs this with the
/// OS keyring; tests use the in-memory implementation.
pub trait TokenPersistence: Clone + Send + Sync + 'static {
    fn load_tokens(&self) -> Result<Option<AuthTokens>>;
    fn save_tokens(&self, tokens: &AuthTokens) -> Result<()>;
    fn clear_tokens(&self) -> Result<()>;
}

/// Shared read handle for the current token pair.
///
/// The API client holds a clone and reads the access token when attaching
/// bearer headers; the session store is the only writer besides the 401
/// refresh path.
#[derive(Debug, Clone, Default)]
pub struct TokenHandle(Arc<RwLock<Option<AuthTokens>>>);

impl TokenHandle {
    #[must_use]
    pub fn get(&self) -> Option<AuthTokens> {
        self.0.read().map(|guard| guard.clone()).unwrap_or(None)
    }

    pub fn set(&self, tokens: Option<AuthTokens>) {
        if let Ok(mut guard) = self.0.write() {
            *guard = tokens;
        }
    }

    /// Swap only the access token, keeping the refresh token. Used by the
    /// API client after a successful refresh round trip.
    pub fn set_access_token(&self, access_token: String) {
        if let Ok(mut guard) = self.0.write() {
            if let Some(tokens) = guard.as_mut() {
                tokens.access_token = access_token;
            }
        }
    }
}

/// Snapshot of the session visible to views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub tokens: Option<AuthTokens>,
    pub profile: Option<Profile>,
    pub guest: bool,
}

impl SessionState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some() && !self.guest
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.profile.as_ref().is_some_and(Profile::is_admin)
    }

    #[must_use]
    pub fn member_id(&self) -> Option<i64> {
        self.profile.as_ref().map(|profile| profile.id)
    }
}

/// Process-wide session store.
#[derive(Clone)]
pub struct SessionStore<S: TokenPersistence> {
    persistence: S,
    tokens: TokenHandle,
    profile: Option<Profile>,
    guest: bool,
}

impl<S: TokenPersistence> SessionStore<S> {
    #[must_use]
    pub fn new(persistence: S) -> Self {
        Self {
            persistence,
            tokens: TokenHandle::default(),
            profile: None,
            guest: false,
        }
    }

    /// Load persisted tokens into memory. Returns whether a token pair was
    /// found; the caller decides between the identity fetch and
    /// [`Self::set_guest`].
    pub fn restore(&mut self) -> Result<bool> {
        let stored = self.persistence.load_tokens()?;
        let found = stored.is_some();
        self.tokens.set(stored);
        Ok(found)
    }

    /// Handle shared with the API client for bearer attachment.
    #[must_use]
    pub fn token_handle(&self) -> TokenHandle {
        self.tokens.clone()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            tokens: self.tokens.get(),
            profile: self.profile.clone(),
            guest: self.guest,
        }
    }

    /// Persist a fresh token pair and update in-memory state synchronously.
    pub fn set_tokens(&mut self, tokens: AuthTokens) -> Result<()> {
        self.persistence.save_tokens(&tokens)?;
        self.tokens.set(Some(tokens));
        self.guest = false;
        Ok(())
    }

    /// Populate identity fields from a "who am I" response.
    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = Some(profile);
        self.guest = false;
    }

    /// Mark the session anonymous without a server round trip.
    pub fn set_guest(&mut self) {
        self.profile = None;
        self.guest = true;
    }

    /// Purge persisted tokens and fall back to a guest session.
    pub fn logout(&mut self) -> Result<()> {
        self.persistence.clear_tokens()?;
        self.tokens.set(None);
        self.set_guest();
        Ok(())
    }

    /// Apply the outcome of the bootstrap identity fetch: success populates
    /// the profile, failure forces logout. Single attempt by contract.
    pub fn apply_identity(&mut self, outcome: Result<Profile>) -> Result<()> {
        match outcome {
            Ok(profile) => {
                self.set_profile(profile);
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Identity fetch failed, purging session: {}", error);
                self.logout()
            }
        }
    }
}

/// In-memory token storage for tests and headless tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    tokens: Arc<RwLock<Option<AuthTokens>>>,
}

impl TokenPersistence for MemoryTokenStore {
    fn load_tokens(&self) -> Result<Option<AuthTokens>> {
        Ok(self.tokens.read().map(|guard| guard.clone()).unwrap_or(None))
    }

    fn save_tokens(&self, tokens: &AuthTokens) -> Result<()> {
        if let Ok(mut guard) = self.tokens.write() {
            *guard = Some(tokens.clone());
        }
        Ok(())
    }

    fn clear_tokens(&self) -> Result<()> {
        if let Ok(mut guard) = self.tokens.write() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::error::ApiError;
    use crate::models::Role;

    use super::*;

    fn tokens() -> AuthTokens {
        AuthTokens {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
        }
    }

    fn profile() -> Profile {
        Profile {
            id: 7,
            email: "amy@example.com".to_string(),
            nickname: "amy".to_string(),
            role: Role::User,
        }
    }

    #[test]
    fn set_tokens_persists_and_updates_memory() {
        let persistence = MemoryTokenStore::default();
        let mut store = SessionStore::new(persistence.clone());

        store.set_tokens(tokens()).unwrap();

        assert_eq!(persistence.load_tokens().unwrap(), Some(tokens()));
        assert_eq!(store.state().tokens, Some(tokens()));
        assert!(!store.state().guest);
    }

    #[test]
    fn restore_finds_previously_saved_tokens() {
        let persistence = MemoryTokenStore::default();
        persistence.save_tokens(&tokens()).unwrap();

        let mut store = SessionStore::new(persistence);
        assert!(store.restore().unwrap());
        assert_eq!(store.token_handle().get(), Some(tokens()));
    }

    #[test]
    fn bootstrap_success_populates_identity() {
        let mut store = SessionStore::new(MemoryTokenStore::default());
        store.set_tokens(tokens()).unwrap();

        store.apply_identity(Ok(profile())).unwrap();

        let state = store.state();
        assert!(state.is_authenticated());
        assert_eq!(state.member_id(), Some(7));
        assert!(!state.is_admin());
    }

    #[test]
    fn bootstrap_failure_purges_tokens_and_sets_guest() {
        let persistence = MemoryTokenStore::default();
        let mut store = SessionStore::new(persistence.clone());
        store.set_tokens(tokens()).unwrap();

        store.apply_identity(Err(ApiError::Unauthorized)).unwrap();

        let state = store.state();
        assert!(state.guest);
        assert_eq!(state.profile, None);
        assert_eq!(state.tokens, None);
        assert_eq!(persistence.load_tokens().unwrap(), None);
    }

    #[test]
    fn logout_is_idempotent_without_tokens() {
        let mut store = SessionStore::new(MemoryTokenStore::default());
        store.logout().unwrap();
        store.logout().unwrap();
        assert!(store.state().guest);
    }

    #[test]
    fn token_handle_access_swap_keeps_refresh_token() {
        let mut store = SessionStore::new(MemoryTokenStore::default());
        store.set_tokens(tokens()).unwrap();

        let handle = store.token_handle();
        handle.set_access_token("rotated".to_string());

        let current = handle.get().unwrap();
        assert_eq!(current.access_token, "rotated");
        assert_eq!(current.refresh_token, "refresh");
    }
}
