//! Authentication state for the console.
//!
//! The store owns the persisted token and user record and publishes both on
//! independent watch channels. Storage failures never block a transition:
//! they are logged and swallowed.

use crate::session::auth_api;
use crate::{
    ADMIN_INFO_KEY, AUTH_TOKEN_KEY, Client, ClientResult, Navigator, Route, SessionStorage,
};

use admin_core::{AdminUser, Credentials};

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::watch;

#[derive(Clone)]
pub struct SessionStore {
    client: Client,
    storage: Arc<dyn SessionStorage>,
    navigator: Navigator,
    authenticated_tx: Arc<watch::Sender<bool>>,
    user_tx: Arc<watch::Sender<Option<AdminUser>>>,
}

impl SessionStore {
    /// A store that starts unauthenticated. Call [`restore_session`] once at
    /// startup to pick up a persisted session.
    ///
    /// [`restore_session`]: SessionStore::restore_session
    pub fn new(client: Client, storage: Arc<dyn SessionStorage>, navigator: Navigator) -> Self {
        let (authenticated_tx, _) = watch::channel(false);
        let (user_tx, _) = watch::channel(None);
        Self {
            client,
            storage,
            navigator,
            authenticated_tx: Arc::new(authenticated_tx),
            user_tx: Arc::new(user_tx),
        }
    }

    /// Log in and persist the session.
    ///
    /// On an invalid response nothing is persisted and the store stays
    /// unauthenticated.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<AdminUser> {
        credentials.validate().into_result()?;

        let response = auth_api::login(&self.client, credentials).await?;
        let (token, user) = response.into_session()?;

        self.persist(AUTH_TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(json) => self.persist(ADMIN_INFO_KEY, &json),
            Err(e) => warn!("Failed to serialize admin info: {}", e),
        }

        self.client.set_token(Some(token));
        self.authenticated_tx.send_replace(true);
        self.user_tx.send_replace(Some(user.clone()));
        info!("Logged in as {} ({})", user.name, user.email);

        self.navigator.navigate(Route::Dashboard);
        Ok(user)
    }

    /// Clear the session. Safe to call repeatedly.
    pub fn logout(&self) {
        self.forget(AUTH_TOKEN_KEY);
        self.forget(ADMIN_INFO_KEY);

        self.client.set_token(None);
        self.authenticated_tx.send_replace(false);
        self.user_tx.send_replace(None);
        info!("Logged out");

        self.navigator.navigate(Route::Login);
    }

    /// Rebuild in-memory state from storage.
    ///
    /// A corrupt user record drops only the user; the token still counts.
    pub fn restore_session(&self) {
        let token = match self.storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Failed to read stored token: {}", e);
                None
            }
        };

        let Some(token) = token else {
            debug!("No stored session");
            self.client.set_token(None);
            self.authenticated_tx.send_replace(false);
            self.user_tx.send_replace(None);
            return;
        };

        self.client.set_token(Some(token));
        self.authenticated_tx.send_replace(true);

        let user = match self.storage.get(ADMIN_INFO_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<AdminUser>(&json) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Stored admin info is corrupt, discarding it: {}", e);
                    self.forget(ADMIN_INFO_KEY);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read stored admin info: {}", e);
                None
            }
        };

        debug!("Restored session (user known: {})", user.is_some());
        self.user_tx.send_replace(user);
    }

    /// Ask the backend whether `token` is still valid. Failures count as
    /// invalid.
    pub async fn validate_token(&self, token: &str) -> bool {
        match auth_api::validate_token(&self.client, token).await {
            Ok(valid) => valid,
            Err(e) => {
                debug!("Token validation failed: {}", e);
                false
            }
        }
    }

    /// The persisted token, if any.
    pub fn token(&self) -> Option<String> {
        match self.storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read stored token: {}", e);
                None
            }
        }
    }

    pub fn authenticated(&self) -> watch::Receiver<bool> {
        self.authenticated_tx.subscribe()
    }

    pub fn current_user(&self) -> watch::Receiver<Option<AdminUser>> {
        self.user_tx.subscribe()
    }

    pub fn is_authenticated(&self) -> bool {
        *self.authenticated_tx.borrow()
    }

    pub fn user(&self) -> Option<AdminUser> {
        self.user_tx.borrow().clone()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            warn!("Failed to persist {}: {}", key, e);
        }
    }

    fn forget(&self, key: &str) {
        if let Err(e) = self.storage.remove(key) {
            warn!("Failed to remove {}: {}", key, e);
        }
    }
}
