//! Shared fixtures for the wiremock-backed integration tests.

#![allow(dead_code)]

use admin_client::{Client, MemoryStorage, Navigator, Notifier, SessionStore};

use std::sync::Arc;

use wiremock::MockServer;

pub struct Harness {
    pub server: MockServer,
    pub client: Client,
    pub navigator: Navigator,
    pub notifier: Notifier,
}

impl Harness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let client = Client::new(&server.uri());
        Self {
            server,
            client,
            navigator: Navigator::default(),
            notifier: Notifier::default(),
        }
    }

    pub fn session(&self, storage: Arc<MemoryStorage>) -> SessionStore {
        SessionStore::new(self.client.clone(), storage, self.navigator.clone())
    }
}
