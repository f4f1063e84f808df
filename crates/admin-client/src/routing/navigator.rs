use crate::Route;

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

/// Publishes the current route for the front end to render.
#[derive(Clone)]
pub struct Navigator {
    tx: Arc<watch::Sender<Route>>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn navigate(&self, route: Route) {
        debug!("Navigating to {}", route);
        self.tx.send_replace(route);
    }

    pub fn current(&self) -> Route {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.tx.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
