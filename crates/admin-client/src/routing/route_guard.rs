use crate::Route;

use log::debug;
use tokio::sync::watch;

/// Gates guarded routes on the session's authentication flag.
#[derive(Clone)]
pub struct RouteGuard {
    authenticated: watch::Receiver<bool>,
}

impl RouteGuard {
    pub fn new(authenticated: watch::Receiver<bool>) -> Self {
        Self { authenticated }
    }

    pub fn can_activate(&self, route: &Route) -> bool {
        !route.is_guarded() || *self.authenticated.borrow()
    }

    /// The route to actually show: `route` when allowed, otherwise login.
    pub fn resolve(&self, route: Route) -> Route {
        if self.can_activate(&route) {
            route
        } else {
            debug!("Blocked unauthenticated access to {}", route);
            Route::Login
        }
    }
}
