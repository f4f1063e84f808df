pub(crate) mod navigator;
pub(crate) mod route;
pub(crate) mod route_guard;

pub use navigator::Navigator;
pub use route::Route;
pub use route_guard::RouteGuard;
