mod nav;
#[allow(clippy::module_inception)]
mod routes;

pub use nav::{use_nav, Nav, Page};
pub use routes::AppRoutes;
