pub mod routes;

pub use routes::{current_path, PathMatcher, Route, RouteError};
