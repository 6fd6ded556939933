pub mod config;
pub mod error;
pub mod middleware;

pub use config::{Link, LinkKind, SiteConfig};
pub use error::ConfigError;
pub use middleware::{ga, Middleware};
