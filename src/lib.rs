pub mod framework;
pub mod models;
pub mod site;

// Re-export commonly used types and traits
pub use crate::framework::{Blog, DryRun};
pub use crate::models::{ga, ConfigError, Link, LinkKind, Middleware, SiteConfig};
