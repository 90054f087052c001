//! Configuration module for Netblocks
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Upstream TXT resolution endpoint
//! - `server`: HTTP API binding
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
