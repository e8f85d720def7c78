//! Shared utilities for stockchat
//!
//! Logging setup and environment-variable helpers used by the library and the
//! CLI.

pub mod env;
pub mod logging;

pub use env::{env_or, env_parse, load_dotenv};
pub use logging::{DEFAULT_FILTER, init_tracing, init_tracing_with};
