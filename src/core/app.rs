//! Application identity from Cargo.toml.
//!
//! Single source of truth for the app name and the user-agent sent upstream.

/// Application name (from Cargo.toml `package.name`).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// User-agent sent with every search request.
pub const USER_AGENT: &str = "OllamaSearch/0.1";
