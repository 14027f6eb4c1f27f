pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod query;
pub mod render;
pub mod search;
pub mod util;
