//! Search endpoint access: request construction and response retrieval.

mod client;

pub use client::SearchClient;
