pub mod client;
pub mod prompts;
pub mod schema;

pub use client::{ChatProvider, ProviderConfig};
