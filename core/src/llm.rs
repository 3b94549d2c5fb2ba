pub mod client;
pub mod tools;

pub use client::{CompletionClient, CompletionRequest, OpenAiClient, OpenAiConfig};
pub use tools::connections::{IdAllocator, suggest_connections};
pub use tools::ideas::generate_ideas;
