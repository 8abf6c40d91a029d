/// Completion-service trait and the Ollama HTTP client.
pub mod completion;
/// Fixed QA instruction template.
pub mod prompt;

pub use completion::{generate_ai_scenarios, CompletionService, OllamaClient, OllamaConfig};
