pub mod openai_compatible_llm;
pub mod stateless_llm_interface;
pub mod types;

pub use openai_compatible_llm::OpenAICompatibleLLM;
pub use stateless_llm_interface::StatelessLLMInterface;
pub use types::{CompletionOptions, Message};
