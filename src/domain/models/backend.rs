use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::Message;

pub const MAX_TOKENS: u32 = 250;

/// A prompt for the legacy text completion endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// A prompt for the chat completion endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// The user's submission paired with the parameters selected at the time it
/// was made.
#[derive(Clone, Debug, PartialEq)]
pub struct Prompt {
    pub text: String,
    pub model: String,
    pub temperature: f64,
}

#[async_trait]
pub trait Backend {
    /// Lists all model identifiers available to the configured credentials.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Requests a legacy text completion and returns the text of the first
    /// choice, untouched.
    async fn create_completion(&self, req: CompletionRequest) -> Result<String>;

    /// Requests a chat completion and returns the message content of the first
    /// choice.
    async fn create_chat_completion(&self, req: ChatCompletionRequest) -> Result<String>;
}

pub type SharedBackend = Arc<dyn Backend + Send + Sync>;
