#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;

use anyhow::Result;

use crate::domain::models::bootstrap_prompt;
use crate::domain::models::Backend;
use crate::domain::models::ChatCompletionRequest;
use crate::domain::models::CompletionRequest;
use crate::domain::models::Message;
use crate::domain::models::Prompt;
use crate::domain::models::MAX_TOKENS;

/// Model identifiers containing this marker are served by the chat
/// completion endpoint.
pub const CHAT_MODEL_MARKER: &str = "3.5";

pub const BOOTSTRAP_TEMPERATURE: f64 = 0.5;

pub fn is_chat_model(model: &str) -> bool {
    return model.contains(CHAT_MODEL_MARKER);
}

/// Replaces only the first blank line separator of a legacy completion.
pub fn collapse_first_blank_line(text: &str) -> String {
    return text.replacen("\n\n", "\n", 1);
}

/// Requests a single reply for the submitted text. Only the submitted text is
/// sent, earlier turns of the conversation are not replayed.
pub async fn dispatch(backend: &(dyn Backend + Send + Sync), prompt: Prompt) -> Result<String> {
    if is_chat_model(&prompt.model) {
        return backend
            .create_chat_completion(ChatCompletionRequest {
                model: prompt.model,
                messages: vec![Message::user(&prompt.text)],
                max_tokens: MAX_TOKENS,
                temperature: prompt.temperature,
            })
            .await;
    }

    let text = backend
        .create_completion(CompletionRequest {
            model: prompt.model,
            prompt: prompt.text,
            max_tokens: MAX_TOKENS,
            temperature: prompt.temperature,
        })
        .await?;

    return Ok(collapse_first_blank_line(&text));
}

/// The greeting requested at startup. Always uses the legacy completion
/// endpoint, whatever the model family.
pub async fn bootstrap(backend: &(dyn Backend + Send + Sync), model: &str) -> Result<String> {
    let text = backend
        .create_completion(CompletionRequest {
            model: model.to_string(),
            prompt: bootstrap_prompt(),
            max_tokens: MAX_TOKENS,
            temperature: BOOTSTRAP_TEMPERATURE,
        })
        .await?;

    return Ok(collapse_first_blank_line(&text));
}
