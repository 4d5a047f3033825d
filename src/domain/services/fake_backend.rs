use std::sync::Mutex;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use futures::future;

use crate::domain::models::Backend;
use crate::domain::models::ChatCompletionRequest;
use crate::domain::models::CompletionRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    ListModels(),
    Completion(CompletionRequest),
    ChatCompletion(ChatCompletionRequest),
}

/// Canned backend recording every call it receives. A `None` reply makes the
/// matching call fail.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Mutex<Vec<Call>>,
    pub models: Option<Vec<String>>,
    pub models_never_answer: bool,
    pub completion: Option<String>,
    pub chat_completion: Option<String>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        return self.calls.lock().unwrap().clone();
    }
}

#[async_trait]
impl Backend for FakeBackend {
    #[allow(clippy::implicit_return)]
    async fn list_models(&self) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(Call::ListModels());
        if self.models_never_answer {
            future::pending::<()>().await;
        }
        if let Some(models) = &self.models {
            return Ok(models.clone());
        }
        bail!("model list unavailable");
    }

    #[allow(clippy::implicit_return)]
    async fn create_completion(&self, req: CompletionRequest) -> Result<String> {
        self.calls.lock().unwrap().push(Call::Completion(req));
        if let Some(text) = &self.completion {
            return Ok(text.to_string());
        }
        bail!("completion unavailable");
    }

    #[allow(clippy::implicit_return)]
    async fn create_chat_completion(&self, req: ChatCompletionRequest) -> Result<String> {
        self.calls.lock().unwrap().push(Call::ChatCompletion(req));
        if let Some(text) = &self.chat_completion {
            return Ok(text.to_string());
        }
        bail!("chat completion unavailable");
    }
}
