#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Backend;
use crate::domain::models::ChatCompletionRequest;
use crate::domain::models::CompletionRequest;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Model {
    id: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ModelListResponse {
    data: Vec<Model>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TextCompletionRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TextCompletionChoiceResponse {
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TextCompletionResponse {
    choices: Vec<TextCompletionChoiceResponse>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ChatRequest {
    model: String,
    messages: Vec<MessageRequest>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatChoiceResponse {
    message: ChatMessageResponse,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoiceResponse>,
}

/// OpenAI API client. Built once at startup and shared by every request, so
/// the underlying connection pool is reused.
pub struct OpenAI {
    client: reqwest::Client,
    url: String,
    token: String,
    organization: String,
}

impl OpenAI {
    pub fn new(url: &str, token: &str, organization: &str) -> OpenAI {
        return OpenAI {
            client: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            organization: organization.to_string(),
        };
    }

    pub fn from_config() -> OpenAI {
        return OpenAI::new(
            &Config::get(ConfigKey::OpenAiURL),
            &Config::get(ConfigKey::OpenAiToken),
            &Config::get(ConfigKey::OpenAiOrganization),
        );
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .request(method, format!("{url}{path}", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token));

        if !self.organization.is_empty() {
            req = req.header("OpenAI-Organization", &self.organization);
        }

        return req;
    }

    async fn send<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder, name: &str) -> Result<T> {
        let res = req.send().await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            tracing::error!(status = status, body = %body, "OpenAI {name} request failed");
            bail!(format!("OpenAI {name} request failed with status {status}"));
        }

        return Ok(res.json::<T>().await?);
    }
}

#[async_trait]
impl Backend for OpenAI {
    #[allow(clippy::implicit_return)]
    async fn list_models(&self) -> Result<Vec<String>> {
        let res: ModelListResponse = self
            .send(self.request(reqwest::Method::GET, "/v1/models"), "model list")
            .await?;

        let mut models: Vec<String> = res
            .data
            .iter()
            .map(|model| {
                return model.id.to_string();
            })
            .collect();

        models.sort();

        return Ok(models);
    }

    #[allow(clippy::implicit_return)]
    async fn create_completion(&self, req: CompletionRequest) -> Result<String> {
        let body = TextCompletionRequest {
            model: req.model,
            prompt: req.prompt,
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };
        tracing::debug!(body = ?body, "Completion request");

        let res: TextCompletionResponse = self
            .send(
                self.request(reqwest::Method::POST, "/v1/completions")
                    .json(&body),
                "completion",
            )
            .await?;
        tracing::debug!(body = ?res, "Completion response");

        if let Some(choice) = res.choices.into_iter().next() {
            return Ok(choice.text);
        }

        bail!("OpenAI completion response contained no choices");
    }

    #[allow(clippy::implicit_return)]
    async fn create_chat_completion(&self, req: ChatCompletionRequest) -> Result<String> {
        let body = ChatRequest {
            model: req.model,
            messages: req
                .messages
                .iter()
                .map(|message| {
                    return MessageRequest {
                        role: message.role.to_string(),
                        content: message.content.to_string(),
                    };
                })
                .collect(),
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };
        tracing::debug!(body = ?body, "Chat completion request");

        let res: ChatResponse = self
            .send(
                self.request(reqwest::Method::POST, "/v1/chat/completions")
                    .json(&body),
                "chat completion",
            )
            .await?;
        tracing::debug!(body = ?res, "Chat completion response");

        if let Some(choice) = res.choices.into_iter().next() {
            return Ok(choice.message.content);
        }

        bail!("OpenAI chat completion response contained no choices");
    }
}
