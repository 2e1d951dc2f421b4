//! OpenAI chat completions client

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::ChatConfig;

const API_BASE: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct OpenAiClient {
    http: Arc<reqwest::Client>,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self {
            http: Arc::new(reqwest::Client::new()),
        }
    }

    /// Send one user message (plus the configured system message, if any)
    /// and return the first reply choice.
    pub async fn complete(&self, config: &ChatConfig, message: &str) -> Result<String> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| anyhow::anyhow!("chat API key is not configured"))?;

        let body = CompletionRequest::for_message(config, message);
        tracing::debug!(model = body.model, "requesting chat completion");

        let response = self
            .http
            .post(format!("{API_BASE}/chat/completions"))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("request failed with status {}", status.as_u16());
        }

        let completion: CompletionResponse = response.json().await?;
        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| anyhow::anyhow!("completion had no choices"))?;

        tracing::info!(chars = reply.len(), "chat completion received");
        Ok(reply)
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: &'static str,
    messages: Vec<WireMessage>,
}

impl CompletionRequest {
    fn for_message(config: &ChatConfig, message: &str) -> Self {
        let mut messages = Vec::new();
        if let Some(system) = config.system_message.as_deref().filter(|s| !s.is_empty()) {
            messages.push(WireMessage {
                role: "system",
                content: system.to_string(),
            });
        }
        messages.push(WireMessage {
            role: "user",
            content: message.to_string(),
        });
        Self {
            model: config.model.as_str(),
            messages,
        }
    }
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatModel;

    #[test]
    fn request_includes_system_message_first() {
        let config = ChatConfig {
            api_key: Some("sk-x".to_string()),
            model: ChatModel::Gpt4o,
            system_message: Some("answer tersely".to_string()),
        };

        let body = CompletionRequest::for_message(&config, "hello");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "answer tersely");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn request_without_system_message_has_only_user() {
        let config = ChatConfig {
            api_key: Some("sk-x".to_string()),
            ..Default::default()
        };

        let body = CompletionRequest::for_message(&config, "hi");
        assert_eq!(body.messages.len(), 1);
        assert_eq!(body.messages[0].role, "user");
    }

    #[test]
    fn decodes_completion_response() {
        let raw = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "hey there" }, "finish_reason": "stop" }
            ]
        }"#;
        let completion: CompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(completion.choices[0].message.content, "hey there");
    }
}
