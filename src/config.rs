//! Chat configuration persisted under `.cache/`
//!
//! The API key can also arrive via `OPENAI_API_KEY`; a key found in the
//! config file wins over the environment.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

const CACHE_DIR: &str = ".cache";
const CONFIG_FILE: &str = ".cache/chat_config.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    #[default]
    #[serde(rename = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
}

impl ChatModel {
    pub fn as_str(self) -> &'static str {
        match self {
            ChatModel::Gpt4oMini => "gpt-4o-mini",
            ChatModel::Gpt4o => "gpt-4o",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: ChatModel,
    pub system_message: Option<String>,
}

impl ChatConfig {
    /// Load the persisted config, falling back to defaults, then seed a
    /// missing API key from the environment.
    pub fn load() -> Self {
        let mut config = Self::read_file(Path::new(CONFIG_FILE)).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "no usable chat config on disk, using defaults");
            Self::default()
        });

        if config.api_key.is_none() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                if !key.is_empty() {
                    tracing::info!("chat API key taken from environment");
                    config.api_key = Some(key);
                }
            }
        }

        config
    }

    pub fn save(&self) -> Result<()> {
        let cache_dir = Path::new(CACHE_DIR);
        if !cache_dir.exists() {
            fs::create_dir_all(cache_dir)?;
        }
        fs::write(CONFIG_FILE, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let config = ChatConfig {
            api_key: Some("sk-test".to_string()),
            model: ChatModel::Gpt4o,
            system_message: Some("be brief".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: ChatConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.api_key.as_deref(), Some("sk-test"));
        assert_eq!(back.model, ChatModel::Gpt4o);
        assert_eq!(back.system_message.as_deref(), Some("be brief"));
    }

    #[test]
    fn model_defaults_when_absent() {
        let back: ChatConfig = serde_json::from_str(r#"{"api_key": "sk-x"}"#).unwrap();
        assert_eq!(back.model, ChatModel::Gpt4oMini);
        assert!(back.is_configured());
    }

    #[test]
    fn blank_key_is_not_configured() {
        let config = ChatConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        assert!(!config.is_configured());
        assert!(!ChatConfig::default().is_configured());
    }
}
