//! Chat session state

use chrono::{DateTime, Local};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Ai,
}

impl Role {
    /// Short tag rendered next to each message.
    pub fn tag(self) -> &'static str {
        match self {
            Role::System => "sys",
            Role::User => "you",
            Role::Ai => "ai",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub at: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            at: Local::now(),
        }
    }

    pub fn time_formatted(&self) -> String {
        self.at.format("%H:%M").to_string()
    }
}

/// State of the chat section as observed by the UI.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub input: String,
    pub messages: Vec<ChatMessage>,
    pub is_loading: bool,
}

impl ChatState {
    pub fn input_placeholder(&self) -> &'static str {
        if self.is_loading {
            "loading..."
        } else {
            "type here..."
        }
    }

    pub fn is_send_disabled(&self) -> bool {
        self.input.trim().is_empty() || self.is_loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_is_disabled_for_blank_input() {
        let mut state = ChatState::default();
        assert!(state.is_send_disabled());

        state.input = "   ".to_string();
        assert!(state.is_send_disabled());

        state.input = "hello".to_string();
        assert!(!state.is_send_disabled());

        state.is_loading = true;
        assert!(state.is_send_disabled());
    }
}
