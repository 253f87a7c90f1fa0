//! Host agent runtime contract
//!
//! The plugins never call a model or read conversation history themselves.
//! Everything they need from the host goes through [`AgentRuntime`].

mod template;

pub use template::compose_context;

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Message body as exchanged with the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: None,
        }
    }

    pub fn with_action(text: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            action: Some(action.into()),
        }
    }
}

/// A message that triggered an action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub content: Content,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Memory {
    pub fn new(user_id: Uuid, room_id: Uuid, content: Content) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            room_id,
            content,
            created_at: Some(Utc::now()),
        }
    }
}

/// Template variables the host composed for a conversation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl State {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }
}

/// Model size requested from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelClass {
    Small,
    Medium,
    Large,
}

/// One turn of an example conversation shown to the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionExample {
    pub user: String,
    pub content: Content,
}

impl ActionExample {
    pub fn new(user: impl Into<String>, content: Content) -> Self {
        Self {
            user: user.into(),
            content,
        }
    }
}

#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Build template state for a message
    async fn compose_state(&self, message: &Memory) -> Result<State>;

    /// Refresh `recentMessages` (and friends) in an existing state
    async fn update_recent_message_state(&self, state: State) -> Result<State>;

    /// Ask the model for a JSON object matching `schema`
    async fn generate_object(&self, context: &str, schema: &Value, model: ModelClass)
        -> Result<Value>;

    async fn generate_text(&self, context: &str, model: ModelClass) -> Result<String>;
}
