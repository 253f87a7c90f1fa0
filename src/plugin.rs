//! Plugin surface handed to the host runtime

use crate::runtime::{ActionExample, AgentRuntime, Memory, State};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// What an action delivers back to the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub text: String,
    pub content: Value,
}

pub type HandlerCallback = dyn Fn(ActionResponse) + Send + Sync;

/// Status-reporting object polled by the host
#[async_trait]
pub trait Provider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Human-readable status. Never fails; errors come back as text.
    async fn get(&self, runtime: &dyn AgentRuntime) -> String;
}

#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn validate(&self, _runtime: &dyn AgentRuntime, _message: &Memory) -> bool {
        true
    }

    /// Run the action. Results and errors go to `callback`; the return
    /// value only says whether it succeeded.
    async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
        options: &Map<String, Value>,
        callback: Option<&HandlerCallback>,
    ) -> bool;
}

/// A named operation exposed to the host
#[derive(Clone)]
pub struct Action {
    pub name: &'static str,
    pub description: &'static str,
    pub similes: Vec<&'static str>,
    /// Example conversations, one inner vec per exchange
    pub examples: Vec<Vec<ActionExample>>,
    pub handler: Arc<dyn ActionHandler>,
}

impl Action {
    pub async fn validate(&self, runtime: &dyn AgentRuntime, message: &Memory) -> bool {
        self.handler.validate(runtime, message).await
    }

    pub async fn handle(
        &self,
        runtime: &dyn AgentRuntime,
        message: &Memory,
        state: Option<State>,
        options: &Map<String, Value>,
        callback: Option<&HandlerCallback>,
    ) -> bool {
        self.handler
            .handle(runtime, message, state, options, callback)
            .await
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("similes", &self.similes)
            .finish_non_exhaustive()
    }
}

/// Plugin registered with the host runtime
#[derive(Clone)]
pub struct Plugin {
    pub name: &'static str,
    pub description: &'static str,
    pub providers: Vec<Arc<dyn Provider>>,
    pub actions: Vec<Action>,
}

impl Plugin {
    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn action_names(&self) -> Vec<&'static str> {
        self.actions.iter().map(|a| a.name).collect()
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("name", &self.name)
            .field("providers", &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>())
            .field("actions", &self.action_names())
            .finish()
    }
}

/// Action metadata published by an [`ActionProvider`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    /// JSON schema of the action's arguments
    pub schema: Value,
}

/// A named set of action descriptors
pub trait ActionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    fn actions(&self) -> Vec<ActionDescriptor>;
}
