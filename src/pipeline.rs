//! Steps shared by every action handler
//!
//! A handler composes an extraction prompt, asks the model for structured
//! parameters, runs the SDK call, then asks the model to phrase the outcome.
//! Whatever fails along the way is reported once through the callback.

use crate::plugin::{ActionResponse, HandlerCallback};
use crate::runtime::{compose_context, AgentRuntime, Memory, ModelClass, State};
use crate::schema::ActionParameters;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error};

const RESPONSE_TEMPLATE_HEAD: &str = r#"
# Action Examples
{{actionExamples}}

# Knowledge
{{knowledge}}

# Task: Generate dialog and actions for the character {{agentName}}.
About {{agentName}}:
{{bio}}
{{lore}}

{{providers}}

{{attachments}}

# Capabilities
Note that {{agentName}} is capable of reading/seeing/hearing various forms of media, including images, videos, audio, plaintext and PDFs. Recent attachments have been included above under the "Attachments" section.
"#;

const RESPONSE_TEMPLATE_TAIL: &str = r#"
{{actions}}

Respond to the message knowing that the action was successful and these were the previous messages:
{{recentMessages}}
"#;

/// Use the supplied state or compose one, then refresh recent messages
pub async fn prepare_state(
    runtime: &dyn AgentRuntime,
    message: &Memory,
    state: Option<State>,
) -> Result<State> {
    let state = match state {
        Some(state) => state,
        None => runtime.compose_state(message).await?,
    };
    runtime.update_recent_message_state(state).await
}

/// Prompt asking the model to pull parameters out of the conversation
pub fn compose_parameter_context(state: &State, request: &str) -> String {
    let template = format!(
        "{{{{recentMessages}}}}\n\nGiven the recent messages, {}\n",
        request
    );
    compose_context(state, &template)
}

/// Structured extraction, validated against the parameter type
///
/// Runtime failures are returned unchanged so the host's own message reaches
/// the callback.
pub async fn generate_parameters<P: ActionParameters>(
    runtime: &dyn AgentRuntime,
    context: &str,
) -> Result<P> {
    let schema = P::extraction_schema();
    let object = runtime
        .generate_object(context, &schema, ModelClass::Large)
        .await?;
    debug!(parameters = %object, "Extracted action parameters");
    P::from_value(object)
}

/// Prompt asking the model to phrase a successful result
pub fn compose_response_context<T: Serialize>(
    outcome: &str,
    result: &T,
    state: &State,
) -> Result<String> {
    let result = serde_json::to_string(result)?;
    let template = format!(
        "{}\n{}\nHere is the result:\n{}\n{}",
        RESPONSE_TEMPLATE_HEAD, outcome, result, RESPONSE_TEMPLATE_TAIL
    );
    Ok(compose_context(state, &template))
}

pub async fn generate_response(runtime: &dyn AgentRuntime, context: &str) -> Result<String> {
    runtime.generate_text(context, ModelClass::Large).await
}

/// Hand a successful result to the callback
pub fn deliver(callback: Option<&HandlerCallback>, text: String, content: Value) -> bool {
    if let Some(callback) = callback {
        callback(ActionResponse { text, content });
    }
    true
}

/// Report a failed invocation as `"<prefix>: <message>"`
pub fn deliver_error(
    callback: Option<&HandlerCallback>,
    action: &str,
    prefix: &str,
    err: &Error,
) -> bool {
    let message = err.to_string();
    error!(action, error = %message, "{}", prefix);
    if let Some(callback) = callback {
        callback(ActionResponse {
            text: format!("{}: {}", prefix, message),
            content: json!({ "error": message }),
        });
    }
    false
}
