use crate::runtime::State;
use serde_json::Value;

/// Render `{{key}}` placeholders from state. Unknown keys render empty.
pub fn compose_context(state: &State, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match state.get(key) {
                    Some(Value::String(s)) => out.push_str(s),
                    Some(Value::Null) | None => {}
                    Some(other) => out.push_str(&other.to_string()),
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated placeholder, keep as-is
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn substitutes_known_keys() {
        let state = State::default()
            .with("agentName", "Ada")
            .with("recentMessages", "user: make me a coin");
        let rendered = compose_context(&state, "{{recentMessages}}\n-- {{ agentName }}");
        assert_eq!(rendered, "user: make me a coin\n-- Ada");
    }

    #[test]
    fn missing_keys_render_empty() {
        let state = State::default();
        assert_eq!(compose_context(&state, "a{{bio}}b"), "ab");
    }

    #[test]
    fn non_string_values_are_serialized() {
        let state = State::default().with("count", json!(3));
        assert_eq!(compose_context(&state, "n={{count}}"), "n=3");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let state = State::default().with("x", "1");
        assert_eq!(compose_context(&state, "{{x}} {{oops"), "1 {{oops");
    }
}
