//! Tool calling types

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Tool call (invocation from model)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from its JSON-encoded argument string.
    ///
    /// An empty string means no arguments. Anything that is not a JSON object fails.
    pub fn decode(id: impl Into<String>, name: impl Into<String>, arguments: &str) -> Result<Self> {
        let id = id.into();
        if arguments.trim().is_empty() {
            return Ok(Self::new(id, name, Map::new()));
        }
        match serde_json::from_str::<Value>(arguments) {
            Ok(Value::Object(map)) => Ok(Self::new(id, name, map)),
            Ok(_) => Err(Error::runtime(format!(
                "Arguments of tool call \"{id}\" must decode to an object"
            ))),
            Err(e) => Err(Error::runtime(format!(
                "Failed to decode arguments of tool call \"{id}\": {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_arguments() {
        let call = ToolCall::decode("call_123", "test_function", r#"{"arg1": "value1"}"#).unwrap();
        assert_eq!(call.id, "call_123");
        assert_eq!(Value::Object(call.arguments), json!({"arg1": "value1"}));
    }

    #[test]
    fn test_empty_arguments() {
        let call = ToolCall::decode("call_1", "ping", "").unwrap();
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_invalid_arguments() {
        let err = ToolCall::decode("call_1", "ping", "{oops").unwrap_err();
        assert!(err.message().starts_with("Failed to decode arguments of tool call \"call_1\""));

        let err = ToolCall::decode("call_2", "ping", "[1]").unwrap_err();
        assert_eq!(
            err.message(),
            "Arguments of tool call \"call_2\" must decode to an object"
        );
    }
}
