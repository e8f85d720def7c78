//! Function definitions offered to the model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A function the model may ask to call
///
/// `parameters` is a JSON Schema object describing the arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,

    /// Description the model uses to decide when to call the function
    pub description: String,

    pub parameters: Value,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// Names listed under `required` in the parameter schema
    pub fn required_parameters(&self) -> Vec<&str> {
        self.parameters["required"]
            .as_array()
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// Helpers to build JSON schemas for function parameters
pub mod schema {
    use serde_json::{Value, json};

    /// Object schema with the given properties
    ///
    /// # Example
    ///
    /// ```
    /// use stockchat_llm::tools::schema;
    /// use serde_json::json;
    ///
    /// let params = schema::object(
    ///     json!({
    ///         "ticker": schema::string("Ticker symbol"),
    ///         "window": schema::integer("Lookback window"),
    ///     }),
    ///     &["ticker", "window"],
    /// );
    /// assert_eq!(params["required"][1], "window");
    /// ```
    pub fn object(properties: Value, required: &[&str]) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    pub fn string(description: &str) -> Value {
        json!({
            "type": "string",
            "description": description,
        })
    }

    pub fn integer(description: &str) -> Value {
        json!({
            "type": "integer",
            "description": description,
        })
    }
}
