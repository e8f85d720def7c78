//! Message types for the conversation log
//!
//! A conversation is an ordered list of role-tagged [`Message`]s. Assistant
//! messages may carry structured function-call requests and function results
//! are their own role, so the whole exchange can be replayed to the model on
//! the next request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// System instructions (sent first by providers that support them)
    System,
    /// Output of a function the assistant asked for
    Function,
}

/// A function invocation requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Provider-assigned call id, echoed back with the result
    pub id: String,
    /// Name of the requested function
    pub name: String,
    /// Raw JSON arguments as produced by the model
    pub arguments: Value,
}

impl FunctionCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }
}

/// Content block in a message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Plain text content
    Text {
        text: String,
    },

    /// Function call request from the assistant
    FunctionCall(FunctionCall),

    /// Result of a previously requested function call
    FunctionResult {
        /// Id of the call this result answers
        call_id: String,
        /// Function name, kept for logging and replay
        name: String,
        /// Serialized result handed back to the model
        content: String,
    },
}

/// Message content: either simple text or structured blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
}

/// A message in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

impl Message {
    /// Create a user message with text
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(MessageContent::Text(text.into())),
        }
    }

    /// Create an assistant message with text
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: Some(MessageContent::Text(text.into())),
        }
    }

    /// Create a system message with text
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: Some(MessageContent::Text(text.into())),
        }
    }

    /// Create an assistant message that requests one or more function calls
    pub fn function_calls(text: Option<String>, calls: Vec<FunctionCall>) -> Self {
        let mut blocks: Vec<ContentBlock> = text
            .filter(|t| !t.is_empty())
            .map(|text| ContentBlock::Text { text })
            .into_iter()
            .collect();
        blocks.extend(calls.into_iter().map(ContentBlock::FunctionCall));

        Self {
            role: Role::Assistant,
            content: Some(MessageContent::Blocks(blocks)),
        }
    }

    /// Create a function-result message answering `call_id`
    pub fn function_result(
        call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: Role::Function,
            content: Some(MessageContent::Blocks(vec![ContentBlock::FunctionResult {
                call_id: call_id.into(),
                name: name.into(),
                content: content.into(),
            }])),
        }
    }

    /// First text content of the message, if any
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(MessageContent::Text(s)) => Some(s),
            Some(MessageContent::Blocks(blocks)) => blocks.iter().find_map(|b| match b {
                ContentBlock::Text { text } => Some(text.as_str()),
                _ => None,
            }),
            None => None,
        }
    }

    /// Function calls requested by this message
    pub fn function_call_requests(&self) -> Vec<&FunctionCall> {
        match &self.content {
            Some(MessageContent::Blocks(blocks)) => blocks
                .iter()
                .filter_map(|b| match b {
                    ContentBlock::FunctionCall(call) => Some(call),
                    _ => None,
                })
                .collect(),
            _ => vec![],
        }
    }

    pub fn has_function_calls(&self) -> bool {
        !self.function_call_requests().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_message() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.text(), Some("Hello"));
        assert!(!msg.has_function_calls());
    }

    #[test]
    fn test_function_call_message() {
        let call = FunctionCall::new("call_1", "get_stock_price", json!({"ticker": "AAPL"}));
        let msg = Message::function_calls(None, vec![call.clone()]);

        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.text(), None);
        assert_eq!(msg.function_call_requests(), vec![&call]);
    }

    #[test]
    fn test_function_call_message_keeps_text() {
        let call = FunctionCall::new("call_1", "calculate_rsi", json!({"ticker": "MSFT"}));
        let msg = Message::function_calls(Some("Checking RSI".to_string()), vec![call]);

        assert_eq!(msg.text(), Some("Checking RSI"));
        assert!(msg.has_function_calls());
    }

    #[test]
    fn test_function_result() {
        let msg = Message::function_result("call_1", "get_stock_price", "189.5");
        assert_eq!(msg.role, Role::Function);
        assert!(!msg.has_function_calls());
        match msg.content {
            Some(MessageContent::Blocks(blocks)) => match &blocks[0] {
                ContentBlock::FunctionResult {
                    call_id, content, ..
                } => {
                    assert_eq!(call_id, "call_1");
                    assert_eq!(content, "189.5");
                }
                other => panic!("unexpected block: {other:?}"),
            },
            other => panic!("unexpected content: {other:?}"),
        }
    }

    #[test]
    fn test_message_serialization() {
        let msg = Message::user("Test");
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.text(), Some("Test"));
        assert_eq!(deserialized.role, Role::User);
    }
}
