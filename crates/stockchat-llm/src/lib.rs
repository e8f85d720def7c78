//! Chat-completion layer for stockchat
//!
//! This crate provides provider-agnostic types for talking to a chat model
//! that supports function calling:
//!
//! - Message types for the conversation log
//! - Completion request/response types
//! - Function definitions and JSON schema helpers
//! - The [`LLMProvider`] trait and an OpenAI-compatible implementation

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;
pub mod tools;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, StopReason, TokenUsage};
pub use error::{LLMError, Result};
pub use messages::{ContentBlock, FunctionCall, Message, MessageContent, Role};
pub use provider::LLMProvider;
pub use tools::ToolDefinition;
