//! Model provider trait

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// A chat model that can answer a completion request
///
/// Implementations translate the provider-agnostic request into the wire
/// format of a concrete service and map the reply back.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Generate a completion for the given conversation
    ///
    /// # Arguments
    ///
    /// * `request` - Messages, function definitions and sampling parameters
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Provider name (e.g. "openai")
    fn name(&self) -> &str;
}
