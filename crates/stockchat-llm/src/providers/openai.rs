//! OpenAI chat-completions provider
//!
//! Talks to `POST {api_base}/chat/completions` and maps function calling onto
//! the `tools` / `tool_calls` fields. Any OpenAI-compatible server (Azure,
//! vLLM, LM Studio, ...) works by pointing `api_base` at it.
//!
//! ```no_run
//! use stockchat_llm::providers::{OpenAIConfig, OpenAIProvider};
//! use stockchat_llm::{CompletionRequest, LLMProvider, Message};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = OpenAIProvider::with_config(
//!     OpenAIConfig::new("sk-...").with_api_base("http://localhost:1234/v1"),
//! )?;
//!
//! let request = CompletionRequest::builder("gpt-3.5-turbo")
//!     .add_message(Message::user("Hello!"))
//!     .build();
//! let response = provider.complete(request).await?;
//! println!("{}", response.message.text().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

use crate::{
    CompletionRequest, CompletionResponse, ContentBlock, FunctionCall, LLMError, LLMProvider,
    Message, MessageContent, Result, Role, StopReason, TokenUsage, ToolDefinition,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the OpenAI provider
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// Bearer credential for the model service
    pub api_key: String,

    /// Base URL (default: "https://api.openai.com/v1")
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,

    /// When set, requests for any other model are rejected before sending
    pub supported_models: Option<Vec<String>>,
}

impl OpenAIConfig {
    /// Create a config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            supported_models: None,
        }
    }

    /// Create config from the environment
    ///
    /// The key is read from `OPENAI_API_KEY`, falling back to `API_KEY`.
    /// `OPENAI_API_BASE` overrides the base URL when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                LLMError::ConfigurationError(
                    "OPENAI_API_KEY (or API_KEY) environment variable not set".to_string(),
                )
            })?;

        let api_base = std::env::var("OPENAI_API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            supported_models: None,
        })
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Restrict requests to the given models
    pub fn with_supported_models(mut self, models: Vec<String>) -> Self {
        self.supported_models = Some(models);
        self
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// OpenAI-compatible chat model
pub struct OpenAIProvider {
    client: Client,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    /// Create a provider with custom configuration
    pub fn with_config(config: OpenAIConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a provider with an API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(OpenAIConfig::new(api_key))
    }

    /// Create a provider from the environment, see [`OpenAIConfig::from_env`]
    pub fn from_env() -> Result<Self> {
        Self::with_config(OpenAIConfig::from_env()?)
    }

    pub fn config(&self) -> &OpenAIConfig {
        &self.config
    }

    fn validate_model(&self, model: &str) -> Result<()> {
        if let Some(supported) = &self.config.supported_models {
            if !supported.iter().any(|m| m == model) {
                return Err(LLMError::InvalidRequest(format!(
                    "Model '{model}' is not in the supported models list: {supported:?}"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    #[instrument(skip(self, request), fields(model = %request.model, api_base = %self.config.api_base))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        self.validate_model(&request.model)?;

        let openai_request = OpenAIRequest {
            model: request.model.clone(),
            messages: build_openai_messages(request.system, request.messages),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            tools: request.tools.as_deref().map(convert_tools),
        };

        debug!(
            message_count = openai_request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .bearer_auth(&self.config.api_key)
            .json(&openai_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 => LLMError::AuthenticationFailed,
                429 => LLMError::RateLimitExceeded(error_text),
                400 => LLMError::InvalidRequest(error_text),
                404 => LLMError::ModelNotFound(request.model),
                _ => LLMError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| LLMError::UnexpectedResponse(format!("Failed to parse response: {e}")))?;

        let choice = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LLMError::UnexpectedResponse("No choices in response".to_string()))?;

        let usage = openai_response.usage.unwrap_or_default();
        debug!(
            finish_reason = %choice.finish_reason,
            input_tokens = usage.prompt_tokens,
            output_tokens = usage.completion_tokens,
            "Received chat completion"
        );

        let message = parse_openai_response(choice.message)?;
        let mut stop_reason = map_stop_reason(&choice.finish_reason);
        // Some compatible servers report "stop" even when tool calls are present.
        if message.has_function_calls() {
            stop_reason = StopReason::FunctionCall;
        }

        Ok(CompletionResponse {
            message,
            stop_reason,
            usage: TokenUsage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            },
        })
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<OpenAITool>>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<OpenAIToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl OpenAIMessage {
    fn text(role: &'static str, content: String) -> Self {
        Self {
            role,
            content: Some(content),
            tool_calls: None,
            tool_call_id: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct OpenAITool {
    #[serde(rename = "type")]
    tool_type: &'static str,
    function: OpenAIFunction,
}

#[derive(Debug, Serialize)]
struct OpenAIFunction {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIToolCall {
    id: String,
    #[serde(rename = "type", default = "function_type")]
    tool_type: String,
    function: OpenAIFunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIFunctionCall {
    name: String,
    /// JSON-encoded argument object
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    #[serde(default)]
    finish_reason: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<OpenAIToolCall>>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: usize,
    completion_tokens: usize,
}

// ============================================================================
// Conversion functions
// ============================================================================

/// System prompt first, then each message in order
fn build_openai_messages(system: Option<String>, messages: Vec<Message>) -> Vec<OpenAIMessage> {
    let mut result = Vec::with_capacity(messages.len() + 1);

    if let Some(sys) = system {
        result.push(OpenAIMessage::text("system", sys));
    }

    for msg in messages {
        result.extend(convert_message(msg));
    }

    result
}

/// Convert one message; function results fan out into one `tool` message each
fn convert_message(msg: Message) -> Vec<OpenAIMessage> {
    let role = match msg.role {
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::System => "system",
        Role::Function => "tool",
    };

    match msg.content {
        Some(MessageContent::Text(text)) => vec![OpenAIMessage::text(role, text)],
        Some(MessageContent::Blocks(blocks)) => convert_blocks(role, blocks),
        None => vec![OpenAIMessage::text(role, String::new())],
    }
}

fn convert_blocks(role: &'static str, blocks: Vec<ContentBlock>) -> Vec<OpenAIMessage> {
    let mut results = Vec::new();
    let mut texts = Vec::new();
    let mut tool_calls = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Text { text } => texts.push(text),
            ContentBlock::FunctionCall(call) => tool_calls.push(OpenAIToolCall {
                id: call.id,
                tool_type: function_type(),
                function: OpenAIFunctionCall {
                    name: call.name,
                    arguments: call.arguments.to_string(),
                },
            }),
            ContentBlock::FunctionResult {
                call_id, content, ..
            } => results.push(OpenAIMessage {
                role: "tool",
                content: Some(content),
                tool_calls: None,
                tool_call_id: Some(call_id),
            }),
        }
    }

    let mut messages = Vec::with_capacity(results.len() + 1);
    if !texts.is_empty() || !tool_calls.is_empty() {
        messages.push(OpenAIMessage {
            role,
            content: (!texts.is_empty()).then(|| texts.join("\n")),
            tool_calls: (!tool_calls.is_empty()).then_some(tool_calls),
            tool_call_id: None,
        });
    }
    messages.extend(results);
    messages
}

fn convert_tools(tools: &[ToolDefinition]) -> Vec<OpenAITool> {
    tools
        .iter()
        .map(|tool| OpenAITool {
            tool_type: "function",
            function: OpenAIFunction {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: tool.parameters.clone(),
            },
        })
        .collect()
}

fn parse_openai_response(msg: OpenAIResponseMessage) -> Result<Message> {
    let calls = msg
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .map(|call| {
            let arguments = serde_json::from_str(&call.function.arguments).map_err(|e| {
                LLMError::UnexpectedResponse(format!(
                    "Failed to parse arguments for {}: {e}",
                    call.function.name
                ))
            })?;
            Ok(FunctionCall::new(call.id, call.function.name, arguments))
        })
        .collect::<Result<Vec<_>>>()?;

    if calls.is_empty() {
        return Ok(Message::assistant(msg.content.unwrap_or_default()));
    }

    Ok(Message::function_calls(msg.content, calls))
}

fn map_stop_reason(reason: &str) -> StopReason {
    match reason {
        "length" => StopReason::MaxTokens,
        "tool_calls" | "function_call" => StopReason::FunctionCall,
        "content_filter" => StopReason::ContentFilter,
        "stop" => StopReason::EndTurn,
        other => {
            debug!("Unknown stop reason: {}", other);
            StopReason::EndTurn
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use tokio_test::{assert_err, assert_ok};

    /// Answer a single HTTP request with `status` and `body`
    ///
    /// Returns the API base to point the provider at and a handle resolving to
    /// the request line the client sent.
    async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut chunk = [0u8; 4096];

            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                received.extend_from_slice(&chunk[..n]);

                let Some(head_end) = received.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let head = String::from_utf8_lossy(&received[..head_end]).to_lowercase();
                let body_len = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if received.len() >= head_end + 4 + body_len {
                    break;
                }
            }

            let response = format!(
                "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;

            String::from_utf8_lossy(&received)
                .lines()
                .next()
                .unwrap_or_default()
                .to_string()
        });

        (base, handle)
    }

    fn local_provider(api_base: &str) -> OpenAIProvider {
        OpenAIProvider::with_config(
            OpenAIConfig::new("test-key")
                .with_api_base(api_base)
                .with_timeout(5),
        )
        .unwrap()
    }

    fn price_request() -> CompletionRequest {
        CompletionRequest::builder("gpt-3.5-turbo")
            .add_message(Message::user("What is the price of AAPL?"))
            .build()
    }

    async fn complete_with_status(status: u16, body: &'static str) -> LLMError {
        let (base, server) = serve_once(status, body).await;
        let err = assert_err!(local_provider(&base).complete(price_request()).await);
        server.await.unwrap();
        err
    }

    #[tokio::test]
    async fn test_complete_parses_tool_call() {
        let (base, server) = serve_once(
            200,
            r#"{"choices":[{"message":{"content":null,"tool_calls":[{"id":"call_1","type":"function","function":{"name":"get_stock_price","arguments":"{\"ticker\":\"AAPL\"}"}}]},"finish_reason":"tool_calls"}],"usage":{"prompt_tokens":12,"completion_tokens":7}}"#,
        )
        .await;

        let provider = local_provider(&format!("{base}/"));
        let response = assert_ok!(provider.complete(price_request()).await);

        assert_eq!(server.await.unwrap(), "POST /v1/chat/completions HTTP/1.1");
        assert_eq!(response.stop_reason, StopReason::FunctionCall);
        assert_eq!(response.usage.total(), 19);

        let calls = response.message.function_call_requests();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call_1");
        assert_eq!(calls[0].name, "get_stock_price");
        assert_eq!(calls[0].arguments, json!({"ticker": "AAPL"}));
    }

    #[tokio::test]
    async fn test_complete_plain_answer() {
        let (base, server) = serve_once(
            200,
            r#"{"choices":[{"message":{"content":"AAPL closed at 189.50"},"finish_reason":"stop"}]}"#,
        )
        .await;

        let response = assert_ok!(local_provider(&base).complete(price_request()).await);
        server.await.unwrap();

        assert_eq!(response.stop_reason, StopReason::EndTurn);
        assert_eq!(response.message.text(), Some("AAPL closed at 189.50"));
        assert_eq!(response.usage.total(), 0);
    }

    #[tokio::test]
    async fn test_complete_maps_error_status() {
        assert!(matches!(
            complete_with_status(401, r#"{"error":"invalid key"}"#).await,
            LLMError::AuthenticationFailed
        ));
        assert!(matches!(
            complete_with_status(429, r#"{"error":"slow down"}"#).await,
            LLMError::RateLimitExceeded(msg) if msg.contains("slow down")
        ));
        assert!(matches!(
            complete_with_status(404, r#"{"error":"no such model"}"#).await,
            LLMError::ModelNotFound(model) if model == "gpt-3.5-turbo"
        ));
        assert!(matches!(
            complete_with_status(400, r#"{"error":"bad tools"}"#).await,
            LLMError::InvalidRequest(msg) if msg.contains("bad tools")
        ));
        assert!(matches!(
            complete_with_status(503, "overloaded").await,
            LLMError::RequestFailed(msg) if msg.contains("503") && msg.contains("overloaded")
        ));
    }

    #[tokio::test]
    async fn test_complete_rejects_empty_choices() {
        let err = complete_with_status(200, r#"{"choices":[]}"#).await;
        assert!(matches!(err, LLMError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_from_env_trims_api_base() {
        unsafe {
            std::env::set_var("OPENAI_API_KEY", "env-key");
            std::env::set_var("OPENAI_API_BASE", "http://localhost:1234/v1/");
        }
        let config = OpenAIConfig::from_env();
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
            std::env::remove_var("OPENAI_API_BASE");
        }

        let config = config.unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.api_base, "http://localhost:1234/v1");
    }

    #[test]
    fn test_provider_creation() {
        let provider = OpenAIProvider::new("test-key").unwrap();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.config().api_key, "test-key");
        assert_eq!(provider.config().api_base, "https://api.openai.com/v1");
    }

    #[test]
    fn test_custom_config() {
        let config = OpenAIConfig::new("test-key")
            .with_api_base("http://localhost:1234/v1/")
            .with_timeout(60)
            .with_supported_models(vec!["gpt-3.5-turbo".to_string()]);

        let provider = OpenAIProvider::with_config(config).unwrap();
        assert_eq!(provider.config().api_base, "http://localhost:1234/v1");
        assert_eq!(provider.config().timeout_secs, 60);
    }

    #[test]
    fn test_model_validation() {
        let config =
            OpenAIConfig::new("test-key").with_supported_models(vec!["gpt-3.5-turbo".to_string()]);
        let provider = OpenAIProvider::with_config(config).unwrap();

        assert!(provider.validate_model("gpt-3.5-turbo").is_ok());
        assert!(matches!(
            provider.validate_model("gpt-4"),
            Err(LLMError::InvalidRequest(_))
        ));

        let open = OpenAIProvider::new("test-key").unwrap();
        assert!(open.validate_model("anything").is_ok());
    }

    #[test]
    fn test_system_message_first() {
        let messages = build_openai_messages(
            Some("You are helpful".to_string()),
            vec![Message::user("Hi")],
        );

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_function_call_conversion() {
        let msg = Message::function_calls(
            None,
            vec![FunctionCall::new(
                "call_1",
                "calculate_sma",
                json!({"ticker": "AAPL", "window": 20}),
            )],
        );

        let converted = convert_message(msg);
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].role, "assistant");
        assert!(converted[0].content.is_none());

        let calls = converted[0].tool_calls.as_ref().unwrap();
        assert_eq!(calls[0].id, "call_1");
        assert_eq!(calls[0].tool_type, "function");
        assert_eq!(calls[0].function.name, "calculate_sma");
        let args: serde_json::Value = serde_json::from_str(&calls[0].function.arguments).unwrap();
        assert_eq!(args["window"], 20);
    }

    #[test]
    fn test_function_result_conversion() {
        let converted = convert_message(Message::function_result("call_1", "get_stock_price", "42.0"));

        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].role, "tool");
        assert_eq!(converted[0].tool_call_id.as_deref(), Some("call_1"));
        assert_eq!(converted[0].content.as_deref(), Some("42.0"));
    }

    #[test]
    fn test_tool_definition_conversion() {
        let tool = ToolDefinition::new(
            "calculate_rsi",
            "Calculate the RSI for a given stock ticker",
            json!({"type": "object", "properties": {"ticker": {"type": "string"}}}),
        );

        let tools = convert_tools(&[tool]);
        assert_eq!(tools[0].tool_type, "function");
        assert_eq!(tools[0].function.name, "calculate_rsi");
        assert_eq!(tools[0].function.parameters["type"], "object");
    }

    #[test]
    fn test_stop_reason_mapping() {
        assert_eq!(map_stop_reason("stop"), StopReason::EndTurn);
        assert_eq!(map_stop_reason("length"), StopReason::MaxTokens);
        assert_eq!(map_stop_reason("tool_calls"), StopReason::FunctionCall);
        assert_eq!(map_stop_reason("content_filter"), StopReason::ContentFilter);
        assert_eq!(map_stop_reason("whatever"), StopReason::EndTurn);
    }

    #[test]
    fn test_parse_response_with_tool_calls() {
        let response: OpenAIResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_9",
                        "type": "function",
                        "function": {"name": "calculate_macd", "arguments": "{\"ticker\":\"TSLA\"}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {"prompt_tokens": 10, "completion_tokens": 3}
        }))
        .unwrap();

        let choice = response.choices.into_iter().next().unwrap();
        let message = parse_openai_response(choice.message).unwrap();
        let calls = message.function_call_requests();

        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "calculate_macd");
        assert_eq!(calls[0].arguments["ticker"], "TSLA");
    }

    #[test]
    fn test_parse_response_with_bad_arguments() {
        let msg = OpenAIResponseMessage {
            content: None,
            tool_calls: Some(vec![OpenAIToolCall {
                id: "call_1".to_string(),
                tool_type: function_type(),
                function: OpenAIFunctionCall {
                    name: "calculate_sma".to_string(),
                    arguments: "{not json".to_string(),
                },
            }]),
        };

        assert!(matches!(
            parse_openai_response(msg),
            Err(LLMError::UnexpectedResponse(_))
        ));
    }

    #[test]
    fn test_parse_plain_text_response() {
        let msg = OpenAIResponseMessage {
            content: Some("AAPL closed at 189.50".to_string()),
            tool_calls: None,
        };

        let message = parse_openai_response(msg).unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert_eq!(message.text(), Some("AAPL closed at 189.50"));
    }
}
