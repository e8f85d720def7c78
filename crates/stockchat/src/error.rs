//! Error types for stockchat

use stockchat_llm::LLMError;
use thiserror::Error;

/// Failures of the pure indicator functions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The series has no entries at all
    #[error("price series is empty")]
    EmptySeries,

    /// Fewer entries than the calculation needs
    #[error("insufficient data: need {required} closing prices, have {available}")]
    InsufficientData { required: usize, available: usize },

    /// Window lengths start at 1
    #[error("invalid window {0}: must be at least 1")]
    InvalidWindow(usize),

    /// RSI is undefined when the price never moved
    #[error("RSI is undefined: the series has no gains and no losses")]
    NoPriceMovement,
}

/// Failures of a price series provider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The provider has no data for this symbol
    #[error("unknown ticker: {0}")]
    UnknownTicker(String),

    /// The provider could not be reached or answered with an error
    #[error("price provider unavailable: {0}")]
    ProviderUnavailable(String),
}

/// Failures while rendering a chart
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("cannot plot an empty price series")]
    EmptySeries,

    #[error("chart drawing failed: {0}")]
    Drawing(String),

    #[error("chart output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for a dialogue turn
#[derive(Debug, Error)]
pub enum StockChatError {
    #[error(transparent)]
    Indicator(#[from] IndicatorError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    /// A function call is missing a required parameter or carries a bad one
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The model asked for a function that is not declared
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("model service error: {0}")]
    ModelService(#[from] LLMError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for stockchat operations
pub type Result<T> = std::result::Result<T, StockChatError>;
