//! Functions the model can call, and their results
//!
//! The six operations form a closed set. A request from the model is parsed
//! into a [`StockFunction`] before anything runs, so an unknown name or a
//! malformed argument never reaches the data provider.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Value, json};
use stockchat_llm::ToolDefinition;
use stockchat_llm::tools::schema;

use crate::error::{Result, StockChatError};
use crate::indicators::Macd;

pub const GET_STOCK_PRICE: &str = "get_stock_price";
pub const CALCULATE_SMA: &str = "calculate_sma";
pub const CALCULATE_EMA: &str = "calculate_ema";
pub const CALCULATE_RSI: &str = "calculate_rsi";
pub const CALCULATE_MACD: &str = "calculate_macd";
pub const PLOT_STOCK_PRICE: &str = "plot_stock_price";

const TICKER_DESC: &str = "The stock ticker symbol for a company (e.g: AAPL for apple).";
const TICKER_DESC_EXAMPLE: &str =
    "The stock ticker symbol for a company (for example AAPL for apple).";

const MAX_TICKER_LEN: usize = 12;

/// A validated function call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockFunction {
    GetStockPrice { ticker: String },
    CalculateSma { ticker: String, window: usize },
    CalculateEma { ticker: String, window: usize },
    CalculateRsi { ticker: String },
    CalculateMacd { ticker: String },
    PlotStockPrice { ticker: String },
}

impl StockFunction {
    /// Definitions sent to the model with every completion request
    pub fn definitions() -> Vec<ToolDefinition> {
        vec![
            ToolDefinition::new(
                GET_STOCK_PRICE,
                "Get the latest stock price given on the ticker symbol of a company",
                ticker_only(TICKER_DESC),
            ),
            ToolDefinition::new(
                CALCULATE_SMA,
                "Calculate the Simple Moving Average for a given stock ticker and a window",
                ticker_and_window("The timeframe to consider when calculating the sma"),
            ),
            ToolDefinition::new(
                CALCULATE_EMA,
                "Calculate the Exponential Moving Average for a given stock ticker and a window",
                ticker_and_window("The timeframe to consider when calculating the ema"),
            ),
            ToolDefinition::new(
                CALCULATE_RSI,
                "Calculate the RSI for a given stock ticker",
                ticker_only(TICKER_DESC),
            ),
            ToolDefinition::new(
                CALCULATE_MACD,
                "Calculate the macd for a given stock ticker",
                ticker_only(TICKER_DESC),
            ),
            ToolDefinition::new(
                PLOT_STOCK_PRICE,
                "Plot the stock price for the last year given the ticker symbol of a company ",
                ticker_only(TICKER_DESC),
            ),
        ]
    }

    /// Parse a model request into a function
    ///
    /// `ticker` is required everywhere; `window` only for SMA and EMA and must
    /// be a positive integer. Extra arguments are ignored.
    pub fn from_call(name: &str, arguments: &Value) -> Result<Self> {
        let args = arguments.as_object().ok_or_else(|| {
            StockChatError::InvalidArguments(format!("{name}: arguments must be a JSON object"))
        })?;

        let ticker = || -> Result<String> {
            let raw = args.get("ticker").and_then(Value::as_str).ok_or_else(|| {
                StockChatError::InvalidArguments(format!("{name}: missing string parameter 'ticker'"))
            })?;
            normalize_ticker(raw)
        };
        let window = || parse_window(name, args.get("window"));

        match name {
            GET_STOCK_PRICE => Ok(Self::GetStockPrice { ticker: ticker()? }),
            CALCULATE_SMA => Ok(Self::CalculateSma {
                ticker: ticker()?,
                window: window()?,
            }),
            CALCULATE_EMA => Ok(Self::CalculateEma {
                ticker: ticker()?,
                window: window()?,
            }),
            CALCULATE_RSI => Ok(Self::CalculateRsi { ticker: ticker()? }),
            CALCULATE_MACD => Ok(Self::CalculateMacd { ticker: ticker()? }),
            PLOT_STOCK_PRICE => Ok(Self::PlotStockPrice { ticker: ticker()? }),
            other => Err(StockChatError::UnknownFunction(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetStockPrice { .. } => GET_STOCK_PRICE,
            Self::CalculateSma { .. } => CALCULATE_SMA,
            Self::CalculateEma { .. } => CALCULATE_EMA,
            Self::CalculateRsi { .. } => CALCULATE_RSI,
            Self::CalculateMacd { .. } => CALCULATE_MACD,
            Self::PlotStockPrice { .. } => PLOT_STOCK_PRICE,
        }
    }

    pub fn ticker(&self) -> &str {
        match self {
            Self::GetStockPrice { ticker }
            | Self::CalculateSma { ticker, .. }
            | Self::CalculateEma { ticker, .. }
            | Self::CalculateRsi { ticker }
            | Self::CalculateMacd { ticker }
            | Self::PlotStockPrice { ticker } => ticker,
        }
    }

    pub fn is_plot(&self) -> bool {
        matches!(self, Self::PlotStockPrice { .. })
    }
}

fn ticker_only(ticker_desc: &str) -> Value {
    schema::object(json!({ "ticker": schema::string(ticker_desc) }), &["ticker"])
}

fn ticker_and_window(window_desc: &str) -> Value {
    schema::object(
        json!({
            "ticker": schema::string(TICKER_DESC_EXAMPLE),
            "window": schema::integer(window_desc),
        }),
        &["ticker", "window"],
    )
}

// Models occasionally send 20.0 for an integer parameter; accept it when the
// value is integral.
fn parse_window(name: &str, value: Option<&Value>) -> Result<usize> {
    let value = value.ok_or_else(|| {
        StockChatError::InvalidArguments(format!("{name}: missing integer parameter 'window'"))
    })?;

    let window = match value.as_u64() {
        Some(n) => Some(n),
        None => value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
            .map(|f| f as u64),
    };

    match window {
        Some(n) if n >= 1 => usize::try_from(n).map_err(|_| {
            StockChatError::InvalidArguments(format!("{name}: window {n} is too large"))
        }),
        _ => Err(StockChatError::InvalidArguments(format!(
            "{name}: 'window' must be a positive integer, got {value}"
        ))),
    }
}

/// Upper-case a ticker and check it looks like a symbol
pub fn normalize_ticker(raw: &str) -> Result<String> {
    let ticker = raw.trim().to_uppercase();
    let valid = !ticker.is_empty()
        && ticker.len() <= MAX_TICKER_LEN
        && ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '^' | '='));

    if valid {
        Ok(ticker)
    } else {
        Err(StockChatError::InvalidArguments(format!(
            "invalid ticker symbol '{raw}'"
        )))
    }
}

/// Result of one function call, serialised as the function-result content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "indicator", rename_all = "snake_case")]
pub enum FunctionOutput {
    Price {
        ticker: String,
        price: f64,
    },
    Sma {
        ticker: String,
        window: usize,
        value: f64,
    },
    Ema {
        ticker: String,
        window: usize,
        value: f64,
    },
    Rsi {
        ticker: String,
        value: f64,
        interpretation: String,
    },
    Macd {
        ticker: String,
        line: f64,
        signal: f64,
        histogram: f64,
    },
    Chart {
        ticker: String,
        path: PathBuf,
        points: usize,
    },
}

impl FunctionOutput {
    pub fn macd(ticker: impl Into<String>, macd: Macd) -> Self {
        Self::Macd {
            ticker: ticker.into(),
            line: macd.line,
            signal: macd.signal,
            histogram: macd.histogram,
        }
    }

    /// JSON text handed back to the model
    pub fn to_content(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
