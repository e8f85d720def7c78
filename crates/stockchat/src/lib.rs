//! Conversational stock assistant
//!
//! This crate answers natural-language questions about a stock by letting a
//! chat model call a small set of functions:
//!
//! - Latest closing price
//! - Simple and exponential moving averages
//! - RSI and MACD
//! - A one-year price chart
//!
//! # Architecture
//!
//! - [`indicators`]: pure functions over a slice of closing prices
//! - [`api`]: the `PriceSeriesProvider` trait and a Yahoo Finance client
//! - [`chart`]: the `ChartRenderer` trait and an SVG line chart
//! - [`functions`]: the closed set of callable functions and their schemas
//! - [`orchestrator`]: the turn loop tying model, data and charts together
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stockchat::{ChatConfig, Orchestrator, Session};
//! use stockchat_llm::providers::OpenAIProvider;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let llm = Arc::new(OpenAIProvider::from_env()?);
//!     let orchestrator = Orchestrator::with_defaults(llm, ChatConfig::from_env()?);
//!
//!     let mut session = Session::new();
//!     let reply = orchestrator
//!         .handle_turn(&mut session, "What is the 20 day SMA of MSFT?")
//!         .await?;
//!     println!("{}", reply.text.unwrap_or_default());
//!
//!     session.end();
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod functions;
pub mod indicators;
pub mod orchestrator;
pub mod series;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use api::{PriceSeriesProvider, YahooFinanceClient};
pub use chart::{ChartRenderer, SvgChartRenderer};
pub use config::{ChatConfig, ChatConfigBuilder};
pub use error::{ChartError, IndicatorError, ProviderError, Result, StockChatError};
pub use functions::{FunctionOutput, StockFunction};
pub use indicators::Macd;
pub use orchestrator::{ChartArtifact, Orchestrator, TurnReply};
pub use series::{PricePoint, PriceSeries};
pub use session::Session;
