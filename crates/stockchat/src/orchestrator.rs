//! Dialogue loop between the user, the model and the stock functions
//!
//! One call to [`Orchestrator::handle_turn`] handles one line of user input:
//!
//! 1. the input is appended to the session history
//! 2. the model sees the whole history plus the six function definitions
//! 3. requested calls are validated, executed against freshly fetched prices,
//!    and their results appended after the model's call message
//! 4. the model is asked again so it can phrase an answer
//!
//! A round that only plots charts ends the turn without a second model call.
//! The first chart of a turn goes to the configured chart path; later charts
//! in the same turn get their own numbered file next to it.
//! Any failure ends the turn and is returned unchanged; nothing from a failed
//! round is written to the history.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use stockchat_llm::{
    CompletionRequest, FunctionCall, LLMError, LLMProvider, Message, ToolDefinition,
};
use tracing::{debug, info, warn};

use crate::api::{PriceSeriesProvider, YahooFinanceClient};
use crate::chart::{ChartRenderer, SvgChartRenderer};
use crate::config::ChatConfig;
use crate::error::{ChartError, Result, StockChatError};
use crate::functions::{FunctionOutput, StockFunction};
use crate::indicators;
use crate::series::PriceSeries;
use crate::session::Session;

/// A chart written during a turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArtifact {
    pub ticker: String,
    pub path: PathBuf,
    pub points: usize,
}

/// What a turn produced for the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnReply {
    /// Final assistant text; `None` when the turn ended on a plot
    pub text: Option<String>,
    pub charts: Vec<ChartArtifact>,
}

pub struct Orchestrator {
    llm: Arc<dyn LLMProvider>,
    prices: Arc<dyn PriceSeriesProvider>,
    charts: Arc<dyn ChartRenderer>,
    config: ChatConfig,
    tools: Vec<ToolDefinition>,
}

impl Orchestrator {
    pub fn new(
        llm: Arc<dyn LLMProvider>,
        prices: Arc<dyn PriceSeriesProvider>,
        charts: Arc<dyn ChartRenderer>,
        config: ChatConfig,
    ) -> Self {
        Self {
            llm,
            prices,
            charts,
            config,
            tools: StockFunction::definitions(),
        }
    }

    /// Yahoo Finance prices and SVG charts
    pub fn with_defaults(llm: Arc<dyn LLMProvider>, config: ChatConfig) -> Self {
        Self::new(
            llm,
            Arc::new(YahooFinanceClient::new()),
            Arc::new(SvgChartRenderer::new()),
            config,
        )
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Run one user turn to completion
    pub async fn handle_turn(&self, session: &mut Session, input: &str) -> Result<TurnReply> {
        let input = input.trim();
        if input.is_empty() {
            return Err(StockChatError::InvalidArguments(
                "empty message".to_string(),
            ));
        }

        info!(session = %session.id(), "turn started");
        session.push(Message::user(input));

        let mut charts = Vec::new();

        for round in 1..=self.config.max_function_rounds {
            let request = self.build_request(session.messages());

            info!(
                round,
                model = %self.config.model,
                messages = request.messages.len(),
                "sending completion request"
            );
            let response = self.llm.complete(request).await?;
            info!(
                stop_reason = ?response.stop_reason,
                input_tokens = response.usage.input_tokens,
                output_tokens = response.usage.output_tokens,
                "completion received"
            );

            let calls: Vec<FunctionCall> = response
                .message
                .function_call_requests()
                .into_iter()
                .cloned()
                .collect();

            if calls.is_empty() {
                let text = response.message.text().map(str::to_string);
                let preview: String = text.as_deref().unwrap_or("").chars().take(200).collect();
                debug!(preview = %preview, "assistant answered");

                session.push(response.message);
                return Ok(TurnReply { text, charts });
            }

            // Validate the whole round before touching the data provider.
            let functions = calls
                .iter()
                .map(|call| StockFunction::from_call(&call.name, &call.arguments))
                .collect::<Result<Vec<_>>>()?;

            let mut results = Vec::with_capacity(calls.len());
            for (call, function) in calls.iter().zip(&functions) {
                let chart_path = self.chart_destination(charts.len(), function.ticker());
                let output = self.run_function(function, &chart_path).await?;
                if let FunctionOutput::Chart {
                    ticker,
                    path,
                    points,
                } = &output
                {
                    charts.push(ChartArtifact {
                        ticker: ticker.clone(),
                        path: path.clone(),
                        points: *points,
                    });
                }

                let content = output.to_content()?;
                debug!(function = %call.name, content = %content, "function result");
                results.push(Message::function_result(&call.id, &call.name, content));
            }

            session.push(response.message);
            session.extend(results);

            if functions.iter().all(StockFunction::is_plot) {
                info!(charts = charts.len(), "turn ended with chart");
                return Ok(TurnReply { text: None, charts });
            }
        }

        warn!(
            max_rounds = self.config.max_function_rounds,
            "model kept requesting functions"
        );
        Err(LLMError::UnexpectedResponse(format!(
            "no answer after {} function-call rounds",
            self.config.max_function_rounds
        ))
        .into())
    }

    /// Execute one validated function against a fresh price series
    ///
    /// Charts are written to the configured chart path.
    pub async fn execute(&self, function: &StockFunction) -> Result<FunctionOutput> {
        self.run_function(function, &self.config.chart_path).await
    }

    async fn run_function(
        &self,
        function: &StockFunction,
        chart_path: &Path,
    ) -> Result<FunctionOutput> {
        let ticker = function.ticker();
        info!(
            function = function.name(),
            ticker,
            provider = self.prices.name(),
            "executing function"
        );

        let series = self.prices.fetch(ticker, self.config.lookback()).await?;
        let closes = series.closes();

        let output = match function {
            StockFunction::GetStockPrice { .. } => FunctionOutput::Price {
                ticker: ticker.to_string(),
                price: indicators::latest_price(closes)?,
            },
            StockFunction::CalculateSma { window, .. } => FunctionOutput::Sma {
                ticker: ticker.to_string(),
                window: *window,
                value: indicators::sma(closes, *window)?,
            },
            StockFunction::CalculateEma { window, .. } => FunctionOutput::Ema {
                ticker: ticker.to_string(),
                window: *window,
                value: indicators::ema(closes, *window)?,
            },
            StockFunction::CalculateRsi { .. } => {
                let value = indicators::rsi(closes)?;
                FunctionOutput::Rsi {
                    ticker: ticker.to_string(),
                    value,
                    interpretation: indicators::interpret_rsi(value).to_string(),
                }
            }
            StockFunction::CalculateMacd { .. } => {
                FunctionOutput::macd(ticker, indicators::macd(closes)?)
            }
            StockFunction::PlotStockPrice { .. } => self.plot(ticker, &series, chart_path).await?,
        };

        Ok(output)
    }

    async fn plot(
        &self,
        ticker: &str,
        series: &PriceSeries,
        chart_path: &Path,
    ) -> Result<FunctionOutput> {
        let points = indicators::chart_points(series)?;
        let count = points.len();
        let path = chart_path.to_path_buf();

        let renderer = Arc::clone(&self.charts);
        let owned_ticker = ticker.to_string();
        let destination = path.clone();
        tokio::task::spawn_blocking(move || renderer.render(&owned_ticker, &points, &destination))
            .await
            .map_err(|e| ChartError::Drawing(format!("render task failed: {e}")))??;

        info!(ticker, path = %path.display(), "chart written");
        Ok(FunctionOutput::Chart {
            ticker: ticker.to_string(),
            path,
            points: count,
        })
    }

    /// File for the `index`-th chart of a turn (0-based)
    ///
    /// `stock.svg` stays `stock.svg` for the first chart; the second chart of
    /// AAPL becomes `stock-2-AAPL.svg`.
    fn chart_destination(&self, index: usize, ticker: &str) -> PathBuf {
        let base = &self.config.chart_path;
        if index == 0 {
            return base.clone();
        }

        let stem = base
            .file_stem()
            .map_or_else(|| "chart".to_string(), |s| s.to_string_lossy().into_owned());
        let mut name = format!("{stem}-{}-{ticker}", index + 1);
        if let Some(ext) = base.extension() {
            name.push('.');
            name.push_str(&ext.to_string_lossy());
        }
        base.with_file_name(name)
    }

    fn build_request(&self, history: &[Message]) -> CompletionRequest {
        CompletionRequest::builder(&self.config.model)
            .messages(history.to_vec())
            .maybe_system(self.config.system_prompt.clone())
            .max_tokens(self.config.max_tokens as usize)
            .temperature(self.config.temperature)
            .tools(self.tools.clone())
            .build()
    }
}
