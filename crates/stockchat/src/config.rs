//! Configuration for the dialogue loop

use std::path::PathBuf;

use stockchat_utils::{env_or, env_parse};

use crate::error::{Result, StockChatError};

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_CHART_PATH: &str = "stock.svg";
pub const DEFAULT_LOOKBACK_DAYS: u32 = 365;
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_MAX_FUNCTION_ROUNDS: usize = 5;

/// Settings for one chat session
#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    /// Model identifier sent with every completion request
    pub model: String,

    pub max_tokens: u32,

    /// Sampling temperature; `None` leaves the service default
    pub temperature: Option<f32>,

    /// Optional system prompt prepended to every request
    pub system_prompt: Option<String>,

    /// How many days of daily closes to fetch per function call
    pub lookback_days: u32,

    /// Where plot_stock_price writes its chart; overwritten on every plot
    pub chart_path: PathBuf,

    /// Upper bound on model round trips in one turn
    pub max_function_rounds: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
            system_prompt: None,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            max_function_rounds: DEFAULT_MAX_FUNCTION_ROUNDS,
        }
    }
}

impl ChatConfig {
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::default()
    }

    /// Defaults overridden by `STOCKCHAT_MODEL`, `STOCKCHAT_CHART_PATH` and
    /// `STOCKCHAT_LOOKBACK_DAYS`
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env()?.build()
    }

    pub fn lookback(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.lookback_days))
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(StockChatError::Config("model must not be empty".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(StockChatError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }
        if self.lookback_days == 0 {
            return Err(StockChatError::Config(
                "lookback_days must be greater than 0".to_string(),
            ));
        }
        if self.max_function_rounds == 0 {
            return Err(StockChatError::Config(
                "max_function_rounds must be greater than 0".to_string(),
            ));
        }
        if self.chart_path.as_os_str().is_empty() {
            return Err(StockChatError::Config(
                "chart_path must not be empty".to_string(),
            ));
        }
        if let Some(t) = self.temperature {
            if !(0.0..=2.0).contains(&t) {
                return Err(StockChatError::Config(format!(
                    "temperature {t} is outside 0.0..=2.0"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for [`ChatConfig`]
#[derive(Debug, Default)]
pub struct ChatConfigBuilder {
    model: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    system_prompt: Option<String>,
    lookback_days: Option<u32>,
    chart_path: Option<PathBuf>,
    max_function_rounds: Option<usize>,
}

impl ChatConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = Some(days);
        self
    }

    pub fn chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_path = Some(path.into());
        self
    }

    pub fn max_function_rounds(mut self, rounds: usize) -> Self {
        self.max_function_rounds = Some(rounds);
        self
    }

    /// Fill unset fields from the environment
    ///
    /// Values already set on the builder win, so command-line flags can be
    /// applied before or after this call.
    pub fn with_env(mut self) -> Result<Self> {
        if self.model.is_none() {
            let model = env_or("STOCKCHAT_MODEL", DEFAULT_MODEL);
            self.model = Some(model);
        }
        if self.chart_path.is_none() {
            let path = env_or("STOCKCHAT_CHART_PATH", DEFAULT_CHART_PATH);
            self.chart_path = Some(PathBuf::from(path));
        }
        if self.lookback_days.is_none() {
            self.lookback_days =
                env_parse::<u32>("STOCKCHAT_LOOKBACK_DAYS").map_err(StockChatError::Config)?;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<ChatConfig> {
        let defaults = ChatConfig::default();

        let config = ChatConfig {
            model: self.model.unwrap_or(defaults.model),
            max_tokens: self.max_tokens.unwrap_or(defaults.max_tokens),
            temperature: self.temperature,
            system_prompt: self.system_prompt,
            lookback_days: self.lookback_days.unwrap_or(defaults.lookback_days),
            chart_path: self.chart_path.unwrap_or(defaults.chart_path),
            max_function_rounds: self
                .max_function_rounds
                .unwrap_or(defaults.max_function_rounds),
        };

        config.validate()?;
        Ok(config)
    }
}
