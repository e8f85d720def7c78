//! Stock Analysis Chatbot Assistant
//!
//! An interactive command-line chat about stock prices and indicators.
//!
//! # Usage
//!
//! ```bash
//! # Credentials can also live in a .env file
//! export OPENAI_API_KEY="sk-..."
//!
//! cargo run -p stockchat-cli -- --model gpt-4o-mini
//! ```

mod commands;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use stockchat::{ChatConfig, Orchestrator, Session, TurnReply};
use stockchat_llm::providers::{OpenAIConfig, OpenAIProvider};
use tracing::info;

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(name = "stockchat")]
#[command(about = "Stock Analysis Chatbot Assistant", long_about = None)]
struct Args {
    /// Chat model (overrides STOCKCHAT_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Base URL of an OpenAI-compatible API (overrides OPENAI_API_BASE)
    #[arg(long)]
    api_base: Option<String>,

    /// Where charts are written (overrides STOCKCHAT_CHART_PATH)
    #[arg(long)]
    chart_path: Option<PathBuf>,

    /// Days of price history per request (overrides STOCKCHAT_LOOKBACK_DAYS)
    #[arg(long)]
    lookback_days: Option<u32>,

    #[arg(long)]
    max_tokens: Option<u32>,

    #[arg(long)]
    temperature: Option<f32>,

    /// Optional system prompt sent with every request
    #[arg(long)]
    system_prompt: Option<String>,
}

fn build_config(args: &Args) -> anyhow::Result<ChatConfig> {
    let mut builder = ChatConfig::builder();
    if let Some(model) = &args.model {
        builder = builder.model(model);
    }
    if let Some(path) = &args.chart_path {
        builder = builder.chart_path(path);
    }
    if let Some(days) = args.lookback_days {
        builder = builder.lookback_days(days);
    }
    if let Some(max_tokens) = args.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if let Some(temperature) = args.temperature {
        builder = builder.temperature(temperature);
    }
    if let Some(prompt) = &args.system_prompt {
        builder = builder.system_prompt(prompt);
    }

    Ok(builder.with_env()?.build()?)
}

fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════════════════╗
║               Stock Analysis Chatbot Assistant               ║
║                                                              ║
║  Ask about prices, SMA, EMA, RSI and MACD, or for a chart.   ║
║  /help for commands, /exit to quit.                          ║
╚══════════════════════════════════════════════════════════════╝
"#
    );
}

fn print_reply(reply: &TurnReply) {
    if let Some(text) = &reply.text {
        println!("{text}");
    }
    for chart in &reply.charts {
        println!(
            "Chart of {} ({} days) saved to {}",
            chart.ticker,
            chart.points,
            chart.path.display()
        );
    }
    println!();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    stockchat_utils::load_dotenv();
    stockchat_utils::init_tracing();

    let args = Args::parse();
    let config = build_config(&args)?;

    let mut openai_config = OpenAIConfig::from_env()?;
    if let Some(api_base) = &args.api_base {
        openai_config = openai_config.with_api_base(api_base.as_str());
    }

    print_banner();
    println!("Configuration:");
    println!("  API Base: {}", openai_config.api_base);
    println!("  Model: {}", config.model);
    println!("  Charts: {}", config.chart_path.display());
    println!();

    let provider = Arc::new(OpenAIProvider::with_config(openai_config)?);
    let orchestrator = Orchestrator::with_defaults(provider, config);
    let mut session = Session::new();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let command = match Command::parse(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("Error: {e}\n");
                continue;
            }
        };

        match command {
            Command::Help => println!("{}", Command::help_text()),
            Command::Reset => {
                std::mem::replace(&mut session, Session::new()).end();
                println!("Started a new conversation.\n");
            }
            Command::History => {
                println!("{} messages in this conversation.\n", session.len());
            }
            Command::Exit => {
                println!("Goodbye!");
                break;
            }
            Command::Query { text } => match orchestrator.handle_turn(&mut session, &text).await {
                Ok(reply) => print_reply(&reply),
                Err(e) => eprintln!("Error: {e}\n"),
            },
        }
    }

    session.end();
    info!("stockchat exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "stockchat",
            "--model",
            "gpt-4o-mini",
            "--chart-path",
            "charts/out.svg",
            "--lookback-days",
            "90",
            "--max-tokens",
            "512",
            "--temperature",
            "0.3",
        ])
        .unwrap();

        let config = build_config(&args).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.chart_path, PathBuf::from("charts/out.svg"));
        assert_eq!(config.lookback_days, 90);
        assert_eq!(config.max_tokens, 512);
        assert_eq!(config.temperature, Some(0.3));
    }

    #[test]
    fn test_invalid_flag_value_rejected() {
        let args = Args::try_parse_from(["stockchat", "--lookback-days", "0"]).unwrap();
        assert!(build_config(&args).is_err());
    }

    #[test]
    fn test_api_base_flag() {
        let args = Args::try_parse_from(["stockchat", "--api-base", "http://localhost:1234/v1/"])
            .unwrap();
        assert_eq!(args.api_base.as_deref(), Some("http://localhost:1234/v1/"));
    }
}
