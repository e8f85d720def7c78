//! REPL command parsing

use anyhow::{Result, bail};

/// Parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show help
    Help,
    /// End the session and start a fresh one
    Reset,
    /// Show how many messages the session holds
    History,
    /// Leave the REPL
    Exit,
    /// Anything that is not a slash command goes to the model
    Query { text: String },
}

impl Command {
    /// Parse one input line; `Ok(None)` for a blank line
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let Some(rest) = input.strip_prefix('/') else {
            return Ok(Some(Command::Query {
                text: input.to_string(),
            }));
        };

        let cmd = rest.split_whitespace().next().unwrap_or("").to_lowercase();
        let command = match cmd.as_str() {
            "help" | "h" | "?" => Command::Help,
            "reset" | "clear" => Command::Reset,
            "history" => Command::History,
            "exit" | "quit" | "q" => Command::Exit,
            "" => bail!("Empty command"),
            other => bail!("Unknown command: /{other} (try /help)"),
        };
        Ok(Some(command))
    }

    pub fn help_text() -> &'static str {
        r#"
Commands:
  /help       Show this help
  /reset      Start a new conversation
  /history    Show the number of messages in this conversation
  /exit       Quit

Anything else is sent to the assistant, for example:
  What is the latest price of AAPL?
  Calculate the 20 day SMA for MSFT
  What is the RSI of TSLA?
  Plot the stock price of NVDA
"#
    }
}
