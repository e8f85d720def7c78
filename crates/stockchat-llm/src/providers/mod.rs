//! Concrete model providers

pub mod openai;

pub use openai::{OpenAIConfig, OpenAIProvider};
