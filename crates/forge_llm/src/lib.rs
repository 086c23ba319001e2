//! # forge_llm
//!
//! Gemini API access for InfraForge.
//!
//! Exposes the [`ModelClient`] trait as the seam between generators and
//! the hosted model, a [`GeminiClient`] implementation over the
//! Generative Language API, runtime configuration from the environment,
//! and the prompt builders for each artifact kind.

pub mod client;
pub mod config;
pub mod error;
pub mod prompts;

pub use client::{GeminiClient, ModelClient};
pub use config::ForgeConfig;
pub use error::{LlmError, LlmResult};
