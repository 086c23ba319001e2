//! # forge_gen
//!
//! Generation orchestration for InfraForge.
//!
//! One generator per artifact kind drives the pipeline: build prompt →
//! call the model → strip fences → split into files → validate →
//! report → persist. Validation findings are advisory; only a model
//! failure aborts a run, and nothing is written in that case.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use forge_gen::K8sGenerator;
//! use forge_llm::{ForgeConfig, GeminiClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ForgeConfig::from_env()?;
//! let client = Arc::new(GeminiClient::new(&config));
//! let generator = K8sGenerator::new(client);
//!
//! let manifests = generator.generate("flask app, 3 replicas").await?;
//! generator.save_outputs(&manifests, &config.output_dir)?;
//! # Ok(())
//! # }
//! ```

pub mod cicd;
pub mod docker;
pub mod docs;
pub mod error;
pub mod guide;
pub mod k8s;
pub mod report;
pub mod terraform;

pub use cicd::{CicdGenerator, CicdPlatform};
pub use docker::DockerGenerator;
pub use error::{GenError, GenResult};
pub use guide::GuideBuilder;
pub use k8s::K8sGenerator;
pub use terraform::TerraformGenerator;
