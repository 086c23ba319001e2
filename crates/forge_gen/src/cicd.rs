//! CI/CD pipeline generator.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use forge_llm::{prompts, ModelClient};
use forge_parse::strip_code_fences;
use forge_validate::ArtifactKind;

use crate::error::GenResult;
use crate::report;

/// Supported CI/CD platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CicdPlatform {
    Github,
    Gitlab,
}

impl CicdPlatform {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
        }
    }

    /// Where the pipeline file lands relative to the output directory.
    pub fn target_path(&self, output_dir: &Path) -> PathBuf {
        match self {
            Self::Github => output_dir.join(".github").join("workflows").join("deploy.yml"),
            Self::Gitlab => output_dir.join(".gitlab-ci.yml"),
        }
    }
}

impl std::fmt::Display for CicdPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Generator for CI/CD pipeline configurations.
pub struct CicdGenerator {
    client: Arc<dyn ModelClient>,
}

impl CicdGenerator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Generate and validate a pipeline configuration.
    pub async fn generate(&self, requirements: &str, platform: CicdPlatform) -> GenResult<String> {
        info!("Generating {} CI/CD pipeline", platform);
        println!("🚀 Generating {} CI/CD pipeline...", platform.name().to_uppercase());

        let raw = self
            .client
            .generate(&prompts::cicd_pipeline(requirements, platform.name()))
            .await?;

        let pipeline = strip_code_fences(&raw, ArtifactKind::Cicd.fence_tags());

        println!("\n✅ Validating generated pipeline...");
        let result = ArtifactKind::Cicd.validate(&pipeline);
        report::print_findings(platform.name(), &result);

        Ok(pipeline)
    }

    /// Write the pipeline to its platform-specific path, creating parent
    /// directories as needed.
    pub fn save_output(
        &self,
        pipeline: &str,
        output_dir: &Path,
        platform: CicdPlatform,
    ) -> GenResult<()> {
        let path = platform.target_path(output_dir);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&path, pipeline)?;
        println!("✅ Generated: {}", path.display());

        Ok(())
    }
}
