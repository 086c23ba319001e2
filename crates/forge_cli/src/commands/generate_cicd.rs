//! generate-cicd command - CI/CD pipeline configuration.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::info;

use forge_gen::{CicdGenerator, CicdPlatform, GuideBuilder};
use forge_llm::{ForgeConfig, GeminiClient};
use forge_parse::ArtifactSet;
use forge_validate::ArtifactKind;

use super::{banner, success};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Github,
    Gitlab,
}

impl From<PlatformArg> for CicdPlatform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Github => CicdPlatform::Github,
            PlatformArg::Gitlab => CicdPlatform::Gitlab,
        }
    }
}

#[derive(Args)]
pub struct GenerateCicdArgs {
    /// CI/CD platform
    #[arg(long, value_enum, default_value_t = PlatformArg::Github)]
    platform: PlatformArg,

    /// Deployment target (kubernetes, aws, docker)
    #[arg(long, default_value = "kubernetes")]
    deploy_target: String,

    /// Output directory (defaults to FORGE_OUTPUT_DIR or ./output)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub async fn execute(args: GenerateCicdArgs) -> Result<()> {
    let platform = CicdPlatform::from(args.platform);
    banner(&format!("{} CI/CD Generator", platform.name().to_uppercase()));

    let config = ForgeConfig::from_env()?;
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    info!("Generating {} pipeline for {}", platform, args.deploy_target);

    let requirements = format!(
        "\
Generate {} CI/CD pipeline for:
- Platform: {}
- Deployment target: {}

Requirements:
- Build stage: Build and test application
- Docker stage: Build and push Docker image
- Deploy stage: Deploy to {}
- Include caching for dependencies
- Add proper secrets management
- Implement parallel execution where possible
- Add status badges
",
        platform.name().to_uppercase(),
        platform.name(),
        args.deploy_target,
        args.deploy_target
    );

    let client = Arc::new(GeminiClient::new(&config));
    let generator = CicdGenerator::new(client);

    let pipeline = generator.generate(&requirements, platform).await?;
    generator.save_output(&pipeline, &output, platform)?;

    let pipeline_file = platform
        .target_path(&output)
        .strip_prefix(&output)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "pipeline.yml".to_string());

    let mut files = ArtifactSet::new();
    files.insert(pipeline_file.clone(), pipeline);
    let guide = GuideBuilder::implementation_guide(ArtifactKind::Cicd, &files, &requirements);
    GuideBuilder::save_guide(&guide, &output)?;

    success(
        "CI/CD pipeline generated",
        &output,
        &[pipeline_file],
        &[
            "Review the generated pipeline",
            "Configure required secrets in your repository",
            "Commit and push to trigger the pipeline",
        ],
    );

    Ok(())
}
