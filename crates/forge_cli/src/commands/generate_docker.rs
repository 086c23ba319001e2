//! generate-docker command - optimized Dockerfile.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use forge_gen::{DockerGenerator, GuideBuilder};
use forge_llm::{ForgeConfig, GeminiClient};
use forge_parse::ArtifactSet;
use forge_validate::ArtifactKind;

use super::{banner, success};

#[derive(Args)]
pub struct GenerateDockerArgs {
    /// Application type (python, nodejs, java, go)
    #[arg(long)]
    app: String,

    /// Base image (e.g. python:3.11-slim)
    #[arg(long)]
    base_image: Option<String>,

    /// Exposed port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Output directory (defaults to FORGE_OUTPUT_DIR or ./output)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub async fn execute(args: GenerateDockerArgs) -> Result<()> {
    banner("Dockerfile Generator");

    let config = ForgeConfig::from_env()?;
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    info!("Generating Dockerfile for {} app", args.app);

    let base_image_line = match &args.base_image {
        Some(image) => format!("Using base image: {}\n", image),
        None => String::new(),
    };

    let requirements = format!(
        "\
Generate optimized Dockerfile for {} application:
- Application type: {}
{}- Exposed port: {}

Requirements:
- Use multi-stage build for optimization
- Run as non-root user
- Use minimal base image (alpine or slim variants)
- Implement layer caching best practices
- Add HEALTHCHECK
- Include security best practices
- Optimize for small image size
",
        args.app, args.app, base_image_line, args.port
    );

    let client = Arc::new(GeminiClient::new(&config));
    let generator = DockerGenerator::new(client);

    let dockerfile = generator.generate(&requirements).await?;
    generator.save_output(&dockerfile, &output)?;

    // The guide builder works off the file set, so wrap the single file.
    let mut files = ArtifactSet::new();
    files.insert("Dockerfile", dockerfile);
    let guide = GuideBuilder::implementation_guide(ArtifactKind::Docker, &files, &requirements);
    GuideBuilder::save_guide(&guide, &output)?;

    success(
        "Dockerfile generated",
        &output,
        &["Dockerfile".to_string(), ".dockerignore".to_string()],
        &[
            "Review the generated Dockerfile",
            &format!("docker build -t my-app:latest {}", output.display()),
            &format!("docker run -p {}:{} my-app:latest", args.port, args.port),
        ],
    );

    Ok(())
}
