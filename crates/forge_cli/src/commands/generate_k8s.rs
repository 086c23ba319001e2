//! generate-k8s command - Kubernetes manifests.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use forge_gen::{GuideBuilder, K8sGenerator};
use forge_llm::{ForgeConfig, GeminiClient};
use forge_validate::ArtifactKind;

use super::{banner, success};

#[derive(Args)]
pub struct GenerateK8sArgs {
    /// Application type (e.g. flask, django, nodejs)
    #[arg(long)]
    app: String,

    /// Number of replicas
    #[arg(long, default_value_t = 3)]
    replicas: u32,

    /// Container port
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Memory limit
    #[arg(long, default_value = "512Mi")]
    memory: String,

    /// CPU limit
    #[arg(long, default_value = "250m")]
    cpu: String,

    /// Output directory (defaults to FORGE_OUTPUT_DIR or ./output)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub async fn execute(args: GenerateK8sArgs) -> Result<()> {
    banner("Kubernetes Generator");

    let config = ForgeConfig::from_env()?;
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    info!("Generating Kubernetes manifests for {} app", args.app);

    let requirements = format!(
        "\
Generate Kubernetes deployment for:
- Application type: {}
- Number of replicas: {}
- Container port: {}
- Memory limit: {}
- CPU limit: {}

Requirements:
- Include LoadBalancer Service for external access
- Add ConfigMap for environment variables
- Implement health checks (liveness and readiness probes)
- Apply security best practices (non-root user, read-only filesystem)
- Add resource requests and limits
- Include proper labels and selectors
",
        args.app, args.replicas, args.port, args.memory, args.cpu
    );

    let client = Arc::new(GeminiClient::new(&config));
    let generator = K8sGenerator::new(client);

    let manifests = generator.generate(&requirements).await?;
    generator.save_outputs(&manifests, &output)?;

    let guide =
        GuideBuilder::implementation_guide(ArtifactKind::Kubernetes, &manifests, &requirements);
    GuideBuilder::save_guide(&guide, &output)?;

    let files: Vec<String> = manifests.filenames().map(String::from).collect();
    success(
        "Kubernetes manifests generated",
        &output,
        &files,
        &[
            "Review the generated files",
            &format!("kubectl apply -f {}/", output.display()),
            "Check IMPLEMENTATION_GUIDE.md for detailed instructions",
        ],
    );

    Ok(())
}
