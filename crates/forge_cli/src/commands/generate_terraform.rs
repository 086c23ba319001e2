//! generate-terraform command - Terraform infrastructure code.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use forge_gen::{GuideBuilder, TerraformGenerator};
use forge_llm::{ForgeConfig, GeminiClient};
use forge_validate::ArtifactKind;

use super::{banner, success};

#[derive(Args)]
pub struct GenerateTerraformArgs {
    /// Cloud provider (aws, azure, gcp)
    #[arg(long, default_value = "aws")]
    cloud: String,

    /// Service to deploy (vpc, rds, eks, etc.)
    #[arg(long, default_value = "vpc")]
    service: String,

    /// Cloud region
    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// Output directory (defaults to FORGE_OUTPUT_DIR or ./output)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub async fn execute(args: GenerateTerraformArgs) -> Result<()> {
    banner("Terraform Generator");

    let config = ForgeConfig::from_env()?;
    let output = args.output.unwrap_or_else(|| config.output_dir.clone());
    info!("Generating Terraform for {} {}", args.cloud, args.service);

    let requirements = format!(
        "\
Generate Terraform code for {} infrastructure:
- Cloud provider: {}
- Service: {}
- Region: {}

Requirements:
- Create VPC with public and private subnets
- Set up Internet Gateway and NAT Gateway
- Configure security groups with least privilege
- Enable encryption at rest
- Include proper tagging
- Use variables for configurable values
- Add outputs for important resource IDs
",
        args.cloud.to_uppercase(),
        args.cloud,
        args.service,
        args.region
    );

    let client = Arc::new(GeminiClient::new(&config));
    let generator = TerraformGenerator::new(client);

    let tf_files = generator.generate(&requirements).await?;
    generator.save_outputs(&tf_files, &output)?;

    let guide =
        GuideBuilder::implementation_guide(ArtifactKind::Terraform, &tf_files, &requirements);
    GuideBuilder::save_guide(&guide, &output)?;

    let files: Vec<String> = tf_files.filenames().map(String::from).collect();
    success(
        "Terraform code generated",
        &output,
        &files,
        &[
            "Review the generated files",
            &format!("cd {}", output.display()),
            "terraform init",
            "terraform plan",
            "terraform apply",
        ],
    );

    Ok(())
}
