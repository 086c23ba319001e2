//! CLI command definitions.
//!
//! Each subcommand assembles a requirements string from its options, runs
//! the matching generator against the Gemini API, persists the artifacts
//! and writes an implementation guide.

use clap::{Parser, Subcommand};

pub mod generate_cicd;
pub mod generate_docker;
pub mod generate_k8s;
pub mod generate_terraform;

/// InfraForge - AI-driven infrastructure code generation
#[derive(Parser)]
#[command(name = "forge")]
#[command(version, about = "InfraForge - generate infrastructure code from plain-language requirements")]
#[command(long_about = r#"
InfraForge turns short natural-language descriptions into production-ready
infrastructure artifacts by prompting Gemini and validating the output.

WORKFLOWS:
  generate-k8s       → Kubernetes manifests (Deployment, Service, ConfigMap)
  generate-terraform → Terraform infrastructure code
  generate-docker    → Optimized Dockerfile with .dockerignore
  generate-cicd      → CI/CD pipeline (GitHub Actions or GitLab CI)

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
  4 - Model/provider error

GEMINI_API_KEY must be set in the environment.
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Kubernetes manifests (Deployment, Service, ConfigMap)
    #[command(name = "generate-k8s")]
    GenerateK8s(generate_k8s::GenerateK8sArgs),

    /// Generate Terraform infrastructure code
    #[command(name = "generate-terraform")]
    GenerateTerraform(generate_terraform::GenerateTerraformArgs),

    /// Generate an optimized Dockerfile
    #[command(name = "generate-docker")]
    GenerateDocker(generate_docker::GenerateDockerArgs),

    /// Generate a CI/CD pipeline configuration
    #[command(name = "generate-cicd")]
    GenerateCicd(generate_cicd::GenerateCicdArgs),
}

/// Print the section banner all subcommands open with.
pub(crate) fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("🚀 InfraForge - {}", title);
    println!("{}", "=".repeat(60));
}

/// Print the closing success banner with the generated file list.
pub(crate) fn success(title: &str, output: &std::path::Path, files: &[String], next_steps: &[&str]) {
    println!("\n{}", "=".repeat(60));
    println!("✅ SUCCESS! {}", title);
    println!("{}", "=".repeat(60));
    println!("\n📁 Output directory: {}", output.display());
    println!("\nGenerated files:");
    for file in files {
        println!("  - {}", file);
    }
    println!("  - IMPLEMENTATION_GUIDE.md");
    println!("\n💡 Next steps:");
    for (i, step) in next_steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
}
