//! Dockerfile generator.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use forge_llm::{prompts, ModelClient};
use forge_parse::strip_code_fences;
use forge_validate::ArtifactKind;

use crate::error::GenResult;
use crate::report;

/// Standard ignore patterns written alongside every generated Dockerfile.
const DOCKERIGNORE: &str = "\
# Git
.git
.gitignore

# Python
__pycache__
*.pyc
*.pyo
*.pyd
.Python
*.so
*.egg
*.egg-info
venv/
.venv/
.env

# IDE
.vscode/
.idea/
*.swp

# OS
.DS_Store
Thumbs.db

# Docs
*.md
!README.md

# Build
dist/
build/
";

/// Generator for optimized Dockerfiles.
pub struct DockerGenerator {
    client: Arc<dyn ModelClient>,
}

impl DockerGenerator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Generate and validate a single Dockerfile.
    pub async fn generate(&self, requirements: &str) -> GenResult<String> {
        info!("Generating Dockerfile");
        println!("🚀 Generating Dockerfile...");

        let raw = self.client.generate(&prompts::dockerfile(requirements)).await?;
        let dockerfile = strip_code_fences(&raw, ArtifactKind::Docker.fence_tags());

        println!("\n✅ Validating generated Dockerfile...");
        let result = ArtifactKind::Docker.validate(&dockerfile);
        report::print_findings("Dockerfile", &result);

        Ok(dockerfile)
    }

    /// Write the Dockerfile and a companion `.dockerignore`.
    pub fn save_output(&self, dockerfile: &str, output_dir: &Path) -> GenResult<()> {
        fs::create_dir_all(output_dir)?;

        let dockerfile_path = output_dir.join("Dockerfile");
        fs::write(&dockerfile_path, dockerfile)?;
        println!("✅ Generated: {}", dockerfile_path.display());

        let ignore_path = output_dir.join(".dockerignore");
        fs::write(&ignore_path, DOCKERIGNORE)?;
        println!("✅ Generated: {}", ignore_path.display());

        Ok(())
    }
}
