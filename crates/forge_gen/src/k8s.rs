//! Kubernetes manifest generator.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use forge_llm::{prompts, ModelClient};
use forge_parse::{segment_documents, ArtifactSet, MarkerSplitter};
use forge_validate::ArtifactKind;

use crate::error::GenResult;
use crate::report;

/// Generator for Kubernetes manifests (Deployment, Service, ConfigMap).
pub struct K8sGenerator {
    client: Arc<dyn ModelClient>,
}

impl K8sGenerator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Generate and validate manifests from natural-language requirements.
    pub async fn generate(&self, requirements: &str) -> GenResult<ArtifactSet> {
        info!("Generating Kubernetes manifests");
        println!("🚀 Generating Kubernetes manifests...");

        let raw = self
            .client
            .generate(&prompts::kubernetes_manifests(requirements))
            .await?;

        let manifests = self.parse_output(&raw);

        println!("\n✅ Validating generated manifests...");
        for artifact in &manifests {
            let result = ArtifactKind::Kubernetes.validate(&artifact.content);
            report::print_findings(&artifact.filename, &result);
        }

        Ok(manifests)
    }

    /// Split raw model output into named manifests, falling back to
    /// document segmentation when no file markers were emitted.
    fn parse_output(&self, raw: &str) -> ArtifactSet {
        let splitter = MarkerSplitter::new();
        let manifests = splitter.split(raw, ArtifactKind::Kubernetes.fence_tags());

        if manifests.is_empty() {
            debug!("No file markers found, segmenting on document separators");
            return segment_documents(raw);
        }

        manifests
    }

    /// Write each manifest to `output_dir`, creating it if needed.
    /// Existing files are overwritten. Writes are not transactional.
    pub fn save_outputs(&self, manifests: &ArtifactSet, output_dir: &Path) -> GenResult<()> {
        fs::create_dir_all(output_dir)?;

        for artifact in manifests {
            let path = output_dir.join(&artifact.filename);
            fs::write(&path, &artifact.content)?;
            println!("✅ Generated: {}", path.display());
        }

        Ok(())
    }
}
