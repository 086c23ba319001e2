//! Terraform code generator.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use forge_llm::{prompts, ModelClient};
use forge_parse::{strip_code_fences, ArtifactSet, MarkerSplitter};
use forge_validate::ArtifactKind;

use crate::error::GenResult;
use crate::report;

/// Generator for Terraform infrastructure code.
pub struct TerraformGenerator {
    client: Arc<dyn ModelClient>,
}

impl TerraformGenerator {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    /// Generate and validate Terraform files from natural-language
    /// requirements.
    pub async fn generate(&self, requirements: &str) -> GenResult<ArtifactSet> {
        info!("Generating Terraform code");
        println!("🚀 Generating Terraform code...");

        let raw = self
            .client
            .generate(&prompts::terraform_code(requirements))
            .await?;

        let tf_files = self.parse_output(&raw);

        println!("\n✅ Validating generated Terraform code...");
        for artifact in &tf_files {
            let result = ArtifactKind::Terraform.validate(&artifact.content);
            report::print_findings(&artifact.filename, &result);
        }

        Ok(tf_files)
    }

    /// Split on file markers; without any, the whole response becomes
    /// `main.tf`.
    fn parse_output(&self, raw: &str) -> ArtifactSet {
        let fence_tags = ArtifactKind::Terraform.fence_tags();
        let splitter = MarkerSplitter::new();
        let mut tf_files = splitter.split(raw, fence_tags);

        if tf_files.is_empty() {
            debug!("No file markers found, writing everything to main.tf");
            tf_files.insert("main.tf", strip_code_fences(raw, fence_tags));
        }

        tf_files
    }

    /// Write each file to `output_dir`, creating it if needed.
    pub fn save_outputs(&self, tf_files: &ArtifactSet, output_dir: &Path) -> GenResult<()> {
        fs::create_dir_all(output_dir)?;

        for artifact in tf_files {
            let path = output_dir.join(&artifact.filename);
            fs::write(&path, &artifact.content)?;
            println!("✅ Generated: {}", path.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_llm::LlmResult;
    use tempfile::tempdir;

    struct CannedClient(String);

    #[async_trait::async_trait]
    impl ModelClient for CannedClient {
        async fn generate(&self, _prompt: &str) -> LlmResult<String> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_parse_output_with_markers() {
        let raw = "---\n# FILE: main.tf\nprovider \"aws\" {}\n---\n# FILE: variables.tf\nvariable \"region\" {}\n";
        let generator = TerraformGenerator::new(Arc::new(CannedClient(String::new())));

        let tf_files = generator.parse_output(raw);
        let names: Vec<_> = tf_files.filenames().collect();
        assert_eq!(names, vec!["main.tf", "variables.tf"]);
    }

    #[test]
    fn test_parse_output_without_markers_is_main_tf() {
        let raw = "```hcl\nresource \"aws_vpc\" \"main\" {}\n```";
        let generator = TerraformGenerator::new(Arc::new(CannedClient(String::new())));

        let tf_files = generator.parse_output(raw);
        assert_eq!(tf_files.len(), 1);
        assert_eq!(tf_files.get("main.tf"), Some("resource \"aws_vpc\" \"main\" {}"));
    }

    #[tokio::test]
    async fn test_generate_and_save() {
        let raw = "---\n# FILE: main.tf\n```terraform\nterraform {\n  required_version = \">= 1.0\"\n}\n```\n";
        let generator = TerraformGenerator::new(Arc::new(CannedClient(raw.to_string())));

        let tf_files = generator.generate("a vpc").await.unwrap();

        let dir = tempdir().unwrap();
        generator.save_outputs(&tf_files, dir.path()).unwrap();
        assert!(dir.path().join("main.tf").exists());
    }
}
