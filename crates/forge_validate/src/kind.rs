//! Artifact kind dispatch.

use crate::dockerfile::validate_dockerfile;
use crate::kubernetes::{validate_kubernetes_manifest, validate_yaml_syntax};
use crate::result::ValidationResult;
use crate::terraform::validate_terraform_syntax;

/// The closed set of artifact kinds this tool generates.
///
/// Each kind carries its own validator and the markdown fence tags its
/// model output tends to be wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Kubernetes,
    Terraform,
    Docker,
    Cicd,
}

impl ArtifactKind {
    /// Validate one artifact of this kind.
    pub fn validate(&self, content: &str) -> ValidationResult {
        match self {
            Self::Kubernetes => validate_kubernetes_manifest(content),
            Self::Terraform => validate_terraform_syntax(content),
            Self::Docker => validate_dockerfile(content),
            // Pipeline configs are YAML; only syntax is checked.
            Self::Cicd => validate_yaml_syntax(content),
        }
    }

    /// Markdown language tags to strip from model output for this kind.
    pub fn fence_tags(&self) -> &'static [&'static str] {
        match self {
            Self::Kubernetes | Self::Cicd => &["yaml"],
            Self::Terraform => &["hcl", "terraform"],
            Self::Docker => &["dockerfile"],
        }
    }

    /// Lowercase label used in guides and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kubernetes => "kubernetes",
            Self::Terraform => "terraform",
            Self::Docker => "docker",
            Self::Cicd => "cicd",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_routes_to_kind_validator() {
        let result = ArtifactKind::Terraform.validate("");
        assert_eq!(result.errors, vec!["Empty Terraform file"]);

        let result = ArtifactKind::Docker.validate("RUN true");
        assert_eq!(result.errors, vec!["Dockerfile must start with FROM instruction"]);
    }

    #[test]
    fn test_cicd_is_yaml_syntax_only() {
        let result = ArtifactKind::Cicd.validate("jobs:\n  build:\n    steps: []\n");
        assert!(result.valid);

        let result = ArtifactKind::Cicd.validate("jobs: [broken");
        assert!(!result.valid);
    }

    #[test]
    fn test_fence_tags() {
        assert_eq!(ArtifactKind::Terraform.fence_tags(), &["hcl", "terraform"]);
        assert_eq!(ArtifactKind::Kubernetes.fence_tags(), &["yaml"]);
    }
}
