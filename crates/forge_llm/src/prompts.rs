//! Prompt builders for the four artifact kinds.
//!
//! Each prompt asks the model to separate multiple files with the
//! `# FILE:` marker convention that `forge_parse` splits on. The model is
//! not guaranteed to honor it.

/// Prompt for Kubernetes manifest generation.
pub fn kubernetes_manifests(requirements: &str) -> String {
    format!(
        r#"You are an expert Kubernetes architect and DevOps engineer.

Generate PRODUCTION-READY Kubernetes YAML manifests based on these requirements:
{requirements}

CRITICAL INSTRUCTIONS:
1. Generate COMPLETE, working YAML (not snippets or examples)
2. Include EVERY required field for production use
3. Add inline comments with links to official Kubernetes documentation
4. Every major field MUST reference the official docs: https://kubernetes.io/docs/...
5. Implement security best practices:
   - runAsNonRoot: true
   - readOnlyRootFilesystem: true (where applicable)
   - allowPrivilegeEscalation: false
   - Drop unnecessary capabilities
   - Resource limits enforced
6. Include health checks (liveness + readiness probes)
7. Use exact field names from official Kubernetes API spec
8. Make code production-ready (no "change-me" placeholders)
9. Include proper labels and selectors
10. Add resource requests and limits

Generate these files in order:
1. deployment.yaml - Complete Deployment manifest
2. service.yaml - Service for networking
3. configmap.yaml - ConfigMap for configuration

Separate each file with:
---
# FILE: filename.yaml

Include documentation comments above each major field explaining what it does and linking to official Kubernetes docs.
"#
    )
}

/// Prompt for Terraform code generation.
pub fn terraform_code(requirements: &str) -> String {
    format!(
        r#"You are an expert Terraform architect specializing in AWS infrastructure.

Generate PRODUCTION-READY Terraform code based on these requirements:
{requirements}

CRITICAL INSTRUCTIONS:
1. Generate complete Terraform code (not snippets)
2. Include proper provider configuration
3. Add inline comments with links to Terraform Registry docs
4. Every resource MUST reference official docs: https://registry.terraform.io/providers/hashicorp/aws/latest/docs/...
5. Implement security best practices:
   - Use VPC with private subnets
   - Enable encryption at rest
   - Proper security group rules
   - Enable logging where applicable
6. Use exact field names from official AWS provider docs
7. Make code production-ready
8. Include proper resource dependencies
9. Use variables for configurable values

Generate these files in order:
1. main.tf - Main infrastructure resources
2. variables.tf - Input variables
3. outputs.tf - Output values

Separate each file with:
---
# FILE: filename.tf

Include documentation comments explaining each resource and linking to official Terraform documentation.
"#
    )
}

/// Prompt for Dockerfile generation.
pub fn dockerfile(requirements: &str) -> String {
    format!(
        r#"You are an expert Docker architect.

Generate a PRODUCTION-READY, optimized Dockerfile based on these requirements:
{requirements}

CRITICAL INSTRUCTIONS:
1. Use multi-stage builds for optimization
2. Include comments with links to Docker documentation
3. Every instruction MUST have a comment explaining why it's there
4. Reference official docs: https://docs.docker.com/...
5. Implement security best practices:
   - Use specific version tags (not 'latest')
   - Run as non-root user
   - Use minimal base image (alpine/slim variants)
   - Don't include unnecessary packages
6. Optimize for layer caching:
   - Copy dependency files first
   - Copy source code last
7. Use .dockerignore patterns
8. Include HEALTHCHECK if applicable
9. Proper ENTRYPOINT and CMD usage

Generate a complete Dockerfile with detailed comments explaining each instruction and linking to official Docker documentation.
"#
    )
}

/// Prompt for CI/CD pipeline generation. Unknown platforms fall back to
/// GitHub Actions conventions.
pub fn cicd_pipeline(requirements: &str, platform: &str) -> String {
    let docs = match platform {
        "gitlab" => "https://docs.gitlab.com/ee/ci/",
        _ => "https://docs.github.com/en/actions",
    };

    format!(
        r#"You are an expert DevOps engineer specializing in CI/CD pipelines.

Generate a PRODUCTION-READY {platform_upper} CI/CD pipeline based on these requirements:
{requirements}

CRITICAL INSTRUCTIONS:
1. Generate complete pipeline configuration (not snippets)
2. Include inline comments with links to official {platform} docs
3. Reference: {docs}
4. Implement best practices:
   - Proper job dependencies
   - Caching where applicable
   - Secrets management
   - Parallel execution where possible
5. Include typical stages:
   - Build
   - Test
   - Deploy
6. Use specific action/image versions
7. Add proper error handling

Generate a complete pipeline configuration with detailed comments linking to official documentation.
"#,
        platform_upper = platform.to_uppercase(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_embed_requirements() {
        let requirements = "3 replicas of a flask app";
        for prompt in [
            kubernetes_manifests(requirements),
            terraform_code(requirements),
            dockerfile(requirements),
            cicd_pipeline(requirements, "github"),
        ] {
            assert!(prompt.contains(requirements));
        }
    }

    #[test]
    fn test_multi_file_prompts_request_markers() {
        assert!(kubernetes_manifests("x").contains("# FILE: filename.yaml"));
        assert!(terraform_code("x").contains("# FILE: filename.tf"));
    }

    #[test]
    fn test_cicd_platform_docs() {
        assert!(cicd_pipeline("x", "gitlab").contains("docs.gitlab.com"));
        assert!(cicd_pipeline("x", "github").contains("docs.github.com"));
        // Unknown platforms default to GitHub docs.
        assert!(cicd_pipeline("x", "circle").contains("docs.github.com"));
    }
}
