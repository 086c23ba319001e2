//! Implementation-guide templating.
//!
//! Pure string assembly: builds a human-readable IMPLEMENTATION_GUIDE.md
//! from the generated file set and persists it next to the artifacts.

use std::fs;
use std::path::Path;

use forge_parse::ArtifactSet;
use forge_validate::ArtifactKind;

use crate::error::GenResult;

/// Builder for implementation guides.
pub struct GuideBuilder;

impl GuideBuilder {
    /// Assemble the guide for one generation run.
    pub fn implementation_guide(
        kind: ArtifactKind,
        files: &ArtifactSet,
        requirements: &str,
    ) -> String {
        let mut guide = format!(
            "# Implementation Guide: {}\n\n\
             ## Overview\n\n\
             This guide explains the infrastructure code that was generated based on your requirements.\n\n\
             ### Requirements\n```\n{}\n```\n\n\
             ## Generated Files\n\n",
            capitalize(kind.label()),
            requirements.trim()
        );

        for filename in files.filenames() {
            guide.push_str(&format!(
                "- **{}**: {}\n",
                filename,
                describe_file(filename)
            ));
        }

        guide.push_str(deployment_section(kind));
        guide.push_str(SECURITY_CHECKLIST);
        guide.push_str(CUSTOMIZATION_GUIDE);
        guide.push_str(&documentation_links(kind));

        guide
    }

    /// Write the guide as IMPLEMENTATION_GUIDE.md in `output_dir`.
    pub fn save_guide(guide: &str, output_dir: &Path) -> GenResult<()> {
        fs::create_dir_all(output_dir)?;

        let path = output_dir.join("IMPLEMENTATION_GUIDE.md");
        fs::write(&path, guide)?;
        println!("✅ Generated: {}", path.display());

        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Short description for a generated file, keyed off its name.
fn describe_file(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();

    if lower.contains("deployment") {
        "Kubernetes Deployment manifest for pod management"
    } else if lower.contains("service") {
        "Kubernetes Service for networking and load balancing"
    } else if lower.contains("configmap") {
        "Kubernetes ConfigMap for configuration management"
    } else if lower.contains("main.tf") {
        "Main Terraform configuration with infrastructure resources"
    } else if lower.contains("variables.tf") {
        "Terraform input variables for customization"
    } else if lower.contains("outputs.tf") {
        "Terraform outputs for resource information"
    } else if lower.contains("dockerfile") {
        "Optimized multi-stage Dockerfile for building container images"
    } else if lower.contains("workflow") || lower.contains("ci") {
        "CI/CD pipeline configuration for automated deployments"
    } else {
        "Generated infrastructure configuration"
    }
}

fn deployment_section(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Kubernetes => {
            "\n## How to Deploy\n\n\
             ### Prerequisites\n\
             - kubectl installed and configured\n\
             - Access to a Kubernetes cluster\n\
             - Proper RBAC permissions\n\n\
             ### Deployment Steps\n\n\
             1. **Apply the ConfigMap first**\n   ```bash\n   kubectl apply -f configmap.yaml\n   ```\n\n\
             2. **Deploy the application**\n   ```bash\n   kubectl apply -f deployment.yaml\n   ```\n\n\
             3. **Create the service**\n   ```bash\n   kubectl apply -f service.yaml\n   ```\n\n\
             4. **Verify deployment**\n   ```bash\n   kubectl get deployments\n   kubectl get pods\n   kubectl get services\n   ```\n\n"
        }
        ArtifactKind::Terraform => {
            "\n## How to Deploy\n\n\
             ### Prerequisites\n\
             - Terraform installed (v1.0+)\n\
             - AWS credentials configured\n\
             - Proper IAM permissions\n\n\
             ### Deployment Steps\n\n\
             1. **Initialize Terraform**\n   ```bash\n   terraform init\n   ```\n\n\
             2. **Review the plan**\n   ```bash\n   terraform plan\n   ```\n\n\
             3. **Apply the configuration**\n   ```bash\n   terraform apply\n   ```\n\n\
             4. **View outputs**\n   ```bash\n   terraform output\n   ```\n\n"
        }
        ArtifactKind::Docker => {
            "\n## How to Build and Run\n\n\
             ### Build the Image\n\n\
             ```bash\ndocker build -t your-app:latest .\n```\n\n\
             ### Run the Container\n\n\
             ```bash\ndocker run -d -p 8080:8080 your-app:latest\n```\n\n\
             ### Push to Registry (Optional)\n\n\
             ```bash\ndocker tag your-app:latest your-registry/your-app:latest\ndocker push your-registry/your-app:latest\n```\n\n"
        }
        ArtifactKind::Cicd => {
            "\n## How to Use the Pipeline\n\n\
             ### Setup\n\n\
             1. Commit the pipeline configuration to your repository\n\
             2. Configure required secrets/variables in your CI/CD settings\n\
             3. Push to trigger the pipeline\n\n\
             ### Required Secrets/Variables\n\n\
             - Cloud provider credentials\n\
             - Container registry credentials\n\
             - Kubernetes cluster access (if deploying to K8s)\n\n"
        }
    }
}

const SECURITY_CHECKLIST: &str = "\n## Security Checklist\n\n\
The generated code implements these security best practices:\n\n\
- ✅ Non-root user execution\n\
- ✅ Resource limits enforced\n\
- ✅ Security contexts configured\n\
- ✅ Least privilege access\n\
- ✅ No hardcoded secrets (use environment variables)\n\n\
### Additional Recommendations\n\n\
- Review and adjust resource limits based on your needs\n\
- Enable audit logging\n\
- Regularly update base images and dependencies\n\
- Use secrets management (Vault, AWS Secrets Manager, etc.)\n\n";

const CUSTOMIZATION_GUIDE: &str = "\n## How to Customize\n\n\
### Common Customizations\n\n\
1. **Adjust resource limits**: Modify CPU and memory values based on application needs\n\
2. **Change replica count**: Scale up or down based on load\n\
3. **Update environment variables**: Modify ConfigMap for configuration changes\n\
4. **Change image**: Update container image references\n\
5. **Modify networking**: Adjust service types and port mappings\n\n\
### Best Practices\n\n\
- Test changes in a dev environment first\n\
- Use version control for all modifications\n\
- Keep security best practices in mind\n\n";

fn documentation_links(kind: ArtifactKind) -> String {
    let mut section = String::from("\n## Official Documentation References\n\n");

    match kind {
        ArtifactKind::Kubernetes => section.push_str(
            "### Kubernetes Documentation\n\n\
             - [Deployments](https://kubernetes.io/docs/concepts/workloads/controllers/deployment/)\n\
             - [Services](https://kubernetes.io/docs/concepts/services-networking/service/)\n\
             - [ConfigMaps](https://kubernetes.io/docs/concepts/configuration/configmap/)\n\
             - [Security Contexts](https://kubernetes.io/docs/tasks/configure-pod-container/security-context/)\n\
             - [Health Checks](https://kubernetes.io/docs/tasks/configure-pod-container/configure-liveness-readiness-startup-probes/)\n",
        ),
        ArtifactKind::Terraform => section.push_str(
            "### Terraform Documentation\n\n\
             - [AWS Provider](https://registry.terraform.io/providers/hashicorp/aws/latest/docs)\n\
             - [Terraform Language](https://developer.hashicorp.com/terraform/language)\n\
             - [Variables](https://developer.hashicorp.com/terraform/language/values/variables)\n\
             - [Outputs](https://developer.hashicorp.com/terraform/language/values/outputs)\n",
        ),
        ArtifactKind::Docker => section.push_str(
            "### Docker Documentation\n\n\
             - [Dockerfile Reference](https://docs.docker.com/engine/reference/builder/)\n\
             - [Multi-stage Builds](https://docs.docker.com/develop/develop-images/multistage-build/)\n\
             - [Security](https://docs.docker.com/engine/security/)\n",
        ),
        ArtifactKind::Cicd => section.push_str(
            "### CI/CD Documentation\n\n\
             - [GitHub Actions](https://docs.github.com/en/actions)\n\
             - [GitLab CI](https://docs.gitlab.com/ee/ci/)\n",
        ),
    }

    section.push_str("\n---\n\n*Generated by InfraForge*\n");
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_files() -> ArtifactSet {
        let mut files = ArtifactSet::new();
        files.insert("deployment.yaml", "kind: Deployment");
        files.insert("service.yaml", "kind: Service");
        files
    }

    #[test]
    fn test_guide_lists_files_with_descriptions() {
        let guide =
            GuideBuilder::implementation_guide(ArtifactKind::Kubernetes, &sample_files(), "reqs");

        assert!(guide.starts_with("# Implementation Guide: Kubernetes"));
        assert!(guide.contains("- **deployment.yaml**: Kubernetes Deployment manifest"));
        assert!(guide.contains("- **service.yaml**: Kubernetes Service"));
        assert!(guide.contains("kubectl apply -f deployment.yaml"));
        assert!(guide.contains("## Security Checklist"));
    }

    #[test]
    fn test_terraform_guide_has_terraform_steps() {
        let mut files = ArtifactSet::new();
        files.insert("main.tf", "");
        let guide = GuideBuilder::implementation_guide(ArtifactKind::Terraform, &files, "a vpc");

        assert!(guide.contains("terraform init"));
        assert!(guide.contains("Main Terraform configuration"));
        assert!(guide.contains("registry.terraform.io"));
    }

    #[test]
    fn test_unknown_filename_gets_generic_description() {
        assert_eq!(describe_file("something.json"), "Generated infrastructure configuration");
    }

    #[test]
    fn test_save_guide() {
        let dir = tempdir().unwrap();
        GuideBuilder::save_guide("# Guide", dir.path()).unwrap();

        let written = fs::read_to_string(dir.path().join("IMPLEMENTATION_GUIDE.md")).unwrap();
        assert_eq!(written, "# Guide");
    }
}
