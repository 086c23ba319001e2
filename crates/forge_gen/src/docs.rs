//! Official documentation link tables.

use forge_validate::ArtifactKind;

const K8S_DOC_LINKS: &[(&str, &str)] = &[
    ("apiVersion", "https://kubernetes.io/docs/reference/kubernetes-api/"),
    ("Deployment", "https://kubernetes.io/docs/concepts/workloads/controllers/deployment/"),
    ("spec.replicas", "https://kubernetes.io/docs/concepts/workloads/controllers/deployment/#replicas"),
    ("spec.strategy", "https://kubernetes.io/docs/concepts/workloads/controllers/deployment/#strategy"),
    ("containers", "https://kubernetes.io/docs/concepts/containers/"),
    ("image", "https://kubernetes.io/docs/concepts/containers/images/"),
    ("livenessProbe", "https://kubernetes.io/docs/tasks/configure-pod-container/configure-liveness-readiness-startup-probes/"),
    ("readinessProbe", "https://kubernetes.io/docs/tasks/configure-pod-container/configure-liveness-readiness-startup-probes/#define-readiness-probes"),
    ("resources", "https://kubernetes.io/docs/concepts/configuration/manage-resources-containers/"),
    ("securityContext", "https://kubernetes.io/docs/tasks/configure-pod-container/security-context/"),
    ("runAsNonRoot", "https://kubernetes.io/docs/tasks/configure-pod-container/security-context/#set-the-security-context-for-a-pod"),
    ("Service", "https://kubernetes.io/docs/concepts/services-networking/service/"),
    ("Service.type", "https://kubernetes.io/docs/concepts/services-networking/service/#publishing-services-service-types"),
    ("ConfigMap", "https://kubernetes.io/docs/concepts/configuration/configmap/"),
    ("namespace", "https://kubernetes.io/docs/concepts/overview/working-with-objects/namespaces/"),
    ("labels", "https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/"),
    ("selector", "https://kubernetes.io/docs/concepts/overview/working-with-objects/labels/#label-selectors"),
];

const TERRAFORM_DOC_LINKS: &[(&str, &str)] = &[
    ("aws_vpc", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/vpc"),
    ("aws_subnet", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/subnet"),
    ("aws_internet_gateway", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/internet_gateway"),
    ("aws_route_table", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/route_table"),
    ("aws_security_group", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/security_group"),
    ("aws_db_instance", "https://registry.terraform.io/providers/hashicorp/aws/latest/docs/resources/db_instance"),
    ("variable", "https://developer.hashicorp.com/terraform/language/values/variables"),
    ("output", "https://developer.hashicorp.com/terraform/language/values/outputs"),
    ("provider", "https://developer.hashicorp.com/terraform/language/providers"),
];

const DOCKER_DOC_LINKS: &[(&str, &str)] = &[
    ("FROM", "https://docs.docker.com/engine/reference/builder/#from"),
    ("RUN", "https://docs.docker.com/engine/reference/builder/#run"),
    ("COPY", "https://docs.docker.com/engine/reference/builder/#copy"),
    ("WORKDIR", "https://docs.docker.com/engine/reference/builder/#workdir"),
    ("ENV", "https://docs.docker.com/engine/reference/builder/#env"),
    ("EXPOSE", "https://docs.docker.com/engine/reference/builder/#expose"),
    ("ENTRYPOINT", "https://docs.docker.com/engine/reference/builder/#entrypoint"),
    ("CMD", "https://docs.docker.com/engine/reference/builder/#cmd"),
    ("USER", "https://docs.docker.com/engine/reference/builder/#user"),
    ("HEALTHCHECK", "https://docs.docker.com/engine/reference/builder/#healthcheck"),
    ("multi-stage", "https://docs.docker.com/develop/develop-images/multistage-build/"),
];

const CICD_DOC_LINKS: &[(&str, &str)] = &[
    ("github-actions", "https://docs.github.com/en/actions"),
    ("workflow-syntax", "https://docs.github.com/en/actions/using-workflows/workflow-syntax-for-github-actions"),
    ("gitlab-ci", "https://docs.gitlab.com/ee/ci/"),
    ("gitlab-ci-yaml", "https://docs.gitlab.com/ee/ci/yaml/"),
];

const DEFAULT_DOC_LINK: &str = "https://kubernetes.io/docs/";

/// Look up the official documentation link for a field of the given kind.
/// Unknown fields fall back to a generic link.
pub fn doc_link(field: &str, kind: ArtifactKind) -> &'static str {
    let table = match kind {
        ArtifactKind::Kubernetes => K8S_DOC_LINKS,
        ArtifactKind::Terraform => TERRAFORM_DOC_LINKS,
        ArtifactKind::Docker => DOCKER_DOC_LINKS,
        ArtifactKind::Cicd => CICD_DOC_LINKS,
    };

    table
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, link)| *link)
        .unwrap_or(DEFAULT_DOC_LINK)
}

/// Format a comment line referencing the official documentation.
pub fn doc_comment(field: &str, kind: ArtifactKind) -> String {
    format!("# Reference: {}", doc_link(field, kind))
}
