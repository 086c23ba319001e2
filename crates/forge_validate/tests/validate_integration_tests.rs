//! Integration tests for artifact validation.

use forge_validate::ArtifactKind;

#[test]
fn test_service_without_spec_scenario() {
    let manifest = "{apiVersion: v1, kind: Service, metadata: {name: x}}";
    let result = ArtifactKind::Kubernetes.validate(manifest);

    assert!(!result.valid);
    assert_eq!(result.errors, vec!["Service missing spec field"]);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_dockerfile_scenarios_from_both_orderings() {
    // COPY precedes RUN: base image present, no caching suggestion.
    let good = ArtifactKind::Docker.validate("FROM alpine\nCOPY . .\nRUN make");
    assert!(good.valid);
    assert!(!good.suggestions.iter().any(|s| s.contains("layer caching")));

    // No FROM and COPY after RUN: error plus caching suggestion.
    let bad = ArtifactKind::Docker.validate("RUN make\nCOPY . .");
    assert!(!bad.valid);
    assert!(bad.suggestions.iter().any(|s| s.contains("layer caching")));
}

#[test]
fn test_later_rules_still_run_after_an_error() {
    // Unbalanced braces and a missing provider block accumulate.
    let result = ArtifactKind::Terraform.validate("resource \"aws_s3_bucket\" \"b\" {");

    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.warnings, vec!["No provider block found"]);
    assert_eq!(
        result.suggestions,
        vec!["Consider adding terraform block with required_version"]
    );
}

#[test]
fn test_findings_accumulate_across_checks() {
    // Deployment with no metadata.name and no spec: two independent errors.
    let manifest = "apiVersion: apps/v1\nkind: Deployment\nmetadata: {}\n";
    let result = ArtifactKind::Kubernetes.validate(manifest);

    assert!(!result.valid);
    assert!(result
        .errors
        .contains(&"Missing required field: metadata.name".to_string()));
    assert!(result.errors.contains(&"Deployment missing spec field".to_string()));
}
