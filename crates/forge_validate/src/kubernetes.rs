//! Kubernetes manifest validation.

use serde_yaml::Value;

use crate::result::ValidationResult;

/// Validate YAML syntax only.
pub fn validate_yaml_syntax(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Err(e) = serde_yaml::from_str::<Value>(content) {
        result.add_error(format!("YAML syntax error: {}", e));
    }

    result
}

/// Validate the structure of a Kubernetes manifest.
///
/// A syntax error short-circuits with a single error. Structural rules
/// are cumulative: every applicable check runs and records its own
/// finding. Any internal fault during inspection is converted into one
/// generic error entry so the caller always gets a result back.
pub fn validate_kubernetes_manifest(content: &str) -> ValidationResult {
    let mut result = validate_yaml_syntax(content);

    if !result.valid {
        return result;
    }

    if let Err(fault) = inspect_manifest(content, &mut result) {
        result.add_error(format!("Validation error: {}", fault));
    }

    result
}

fn inspect_manifest(content: &str, result: &mut ValidationResult) -> Result<(), String> {
    let manifest: Value = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    if !manifest.is_mapping() {
        return Err("manifest root is not a mapping".to_string());
    }

    for field in ["apiVersion", "kind", "metadata"] {
        if manifest.get(field).is_none() {
            result.add_error(format!("Missing required field: {}", field));
        }
    }

    if let Some(metadata) = manifest.get("metadata") {
        if metadata.get("name").is_none() {
            result.add_error("Missing required field: metadata.name");
        }
    }

    let kind = manifest
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match kind {
        "Deployment" => {
            match manifest.get("spec") {
                None => result.add_error("Deployment missing spec field"),
                Some(spec) => {
                    if spec.get("replicas").is_none() {
                        result.add_warning("Deployment spec missing replicas (will default to 1)");
                    }
                }
            }

            if let Some(template) = manifest.get("spec").and_then(|s| s.get("template")) {
                let has_security_context = template
                    .get("spec")
                    .map(|s| s.get("securityContext").is_some())
                    .unwrap_or(false);

                if !has_security_context {
                    result.add_suggestion("Consider adding securityContext for pod security");
                }
            }
        }
        "Service" => match manifest.get("spec") {
            None => result.add_error("Service missing spec field"),
            Some(spec) => {
                if spec.get("ports").is_none() {
                    result.add_error("Service spec missing ports");
                }
            }
        },
        // No kind-specific checks for other resource types.
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_deployment() {
        let manifest = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 3
  template:
    spec:
      securityContext:
        runAsNonRoot: true
";
        let result = validate_kubernetes_manifest(manifest);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_syntax_error_short_circuits() {
        let result = validate_kubernetes_manifest("kind: [unclosed");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("YAML syntax error"));
    }

    #[test]
    fn test_missing_top_level_fields_are_separate_errors() {
        let result = validate_kubernetes_manifest("foo: bar");
        assert!(!result.valid);
        assert!(result.errors.contains(&"Missing required field: apiVersion".to_string()));
        assert!(result.errors.contains(&"Missing required field: kind".to_string()));
        assert!(result.errors.contains(&"Missing required field: metadata".to_string()));
    }

    #[test]
    fn test_metadata_requires_name() {
        let manifest = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  labels: {}\n";
        let result = validate_kubernetes_manifest(manifest);
        assert!(result
            .errors
            .contains(&"Missing required field: metadata.name".to_string()));
    }

    #[test]
    fn test_service_without_spec_reports_only_missing_spec() {
        let manifest = "apiVersion: v1\nkind: Service\nmetadata:\n  name: x\n";
        let result = validate_kubernetes_manifest(manifest);

        // The ports check is nested under spec presence and must not fire.
        assert_eq!(result.errors, vec!["Service missing spec field"]);
    }

    #[test]
    fn test_service_with_spec_but_no_ports() {
        let manifest = "\
apiVersion: v1
kind: Service
metadata:
  name: x
spec:
  selector:
    app: x
";
        let result = validate_kubernetes_manifest(manifest);
        assert_eq!(result.errors, vec!["Service spec missing ports"]);
    }

    #[test]
    fn test_deployment_missing_replicas_is_warning_not_error() {
        let manifest = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  selector:
    matchLabels:
      app: web
";
        let result = validate_kubernetes_manifest(manifest);
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec!["Deployment spec missing replicas (will default to 1)"]
        );
    }

    #[test]
    fn test_deployment_template_without_security_context() {
        let manifest = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  replicas: 2
  template:
    spec:
      containers: []
";
        let result = validate_kubernetes_manifest(manifest);
        assert_eq!(
            result.suggestions,
            vec!["Consider adding securityContext for pod security"]
        );
    }

    #[test]
    fn test_scalar_document_becomes_generic_error() {
        let result = validate_kubernetes_manifest("42");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("Validation error"));
    }

    #[test]
    fn test_unknown_kind_skips_kind_checks() {
        let manifest = "apiVersion: v1\nkind: Namespace\nmetadata:\n  name: prod\n";
        let result = validate_kubernetes_manifest(manifest);
        assert!(result.valid);
    }
}
