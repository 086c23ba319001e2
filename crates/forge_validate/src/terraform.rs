//! Terraform (HCL) validation.

use crate::result::ValidationResult;

/// Shallow syntax checks for Terraform code.
///
/// Brace counting is a deliberate proxy: it cannot see braces inside
/// string literals or comments. The validator is advisory, not a parser.
pub fn validate_terraform_syntax(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    if content.trim().is_empty() {
        result.add_error("Empty Terraform file");
        return result;
    }

    let open_braces = content.matches('{').count();
    let close_braces = content.matches('}').count();

    if open_braces != close_braces {
        result.add_error(format!(
            "Unbalanced braces: {} opening, {} closing",
            open_braces, close_braces
        ));
    }

    if !content.contains("provider \"") {
        result.add_warning("No provider block found");
    }

    if !content.contains("terraform {") {
        result.add_suggestion("Consider adding terraform block with required_version");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_single_error_only() {
        for content in ["", "   \n\t "] {
            let result = validate_terraform_syntax(content);
            assert!(!result.valid);
            assert_eq!(result.errors, vec!["Empty Terraform file"]);
            assert!(result.warnings.is_empty());
            assert!(result.suggestions.is_empty());
        }
    }

    #[test]
    fn test_complete_configuration_passes() {
        let content = "\
terraform {
  required_version = \">= 1.0\"
}

provider \"aws\" {
  region = \"us-east-1\"
}

resource \"aws_vpc\" \"main\" {
  cidr_block = \"10.0.0.0/16\"
}
";
        let result = validate_terraform_syntax(content);
        assert!(result.valid);
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_unbalanced_braces_reports_both_counts() {
        let result = validate_terraform_syntax("resource \"aws_vpc\" \"main\" {\n");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["Unbalanced braces: 1 opening, 0 closing"]);
    }

    #[test]
    fn test_equal_counts_never_mismatch_regardless_of_nesting() {
        // }{ is balanced by count even though nesting is invalid.
        let result = validate_terraform_syntax("provider \"aws\" }{ \nterraform {}");
        assert!(!result.errors.iter().any(|e| e.contains("Unbalanced")));
    }

    #[test]
    fn test_missing_provider_is_warning() {
        let result = validate_terraform_syntax("terraform {\n  required_version = \">= 1.0\"\n}\n");
        assert!(result.valid);
        assert_eq!(result.warnings, vec!["No provider block found"]);
    }

    #[test]
    fn test_missing_terraform_block_is_suggestion() {
        let result = validate_terraform_syntax("provider \"aws\" {}\n");
        assert!(result.valid);
        assert_eq!(
            result.suggestions,
            vec!["Consider adding terraform block with required_version"]
        );
    }
}
