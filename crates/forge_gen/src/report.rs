//! Console reporting of validation findings.

use forge_validate::ValidationResult;

/// Print the findings for one artifact. Errors, warnings and suggestions
/// are rendered in that order; a clean result prints nothing.
pub fn print_findings(filename: &str, result: &ValidationResult) {
    if !result.valid {
        println!("\n⚠️  Validation errors in {}:", filename);
        for error in &result.errors {
            println!("   ❌ {}", error);
        }
    }

    if !result.warnings.is_empty() {
        println!("\n⚠️  Warnings for {}:", filename);
        for warning in &result.warnings {
            println!("   ⚠️  {}", warning);
        }
    }

    if !result.suggestions.is_empty() {
        println!("\n💡 Suggestions for {}:", filename);
        for suggestion in &result.suggestions {
            println!("   💡 {}", suggestion);
        }
    }
}
