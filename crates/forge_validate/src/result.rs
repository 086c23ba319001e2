//! Validation result container.

use serde::Serialize;

/// Outcome of validating one artifact.
///
/// `valid` is true iff no error was recorded. Warnings and suggestions
/// never affect it. Results are created fresh per validation call and
/// mutated only through the append-style methods below.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_suggestion(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_add_error_flips_valid() {
        let mut result = ValidationResult::new();
        result.add_error("boom");
        assert!(!result.valid);
        assert_eq!(result.errors, vec!["boom"]);
    }

    #[test]
    fn test_warnings_and_suggestions_keep_valid() {
        let mut result = ValidationResult::new();
        result.add_warning("careful");
        result.add_suggestion("maybe");
        assert!(result.valid);
        assert_eq!(result.warnings, vec!["careful"]);
        assert_eq!(result.suggestions, vec!["maybe"]);
    }

    #[test]
    fn test_serializes_all_fields() {
        let mut result = ValidationResult::new();
        result.add_error("e1");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0], "e1");
        assert!(json["warnings"].as_array().unwrap().is_empty());
        assert!(json["suggestions"].as_array().unwrap().is_empty());
    }
}
