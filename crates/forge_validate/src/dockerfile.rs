//! Dockerfile validation.

use crate::result::ValidationResult;

/// Static checks for a generated Dockerfile.
///
/// The COPY-before-RUN heuristic only compares the last COPY line with the
/// first RUN line; interleaved stages are not fully analyzed.
pub fn validate_dockerfile(content: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    let lines: Vec<&str> = content.trim().lines().collect();

    let has_from = lines.iter().any(|line| line.trim().starts_with("FROM"));
    if !has_from {
        result.add_error("Dockerfile must start with FROM instruction");
    }

    if !content.contains("WORKDIR") {
        result.add_suggestion("Consider using WORKDIR to set working directory");
    }

    if !content.contains("USER") {
        result.add_suggestion("Consider adding USER instruction to run as non-root");
    }

    let mut last_copy_index = None;
    let mut first_run_index = None;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("COPY") {
            last_copy_index = Some(i);
        } else if trimmed.starts_with("RUN") && first_run_index.is_none() {
            first_run_index = Some(i);
        }
    }

    if let (Some(copy), Some(run)) = (last_copy_index, first_run_index) {
        if copy > run {
            result.add_suggestion(
                "Consider copying dependency files before RUN for better layer caching",
            );
        }
    }

    result
}
