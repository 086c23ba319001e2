//! Markdown code-fence cleanup.

/// Remove markdown code fences from model output.
///
/// Strips every language-tagged open fence (e.g. ````` ```yaml `````) for
/// the given tags, then every bare ````` ``` `````, wherever they occur,
/// and trims the result. Stripping is idempotent.
pub fn strip_code_fences(content: &str, tags: &[&str]) -> String {
    let mut cleaned = content.to_string();

    for tag in tags {
        cleaned = cleaned.replace(&format!("```{}", tag), "");
    }

    cleaned.replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tagged_and_bare_fences() {
        let raw = "```yaml\napiVersion: v1\nkind: Pod\n```\n";
        assert_eq!(
            strip_code_fences(raw, &["yaml"]),
            "apiVersion: v1\nkind: Pod"
        );
    }

    #[test]
    fn test_strips_multiple_tags() {
        let raw = "```hcl\nresource {}\n```\n```terraform\nvariable {}\n```";
        let cleaned = strip_code_fences(raw, &["hcl", "terraform"]);
        assert!(!cleaned.contains("```"));
        assert!(cleaned.contains("resource {}"));
        assert!(cleaned.contains("variable {}"));
    }

    #[test]
    fn test_idempotent() {
        let raw = "```yaml\nkind: Service\n```";
        let once = strip_code_fences(raw, &["yaml"]);
        let twice = strip_code_fences(&once, &["yaml"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_fences_only_trims() {
        assert_eq!(strip_code_fences("  FROM alpine\n", &["dockerfile"]), "FROM alpine");
    }
}
