//! Fallback segmentation when the model ignored the file-marker convention.

use regex::Regex;
use tracing::debug;

use crate::artifact::ArtifactSet;
use crate::fence::strip_code_fences;

/// Split raw output on YAML document separators and infer a filename per
/// fragment.
///
/// Fragments that are empty after trimming are discarded. A fragment with
/// a recognizable `kind:` line becomes `<kind>.yaml` (lowercased);
/// anything else gets a positional `manifest-<n>.yaml` name. Filename
/// collisions follow the same last-write-wins policy as the marker
/// splitter. This function never fails: every surviving fragment produces
/// exactly one entry.
pub fn segment_documents(raw: &str) -> ArtifactSet {
    // Constant pattern, always valid.
    let kind_pattern = Regex::new(r"kind:\s*(\w+)").expect("valid kind pattern");

    let documents: Vec<&str> = raw
        .split("---")
        .map(str::trim)
        .filter(|doc| !doc.is_empty())
        .collect();

    let mut artifacts = ArtifactSet::new();

    for (position, document) in documents.iter().enumerate() {
        let content = strip_code_fences(document, &["yaml"]);

        let filename = match kind_pattern.captures(&content) {
            Some(caps) => format!("{}.yaml", caps[1].to_lowercase()),
            None => format!("manifest-{}.yaml", position + 1),
        };

        artifacts.insert(filename, content);
    }

    debug!(
        "Fallback segmentation produced {} document(s)",
        artifacts.len()
    );
    artifacts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_positional_names() {
        let raw = "---\nkind: Pod\nx: 1\n---\ny: 2";
        let artifacts = segment_documents(raw);

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts.get("pod.yaml"), Some("kind: Pod\nx: 1"));
        assert_eq!(artifacts.get("manifest-2.yaml"), Some("y: 2"));
    }

    #[test]
    fn test_empty_fragments_are_discarded() {
        let raw = "---\n\n---\nkind: Service\nports: []\n---\n   \n";
        let artifacts = segment_documents(raw);

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts.get("service.yaml"), Some("kind: Service\nports: []"));
    }

    #[test]
    fn test_fences_stripped_before_kind_lookup() {
        let raw = "```yaml\nkind: ConfigMap\ndata: {}\n```";
        let artifacts = segment_documents(raw);

        assert_eq!(artifacts.get("configmap.yaml"), Some("kind: ConfigMap\ndata: {}"));
    }

    #[test]
    fn test_duplicate_kinds_last_write_wins() {
        let raw = "kind: Service\na: 1\n---\nkind: Service\nb: 2";
        let artifacts = segment_documents(raw);

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts.get("service.yaml"), Some("kind: Service\nb: 2"));
    }

    #[test]
    fn test_whitespace_only_input() {
        assert!(segment_documents("   \n---\n  ").is_empty());
    }
}
