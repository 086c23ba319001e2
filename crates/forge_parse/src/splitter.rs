//! File-marker splitting of raw model output.

use regex::Regex;
use tracing::debug;

use crate::artifact::ArtifactSet;
use crate::fence::strip_code_fences;

/// Marker convention the prompts ask the model to follow: a `---` line
/// followed by a `# FILE: <name>` comment line. `FILE:` is case-sensitive.
const FILE_MARKER_PATTERN: &str = r"---\s*\n#\s*FILE:\s*(\S+)\s*\n";

/// Splits one raw model response into named files on `# FILE:` markers.
pub struct MarkerSplitter {
    marker: Regex,
}

impl MarkerSplitter {
    pub fn new() -> Self {
        Self {
            // The pattern is a compile-time constant and always valid.
            marker: Regex::new(FILE_MARKER_PATTERN).expect("valid file marker pattern"),
        }
    }

    /// Split `raw` into an [`ArtifactSet`] keyed by marker-declared
    /// filenames, in marker order.
    ///
    /// Each extracted content has the given fence tags stripped and is
    /// trimmed. A final marker with nothing after it is dropped. Returns
    /// an empty set when no marker matches; the caller is expected to fall
    /// back to [`crate::segment_documents`].
    pub fn split(&self, raw: &str, fence_tags: &[&str]) -> ArtifactSet {
        // Tokenize into [preamble, name_1, body_1, name_2, body_2, ...].
        let mut segments: Vec<&str> = Vec::new();
        let mut cursor = 0;

        for caps in self.marker.captures_iter(raw) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            segments.push(&raw[cursor..whole.start()]);
            segments.push(name.as_str());
            cursor = whole.end();
        }

        // A marker at end-of-string leaves its name unpaired; the pairing
        // walk below drops it.
        if cursor < raw.len() {
            segments.push(&raw[cursor..]);
        }

        let mut artifacts = ArtifactSet::new();
        let mut i = 1;
        while i + 1 < segments.len() {
            let filename = segments[i].trim();
            let content = strip_code_fences(segments[i + 1], fence_tags);
            artifacts.insert(filename, content);
            i += 2;
        }

        debug!(
            "Split model output into {} file(s) via markers",
            artifacts.len()
        );
        artifacts
    }
}

impl Default for MarkerSplitter {
    fn default() -> Self {
        Self::new()
    }
}
