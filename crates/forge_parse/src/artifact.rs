//! Ordered set of generated artifacts.

/// One generated infrastructure file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Filename declared by the marker or inferred by the segmenter.
    pub filename: String,
    /// File content, code fences stripped and trimmed.
    pub content: String,
}

/// Ordered filename-to-content mapping.
///
/// Entries keep the order their markers appeared in the model output.
/// Inserting an existing filename replaces the content at its original
/// position (last write wins); duplicate filenames are not treated as an
/// error.
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    entries: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an artifact, overwriting any earlier entry with the same
    /// filename in place.
    pub fn insert(&mut self, filename: impl Into<String>, content: impl Into<String>) {
        let filename = filename.into();
        let content = content.into();

        if let Some(existing) = self.entries.iter_mut().find(|a| a.filename == filename) {
            existing.content = content;
        } else {
            self.entries.push(Artifact { filename, content });
        }
    }

    /// Look up content by filename.
    pub fn get(&self, filename: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.filename == filename)
            .map(|a| a.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.iter()
    }

    /// Filenames in insertion order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|a| a.filename.as_str())
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = ArtifactSet::new();
        set.insert("b.yaml", "two");
        set.insert("a.yaml", "one");
        set.insert("c.yaml", "three");

        let names: Vec<_> = set.filenames().collect();
        assert_eq!(names, vec!["b.yaml", "a.yaml", "c.yaml"]);
    }

    #[test]
    fn test_duplicate_filename_is_last_write_wins() {
        let mut set = ArtifactSet::new();
        set.insert("main.tf", "first");
        set.insert("outputs.tf", "outputs");
        set.insert("main.tf", "second");

        // Later content wins, original position is kept, no duplicate entry.
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("main.tf"), Some("second"));
        let names: Vec<_> = set.filenames().collect();
        assert_eq!(names, vec!["main.tf", "outputs.tf"]);
    }

    #[test]
    fn test_get_missing() {
        let set = ArtifactSet::new();
        assert!(set.is_empty());
        assert_eq!(set.get("nope.yaml"), None);
    }
}
