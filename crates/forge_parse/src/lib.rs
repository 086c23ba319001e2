//! # forge_parse
//!
//! Parsing of raw model output into named infrastructure artifacts.
//!
//! A single model response may contain several files separated by the
//! `# FILE:` marker convention the prompts ask for. This crate splits such
//! a response into an ordered [`ArtifactSet`], stripping stray markdown
//! code fences along the way. When the model ignored the convention, a
//! fallback segmenter splits on YAML document separators and infers
//! filenames from the embedded `kind`.
//!
//! ## Example
//!
//! ```rust
//! use forge_parse::{MarkerSplitter, segment_documents};
//!
//! let raw = "intro\n---\n# FILE: deployment.yaml\nkind: Deployment\n";
//! let splitter = MarkerSplitter::new();
//! let artifacts = splitter.split(raw, &["yaml"]);
//! assert_eq!(artifacts.get("deployment.yaml"), Some("kind: Deployment"));
//! ```

pub mod artifact;
pub mod fence;
pub mod segmenter;
pub mod splitter;

pub use artifact::{Artifact, ArtifactSet};
pub use fence::strip_code_fences;
pub use segmenter::segment_documents;
pub use splitter::MarkerSplitter;
