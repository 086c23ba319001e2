//! # forge_validate
//!
//! Light static checks over generated infrastructure artifacts.
//!
//! Each validator inspects one artifact's text and returns a
//! [`ValidationResult`] with errors, warnings and suggestions. Validators
//! are advisory and never fail: malformed input becomes an error entry,
//! and any internal fault during structural inspection is folded into a
//! single generic error. Findings never block the generation pipeline.

pub mod dockerfile;
pub mod kind;
pub mod kubernetes;
pub mod result;
pub mod terraform;

pub use dockerfile::validate_dockerfile;
pub use kind::ArtifactKind;
pub use kubernetes::{validate_kubernetes_manifest, validate_yaml_syntax};
pub use result::ValidationResult;
pub use terraform::validate_terraform_syntax;
