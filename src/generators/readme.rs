//! README describing the generated stack and how to run it.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![Artifact::new("readme/README.md.j2", "README.md")]
}
