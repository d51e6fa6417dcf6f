//! Go module manifest. Runs last in the pipeline so the requirement list
//! reflects every feature that made it into the tree.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![Artifact::new("manifest/go.mod.j2", "go.mod")]
}
