//! Runtime configuration package for the generated project.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![Artifact::new("config/config.go.j2", "pkg/config/config.go")]
}
