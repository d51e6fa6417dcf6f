//! Startup banner package for the generated project.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![Artifact::new("startup/startup.go.j2", "pkg/startup/startup.go")]
}
