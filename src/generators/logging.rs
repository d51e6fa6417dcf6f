//! Logger package for the generated project. One template whose content
//! branches on the chosen logging library.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![Artifact::new("logger/logger.go.j2", "pkg/logger/logger.go")]
}
