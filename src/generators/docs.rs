//! Swagger documentation stub, generated only when the swagger feature is on.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    if !config.features.swagger {
        return Vec::new();
    }
    vec![Artifact::new("docs/docs.go.j2", "docs/docs.go")]
}
