//! Domain model generator: a user entity and the shared response types.
//! The destination path depends on the architecture; the logical artifact is
//! the same for every layout.

use super::Artifact;
use crate::config::{Architecture, ProjectConfig};

/// Where domain models live for each architecture.
pub fn model_directory(architecture: Architecture) -> &'static str {
    match architecture {
        Architecture::Simple => "internal/models",
        Architecture::Clean => "internal/entity",
        Architecture::Hexagonal => "internal/core/domain",
        Architecture::Mvc => "internal/models",
        Architecture::Custom => "internal/models",
    }
}

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    let dir = model_directory(config.architecture);
    vec![
        Artifact::new("models/user.go.j2", format!("{}/user.go", dir)),
        Artifact::new("models/response.go.j2", format!("{}/response.go", dir)),
    ]
}
