//! Core project files: the application entry point, environment samples,
//! and the git ignore list. Always generated.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![
        Artifact::new("core/main.go.j2", "main.go"),
        Artifact::new("core/env.j2", ".env"),
        Artifact::new("core/env.j2", ".env.example"),
        Artifact::new("core/gitignore.j2", ".gitignore"),
    ]
}
