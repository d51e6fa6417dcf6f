//! Containerization files, generated only when docker support is enabled.
//! The compose file picks up database and feature services from the
//! configuration.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    if !config.docker {
        return Vec::new();
    }
    vec![
        Artifact::new("docker/Dockerfile.j2", "Dockerfile"),
        Artifact::new("docker/docker-compose.yml.j2", "docker-compose.yml"),
        Artifact::new("docker/dockerignore.j2", ".dockerignore"),
    ]
}
