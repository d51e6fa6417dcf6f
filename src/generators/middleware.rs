//! Middleware generators: independently gated booleans, each writing its own
//! file under `internal/middleware/`. Any subset may be active and the
//! outputs compose without collision.

use super::Artifact;
use crate::config::{Auth, ProjectConfig};

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    if config.middleware.auth && config.auth != Auth::None {
        artifacts.push(Artifact::new("middleware/auth.go.j2", "internal/middleware/auth.go"));
    }
    if config.middleware.cors {
        artifacts.push(Artifact::new("middleware/cors.go.j2", "internal/middleware/cors.go"));
    }
    if config.middleware.logging {
        artifacts
            .push(Artifact::new("middleware/logging.go.j2", "internal/middleware/logging.go"));
    }
    if config.middleware.rate_limit {
        artifacts.push(Artifact::new(
            "middleware/rate_limit.go.j2",
            "internal/middleware/rate_limit.go",
        ));
    }
    if config.middleware.error_handler {
        artifacts.push(Artifact::new(
            "middleware/error_handler.go.j2",
            "internal/middleware/error_handler.go",
        ));
    }

    artifacts
}
