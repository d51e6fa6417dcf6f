//! HTTP routes and handlers. Route registration style branches per framework
//! inside the templates; auth routes follow the auth choice and the health
//! route follows the health-check flag.

use super::Artifact;
use crate::config::ProjectConfig;

pub fn generate(_config: &ProjectConfig) -> Vec<Artifact> {
    vec![
        Artifact::new("routes/routes.go.j2", "api/routes/routes.go"),
        Artifact::new("routes/handlers.go.j2", "internal/handlers/handlers.go"),
    ]
}
