//! Framework bootstrap generator.
//! Mutually exclusive variant dispatch: exactly one framework branch executes
//! per run, and the branch decides both the import surface and the
//! route-registration call style of the generated `internal/app/app.go`.

use super::Artifact;
use crate::config::{Framework, ProjectConfig};

/// Total dispatch table from framework to its bootstrap template.
pub fn bootstrap_template(framework: Framework) -> &'static str {
    match framework {
        Framework::Gin => "framework/gin_app.go.j2",
        Framework::Echo => "framework/echo_app.go.j2",
        Framework::Fiber => "framework/fiber_app.go.j2",
        Framework::Revel => "framework/revel_app.go.j2",
    }
}

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    vec![Artifact::new(bootstrap_template(config.framework), "internal/app/app.go")]
}
