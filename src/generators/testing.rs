//! Test scaffolding, generated only when testing is enabled. The handler
//! test additionally requires a data-access layer, since it exercises the
//! user model.

use super::Artifact;
use crate::config::{DataAccess, ProjectConfig};

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    if !config.testing {
        return Vec::new();
    }

    let mut artifacts = vec![
        Artifact::new("testing/main_test.go.j2", "main_test.go"),
        Artifact::new("testing/testutils.go.j2", "test/testutils/utils.go"),
    ];
    if config.data_access != DataAccess::None {
        artifacts.push(Artifact::new("testing/user_test.go.j2", "test/handlers/user_test.go"));
    }
    artifacts
}
