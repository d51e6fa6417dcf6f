//! CI pipeline definitions plus the Makefile, generated when a CI provider
//! was chosen.

use super::Artifact;
use crate::config::{Cicd, ProjectConfig};

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    let mut artifacts = match config.cicd {
        Cicd::None => return Vec::new(),
        Cicd::Github => {
            vec![Artifact::new("ci/github.yml.j2", ".github/workflows/ci-cd.yml")]
        }
        Cicd::Gitlab => vec![Artifact::new("ci/gitlab-ci.yml.j2", ".gitlab-ci.yml")],
    };
    artifacts.push(Artifact::new("ci/Makefile.j2", "Makefile"));
    artifacts
}
