//! Directory planner.
//! Maps the architecture choice plus active feature flags to the ordered set
//! of directories to create. The result is deterministic (same configuration,
//! same list, same order) and duplicate-free even when several rules would
//! add the same path.

use crate::config::{Architecture, ProjectConfig};
use indexmap::IndexSet;
use std::path::PathBuf;

/// Base directory set for an architecture. The mapping is total: every
/// architecture value has exactly one canonical layout.
fn base_directories(architecture: Architecture) -> &'static [&'static str] {
    match architecture {
        Architecture::Simple => &[
            "cmd",
            "internal/handlers",
            "internal/models",
            "internal/services",
            "internal/middleware",
            "pkg/config",
            "pkg/database",
            "pkg/logger",
            "api/routes",
            "scripts",
            "deployments",
        ],
        Architecture::Clean => &[
            "cmd",
            "internal/controller",
            "internal/usecase",
            "internal/repository",
            "internal/entity",
            "internal/delivery/http",
            "pkg/config",
            "pkg/database",
            "pkg/logger",
            "api/routes",
            "scripts",
            "deployments",
        ],
        Architecture::Hexagonal => &[
            "cmd",
            "internal/adapters/primary/http",
            "internal/adapters/secondary/database",
            "internal/domain/entities",
            "internal/domain/services",
            "internal/ports",
            "pkg/config",
            "pkg/database",
            "pkg/logger",
            "api/routes",
            "scripts",
            "deployments",
        ],
        Architecture::Mvc => &[
            "cmd",
            "internal/controllers",
            "internal/models",
            "internal/views",
            "internal/middleware",
            "pkg/config",
            "pkg/database",
            "pkg/logger",
            "api/routes",
            "scripts",
            "deployments",
        ],
        Architecture::Custom => &[
            "cmd",
            "internal",
            "pkg/config",
            "pkg/database",
            "pkg/logger",
            "api",
            "scripts",
            "deployments",
        ],
    }
}

/// Computes the ordered, duplicate-free list of relative directories for a
/// validated configuration: the architecture's base set first, then the
/// feature-conditional directories in a fixed order.
pub fn plan_directories(config: &ProjectConfig) -> Vec<PathBuf> {
    let mut dirs: IndexSet<&'static str> = IndexSet::new();
    dirs.extend(base_directories(config.architecture).iter().copied());

    if config.features.swagger {
        dirs.insert("docs");
    }
    if config.testing {
        dirs.insert("test");
    }
    if config.features.static_files {
        dirs.insert("static/css");
        dirs.insert("static/js");
        dirs.insert("static/images");
    }
    if config.features.i18n {
        dirs.insert("locales");
    }

    dirs.into_iter().map(PathBuf::from).collect()
}
