//! Configuration validation and defaulting.
//! Turns a possibly-partial [`PartialConfig`] into a fully defaulted,
//! internally consistent [`ProjectConfig`], or fails with a
//! [`Error::ValidationError`] naming the offending field. Runs exactly once,
//! before any file-system activity.

use crate::config::{
    Architecture, Auth, Cicd, ConfigFormat, DataAccess, Database, Framework, Logging,
    PartialConfig, ProjectConfig,
};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Project name used when none was supplied.
pub const DEFAULT_PROJECT_NAME: &str = "my-go-app";

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // The pattern is a literal; it cannot fail to compile.
    PATTERN.get_or_init(|| Regex::new("^[A-Za-z0-9_-]+$").unwrap())
}

/// Checks the project-name character-set rule: non-empty, alphanumerics,
/// hyphens, and underscores only.
pub fn is_valid_project_name(name: &str) -> bool {
    name_pattern().is_match(name)
}

/// Validates and defaults a partial configuration.
///
/// Defaulting rules:
/// * name → `my-go-app`; module path → `github.com/username/<name>`
/// * framework → gin; data-access → gorm; database → postgresql (when the
///   data-access layer is not `none`); architecture → simple
/// * config format → yaml; auth → jwt; logging → zap; ci → github
///
/// Cross-field rule: when the data-access layer is `none` but a database was
/// supplied, the database is cleared with a non-fatal warning and generation
/// proceeds.
///
/// # Errors
/// * `Error::ValidationError` for an empty or malformed project name
pub fn validate(partial: PartialConfig) -> Result<ProjectConfig> {
    let name = partial.name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    if !is_valid_project_name(&name) {
        return Err(Error::ValidationError(format!(
            "invalid project name '{}': use only letters, numbers, hyphens, and underscores",
            name
        )));
    }

    let module_path =
        partial.module_path.unwrap_or_else(|| format!("github.com/username/{}", name));
    if module_path.is_empty() {
        return Err(Error::ValidationError("module path must not be empty".to_string()));
    }

    let data_access = partial.data_access.unwrap_or(DataAccess::Gorm);
    let database = match (data_access, partial.database) {
        (DataAccess::None, Some(db)) => {
            log::warn!(
                "database '{}' specified but data-access layer is 'none'; ignoring it",
                db.as_str()
            );
            None
        }
        (DataAccess::None, None) => None,
        (_, Some(db)) => Some(db),
        (_, None) => Some(Database::Postgresql),
    };

    Ok(ProjectConfig {
        name,
        module_path,
        framework: partial.framework.unwrap_or(Framework::Gin),
        data_access,
        database,
        architecture: partial.architecture.unwrap_or(Architecture::Simple),
        config_format: partial.config_format.unwrap_or(ConfigFormat::Yaml),
        auth: partial.auth.unwrap_or(Auth::Jwt),
        logging: partial.logging.unwrap_or(Logging::Zap),
        testing: partial.testing.unwrap_or(false),
        docker: partial.docker.unwrap_or(false),
        cicd: partial.cicd.unwrap_or(Cicd::Github),
        middleware: partial.middleware.unwrap_or_default(),
        features: partial.features.unwrap_or_default(),
    })
}
