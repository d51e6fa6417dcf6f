//! Template context construction.
//! The context is a read-only JSON projection of the validated
//! [`ProjectConfig`] plus a handful of derived fields; templates never see
//! the configuration type itself.
//!
//! Context schema (all keys always present):
//!
//! ```text
//! project_name   string          app_port     string  ("8080")
//! module_path    string          db_port      string  (per database, may be "")
//! framework      string          db_user      string
//! orm            string          db_password  string
//! database       string ("" when cleared)     db_name  string ("<name>_db")
//! architecture   string          db_path      string  ("./<name>.db")
//! config_format  string          log_format   string  ("json"|"text")
//! auth           string          go_version   string
//! logging        string
//! testing, docker               bool
//! cicd           string
//! middleware     { cors, rate_limit, logging, auth, error_handler }
//! features       { websocket, caching, health_check, swagger,
//!                  static_files, i18n, metrics, cloud_config }
//! ```

use crate::config::{Database, Logging, ProjectConfig};
use serde_json::json;

/// Go toolchain version pinned into generated manifests and pipelines.
pub const GO_VERSION: &str = "1.22";

/// Default HTTP port for generated services.
pub const APP_PORT: &str = "8080";

/// Builds the template context for a validated configuration.
/// The result is deterministic: the same configuration always produces the
/// same context, and rendering is therefore reproducible byte for byte.
pub fn build_context(config: &ProjectConfig) -> serde_json::Value {
    let (db_port, db_user, db_password) = match config.database {
        Some(Database::Postgresql) => ("5432", "postgres", "postgres"),
        Some(Database::Mysql) => ("3306", "root", "root"),
        Some(Database::Mongodb) => ("27017", "root", "root"),
        Some(Database::Redis) => ("6379", "", ""),
        _ => ("", "", ""),
    };

    let log_format = match config.logging {
        Logging::Zap | Logging::Logrus => "json",
        Logging::Charm | Logging::Standard => "text",
    };

    json!({
        "project_name": config.name,
        "module_path": config.module_path,
        "framework": config.framework.as_str(),
        "orm": config.data_access.as_str(),
        "database": config.database.map(|db| db.as_str()).unwrap_or(""),
        "architecture": config.architecture.as_str(),
        "config_format": config.config_format.as_str(),
        "auth": config.auth.as_str(),
        "logging": config.logging.as_str(),
        "testing": config.testing,
        "docker": config.docker,
        "cicd": config.cicd.as_str(),
        "middleware": config.middleware,
        "features": config.features,
        "app_port": APP_PORT,
        "db_port": db_port,
        "db_user": db_user,
        "db_password": db_password,
        "db_name": format!("{}_db", config.name),
        "db_path": format!("./{}.db", config.name),
        "log_format": log_format,
        "go_version": GO_VERSION,
    })
}
