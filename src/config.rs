//! Project configuration model.
//! Every generation choice lives in [`ProjectConfig`]: closed enumerations for
//! the stack options plus boolean flag groups for middleware and optional
//! features. The configuration is built once (from flags, a config file, or
//! the interactive prompt), validated once, and read-only afterwards.

use crate::error::{Error, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported web frameworks for the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Gin,
    Echo,
    Fiber,
    Revel,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Gin => "gin",
            Framework::Echo => "echo",
            Framework::Fiber => "fiber",
            Framework::Revel => "revel",
        }
    }
}

/// Data-access layer: full ORM, lightweight SQL helper, raw SQL, or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataAccess {
    Gorm,
    Sqlx,
    Raw,
    None,
}

impl DataAccess {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataAccess::Gorm => "gorm",
            DataAccess::Sqlx => "sqlx",
            DataAccess::Raw => "raw",
            DataAccess::None => "none",
        }
    }
}

/// Supported databases. Only meaningful when the data-access layer is not
/// [`DataAccess::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgresql,
    Mysql,
    Sqlite,
    Mongodb,
    Redis,
    Memory,
}

impl Database {
    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Postgresql => "postgresql",
            Database::Mysql => "mysql",
            Database::Sqlite => "sqlite",
            Database::Mongodb => "mongodb",
            Database::Redis => "redis",
            Database::Memory => "memory",
        }
    }
}

/// Architectural layout of the generated source tree. Each value maps to
/// exactly one canonical directory layout (see [`crate::layout`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Simple,
    Clean,
    Hexagonal,
    Mvc,
    Custom,
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Simple => "simple",
            Architecture::Clean => "clean",
            Architecture::Hexagonal => "hexagonal",
            Architecture::Mvc => "mvc",
            Architecture::Custom => "custom",
        }
    }
}

/// Configuration file format used by the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Json => "json",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Authentication mechanism wired into the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Auth {
    Jwt,
    Oauth2,
    Basic,
    None,
}

impl Auth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Auth::Jwt => "jwt",
            Auth::Oauth2 => "oauth2",
            Auth::Basic => "basic",
            Auth::None => "none",
        }
    }
}

/// Logging library used by the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Logging {
    Standard,
    Logrus,
    Zap,
    Charm,
}

impl Logging {
    pub fn as_str(&self) -> &'static str {
        match self {
            Logging::Standard => "standard",
            Logging::Logrus => "logrus",
            Logging::Zap => "zap",
            Logging::Charm => "charm",
        }
    }
}

/// CI/CD pipeline provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Cicd {
    None,
    Github,
    Gitlab,
}

impl Cicd {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cicd::None => "none",
            Cicd::Github => "github",
            Cicd::Gitlab => "gitlab",
        }
    }
}

/// Middleware toggles. Each flag gates an independent generator output; any
/// subset may be active and the generated files never collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiddlewareConfig {
    pub cors: bool,
    pub rate_limit: bool,
    pub logging: bool,
    pub auth: bool,
    pub error_handler: bool,
}

/// Optional feature toggles. These influence directories, environment
/// samples, compose services, manifest requirements, and documentation
/// rather than emitting dedicated source files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub websocket: bool,
    pub caching: bool,
    pub health_check: bool,
    pub swagger: bool,
    pub static_files: bool,
    pub i18n: bool,
    pub metrics: bool,
    pub cloud_config: bool,
}

/// Fully validated project configuration. Immutable for the remainder of a
/// generation run; the planner and generators only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub module_path: String,
    pub framework: Framework,
    pub data_access: DataAccess,
    pub database: Option<Database>,
    pub architecture: Architecture,
    pub config_format: ConfigFormat,
    pub auth: Auth,
    pub logging: Logging,
    pub testing: bool,
    pub docker: bool,
    pub cicd: Cicd,
    pub middleware: MiddlewareConfig,
    pub features: FeaturesConfig,
}

/// A possibly-partial configuration as collected from command-line flags, a
/// configuration file, or the interactive prompt. Unset fields receive
/// documented defaults during validation (see [`crate::validation`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub name: Option<String>,
    pub module_path: Option<String>,
    pub framework: Option<Framework>,
    pub data_access: Option<DataAccess>,
    pub database: Option<Database>,
    pub architecture: Option<Architecture>,
    pub config_format: Option<ConfigFormat>,
    pub auth: Option<Auth>,
    pub logging: Option<Logging>,
    pub testing: Option<bool>,
    pub docker: Option<bool>,
    pub cicd: Option<Cicd>,
    pub middleware: Option<MiddlewareConfig>,
    pub features: Option<FeaturesConfig>,
}

impl PartialConfig {
    /// Overlays `other` on top of `self`; fields set in `other` win. Used to
    /// stack the quick preset, a configuration file, and explicit flags in
    /// increasing precedence.
    pub fn overlay(self, other: PartialConfig) -> PartialConfig {
        PartialConfig {
            name: other.name.or(self.name),
            module_path: other.module_path.or(self.module_path),
            framework: other.framework.or(self.framework),
            data_access: other.data_access.or(self.data_access),
            database: other.database.or(self.database),
            architecture: other.architecture.or(self.architecture),
            config_format: other.config_format.or(self.config_format),
            auth: other.auth.or(self.auth),
            logging: other.logging.or(self.logging),
            testing: other.testing.or(self.testing),
            docker: other.docker.or(self.docker),
            cicd: other.cicd.or(self.cicd),
            middleware: other.middleware.or(self.middleware),
            features: other.features.or(self.features),
        }
    }
}

/// Loads a partial configuration from a YAML file.
///
/// # Errors
/// * `Error::IoError` if the file cannot be read
/// * `Error::ValidationError` if the file is not valid YAML for the schema
pub fn load_partial_config(path: &Path) -> Result<PartialConfig> {
    let raw = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&raw).map_err(|e| {
        Error::ValidationError(format!("invalid configuration file '{}': {}", path.display(), e))
    })
}
