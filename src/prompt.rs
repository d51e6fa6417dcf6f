//! Interactive configuration flow.
//! Walks the user through every project question with dialoguer and returns
//! the answers as a [`PartialConfig`]; validation and defaulting still run
//! afterwards, so the prompt never has to enforce cross-field rules itself.

use crate::config::{
    Architecture, Auth, Cicd, ConfigFormat, DataAccess, Database, FeaturesConfig, Framework,
    Logging, MiddlewareConfig, PartialConfig,
};
use crate::error::{Error, Result};
use crate::validation::{is_valid_project_name, DEFAULT_PROJECT_NAME};
use dialoguer::{Confirm, Input, MultiSelect, Select};

fn prompt_select<T: Copy>(prompt: &str, items: &[(&str, T)], default: usize) -> Result<T> {
    let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .default(default)
        .items(&labels)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;
    Ok(items[selection].1)
}

fn prompt_confirm(prompt: &str, default: bool) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))
}

fn prompt_name() -> Result<String> {
    Input::new()
        .with_prompt("Project name")
        .default(DEFAULT_PROJECT_NAME.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if is_valid_project_name(input) {
                Ok(())
            } else {
                Err("name may only contain letters, digits, '-' and '_'")
            }
        })
        .interact_text()
        .map_err(|e| Error::PromptError(e.to_string()))
}

fn prompt_middleware() -> Result<MiddlewareConfig> {
    let items = ["CORS", "Rate limiting", "Request logging", "Authentication", "Error handler"];
    let defaults = [true, false, true, false, true];
    let picked = MultiSelect::new()
        .with_prompt("Middleware")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    let mut middleware = MiddlewareConfig::default();
    for index in picked {
        match index {
            0 => middleware.cors = true,
            1 => middleware.rate_limit = true,
            2 => middleware.logging = true,
            3 => middleware.auth = true,
            _ => middleware.error_handler = true,
        }
    }
    Ok(middleware)
}

fn prompt_features() -> Result<FeaturesConfig> {
    let items = [
        "WebSocket support",
        "Caching",
        "Health check endpoint",
        "Swagger documentation",
        "Static file serving",
        "Internationalization",
        "Metrics",
        "Cloud configuration",
    ];
    let defaults = [false, false, true, true, false, false, false, false];
    let picked = MultiSelect::new()
        .with_prompt("Optional features")
        .items(&items)
        .defaults(&defaults)
        .interact()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    let mut features = FeaturesConfig::default();
    for index in picked {
        match index {
            0 => features.websocket = true,
            1 => features.caching = true,
            2 => features.health_check = true,
            3 => features.swagger = true,
            4 => features.static_files = true,
            5 => features.i18n = true,
            6 => features.metrics = true,
            _ => features.cloud_config = true,
        }
    }
    Ok(features)
}

/// Collects a full set of answers interactively.
///
/// # Errors
/// * `Error::PromptError` if the terminal interaction fails or is aborted
pub fn collect_config() -> Result<PartialConfig> {
    let name = prompt_name()?;

    let module_path: String = Input::new()
        .with_prompt("Go module path")
        .default(format!("github.com/username/{}", name))
        .interact_text()
        .map_err(|e| Error::PromptError(e.to_string()))?;

    let framework = prompt_select(
        "Web framework",
        &[
            ("Gin", Framework::Gin),
            ("Echo", Framework::Echo),
            ("Fiber", Framework::Fiber),
            ("Revel", Framework::Revel),
        ],
        0,
    )?;

    let data_access = prompt_select(
        "Data-access layer",
        &[
            ("GORM", DataAccess::Gorm),
            ("sqlx", DataAccess::Sqlx),
            ("Raw database/sql", DataAccess::Raw),
            ("None", DataAccess::None),
        ],
        0,
    )?;

    let database = if data_access == DataAccess::None {
        None
    } else {
        Some(prompt_select(
            "Database",
            &[
                ("PostgreSQL", Database::Postgresql),
                ("MySQL", Database::Mysql),
                ("SQLite", Database::Sqlite),
                ("MongoDB", Database::Mongodb),
                ("Redis", Database::Redis),
                ("In-memory", Database::Memory),
            ],
            0,
        )?)
    };

    let architecture = prompt_select(
        "Project architecture",
        &[
            ("Simple", Architecture::Simple),
            ("Clean architecture", Architecture::Clean),
            ("Hexagonal", Architecture::Hexagonal),
            ("MVC", Architecture::Mvc),
            ("Custom", Architecture::Custom),
        ],
        0,
    )?;

    let config_format = prompt_select(
        "Configuration file format",
        &[
            ("YAML", ConfigFormat::Yaml),
            ("JSON", ConfigFormat::Json),
            ("TOML", ConfigFormat::Toml),
        ],
        0,
    )?;

    let auth = prompt_select(
        "Authentication",
        &[
            ("JWT", Auth::Jwt),
            ("OAuth2", Auth::Oauth2),
            ("Basic", Auth::Basic),
            ("None", Auth::None),
        ],
        0,
    )?;

    let logging = prompt_select(
        "Logging library",
        &[
            ("Standard library", Logging::Standard),
            ("Logrus", Logging::Logrus),
            ("Zap", Logging::Zap),
            ("Charm log", Logging::Charm),
        ],
        2,
    )?;

    let testing = prompt_confirm("Generate test scaffolding?", true)?;
    let docker = prompt_confirm("Generate Docker support?", true)?;

    let cicd = prompt_select(
        "CI/CD provider",
        &[("None", Cicd::None), ("GitHub Actions", Cicd::Github), ("GitLab CI", Cicd::Gitlab)],
        1,
    )?;

    let middleware = prompt_middleware()?;
    let features = prompt_features()?;

    Ok(PartialConfig {
        name: Some(name),
        module_path: Some(module_path),
        framework: Some(framework),
        data_access: Some(data_access),
        database,
        architecture: Some(architecture),
        config_format: Some(config_format),
        auth: Some(auth),
        logging: Some(logging),
        testing: Some(testing),
        docker: Some(docker),
        cicd: Some(cicd),
        middleware: Some(middleware),
        features: Some(features),
    })
}
