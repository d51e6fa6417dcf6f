//! Command-line interface implementation for goforge.
//! Provides argument parsing using clap and the quick-mode preset applied
//! when the user skips the interactive flow.

use crate::config::{Architecture, DataAccess, Database, Framework, PartialConfig};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for goforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "Goforge: Go web service project generator", long_about = None)]
pub struct Args {
    /// Project name; also used as the output directory name
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Go module path of the generated project
    #[arg(short, long)]
    pub module_path: Option<String>,

    /// Web framework
    #[arg(short, long, value_enum)]
    pub framework: Option<Framework>,

    /// Data-access layer
    #[arg(short, long, value_enum)]
    pub orm: Option<DataAccess>,

    /// Database backend
    #[arg(short, long, value_enum)]
    pub database: Option<Database>,

    /// Project architecture
    #[arg(short, long, value_enum)]
    pub arch: Option<Architecture>,

    /// Read configuration from a YAML file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer every project question interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}

impl Args {
    /// Converts the parsed flags into a partial configuration. Only fields
    /// the user actually passed are set.
    pub fn to_partial(&self) -> PartialConfig {
        PartialConfig {
            name: self.name.clone(),
            module_path: self.module_path.clone(),
            framework: self.framework,
            data_access: self.orm,
            database: self.database,
            architecture: self.arch,
            ..PartialConfig::default()
        }
    }
}

/// Opinionated preset for non-interactive runs: testing, docker, the common
/// middleware trio, and a couple of quality-of-life features. Anything from
/// a configuration file or an explicit flag overrides it.
pub fn quick_preset() -> PartialConfig {
    use crate::config::{FeaturesConfig, MiddlewareConfig};

    PartialConfig {
        testing: Some(true),
        docker: Some(true),
        middleware: Some(MiddlewareConfig {
            cors: true,
            logging: true,
            error_handler: true,
            ..MiddlewareConfig::default()
        }),
        features: Some(FeaturesConfig {
            health_check: true,
            swagger: true,
            ..FeaturesConfig::default()
        }),
        ..PartialConfig::default()
    }
}
