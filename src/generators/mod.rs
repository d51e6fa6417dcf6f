//! Feature generators.
//! Each generator is a pure function of the validated [`ProjectConfig`] to a
//! list of (template, destination path) pairs, or the empty list when its
//! feature is disabled. Generators never touch the file system and never
//! recover from errors; rendering and persistence happen in the
//! orchestrator (see [`crate::processor`]).
//!
//! The path-to-generator mapping is total and deterministic: no two
//! generators are ever configured to write the same path for a given
//! configuration.

use crate::config::ProjectConfig;
use std::path::PathBuf;

pub mod ci;
pub mod config_files;
pub mod core;
pub mod database;
pub mod docker;
pub mod docs;
pub mod framework;
pub mod logging;
pub mod manifest;
pub mod middleware;
pub mod models;
pub mod readme;
pub mod routes;
pub mod startup;
pub mod testing;

/// A single unit of planned output: a named template resource and the
/// relative path it renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Name of a registered template resource (see [`crate::templates`])
    pub template: &'static str,
    /// Destination path relative to the project root
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(template: &'static str, path: impl Into<PathBuf>) -> Self {
        Self { template, path: path.into() }
    }
}

/// Signature shared by all feature generators.
pub type GeneratorFn = fn(&ProjectConfig) -> Vec<Artifact>;

/// The fixed generation pipeline, executed in order by the orchestrator.
/// The project manifest is generated last so that every feature has already
/// committed to its dependency requirements.
pub const PIPELINE: &[(&str, GeneratorFn)] = &[
    ("core", core::generate),
    ("framework", framework::generate),
    ("database", database::generate),
    ("middleware", middleware::generate),
    ("routes", routes::generate),
    ("logging", logging::generate),
    ("startup", startup::generate),
    ("docs", docs::generate),
    ("models", models::generate),
    ("config", config_files::generate),
    ("testing", testing::generate),
    ("docker", docker::generate),
    ("ci", ci::generate),
    ("readme", readme::generate),
    ("manifest", manifest::generate),
];
