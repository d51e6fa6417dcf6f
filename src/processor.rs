//! Generation orchestrator.
//! Drives one project generation from a validated configuration: plans the
//! directory skeleton, then runs every feature generator in a fixed order,
//! rendering and persisting each artifact as it goes. The first failure
//! aborts the run; partially written output is left in place for the caller
//! to dispose of.

use crate::config::ProjectConfig;
use crate::context::build_context;
use crate::error::{Error, Result};
use crate::generators::PIPELINE;
use crate::layout::plan_directories;
use crate::renderer::TemplateRenderer;
use crate::writer;
use std::path::{Path, PathBuf};

/// Progress of a generation run. Used for logging and assertions; the
/// processor only ever moves forward through these states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    DirectoryPlanning,
    CoreGeneration,
    FeatureGeneration(&'static str),
    Done,
    Failed,
}

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub directories_created: usize,
    pub files_written: usize,
}

/// Orchestrates a single project generation.
pub struct Processor<'a, R: TemplateRenderer> {
    config: &'a ProjectConfig,
    renderer: &'a R,
    output_root: PathBuf,
    phase: Phase,
}

/// Verifies that the output directory does not exist yet. Called before the
/// processor is constructed so a refused run has no side effects at all.
pub fn ensure_output_dir(output_root: &Path) -> Result<()> {
    if output_root.exists() {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_root.display().to_string(),
        });
    }
    Ok(())
}

impl<'a, R: TemplateRenderer> Processor<'a, R> {
    pub fn new(config: &'a ProjectConfig, renderer: &'a R, output_root: impl Into<PathBuf>) -> Self {
        Self { config, renderer, output_root: output_root.into(), phase: Phase::NotStarted }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Runs the full pipeline. On error the output directory may hold a
    /// partial tree; it is never deleted here.
    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();

        self.phase = Phase::DirectoryPlanning;
        let dirs = plan_directories(self.config);
        log::debug!("planned {} directories", dirs.len());
        for dir in &dirs {
            writer::create_dir(&self.output_root, dir)?;
            summary.directories_created += 1;
        }

        let context = build_context(self.config);

        for (name, generate) in PIPELINE {
            self.phase = if *name == "core" {
                Phase::CoreGeneration
            } else {
                Phase::FeatureGeneration(name)
            };

            if let Err(err) = self.run_generator(generate, &context, &mut summary) {
                self.phase = Phase::Failed;
                return Err(Error::GenerateError { generator: name, source: Box::new(err) });
            }
        }

        self.phase = Phase::Done;
        log::info!(
            "generated {} files in {} directories under {}",
            summary.files_written,
            summary.directories_created,
            self.output_root.display()
        );
        Ok(summary)
    }

    fn run_generator(
        &self,
        generate: &crate::generators::GeneratorFn,
        context: &serde_json::Value,
        summary: &mut Summary,
    ) -> Result<()> {
        for artifact in generate(self.config) {
            let rendered = self.renderer.render(artifact.template, context)?;
            writer::write_file(&self.output_root, &artifact.path, &rendered)?;
            log::debug!("wrote {}", artifact.path.display());
            summary.files_written += 1;
        }
        Ok(())
    }
}
