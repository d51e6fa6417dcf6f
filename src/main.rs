//! Goforge's main application entry point and orchestration logic.
//! Parses the command line, assembles and validates the configuration, and
//! coordinates rendering and persistence for one project generation.

use goforge::{
    cli::{get_args, quick_preset, Args},
    config::load_partial_config,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    processor::{ensure_output_dir, Processor},
    prompt,
    renderer::MiniJinjaRenderer,
    validation,
};
use std::path::Path;

fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    let partial = if args.interactive {
        prompt::collect_config()?
    } else {
        let mut partial = quick_preset();
        if let Some(path) = &args.config {
            partial = partial.overlay(load_partial_config(path)?);
        }
        partial.overlay(args.to_partial())
    };

    let config = validation::validate(partial)?;

    let output_root = std::env::current_dir()?.join(&config.name);
    ensure_output_dir(&output_root)?;

    let renderer = MiniJinjaRenderer::new()?;
    let mut processor = Processor::new(&config, &renderer, &output_root);

    match processor.run() {
        Ok(_) => {
            println!();
            println!("Project '{}' created.", config.name);
            println!();
            println!("Next steps:");
            println!("  cd {}", config.name);
            println!("  go mod tidy");
            println!("  go run .");
            Ok(())
        }
        Err(err) => {
            print_remediation(&err);
            cleanup_partial_output(&output_root);
            Err(err)
        }
    }
}

/// Prints a remediation hint matching the first underlying cause of a failed
/// run.
fn print_remediation(err: &Error) {
    match err.root_cause() {
        Error::IoError(_) => {
            eprintln!("Hint: check permissions and free space in the target directory.");
        }
        Error::TemplateParseError { name, .. } => {
            eprintln!("Hint: template '{}' is malformed; this is a bug in goforge itself.", name);
        }
        Error::TemplateExecError { name, .. } => {
            eprintln!(
                "Hint: template '{}' referenced a value missing from the configuration; \
                 this is a bug in goforge itself.",
                name
            );
        }
        _ => {}
    }
}

/// Removes whatever was written before the failure. A cleanup failure is
/// only logged; the original error stays the reported one.
fn cleanup_partial_output(output_root: &Path) {
    if output_root.exists() {
        if let Err(err) = std::fs::remove_dir_all(output_root) {
            log::warn!("failed to clean up partial output at {}: {}", output_root.display(), err);
        }
    }
}
