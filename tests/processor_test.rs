use std::fs;
use std::path::Path;

use goforge::config::{DataAccess, MiddlewareConfig, PartialConfig, ProjectConfig};
use goforge::error::{Error, Result};
use goforge::processor::{ensure_output_dir, Phase, Processor};
use goforge::renderer::{MiniJinjaRenderer, TemplateRenderer};
use goforge::validation::validate;
use tempfile::TempDir;

fn sample_config() -> ProjectConfig {
    let mut config = validate(PartialConfig {
        name: Some("shop-api".to_string()),
        ..PartialConfig::default()
    })
    .unwrap();
    config.testing = true;
    config.docker = true;
    config.middleware = MiddlewareConfig {
        cors: true,
        logging: true,
        error_handler: true,
        ..Default::default()
    };
    config.features.health_check = true;
    config.features.swagger = true;
    config
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap_or_else(|e| panic!("missing {}: {}", rel, e))
}

#[test]
fn test_ensure_output_dir_refuses_existing() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("shop-api");
    fs::create_dir(&target).unwrap();

    match ensure_output_dir(&target) {
        Err(Error::OutputDirectoryExistsError { output_dir }) => {
            assert!(output_dir.contains("shop-api"))
        }
        other => panic!("expected output-directory error, got {:?}", other),
    }
}

#[test]
fn test_ensure_output_dir_accepts_fresh_path() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ensure_output_dir(&temp_dir.path().join("shop-api")).is_ok());
}

#[test]
fn test_full_generation_produces_expected_tree() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("shop-api");
    let config = sample_config();
    let renderer = MiniJinjaRenderer::new().unwrap();

    let mut processor = Processor::new(&config, &renderer, &root);
    let summary = processor.run().unwrap();

    assert_eq!(processor.phase(), Phase::Done);
    assert!(summary.files_written > 0);
    assert!(summary.directories_created > 0);

    for rel in [
        "go.mod",
        "main.go",
        ".env.example",
        ".gitignore",
        "internal/app/app.go",
        "pkg/database/database.go",
        "pkg/logger/logger.go",
        "pkg/config/config.go",
        "pkg/startup/startup.go",
        "internal/models/user.go",
        "internal/models/response.go",
        "internal/middleware/cors.go",
        "internal/middleware/logging.go",
        "internal/middleware/error_handler.go",
        "api/routes/routes.go",
        "internal/handlers/handlers.go",
        "docs/docs.go",
        "main_test.go",
        "test/testutils/utils.go",
        "test/handlers/user_test.go",
        "Dockerfile",
        "docker-compose.yml",
        ".dockerignore",
        ".github/workflows/ci-cd.yml",
        "Makefile",
        "README.md",
    ] {
        assert!(root.join(rel).is_file(), "expected file {}", rel);
    }
}

#[test]
fn test_generated_content_matches_configuration() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("shop-api");
    let config = sample_config();
    let renderer = MiniJinjaRenderer::new().unwrap();

    Processor::new(&config, &renderer, &root).run().unwrap();

    let go_mod = read(&root, "go.mod");
    assert!(go_mod.starts_with("module github.com/username/shop-api"));
    assert!(go_mod.contains("github.com/gin-gonic/gin"));
    assert!(go_mod.contains("gorm.io/gorm"));
    assert!(go_mod.contains("gorm.io/driver/postgres"));
    assert!(!go_mod.contains("mysql"));

    let app = read(&root, "internal/app/app.go");
    assert!(app.contains("gin.New()"));
    assert!(app.contains("github.com/username/shop-api/pkg/database"));

    let database = read(&root, "pkg/database/database.go");
    assert!(database.contains("host=%s"));
    assert!(!database.contains("mongodb"));

    let env = read(&root, ".env.example");
    assert!(env.contains("DB_PORT=5432"));
    assert!(env.contains("DB_NAME=shop-api_db"));

    let dockerfile = read(&root, "Dockerfile");
    assert!(dockerfile.contains("golang:1.22-alpine"));
    assert!(dockerfile.contains("EXPOSE 8080"));

    let readme = read(&root, "README.md");
    assert!(readme.starts_with("# shop-api"));
    assert!(readme.contains("Health check endpoint"));
}

#[test]
fn test_no_database_layer_omits_wiring() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("shop-api");
    let mut config = sample_config();
    config.data_access = DataAccess::None;
    config.database = None;
    let renderer = MiniJinjaRenderer::new().unwrap();

    Processor::new(&config, &renderer, &root).run().unwrap();

    assert!(!root.join("pkg/database/database.go").exists());
    assert!(!root.join("test/handlers/user_test.go").exists());
    let go_mod = read(&root, "go.mod");
    assert!(!go_mod.contains("gorm.io"));
}

#[test]
fn test_generation_is_deterministic() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first");
    let second = temp_dir.path().join("second");
    let config = sample_config();
    let renderer = MiniJinjaRenderer::new().unwrap();

    Processor::new(&config, &renderer, &first).run().unwrap();
    Processor::new(&config, &renderer, &second).run().unwrap();

    for entry in walkdir::WalkDir::new(&first) {
        let entry = entry.unwrap();
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(&first).unwrap();
        let a = fs::read(entry.path()).unwrap();
        let b = fs::read(second.join(rel)).unwrap();
        assert_eq!(a, b, "{} differs between runs", rel.display());
    }
}

struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(&self, name: &str, _context: &serde_json::Value) -> Result<String> {
        Err(Error::TemplateExecError {
            name: name.to_string(),
            source: minijinja::Error::new(
                minijinja::ErrorKind::UndefinedError,
                "field is undefined",
            ),
        })
    }

    fn render_str(&self, _template: &str, _context: &serde_json::Value) -> Result<String> {
        unreachable!("not used by the processor")
    }
}

#[test]
fn test_render_failure_reports_generator_and_marks_failed() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("shop-api");
    let config = sample_config();
    let renderer = FailingRenderer;

    let mut processor = Processor::new(&config, &renderer, &root);
    match processor.run() {
        Err(Error::GenerateError { generator, source }) => {
            assert_eq!(generator, "core");
            match source.root_cause() {
                Error::TemplateExecError { .. } => {}
                other => panic!("unexpected root cause {:?}", other),
            }
        }
        other => panic!("expected generator error, got {:?}", other),
    }
    assert_eq!(processor.phase(), Phase::Failed);

    // Partial output is left behind for the caller to clean up.
    assert!(root.exists());
}
