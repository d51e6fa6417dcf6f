use std::collections::HashSet;
use std::path::PathBuf;

use goforge::config::{Architecture, FeaturesConfig, PartialConfig};
use goforge::layout::plan_directories;
use goforge::validation::validate;

fn config_for(architecture: Architecture) -> goforge::config::ProjectConfig {
    validate(PartialConfig { architecture: Some(architecture), ..PartialConfig::default() })
        .unwrap()
}

#[test]
fn test_plan_is_deterministic() {
    let config = config_for(Architecture::Simple);
    assert_eq!(plan_directories(&config), plan_directories(&config));
}

#[test]
fn test_plan_has_no_duplicates() {
    for architecture in [
        Architecture::Simple,
        Architecture::Clean,
        Architecture::Hexagonal,
        Architecture::Mvc,
        Architecture::Custom,
    ] {
        let mut config = config_for(architecture);
        config.testing = true;
        config.features.swagger = true;
        config.features.static_files = true;
        config.features.i18n = true;

        let dirs = plan_directories(&config);
        let unique: HashSet<&PathBuf> = dirs.iter().collect();
        assert_eq!(unique.len(), dirs.len());
    }
}

#[test]
fn test_architecture_selects_layout() {
    let simple = plan_directories(&config_for(Architecture::Simple));
    assert!(simple.contains(&PathBuf::from("internal/models")));
    assert!(simple.contains(&PathBuf::from("internal/handlers")));

    let clean = plan_directories(&config_for(Architecture::Clean));
    assert!(clean.contains(&PathBuf::from("internal/entity")));
    assert!(clean.contains(&PathBuf::from("internal/usecase")));
    assert!(!clean.contains(&PathBuf::from("internal/models")));

    let hexagonal = plan_directories(&config_for(Architecture::Hexagonal));
    assert!(hexagonal.contains(&PathBuf::from("internal/ports")));
    assert!(hexagonal.contains(&PathBuf::from("internal/adapters/primary/http")));

    let mvc = plan_directories(&config_for(Architecture::Mvc));
    assert!(mvc.contains(&PathBuf::from("internal/views")));
    assert!(mvc.contains(&PathBuf::from("internal/controllers")));
}

#[test]
fn test_feature_directories_follow_flags() {
    let mut config = config_for(Architecture::Simple);
    config.testing = true;
    config.features = FeaturesConfig {
        swagger: true,
        static_files: true,
        i18n: true,
        ..FeaturesConfig::default()
    };

    let dirs = plan_directories(&config);
    assert!(dirs.contains(&PathBuf::from("docs")));
    assert!(dirs.contains(&PathBuf::from("test")));
    assert!(dirs.contains(&PathBuf::from("static/css")));
    assert!(dirs.contains(&PathBuf::from("static/js")));
    assert!(dirs.contains(&PathBuf::from("static/images")));
    assert!(dirs.contains(&PathBuf::from("locales")));
}

#[test]
fn test_disabled_features_add_nothing() {
    let config = config_for(Architecture::Simple);
    let dirs = plan_directories(&config);
    assert!(!dirs.contains(&PathBuf::from("docs")));
    assert!(!dirs.contains(&PathBuf::from("test")));
    assert!(!dirs.contains(&PathBuf::from("locales")));
    assert!(!dirs.contains(&PathBuf::from("static/css")));
}

#[test]
fn test_base_directories_come_first() {
    let mut config = config_for(Architecture::Simple);
    config.features.i18n = true;
    let dirs = plan_directories(&config);
    assert_eq!(dirs.first(), Some(&PathBuf::from("cmd")));
    assert_eq!(dirs.last(), Some(&PathBuf::from("locales")));
}
