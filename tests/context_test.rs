use goforge::config::{Database, Logging, PartialConfig};
use goforge::context::{build_context, APP_PORT, GO_VERSION};
use goforge::validation::validate;

fn context_for(partial: PartialConfig) -> serde_json::Value {
    build_context(&validate(partial).unwrap())
}

#[test]
fn test_context_carries_base_fields() {
    let context = context_for(PartialConfig {
        name: Some("shop-api".to_string()),
        ..PartialConfig::default()
    });

    assert_eq!(context["project_name"], "shop-api");
    assert_eq!(context["module_path"], "github.com/username/shop-api");
    assert_eq!(context["framework"], "gin");
    assert_eq!(context["orm"], "gorm");
    assert_eq!(context["database"], "postgresql");
    assert_eq!(context["app_port"], APP_PORT);
    assert_eq!(context["go_version"], GO_VERSION);
    assert_eq!(context["db_name"], "shop-api_db");
    assert_eq!(context["db_path"], "./shop-api.db");
}

#[test]
fn test_database_credentials_per_engine() {
    let postgres = context_for(PartialConfig::default());
    assert_eq!(postgres["db_port"], "5432");
    assert_eq!(postgres["db_user"], "postgres");

    let mysql = context_for(PartialConfig {
        database: Some(Database::Mysql),
        ..PartialConfig::default()
    });
    assert_eq!(mysql["db_port"], "3306");
    assert_eq!(mysql["db_user"], "root");

    let mongo = context_for(PartialConfig {
        database: Some(Database::Mongodb),
        ..PartialConfig::default()
    });
    assert_eq!(mongo["db_port"], "27017");

    let redis = context_for(PartialConfig {
        database: Some(Database::Redis),
        ..PartialConfig::default()
    });
    assert_eq!(redis["db_port"], "6379");
    assert_eq!(redis["db_user"], "");
}

#[test]
fn test_cleared_database_becomes_empty_string() {
    let context = context_for(PartialConfig {
        data_access: Some(goforge::config::DataAccess::None),
        ..PartialConfig::default()
    });
    assert_eq!(context["database"], "");
    assert_eq!(context["db_port"], "");
}

#[test]
fn test_log_format_follows_logging_library() {
    for (logging, expected) in [
        (Logging::Zap, "json"),
        (Logging::Logrus, "json"),
        (Logging::Charm, "text"),
        (Logging::Standard, "text"),
    ] {
        let context = context_for(PartialConfig {
            logging: Some(logging),
            ..PartialConfig::default()
        });
        assert_eq!(context["log_format"], expected);
    }
}

#[test]
fn test_context_is_deterministic() {
    let config = validate(PartialConfig::default()).unwrap();
    assert_eq!(build_context(&config), build_context(&config));
}
