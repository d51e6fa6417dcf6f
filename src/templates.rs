//! Embedded template resources.
//! Every template ships inside the binary but lives as a plain file under
//! `templates/`, so the set can be inspected, diffed, and edited without
//! touching generator code. The table below is the single registration
//! point; the renderer loads all of it at startup.

/// All named template resources, as (name, source) pairs.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("core/main.go.j2", include_str!("../templates/core/main.go.j2")),
    ("core/env.j2", include_str!("../templates/core/env.j2")),
    ("core/gitignore.j2", include_str!("../templates/core/gitignore.j2")),
    ("framework/gin_app.go.j2", include_str!("../templates/framework/gin_app.go.j2")),
    ("framework/echo_app.go.j2", include_str!("../templates/framework/echo_app.go.j2")),
    ("framework/fiber_app.go.j2", include_str!("../templates/framework/fiber_app.go.j2")),
    ("framework/revel_app.go.j2", include_str!("../templates/framework/revel_app.go.j2")),
    ("database/gorm.go.j2", include_str!("../templates/database/gorm.go.j2")),
    ("database/sqlx.go.j2", include_str!("../templates/database/sqlx.go.j2")),
    ("database/raw.go.j2", include_str!("../templates/database/raw.go.j2")),
    ("middleware/auth.go.j2", include_str!("../templates/middleware/auth.go.j2")),
    ("middleware/cors.go.j2", include_str!("../templates/middleware/cors.go.j2")),
    ("middleware/logging.go.j2", include_str!("../templates/middleware/logging.go.j2")),
    ("middleware/rate_limit.go.j2", include_str!("../templates/middleware/rate_limit.go.j2")),
    (
        "middleware/error_handler.go.j2",
        include_str!("../templates/middleware/error_handler.go.j2"),
    ),
    ("routes/routes.go.j2", include_str!("../templates/routes/routes.go.j2")),
    ("routes/handlers.go.j2", include_str!("../templates/routes/handlers.go.j2")),
    ("logger/logger.go.j2", include_str!("../templates/logger/logger.go.j2")),
    ("startup/startup.go.j2", include_str!("../templates/startup/startup.go.j2")),
    ("docs/docs.go.j2", include_str!("../templates/docs/docs.go.j2")),
    ("models/user.go.j2", include_str!("../templates/models/user.go.j2")),
    ("models/response.go.j2", include_str!("../templates/models/response.go.j2")),
    ("config/config.go.j2", include_str!("../templates/config/config.go.j2")),
    ("testing/main_test.go.j2", include_str!("../templates/testing/main_test.go.j2")),
    ("testing/testutils.go.j2", include_str!("../templates/testing/testutils.go.j2")),
    ("testing/user_test.go.j2", include_str!("../templates/testing/user_test.go.j2")),
    ("docker/Dockerfile.j2", include_str!("../templates/docker/Dockerfile.j2")),
    ("docker/docker-compose.yml.j2", include_str!("../templates/docker/docker-compose.yml.j2")),
    ("docker/dockerignore.j2", include_str!("../templates/docker/dockerignore.j2")),
    ("ci/github.yml.j2", include_str!("../templates/ci/github.yml.j2")),
    ("ci/gitlab-ci.yml.j2", include_str!("../templates/ci/gitlab-ci.yml.j2")),
    ("ci/Makefile.j2", include_str!("../templates/ci/Makefile.j2")),
    ("readme/README.md.j2", include_str!("../templates/readme/README.md.j2")),
    ("manifest/go.mod.j2", include_str!("../templates/manifest/go.mod.j2")),
];
