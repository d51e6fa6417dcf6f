//! Database wiring generator.
//! Runs only when a data-access layer was chosen. The layer selects the
//! wiring template; the template itself branches on the database choice for
//! connection-string shape and driver selection.

use super::Artifact;
use crate::config::{DataAccess, ProjectConfig};

/// Dispatch table from data-access layer to its wiring template. Returns
/// `None` for [`DataAccess::None`], which emits nothing.
pub fn wiring_template(data_access: DataAccess) -> Option<&'static str> {
    match data_access {
        DataAccess::Gorm => Some("database/gorm.go.j2"),
        DataAccess::Sqlx => Some("database/sqlx.go.j2"),
        DataAccess::Raw => Some("database/raw.go.j2"),
        DataAccess::None => None,
    }
}

pub fn generate(config: &ProjectConfig) -> Vec<Artifact> {
    match wiring_template(config.data_access) {
        Some(template) => vec![Artifact::new(template, "pkg/database/database.go")],
        None => Vec::new(),
    }
}
