//! Template rendering for goforge.
//! All template resources are registered into one MiniJinja environment up
//! front, so malformed template syntax surfaces as a parse failure before a
//! single byte of output exists. Render-time resolution failures (missing
//! field, type mismatch) are reported separately; the rendered string is
//! buffered in memory and nothing reaches the file writer on failure.

use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a registered template by name with the given context.
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a one-off template string with the given context.
    fn render_str(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance holding all registered templates
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with every embedded template resource registered.
    ///
    /// # Errors
    /// * `Error::TemplateParseError` if any embedded template fails to parse
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        // Templates are Go source, YAML, and Makefiles; HTML escaping would
        // corrupt them.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        // A missing context field is a defect in the template or the context
        // schema and must abort the render.
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        for (name, source) in crate::templates::TEMPLATES {
            env.add_template(name, source).map_err(|e| Error::TemplateParseError {
                name: (*name).to_string(),
                source: e,
            })?;
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let template = self.env.get_template(name).map_err(|e| Error::TemplateParseError {
            name: name.to_string(),
            source: e,
        })?;

        template.render(context).map_err(|e| Error::TemplateExecError {
            name: name.to_string(),
            source: e,
        })
    }

    fn render_str(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let compiled =
            self.env.template_from_str(template).map_err(|e| Error::TemplateParseError {
                name: "<string>".to_string(),
                source: e,
            })?;

        compiled.render(context).map_err(|e| Error::TemplateExecError {
            name: "<string>".to_string(),
            source: e,
        })
    }
}
