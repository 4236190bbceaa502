//! Template rendering for stamp.
//! Wraps MiniJinja with strict undefined handling so a template that drifts
//! away from its render context fails at generation time.
use crate::error::{Error, Result};
use minijinja::{filters, tests as jinja_tests, AutoEscape, Environment, ErrorKind, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name of the template, used in diagnostics only
    /// * `template` - Template source to render
    /// * `context` - Context variables for rendering
    ///
    /// # Errors
    /// * `Error::UndefinedVariable` if the template touches a variable missing from `context`
    /// * `Error::TemplateError` for any other template failure
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with strict undefined behavior.
    ///
    /// The environment starts empty: no engine globals (`range`, `namespace`,
    /// `dict`, ...) exist, so every name a template reads must come from the
    /// render context. Only string and sequence filters plus a few tests are
    /// registered. Auto-escaping is disabled for every template name.
    pub fn new() -> Self {
        let mut env = Environment::empty();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        register_filters(&mut env);
        register_tests(&mut env);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())
            .map_err(|e| map_render_error(name, e))?;

        let tmpl = env.get_template(name).map_err(|e| map_render_error(name, e))?;

        tmpl.render(context).map_err(|e| map_render_error(name, e))
    }
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("join", filters::join);
    env.add_filter("length", filters::length);
    env.add_filter("lower", filters::lower);
    env.add_filter("upper", filters::upper);
    env.add_filter("title", filters::title);
    env.add_filter("capitalize", filters::capitalize);
    env.add_filter("trim", filters::trim);
    env.add_filter("replace", filters::replace);
    env.add_filter("first", filters::first);
    env.add_filter("last", filters::last);
    env.add_filter("reverse", filters::reverse);
    env.add_filter("list", filters::list);
    env.add_filter("indent", filters::indent);
}

fn register_tests(env: &mut Environment<'static>) {
    env.add_test("defined", jinja_tests::is_defined);
    env.add_test("undefined", jinja_tests::is_undefined);
    env.add_test("none", jinja_tests::is_none);
    env.add_test("odd", jinja_tests::is_odd);
    env.add_test("even", jinja_tests::is_even);
    env.add_test("string", jinja_tests::is_string);
    env.add_test("sequence", jinja_tests::is_sequence);
}

fn map_render_error(name: &str, err: minijinja::Error) -> Error {
    match err.kind() {
        // Calling an unknown name is the same drift as reading one.
        ErrorKind::UndefinedError | ErrorKind::UnknownFunction => Error::UndefinedVariable {
            template: name.to_string(),
            detail: err.to_string(),
        },
        _ => Error::TemplateError(err),
    }
}
