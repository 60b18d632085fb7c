use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};

use crate::{BuildError, RenderContext};

const TEMPLATE_NAME: &str = "Dockerfile";

/// Renders a Dockerfile template with minijinja.
///
/// Undefined fields are errors, so a template can only reference
/// what [`RenderContext`] provides.
pub struct DockerfileRenderer {
    env: Environment<'static>,
    path: PathBuf,
}

impl DockerfileRenderer {
    /// Reads and parses the template at `path`.
    pub fn from_file(path: &Path) -> Result<Self, BuildError> {
        let source = std::fs::read_to_string(path).map_err(|e| BuildError::TemplateRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_source(path, source)
    }

    /// Parses template text; `path` names the template in errors.
    pub fn from_source(path: &Path, source: String) -> Result<Self, BuildError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template_owned(TEMPLATE_NAME, source)
            .map_err(|e| BuildError::TemplateParse {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            env,
            path: path.to_path_buf(),
        })
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String, BuildError> {
        let render_err = |e| BuildError::TemplateRender {
            path: self.path.clone(),
            source: e,
        };
        let template = self.env.get_template(TEMPLATE_NAME).map_err(render_err)?;
        template.render(ctx).map_err(render_err)
    }
}

/// Creates or truncates `path` and writes the rendered Dockerfile.
pub fn write_output(path: &Path, content: &str) -> Result<(), BuildError> {
    std::fs::write(path, content).map_err(|e| BuildError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
