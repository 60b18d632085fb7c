use std::path::PathBuf;

use playdock_core::{AppSpec, GenerateOptions, OsProfile};

use crate::render::write_output;
use crate::{BuildError, DockerfileRenderer, RenderContext};

/// Runs one generation: resolve inputs, pick the OS profile, render the
/// template, and write the Dockerfile. Returns the output path.
///
/// Usage errors are raised before any file is read or written. The output
/// file is only opened once rendering has succeeded.
pub fn generate(options: &GenerateOptions) -> Result<PathBuf, BuildError> {
    let app = AppSpec::resolve(&options.repo, &options.name, &options.branch)?;
    let os = OsProfile::lookup(&options.os, &options.version)?;
    tracing::info!(app = %app.name, os = %os.name, version = %os.version, "generating Dockerfile");

    let ctx = RenderContext::new(app, os);

    let renderer = DockerfileRenderer::from_file(&options.template)?;
    let dockerfile = renderer.render(&ctx)?;
    tracing::debug!(template = %options.template.display(), bytes = dockerfile.len(), "rendered template");

    write_output(&options.output, &dockerfile)?;
    Ok(options.output.clone())
}
