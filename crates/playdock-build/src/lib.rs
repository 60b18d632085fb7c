//! Dockerfile rendering for playdock.
//!
//! # Pipeline
//!
//! ```text
//! playdock --repo <url>
//!   1. Resolve   ── AppSpec::resolve (repo required, name derived from URL)
//!   2. Lookup    ── OsProfile::lookup (ubuntu | centos | debian)
//!   3. Assemble  ── RenderContext { app, os }
//!   4. Render    ── Dockerfile.template → minijinja → ./Dockerfile
//! ```
//!
//! # Template fields
//!
//! Templates see exactly eight fields:
//! `app.name`, `app.repo`, `app.branch`,
//! `os.name`, `os.version`, `os.update`, `os.upgrade`, `os.install`.
//! Referencing anything else fails the render.

pub mod context;
pub mod error;
pub mod generate;
pub mod render;
pub mod template;

pub use context::RenderContext;
pub use error::BuildError;
pub use generate::generate;
pub use render::DockerfileRenderer;
