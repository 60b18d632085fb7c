use playdock_core::{AppSpec, OsProfile};
use serde::Serialize;

/// Data handed to the template: one application and one versioned OS.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub app: AppSpec,
    pub os: OsProfile,
}

impl RenderContext {
    pub fn new(app: AppSpec, os: OsProfile) -> Self {
        Self { app, os }
    }
}
