use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Core(#[from] playdock_core::Error),

    #[error("unable to read template {path}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unable to parse template {path}")]
    TemplateParse {
        path: PathBuf,
        source: minijinja::Error,
    },

    #[error("unable to render template {path}")]
    TemplateRender {
        path: PathBuf,
        source: minijinja::Error,
    },

    #[error("unable to write to {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("template already exists at {0}; edit it directly or delete it to start over")]
    TemplateExists(PathBuf),

    #[error("failed to write template {path}")]
    TemplateWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BuildError {
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_usage())
    }
}
