use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── Usage ──
    #[error("A repository is required to pull down a playbook and configure this container.")]
    MissingRepo,

    #[error("No configuration for os '{os}' available.")]
    UnsupportedOs { os: String },

    // ── Repository URL ──
    #[error("unable to parse git repo '{repo}'")]
    InvalidRepoUrl {
        repo: String,
        source: url::ParseError,
    },

    #[error("git repo '{repo}' has no path segment to derive an application name from")]
    NoRepoName { repo: String },

    // ── playdock.toml ──
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl Error {
    /// Usage errors are reported as a plain message, not logged as failures.
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::MissingRepo | Self::UnsupportedOs { .. })
    }
}
