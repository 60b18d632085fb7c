use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "playdock.toml";
pub const DEFAULT_TEMPLATE_FILE: &str = "Dockerfile.template";
pub const DEFAULT_OUTPUT_FILE: &str = "Dockerfile";

/// playdock.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaydockConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Fallback values for the generation flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Base OS (defaults to ubuntu)
    #[serde(default = "default_os")]
    pub os: String,
    /// OS image version tag (defaults to latest)
    #[serde(default = "default_version")]
    pub version: String,
    /// Playbook repository URL
    #[serde(default)]
    pub repo: String,
    /// Application name (empty derives it from `repo`)
    #[serde(default)]
    pub name: String,
    /// Playbook branch (empty selects the repository default)
    #[serde(default)]
    pub branch: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Template file, relative to the working directory
    #[serde(default = "default_template")]
    pub template: PathBuf,
    /// Generated Dockerfile, relative to the working directory
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            os: default_os(),
            version: default_version(),
            repo: String::new(),
            name: String::new(),
            branch: String::new(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            template: default_template(),
            output: default_output(),
        }
    }
}

impl PlaydockConfig {
    /// Load from playdock.toml in the given directory, or return defaults if not found.
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.clone(),
                source: e,
            })?;
        let config = toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
            path: config_path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Generation options with this file's values applied over the built-in defaults.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            os: self.defaults.os.clone(),
            version: self.defaults.version.clone(),
            repo: self.defaults.repo.clone(),
            name: self.defaults.name.clone(),
            branch: self.defaults.branch.clone(),
            template: self.paths.template.clone(),
            output: self.paths.output.clone(),
        }
    }
}

/// Everything a single generation run needs, built once from flags and config.
///
/// Values are raw: `repo`, `name`, and `branch` may be empty and are
/// validated when the run resolves its [`AppSpec`](crate::AppSpec).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub os: String,
    pub version: String,
    pub repo: String,
    pub name: String,
    pub branch: String,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        PlaydockConfig::default().options()
    }
}

fn default_os() -> String {
    "ubuntu".to_owned()
}

fn default_version() -> String {
    "latest".to_owned()
}

fn default_template() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}
