mod generate;
mod init_template;

use playdock_core::{GenerateOptions, PlaydockConfig};
use std::path::Path;

pub use generate::generate;
pub use init_template::init_template;

/// Options from playdock.toml in the working directory, or built-in defaults.
pub fn load_options() -> anyhow::Result<GenerateOptions> {
    let config = PlaydockConfig::load(Path::new("."))?;
    Ok(config.options())
}
