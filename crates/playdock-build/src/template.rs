use std::path::Path;

use crate::BuildError;

/// Starter template written by `playdock --init-template`.
///
/// Installs Ansible on the base image, clones the playbook repository,
/// and applies its `site.yml` to the container itself.
pub const DEFAULT_TEMPLATE: &str = r#"FROM {{ os.name }}:{{ os.version }}

RUN {{ os.update }}
{% if os.upgrade %}RUN {{ os.upgrade }}
{% endif %}RUN {{ os.install }}
RUN pip install ansible

RUN git clone {% if app.branch %}--branch {{ app.branch }} {% endif %}{{ app.repo }} /opt/{{ app.name }}
WORKDIR /opt/{{ app.name }}
RUN ansible-playbook -i "localhost," -c local site.yml
"#;

/// Writes [`DEFAULT_TEMPLATE`] to `path` so it can be customized.
///
/// Refuses to overwrite an existing template.
pub fn eject_template(path: &Path) -> Result<(), BuildError> {
    if path.exists() {
        return Err(BuildError::TemplateExists(path.to_path_buf()));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BuildError::TemplateWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|e| BuildError::TemplateWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "wrote default template");
    Ok(())
}
