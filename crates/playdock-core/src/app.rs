use percent_encoding::percent_decode_str;
use url::Url;

/// The application being containerized and the playbook that configures it.
///
/// Serializes to the `app` fields exposed to templates:
/// `name`, `repo`, `branch` (empty string for the default branch).
///
/// # Examples
///
/// ```
/// use playdock_core::AppSpec;
///
/// let app = AppSpec::resolve("https://example.com/teams/infra.git", "", "main").unwrap();
/// assert_eq!(app.name, "infra");
/// assert_eq!(app.branch.as_deref(), Some("main"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AppSpec {
    /// Container name, explicit or derived from `repo`
    pub name: String,
    /// Git URL of the Ansible playbook repository
    pub repo: String,
    /// Branch to check out; `None` means the repository default
    #[serde(serialize_with = "serialize_branch")]
    pub branch: Option<String>,
}

impl AppSpec {
    /// Validates raw flag values into an `AppSpec`.
    ///
    /// An empty `repo` is a usage error. An empty `name` is derived from
    /// the repository URL; an empty `branch` selects the default branch.
    pub fn resolve(repo: &str, name: &str, branch: &str) -> crate::Result<Self> {
        if repo.is_empty() {
            return Err(crate::Error::MissingRepo);
        }

        let name = if name.is_empty() {
            let derived = derive_app_name(repo)?;
            tracing::debug!(repo, name = %derived, "derived application name from repo");
            derived
        } else {
            parse_repo(repo)?;
            name.to_owned()
        };

        let branch = (!branch.is_empty()).then(|| branch.to_owned());

        Ok(Self {
            name,
            repo: repo.to_owned(),
            branch,
        })
    }
}

/// Derives an application name from the last path segment of a git URL,
/// dropping a trailing `.git`. Percent-escapes in the path are decoded.
///
/// ```
/// use playdock_core::derive_app_name;
///
/// assert_eq!(derive_app_name("https://github.com/acme/web-api.git").unwrap(), "web-api");
/// assert_eq!(derive_app_name("https://github.com/acme/digit").unwrap(), "digit");
/// ```
pub fn derive_app_name(repo: &str) -> crate::Result<String> {
    let url = parse_repo(repo)?;
    let path = percent_decode_str(url.path()).decode_utf8_lossy();

    let segment = path
        .split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .ok_or_else(|| crate::Error::NoRepoName {
            repo: repo.to_owned(),
        })?;

    let name = match segment.strip_suffix(".git") {
        Some(stem) => stem,
        None => segment,
    };
    if name.is_empty() {
        return Err(crate::Error::NoRepoName {
            repo: repo.to_owned(),
        });
    }

    Ok(name.to_owned())
}

fn parse_repo(repo: &str) -> crate::Result<Url> {
    Url::parse(repo).map_err(|e| crate::Error::InvalidRepoUrl {
        repo: repo.to_owned(),
        source: e,
    })
}

fn serialize_branch<S: serde::Serializer>(
    branch: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match branch {
        Some(branch) => serializer.serialize_str(branch),
        None => serializer.serialize_str(""),
    }
}
