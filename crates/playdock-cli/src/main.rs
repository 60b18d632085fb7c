mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use playdock_build::BuildError;

#[derive(Parser)]
#[command(
    name = "playdock",
    about = "Generate a Dockerfile that provisions a container with an Ansible playbook"
)]
struct Cli {
    /// Base operating system: ubuntu, centos, or debian (default: ubuntu)
    #[arg(long)]
    os: Option<String>,
    /// Version tag of the base image (default: latest)
    #[arg(long = "version", value_name = "VERSION")]
    os_version: Option<String>,
    /// Git URL to pull an Ansible playbook from to configure the container
    #[arg(long)]
    repo: Option<String>,
    /// Name of the container to produce (default: derived from --repo)
    #[arg(long)]
    name: Option<String>,
    /// Branch of the playbook repo containing site.yml (default: repo default branch)
    #[arg(long)]
    branch: Option<String>,
    /// Template to render (default: Dockerfile.template)
    #[arg(long)]
    template: Option<PathBuf>,
    /// Where to write the Dockerfile (default: Dockerfile)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Write the built-in template to the template path and exit
    #[arg(long)]
    init_template: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // arch-lint: allow(no-silent-result-drop) reason="an unset or invalid RUST_LOG falls back to info"
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut options = commands::load_options()?;

    if let Some(os) = cli.os {
        options.os = os;
    }
    if let Some(version) = cli.os_version {
        options.version = version;
    }
    if let Some(repo) = cli.repo {
        options.repo = repo;
    }
    if let Some(name) = cli.name {
        options.name = name;
    }
    if let Some(branch) = cli.branch {
        options.branch = branch;
    }
    if let Some(template) = cli.template {
        options.template = template;
    }
    if let Some(output) = cli.output {
        options.output = output;
    }

    if cli.init_template {
        commands::init_template(&options)
    } else {
        commands::generate(&options)
    }
}

/// Usage errors go to stdout as a plain message; everything else is logged
/// with its full cause chain.
fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<BuildError>() {
        Some(usage) if usage.is_usage() => println!("{usage}"),
        _ => tracing::error!("{err:#}"),
    }
    ExitCode::FAILURE
}
