use playdock_core::GenerateOptions;

pub fn generate(options: &GenerateOptions) -> anyhow::Result<()> {
    let output = playdock_build::generate(options)?;
    tracing::info!(path = %output.display(), "wrote Dockerfile");
    Ok(())
}
