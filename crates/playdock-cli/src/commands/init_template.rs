use playdock_core::GenerateOptions;

pub fn init_template(options: &GenerateOptions) -> anyhow::Result<()> {
    playdock_build::template::eject_template(&options.template)?;

    println!("Wrote starter template to {}", options.template.display());
    println!("Edit it, then run: playdock --repo <playbook-git-url>");
    Ok(())
}
