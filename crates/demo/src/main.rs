fn main() -> anyhow::Result<()> {
    identikit_observability::init();

    let report = identikit_demo::run()?;
    tracing::debug!(
        are_credentials_valid = report.are_credentials_valid,
        "demo finished"
    );

    Ok(())
}
