fn main() -> anyhow::Result<()> {
    env_logger::init();

    let app = meadow::default();
    app.run()?;

    Ok(())
}
