use openrouter_usage_lib::{commands::usage::check_and_print_usage, config, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = config::load_from_env()?;
    check_and_print_usage(&config).await?;
    Ok(())
}
