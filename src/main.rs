use clap::Parser;

mod cli;
mod commands;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(cli.config.as_ref())?;
    log::info!("Using backend at {}", cfg.backend.base_url);
    commands::run(cfg, cli).await
}
