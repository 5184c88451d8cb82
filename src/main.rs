use clap::Parser;

use tinyserve::config::Config;
use tinyserve::files::ServedRoot;
use tinyserve::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::parse();
    let root = ServedRoot::current_dir()?;

    tokio::select! {
        res = server::listener::run(&cfg, root) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
