use tracing_subscriber::{EnvFilter, fmt};

use comment_board::config::Config;
use comment_board::shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("comment_board=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    shell::run(config).await
}
