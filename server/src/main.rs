use anyhow::Result;
use axum::Router;
use clap::Parser;
use tagsift_core::StopWords;
use tagsift_server::build_app_with;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
struct Args {
    /// Stop-word file loaded at startup; repeatable
    #[arg(long = "stop-words")]
    stop_words: Vec<PathBuf>,
    /// Host to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,
    /// Port to bind
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut stops = StopWords::new();
    for file in &args.stop_words {
        let inserted = stops.load_path(file)?;
        tracing::info!(file = %file.display(), inserted, "loaded stop words");
    }
    let app: Router = build_app_with(stops);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
