use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use voice_journal::http::{create_router, AppState};
use voice_journal::journal::JournalStore;
use voice_journal::transcript::TranscriptClient;
use voice_journal::Config;

#[derive(Debug, Parser)]
#[command(name = "voice-journal", about = "Voice journal analysis service")]
struct Args {
    /// Configuration file (without extension)
    #[arg(long, default_value = "config/voice-journal")]
    config: String,

    /// Override the configured HTTP port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;
    let port = args.port.unwrap_or(cfg.service.http.port);

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!(
        "Capture format: {}Hz, {} channels",
        cfg.audio.sample_rate, cfg.audio.channels
    );
    info!("Transcription service: {}", cfg.transcription.base_url);
    info!("Journal backend: {}", cfg.journal.base_url);

    let transcript = Arc::new(TranscriptClient::new(&cfg.transcription)?);
    let store = Arc::new(JournalStore::new(&cfg.journal)?);
    let state = AppState::new(transcript, store, cfg.audio.clone());

    let app = create_router(state);
    let addr = format!("{}:{}", cfg.service.http.bind, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
