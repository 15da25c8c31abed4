use anyhow::Result;
use rowcast::{stream_file, StreamConfig};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

const BANNER: &str = "===============================================";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    info!("{}", BANNER);
    info!("starting fake streaming process");

    // ─── 2) stream with the built-in settings ────────────────────────
    // Failures are logged and swallowed; the process still exits cleanly.
    let config = StreamConfig::default();
    match stream_file(&config).await {
        Ok(report) => {
            info!(
                rows = report.rows_sent,
                elapsed = ?report.elapsed,
                "streaming complete"
            );
            info!("{}", BANNER);
        }
        Err(e) => {
            error!(kind = e.kind().as_str(), "an error occurred: {}", e);
        }
    }

    Ok(())
}
