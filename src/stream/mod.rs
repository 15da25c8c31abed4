// src/stream/mod.rs
pub mod driver;
pub mod pacing;
pub mod row;
pub mod source;
pub mod transport;

use tracing::{info, instrument};

use crate::{config::StreamConfig, error::Result};

pub use driver::{StreamDriver, StreamReport};
pub use pacing::{Pacer, SleepPacer};
pub use row::{format_row, Message, QuizRow};
pub use source::{RowSource, SourceRecord};
pub use transport::{DatagramSink, UdpSink};

/// Stream `config.input_path` to `config.host:config.port`, one datagram per row.
///
/// The file is opened and its header consumed before the socket is created,
/// so a missing source is reported ahead of any network problem.
#[instrument(level = "info", skip(config), fields(path = %config.input_path.display()))]
pub async fn stream_file(config: &StreamConfig) -> Result<StreamReport> {
    config.validate()?;
    info!(
        "start streaming data from {} to {}",
        config.input_path.display(),
        config.destination()
    );

    let mut source = RowSource::open(&config.input_path, config.delimiter_byte()?)?;
    let sink = UdpSink::bind(&config.host, config.port).await?;
    let mut driver = StreamDriver::new(sink, SleepPacer::new(config.delay()));

    let report = driver.drive(&mut source).await?;
    info!(
        "streamed {} rows ({} bytes) in {:?}",
        report.rows_sent, report.bytes_sent, report.elapsed
    );
    Ok(report)
}
