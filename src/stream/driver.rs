// src/stream/driver.rs
use chrono::{DateTime, Utc};
use std::{io::Read, time::Duration};
use tokio::time::Instant;
use tracing::{info, instrument};

use crate::{
    error::{Result, StreamError},
    stream::{pacing::Pacer, row::format_row, source::RowSource, transport::DatagramSink},
};

/// Outcome of a run that reached the end of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamReport {
    pub rows_sent: u64,
    pub bytes_sent: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub elapsed: Duration,
}

/// Reads rows, formats them, and pushes one paced datagram per row.
pub struct StreamDriver<S, P> {
    sink: S,
    pacer: P,
}

impl<S: DatagramSink, P: Pacer> StreamDriver<S, P> {
    pub fn new(sink: S, pacer: P) -> Self {
        Self { sink, pacer }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (S, P) {
        (self.sink, self.pacer)
    }

    /// Stream every remaining record of `source` in file order.
    ///
    /// Blank lines never reach here; the source drops them. The first
    /// malformed row or failed send ends the run; whatever was sent before
    /// it stays sent.
    #[instrument(level = "info", skip_all, fields(source = %source.path().display()))]
    pub async fn drive<R: Read>(&mut self, source: &mut RowSource<R>) -> Result<StreamReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut rows_sent = 0u64;
        let mut bytes_sent = 0u64;

        while let Some(record) = source.next_record()? {
            let message =
                format_row(record.fields().as_slice()).map_err(|mismatch| StreamError::Malformed {
                    line: record.line,
                    source: mismatch,
                })?;

            self.sink.send(message.as_bytes()).await?;
            rows_sent += 1;
            bytes_sent += message.len() as u64;
            info!("sent {} on port {}", message, self.sink.port());

            self.pacer.pause().await;
        }

        let elapsed = start.elapsed();
        info!(rows_sent, bytes_sent, elapsed = ?elapsed, "source exhausted");

        Ok(StreamReport {
            rows_sent,
            bytes_sent,
            started_at,
            finished_at: Utc::now(),
            elapsed,
        })
    }
}
