// src/config.rs
use std::{path::PathBuf, time::Duration};

use crate::error::{Result, StreamError};

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 9999;
pub const DEFAULT_DELAY_SECS: u64 = 3;
pub const DEFAULT_DELIMITER: char = '\t';
pub const DEFAULT_INPUT_FILE: &str = "DRN_Nats.csv";

/// Everything a streaming run needs: where to read, where to send, how fast.
///
/// The binary always runs with [`StreamConfig::default`]; the `with_*`
/// setters exist for embedding and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub host: String,
    pub port: u16,
    /// Pause after each datagram, in whole seconds.
    pub delay_secs: u64,
    /// Field separator. The bundled quiz export is tab-separated despite its `.csv` name.
    pub delimiter: char,
    pub input_path: PathBuf,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            delay_secs: DEFAULT_DELAY_SECS,
            delimiter: DEFAULT_DELIMITER,
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
        }
    }
}

impl StreamConfig {
    pub fn with_destination(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    pub fn with_delay_secs(mut self, delay_secs: u64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_input_path(mut self, input_path: impl Into<PathBuf>) -> Self {
        self.input_path = input_path.into();
        self
    }

    /// `host:port`, as handed to the resolver.
    pub fn destination(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    /// The delimiter as the single byte the CSV reader wants.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            return Err(StreamError::Config(format!(
                "delimiter {:?} is not a single ASCII character",
                self.delimiter
            )));
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(StreamError::Config(format!(
                "delimiter {:?} clashes with record syntax",
                self.delimiter
            )));
        }
        Ok(self.delimiter as u8)
    }

    pub fn validate(&self) -> Result<()> {
        self.delimiter_byte()?;
        if self.port == 0 {
            return Err(StreamError::Config("port must be non-zero".into()));
        }
        if self.host.trim().is_empty() {
            return Err(StreamError::Config("host must not be empty".into()));
        }
        Ok(())
    }
}
