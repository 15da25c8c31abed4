// src/stream/source.rs
use csv::{ReaderBuilder, StringRecord};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::error::{Result, StreamError};

/// One record pulled from the source, with the line it started on.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub line: u64,
    pub fields: StringRecord,
}

impl SourceRecord {
    pub fn fields(&self) -> Vec<&str> {
        self.fields.iter().collect()
    }
}

/// Delimited record reader that has already consumed the header.
///
/// The header is the first physical line, blank or not. After it, empty
/// lines are dropped by the csv reader and never surface as records.
/// Records of any width are handed out; judging the arity is the formatter's job.
pub struct RowSource<R> {
    reader: csv::Reader<BufReader<R>>,
    path: PathBuf,
    header: StringRecord,
}

fn reader_builder(delimiter: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .quote(b'"');
    builder
}

impl RowSource<File> {
    pub fn open(path: &Path, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|source| StreamError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        info!("opened file for reading: {}", path.display());
        Self::from_reader(file, path, delimiter)
    }
}

impl<R: Read> RowSource<R> {
    /// Wrap `reader` and read off the header. `path` is only used in errors and logs.
    ///
    /// Only a source with no bytes at all lacks a header.
    pub fn from_reader(reader: R, path: impl Into<PathBuf>, delimiter: u8) -> Result<Self> {
        let path = path.into();
        let mut reader = BufReader::new(reader);

        let mut first_line = Vec::new();
        let read = reader
            .read_until(b'\n', &mut first_line)
            .map_err(|e| StreamError::Read {
                path: path.clone(),
                source: e.into(),
            })?;
        if read == 0 {
            return Err(StreamError::MissingHeader { path });
        }

        // a blank first line parses to no record, leaving the header empty
        let mut header = StringRecord::new();
        reader_builder(delimiter)
            .from_reader(first_line.as_slice())
            .read_record(&mut header)
            .map_err(|source| StreamError::Read {
                path: path.clone(),
                source,
            })?;
        debug!("skipped header with {} columns", header.len());

        Ok(Self {
            reader: reader_builder(delimiter).from_reader(reader),
            path,
            header,
        })
    }

    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next non-empty record in file order, or `None` at end of file.
    pub fn next_record(&mut self) -> Result<Option<SourceRecord>> {
        let mut fields = StringRecord::new();
        let found = self
            .reader
            .read_record(&mut fields)
            .map_err(|source| StreamError::Read {
                path: self.path.clone(),
                source,
            })?;
        if !found {
            return Ok(None);
        }
        // +1 for the header line consumed ahead of the csv reader
        let line = fields.position().map(|p| p.line() + 1).unwrap_or_default();
        Ok(Some(SourceRecord { line, fields }))
    }
}
