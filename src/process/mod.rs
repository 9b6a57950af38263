// src/process/mod.rs

use crate::config::Config;
use crate::error::ImportError;
use crate::submit::{ReqwestTransport, SubmissionClient, Transport};
use crate::validate::{Row, UserRecord, REQUIRED_HEADERS};
use csv::{ReaderBuilder, Trim};
use std::{fs::File, io, path::Path};
use tracing::{debug, error, info};

/// Counters for one pass over a CSV file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Data rows read, excluding the header.
    pub rows: usize,
    /// Rows that failed validation and were never submitted.
    pub skipped: usize,
    pub created: usize,
    /// Submitted rows that did not come back 201.
    pub failed: usize,
}

/// Drives a CSV file through validation and submission.
pub struct UserImporter<T> {
    client: SubmissionClient<T>,
}

impl<T: Transport> UserImporter<T> {
    pub fn new(client: SubmissionClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SubmissionClient<T> {
        &self.client
    }

    /// Process `path` and return counters, or the error that stopped the file
    /// before (or while) its rows were read.
    ///
    /// - a path that does not exist → [`ImportError::FileNotFound`]
    /// - an unreadable file → [`ImportError::Io`]
    /// - malformed CSV in the header or any record → [`ImportError::CsvParse`];
    ///   rows before the bad record have already been submitted
    /// - a header row without `name`, `email` and `role` →
    ///   [`ImportError::MissingHeaders`], and no row is touched
    ///
    /// Invalid rows are skipped, and a failed submission never stops the loop.
    #[tracing::instrument(level = "info", skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn run(&self, path: impl AsRef<Path>) -> Result<ImportSummary, ImportError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // short rows surface as missing fields, not parse errors
            .trim(Trim::Headers)
            .from_reader(file);

        // the reader strips a leading BOM, and Trim::Headers the padding
        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| read_error(path, e))?
            .iter()
            .map(str::to_string)
            .collect();
        check_headers(&headers)?;

        let mut summary = ImportSummary::default();
        for result in rdr.records() {
            let record = result.map_err(|e| read_error(path, e))?;
            summary.rows += 1;

            let row: Row = headers
                .iter()
                .cloned()
                .zip(record.iter().map(str::to_string))
                .collect();

            let Some(user) = UserRecord::from_row(&row) else {
                let line = record.position().map_or(0, |p| p.line());
                debug!(line, "skipping invalid row");
                summary.skipped += 1;
                continue;
            };

            if self.client.send_user_creation_request(&user) {
                summary.created += 1;
            } else {
                summary.failed += 1;
            }
        }

        Ok(summary)
    }

    /// Process `path`, logging every file-level failure instead of returning
    /// it. Always returns normally.
    pub fn create_users(&self, path: impl AsRef<Path>) {
        match self.run(path) {
            Ok(s) => info!(
                rows = s.rows,
                created = s.created,
                skipped = s.skipped,
                failed = s.failed,
                "import finished"
            ),
            Err(e) => error!("{}", e),
        }
    }
}

/// Import `path` against the configured endpoint over HTTP.
pub fn create_users(path: impl AsRef<Path>, config: &Config) {
    let transport = match ReqwestTransport::new() {
        Ok(t) => t,
        Err(e) => {
            error!("failed to build HTTP client: {}", e);
            return;
        }
    };
    let client = SubmissionClient::new(transport, config.endpoint.clone());
    UserImporter::new(client).create_users(path);
}

fn check_headers(headers: &[String]) -> Result<(), ImportError> {
    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|&&req| !headers.iter().any(|h| h == req))
        .map(|req| req.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImportError::MissingHeaders { missing })
    }
}

/// Split reader failures into I/O trouble and malformed CSV.
fn read_error(path: &Path, err: csv::Error) -> ImportError {
    let path = path.to_path_buf();
    if !err.is_io_error() {
        return ImportError::CsvParse { path, source: err };
    }
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ImportError::Io { path, source },
        // is_io_error() holds, so this arm only keeps the match total
        kind => ImportError::Io {
            path,
            source: io::Error::new(io::ErrorKind::Other, format!("{:?}", kind)),
        },
    }
}
