//! Test doubles shared by the unit tests.

use crate::error::TransportError;
use crate::submit::{HttpResponse, Transport};
use crate::validate::UserRecord;
use serde_json::Value;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use url::Url;

/// Records every POST body, serialized the way reqwest sends it, and answers
/// with a fixed response or failure.
pub struct FakeTransport {
    reply: Result<HttpResponse, String>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn status(status: u16) -> Self {
        Self::response(status, "")
    }

    pub fn response(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    fn post_json(&self, url: &Url, user: &UserRecord) -> Result<HttpResponse, TransportError> {
        let body = serde_json::to_value(user).unwrap();
        self.calls.lock().unwrap().push((url.to_string(), body));
        self.reply.clone().map_err(|message| TransportError {
            url: url.to_string(),
            message,
        })
    }
}

/// In-memory log sink for asserting on formatted tracing output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Run `f` with a subscriber that writes into this buffer.
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    /// Formatted lines at ERROR level. The level is the column after the
    /// timestamp, so message text cannot match it.
    pub fn errors(&self) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|l| l.split_whitespace().nth(1) == Some("ERROR"))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{error, info, warn};

    #[test]
    fn errors_match_the_level_column_only() {
        let logs = LogBuffer::default();
        logs.capture(|| {
            info!("upstream said ERROR in its body");
            warn!(body = "ERROR", "odd reply");
            error!("real failure");
        });

        let errors = logs.errors();
        assert_eq!(errors.len(), 1, "logs: {}", logs.contents());
        assert!(errors[0].contains("real failure"));
    }
}
