pub mod config;
pub mod error;
pub mod process;
pub mod submit;
pub mod validate;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{ImportError, TransportError};
pub use process::{create_users, ImportSummary, UserImporter};
pub use submit::{HttpResponse, ReqwestTransport, SubmissionClient, SubmissionOutcome, Transport};
pub use validate::{is_valid_email, is_valid_row, Row, UserRecord};
