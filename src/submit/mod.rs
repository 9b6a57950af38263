// src/submit/mod.rs

use crate::error::TransportError;
use crate::validate::UserRecord;
use tracing::{error, info};
use url::Url;

pub mod transport;

pub use transport::ReqwestTransport;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one user as a JSON POST and reports what came back.
pub trait Transport {
    fn post_json(&self, url: &Url, user: &UserRecord) -> Result<HttpResponse, TransportError>;
}

/// Classified result of a single create-user attempt.
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// 201
    Created,
    /// 409, the user exists already.
    AlreadyExists,
    /// 5xx
    ServerError { status: u16, body: String },
    /// Any other status.
    Rejected { status: u16, body: String },
    TransportFailed(TransportError),
}

impl SubmissionOutcome {
    pub fn from_response(resp: HttpResponse) -> Self {
        match resp.status {
            201 => Self::Created,
            409 => Self::AlreadyExists,
            500..=599 => Self::ServerError {
                status: resp.status,
                body: resp.body,
            },
            status => Self::Rejected {
                status,
                body: resp.body,
            },
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Posts validated users to the create-user endpoint, one attempt each.
pub struct SubmissionClient<T> {
    transport: T,
    endpoint: Url,
}

impl<T: Transport> SubmissionClient<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `user` once and classify the response. Every outcome is logged
    /// here; nothing is returned as an error.
    pub fn submit(&self, user: &UserRecord) -> SubmissionOutcome {
        let outcome = match self.transport.post_json(&self.endpoint, user) {
            Ok(resp) => SubmissionOutcome::from_response(resp),
            Err(e) => SubmissionOutcome::TransportFailed(e),
        };

        match &outcome {
            SubmissionOutcome::Created => {
                info!(email = %user.email, "User created")
            }
            SubmissionOutcome::AlreadyExists => {
                error!(email = %user.email, "User already exists")
            }
            SubmissionOutcome::ServerError { status, body } => {
                error!(email = %user.email, status, "Server error while creating user: {}", body)
            }
            SubmissionOutcome::Rejected { status, body } => {
                error!(email = %user.email, status, body = %body, "Failed to create user")
            }
            SubmissionOutcome::TransportFailed(e) => {
                error!(email = %user.email, "Request failed: {}", e)
            }
        }

        outcome
    }

    /// True iff the endpoint answered 201.
    pub fn send_user_creation_request(&self, user: &UserRecord) -> bool {
        self.submit(user).is_created()
    }
}
