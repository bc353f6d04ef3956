// RGW Admin Ops Rust Library
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error definitions for Admin Ops operations
//!
//! Two families of failures exist:
//!
//! * [`ValidationErr`] - local, pre-network failures while building a request
//!   (malformed endpoint, empty credentials, invalid arguments).
//! * [`AdminOpsError`] - every non-success outcome of a remote call, whether the
//!   server answered with a non-2xx status, the 2xx body could not be decoded,
//!   or no HTTP response was received at all.
//!
//! Both are surfaced through the top-level [`Error`].

use crate::adminops::transport::{RawResponse, TransportError};
use crate::adminops::types::AdminOpsRequest;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error type used for wrapped sources.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Local validation failure raised before any network activity.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("no credentials provided; admin ops requests must be signed")]
    MissingCredentials,

    #[error("access key must not be empty")]
    EmptyAccessKey,

    #[error("secret key must not be empty")]
    EmptySecretKey,

    #[error("user id must not be empty when provided")]
    EmptyUserId,

    #[error("invalid bucket name '{name}': {reason}")]
    InvalidBucketName { name: String, reason: String },

    #[error("invalid admin resource '{0}'")]
    InvalidResource(String),

    #[error("query parameter '{0}' is set by the client and cannot be overridden")]
    ReservedQueryParam(String),

    #[error("unable to read certificate file {path:?}: {source}")]
    CertificateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Where a failed admin ops call ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseStatus {
    /// The server answered with this status code.
    Http(StatusCode),
    /// No HTTP response was received (connection failure, timeout, ...).
    Transport,
}

impl ResponseStatus {
    /// Returns the status code, if an HTTP response was received.
    pub fn code(&self) -> Option<StatusCode> {
        match self {
            ResponseStatus::Http(s) => Some(*s),
            ResponseStatus::Transport => None,
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Http(s) => write!(f, "HTTP {}", s.as_u16()),
            ResponseStatus::Transport => f.write_str("transport failure"),
        }
    }
}

/// Classification of an [`AdminOpsError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminOpsErrorKind {
    /// 401 or 403
    AccessDenied,
    /// 404
    NotFound,
    /// Any other 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// 1xx or 3xx; redirects are not followed
    UnexpectedStatus,
    /// Success status, but the body could not be decoded
    InvalidResponse,
    /// The request timed out before a response was received
    Timeout,
    /// Connection or I/O failure before a response was received
    Transport,
}

impl AdminOpsErrorKind {
    /// Maps a non-success status code to its kind.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AdminOpsErrorKind::AccessDenied,
            StatusCode::NOT_FOUND => AdminOpsErrorKind::NotFound,
            s if s.is_client_error() => AdminOpsErrorKind::ClientError,
            s if s.is_server_error() => AdminOpsErrorKind::ServerError,
            s if s.is_success() => AdminOpsErrorKind::InvalidResponse,
            _ => AdminOpsErrorKind::UnexpectedStatus,
        }
    }
}

impl fmt::Display for AdminOpsErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AdminOpsErrorKind::AccessDenied => "access denied",
            AdminOpsErrorKind::NotFound => "not found",
            AdminOpsErrorKind::ClientError => "client error",
            AdminOpsErrorKind::ServerError => "server error",
            AdminOpsErrorKind::UnexpectedStatus => "unexpected status",
            AdminOpsErrorKind::InvalidResponse => "invalid response",
            AdminOpsErrorKind::Timeout => "timeout",
            AdminOpsErrorKind::Transport => "transport error",
        };
        f.write_str(s)
    }
}

/// Error document returned by RGW on failure, e.g.
/// `{"Code":"NoSuchBucket","RequestId":"tx0...","HostId":"..."}`.
///
/// Every field is optional; the raw body is always kept on the error.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct AdminOpsErrorResponse {
    #[serde(rename = "Code", default)]
    pub code: String,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "RequestId", default)]
    pub request_id: String,
    #[serde(rename = "HostId", default)]
    pub host_id: String,
}

impl AdminOpsErrorResponse {
    /// Attempts to decode an error body; returns `None` for non-JSON or empty bodies.
    pub fn parse(body: &[u8]) -> Option<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        serde_json::from_slice::<AdminOpsErrorResponse>(body)
            .ok()
            .filter(|r| !r.code.is_empty() || !r.message.is_empty())
    }
}

/// Failure of a remote admin ops call.
///
/// Carries the status (or the transport sentinel), the raw error body when
/// one was received, and the request context for diagnostics.
#[derive(Error, Debug)]
#[error("admin ops {operation} ({method} {url}) failed; {status}, {kind}{}", detail_suffix(.message))]
pub struct AdminOpsError {
    operation: String,
    method: Method,
    url: String,
    status: ResponseStatus,
    kind: AdminOpsErrorKind,
    headers: HeaderMap,
    body: Option<Bytes>,
    error_response: Option<AdminOpsErrorResponse>,
    message: String,
    #[source]
    source: Option<BoxError>,
}

fn detail_suffix(message: &str) -> String {
    if message.is_empty() {
        String::new()
    } else {
        format!(": {message}")
    }
}

impl AdminOpsError {
    fn new(request: &AdminOpsRequest, status: ResponseStatus, kind: AdminOpsErrorKind) -> Self {
        Self {
            operation: request.operation().to_string(),
            method: request.method().clone(),
            url: request.url().to_string(),
            status,
            kind,
            headers: HeaderMap::new(),
            body: None,
            error_response: None,
            message: String::new(),
            source: None,
        }
    }

    /// Builds the error for a non-2xx response.
    pub(crate) fn from_response(request: &AdminOpsRequest, response: RawResponse) -> Self {
        let RawResponse {
            status,
            headers,
            body,
        } = response;

        let mut err = Self::new(
            request,
            ResponseStatus::Http(status),
            AdminOpsErrorKind::from_status(status),
        );
        err.error_response = AdminOpsErrorResponse::parse(&body);
        if let Some(r) = &err.error_response {
            err.message = if r.message.is_empty() {
                r.code.clone()
            } else {
                format!("{}: {}", r.code, r.message)
            };
        }
        err.headers = headers;
        if !body.is_empty() {
            err.body = Some(body);
        }
        err
    }

    /// Builds the error for a call that never produced an HTTP response.
    pub(crate) fn from_transport(request: &AdminOpsRequest, error: TransportError) -> Self {
        let kind = if error.is_timeout() {
            AdminOpsErrorKind::Timeout
        } else {
            AdminOpsErrorKind::Transport
        };
        let mut err = Self::new(request, ResponseStatus::Transport, kind);
        err.message = error.to_string();
        err.source = Some(Box::new(error));
        err
    }

    /// Builds the error for a success response whose body is unusable.
    pub(crate) fn invalid_response<E>(
        request: &AdminOpsRequest,
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let mut err = Self::new(
            request,
            ResponseStatus::Http(status),
            AdminOpsErrorKind::InvalidResponse,
        );
        err.message = cause.to_string();
        err.source = Some(Box::new(cause));
        err.headers = headers;
        if !body.is_empty() {
            err.body = Some(body);
        }
        err
    }

    /// Name of the operation that failed, e.g. `list_buckets`.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Request URL; never contains credentials.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// HTTP status code, or `None` for transport failures.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.code()
    }

    pub fn kind(&self) -> AdminOpsErrorKind {
        self.kind
    }

    /// Response headers; empty for transport failures.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body, if a non-empty one was received.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Decoded RGW error document, if the body contained one.
    pub fn error_response(&self) -> Option<&AdminOpsErrorResponse> {
        self.error_response.as_ref()
    }

    /// Server error code such as `NoSuchBucket`, if present.
    pub fn error_code(&self) -> Option<&str> {
        self.error_response
            .as_ref()
            .map(|r| r.code.as_str())
            .filter(|c| !c.is_empty())
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true if no HTTP response was received.
    pub fn is_transport(&self) -> bool {
        self.status == ResponseStatus::Transport
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == AdminOpsErrorKind::Timeout
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == AdminOpsErrorKind::NotFound
    }

    pub fn is_access_denied(&self) -> bool {
        self.kind == AdminOpsErrorKind::AccessDenied
    }
}

/// Top-level error returned by every public operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("{0}")]
    AdminOps(#[from] Box<AdminOpsError>),
}

impl From<AdminOpsError> for Error {
    fn from(err: AdminOpsError) -> Self {
        Error::AdminOps(Box::new(err))
    }
}

impl Error {
    /// Returns the remote failure, if this is one.
    pub fn as_admin_ops(&self) -> Option<&AdminOpsError> {
        match self {
            Error::AdminOps(e) => Some(e),
            Error::Validation(_) => None,
        }
    }

    /// Returns the local validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationErr> {
        match self {
            Error::Validation(e) => Some(e),
            Error::AdminOps(_) => None,
        }
    }
}
