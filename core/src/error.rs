// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt;

use http::StatusCode;
use thiserror::Error;

/// The error type for pi-payment operations
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    body: Option<String>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No credential could be loaded, or the loaded one is unusable
    CredentialInvalid,

    /// Request cannot be built or signed (bad endpoint, header value, body, etc.)
    RequestInvalid,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// No HTTP response was received (DNS, connection refused, timeout, ...)
    Transport,

    /// The server answered with a non-2xx status
    Api,

    /// The server answered with 2xx but the body is not what we can parse
    ResponseInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            body: None,
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach the HTTP status that was received along with this error.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the HTTP status carried by this error.
    ///
    /// Only errors raised after a response was received carry a status.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Get the raw response body carried by an [`ErrorKind::Api`] error.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Check if the server rejected the request with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        self.kind == ErrorKind::Api && self.status.is_some_and(|s| s.is_client_error())
    }

    /// Check if the server failed with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        self.kind == ErrorKind::Api && self.status.is_some_and(|s| s.is_server_error())
    }

    /// Check if the server rejected the request as invalid (400).
    pub fn is_bad_request(&self) -> bool {
        self.kind == ErrorKind::Api && self.status == Some(StatusCode::BAD_REQUEST)
    }

    /// Check if the server refused our credential.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ErrorKind::Api && self.status == Some(StatusCode::UNAUTHORIZED)
    }

    /// Check if the server rate limited the request.
    pub fn is_rate_limited(&self) -> bool {
        self.kind == ErrorKind::Api && self.status == Some(StatusCode::TOO_MANY_REQUESTS)
    }

    /// Check if no response was received at all.
    pub fn is_transport_error(&self) -> bool {
        self.kind == ErrorKind::Transport
    }
}

// Convenience constructors
impl Error {
    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Create an api error from a non-2xx response.
    ///
    /// The message always reads `API Error {status}: {body}` with the numeric
    /// status code and the raw body text.
    pub fn api(status: StatusCode, body: impl Into<String>) -> Self {
        let body = body.into();
        let mut err = Self::new(
            ErrorKind::Api,
            format!("API Error {}: {}", status.as_u16(), body),
        )
        .with_status(status);
        err.body = Some(body);
        err
    }

    /// Create a response invalid error
    pub fn response_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResponseInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Transport => write!(f, "transport error"),
            ErrorKind::Api => write!(f, "api error"),
            ErrorKind::ResponseInvalid => write!(f, "invalid response"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUriParts> for Error {
    fn from(err: http::uri::InvalidUriParts) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
