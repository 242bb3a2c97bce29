/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by the runtime crates and the generated service clients.

pub mod instant;
pub mod retry;

use std::collections::HashMap;
use std::fmt;

pub use crate::instant::Instant;

/// Generic error metadata returned by a service
///
/// Every operation error carries one of these, whether or not the error was modeled. Protocol
/// specific parsers (awsJson, restJson, awsQuery) extract it from the raw response before the
/// error is matched against the modeled exceptions of the operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

impl Error {
    /// Returns the error code, eg. `ResourceNotFoundException`
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request id the service assigned to the failed request
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns protocol specific metadata, eg. the awsQuery error `Type`
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|s| s.as_str())
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts this error back into a builder
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    pub fn custom(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl retry::ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<retry::ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        for (key, value) in &self.extras {
            fmt.field(key, value);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::retry::{ErrorKind, ProvideErrorKind};
    use crate::Error;

    #[test]
    fn builder_sets_all_fields() {
        let err = Error::builder()
            .code("ThrottlingException")
            .message("slow down")
            .request_id("abc-123")
            .custom("type", "Sender")
            .build();
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.message(), Some("slow down"));
        assert_eq!(err.request_id(), Some("abc-123"));
        assert_eq!(err.extra("type"), Some("Sender"));
        assert_eq!(ProvideErrorKind::code(&err), Some("ThrottlingException"));
        assert_eq!(err.retryable_error_kind(), None::<ErrorKind>);
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = Error::builder().code("Boom").message("it broke").build();
        let rendered = format!("{}", err);
        assert!(rendered.contains("Boom"));
        assert!(rendered.contains("it broke"));
    }
}
