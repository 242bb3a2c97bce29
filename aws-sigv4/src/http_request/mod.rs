/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities to sign HTTP requests.
//!
//! ```rust
//! use aws_sigv4::http_request::{sign, SignableRequest, SigningSettings};
//! use aws_sigv4::SigningParams;
//! use std::time::SystemTime;
//!
//! let params = SigningParams::builder()
//!     .access_key("example access key")
//!     .secret_key("example secret key")
//!     .region("us-east-1")
//!     .service_name("codebuild")
//!     .date_time(SystemTime::now())
//!     .settings(SigningSettings::default())
//!     .build()
//!     .unwrap();
//! let mut request = http::Request::builder()
//!     .uri("https://codebuild.us-east-1.amazonaws.com/")
//!     .body("{}")
//!     .unwrap();
//! let signable = SignableRequest::from_http(&request, request.body().as_bytes());
//! let (instructions, _signature) = sign(signable, &params).unwrap().into_parts();
//! instructions.apply_to_request(&mut request);
//! ```

mod canonical_request;
mod url_escape;

use crate::sign::{calculate_signature, generate_signing_key, sha256_hex_string};
use crate::{SigningOutput, SigningParams};
use canonical_request::{CanonicalRequest, StringToSign, HMAC_256};
use chrono::{DateTime, Utc};
use http::header::{HeaderName, HeaderValue, InvalidHeaderValue, AUTHORIZATION};
use http::{HeaderMap, Method, Uri};
use thiserror::Error;

pub use canonical_request::{X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};

/// Settings that alter how a request is signed
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct SigningSettings {
    /// Whether to add an `x-amz-content-sha256` header with the payload hash
    pub payload_checksum_kind: PayloadChecksumKind,
    /// Headers that are never signed. `user-agent` is always excluded.
    pub excluded_headers: Vec<HeaderName>,
}

impl Default for SigningSettings {
    fn default() -> Self {
        SigningSettings {
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
            excluded_headers: vec![HeaderName::from_static("x-amz-user-agent")],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadChecksumKind {
    /// Add an `x-amz-content-sha256` header
    XAmzSha256,
    /// Only use the payload hash inside the canonical request
    NoHeader,
}

/// The body of a request, as far as signing is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignableBody<'a> {
    /// A fully loaded body
    Bytes(&'a [u8]),
    /// A body whose SHA-256 is already known
    Precomputed(&'a str),
}

/// The parts of an HTTP request that contribute to the signature
#[derive(Debug)]
pub struct SignableRequest<'a> {
    method: &'a Method,
    uri: &'a Uri,
    headers: &'a HeaderMap<HeaderValue>,
    body: SignableBody<'a>,
}

impl<'a> SignableRequest<'a> {
    pub fn new(
        method: &'a Method,
        uri: &'a Uri,
        headers: &'a HeaderMap<HeaderValue>,
        body: SignableBody<'a>,
    ) -> Self {
        SignableRequest {
            method,
            uri,
            headers,
            body,
        }
    }

    pub fn from_http<B>(request: &'a http::Request<B>, body: &'a [u8]) -> Self {
        Self::new(
            request.method(),
            request.uri(),
            request.headers(),
            SignableBody::Bytes(body),
        )
    }

    pub(crate) fn uri(&self) -> &Uri {
        self.uri
    }

    pub(crate) fn method(&self) -> &Method {
        self.method
    }

    pub(crate) fn headers(&self) -> &HeaderMap<HeaderValue> {
        self.headers
    }

    pub(crate) fn payload_hash(&self) -> String {
        match self.body {
            SignableBody::Bytes(data) => sha256_hex_string(data),
            SignableBody::Precomputed(digest) => digest.to_string(),
        }
    }
}

/// Headers that must be added to the request for the signature to be valid
#[derive(Debug, Default)]
pub struct SigningInstructions {
    headers: HeaderMap<HeaderValue>,
}

impl SigningInstructions {
    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.headers
    }

    pub fn apply_to_request<B>(self, request: &mut http::Request<B>) {
        for (name, value) in self.headers.into_iter() {
            if let Some(name) = name {
                request.headers_mut().insert(name, value);
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("the request uri has no authority; set an endpoint before signing")]
    MissingAuthority,
    #[error("header value could not be signed: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// Produce the headers that sign `request`
pub fn sign<'a>(
    request: SignableRequest<'a>,
    params: &'a SigningParams<'a, SigningSettings>,
) -> Result<SigningOutput<SigningInstructions>, SigningError> {
    let date_time: DateTime<Utc> = params.date_time.into();
    let creq = CanonicalRequest::from(&request, params, &date_time)?;
    tracing::trace!(canonical_request = %creq);

    let encoded_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(
        date_time,
        params.region,
        params.service_name,
        &encoded_creq,
    );
    let signing_key = generate_signing_key(
        params.secret_key,
        date_time,
        params.region,
        params.service_name,
    );
    let signature = calculate_signature(signing_key, sts.to_string().as_bytes());

    let mut headers = creq.added_headers();
    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256,
        params.access_key,
        sts.scope,
        creq.signed_headers,
        signature
    );
    let mut authorization = HeaderValue::from_str(&authorization)?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    Ok(SigningOutput::new(SigningInstructions { headers }, signature))
}

#[cfg(test)]
mod tests {
    use super::{sign, SignableRequest, SigningError, SigningSettings};
    use crate::date_fmt::parse_date_time;
    use crate::SigningParams;
    use http::header::AUTHORIZATION;
    use pretty_assertions::assert_eq;
    use std::time::SystemTime;

    fn params<'a>(security_token: Option<&'a str>) -> SigningParams<'a, SigningSettings> {
        let date_time: SystemTime = parse_date_time("20150830T123600Z").unwrap().into();
        SigningParams::builder()
            .access_key("AKIDEXAMPLE")
            .secret_key("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
            .security_token(security_token)
            .region("us-east-1")
            .service_name("service")
            .date_time(date_time)
            .settings(SigningSettings::default())
            .build()
            .unwrap()
    }

    #[test]
    fn get_vanilla() {
        let mut request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let params = params(None);
        let signable = SignableRequest::from_http(&request, &[]);
        let (instructions, signature) = sign(signable, &params).unwrap().into_parts();
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        instructions.apply_to_request(&mut request);
        assert_eq!(
            request.headers()[AUTHORIZATION],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(request.headers()["x-amz-date"], "20150830T123600Z");
        assert_eq!(request.headers()["host"], "example.amazonaws.com");
    }

    #[test]
    fn session_token_is_signed() {
        let request = http::Request::builder()
            .method("POST")
            .uri("https://codebuild.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("user-agent", "not-signed")
            .body(())
            .unwrap();
        let params = params(Some("session-token"));
        let signable = SignableRequest::from_http(&request, b"{}");
        let (instructions, _) = sign(signable, &params).unwrap().into_parts();
        assert_eq!(instructions.headers()["x-amz-security-token"], "session-token");
        let auth = instructions.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(
            auth.contains("SignedHeaders=content-type;host;x-amz-date;x-amz-security-token,"),
            "{}",
            auth
        );
    }

    #[test]
    fn missing_authority() {
        let request = http::Request::builder().uri("/").body(()).unwrap();
        let params = params(None);
        let err = sign(SignableRequest::from_http(&request, &[]), &params).unwrap_err();
        assert!(matches!(err, SigningError::MissingAuthority));
    }
}
