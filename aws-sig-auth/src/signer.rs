/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_sigv4::http_request::{
    sign, PayloadChecksumKind, SignableBody, SignableRequest, SigningSettings,
};
use aws_sigv4::SigningParams;
use aws_types::region::{SigningRegion, SigningService};
use aws_types::Credentials;
use std::fmt;
use std::time::SystemTime;

pub use aws_sigv4::http_request::SigningError;

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum HttpSignatureType {
    /// The signature is added to the request headers
    HttpRequestHeaders,
}

/// Signing configuration for an operation
///
/// The fields may be customized per request but are generally fixed for a given operation.
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signature_type: HttpSignatureType,
    pub signing_options: SigningOptions,
}

impl OperationSigningConfig {
    /// The configuration used by every operation of the generated clients
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signature_type: HttpSignatureType::HttpRequestHeaders,
            signing_options: SigningOptions {
                content_sha256_header: false,
            },
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub content_sha256_header: bool,
}

/// Signing configuration for an individual request
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        let mut settings = SigningSettings::default();
        settings.payload_checksum_kind = if operation_config.signing_options.content_sha256_header {
            PayloadChecksumKind::XAmzSha256
        } else {
            PayloadChecksumKind::NoHeader
        };
        settings
    }

    /// Sign a request using the SigV4 protocol
    ///
    /// Signing headers are inserted into `request`. Bodies must already be loaded into memory.
    /// On success the hex-encoded signature is returned.
    pub fn sign<B>(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<B>,
        body: &[u8],
    ) -> Result<String, SigningError> {
        let params = SigningParams::builder()
            .access_key(credentials.access_key_id())
            .secret_key(credentials.secret_access_key())
            .security_token(credentials.session_token())
            .region(request_config.region.as_ref())
            .service_name(request_config.service.as_ref())
            .date_time(request_config.request_ts)
            .settings(Self::settings(operation_config))
            .build()
            .expect("all required fields set");

        let signable = SignableRequest::new(
            request.method(),
            request.uri(),
            request.headers(),
            SignableBody::Bytes(body),
        );
        let (instructions, signature) = sign(signable, &params)?.into_parts();
        instructions.apply_to_request(request);
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use super::{OperationSigningConfig, RequestConfig, SigV4Signer};
    use aws_types::region::{SigningRegion, SigningService};
    use aws_types::Credentials;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn signs_with_session_token() {
        let creds = Credentials::from_keys("AKID", "secret", Some("token".to_string()));
        let region = SigningRegion::from_static("us-west-2");
        let service = SigningService::from_static("proton");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH + Duration::from_secs(1_600_000_000),
            region: &region,
            service: &service,
        };
        let mut request = http::Request::builder()
            .method("POST")
            .uri("https://proton.us-west-2.amazonaws.com/")
            .body(())
            .unwrap();
        let signature = SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut request,
                b"{}",
            )
            .unwrap();
        assert_eq!(signature.len(), 64);
        let auth = request.headers()["authorization"].to_str().unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKID/20200913/us-west-2/proton/aws4_request"
        ));
        assert!(auth.ends_with(&signature));
        assert_eq!(request.headers()["x-amz-security-token"], "token");
        assert_eq!(request.headers()["x-amz-date"], "20200913T122640Z");
        assert!(request.headers().get("x-amz-content-sha256").is_none());
    }
}
