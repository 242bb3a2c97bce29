/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{OperationSigningConfig, RequestConfig, SigV4Signer, SigningError};
use aws_types::region::{SigningRegion, SigningService};
use aws_types::Credentials;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// The following fields MUST be present in the property bag:
/// - [`Credentials`]: inserted by the credentials stage
/// - [`SigningRegion`]: the region used when signing the request, eg. `us-east-1`
/// - [`SigningService`]: the name of the service, eg. `codebuild`
/// - [`OperationSigningConfig`]: operation specific signing configuration
///
/// A [`SystemTime`] MAY be present to override the signing timestamp. Otherwise
/// [`SystemTime::now`] is used.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("no credentials in the property bag")]
    MissingCredentials,
    #[error("no signing region in the property bag")]
    MissingSigningRegion,
    #[error("no signing service in the property bag")]
    MissingSigningService,
    #[error("no signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("the request body is a stream and cannot be signed")]
    InvalidBodyType,
    #[error("signing failed: {0}")]
    SigningFailure(#[from] SigningError),
}

fn signing_config(
    config: &PropertyBag,
) -> Result<(&OperationSigningConfig, RequestConfig<'_>, &Credentials), SigningStageError> {
    let operation_config = config
        .get::<OperationSigningConfig>()
        .ok_or(SigningStageError::MissingSigningConfig)?;
    let credentials = config
        .get::<Credentials>()
        .ok_or(SigningStageError::MissingCredentials)?;
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    let request_config = RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service,
    };
    Ok((operation_config, request_config, credentials))
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|mut req, config| {
            let (operation_config, request_config, credentials) = signing_config(config)?;
            let body = req
                .body()
                .bytes()
                .ok_or(SigningStageError::InvalidBodyType)?
                .to_vec();
            self.signer.sign(
                operation_config,
                &request_config,
                credentials,
                &mut req,
                &body,
            )?;
            tracing::trace!(service = request_config.service.as_ref(), "signed request");
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer};
    use aws_endpoint::{set_endpoint_resolver, AwsEndpointStage, Definition};
    use aws_types::region::{Region, SigningRegion, SigningService};
    use aws_types::Credentials;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    fn signable_request() -> operation::Request {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("")));
        {
            let mut props = req.properties_mut();
            props.insert(OperationSigningConfig::default_config());
            props.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
            props.insert(Credentials::from_keys("AKIAfoo", "bar", None));
        }
        req
    }

    #[test]
    fn signs_after_endpoint_resolution() {
        let mut req = signable_request();
        {
            let mut props = req.properties_mut();
            props.insert(Region::new("us-east-1"));
            props.insert(SigningService::from_static("opsworks"));
            set_endpoint_resolver(
                &mut props,
                Arc::new(Definition::new("opsworks.{region}.amazonaws.com")),
            );
        }
        let req = AwsEndpointStage.apply(req).expect("endpoint resolves");
        let req = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect("signing succeeds");
        let (req, _) = req.into_parts();
        let auth = req.headers()["authorization"].to_str().unwrap();
        assert!(auth.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKIAfoo/20210120/us-east-1/opsworks/aws4_request, \
             SignedHeaders=host;x-amz-date, Signature="
        ));
        assert_eq!(req.headers()["host"], "opsworks.us-east-1.amazonaws.com");
    }

    #[test]
    fn missing_region_is_reported() {
        let mut req = signable_request();
        req.properties_mut()
            .insert(SigningService::from_static("opsworks"));
        let err = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect_err("no signing region");
        assert!(matches!(err, SigningStageError::MissingSigningRegion));
    }

    #[test]
    fn missing_credentials_is_reported() {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("")));
        {
            let mut props = req.properties_mut();
            props.insert(OperationSigningConfig::default_config());
            props.insert(SigningRegion::from_static("us-east-1"));
            props.insert(SigningService::from_static("rds"));
        }
        let err = SigV4SigningStage::new(SigV4Signer::new())
            .apply(req)
            .expect_err("no credentials");
        assert!(matches!(err, SigningStageError::MissingCredentials));
    }
}
