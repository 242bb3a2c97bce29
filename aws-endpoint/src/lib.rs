/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Endpoint resolution for AWS services.
//!
//! An endpoint resolver maps a [`Region`] to the URI of a service and the credential scope used
//! to sign requests sent to it.

#![warn(missing_debug_implementations, rust_2018_idioms)]

use aws_types::region::{Region, SigningRegion, SigningService};
use http::Uri;
use smithy_http::endpoint::{Endpoint, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt::Debug;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS service
///
/// Besides the URI, an AWS endpoint may override the region and service used for signing.
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    pub fn set_endpoint(&self, uri: &mut Uri) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri, None)
    }
}

/// Signing region and service overrides of an endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::{SigningRegion, SigningService};

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Resolve the endpoint of a service in a given region
///
/// Any [`Endpoint`] can be used as a resolver: it yields itself for every region.
///
/// ```rust
/// use aws_endpoint::ResolveAwsEndpoint;
/// use aws_types::region::Region;
/// use http::Uri;
/// use smithy_http::endpoint::Endpoint;
///
/// let localhost = Endpoint::immutable(Uri::from_static("http://localhost:4566"));
/// let resolved = localhost.resolve_endpoint(&Region::new("us-east-1")).unwrap();
/// assert_eq!(resolved.endpoint().uri(), &Uri::from_static("http://localhost:4566"));
/// ```
pub trait ResolveAwsEndpoint: Send + Sync + Debug {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

impl ResolveAwsEndpoint for Endpoint {
    fn resolve_endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint {
            endpoint: self.clone(),
            credential_scope: Default::default(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// Templated endpoint of a service
///
/// `{region}` in the template is replaced with the region being resolved.
#[derive(Clone, Debug)]
pub struct Definition {
    uri_template: &'static str,
    protocol: Protocol,
    credential_scope: CredentialScope,
}

impl Definition {
    /// An HTTPS endpoint without credential scope overrides
    pub fn new(uri_template: &'static str) -> Self {
        Definition {
            uri_template,
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
        }
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }

    pub fn with_credential_scope(mut self, credential_scope: CredentialScope) -> Self {
        self.credential_scope = credential_scope;
        self
    }
}

impl ResolveAwsEndpoint for Definition {
    fn resolve_endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let uri = self.uri_template.replace("{region}", region.as_ref());
        let uri = format!("{}://{}", self.protocol.as_str(), uri);
        let endpoint = Endpoint::mutable(Uri::from_str(&uri)?);
        Ok(AwsEndpoint {
            endpoint,
            credential_scope: self.credential_scope.clone(),
        })
    }
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&AwsEndpointResolver> {
    properties.get()
}

pub fn set_endpoint_resolver(properties: &mut PropertyBag, provider: AwsEndpointResolver) {
    properties.insert(provider);
}

/// Middleware stage to add an endpoint to a request
///
/// `AwsEndpointStage` will:
/// 1. Load an endpoint resolver from the property bag.
/// 2. Resolve an endpoint for the [`Region`] in the property bag.
/// 3. Apply the endpoint to the URI of the request.
/// 4. Set the [`SigningRegion`] and [`SigningService`] in the property bag for the signing stage.
#[derive(Clone, Debug)]
pub struct AwsEndpointStage;

#[derive(Debug, Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver in the property bag")]
    NoEndpointResolver,
    #[error("no region was configured")]
    NoRegion,
    #[error("failed to resolve the endpoint: {0}")]
    EndpointResolutionError(#[source] BoxError),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let provider =
                get_endpoint_resolver(props).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = props
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .resolve_endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            endpoint
                .set_endpoint(http_req.uri_mut())
                .map_err(|err| AwsEndpointStageError::EndpointResolutionError(err.into()))?;
            props.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                props.insert::<SigningService>(signing_service.clone());
            }
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{
        set_endpoint_resolver, AwsEndpointStage, AwsEndpointStageError, CredentialScope,
        Definition, Protocol, ResolveAwsEndpoint,
    };
    use aws_types::region::{Region, SigningRegion, SigningService};
    use http::Uri;
    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use tracing_test::traced_test;

    fn request_with(
        region: Option<Region>,
        resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    ) -> operation::Request {
        let mut req = operation::Request::new(http::Request::new(SdkBody::from("")));
        {
            let mut props = req.properties_mut();
            if let Some(region) = region {
                props.insert(region);
            }
            if let Some(resolver) = resolver {
                set_endpoint_resolver(&mut props, resolver);
            }
            props.insert(SigningService::from_static("codebuild"));
        }
        req
    }

    #[test]
    #[traced_test]
    fn default_endpoint_updates_request() {
        let region = Region::new("eu-west-1");
        let req = request_with(
            Some(region.clone()),
            Some(Arc::new(Definition::new("codebuild.{region}.amazonaws.com"))),
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.properties().get(), Some(&SigningRegion::from(region)));
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("codebuild"))
        );
        let (req, _props) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://codebuild.eu-west-1.amazonaws.com/")
        );
        assert!(logs_contain("resolved endpoint"));
    }

    #[test]
    fn sets_credential_scope_overrides() {
        let definition = Definition::new("www.service.com")
            .with_protocol(Protocol::Http)
            .with_credential_scope(
                CredentialScope::builder()
                    .service(SigningService::from_static("rds-override"))
                    .region(SigningRegion::from_static("us-east-override"))
                    .build(),
            );
        let req = request_with(Some(Region::new("us-east-1")), Some(Arc::new(definition)));
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-override"))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("rds-override"))
        );
        assert_eq!(req.http().uri(), &Uri::from_static("http://www.service.com/"));
    }

    #[test]
    fn immutable_endpoint_override() {
        let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let req = request_with(Some(Region::new("us-east-1")), Some(Arc::new(endpoint)));
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.http().uri(), &Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn missing_region() {
        let req = request_with(None, Some(Arc::new(Definition::new("x.{region}.com"))));
        let err = AwsEndpointStage.apply(req).expect_err("no region");
        assert!(matches!(err, AwsEndpointStageError::NoRegion));
    }

    #[test]
    fn missing_resolver() {
        let req = request_with(Some(Region::new("us-east-1")), None);
        let err = AwsEndpointStage.apply(req).expect_err("no resolver");
        assert!(matches!(err, AwsEndpointStageError::NoEndpointResolver));
    }

    #[test]
    fn invalid_template_is_a_resolution_error() {
        let req = request_with(
            Some(Region::new("not a region")),
            Some(Arc::new(Definition::new("svc.{region}.amazonaws.com"))),
        );
        let err = AwsEndpointStage.apply(req).expect_err("spaces are not valid in a uri");
        assert!(matches!(
            err,
            AwsEndpointStageError::EndpointResolutionError(_)
        ));
    }
}
