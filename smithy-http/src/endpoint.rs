/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, PathAndQuery, Uri};
use std::str::FromStr;
use thiserror::Error;

/// API Endpoint
///
/// This implements an API endpoint as specified in the
/// [Smithy Endpoint Specification](https://awslabs.github.io/smithy/1.0/spec/core/endpoint-traits.html)
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, endpointPrefix does ignored when setting the endpoint on a request
    immutable: bool,
}

#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint is missing a scheme: {0}")]
    MissingScheme(String),
    #[error("endpoint is missing an authority: {0}")]
    MissingAuthority(String),
    #[error("could not build endpoint URI: {0}")]
    InvalidUri(#[from] http::Error),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// Certain protocols will attempt to prefix additional information onto an endpoint. If you
    /// wish to ignore these prefixes (for example, when communicating with localhost), set `immutable` to `true`.
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    /// Sets the endpoint on `uri`, potentially applying the specified `prefix` in the process.
    ///
    /// The scheme and authority of the request URI are replaced. The path of the endpoint is
    /// prepended to the path of the request.
    pub fn set_endpoint(&self, uri: &mut http::Uri, prefix: Option<&str>) -> Result<(), InvalidEndpoint> {
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .ok_or_else(|| InvalidEndpoint::MissingScheme(self.uri.to_string()))?;
        let authority = self
            .uri
            .authority()
            .ok_or_else(|| InvalidEndpoint::MissingAuthority(self.uri.to_string()))?;
        let authority = match prefix {
            Some(prefix) if !self.immutable => {
                Authority::from_str(&format!("{}{}", prefix, authority.as_str()))
                    .map_err(http::Error::from)?
            }
            _ => authority.clone(),
        };
        let base_path = self.uri.path().trim_end_matches('/');
        let request_path = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let path_and_query = PathAndQuery::from_str(&format!("{}{}", base_path, request_path))
            .map_err(http::Error::from)?;
        let new_uri = Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query(path_and_query)
            .build()?;
        *uri = new_uri;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::Endpoint;
    use http::Uri;

    #[test]
    fn prefix_endpoint() {
        let ep = Endpoint::mutable(Uri::from_static("https://us-east-1.dynamo.amazonaws.com"));
        let mut uri = Uri::from_static("/list_tables?k=v");
        ep.set_endpoint(&mut uri, Some("subregion.")).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("https://subregion.us-east-1.dynamo.amazonaws.com/list_tables?k=v")
        );
    }

    #[test]
    fn immutable_endpoint_ignores_prefix() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri, Some("subregion.")).unwrap();
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn endpoint_with_path() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000/base/"));
        let mut uri = Uri::from_static("/playbackConfiguration/demo");
        ep.set_endpoint(&mut uri, None).unwrap();
        assert_eq!(
            uri,
            Uri::from_static("http://localhost:8000/base/playbackConfiguration/demo")
        );
    }

    #[test]
    fn endpoint_without_scheme_fails() {
        let ep = Endpoint::immutable(Uri::from_static("localhost:8000"));
        let mut uri = Uri::from_static("/");
        assert!(ep.set_endpoint(&mut uri, None).is_err());
    }
}
