/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

/// The region to send requests to.
///
/// The region MUST be specified on a request. It may be configured globally or on a
/// per-client basis unless otherwise noted. A full list of regions is found in the
/// "Regions and Endpoints" document.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(Cow<'static, str>);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`
#[derive(Debug, Default)]
pub struct EnvironmentProvider {
    env: Env,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn new_with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }

    pub fn region(&self) -> Option<Region> {
        self.env
            .get_non_empty("AWS_REGION")
            .or_else(|| self.env.get_non_empty("AWS_DEFAULT_REGION"))
            .map(Region::new)
    }
}

/// The region to use when signing requests
///
/// Generally, user code will not need to interact with `SigningRegion`. See [`Region`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningRegion(Cow<'static, str>);

impl AsRef<str> for SigningRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Region> for SigningRegion {
    fn from(inp: Region) -> Self {
        SigningRegion(inp.0)
    }
}

impl SigningRegion {
    pub fn from_static(region: &'static str) -> Self {
        SigningRegion(Cow::Borrowed(region))
    }
}

/// The name of the service used to sign this request
///
/// This is usually, but not always, the endpoint prefix of the service. Neptune, for example,
/// signs as `rds`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningService(Cow<'static, str>);

impl AsRef<str> for SigningService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SigningService {
    pub fn from_static(service: &'static str) -> Self {
        SigningService(Cow::Borrowed(service))
    }
}

impl From<String> for SigningService {
    fn from(service: String) -> Self {
        SigningService(Cow::Owned(service))
    }
}

#[cfg(test)]
mod test {
    use super::{EnvironmentProvider, Region, SigningRegion};
    use crate::os_shim_internal::Env;

    #[test]
    fn region_from_env() {
        let provider = EnvironmentProvider::new_with_env(Env::from_slice(&[
            ("AWS_DEFAULT_REGION", "us-west-2"),
            ("AWS_REGION", "eu-west-1"),
        ]));
        assert_eq!(provider.region(), Some(Region::new("eu-west-1")));

        let provider = EnvironmentProvider::new_with_env(Env::from_slice(&[
            ("AWS_DEFAULT_REGION", "us-west-2"),
            ("AWS_REGION", ""),
        ]));
        assert_eq!(provider.region(), Some(Region::from_static("us-west-2")));

        let provider = EnvironmentProvider::new_with_env(Env::from_slice(&[]));
        assert_eq!(provider.region(), None);
    }

    #[test]
    fn signing_region_from_region() {
        let signing_region = SigningRegion::from(Region::new("ap-south-1".to_string()));
        assert_eq!(signing_region.as_ref(), "ap-south-1");
    }
}
