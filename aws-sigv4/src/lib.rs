/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Functions for calculating SigV4 signing keys and signatures, and for signing HTTP requests
//! with the `Authorization` header.

#![warn(missing_debug_implementations, rust_2018_idioms)]

use std::fmt;
use std::time::SystemTime;

mod date_fmt;
pub mod http_request;
pub mod sign;

/// Parameters to use when signing.
#[non_exhaustive]
pub struct SigningParams<'a, S> {
    /// Access Key ID to use.
    pub access_key: &'a str,
    /// Secret access key to use.
    pub secret_key: &'a str,
    /// (Optional) Security token to use.
    pub security_token: Option<&'a str>,

    /// Region to sign for.
    pub region: &'a str,
    /// AWS Service Name to sign for.
    pub service_name: &'a str,
    /// Timestamp to use in the signature (should be `SystemTime::now()` unless testing).
    pub date_time: SystemTime,

    /// Additional signing settings.
    pub settings: S,
}

impl<'a, S: fmt::Debug> fmt::Debug for SigningParams<'a, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningParams")
            .field("access_key", &self.access_key)
            .field("secret_key", &"** redacted **")
            .field("security_token", &self.security_token.map(|_| "** redacted **"))
            .field("region", &self.region)
            .field("service_name", &self.service_name)
            .field("date_time", &self.date_time)
            .field("settings", &self.settings)
            .finish()
    }
}

impl<'a, S: Default> SigningParams<'a, S> {
    /// Returns a builder that can create new `SigningParams`.
    pub fn builder() -> signing_params::Builder<'a, S> {
        signing_params::Builder::default()
    }
}

/// Builder and error for creating [`SigningParams`]
pub mod signing_params {
    use super::SigningParams;
    use std::time::SystemTime;
    use thiserror::Error;

    /// [`SigningParams`] builder error
    #[derive(Debug, Error)]
    #[error("{reason}")]
    pub struct BuildError {
        reason: &'static str,
    }

    impl BuildError {
        fn new(reason: &'static str) -> Self {
            Self { reason }
        }
    }

    /// Builder that can create new [`SigningParams`]
    #[derive(Debug, Default)]
    pub struct Builder<'a, S> {
        access_key: Option<&'a str>,
        secret_key: Option<&'a str>,
        security_token: Option<&'a str>,
        region: Option<&'a str>,
        service_name: Option<&'a str>,
        date_time: Option<SystemTime>,
        settings: Option<S>,
    }

    impl<'a, S> Builder<'a, S> {
        pub fn access_key(mut self, access_key: &'a str) -> Self {
            self.access_key = Some(access_key);
            self
        }

        pub fn secret_key(mut self, secret_key: &'a str) -> Self {
            self.secret_key = Some(secret_key);
            self
        }

        pub fn security_token(mut self, security_token: Option<&'a str>) -> Self {
            self.security_token = security_token;
            self
        }

        pub fn region(mut self, region: &'a str) -> Self {
            self.region = Some(region);
            self
        }

        pub fn service_name(mut self, service_name: &'a str) -> Self {
            self.service_name = Some(service_name);
            self
        }

        pub fn date_time(mut self, date_time: SystemTime) -> Self {
            self.date_time = Some(date_time);
            self
        }

        pub fn settings(mut self, settings: S) -> Self {
            self.settings = Some(settings);
            self
        }

        /// Builds an instance of [`SigningParams`]. Will yield a [`BuildError`] if
        /// a required argument was not given.
        pub fn build(self) -> Result<SigningParams<'a, S>, BuildError> {
            Ok(SigningParams {
                access_key: self
                    .access_key
                    .ok_or_else(|| BuildError::new("access key is required"))?,
                secret_key: self
                    .secret_key
                    .ok_or_else(|| BuildError::new("secret key is required"))?,
                security_token: self.security_token,
                region: self
                    .region
                    .ok_or_else(|| BuildError::new("region is required"))?,
                service_name: self
                    .service_name
                    .ok_or_else(|| BuildError::new("service name is required"))?,
                date_time: self
                    .date_time
                    .ok_or_else(|| BuildError::new("date time is required"))?,
                settings: self
                    .settings
                    .ok_or_else(|| BuildError::new("settings are required"))?,
            })
        }
    }
}

/// Container for the signed output and the signature.
#[derive(Debug)]
pub struct SigningOutput<T> {
    output: T,
    signature: String,
}

impl<T> SigningOutput<T> {
    pub fn new(output: T, signature: String) -> Self {
        Self { output, signature }
    }

    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn into_parts(self) -> (T, String) {
        (self.output, self.signature)
    }
}
