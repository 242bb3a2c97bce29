/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_types::app_name::AppName;
use aws_types::build_metadata::{OsFamily, BUILD_METADATA};
use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::fmt;
use std::fmt::{Display, Formatter, Write};
use thiserror::Error;

/// AWS User Agent
///
/// This struct should be inserted into the [`PropertyBag`](smithy_http::property_bag::PropertyBag)
/// during operation construction. [`UserAgentStage`] reads `AwsUserAgent` from the property bag
/// and sets the `User-Agent` and `x-amz-user-agent` headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_metadata: SdkMetadata,
    api_metadata: ApiMetadata,
    os_metadata: OsMetadata,
    language_metadata: LanguageMetadata,
    exec_env_metadata: Option<ExecEnvMetadata>,
    app_name: Option<AppName>,
}

impl AwsUserAgent {
    /// Load a User Agent configuration from the environment
    ///
    /// The build metadata of `aws-types` provides the SDK, OS and language details.
    /// `AWS_EXECUTION_ENV` is read from `env` when set.
    pub fn new_from_environment(env: Env, api_metadata: ApiMetadata) -> Self {
        let build_metadata = &BUILD_METADATA;
        let exec_env_metadata = env
            .get_non_empty("AWS_EXECUTION_ENV")
            .map(|name| ExecEnvMetadata { name });
        AwsUserAgent {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: build_metadata.core_pkg_version,
            },
            api_metadata,
            os_metadata: OsMetadata {
                os_family: build_metadata.os_family,
                version: None,
            },
            language_metadata: LanguageMetadata {
                lang: "rust",
                version: build_metadata.rust_version,
            },
            exec_env_metadata,
            app_name: None,
        }
    }

    /// A user agent with fixed values
    pub fn for_tests() -> Self {
        AwsUserAgent {
            sdk_metadata: SdkMetadata {
                name: "rust",
                version: "0.123.test",
            },
            api_metadata: ApiMetadata {
                service_id: "test-service",
                version: "0.123",
            },
            os_metadata: OsMetadata {
                os_family: OsFamily::Windows,
                version: Some("XPSP3".to_string()),
            },
            language_metadata: LanguageMetadata {
                lang: "rust",
                version: "1.50.0",
            },
            exec_env_metadata: None,
            app_name: None,
        }
    }

    /// Append `app/{name}` to the `x-amz-user-agent` header
    pub fn with_app_name(mut self, app_name: Option<AppName>) -> Self {
        self.app_name = app_name;
        self
    }

    pub fn aws_ua_header(&self) -> String {
        let mut ua_value = String::new();
        // Writing to a String cannot fail.
        let _ = write!(ua_value, "{} ", &self.sdk_metadata);
        let _ = write!(ua_value, "{} ", &self.api_metadata);
        let _ = write!(ua_value, "{} ", &self.os_metadata);
        let _ = write!(ua_value, "{} ", &self.language_metadata);
        if let Some(env_meta) = &self.exec_env_metadata {
            let _ = write!(ua_value, "{} ", env_meta);
        }
        if let Some(app_name) = &self.app_name {
            let _ = write!(ua_value, "app/{}", app_name);
        }
        if ua_value.ends_with(' ') {
            ua_value.truncate(ua_value.len() - 1);
        }
        ua_value
    }

    pub fn ua_header(&self) -> String {
        format!(
            "{} {} {}",
            &self.sdk_metadata, &self.os_metadata, &self.language_metadata
        )
    }
}

#[derive(Clone, Copy, Debug)]
struct SdkMetadata {
    name: &'static str,
    version: &'static str,
}

impl Display for SdkMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "aws-sdk-{}/{}", self.name, self.version)
    }
}

/// The service id and crate version of a service client
#[derive(Clone, Copy, Debug)]
pub struct ApiMetadata {
    service_id: &'static str,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id,
            version,
        }
    }
}

impl Display for ApiMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

#[derive(Clone, Debug)]
struct OsMetadata {
    os_family: OsFamily,
    version: Option<String>,
}

impl Display for OsMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "os/{}", self.os_family.as_str())?;
        if let Some(version) = &self.version {
            write!(f, "/{}", version)?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
struct LanguageMetadata {
    lang: &'static str,
    version: &'static str,
}

impl Display for LanguageMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "lang/{}/{}", self.lang, self.version)
    }
}

#[derive(Clone, Debug)]
struct ExecEnvMetadata {
    name: String,
}

impl Display for ExecEnvMetadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "exec-env/{}", &self.name)
    }
}

/// Middleware stage that sets the user agent headers from the [`AwsUserAgent`] in the property bag
#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("user agent missing from the property bag")]
    UserAgentMissing,
    #[error("provided user agent header was invalid: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

const X_AMZ_USER_AGENT: HeaderName = HeaderName::from_static("x-amz-user-agent");

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            req.headers_mut()
                .append(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            req.headers_mut()
                .append(X_AMZ_USER_AGENT, HeaderValue::try_from(ua.aws_ua_header())?);
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{ApiMetadata, AwsUserAgent, UserAgentStage, UserAgentStageError};
    use aws_types::app_name::AppName;
    use aws_types::build_metadata::OsFamily;
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use pretty_assertions::assert_eq;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    #[test]
    fn generate_a_valid_ua() {
        let api_metadata = ApiMetadata::new("codebuild", "0.1.0");
        let ua = AwsUserAgent::new_from_environment(Env::from_slice(&[]), api_metadata);
        assert!(ua.aws_ua_header().starts_with("aws-sdk-rust/0."));
        assert!(ua.aws_ua_header().contains("api/codebuild/0.1.0"));
        assert!(ua.ua_header().starts_with("aws-sdk-rust/0."));
        assert!(!ua.ua_header().contains("api/"));
    }

    #[test]
    fn fixed_ua_with_exec_env_and_app_name() {
        assert_eq!(
            AwsUserAgent::for_tests().aws_ua_header(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
        let ua = AwsUserAgent::new_from_environment(
            Env::from_slice(&[("AWS_EXECUTION_ENV", "lambda")]),
            ApiMetadata::new("proton", "0.1.0"),
        )
        .with_app_name(Some(AppName::new("my-app").unwrap()));
        let header = ua.aws_ua_header();
        assert!(header.contains(" exec-env/lambda app/my-app"), "{}", header);
        assert!(header.ends_with("app/my-app"));
        assert_eq!(OsFamily::Windows.as_str(), "windows");
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        let err = stage
            .apply(req)
            .expect_err("adding UA should fail without a UA set");
        assert!(matches!(err, UserAgentStageError::UserAgentMissing));

        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.properties_mut().insert(AwsUserAgent::for_tests());
        let req = stage.apply(req).expect("setting user agent should succeed");
        let (req, _) = req.into_parts();
        assert_eq!(
            req.headers()["x-amz-user-agent"],
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
        assert_eq!(
            req.headers()[USER_AGENT],
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
        );
    }
}
