/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Application name, appended to the user agent of every request.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// App name that can be configured with an AWS service client
///
/// Must be 1 to 50 characters drawn from ASCII letters, digits and ``!#$%&'*+-.^_`|~``.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppName(Cow<'static, str>);

impl AsRef<str> for AppName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AppName {
    pub fn new(app_name: impl Into<Cow<'static, str>>) -> Result<Self, InvalidAppName> {
        let app_name = app_name.into();
        let valid_char = |c: char| c.is_ascii_alphanumeric() || "!#$%&'*+-.^_`|~".contains(c);
        if app_name.is_empty() || app_name.len() > 50 || !app_name.chars().all(valid_char) {
            return Err(InvalidAppName);
        }
        Ok(AppName(app_name))
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct InvalidAppName;

impl Error for InvalidAppName {}

impl fmt::Display for InvalidAppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The app name can only have alphanumeric characters, or any of \
             '!' | '#' | '$' | '%' | '&' | '\\'' | '*' | '+' | '-' | \
             '.' | '^' | '_' | '`' | '|' | '~', and must be at most 50 characters long"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::AppName;

    #[test]
    fn validation() {
        assert!(AppName::new("asdf1234ASDF!#$%&'*+-.^_`|~").is_ok());
        assert!(AppName::new("").is_err());
        assert!(AppName::new("has space").is_err());
        assert!(AppName::new("a".repeat(51)).is_err());
        assert_eq!(AppName::new("build-tool").unwrap().as_ref(), "build-tool");
    }
}
