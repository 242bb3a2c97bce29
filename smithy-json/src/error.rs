/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic error extraction for awsJson and restJson responses.

use bytes::Bytes;
use http::header::HeaderMap;
use http::Response;
use serde::Deserialize;
use smithy_types::Error as GenericError;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(rename = "__type")]
    type_: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message", alias = "errorMessage")]
    message: Option<String>,
}

/// Strip the namespace prefix and the trailing URL from an error code.
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Extract the code, message and request id of an error response.
///
/// The `x-amzn-errortype` header takes precedence over the `__type` and `code` body members.
pub fn parse_generic_error(response: &Response<Bytes>) -> Result<GenericError, serde_json::Error> {
    let body: ErrorBody = crate::from_body(response.body())?;
    let code = header(response.headers(), ERROR_TYPE_HEADER)
        .map(str::to_string)
        .or(body.type_)
        .or(body.code);
    let mut err = GenericError::builder();
    if let Some(code) = code {
        err.code(sanitize_error_code(&code));
    }
    if let Some(message) = body.message {
        err.message(message);
    }
    if let Some(request_id) = header(response.headers(), REQUEST_ID_HEADER) {
        err.request_id(request_id);
    }
    Ok(err.build())
}

#[cfg(test)]
mod test {
    use super::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use smithy_types::Error;

    #[test]
    fn error_code_sanitization() {
        assert_eq!(sanitize_error_code("FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"), "FooError");
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
    }

    #[test]
    fn aws_json_error() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{"__type": "com.amazonaws.codebuild#ResourceNotFoundException", "message": "project missing"}"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).unwrap(),
            Error::builder()
                .code("ResourceNotFoundException")
                .message("project missing")
                .request_id("1234")
                .build()
        );
    }

    #[test]
    fn header_wins_over_body() {
        let response = http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "NotFoundException:http://internal.amazon.com/")
            .body(Bytes::from_static(br#"{"Code": "Other", "Message": "no such channel"}"#))
            .unwrap();
        let err = parse_generic_error(&response).unwrap();
        assert_eq!(err.code(), Some("NotFoundException"));
        assert_eq!(err.message(), Some("no such channel"));
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn empty_error_body() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        assert_eq!(parse_generic_error(&response).unwrap(), Error::builder().build());
    }

    #[test]
    fn invalid_error_body() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>"))
            .unwrap();
        assert!(parse_generic_error(&response).is_err());
    }
}
