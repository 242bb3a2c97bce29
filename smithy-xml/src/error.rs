/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error and response envelopes of the awsQuery protocol.

use crate::decode::{parse, Element, XmlError};
use smithy_types::Error as GenericError;

/// Extract the code, message and request id of an awsQuery error response
///
/// ```xml
/// <ErrorResponse>
///   <Error>
///     <Type>Sender</Type>
///     <Code>DBClusterNotFoundFault</Code>
///     <Message>DBCluster missing not found.</Message>
///   </Error>
///   <RequestId>a1b2</RequestId>
/// </ErrorResponse>
/// ```
pub fn parse_generic_error(body: &[u8]) -> Result<GenericError, XmlError> {
    let doc = std::str::from_utf8(body).map_err(|e| XmlError::InvalidXml(e.to_string()))?;
    let root = parse(doc)?;
    let root = root.expect("ErrorResponse")?;
    let mut err = GenericError::builder();
    if let Some(error) = root.child("Error") {
        if let Some(code) = error.child_text("Code") {
            err.code(code.trim());
        }
        if let Some(message) = error.child_text("Message") {
            err.message(message.trim());
        }
        if let Some(kind) = error.child_text("Type") {
            err.custom("type", kind.trim());
        }
    }
    if let Some(request_id) = root.child_text("RequestId") {
        err.request_id(request_id.trim());
    }
    Ok(err.build())
}

/// A decoded `{Operation}Response` envelope
#[derive(Debug)]
pub struct QueryResponse {
    root: Element,
    result_name: String,
}

impl QueryResponse {
    /// The `{Operation}Result` element, if the operation returned any members
    pub fn result(&self) -> Option<&Element> {
        self.root.child(&self.result_name)
    }

    pub fn request_id(&self) -> Option<&str> {
        self.root
            .child("ResponseMetadata")
            .and_then(|meta| meta.child_text("RequestId"))
            .map(str::trim)
    }
}

/// Decode a successful awsQuery response for `operation`
///
/// The document must be rooted at `{operation}Response`.
pub fn parse_query_response(body: &[u8], operation: &str) -> Result<QueryResponse, XmlError> {
    let doc = std::str::from_utf8(body).map_err(|e| XmlError::InvalidXml(e.to_string()))?;
    let root = parse(doc)?;
    root.expect(&format!("{}Response", operation))?;
    Ok(QueryResponse {
        root,
        result_name: format!("{}Result", operation),
    })
}

#[cfg(test)]
mod test {
    use super::{parse_generic_error, parse_query_response};
    use crate::decode::XmlError;

    #[test]
    fn query_error() {
        let body = br#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>DBClusterNotFoundFault</Code>
    <Message>DBCluster missing not found.</Message>
  </Error>
  <RequestId>a1b2</RequestId>
</ErrorResponse>"#;
        let err = parse_generic_error(body).unwrap();
        assert_eq!(err.code(), Some("DBClusterNotFoundFault"));
        assert_eq!(err.message(), Some("DBCluster missing not found."));
        assert_eq!(err.request_id(), Some("a1b2"));
        assert_eq!(err.extra("type"), Some("Sender"));
    }

    #[test]
    fn not_an_error_response() {
        assert!(matches!(
            parse_generic_error(b"<Other/>"),
            Err(XmlError::UnexpectedElement { .. })
        ));
        assert!(parse_generic_error(b"").is_err());
    }

    #[test]
    fn query_response() {
        let body = br#"<DeleteDBClusterResponse>
  <DeleteDBClusterResult><DBCluster><Status>deleting</Status></DBCluster></DeleteDBClusterResult>
  <ResponseMetadata><RequestId>req-1</RequestId></ResponseMetadata>
</DeleteDBClusterResponse>"#;
        let response = parse_query_response(body, "DeleteDBCluster").unwrap();
        assert_eq!(response.request_id(), Some("req-1"));
        let cluster = response.result().and_then(|r| r.child("DBCluster")).unwrap();
        assert_eq!(cluster.child_text("Status"), Some("deleting"));

        assert!(parse_query_response(body, "CreateDBCluster").is_err());
    }

    #[test]
    fn response_without_result() {
        let response =
            parse_query_response(b"<RebootResponse><ResponseMetadata/></RebootResponse>", "Reboot")
                .unwrap();
        assert!(response.result().is_none());
        assert_eq!(response.request_id(), None);
    }
}
