/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Helpers shared by the JSON based protocols.

pub mod error;
pub mod instant;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Deserialize a response body. An empty body is treated as an empty object.
pub fn from_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"{}")
    } else {
        serde_json::from_slice(body)
    }
}

/// Serialize an input body. Unset members are omitted so an input with no members is `{}`.
pub fn to_body<T: Serialize>(input: &T) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(input)
}

#[cfg(test)]
mod test {
    use super::{from_body, to_body};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct ListProjectsOutput {
        #[serde(skip_serializing_if = "Option::is_none")]
        next_token: Option<String>,
        #[serde(default)]
        projects: Vec<String>,
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        assert_eq!(
            from_body::<ListProjectsOutput>(b"").unwrap(),
            ListProjectsOutput::default()
        );
        assert_eq!(
            from_body::<ListProjectsOutput>(b"  \n").unwrap(),
            ListProjectsOutput::default()
        );
    }

    #[test]
    fn parse_body() {
        let out: ListProjectsOutput =
            from_body(br#"{"projects": ["a", "b"], "nextToken": "tok", "unknown": 5}"#).unwrap();
        assert_eq!(out.projects, vec!["a", "b"]);
        assert_eq!(out.next_token.as_deref(), Some("tok"));
    }

    #[test]
    fn unset_members_are_omitted() {
        let body = to_body(&ListProjectsOutput::default()).unwrap();
        assert_eq!(body, br#"{"projects":[]}"#);
    }
}
