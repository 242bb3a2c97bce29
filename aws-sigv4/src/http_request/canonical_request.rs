/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::url_escape::{percent_encode, query_decode};
use super::{PayloadChecksumKind, SignableRequest, SigningError, SigningSettings};
use crate::date_fmt::{format_date, format_date_time};
use crate::SigningParams;
use chrono::{DateTime, Utc};
use http::header::{HeaderName, HOST, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method, Uri};
use std::fmt;

pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";

pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";

#[derive(Debug, PartialEq)]
pub(super) struct CanonicalRequest<'a> {
    method: &'a Method,
    path: String,
    params: String,
    headers: HeaderMap,
    pub(super) signed_headers: SignedHeaders,
    payload_hash: String,
    added: HeaderMap,
}

impl<'a> CanonicalRequest<'a> {
    pub(super) fn from(
        req: &'a SignableRequest<'a>,
        params: &SigningParams<'_, SigningSettings>,
        date_time: &DateTime<Utc>,
    ) -> Result<CanonicalRequest<'a>, SigningError> {
        // Every service signed here is non-S3, so the path is encoded twice.
        let path = match req.uri().path() {
            "" => "/".to_string(),
            path => path.replace('%', "%25"),
        };
        let payload_hash = req.payload_hash();

        let mut headers = HeaderMap::new();
        for (name, value) in req.headers() {
            let trimmed = HeaderValue::from_str(&trim_all(value.to_str().unwrap_or_default()))?;
            headers.append(name.clone(), trimmed);
        }
        let mut added = HeaderMap::new();
        if !headers.contains_key(HOST) {
            let host = host_header(req.uri())?;
            headers.insert(HOST, host.clone());
            added.insert(HOST, host);
        }
        let date = HeaderValue::from_str(&format_date_time(date_time))?;
        headers.insert(X_AMZ_DATE, date.clone());
        added.insert(X_AMZ_DATE, date);

        if let Some(token) = params.security_token {
            let mut token = HeaderValue::from_str(token)?;
            token.set_sensitive(true);
            headers.insert(X_AMZ_SECURITY_TOKEN, token.clone());
            added.insert(X_AMZ_SECURITY_TOKEN, token);
        }
        if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            let hash = HeaderValue::from_str(&payload_hash)?;
            headers.insert(X_AMZ_CONTENT_SHA_256, hash.clone());
            added.insert(X_AMZ_CONTENT_SHA_256, hash);
        }

        let signed_headers = headers
            .keys()
            .filter(|name| {
                **name != USER_AGENT && !params.settings.excluded_headers.contains(*name)
            })
            .cloned()
            .collect();

        Ok(CanonicalRequest {
            method: req.method(),
            path,
            params: canonical_query(req.uri()),
            headers,
            signed_headers: SignedHeaders::new(signed_headers),
            payload_hash,
            added,
        })
    }

    /// Headers the signer introduced that the request must carry
    pub(super) fn added_headers(&self) -> HeaderMap {
        self.added.clone()
    }
}

fn host_header(uri: &Uri) -> Result<HeaderValue, SigningError> {
    let authority = uri.authority().ok_or(SigningError::MissingAuthority)?;
    Ok(HeaderValue::from_str(authority.as_str())?)
}

/// Collapse runs of whitespace and trim both ends
fn trim_all(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn canonical_query(uri: &Uri) -> String {
    let query = match uri.query() {
        Some(query) if !query.is_empty() => query,
        _ => return String::new(),
    };
    let mut pairs: Vec<(String, String)> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (
                percent_encode(&query_decode(key)),
                percent_encode(&query_decode(value)),
            )
        })
        .collect();
    pairs.sort();
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

impl<'a> fmt::Display for CanonicalRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params)?;
        for name in &self.signed_headers.inner {
            let values: Vec<&str> = self
                .headers
                .get_all(name)
                .iter()
                .map(|value| value.to_str().unwrap_or_default())
                .collect();
            writeln!(f, "{}:{}", name.as_str(), values.join(","))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

#[derive(Debug, PartialEq, Default)]
pub(super) struct SignedHeaders {
    inner: Vec<HeaderName>,
}

impl SignedHeaders {
    fn new(mut inner: Vec<HeaderName>) -> Self {
        inner.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        inner.dedup();
        SignedHeaders { inner }
    }
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.inner.iter().map(HeaderName::as_str).collect();
        write!(f, "{}", names.join(";"))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub(super) struct Scope<'a> {
    date: DateTime<Utc>,
    region: &'a str,
    service: &'a str,
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            format_date(&self.date),
            self.region,
            self.service
        )
    }
}

#[derive(Debug, PartialEq)]
pub(super) struct StringToSign<'a> {
    pub(super) scope: Scope<'a>,
    date: DateTime<Utc>,
    hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(super) fn new(
        date: DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        StringToSign {
            scope: Scope {
                date,
                region,
                service,
            },
            date,
            hashed_creq,
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256,
            format_date_time(&self.date),
            self.scope,
            self.hashed_creq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_query, CanonicalRequest, StringToSign};
    use crate::date_fmt::parse_date_time;
    use crate::http_request::{SignableRequest, SigningSettings};
    use crate::sign::sha256_hex_string;
    use crate::SigningParams;
    use pretty_assertions::assert_eq;

    #[test]
    fn vanilla_canonical_request() {
        let date = parse_date_time("20150830T123600Z").unwrap();
        let request = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let params = SigningParams::builder()
            .access_key("AKIDEXAMPLE")
            .secret_key("secret")
            .region("us-east-1")
            .service_name("service")
            .date_time(date.into())
            .settings(SigningSettings::default())
            .build()
            .unwrap();
        let signable = SignableRequest::from_http(&request, &[]);
        let creq = CanonicalRequest::from(&signable, &params, &date).unwrap();
        let expected = "GET\n/\n\nhost:example.amazonaws.com\nx-amz-date:20150830T123600Z\n\n\
                        host;x-amz-date\n\
                        e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(creq.to_string(), expected);

        let hashed = sha256_hex_string(creq.to_string().as_bytes());
        let sts = StringToSign::new(date, "us-east-1", "service", &hashed);
        assert_eq!(
            sts.to_string(),
            "AWS4-HMAC-SHA256\n20150830T123600Z\n20150830/us-east-1/service/aws4_request\n\
             bb579772317eb040ac9ed261061d46c1f17a8133879d6129b6e1c25292927e63"
        );
    }

    #[test]
    fn query_is_sorted_and_reencoded() {
        let uri: http::Uri = "https://example.com/?b=2&a=x%2By&c=hello world"
            .replace(' ', "%20")
            .parse()
            .unwrap();
        assert_eq!(canonical_query(&uri), "a=x%2By&b=2&c=hello%20world");
        let uri: http::Uri = "https://example.com/?flag".parse().unwrap();
        assert_eq!(canonical_query(&uri), "flag=");
    }
}
