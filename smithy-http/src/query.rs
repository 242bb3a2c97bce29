/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.
//!
//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::label::fmt_string as fmt_label;
use smithy_types::instant::{Format, Instant};

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    fmt_label(t, false)
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    fmt_string(t.fmt(format))
}

/// Simple abstraction to enable appending params to a string as query params
///
/// ```rust
/// use smithy_http::query::Writer;
/// let mut s = String::from("www.example.com");
/// let mut q = Writer::new(&mut s);
/// q.push_kv("key", "value");
/// q.push_v("another_value");
/// assert_eq!(s, "www.example.com?key=value&another_value");
/// ```
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Writer { out, prefix: '?' }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(k);
        self.out.push('=');
        self.out.push_str(v);
        self.prefix = '&';
    }

    pub fn push_v(&mut self, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(v);
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, fmt_timestamp, Writer};
    use smithy_types::instant::{Format, Instant};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=;,+").as_str(), "%26%3D%3B%2C%2B");
    }

    #[test]
    fn timestamps_are_encoded() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(
            fmt_timestamp(&instant, Format::DateTime),
            "2019-12-16T23%3A48%3A18Z"
        );
    }

    #[test]
    fn writer_starts_with_question_mark() {
        let mut uri = String::from("/playbackConfigurations");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("MaxResults", "10");
        writer.push_kv("NextToken", &fmt_string("a b"));
        assert_eq!(uri, "/playbackConfigurations?MaxResults=10&NextToken=a%20b");
    }
}
