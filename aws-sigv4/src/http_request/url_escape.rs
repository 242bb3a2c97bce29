/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but the RFC 3986 unreserved characters
const BASE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(super) fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, BASE_SET).to_string()
}

/// Decode a query component, treating `+` as a space
pub(super) fn query_decode(value: &str) -> String {
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod test {
    use super::{percent_encode, query_decode};

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(percent_encode("a b/c=d~e"), "a%20b%2Fc%3Dd~e");
        assert_eq!(percent_encode("ümlaut"), "%C3%BCmlaut");
    }

    #[test]
    fn decodes_query_values() {
        assert_eq!(query_decode("a%20b+c"), "a b c");
        assert_eq!(query_decode("plain"), "plain");
    }
}
