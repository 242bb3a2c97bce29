/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use smithy_types::instant::{Format, Instant};

const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'`');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

pub fn fmt_timestamp(t: &Instant, format: Format) -> String {
    crate::query::fmt_string(t.fmt(format))
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;
    use percent_encoding::percent_decode_str;
    use proptest::prelude::*;

    #[test]
    fn greedy_params_are_escaped_properly() {
        assert_eq!(fmt_string("a/b/c", true), "a/b/c");
        assert_eq!(fmt_string("a/b/c", false), "a%2Fb%2Fc");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(fmt_string("my channel", false), "my%20channel");
        assert_eq!(fmt_string("a&b=c", false), "a%26b%3Dc");
        assert_eq!(fmt_string("unreserved-._~", false), "unreserved-._~");
    }

    proptest! {
        #[test]
        fn labels_decode_to_their_input(label in ".*", greedy in any::<bool>()) {
            let encoded = fmt_string(&label, greedy);
            prop_assert_eq!(percent_decode_str(&encoded).decode_utf8().unwrap(), label.as_str());
        }

        #[test]
        fn labels_stay_in_one_segment(label in ".*") {
            let encoded = fmt_string(&label, false);
            prop_assert!(encoded
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)));
        }
    }
}
