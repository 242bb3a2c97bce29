/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::decode::XmlError;
use std::borrow::Cow;

/// Replace the predefined XML entities and character references in `s`.
///
/// Returns the input unchanged when it contains no `&`.
pub(crate) fn unescape(s: &str) -> Result<Cow<'_, str>, XmlError> {
    if !s.contains('&') {
        return Ok(Cow::Borrowed(s));
    }
    let mut res = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find('&') {
        res.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(';').ok_or_else(|| XmlError::Unescape {
            reason: "unterminated entity".to_string(),
        })?;
        let entity = &rest[1..end];
        match entity {
            "lt" => res.push('<'),
            "gt" => res.push('>'),
            "amp" => res.push('&'),
            "quot" => res.push('"'),
            "apos" => res.push('\''),
            _ => res.push(char_reference(entity)?),
        }
        rest = &rest[end + 1..];
    }
    res.push_str(rest);
    Ok(Cow::Owned(res))
}

fn char_reference(entity: &str) -> Result<char, XmlError> {
    let invalid = || XmlError::Unescape {
        reason: format!("invalid entity `&{};`", entity),
    };
    let code = if let Some(hex) = entity.strip_prefix("#x") {
        u32::from_str_radix(hex, 16).map_err(|_| invalid())?
    } else if let Some(dec) = entity.strip_prefix('#') {
        dec.parse::<u32>().map_err(|_| invalid())?
    } else {
        return Err(invalid());
    };
    std::char::from_u32(code).ok_or_else(invalid)
}

#[cfg(test)]
mod test {
    use super::unescape;
    use std::borrow::Cow;

    #[test]
    fn no_entities() {
        assert!(matches!(unescape("neptune-cluster-1").unwrap(), Cow::Borrowed(_)));
    }

    #[test]
    fn predefined_entities() {
        assert_eq!(
            unescape("&lt;a href=&quot;x&quot;&gt; &amp; it&apos;s").unwrap(),
            "<a href=\"x\"> & it's"
        );
    }

    #[test]
    fn character_references() {
        assert_eq!(unescape("line&#10;break &#x41;").unwrap(), "line\nbreak A");
    }

    #[test]
    fn invalid_entities() {
        assert!(unescape("&foo;").is_err());
        assert!(unescape("&amp").is_err());
        assert!(unescape("&#xZZ;").is_err());
    }
}
