/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values as Smithy
//! [httpLabel](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httplabel-trait)

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in URI components: `A-Z a-z 0-9 - . _ ~`
pub(crate) const BASE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Percent-encode a label. Unless `greedy` is set, `/` is escaped as well so the label stays a
/// single path segment.
pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;
    use proptest::prelude::*;

    #[test]
    fn arn_labels_are_one_segment() {
        assert_eq!(
            fmt_string(
                "arn:aws:imagebuilder:us-west-2:123456789012:image/my-image/1.0.0/1",
                false
            ),
            "arn%3Aaws%3Aimagebuilder%3Aus-west-2%3A123456789012%3Aimage%2Fmy-image%2F1.0.0%2F1"
        );
    }

    #[test]
    fn greedy_labels_keep_slashes() {
        assert_eq!(fmt_string("a/b c", true), "a/b%20c");
        assert_eq!(fmt_string("a/b c", false), "a%2Fb%20c");
    }

    proptest! {
        #[test]
        fn encoded_labels_only_contain_unreserved_characters(s in ".*") {
            let encoded = fmt_string(&s, false);
            prop_assert!(encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-._~%".contains(c)));
        }
    }
}
