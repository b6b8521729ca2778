/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Utilities for writing Smithy values into a query string.
//!
//! Formatting values into the query string as specified in
//! [httpQuery](https://awslabs.github.io/smithy/1.0/spec/core/http-traits.html#httpquery-trait)

use crate::label::BASE_SET;
use percent_encoding::utf8_percent_encode;

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Appends `key=value` pairs to a URI, starting the query string on the first write.
///
/// Keys are written verbatim. Values are percent-encoded.
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        let prefix = if out.contains('?') { '&' } else { '?' };
        Writer { out, prefix }
    }

    pub fn push_kv(&mut self, key: &str, value: &str) {
        self.out.push(self.prefix);
        self.out.push_str(key);
        self.out.push('=');
        self.out.push_str(&fmt_string(value));
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::{fmt_string, Writer};

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
    }

    #[test]
    fn writer_starts_and_continues_a_query() {
        let mut uri = String::from("/tags/arn");
        let mut writer = Writer::new(&mut uri);
        writer.push_kv("tagKeys", "team");
        writer.push_kv("tagKeys", "cost center");
        assert_eq!(uri, "/tags/arn?tagKeys=team&tagKeys=cost%20center");

        let mut uri = String::from("/GetImage?existing=1");
        Writer::new(&mut uri).push_kv("imageBuildVersionArn", "arn:aws:x");
        assert_eq!(uri, "/GetImage?existing=1&imageBuildVersionArn=arn%3Aaws%3Ax");
    }
}
