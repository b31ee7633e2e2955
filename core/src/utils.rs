// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret before it reaches a log line or a `Debug` output.
///
/// - Empty input is shown as `EMPTY`.
/// - Input shorter than 12 characters is fully masked.
/// - Longer input keeps its first and last three characters, so different
///   api keys stay distinguishable without being leaked.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let length = self.0.chars().count();
        if length == 0 {
            f.write_str("EMPTY")
        } else if length < 12 {
            f.write_str("***")
        } else {
            let head: String = self.0.chars().take(3).collect();
            let tail: String = self.0.chars().skip(length - 3).collect();
            write!(f, "{head}***{tail}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = vec![
            ("Short", "***"),
            ("sk_live_abcdefghijk", "sk_***ijk"),
            ("", "EMPTY"),
            ("sk_test_01", "***"),
            ("ключ-секретный-1", "клю***й-1"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact(input)),
                expected,
                "Failed on input: {}",
                input
            );
        }
    }

    #[test]
    fn test_redact_option() {
        assert_eq!(format!("{:?}", Redact::from(&None)), "EMPTY");
        assert_eq!(
            format!("{:?}", Redact::from(&Some("sk_live_abcdefghijk".to_string()))),
            "sk_***ijk"
        );
    }
}
