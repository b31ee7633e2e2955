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

//! Time related utils.

use chrono::NaiveDateTime;
use chrono::Utc;

use crate::Error;

/// DateTime in UTC, the only timezone used while signing.
pub type DateTime = chrono::DateTime<Utc>;

/// Naive ISO 8601 with microseconds and no offset: "2024-03-13T07:20:04.123456"
pub const NAIVE_ISO8601: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Create a datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into naive ISO 8601: `2024-03-13T07:20:04.123456`
///
/// The value is always UTC, but no offset suffix is written.
pub fn format_naive_iso8601(t: DateTime) -> String {
    t.format(NAIVE_ISO8601).to_string()
}

/// Parse a naive ISO 8601 string (as produced by [`format_naive_iso8601`]) as UTC.
pub fn parse_naive_iso8601(s: &str) -> crate::Result<DateTime> {
    let t = NaiveDateTime::parse_from_str(s, NAIVE_ISO8601).map_err(|e| {
        Error::unexpected(format!("parse '{s}' as naive iso8601 failed")).with_source(e)
    })?;

    Ok(t.and_utc())
}
