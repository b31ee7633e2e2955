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

use std::mem;
use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderName;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::{Error, Result};

/// Signing context for request.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, exactly as it will be sent.
    pub path: String,
    /// Raw HTTP query, without the leading `?`.
    pub query: Option<String>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq.query().map(|v| v.to_string()),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let paq = Self::join_path_and_query(&self.path, self.query.as_deref());
            let paq = PathAndQuery::from_str(&paq)?;

            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = Some(paq);
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get the path and query as the server will see them, e.g. `/v1/payments?limit=1`.
    pub fn path_and_query(&self) -> String {
        Self::join_path_and_query(&self.path, self.query.as_deref())
    }

    /// Insert a header, marking it sensitive if requested.
    pub fn header_insert(&mut self, name: HeaderName, value: &str, sensitive: bool) -> Result<()> {
        let mut value = HeaderValue::from_str(value)?;
        value.set_sensitive(sensitive);
        self.headers.insert(name, value);
        Ok(())
    }

    fn join_path_and_query(path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{path}?{q}"),
            _ => path.to_string(),
        }
    }
}
