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

//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! One [`ReqwestHttpSend`] owns one `reqwest::Client`, and with it one connection
//! pool. `reqwest::Client` is safe to share between tasks, so a context built on
//! it can serve concurrent calls.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use pi_payment_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// HttpSend that sends requests through a shared `reqwest::Client`.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose client gives up on a request after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            Error::config_invalid("failed to build reqwest client").with_source(e)
        })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::request_invalid("failed to convert request for reqwest").with_source(e)
        })?;
        let method = req.method().clone();
        let url = req.url().clone();

        let resp = self.client.execute(req).await.map_err(|e| {
            log::debug!("{method} {url} got no response: {e}");
            let msg = if e.is_timeout() {
                "request timed out"
            } else if e.is_connect() {
                "failed to connect"
            } else {
                "failed to send request"
            };
            Error::transport(format!("{msg}: {method} {url}")).with_source(e)
        })?;
        let resp: http::Response<_> = resp.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
