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

use std::str::FromStr;
use std::time::Duration;

use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Uri};
use log::debug;
use pi_payment_core::{Context, Error, ProvideCredential, Result, Signer};
use serde::Serialize;

use crate::constants::*;
use crate::provide_credential::StaticCredentialProvider;
use crate::types::{ApiResult, CreatePaymentRequest, CreateRefundRequest};
use crate::{Config, Credential, RequestSigner, SigningPath};

/// Signed HTTP client for the merchant api v1.
///
/// Each call is exactly one HTTP round trip: no retries, no pagination, no
/// rate-limit handling. The client is cheap to clone and can be shared between
/// tasks; clones share the context's transport session.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    timeout: Duration,
    signer: Signer<Credential>,
}

impl Client {
    /// Create a client that signs with `config.api_key`.
    ///
    /// Returns a [`ConfigInvalid`](pi_payment_core::ErrorKind::ConfigInvalid) error if
    /// the api key is missing or the base url is unusable.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("api_key is required"))?;
        let provider = StaticCredentialProvider::new(api_key);

        Self::with_credential_provider(ctx, config, provider)
    }

    /// Create a client that loads its credential from `provider`.
    ///
    /// `config.api_key` is ignored. The credential is loaded on the first request
    /// and reused afterwards.
    pub fn with_credential_provider(
        ctx: Context,
        config: Config,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let base_url = config.base_url().to_string();
        let uri = Uri::from_str(&base_url).map_err(|e| {
            Error::config_invalid(format!("base_url {base_url:?} is not a valid url"))
                .with_source(e)
        })?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "base_url {base_url:?} must contain scheme and host"
            )));
        }

        Ok(Self {
            base_url,
            timeout: config.timeout(),
            signer: Signer::new(ctx, provider, RequestSigner::new()),
        })
    }

    /// The base url requests are sent to, without trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Create a new payment.
    pub async fn create_payment(&self, req: &CreatePaymentRequest) -> Result<ApiResult> {
        self.execute_request(Method::POST, PAYMENTS_PATH, Some(req))
            .await
    }

    /// Get payment status.
    pub async fn get_payment(&self, payment_id: &str) -> Result<ApiResult> {
        let endpoint = format!("{PAYMENTS_PATH}/{payment_id}");
        self.execute_request::<()>(Method::GET, &endpoint, None)
            .await
    }

    /// Create a refund for a payment.
    pub async fn create_refund(&self, req: &CreateRefundRequest) -> Result<ApiResult> {
        self.execute_request(Method::POST, REFUNDS_PATH, Some(req))
            .await
    }

    /// Sign and send one request, returning the parsed JSON object.
    ///
    /// `endpoint` must start with `/` and is appended to the base url as is. The
    /// signature covers `endpoint` only, never a path prefix of the base url.
    /// `body` is serialized once; the same bytes are signed and sent.
    ///
    /// ## Errors
    ///
    /// - [`Transport`](pi_payment_core::ErrorKind::Transport) if no response was received,
    ///   including the configured timeout elapsing.
    /// - [`Api`](pi_payment_core::ErrorKind::Api) for any non-2xx response, carrying
    ///   the status code and raw body.
    /// - [`ResponseInvalid`](pi_payment_core::ErrorKind::ResponseInvalid) if a 2xx body
    ///   is not a JSON object.
    pub async fn execute_request<T: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&T>,
    ) -> Result<ApiResult> {
        if !endpoint.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "endpoint {endpoint:?} must start with '/'"
            )));
        }
        let url = format!("{}{}", self.base_url, endpoint);

        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| Error::request_invalid("serialize request body failed").with_source(e))?;

        let (mut parts, _) = http::Request::builder()
            .method(method.clone())
            .uri(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(())?
            .into_parts();
        parts.extensions.insert(SigningPath(endpoint.to_string()));
        self.signer.sign(&mut parts, body.as_deref()).await?;
        let req = http::Request::from_parts(parts, body.map(Bytes::from).unwrap_or_default());

        debug!("sending request: {method} {endpoint}");
        let resp = tokio::time::timeout(self.timeout, self.signer.context().http_send(req))
            .await
            .map_err(|_| {
                Error::transport(format!(
                    "request timed out after {:?}: {method} {endpoint}",
                    self.timeout
                ))
            })??;
        debug!("got response: {method} {endpoint} {}", resp.status());

        parse_response(resp)
    }
}

fn parse_response(resp: http::Response<Bytes>) -> Result<ApiResult> {
    let (parts, body) = resp.into_parts();
    if !parts.status.is_success() {
        return Err(Error::api(parts.status, String::from_utf8_lossy(&body)));
    }

    serde_json::from_slice(&body).map_err(|e| {
        Error::response_invalid(format!("response body is not a json object: {e}"))
            .with_status(parts.status)
            .with_source(e)
    })
}
