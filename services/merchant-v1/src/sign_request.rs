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

//! Merchant api v1 request signer.

use http::header::AUTHORIZATION;
use http::HeaderName;
use http::Method;
use log::debug;
use pi_payment_core::hash::hex_hmac_sha256;
use pi_payment_core::time::{format_naive_iso8601, now, DateTime};
use pi_payment_core::{Context, Error, Result, SignRequest, SigningRequest};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements the merchant api request signature.
///
/// Every request gets three headers:
///
/// - `Authorization: Bearer <api_key>`
/// - `X-Timestamp: <naive ISO 8601 UTC time>`
/// - `X-Signature: <hex HMAC-SHA256 of the canonical payload, keyed by api_key>`
///
/// See [`canonical_payload`] for what is signed.
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        body: Option<&[u8]>,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        // Captured once: the header and the signed payload must carry the same string.
        let timestamp = format_naive_iso8601(self.time.unwrap_or_else(now));

        let body = body
            .map(serde_json::from_slice::<&RawValue>)
            .transpose()
            .map_err(|e| Error::request_invalid("request body is not valid json").with_source(e))?;

        let signing_path = parts.extensions.get::<SigningPath>().map(|v| v.0.clone());
        let mut ctx = SigningRequest::build(parts)?;
        let url = signing_path.unwrap_or_else(|| ctx.path_and_query());

        let payload = canonical_payload(&ctx.method, &url, body, &timestamp)?;
        let signature = sign_payload(&k.api_key, &payload);

        ctx.header_insert(AUTHORIZATION, &format!("Bearer {}", k.api_key), true)?;
        ctx.header_insert(HeaderName::from_static(X_TIMESTAMP), &timestamp, false)?;
        ctx.header_insert(HeaderName::from_static(X_SIGNATURE), &signature, false)?;

        ctx.apply(parts)
    }
}

/// Endpoint a request is signed for, stored in the request extensions.
///
/// The canonical `url` is the api endpoint, e.g. `/api/merchant/v1/payments`, not
/// whatever path prefix the base url adds in front of it. Without this extension
/// the path and query of the request uri are signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningPath(pub String);

/// Compute the hex encoded HMAC-SHA256 of `payload` keyed by the raw bytes of `api_key`.
///
/// The result is always 64 lowercase hex characters.
pub fn sign_payload(api_key: &str, payload: &str) -> String {
    hex_hmac_sha256(api_key.as_bytes(), payload.as_bytes())
}

#[derive(Serialize)]
struct CanonicalPayload<'a> {
    method: &'a str,
    url: &'a str,
    body: Option<&'a RawValue>,
    timestamp: &'a str,
}

/// Construct the payload to sign.
///
/// ## Format
///
/// Compact JSON object with exactly these keys, in this order:
///
/// ```text
/// {"method":<VERB>,"url":<path>,"body":<body or null>,"timestamp":<timestamp>}
/// ```
///
/// - `method` is the uppercase HTTP verb.
/// - `url` is the request path (plus query, if any), never the full URL.
/// - `body` is embedded verbatim, so it is byte-identical to what goes on the wire.
/// - `timestamp` is the value sent as `X-Timestamp`.
pub fn canonical_payload(
    method: &Method,
    url: &str,
    body: Option<&RawValue>,
    timestamp: &str,
) -> Result<String> {
    let method = method.as_str().to_ascii_uppercase();
    let payload = CanonicalPayload {
        method: &method,
        url,
        body,
        timestamp,
    };

    let s = serde_json::to_string(&payload)
        .map_err(|e| Error::unexpected("serialize payload to sign failed").with_source(e))?;
    debug!("payload to sign: {s}");
    Ok(s)
}
