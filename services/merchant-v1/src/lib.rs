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

//! Pi Payment Gateway merchant api v1 client.
//!
//! Every request is signed with the merchant api key:
//!
//! - `Authorization: Bearer <api_key>`
//! - `X-Timestamp`: naive ISO 8601 UTC time with microseconds
//! - `X-Signature`: hex HMAC-SHA256 of the canonical payload, see [`canonical_payload`]
//!
//! ## Example
//!
//! ```no_run
//! use pi_payment_core::{Context, OsEnv, Result};
//! use pi_payment_http_send_reqwest::ReqwestHttpSend;
//! use pi_payment_merchant_v1::{Client, Config, CreatePaymentRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_http_send(ReqwestHttpSend::default())
//!         .with_env(OsEnv);
//!     let config = Config::new().with_api_key("sk_test_0123456789").from_env(&ctx);
//!     let client = Client::new(ctx, config)?;
//!
//!     let payment = client
//!         .create_payment(&CreatePaymentRequest::new(100.0, "USD").with_description("order #1"))
//!         .await?;
//!     println!("created payment: {:?}", payment.get("id"));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

mod constants;
pub use constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, PAYMENTS_PATH, PI_PAYMENT_API_KEY, PI_PAYMENT_BASE_URL,
    PI_PAYMENT_TIMEOUT, REFUNDS_PATH, X_SIGNATURE, X_TIMESTAMP,
};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::*;

mod sign_request;
pub use sign_request::{canonical_payload, sign_payload, RequestSigner, SigningPath};

mod types;
pub use types::{ApiResult, CreatePaymentRequest, CreateRefundRequest, Metadata};

mod client;
pub use client::Client;
