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

//! Core components for signing Pi Payment Gateway requests.
//!
//! This crate provides the foundational types and traits shared by the pi-payment crates.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that coordinates credential loading and request signing
//! - **Error**: One error type that tells transport failures apart from API failures
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use http::request::Parts;
//! use pi_payment_core::{Context, Error, ProvideCredential, Result, SignRequest, Signer, SigningCredential};
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! #[async_trait]
//! impl ProvideCredential for MyLoader {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential { key: "my-api-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! #[async_trait]
//! impl SignRequest for MyBuilder {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         req: &mut Parts,
//!         body: Option<&[u8]>,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<()> {
//!         let cred = cred.ok_or_else(|| Error::credential_invalid("missing credential"))?;
//!         let signature = pi_payment_core::hash::hex_hmac_sha256(
//!             cred.key.as_bytes(),
//!             body.unwrap_or_default(),
//!         );
//!         req.headers.insert("x-signature", signature.parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//!
//! let mut parts = http::Request::get("https://example.com")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC-SHA256 helpers
//! - [`time`]: Timestamp formatting used in signatures
//! - [`utils`]: Redaction of secrets in logs

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
