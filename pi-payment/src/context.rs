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

use async_trait::async_trait;
use bytes::Bytes;
use pi_payment_core::{Context, Env, HttpSend, OsEnv, Result};
use pi_payment_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// DefaultContext sends requests with reqwest and reads the process environment.
///
/// All clones share the same `reqwest::Client` and therefore the same
/// connection pool.
#[derive(Debug, Clone, Default)]
pub struct DefaultContext {
    http: ReqwestHttpSend,
}

impl DefaultContext {
    /// Create a new DefaultContext with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new DefaultContext on top of the given reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self {
            http: ReqwestHttpSend::new(client),
        }
    }
}

#[async_trait]
impl HttpSend for DefaultContext {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }
}

impl Env for DefaultContext {
    fn var(&self, key: &str) -> Option<String> {
        OsEnv.var(key)
    }
}

impl From<DefaultContext> for Context {
    fn from(value: DefaultContext) -> Self {
        Context::new().with_http_send(value.clone()).with_env(value)
    }
}

/// Create a [`Context`] backed by [`DefaultContext`].
pub fn default_context() -> Context {
    DefaultContext::new().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_reads_process_env() {
        let ctx = default_context();

        let path = std::env::var("PATH").ok();
        assert_eq!(ctx.env_var("PATH"), path);
        assert_eq!(ctx.env_var("PI_PAYMENT_SURELY_NOT_SET_0xdead"), None);
    }
}
