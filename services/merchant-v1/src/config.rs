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

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use crate::constants::*;
use pi_payment_core::{utils::Redact, Context};

/// Config carries all the configuration for the merchant api client.
#[derive(Clone, Default)]
pub struct Config {
    /// `api_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PI_PAYMENT_API_KEY`]
    ///
    /// The same key is sent as bearer token and used to sign every request.
    pub api_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PI_PAYMENT_BASE_URL`]
    /// - default to [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,
    /// `timeout` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`PI_PAYMENT_TIMEOUT`], in whole seconds
    /// - default to [`DEFAULT_TIMEOUT`]
    pub timeout: Option<Duration>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set api_key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are never overwritten.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(PI_PAYMENT_API_KEY) {
            self.api_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PI_PAYMENT_BASE_URL) {
            self.base_url.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(PI_PAYMENT_TIMEOUT) {
            match v.trim().parse::<u64>() {
                Ok(0) => {
                    log::warn!("ignore invalid {PI_PAYMENT_TIMEOUT} value {v:?}: must be positive");
                }
                Ok(secs) => {
                    self.timeout.get_or_insert(Duration::from_secs(secs));
                }
                Err(e) => {
                    log::warn!("ignore invalid {PI_PAYMENT_TIMEOUT} value {v:?}: {e}");
                }
            }
        }

        self
    }

    /// The base url to send requests to, with all trailing `/` stripped.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }

    /// The timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &Redact::from(&self.api_key))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pi_payment_core::StaticEnv;
    use std::collections::HashMap;
    use test_case::test_case;

    fn ctx_with_env(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::new();

        assert_eq!(cfg.base_url(), "https://api.pipaymentgateway.com");
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let cfg = Config::new().with_base_url("https://sandbox.example.com//");
        assert_eq!(cfg.base_url(), "https://sandbox.example.com");

        let cfg = Config::new().with_base_url("http://localhost:3000/prefix/");
        assert_eq!(cfg.base_url(), "http://localhost:3000/prefix");
    }

    #[test]
    fn test_from_env() {
        let ctx = ctx_with_env(&[
            (PI_PAYMENT_API_KEY, "sk_env"),
            (PI_PAYMENT_BASE_URL, "https://env.example.com/"),
            (PI_PAYMENT_TIMEOUT, "30"),
        ]);

        let cfg = Config::new().from_env(&ctx);
        assert_eq!(cfg.api_key.as_deref(), Some("sk_env"));
        assert_eq!(cfg.base_url(), "https://env.example.com");
        assert_eq!(cfg.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = ctx_with_env(&[(PI_PAYMENT_API_KEY, "sk_env"), (PI_PAYMENT_TIMEOUT, "30")]);

        let cfg = Config::new()
            .with_api_key("sk_explicit")
            .with_timeout(Duration::from_secs(3))
            .from_env(&ctx);
        assert_eq!(cfg.api_key.as_deref(), Some("sk_explicit"));
        assert_eq!(cfg.timeout(), Duration::from_secs(3));
    }

    #[test_case("ten"; "not a number")]
    #[test_case("0"; "zero")]
    #[test_case("-5"; "negative")]
    #[test_case("1.5"; "fractional")]
    fn test_from_env_ignores_invalid_timeout(value: &str) {
        let ctx = ctx_with_env(&[(PI_PAYMENT_TIMEOUT, value)]);

        let cfg = Config::new().from_env(&ctx);
        assert_eq!(cfg.timeout, None);
        assert_eq!(cfg.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let cfg = Config::new().with_api_key("sk_live_abcdefghijk");

        let s = format!("{cfg:?}");
        assert!(s.contains("sk_***ijk"));
        assert!(!s.contains("sk_live_abcdefghijk"));
    }
}
