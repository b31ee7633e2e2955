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

//! Merchant api v1 with convenience APIs.

pub use pi_payment_merchant_v1::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create a merchant client on the [default context](crate::default_context).
///
/// Fields missing from `config` are taken from the environment:
///
/// - `PI_PAYMENT_API_KEY`
/// - `PI_PAYMENT_BASE_URL`, default to `https://api.pipaymentgateway.com`
/// - `PI_PAYMENT_TIMEOUT` in whole seconds, default to 10
///
/// # Example
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> pi_payment::Result<()> {
/// use pi_payment::merchant::{default_client, Config};
///
/// let client = default_client(Config::new().with_api_key("sk_test_0123456789"))?;
/// let payment = client.get_payment("pay_123").await?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_client(config: Config) -> Result<Client> {
    let ctx = default_context();
    let config = config.from_env(&ctx);
    Client::new(ctx, config)
}

#[cfg(all(test, feature = "default-context"))]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_client_keeps_explicit_config() {
        let client = default_client(
            Config::new()
                .with_api_key("sk_test_0123456789")
                .with_base_url("http://127.0.0.1:3000/")
                .with_timeout(std::time::Duration::from_secs(3)),
        )
        .expect("client must build");

        assert_eq!(client.base_url(), "http://127.0.0.1:3000");
        assert_eq!(client.timeout(), std::time::Duration::from_secs(3));
    }

    #[test]
    fn test_default_client_requires_api_key() {
        if std::env::var_os(PI_PAYMENT_API_KEY).is_some() {
            return;
        }

        let err = default_client(Config::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
