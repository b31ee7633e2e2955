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

use crate::Credential;
use async_trait::async_trait;
use pi_payment_core::{utils::Redact, Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed merchant api key.
///
/// This provider is used when the api key is known up front, e.g. taken from
/// [`Config::api_key`](crate::Config::api_key).
#[derive(Clone)]
pub struct StaticCredentialProvider {
    api_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with the api key.
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }
}

impl Debug for StaticCredentialProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialProvider")
            .field("api_key", &Redact::from(&self.api_key))
            .finish()
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(self.api_key.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> Result<()> {
        let provider = StaticCredentialProvider::new("sk_test_0123456789");
        let cred = provider.provide_credential(&Context::new()).await?;

        assert_eq!(cred.unwrap().api_key, "sk_test_0123456789");
        assert!(!format!("{provider:?}").contains("sk_test_0123456789"));
        Ok(())
    }
}
