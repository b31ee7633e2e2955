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

use crate::{Context, Error, ProvideCredential, Result, SignRequest, SigningCredential};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// The credential is loaded on first use and cached for as long as it stays valid.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Get the context this signer runs in.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Signing request.
    ///
    /// `body` must be the exact bytes that will be sent along with `req`.
    pub async fn sign(&self, req: &mut http::request::Parts, body: Option<&[u8]>) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            if !loaded.is_valid() {
                log::debug!("no valid credential from {:?}", self.loader);
                return Err(Error::credential_invalid(
                    "no valid credential could be loaded",
                ));
            }
            log::debug!("credential loaded from {:?}", self.loader);
            *self.credential.lock().expect("lock poisoned") = loaded.clone();
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, body, credential.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Debug)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug, Default)]
    struct CountingProvider {
        key: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl ProvideCredential for CountingProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<TestCredential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(TestCredential(self.key.clone())))
        }
    }

    #[derive(Debug)]
    struct HeaderSigner;

    #[async_trait::async_trait]
    impl SignRequest for HeaderSigner {
        type Credential = TestCredential;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut http::request::Parts,
            body: Option<&[u8]>,
            credential: Option<&TestCredential>,
        ) -> Result<()> {
            let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
            req.headers.insert("x-key", cred.0.parse()?);
            req.headers
                .insert("x-body-len", body.map_or(0, |b| b.len()).to_string().parse()?);
            Ok(())
        }
    }

    fn parts() -> http::request::Parts {
        http::Request::get("https://example.com/api")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_sign_caches_credential() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let calls = Arc::new(AtomicUsize::new(0));
        let provider = CountingProvider {
            key: "sk_test".to_string(),
            calls: calls.clone(),
        };
        let signer = Signer::new(Context::new(), provider, HeaderSigner);

        let mut first = parts();
        signer.sign(&mut first, Some(&b"{}"[..])).await?;
        let mut second = parts();
        signer.sign(&mut second, None).await?;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(first.headers["x-key"], "sk_test");
        assert_eq!(first.headers["x-body-len"], "2");
        assert_eq!(second.headers["x-key"], "sk_test");
        assert_eq!(second.headers["x-body-len"], "0");
        Ok(())
    }

    #[tokio::test]
    async fn test_sign_without_credential() {
        let _ = env_logger::builder().is_test(true).try_init();

        let signer = Signer::new(Context::new(), CountingProvider::default(), HeaderSigner);

        let err = signer.sign(&mut parts(), None).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
