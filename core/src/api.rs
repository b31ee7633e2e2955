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

use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this loader.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    ///
    /// Returns `Ok(None)` if this provider has nothing to offer.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this builder.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` is the exact byte sequence that will be sent on the wire, or `None`
    /// when the request carries no body. Signers that bind the body into the
    /// signature must use these bytes rather than re-serializing anything.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential required by the signer to sign
    /// the request. Implementations should return
    /// [`Error::credential_invalid`](crate::Error::credential_invalid) if it's `None`.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: Option<&[u8]>,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
