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

use std::time::Duration;

// Env values used by the merchant api.
/// Env name of the merchant api key.
pub const PI_PAYMENT_API_KEY: &str = "PI_PAYMENT_API_KEY";
/// Env name of the api base url.
pub const PI_PAYMENT_BASE_URL: &str = "PI_PAYMENT_BASE_URL";
/// Env name of the request timeout, in whole seconds.
pub const PI_PAYMENT_TIMEOUT: &str = "PI_PAYMENT_TIMEOUT";

// Headers used by the merchant api.
/// Header carrying the signing time.
pub const X_TIMESTAMP: &str = "x-timestamp";
/// Header carrying the hex signature.
pub const X_SIGNATURE: &str = "x-signature";

/// Production api endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pipaymentgateway.com";
/// Timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoint of the payments resource.
pub const PAYMENTS_PATH: &str = "/api/merchant/v1/payments";
/// Endpoint of the refunds resource.
pub const REFUNDS_PATH: &str = "/api/merchant/v1/refunds";
