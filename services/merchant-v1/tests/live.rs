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

//! Tests against a real gateway, enabled by `PI_PAYMENT_MERCHANT_V1_TEST=on`.

use std::env;

use log::warn;
use pi_payment_core::{Context, ErrorKind, OsEnv, Result};
use pi_payment_http_send_reqwest::ReqwestHttpSend;
use pi_payment_merchant_v1::{Client, Config, CreatePaymentRequest};

fn init_live_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("PI_PAYMENT_MERCHANT_V1_TEST").is_err()
        || env::var("PI_PAYMENT_MERCHANT_V1_TEST").unwrap() != "on"
    {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    assert!(
        config.api_key.is_some(),
        "env PI_PAYMENT_API_KEY must set"
    );

    Some(Client::new(ctx, config).expect("client must build"))
}

#[tokio::test]
async fn test_live_create_and_get_payment() -> Result<()> {
    let Some(client) = init_live_client() else {
        warn!("PI_PAYMENT_MERCHANT_V1_TEST is not set, skipped");
        return Ok(());
    };

    let payment = client
        .create_payment(&CreatePaymentRequest::new(1.0, "USD").with_description("live test"))
        .await?;
    let id = payment
        .get("id")
        .and_then(|v| v.as_str())
        .expect("created payment must have an id");

    let fetched = client.get_payment(id).await?;
    assert_eq!(fetched.get("id"), payment.get("id"));
    Ok(())
}

#[tokio::test]
async fn test_live_get_missing_payment() -> Result<()> {
    let Some(client) = init_live_client() else {
        warn!("PI_PAYMENT_MERCHANT_V1_TEST is not set, skipped");
        return Ok(());
    };

    let err = client
        .get_payment("pay_does_not_exist")
        .await
        .expect_err("missing payment must fail");
    assert_eq!(err.kind(), ErrorKind::Api);
    Ok(())
}
