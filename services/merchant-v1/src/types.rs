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

use serde::Serialize;
use serde_json::{Map, Value};

/// Free-form metadata attached to payments and refunds.
pub type Metadata = Map<String, Value>;

/// Parsed JSON object returned by the api. The client does not validate its shape.
pub type ApiResult = Map<String, Value>;

/// Body of `POST /api/merchant/v1/payments`.
///
/// Unset optional fields are sent as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePaymentRequest {
    /// Amount to charge. Not validated by the client.
    pub amount: f64,
    /// Currency code, e.g. `USD`.
    pub currency: String,
    /// Human readable description.
    pub description: Option<String>,
    /// Merchant metadata.
    pub metadata: Option<Metadata>,
}

impl CreatePaymentRequest {
    /// Create a payment request without description or metadata.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            description: None,
            metadata: None,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Body of `POST /api/merchant/v1/refunds`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRefundRequest {
    /// Payment to refund.
    pub payment_id: String,
    /// Amount to refund. Not validated by the client.
    pub amount: f64,
    /// Why the refund is issued.
    pub reason: String,
    /// Merchant metadata.
    pub metadata: Option<Metadata>,
}

impl CreateRefundRequest {
    /// Create a refund request without metadata.
    pub fn new(payment_id: impl Into<String>, amount: f64, reason: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            amount,
            reason: reason.into(),
            metadata: None,
        }
    }

    /// Set metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_create_payment_request_nulls() {
        let body = serde_json::to_string(&CreatePaymentRequest::new(100.0, "USD")).unwrap();

        assert_eq!(
            body,
            r#"{"amount":100.0,"currency":"USD","description":null,"metadata":null}"#
        );
    }

    #[test]
    fn test_create_payment_request_full() {
        let metadata = json!({"order": "A-1", "attempt": 2})
            .as_object()
            .cloned()
            .unwrap();
        let req = CreatePaymentRequest::new(12.5, "PI")
            .with_description("coffee")
            .with_metadata(metadata);

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "amount": 12.5,
                "currency": "PI",
                "description": "coffee",
                "metadata": {"attempt": 2, "order": "A-1"},
            })
        );
    }

    #[test]
    fn test_create_refund_request_field_names() {
        let body =
            serde_json::to_string(&CreateRefundRequest::new("pay_123", 5.0, "duplicate")).unwrap();

        assert_eq!(
            body,
            r#"{"paymentId":"pay_123","amount":5.0,"reason":"duplicate","metadata":null}"#
        );
    }
}
