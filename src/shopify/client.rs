use serde_json::Value;
use uuid::Uuid;

use crate::config::AppConfig;

use super::error::RelayError;
use super::payload::OrderEnvelope;

// ============================================================================
// Shopify Client
// ============================================================================
//
// Issues the single outbound order-creation call. Stateless and reentrant:
// one submission yields exactly one POST, with no retries and no handler-side
// timeout (the transport's defaults apply). The correlation id only appears
// in logs, never in the payload.
//
// ============================================================================

/// Classified result of an order-creation call that reached the platform and
/// produced a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOrderOutcome {
    /// Order accepted; the upstream response body, verbatim.
    Created(Value),
    /// Order rejected by upstream validation; the `errors` value, verbatim.
    Rejected(Value),
}

pub struct ShopifyClient {
    http: reqwest::Client,
    orders_url: String,
    access_token: String,
}

impl ShopifyClient {
    pub fn new(orders_url: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            orders_url,
            access_token,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.orders_url(), config.access_token.clone())
    }

    /// POST the order payload to the platform and classify its response.
    pub async fn create_order(
        &self,
        envelope: &OrderEnvelope,
        correlation_id: Uuid,
    ) -> Result<CreateOrderOutcome, RelayError> {
        tracing::debug!(
            correlation_id = %correlation_id,
            url = %self.orders_url,
            "Relaying order to upstream"
        );

        let response = self
            .http
            .post(&self.orders_url)
            .header("X-Shopify-Access-Token", self.access_token.as_str())
            .json(envelope)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let data: Value = serde_json::from_str(&body).map_err(RelayError::InvalidBody)?;

        let outcome = classify_response(data);

        match &outcome {
            CreateOrderOutcome::Created(_) => {
                tracing::info!(
                    correlation_id = %correlation_id,
                    upstream_status = %status,
                    "Order created upstream"
                );
            }
            CreateOrderOutcome::Rejected(errors) => {
                tracing::warn!(
                    correlation_id = %correlation_id,
                    upstream_status = %status,
                    errors = %errors,
                    "Order rejected by upstream validation"
                );
            }
        }

        Ok(outcome)
    }
}

/// An upstream body carrying an `errors` field is a validation rejection;
/// anything else is an accepted order.
fn classify_response(data: Value) -> CreateOrderOutcome {
    match data.get("errors") {
        Some(errors) => CreateOrderOutcome::Rejected(errors.clone()),
        None => CreateOrderOutcome::Created(data),
    }
}
