use serde_json::{Map, Value};

use paygate::constants::{
    CONTENT_TYPE_JSON, HEADER_CHANNEL_ID, HEADER_CHANNEL_SECRET,
};
use paygate::payment::to_object;
use paygate::validation::{Rule, CONFIRM_RULES, PROCESS_PAYMENT_RULES};
use paygate::{
    ConfirmRequest, GatewayResponse, GatewayResult, HttpPoster, PaymentRequest, RuleValidator,
    Validator,
};

use crate::config::GatewayConfig;
use crate::http_poster::ReqwestPoster;

/// Single point of contact with the payment gateway.
///
/// Holds immutable configuration plus the injected HTTP transport and
/// validator, so one instance is safely shared across tasks. Every
/// operation issues at most one POST and resolves into a
/// [`GatewayResult`]; expected failures never surface as panics or `Err`.
pub struct PaymentGatewayClient<H: HttpPoster, V: Validator> {
    config: GatewayConfig,
    http: H,
    validator: V,
}

impl PaymentGatewayClient<ReqwestPoster, RuleValidator> {
    /// Create a client with the bundled reqwest transport and rule
    /// validator.
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_parts(config, ReqwestPoster::new(), RuleValidator::new())
    }
}

impl<H: HttpPoster, V: Validator> PaymentGatewayClient<H, V> {
    /// Create a client from explicit transport and validator capabilities.
    pub fn with_parts(config: GatewayConfig, http: H, validator: V) -> Self {
        Self {
            config,
            http,
            validator,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Reserve a payment. On success the result carries the transaction id
    /// and the redirect URL for the payer.
    pub async fn process_payment(&self, params: &PaymentRequest) -> GatewayResult {
        let url = &self.config.endpoints.reservation_url;
        self.dispatch("process", url, to_object(params), PROCESS_PAYMENT_RULES)
            .await
    }

    /// Confirm a reserved payment after the payer approved it.
    pub async fn verify_payment(
        &self,
        transaction_id: &str,
        params: &ConfirmRequest,
    ) -> GatewayResult {
        let url = sub_action_url(
            &self.config.endpoints.detail_url,
            transaction_id,
            "confirm",
        );
        self.dispatch("verify", &url, to_object(params), CONFIRM_RULES)
            .await
    }

    /// Capture a previously authorized payment.
    pub async fn capture_payment(
        &self,
        transaction_id: &str,
        params: &ConfirmRequest,
    ) -> GatewayResult {
        let url = sub_action_url(
            &self.config.endpoints.capture_url,
            transaction_id,
            "capture",
        );
        self.dispatch("capture", &url, to_object(params), CONFIRM_RULES)
            .await
    }

    /// Void an authorized payment. No body and no validation; the result's
    /// request data stays empty.
    pub async fn void_payment(&self, transaction_id: &str) -> GatewayResult {
        let url = sub_action_url(&self.config.endpoints.capture_url, transaction_id, "void");
        self.exchange("void", &url, Map::new(), false).await
    }

    /// Validate, then run the exchange. Short-circuits to a failed result
    /// before any HTTP activity when validation rejects the input.
    async fn dispatch(
        &self,
        operation: &str,
        url: &str,
        request: Map<String, Value>,
        rules: &[(&str, &[Rule])],
    ) -> GatewayResult {
        if let Err(errors) = self.validator.validate(&request, rules) {
            tracing::debug!(operation, ?errors, "request rejected by validation");
            return GatewayResult::validation_failure(errors);
        }
        self.exchange(operation, url, request, true).await
    }

    /// One POST, one normalized result.
    async fn exchange(
        &self,
        operation: &str,
        url: &str,
        request: Map<String, Value>,
        with_body: bool,
    ) -> GatewayResult {
        let headers = [
            (HEADER_CHANNEL_ID, self.config.credentials.channel_id.clone()),
            (
                HEADER_CHANNEL_SECRET,
                self.config.credentials.channel_secret.clone(),
            ),
            ("Content-Type", CONTENT_TYPE_JSON.to_string()),
        ];

        let body = if with_body {
            match serde_json::to_vec(&request) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::warn!(operation, url, error = %e, "request serialization failed");
                    return GatewayResult::from_exchange(request, None);
                }
            }
        } else {
            None
        };

        tracing::debug!(operation, url, "dispatching gateway request");

        let response = match self.http.post(url, &headers, body.as_deref()).await {
            Ok(resp) if resp.is_ok() => {
                match serde_json::from_slice::<GatewayResponse>(&resp.body) {
                    Ok(decoded) => Some(decoded),
                    Err(e) => {
                        tracing::warn!(operation, url, error = %e, "undecodable gateway response");
                        None
                    }
                }
            }
            Ok(resp) => {
                tracing::warn!(operation, url, status = resp.status, "gateway returned non-200");
                None
            }
            Err(e) => {
                tracing::warn!(operation, url, error = %e, "gateway request failed");
                None
            }
        };

        GatewayResult::from_exchange(request, response)
    }
}

/// `{base}/{transaction_id}/{action}`, tolerating a trailing slash on the
/// configured base.
fn sub_action_url(base: &str, transaction_id: &str, action: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), transaction_id, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_action_url_trims_trailing_slash() {
        assert_eq!(
            sub_action_url("https://gw/payments/", "12345", "confirm"),
            "https://gw/payments/12345/confirm"
        );
        assert_eq!(
            sub_action_url("https://gw/payments", "tx-9", "void"),
            "https://gw/payments/tx-9/void"
        );
    }
}
