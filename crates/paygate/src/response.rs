use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The gateway response envelope.
///
/// Only `returnCode` and, for reservations, `info.transactionId` /
/// `info.paymentUrl.web` are interpreted; everything else the gateway sends
/// is retained in the flattened `extra` maps and passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub return_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<PaymentInfo>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GatewayResponse {
    /// Whether the gateway reported success for this call.
    pub fn is_success(&self) -> bool {
        self.return_code == crate::constants::RETURN_CODE_SUCCESS
    }
}

/// Transaction details returned on a successful reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<PaymentUrls>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Redirect URLs where the payer completes the reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
