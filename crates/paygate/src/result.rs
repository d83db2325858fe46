use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::response::GatewayResponse;

/// Field name → human-readable messages, as reported by a
/// [`Validator`](crate::validation::Validator).
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// Outcome of a gateway operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayStatus {
    Success,
    Failed,
}

/// The request/response pair carried by every result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    /// The validated input parameters, echoed verbatim. Empty when
    /// validation failed before a request was built.
    pub request: Map<String, Value>,
    /// The decoded gateway payload. `None` on transport failure or when the
    /// body could not be decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<GatewayResponse>,
}

/// The uniform result shape returned by every gateway operation.
///
/// Expected failure modes (validation, transport, gateway-reported) never
/// surface as `Err`; callers branch on [`GatewayStatus`] and inspect
/// `data`/`msg`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResult {
    pub status: GatewayStatus,
    pub data: ResultData,
    /// Populated only on local validation failure.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub msg: ValidationErrors,
}

impl GatewayResult {
    /// Result for a request rejected by local validation. No HTTP call was
    /// made; `data` is empty.
    pub fn validation_failure(errors: ValidationErrors) -> Self {
        Self {
            status: GatewayStatus::Failed,
            data: ResultData::default(),
            msg: errors,
        }
    }

    /// Result for a dispatched request. `Success` iff the gateway returned
    /// a decodable body with the success return code.
    pub fn from_exchange(request: Map<String, Value>, response: Option<GatewayResponse>) -> Self {
        let status = match response {
            Some(ref r) if r.is_success() => GatewayStatus::Success,
            _ => GatewayStatus::Failed,
        };
        Self {
            status,
            data: ResultData { request, response },
            msg: ValidationErrors::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GatewayStatus::Success
    }

    /// Transaction id from the gateway payload, if one was returned.
    pub fn transaction_id(&self) -> Option<&str> {
        self.data
            .response
            .as_ref()?
            .info
            .as_ref()?
            .transaction_id
            .as_deref()
    }

    /// Web redirect URL where the payer completes a reservation.
    pub fn payment_url(&self) -> Option<&str> {
        self.data
            .response
            .as_ref()?
            .info
            .as_ref()?
            .payment_url
            .as_ref()?
            .web
            .as_deref()
    }
}
