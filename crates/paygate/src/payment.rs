use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for reserving a payment (the initial step that yields a
/// transaction id and a redirect URL).
///
/// Amounts travel as numeric strings, exactly as the gateway expects them.
/// `None` options are omitted from the wire body, so the serialized request
/// echoes precisely the fields the caller set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub product_name: String,
    pub amount: String,
    pub currency: String,
    pub order_id: String,
    pub confirm_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_confirm_url_browser: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
}

/// Parameters for confirming or capturing a prior reservation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub amount: String,
    pub currency: String,
}

/// Serialize a request record to the JSON object the validator and the wire
/// body both operate on.
///
/// Request records always serialize to objects, so this cannot fail for the
/// types in this crate.
pub fn to_object<T: Serialize>(params: &T) -> Map<String, Value> {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
