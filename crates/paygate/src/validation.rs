//! Field-level validation applied before a request is dispatched.
//!
//! Each operation carries a fixed rule set over the camelCase wire names of
//! its request record. Validation short-circuits the operation: a failing
//! request never reaches the network.

use serde_json::{Map, Value};
use url::Url;

use crate::result::ValidationErrors;

/// A single validation rule for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Present, non-null, and (for strings) non-empty.
    Required,
    /// A JSON number, or a string parsing as a finite decimal number.
    Numeric,
    /// Empty or absent passes; otherwise must parse as a URL with a host.
    Url,
    /// Absent passes; otherwise must be a JSON boolean.
    Boolean,
}

/// Rules for reserving a payment.
pub const PROCESS_PAYMENT_RULES: &[(&str, &[Rule])] = &[
    ("productName", &[Rule::Required]),
    ("amount", &[Rule::Required, Rule::Numeric]),
    ("currency", &[Rule::Required]),
    ("orderId", &[Rule::Required]),
    ("confirmUrl", &[Rule::Required, Rule::Url]),
    ("cancelUrl", &[Rule::Url]),
    ("productImageUrl", &[Rule::Url]),
    ("checkConfirmUrlBrowser", &[Rule::Boolean]),
    ("capture", &[Rule::Boolean]),
];

/// Rules for confirming or capturing a reservation.
pub const CONFIRM_RULES: &[(&str, &[Rule])] = &[
    ("amount", &[Rule::Required, Rule::Numeric]),
    ("currency", &[Rule::Required]),
];

/// Validation capability: evaluates a rule set against a key-value input
/// and reports structured per-field messages.
pub trait Validator: Send + Sync {
    fn validate(
        &self,
        input: &Map<String, Value>,
        rules: &[(&str, &[Rule])],
    ) -> Result<(), ValidationErrors>;
}

/// The bundled [`Validator`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleValidator;

impl RuleValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for RuleValidator {
    fn validate(
        &self,
        input: &Map<String, Value>,
        rules: &[(&str, &[Rule])],
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (field, field_rules) in rules {
            let value = input.get(*field);
            for rule in *field_rules {
                if let Some(message) = check(rule, field, value) {
                    errors.entry((*field).to_string()).or_default().push(message);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check(rule: &Rule, field: &str, value: Option<&Value>) -> Option<String> {
    match rule {
        Rule::Required => {
            if !is_present(value) {
                return Some(format!("the {field} field is required"));
            }
        }
        Rule::Numeric => {
            if is_present(value) && !value.is_some_and(is_numeric) {
                return Some(format!("the {field} field must be numeric"));
            }
        }
        Rule::Url => {
            if is_present(value) && !value.is_some_and(is_url_shaped) {
                return Some(format!("the {field} field must be a valid URL"));
            }
        }
        Rule::Boolean => {
            if is_present(value) && !value.is_some_and(Value::is_boolean) {
                return Some(format!("the {field} field must be a boolean"));
            }
        }
    }
    None
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => s.parse::<f64>().map(f64::is_finite).unwrap_or(false),
        _ => false,
    }
}

fn is_url_shaped(value: &Value) -> bool {
    match value {
        Value::String(s) => match Url::parse(s) {
            Ok(url) => url.has_host(),
            Err(_) => false,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    fn valid_payment() -> Map<String, Value> {
        object(json!({
            "productName": "Widget",
            "amount": "1000",
            "currency": "USD",
            "orderId": "ORD-1",
            "confirmUrl": "https://x.com/ok",
        }))
    }

    #[test]
    fn valid_payment_passes() {
        assert!(RuleValidator::new()
            .validate(&valid_payment(), PROCESS_PAYMENT_RULES)
            .is_ok());
    }

    #[test]
    fn empty_input_reports_every_required_field() {
        let errors = RuleValidator::new()
            .validate(&Map::new(), PROCESS_PAYMENT_RULES)
            .unwrap_err();

        for field in ["productName", "amount", "currency", "orderId", "confirmUrl"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        // Optional fields stay silent when absent.
        assert!(!errors.contains_key("cancelUrl"));
        assert!(!errors.contains_key("capture"));
    }

    #[test]
    fn empty_string_fails_required() {
        let mut input = valid_payment();
        input.insert("productName".to_string(), json!(""));

        let errors = RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .unwrap_err();
        assert_eq!(
            errors["productName"],
            vec!["the productName field is required".to_string()]
        );
    }

    #[test]
    fn non_numeric_amount_fails() {
        let mut input = valid_payment();
        input.insert("amount".to_string(), json!("ten dollars"));

        let errors = RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .unwrap_err();
        assert_eq!(
            errors["amount"],
            vec!["the amount field must be numeric".to_string()]
        );
    }

    #[test]
    fn decimal_and_json_number_amounts_pass() {
        for amount in [json!("10.50"), json!(1000), json!("-3")] {
            let mut input = valid_payment();
            input.insert("amount".to_string(), amount);
            assert!(RuleValidator::new()
                .validate(&input, PROCESS_PAYMENT_RULES)
                .is_ok());
        }
    }

    #[test]
    fn malformed_confirm_url_fails_even_when_rest_is_valid() {
        let mut input = valid_payment();
        input.insert("confirmUrl".to_string(), json!("not a url"));

        let errors = RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .unwrap_err();
        assert_eq!(
            errors["confirmUrl"],
            vec!["the confirmUrl field must be a valid URL".to_string()]
        );
    }

    #[test]
    fn url_rule_requires_a_host() {
        let mut input = valid_payment();
        input.insert("cancelUrl".to_string(), json!("mailto:ops@x.com"));

        let errors = RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .unwrap_err();
        assert!(errors.contains_key("cancelUrl"));
    }

    #[test]
    fn optional_url_passes_when_empty() {
        let mut input = valid_payment();
        input.insert("cancelUrl".to_string(), json!(""));

        assert!(RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .is_ok());
    }

    #[test]
    fn boolean_rule_rejects_strings() {
        let mut input = valid_payment();
        input.insert("capture".to_string(), json!("true"));

        let errors = RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .unwrap_err();
        assert_eq!(
            errors["capture"],
            vec!["the capture field must be a boolean".to_string()]
        );
    }

    #[test]
    fn missing_required_also_skips_numeric_message() {
        // A missing amount reports `required` once, not `numeric` as well.
        let errors = RuleValidator::new()
            .validate(&Map::new(), CONFIRM_RULES)
            .unwrap_err();
        assert_eq!(
            errors["amount"],
            vec!["the amount field is required".to_string()]
        );
    }

    #[test]
    fn multiple_violations_accumulate_per_field() {
        let mut input = valid_payment();
        input.insert("confirmUrl".to_string(), json!("not a url"));
        input.insert("amount".to_string(), json!("abc"));

        let errors = RuleValidator::new()
            .validate(&input, PROCESS_PAYMENT_RULES)
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
