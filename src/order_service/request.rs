use serde::Deserialize;
use serde_json::Value;
use crate::domain::OrderLineRequest;
use super::CreateOrderError;

/// The requested lines of an order, either already typed or still raw.
///
/// Raw input is only checked once the customer has been resolved, so a
/// request with an unknown customer and a malformed body reports the
/// customer first.
#[derive(Debug, Clone)]
pub enum RequestedLines {
    Lines(Vec<OrderLineRequest>),
    Raw(Value),
}

impl RequestedLines {
    pub fn into_lines(self) -> Result<Vec<OrderLineRequest>, CreateOrderError> {
        match self {
            RequestedLines::Lines(lines) => Ok(lines),
            RequestedLines::Raw(value @ Value::Array(_)) => serde_json::from_value(value)
                .map_err(|e| CreateOrderError::InvalidShape(e.to_string())),
            RequestedLines::Raw(other) => Err(CreateOrderError::InvalidShape(format!(
                "expected an array, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<Vec<OrderLineRequest>> for RequestedLines {
    fn from(lines: Vec<OrderLineRequest>) -> Self {
        RequestedLines::Lines(lines)
    }
}

impl From<Value> for RequestedLines {
    fn from(value: Value) -> Self {
        RequestedLines::Raw(value)
    }
}

/// Deserializable order request, as it would arrive in a request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    #[serde(default)]
    pub products: Value,
}
