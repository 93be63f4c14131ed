use crate::{Error, Result};
use serde_json::{Map, Value};

/// Key present in the payload of a slot that can still be requested
pub const BOOKABLE_KEY: &str = "newreq";

/// Flat key/value data attached to each slot anchor on the listing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPayload {
    fields: Map<String, Value>,
}

impl SlotPayload {
    /// Parse the JSON object carried by the slot anchor
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::Payload(e.to_string()))?;

        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(Error::Payload(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Whether the slot is open for a new request (as opposed to reserved or blocked)
    pub fn is_bookable(&self) -> bool {
        self.fields.contains_key(BOOKABLE_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
