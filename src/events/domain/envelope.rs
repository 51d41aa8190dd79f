//! Untyped JSON envelope shared by every subject.

use super::{EventDecodeError, EventEncodeError};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Field naming the event variant.
pub const ACTION_FIELD: &str = "action";

/// A JSON object as it travels on the broker.
///
/// Envelopes are the only untyped representation of an event; handlers
/// receive typed variants decoded from them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Envelope {
    fields: Map<String, Value>,
}

impl Envelope {
    /// Wraps an already-parsed JSON object.
    #[must_use]
    pub const fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Parses raw payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EventDecodeError::Malformed`] for invalid JSON and
    /// [`EventDecodeError::NotAnObject`] for any other JSON value.
    pub fn decode(payload: &[u8]) -> Result<Self, EventDecodeError> {
        let value: Value = serde_json::from_slice(payload)
            .map_err(|err| EventDecodeError::Malformed(Arc::new(err)))?;
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(EventDecodeError::NotAnObject),
        }
    }

    /// Serialises the envelope to payload bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EventEncodeError`] if serialisation fails.
    pub fn encode(&self) -> Result<Vec<u8>, EventEncodeError> {
        Ok(serde_json::to_vec(&self.fields)?)
    }

    /// Returns the action string, if present and a string.
    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.fields.get(ACTION_FIELD).and_then(Value::as_str)
    }

    /// Returns a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the envelope as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}
