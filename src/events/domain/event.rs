//! Typed events and their mapping to envelopes.

use super::{Envelope, EventDecodeError, EventEncodeError, Subject};
use serde::{Serialize, de::DeserializeOwned, ser::Error as _};
use serde_json::Value;
use std::sync::Arc;

/// Result of decoding an envelope into a typed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<E> {
    /// The envelope names a known action and its fields fit.
    Event(E),
    /// The envelope has no string `action` field.
    MissingAction,
    /// The envelope names an action this subject does not define.
    UnknownAction(String),
}

/// Closed set of events published on a single subject.
///
/// Implementors are serde-tagged enums whose tag field is `action`.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Subject the events travel on.
    const SUBJECT: Subject;

    /// Every action string the subject defines.
    const ACTIONS: &'static [&'static str];

    /// Returns this event's action string.
    fn action(&self) -> &'static str;

    /// Serialises the event into an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`EventEncodeError`] if the event does not serialise to an
    /// object.
    fn to_envelope(&self) -> Result<Envelope, EventEncodeError> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(Envelope::from_fields(fields)),
            other => Err(EventEncodeError::from(serde_json::Error::custom(format!(
                "event serialised to non-object value: {other}"
            )))),
        }
    }

    /// Decodes an envelope into an event of this subject.
    ///
    /// Missing and unknown actions are reported as [`Decoded`] variants
    /// rather than errors.
    ///
    /// # Errors
    ///
    /// Returns [`EventDecodeError::InvalidFields`] when the action is known
    /// but the other fields do not match it.
    fn from_envelope(envelope: Envelope) -> Result<Decoded<Self>, EventDecodeError> {
        let action = match envelope.action() {
            None => return Ok(Decoded::MissingAction),
            Some(name) if !Self::ACTIONS.iter().any(|known| *known == name) => {
                return Ok(Decoded::UnknownAction(name.to_owned()));
            }
            Some(name) => name.to_owned(),
        };

        serde_json::from_value(envelope.into_value())
            .map(Decoded::Event)
            .map_err(|err| EventDecodeError::InvalidFields {
                action,
                source: Arc::new(err),
            })
    }
}
