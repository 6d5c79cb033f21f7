//! JSON text codec for data contracts.

use tracing::{debug, warn};
use vmagent_contracts::{Entity, InflateOptions, Value, deflate, inflate_with};

use crate::ProtocolError;

/// Parse `text` and inflate a fresh `T` from it.
pub fn decode_json<T: Entity + Default>(text: &str) -> Result<T, ProtocolError> {
    decode_json_with(text, &InflateOptions::default())
}

pub fn decode_json_with<T: Entity + Default>(
    text: &str,
    options: &InflateOptions,
) -> Result<T, ProtocolError> {
    let mut target = T::default();
    decode_into(&mut target, text, options)?;
    Ok(target)
}

/// Parse `text` and inflate it into an existing entity.
///
/// On error `target` may be partially updated.
pub fn decode_json_into(target: &mut dyn Entity, text: &str) -> Result<(), ProtocolError> {
    decode_into(target, text, &InflateOptions::default())
}

fn decode_into(
    target: &mut dyn Entity,
    text: &str,
    options: &InflateOptions,
) -> Result<(), ProtocolError> {
    let entity = target.entity_name();
    let value: Value = serde_json::from_str(text).map_err(|err| {
        warn!(entity, error = %err, "failed to parse JSON payload");
        ProtocolError::Json(err)
    })?;
    inflate_with(target, &value, options).map_err(|err| {
        warn!(entity, error = %err, "payload does not match contract");
        ProtocolError::Contract(err)
    })?;
    debug!(entity, bytes = text.len(), "decoded payload");
    Ok(())
}

pub fn encode_json(source: &dyn Entity) -> Result<String, ProtocolError> {
    let text = serde_json::to_string(&deflate(source))?;
    debug!(entity = source.entity_name(), bytes = text.len(), "encoded payload");
    Ok(text)
}

pub fn encode_json_pretty(source: &dyn Entity) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string_pretty(&deflate(source))?)
}
