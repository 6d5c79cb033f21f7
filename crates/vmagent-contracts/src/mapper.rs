//! Generic inflate/deflate between entities and untyped nested values.
//!
//! Recursion follows the shape of the incoming value (mapping, sequence, scalar)
//! and checks it against the declared shape of each target field.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{ContractError, Entity, Mapping, Scalar, Slot, SlotMut, Value};

const ROOT_PATH: &str = "$";

/// Knobs for inbound mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflateOptions {
    /// Reject keys that have no matching field instead of skipping them.
    pub deny_unknown_fields: bool,
    /// Treat `null` on a nested or list field as a missing key. When unset, such a
    /// `null` is a shape mismatch like any other scalar.
    pub null_as_absent: bool,
}

impl InflateOptions {
    pub fn strict() -> Self {
        Self {
            deny_unknown_fields: true,
            ..Self::default()
        }
    }
}

/// Populate `target` in place from `mapping`.
///
/// Missing keys leave fields untouched and unknown keys are ignored. On error the
/// target may already be partially updated and should be discarded.
pub fn inflate(target: &mut dyn Entity, mapping: &Value) -> Result<(), ContractError> {
    inflate_with(target, mapping, &InflateOptions::default())
}

pub fn inflate_with(
    target: &mut dyn Entity,
    mapping: &Value,
    options: &InflateOptions,
) -> Result<(), ContractError> {
    inflate_entity(target, mapping, ROOT_PATH, options)
}

/// Build a default `T` and inflate it from `mapping`.
pub fn inflate_new<T: Entity + Default>(mapping: &Value) -> Result<T, ContractError> {
    let mut target = T::default();
    inflate(&mut target, mapping)?;
    Ok(target)
}

fn inflate_entity(
    target: &mut dyn Entity,
    value: &Value,
    path: &str,
    options: &InflateOptions,
) -> Result<(), ContractError> {
    let Value::Mapping(mapping) = value else {
        return Err(ContractError::NotAMapping {
            path: path.to_string(),
            found: value.kind(),
        });
    };
    let entity = target.entity_name();
    check_unknown_keys(target, mapping, path, options)?;

    for (name, slot) in target.fields_mut() {
        let Some(incoming) = mapping.get(name) else {
            continue;
        };
        let field_path = child_path(path, name);
        match (slot, incoming) {
            (SlotMut::Nested(nested), Value::Mapping(_)) => {
                inflate_entity(nested, incoming, &field_path, options)?;
            }
            (SlotMut::List(list), Value::Sequence(items)) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{field_path}[{index}]");
                    list.append_with(&mut |entry: &mut dyn Entity| {
                        inflate_entity(entry, item, &item_path, options)
                    })?;
                }
            }
            (SlotMut::Scalar(field), Value::Scalar(scalar)) => {
                *field = scalar.clone();
            }
            (SlotMut::Nested(_) | SlotMut::List(_), Value::Scalar(Scalar::Null))
                if options.null_as_absent => {}
            (slot, incoming) => {
                return Err(ContractError::ShapeMismatch {
                    path: field_path,
                    entity,
                    declared: slot.kind(),
                    found: incoming.kind(),
                });
            }
        }
    }
    Ok(())
}

fn check_unknown_keys(
    target: &dyn Entity,
    mapping: &Mapping,
    path: &str,
    options: &InflateOptions,
) -> Result<(), ContractError> {
    let schema = target.schema();
    for key in mapping.keys() {
        if schema.iter().any(|field| field.name == key) {
            continue;
        }
        if options.deny_unknown_fields {
            return Err(ContractError::UnknownField {
                path: child_path(path, key),
                entity: target.entity_name(),
            });
        }
        trace!(entity = target.entity_name(), path, key = key.as_str(), "ignoring unknown field");
    }
    Ok(())
}

fn child_path(parent: &str, name: &str) -> String {
    format!("{parent}.{name}")
}

/// Flatten `source` into a fresh mapping, fields in declaration order.
pub fn deflate(source: &dyn Entity) -> Value {
    let fields = source.fields();
    let mut mapping = Mapping::with_capacity(fields.len());
    for (name, slot) in fields {
        let value = match slot {
            Slot::Scalar(scalar) => Value::Scalar(scalar.clone()),
            Slot::Nested(nested) => deflate(nested),
            Slot::List(list) => Value::Sequence(list.items().map(deflate).collect()),
        };
        mapping.insert(name.to_string(), value);
    }
    Value::Mapping(mapping)
}
