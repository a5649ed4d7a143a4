//! Conversion of backend category payloads into [`Category`].
//!
//! The backend serves two record shapes side by side. Everything that reads
//! records from the wire goes through this module, so the rest of the code base
//! only ever sees the tagged [`Category`] variant.

use serde_json::{Map, Value};
use thiserror::Error;

use super::aggregate::{Category, CategoryId, CurrentCategory, LegacyCategory};

/// Payload of a list request that is not a JSON array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedPayload {
    #[error("expected an array of categories, got {found}")]
    NotAnArray { found: &'static str },
}

/// Result of decoding a list payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodedList {
    pub categories: Vec<Category>,
    /// Array items that were neither a record nor a plain string
    pub skipped: usize,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn parse_id(value: &Value) -> Option<CategoryId> {
    match value {
        Value::Number(n) => n.as_i64().map(CategoryId::new),
        Value::String(s) => CategoryId::from_string(s).ok(),
        _ => None,
    }
}

fn non_empty_str(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn business_count(map: &Map<String, Value>) -> Option<u32> {
    map.get("_count")
        .and_then(|c| c.get("Empresas"))
        .and_then(Value::as_u64)
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

impl Category {
    /// Decode a single record. Returns `None` for values that cannot be a category
    /// (numbers, arrays, objects without a `Nombre`, current records without an id).
    pub fn from_value(value: &Value) -> Option<Category> {
        let map = match value {
            Value::String(s) => {
                return Some(Category::Legacy(LegacyCategory {
                    id: None,
                    name: s.clone(),
                    icon_content: s.clone(),
                }));
            }
            Value::Object(map) => map,
            _ => return None,
        };

        let name = map.get("Nombre").and_then(Value::as_str)?.to_string();
        let id = map.get("id").and_then(parse_id);

        // Shape check happens before any current-only field is touched
        let Some(icon_type) = non_empty_str(map, "TipoIcono") else {
            return Some(Category::Legacy(LegacyCategory {
                id,
                name,
                icon_content: map
                    .get("Icono")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            }));
        };

        Some(Category::Current(CurrentCategory {
            id: id?,
            name,
            slug: non_empty_str(map, "Slug"),
            icon_type,
            icon_value: non_empty_str(map, "Icono"),
            color: non_empty_str(map, "ColorPrimario"),
            active: map.get("Activo").and_then(Value::as_bool).unwrap_or(true),
            description: non_empty_str(map, "Descripcion"),
            business_count: business_count(map),
        }))
    }
}

/// Decode a list payload, preserving backend order
pub fn decode_category_list(payload: Value) -> Result<DecodedList, MalformedPayload> {
    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(MalformedPayload::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut decoded = DecodedList::default();
    for item in &items {
        match Category::from_value(item) {
            Some(category) => decoded.categories.push(category),
            None => decoded.skipped += 1,
        }
    }
    Ok(decoded)
}
