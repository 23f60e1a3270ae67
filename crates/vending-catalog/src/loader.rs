//! # Catalog Loader
//!
//! Converts a generic JSON tree into an [`Inventory`].
//!
//! ## Accepted Shapes
//! ```text
//! Sequence form - selection is the entry's name:
//!   [
//!     { "name": "Soda", "price": 1.5, "quantity": 5, "iconIdentifier": "soda" },
//!     ...
//!   ]
//!
//! Mapping form - selection is the key, document order is display order:
//!   {
//!     "soda": { "name": "Soda", "price": 1.5, "quantity": 5, "iconIdentifier": "soda" },
//!     ...
//!   }
//! ```
//!
//! Prices are read from the number's decimal text, so `1.5` is exactly
//! 150 cents.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};
use vending_core::validation::validate_stock;
use vending_core::{IconRef, Inventory, Item, Money, Selection, ValidationError};

use crate::error::{CatalogError, CatalogResult, MalformedCatalog};

/// Reads and parses the catalog file at `path`.
pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Inventory> {
    let path = path.as_ref();
    debug!(?path, "Reading catalog");

    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let inventory = from_json_str(&text)?;
    info!(?path, items = inventory.len(), "Catalog loaded");
    Ok(inventory)
}

/// Parses a catalog from JSON text.
pub fn from_json_str(text: &str) -> CatalogResult<Inventory> {
    let value: Value = serde_json::from_str(text)?;
    from_value(&value)
}

/// Builds an inventory from an already-parsed document.
pub fn from_value(value: &Value) -> CatalogResult<Inventory> {
    let mut builder = Builder::default();

    match value {
        Value::Array(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                let label = entry
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("#{}", index));

                let item = parse_entry(&label, entry)?;
                builder.push(Selection::new(item.name()), item)?;
            }
        }
        Value::Object(entries) => {
            for (key, entry) in entries {
                let item = parse_entry(key, entry)?;
                builder.push(Selection::new(key.as_str()), item)?;
            }
        }
        other => {
            return Err(MalformedCatalog::NotACollection {
                found: kind_of(other),
            }
            .into())
        }
    }

    Ok(builder.inventory)
}

// =============================================================================
// Internals
// =============================================================================

#[derive(Default)]
struct Builder {
    inventory: Inventory,
    names: HashSet<String>,
}

impl Builder {
    fn push(&mut self, selection: Selection, item: Item) -> Result<(), MalformedCatalog> {
        let label = selection.to_string();
        let name = item.name().to_string();

        self.inventory.insert(selection, item).map_err(|err| match err {
            ValidationError::Duplicate { value, .. } => MalformedCatalog::DuplicateSelection(value),
            other => MalformedCatalog::InvalidValue {
                entry: label,
                reason: other.to_string(),
            },
        })?;

        if !self.names.insert(name.clone()) {
            return Err(MalformedCatalog::DuplicateName(name));
        }

        Ok(())
    }
}

fn parse_entry(entry: &str, value: &Value) -> Result<Item, MalformedCatalog> {
    let fields = value
        .as_object()
        .ok_or_else(|| MalformedCatalog::EntryNotAMapping {
            entry: entry.to_string(),
            found: kind_of(value),
        })?;

    let name = string_field(entry, fields, "name")?;
    let price = price_field(entry, fields)?;
    let quantity = quantity_field(entry, fields)?;
    let icon = string_field(entry, fields, "iconIdentifier")?;

    Item::new(name, price, quantity, IconRef::new(icon)).map_err(|err| invalid(entry, err))
}

fn required<'a>(
    entry: &str,
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, MalformedCatalog> {
    fields.get(field).ok_or_else(|| MalformedCatalog::MissingField {
        entry: entry.to_string(),
        field,
    })
}

fn string_field<'a>(
    entry: &str,
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, MalformedCatalog> {
    let value = required(entry, fields, field)?;
    value
        .as_str()
        .ok_or_else(|| wrong_type(entry, field, "a string", value))
}

fn price_field(entry: &str, fields: &Map<String, Value>) -> Result<Money, MalformedCatalog> {
    let value = required(entry, fields, "price")?;
    match value {
        Value::Number(number) => {
            Money::parse_decimal(&number.to_string()).map_err(|err| invalid(entry, err))
        }
        other => Err(wrong_type(entry, "price", "a number", other)),
    }
}

fn quantity_field(entry: &str, fields: &Map<String, Value>) -> Result<u32, MalformedCatalog> {
    let value = required(entry, fields, "quantity")?;
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => {
            let quantity = number.as_i64().unwrap_or(i64::MAX);
            validate_stock(quantity).map_err(|err| invalid(entry, err))
        }
        other => Err(wrong_type(entry, "quantity", "an integer", other)),
    }
}

fn invalid(entry: &str, err: ValidationError) -> MalformedCatalog {
    MalformedCatalog::InvalidValue {
        entry: entry.to_string(),
        reason: err.to_string(),
    }
}

fn wrong_type(
    entry: &str,
    field: &'static str,
    expected: &'static str,
    found: &Value,
) -> MalformedCatalog {
    MalformedCatalog::WrongType {
        entry: entry.to_string(),
        field,
        expected,
        found: kind_of(found),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a decimal number",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
