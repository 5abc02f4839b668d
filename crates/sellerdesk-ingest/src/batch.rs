//! Batch normalization of whole payloads.
//!
//! Uploaded files and feed messages wrap their rows in different envelopes:
//! a bare array, `{"products": [...]}`, or an export with metadata beside the
//! rows. [`locate_records`] finds the rows; [`normalize_batch`] turns each
//! one into a [`Product`].

use serde_json::Value;

use sellerdesk_core::Product;

use crate::error::IngestError;
use crate::normalize::{normalize_record, NormalizeOptions};

/// Envelope fields checked, in order, before falling back to the first
/// array-valued field.
pub const WELL_KNOWN_COLLECTION_KEYS: [&str; 4] = ["products", "items", "data", "records"];

/// Finds the list of raw records inside a decoded payload.
///
/// Tried in order:
/// 1. the payload itself, when it is an array;
/// 2. an array under one of [`WELL_KNOWN_COLLECTION_KEYS`];
/// 3. the first array-valued field, in the payload's own key order.
///
/// # Errors
///
/// Returns [`IngestError::NoTabularData`] when none of these yields an array.
pub fn locate_records(payload: &Value) -> Result<&[Value], IngestError> {
    match payload {
        Value::Array(items) => Ok(items.as_slice()),
        Value::Object(map) => {
            let named = WELL_KNOWN_COLLECTION_KEYS.iter().find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_array)
                    .map(|items| (*key, items))
            });
            let (key, items) = named
                .or_else(|| {
                    map.iter().find_map(|(key, value)| {
                        value.as_array().map(|items| (key.as_str(), items))
                    })
                })
                .ok_or(IngestError::NoTabularData)?;
            tracing::debug!(key, rows = items.len(), "located record array in payload");
            Ok(items.as_slice())
        }
        _ => Err(IngestError::NoTabularData),
    }
}

/// Locates the records in `payload` and normalizes each of them.
///
/// Output order matches input order. Duplicate ids are kept; merging into an
/// existing catalog is the caller's concern.
///
/// # Errors
///
/// Returns [`IngestError::NoTabularData`] when the payload holds no array.
/// Individual records never fail.
pub fn normalize_batch(
    payload: &Value,
    opts: &NormalizeOptions,
) -> Result<Vec<Product>, IngestError> {
    let records = locate_records(payload)?;
    let products: Vec<Product> = records
        .iter()
        .map(|raw| normalize_record(raw, opts))
        .collect();
    tracing::info!(count = products.len(), "normalized product batch");
    Ok(products)
}

/// Decodes JSON text and normalizes the batch it contains.
///
/// # Errors
///
/// Returns [`IngestError::Deserialize`] when `text` is not valid JSON, and
/// [`IngestError::NoTabularData`] as for [`normalize_batch`].
pub fn normalize_json_str(
    text: &str,
    opts: &NormalizeOptions,
) -> Result<Vec<Product>, IngestError> {
    let payload: Value =
        serde_json::from_str(text).map_err(|source| IngestError::Deserialize {
            context: "product payload".to_string(),
            source,
        })?;
    normalize_batch(&payload, opts)
}
