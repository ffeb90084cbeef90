//! Identifier normalization.
//!
//! Manga and chapter ids are opaque strings, but some sources serialize a
//! JSON object into the id (`{"post":"123","slug":"ch-1"}`), and the same
//! object may come back with its keys in a different order. Presence checks
//! compare ids through an [`IdNormalizer`] chosen per source.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Maps an opaque id to the key used for equality checks.
pub trait IdNormalizer: Send + Sync {
    /// Produce the comparison key for `raw`.
    fn normalize(&self, raw: &str) -> String;
}

/// Compares ids as raw strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawIdNormalizer;

impl IdNormalizer for RawIdNormalizer {
    fn normalize(&self, raw: &str) -> String {
        raw.to_string()
    }
}

/// Canonicalizes ids that hold a JSON object or array.
///
/// Structured ids are parsed and re-serialized with keys sorted at every
/// level. Anything else, including ids that happen to parse as a JSON
/// scalar such as `"123"`, is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredIdNormalizer;

impl IdNormalizer for StructuredIdNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
            return raw.to_string();
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => {
                let mut out = String::with_capacity(trimmed.len());
                write_canonical(&value, &mut out);
                out
            }
            _ => raw.to_string(),
        }
    }
}

/// Serialize `value` with object keys sorted.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(&map[key.as_str()], out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Per-source registry of id normalizers.
///
/// Sources without an explicit entry use the default, which is
/// [`StructuredIdNormalizer`] unless overridden.
#[derive(Clone)]
pub struct IdNormalizers {
    default: Arc<dyn IdNormalizer>,
    per_source: HashMap<String, Arc<dyn IdNormalizer>>,
}

impl IdNormalizers {
    /// Create a registry with the given default normalizer.
    pub fn new(default: Arc<dyn IdNormalizer>) -> Self {
        Self {
            default,
            per_source: HashMap::new(),
        }
    }

    /// Register a normalizer for one source.
    #[must_use]
    pub fn with_source(mut self, source_id: impl Into<String>, normalizer: Arc<dyn IdNormalizer>) -> Self {
        self.per_source.insert(source_id.into(), normalizer);
        self
    }

    /// Normalizer to use for `source_id`.
    pub fn for_source(&self, source_id: &str) -> &dyn IdNormalizer {
        self.per_source
            .get(source_id)
            .unwrap_or(&self.default)
            .as_ref()
    }
}

impl Default for IdNormalizers {
    fn default() -> Self {
        Self::new(Arc::new(StructuredIdNormalizer))
    }
}

impl std::fmt::Debug for IdNormalizers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sources: Vec<&String> = self.per_source.keys().collect();
        sources.sort();
        f.debug_struct("IdNormalizers")
            .field("overridden_sources", &sources)
            .finish_non_exhaustive()
    }
}
