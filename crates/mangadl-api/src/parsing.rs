//! Response decoding.
//!
//! The content API is inconsistent about its response shape: some endpoints
//! return a bare list, most wrap the payload in `{success, data, meta}`, and
//! failures come back as `{success: false, error}` with a 200 status.
//! [`decode_envelope`] folds all of these into one [`Payload`] so nothing
//! past this module sees the difference.
//!
//! Record parsing is lenient: ids may arrive as strings, numbers or objects
//! (a structured id is kept as its JSON text), numbers may arrive as strings,
//! and items without an id are skipped.

use mangadl_core::{ChapterRecord, JobHandle, JobSnapshot, JobStatus, MangaRecord};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ApiError, ApiResult};

// ============================================================================
// Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Envelope {
    List(Vec<Value>),
    Wrapped(Wrapped),
    Bare(Map<String, Value>),
}

#[derive(Debug, Deserialize)]
struct Wrapped {
    success: bool,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    meta: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

/// Normalized response payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    /// The record or list the endpoint returns
    pub data: Value,
    /// `meta.totalPages`, when present
    pub total_pages: Option<u32>,
}

/// Decode any of the API's response shapes.
pub fn decode_envelope(raw: Value) -> ApiResult<Payload> {
    match serde_json::from_value::<Envelope>(raw)? {
        Envelope::List(items) => Ok(Payload {
            data: Value::Array(items),
            total_pages: None,
        }),
        Envelope::Wrapped(wrapped) if !wrapped.success => Err(ApiError::ApiReported {
            message: error_message(wrapped.error.as_ref())
                .unwrap_or_else(|| "request failed".to_string()),
        }),
        Envelope::Wrapped(wrapped) => Ok(Payload {
            total_pages: wrapped
                .meta
                .as_ref()
                .and_then(|m| m.get("totalPages"))
                .and_then(as_u32),
            data: wrapped.data,
        }),
        Envelope::Bare(map) => Ok(Payload {
            data: Value::Object(map),
            total_pages: None,
        }),
    }
}

/// Extract a message from an `error` field that may be a string or `{message}`.
fn error_message(error: Option<&Value>) -> Option<String> {
    match error? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(obj) => obj
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .or_else(|| Some(Value::Object(obj.clone()).to_string())),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Opaque id: strings as-is, anything else as its JSON text.
fn id_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn str_of<'a>(item: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| item.get(*key).and_then(Value::as_str))
}

fn f64_of(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn as_u32(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn items_of<'a>(data: &'a Value, what: &str) -> ApiResult<&'a [Value]> {
    data.as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ApiError::invalid_response(format!("expected a list of {what}")))
}

// ============================================================================
// Records
// ============================================================================

fn manga_from(item: &Value, source_id: &str) -> Option<MangaRecord> {
    let id = id_of(item.get("id"))?;
    let title = str_of(item, &["title", "name"]).unwrap_or_default();
    let source = str_of(item, &["sourceId"]).unwrap_or(source_id);
    Some(MangaRecord::new(id, title.trim(), source))
}

/// Parse a list of manga. Items without an id are dropped.
pub fn parse_manga_list(data: &Value, source_id: &str) -> ApiResult<Vec<MangaRecord>> {
    let items = items_of(data, "manga")?;
    let records: Vec<MangaRecord> = items
        .iter()
        .filter_map(|item| manga_from(item, source_id))
        .collect();
    if records.len() < items.len() {
        debug!(
            dropped = items.len() - records.len(),
            "Skipped manga entries without an id"
        );
    }
    Ok(records)
}

/// Parse a single manga detail record.
pub fn parse_manga(data: &Value, source_id: &str) -> ApiResult<MangaRecord> {
    manga_from(data, source_id).ok_or_else(|| ApiError::invalid_response("manga without id"))
}

/// Parse a chapter list. Items without an id are dropped.
pub fn parse_chapter_list(data: &Value) -> ApiResult<Vec<ChapterRecord>> {
    let items = items_of(data, "chapters")?;
    Ok(items
        .iter()
        .filter_map(|item| {
            let id = id_of(item.get("id"))?;
            let title = str_of(item, &["title", "name"]).unwrap_or_default();
            let chapter = ChapterRecord::new(id, title);
            Some(match f64_of(item.get("number")) {
                Some(number) => chapter.with_number(number),
                None => chapter,
            })
        })
        .collect())
}

/// Parse the response to `POST /downloads`.
pub fn parse_job_handle(data: &Value) -> ApiResult<JobHandle> {
    let id = id_of(data.get("id"))
        .ok_or_else(|| ApiError::invalid_response("download job without id"))?;
    let status = str_of(data, &["status"]).map_or(JobStatus::Queued, JobStatus::parse);
    let handle = JobHandle::new(id, status);
    Ok(match error_message(data.get("error")) {
        Some(error) => handle.with_error(error),
        None => handle,
    })
}

/// Parse the response to `GET /downloads/{id}`.
///
/// The body does not always repeat the id, so the requested one is used as
/// a fallback.
pub fn parse_job_snapshot(data: &Value, job_id: &str) -> ApiResult<JobSnapshot> {
    let status = str_of(data, &["status"])
        .ok_or_else(|| ApiError::invalid_response("download status without status field"))?;

    let mut snapshot = JobSnapshot::new(
        id_of(data.get("id")).unwrap_or_else(|| job_id.to_string()),
        JobStatus::parse(status),
    );
    snapshot.progress = f64_of(data.get("progress"));
    snapshot.file_location = str_of(data, &["fileUrl", "filePath"]).map(String::from);
    snapshot.page_count = data.get("pageCount").and_then(as_u32);
    snapshot.error = error_message(data.get("error"));
    Ok(snapshot)
}
