//! Execution-log sanitisation and hashing.

use eval_canon::to_canonical_bytes;
use eval_field::{sha256_field, Field};
use eval_types::ToolCallRecord;
use serde_json::Value;

/// Substrings that, if contained in a (lower-cased) key, mark it volatile.
const VOLATILE_SUBSTRINGS: &[&str] = &["token", "timestamp", "latency", "duration"];

/// Keys that are volatile only on an exact (lower-cased) match.
const VOLATILE_EXACT: &[&str] = &[
    "uuid",
    "sessionid",
    "session_id",
    "tooluseid",
    "idempotencykey",
    "traceid",
    "trace_id",
];

fn is_volatile_key(key: &str) -> bool {
    let lower = key.to_lowercase();
    VOLATILE_SUBSTRINGS.iter().any(|needle| lower.contains(needle))
        || VOLATILE_EXACT.contains(&lower.as_str())
}

fn strip_volatile(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = serde_json::Map::new();
            for (key, val) in map {
                if is_volatile_key(key) {
                    continue;
                }
                out.insert(key.clone(), strip_volatile(val));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(strip_volatile).collect()),
        other => other.clone(),
    }
}

/// Strips every volatile field from a single tool-call record, recursively,
/// including inside its `input`/`output` payloads and `metadata` map.
#[must_use]
pub fn sanitise_tool_call(record: &ToolCallRecord) -> ToolCallRecord {
    let metadata = record
        .metadata
        .iter()
        .filter(|(key, _)| !is_volatile_key(key))
        .map(|(key, value)| (key.clone(), strip_volatile(value)))
        .collect();

    ToolCallRecord {
        name: record.name.clone(),
        input: strip_volatile(&record.input),
        output: strip_volatile(&record.output),
        metadata,
    }
}

/// Sanitises every record in `transcript`, preserving call order (order is
/// part of the commitment: it records *when* each tool was invoked).
#[must_use]
pub fn sanitise_transcript(transcript: &[ToolCallRecord]) -> Vec<ToolCallRecord> {
    transcript.iter().map(sanitise_tool_call).collect()
}

/// Hashes the sanitised, canonicalised transcript.
#[must_use]
pub fn execution_logs_hash(transcript: &[ToolCallRecord]) -> Field {
    let sanitised = sanitise_transcript(transcript);
    sha256_field(&to_canonical_bytes(&sanitised))
}
