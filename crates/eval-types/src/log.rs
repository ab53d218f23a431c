//! Execution-transcript capture.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single logged tool invocation made during agent execution. The raw form
/// fed to [`crate::methodology`]-style sanitisation before it is hashed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallRecord {
    /// The tool's name.
    pub name: String,
    /// The call's input payload.
    pub input: Value,
    /// The call's output payload.
    pub output: Value,
    /// Side-channel metadata (timestamps, trace ids, ...), stripped before
    /// hashing by the methodology commitment pass.
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

/// Accepts tool-call records as an agent executes. The orchestrator's
/// default sink accumulates records for later sanitisation and hashing.
pub trait LogSink: Send {
    /// Records one tool invocation.
    fn log_tool_call(&mut self, record: ToolCallRecord);
}

/// A [`LogSink`] that simply accumulates every record in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLogSink {
    records: Vec<ToolCallRecord>,
}

impl InMemoryLogSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated records, in the order they were logged.
    #[must_use]
    pub fn records(&self) -> &[ToolCallRecord] {
        &self.records
    }

    /// Consumes the sink, returning its accumulated records.
    #[must_use]
    pub fn into_records(self) -> Vec<ToolCallRecord> {
        self.records
    }
}

impl LogSink for InMemoryLogSink {
    fn log_tool_call(&mut self, record: ToolCallRecord) {
        self.records.push(record);
    }
}
