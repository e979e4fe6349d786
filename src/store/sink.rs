//! Destinations for transition records.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// One observed dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// 1-based position of the dispatch as seen by the logger.
    pub sequence: u64,
    /// Intent kind, e.g. `INCREMENT_ENTHUSIASM`.
    pub action: String,
    /// Debug rendering of the state after the reducer ran.
    pub state: String,
}

pub trait TransitionSink: Send {
    fn name(&self) -> &'static str;

    fn record(&self, record: &TransitionRecord) -> io::Result<()>;
}

/// Writes each record as one JSON line.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> TransitionSink for JsonLinesSink<W> {
    fn name(&self) -> &'static str {
        "json-lines"
    }

    fn record(&self, record: &TransitionRecord) -> io::Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        let mut writer = self.writer.lock();
        writer.write_all(&line)?;
        writer.flush()
    }
}

/// Keeps the most recent records in memory.
///
/// Clones share the same buffer, so one clone can be handed to the logger
/// while another is read by the UI.
#[derive(Clone)]
pub struct MemorySink {
    inner: Arc<Mutex<VecDeque<TransitionRecord>>>,
    capacity: usize,
}

impl MemorySink {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Oldest first.
    pub fn records(&self) -> Vec<TransitionRecord> {
        self.inner.lock().iter().cloned().collect()
    }

    /// Up to `count` records, newest first.
    pub fn latest(&self, count: usize) -> Vec<TransitionRecord> {
        self.inner.lock().iter().rev().take(count).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl TransitionSink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn record(&self, record: &TransitionRecord) -> io::Result<()> {
        let mut records = self.inner.lock();
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sequence: u64) -> TransitionRecord {
        TransitionRecord {
            sequence,
            action: "INCREMENT_ENTHUSIASM".to_string(),
            state: format!("level {sequence}"),
        }
    }

    #[test]
    fn memory_sink_drops_oldest_when_full() {
        let sink = MemorySink::new(2);
        for seq in 1..=3 {
            sink.record(&record(seq)).unwrap();
        }
        let sequences: Vec<u64> = sink.records().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![2, 3]);
    }

    #[test]
    fn memory_sink_latest_is_newest_first() {
        let sink = MemorySink::new(8);
        for seq in 1..=4 {
            sink.record(&record(seq)).unwrap();
        }
        let sequences: Vec<u64> = sink.latest(2).iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![4, 3]);
    }

    #[test]
    fn memory_sink_clones_share_buffer() {
        let sink = MemorySink::new(4);
        let reader = sink.clone();
        sink.record(&record(1)).unwrap();
        assert_eq!(reader.len(), 1);
        assert!(!reader.is_empty());
    }

    #[test]
    fn json_lines_sink_writes_one_line_per_record() {
        let sink = JsonLinesSink::new(Vec::new());
        sink.record(&record(1)).unwrap();
        sink.record(&record(2)).unwrap();
        let written = String::from_utf8(sink.writer.into_inner()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: TransitionRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed, record(2));
    }
}
