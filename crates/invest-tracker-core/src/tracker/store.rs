use tracing::debug;

use crate::error::TrackerError;
use crate::tracker::records::InvestmentRecord;
use crate::TrackerResult;

/// Ordered, in-memory list of submitted investments.
///
/// Owned by whichever layer handles submissions and passed explicitly to
/// anything that mutates it. Position is the only identity: removing an entry
/// shifts every later entry down by one.
#[derive(Debug, Clone, Default)]
pub struct InvestmentStore {
    records: Vec<InvestmentRecord>,
}

impl InvestmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record at the end and return a reference to it.
    pub fn append(&mut self, record: InvestmentRecord) -> &InvestmentRecord {
        self.records.push(record);
        debug!(len = self.records.len(), "appended investment");
        &self.records[self.records.len() - 1]
    }

    /// Remove the record at `index` (0-based). Out-of-range indices leave the
    /// store untouched.
    pub fn remove_at(&mut self, index: usize) -> TrackerResult<InvestmentRecord> {
        if index >= self.records.len() {
            return Err(TrackerError::IndexOutOfBounds {
                index,
                len: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        debug!(index, len = self.records.len(), "removed investment");
        Ok(removed)
    }

    /// Current records in insertion order.
    pub fn list(&self) -> &[InvestmentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&InvestmentRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
