use crate::billing::CalculationRecord;

/// Number of records shown as "recent"
pub const RECENT_LIMIT: usize = 5;

/// Append-only history of saved calculations, owned by one session
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    records: Vec<CalculationRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a saved calculation
    pub fn record(&mut self, record: CalculationRecord) {
        self.records.push(record);
    }

    /// The last [`RECENT_LIMIT`] records, newest first
    pub fn recent(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.recent_n(RECENT_LIMIT)
    }

    /// The last `n` records, newest first
    pub fn recent_n(&self, n: usize) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter().rev().take(n)
    }

    /// All records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
