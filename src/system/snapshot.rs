/// Memory held by every process sharing one name during a single sample.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessAggregate {
    pub name: String,
    pub total_memory_mb: f64,
}

/// Aggregates ordered by memory, largest first.
///
/// Row numbers shown to the operator are 1-based positions in this sequence and
/// are only meaningful for the cycle that produced the snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RankedSnapshot {
    entries: Vec<ProcessAggregate>,
}

impl RankedSnapshot {
    /// Wraps entries that are already ranked.
    pub fn from_ranked(entries: Vec<ProcessAggregate>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a row by its displayed 1-based index.
    pub fn row(&self, index: usize) -> Option<&ProcessAggregate> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// Iterates `(row_index, aggregate)` pairs with 1-based indices.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &ProcessAggregate)> {
        self.entries.iter().enumerate().map(|(i, a)| (i + 1, a))
    }

    pub fn entries(&self) -> &[ProcessAggregate] {
        &self.entries
    }
}
