use std::collections::HashMap;

use super::snapshot::{ProcessAggregate, RankedSnapshot};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One live process as seen by a sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessSample {
    pub name: String,
    pub resident_bytes: u64,
}

impl ProcessSample {
    pub fn new(name: impl Into<String>, resident_bytes: u64) -> Self {
        Self {
            name: name.into(),
            resident_bytes,
        }
    }
}

/// Sums resident memory per process name and ranks the totals.
///
/// Groups keep the order in which their name was first seen, and the sort is
/// stable, so equal totals rank in first-seen order.
pub fn aggregate_by_name(samples: &[ProcessSample]) -> RankedSnapshot {
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(samples.len());
    let mut groups: Vec<(&str, u64)> = Vec::new();

    for sample in samples {
        match slots.get(sample.name.as_str()) {
            Some(&slot) => {
                let total = &mut groups[slot].1;
                *total = total.saturating_add(sample.resident_bytes);
            }
            None => {
                slots.insert(sample.name.as_str(), groups.len());
                groups.push((sample.name.as_str(), sample.resident_bytes));
            }
        }
    }

    let mut entries: Vec<ProcessAggregate> = groups
        .into_iter()
        .map(|(name, bytes)| ProcessAggregate {
            name: name.to_string(),
            total_memory_mb: bytes as f64 / BYTES_PER_MB,
        })
        .collect();

    entries.sort_by(|a, b| b.total_memory_mb.total_cmp(&a.total_memory_mb));

    RankedSnapshot::from_ranked(entries)
}
