//! Immutable in-memory dataset store.
//!
//! Holds the three flat tables (node positions, edge list, HS4 product
//! dictionary) plus one PRODY table per period. Built once at startup and
//! passed by reference into every render; nothing mutates it afterwards.

use crate::records::{EdgeRecord, MetricRow, NodePosition, ProductEntry};
use std::collections::{BTreeMap, HashMap};

/// Periods shipped with the exported datasets.
pub const PERIODS: [u8; 5] = [0, 1, 2, 3, 4];

/// The loaded datasets with lookup indexes built at construction time.
///
/// Joins against the dictionary and the metric tables are plain map lookups;
/// keys are assumed unique per table and a duplicate id keeps the last row.
#[derive(Debug)]
pub struct DatasetStore {
    positions: Vec<NodePosition>,
    edges: Vec<EdgeRecord>,
    dictionary: HashMap<u32, ProductEntry>,
    metrics: BTreeMap<u8, HashMap<u32, f64>>,
}

impl DatasetStore {
    pub fn new(
        positions: Vec<NodePosition>,
        edges: Vec<EdgeRecord>,
        dictionary: Vec<ProductEntry>,
        metrics: BTreeMap<u8, Vec<MetricRow>>,
    ) -> Self {
        let dictionary = dictionary
            .into_iter()
            .map(|entry| (entry.id, entry))
            .collect();
        let metrics = metrics
            .into_iter()
            .map(|(period, rows)| {
                (
                    period,
                    rows.into_iter().map(|row| (row.id, row.prody)).collect(),
                )
            })
            .collect();

        Self {
            positions,
            edges,
            dictionary,
            metrics,
        }
    }

    /// Node position rows in file order.
    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    /// Edge rows in file order.
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Dictionary lookup by HS4 product code.
    pub fn product(&self, id: u32) -> Option<&ProductEntry> {
        self.dictionary.get(&id)
    }

    /// PRODY table for a period, `None` when no table was loaded for it.
    pub fn metrics_for(&self, period: u8) -> Option<&HashMap<u32, f64>> {
        self.metrics.get(&period)
    }

    /// Loaded periods in ascending order.
    pub fn periods(&self) -> Vec<u8> {
        self.metrics.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.positions.len()
    }
}
