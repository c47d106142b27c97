//! Join/enrich stage.
//!
//! Produces one record per node by joining the position table with the
//! product dictionary (inner) and the selected period's PRODY table
//! (left-outer). Both joins are indexed lookups against the store.

use crate::error::{Diagnostic, SceneError};
use crate::store::DatasetStore;

/// One node after enrichment: base coordinates plus everything the joins
/// contributed. `prody` stays `None` when the period table has no row for
/// the node or the stored value is not finite.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedNode {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub section: Option<u32>,
    pub label: Option<String>,
    pub prody: Option<f64>,
}

/// Enrichment result: surviving nodes in position-table order plus one
/// diagnostic per node the inner join dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedNodes {
    pub nodes: Vec<EnrichedNode>,
    pub dropped: Vec<Diagnostic>,
}

/// Run both joins for `period`. Fails only when no metrics table is loaded
/// for the period; dictionary misses are dropped and recorded, never fatal.
pub fn enrich(store: &DatasetStore, period: u8) -> Result<EnrichedNodes, SceneError> {
    let metrics = store
        .metrics_for(period)
        .ok_or(SceneError::UnknownPeriod(period))?;

    let mut nodes = Vec::with_capacity(store.node_count());
    let mut dropped = Vec::new();
    for position in store.positions() {
        let Some(product) = store.product(position.id) else {
            tracing::warn!(node = position.id, "no dictionary entry, node dropped");
            dropped.push(Diagnostic::MissingJoinKey { node: position.id });
            continue;
        };

        nodes.push(EnrichedNode {
            id: position.id,
            x: position.x,
            y: position.y,
            section: product.section,
            label: product.label.clone(),
            // NaN and infinite values read as absent, same as a missing row.
            prody: metrics
                .get(&position.id)
                .copied()
                .filter(|prody| prody.is_finite()),
        });
    }

    Ok(EnrichedNodes { nodes, dropped })
}
