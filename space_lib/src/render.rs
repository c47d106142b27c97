//! Presentation adapter: the one operation the UI layer consumes.
//!
//! `render` is a pure function of the store and the selected period; it
//! recomputes the whole scene on every call and never touches shared state,
//! so each request is independently retryable.

use crate::enrich;
use crate::error::{Diagnostic, SceneError};
use crate::scene::{self, EdgeSegment, NodeMarker};
use crate::store::DatasetStore;
use serde::Serialize;

/// A finished scene for one period: renderable primitives plus metadata and
/// the non-fatal diagnostics collected along the way. Rebuilt from scratch
/// per render; nothing persists across rebuilds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub period: u8,
    pub title: String,
    pub nodes: Vec<NodeMarker>,
    pub edges: Vec<EdgeSegment>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build the scene for `period`. The only hard failure is an unknown
/// period; everything else degrades into diagnostics on the scene.
pub fn render(store: &DatasetStore, period: u8) -> Result<Scene, SceneError> {
    let enriched = enrich::enrich(store, period)?;
    let (nodes, scale_diagnostics) = scene::node_markers(store, &enriched.nodes);
    let (edges, edge_diagnostics) = scene::edge_segments(store, &nodes);

    let mut diagnostics = enriched.dropped;
    diagnostics.extend(scale_diagnostics);
    diagnostics.extend(edge_diagnostics);

    tracing::debug!(
        period,
        nodes = nodes.len(),
        edges = edges.len(),
        diagnostics = diagnostics.len(),
        "scene built"
    );

    Ok(Scene {
        period,
        title: format!("3D Network Visualization for Period {period}"),
        nodes,
        edges,
        diagnostics,
    })
}
