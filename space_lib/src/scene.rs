//! Layout/scene building.
//!
//! Turns enriched node records and the edge list into render-ready
//! primitives: 3D marker positions with size/color/hover text, and line
//! segments between resolved endpoints. Node height and marker size both
//! derive from PRODY; nodes without a value sit on the z = 0 plane at the
//! minimum size and stay out of the min/max rescale.

use crate::enrich::EnrichedNode;
use crate::error::Diagnostic;
use crate::palette::section_color;
use crate::store::DatasetStore;
use itertools::{Itertools, MinMaxResult};
use serde::Serialize;
use std::collections::HashMap;

pub const MIN_MARKER_SIZE: f64 = 3.0;
pub const MAX_MARKER_SIZE: f64 = 15.0;

/// One renderable node: 3D position, marker size/color and hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeMarker {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub size: f64,
    pub color: &'static str,
    pub hover: String,
}

/// One renderable edge: endpoint ids plus both resolved 3D points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeSegment {
    pub source: u32,
    pub target: u32,
    pub from: [f64; 3],
    pub to: [f64; 3],
}

/// Rescale one PRODY value into the marker size range. Pure in its three
/// inputs; equal bounds fall back to the minimum instead of dividing by
/// zero.
pub fn scale_marker_size(prody: f64, min_prody: f64, max_prody: f64) -> f64 {
    if max_prody <= min_prody {
        return MIN_MARKER_SIZE;
    }
    let scaled = MIN_MARKER_SIZE
        + (prody - min_prody) / (max_prody - min_prody) * (MAX_MARKER_SIZE - MIN_MARKER_SIZE);
    scaled.clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE)
}

/// Min/max over the nodes that have a PRODY value. `None` when no node has
/// one for the period.
fn prody_bounds(nodes: &[EnrichedNode]) -> Option<(f64, f64)> {
    match nodes.iter().filter_map(|n| n.prody).minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Build the node markers in enriched order.
///
/// The hover label is re-resolved from the dictionary index rather than
/// taken from the enriched record.
pub fn node_markers(
    store: &DatasetStore,
    nodes: &[EnrichedNode],
) -> (Vec<NodeMarker>, Vec<Diagnostic>) {
    let bounds = prody_bounds(nodes);
    let mut diagnostics = Vec::new();
    if let Some((min_prody, max_prody)) = bounds {
        if max_prody <= min_prody {
            tracing::warn!(value = min_prody, "degenerate PRODY scale");
            diagnostics.push(Diagnostic::DegenerateScale);
        }
    }

    let markers = nodes
        .iter()
        .map(|node| {
            let z = node.prody.unwrap_or(0.0);
            let size = match (node.prody, bounds) {
                (Some(prody), Some((min_prody, max_prody))) => {
                    scale_marker_size(prody, min_prody, max_prody)
                }
                // The rescale is undefined for nodes without a value.
                _ => MIN_MARKER_SIZE,
            };
            NodeMarker {
                id: node.id,
                x: node.x,
                y: node.y,
                z,
                size,
                color: section_color(node.section),
                hover: hover_text(store, node.id, node.x, node.y, z),
            }
        })
        .collect();

    (markers, diagnostics)
}

/// Resolve every edge against the built markers. An endpoint missing from
/// the marker set (dropped upstream by the dictionary join) skips the edge
/// with a diagnostic instead of failing the render.
pub fn edge_segments(
    store: &DatasetStore,
    markers: &[NodeMarker],
) -> (Vec<EdgeSegment>, Vec<Diagnostic>) {
    let points: HashMap<u32, [f64; 3]> = markers
        .iter()
        .map(|m| (m.id, [m.x, m.y, m.z]))
        .collect();

    let mut segments = Vec::with_capacity(store.edges().len());
    let mut diagnostics = Vec::new();
    for edge in store.edges() {
        match (points.get(&edge.source), points.get(&edge.target)) {
            (Some(&from), Some(&to)) => segments.push(EdgeSegment {
                source: edge.source,
                target: edge.target,
                from,
                to,
            }),
            _ => {
                tracing::warn!(
                    source = edge.source,
                    target = edge.target,
                    "edge endpoint missing, edge skipped"
                );
                diagnostics.push(Diagnostic::DanglingEdge {
                    source: edge.source,
                    target: edge.target,
                });
            }
        }
    }

    (segments, diagnostics)
}

fn hover_text(store: &DatasetStore, id: u32, x: f64, y: f64, z: f64) -> String {
    let mut text = format!("Node: {id}<br>X: {x:.2}<br>Y: {y:.2}<br>Z: {z:.2}");
    if let Some(label) = store.product(id).and_then(|p| p.label.as_deref()) {
        text.push_str(&format!("<br>Product: {label}"));
    }
    text
}
