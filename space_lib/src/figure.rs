//! Plotly figure encoding.
//!
//! Packages a [`Scene`] as the two-trace figure the browser side hands to
//! `Plotly.newPlot`: one scatter3d lines trace for the edges (with `null`
//! separators between segments) and one scatter3d markers trace for the
//! nodes, plus the fixed layout (hidden legend, bare axes, zero margins).

use crate::render::Scene;
use serde_json::{json, Value};

pub const EDGE_COLOR: &str = "rgba(128, 128, 128, 0.8)";
pub const EDGE_WIDTH: f64 = 1.0;
pub const MARKER_LINE_COLOR: &str = "rgba(217, 217, 217, 0.14)";
pub const MARKER_LINE_WIDTH: f64 = 0.5;
pub const COLORSCALE: &str = "Viridis";

/// Encode the scene as a Plotly figure value.
pub fn to_value(scene: &Scene) -> Value {
    let mut edge_x: Vec<Option<f64>> = Vec::with_capacity(scene.edges.len() * 3);
    let mut edge_y: Vec<Option<f64>> = Vec::with_capacity(scene.edges.len() * 3);
    let mut edge_z: Vec<Option<f64>> = Vec::with_capacity(scene.edges.len() * 3);
    for segment in &scene.edges {
        edge_x.extend([Some(segment.from[0]), Some(segment.to[0]), None]);
        edge_y.extend([Some(segment.from[1]), Some(segment.to[1]), None]);
        edge_z.extend([Some(segment.from[2]), Some(segment.to[2]), None]);
    }

    let node_x: Vec<f64> = scene.nodes.iter().map(|n| n.x).collect();
    let node_y: Vec<f64> = scene.nodes.iter().map(|n| n.y).collect();
    let node_z: Vec<f64> = scene.nodes.iter().map(|n| n.z).collect();
    let sizes: Vec<f64> = scene.nodes.iter().map(|n| n.size).collect();
    let colors: Vec<&str> = scene.nodes.iter().map(|n| n.color).collect();
    let hover: Vec<&str> = scene.nodes.iter().map(|n| n.hover.as_str()).collect();

    json!({
        "data": [
            {
                "type": "scatter3d",
                "mode": "lines",
                "x": edge_x,
                "y": edge_y,
                "z": edge_z,
                "line": { "width": EDGE_WIDTH, "color": EDGE_COLOR },
                "hoverinfo": "none"
            },
            {
                "type": "scatter3d",
                "mode": "markers",
                "x": node_x,
                "y": node_y,
                "z": node_z,
                "marker": {
                    "size": sizes,
                    "color": colors,
                    "colorscale": COLORSCALE,
                    "line": { "width": MARKER_LINE_WIDTH, "color": MARKER_LINE_COLOR }
                },
                "hoverinfo": "text",
                "text": hover
            }
        ],
        "layout": {
            "title": scene.title,
            "showlegend": false,
            "scene": {
                "xaxis": { "showbackground": false },
                "yaxis": { "showbackground": false },
                "zaxis": { "showbackground": false }
            },
            "margin": { "b": 0, "l": 0, "r": 0, "t": 0 }
        }
    })
}
