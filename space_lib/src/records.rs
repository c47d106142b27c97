use serde::{Deserialize, Serialize};

/// One row of the node position table. Column names follow the exported
/// network layout files (`nodes__id`, `nodes__x`, `nodes__y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    #[serde(rename = "nodes__id")]
    pub id: u32,
    #[serde(rename = "nodes__x")]
    pub x: f64,
    #[serde(rename = "nodes__y")]
    pub y: f64,
}

/// One row of the edge list. Strength is parsed and carried but only edge
/// presence is mapped visually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "edges__source")]
    pub source: u32,
    #[serde(rename = "edges__target")]
    pub target: u32,
    #[serde(rename = "edges__strength")]
    pub strength: f64,
}

/// One entry of the HS4 product dictionary. Label and section can be blank
/// in the source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    #[serde(rename = "HS4 ID")]
    pub id: u32,
    #[serde(rename = "HS4")]
    pub label: Option<String>,
    #[serde(rename = "Section ID")]
    pub section: Option<u32>,
}

/// One row of a per-period PRODY table. The source files carry more columns;
/// only the key and the metric are bound here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRow {
    #[serde(rename = "HS4 ID")]
    pub id: u32,
    #[serde(rename = "PRODY")]
    pub prody: f64,
}
