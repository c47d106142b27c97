use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use thiserror::Error;

/// Hard failures of the render pipeline. Everything else that can go wrong
/// during a render is downgraded to a [`Diagnostic`] and the scene is still
/// produced.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown period {0}: no metrics table loaded for it")]
    UnknownPeriod(u8),
}

/// Non-fatal conditions observed while building a scene. Each one is logged
/// when it occurs and recorded on the finished scene so callers can inspect
/// what was dropped or degraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Diagnostic {
    /// A node from the position table has no product dictionary entry; the
    /// inner join drops it rather than failing the render.
    MissingJoinKey { node: u32 },

    /// An edge references a node that is not in the enriched set; the edge
    /// is skipped instead of failing the render.
    DanglingEdge { source: u32, target: u32 },

    /// Every present PRODY value is equal, so the linear rescale is
    /// undefined; marker sizes fall back to the scale minimum.
    DegenerateScale,
}

// `source` names an edge endpoint, which error derives would treat as an
// error cause, so Display is written by hand.
impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MissingJoinKey { node } => {
                write!(f, "node {node} has no product dictionary entry, dropped")
            }
            Self::DanglingEdge { source, target } => {
                write!(
                    f,
                    "edge {source} -> {target} references a missing node, skipped"
                )
            }
            Self::DegenerateScale => write!(
                f,
                "all PRODY values are equal, marker sizes fall back to the minimum"
            ),
        }
    }
}

impl std::error::Error for Diagnostic {}
