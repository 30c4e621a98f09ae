use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Final position of a node, in the same coordinate space the editor renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Output of a layout call: one position per input id, plus any non-fatal
/// findings collected along the way.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub positions: BTreeMap<String, Point>,
    pub warnings: Vec<LayoutWarning>,
}

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("no root feature found (expected a node with null parentId)")]
    NoRoot,
    #[error("unknown parent \"{parent_id}\" referenced by feature \"{node_id}\"")]
    UnknownParent { node_id: String, parent_id: String },
    #[error("feature registry lost parent \"{parent_id}\" of feature \"{node_id}\"")]
    Inconsistent { node_id: String, parent_id: String },
    #[error("parent \"{parent_id}\" of feature \"{node_id}\" has no position yet")]
    ParentNotPositioned { node_id: String, parent_id: String },
}

/// Non-fatal structural findings. These ride along in the [`LayoutResult`];
/// the library never prints them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutWarning {
    MultipleRoots { kept: String, ignored: String },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutWarning::MultipleRoots { kept, ignored } => write!(
                f,
                "multiple root features found: keeping \"{kept}\", ignoring \"{ignored}\""
            ),
        }
    }
}
