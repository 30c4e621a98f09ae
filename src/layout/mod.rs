//! Automatic layout for cardinality-based feature models.
//!
//! The entry points take a flat parent-pointer node list and return absolute
//! positions, computed in three passes over an arena-backed tree: depth
//! assignment (top-down), contour-based shift computation (bottom-up, see
//! [`contour`]), and horizontal placement (top-down).

mod contour;
mod tree;
pub(crate) mod types;

pub use types::{LayoutError, LayoutResult, LayoutWarning, Point};

use std::collections::{BTreeMap, HashMap};

use crate::config::LayoutConfig;
use crate::ir::FlatFeature;

use tree::FeatureTree;

/// Lay out a feature tree with the default constants, capping each node's
/// rendered half-width at `max_node_width / 2`.
pub fn layout_feature_model(
    flat: &[FlatFeature],
    max_node_width: f32,
) -> Result<LayoutResult, LayoutError> {
    let config = LayoutConfig {
        max_node_width,
        ..LayoutConfig::default()
    };
    layout_with_config(flat, &config)
}

/// Config-driven variant of [`layout_feature_model`].
///
/// Every input id is present in the returned position map. Nodes unreachable
/// from the chosen root (the subtrees of ignored extra roots) keep the zeroed
/// default position; the accompanying warnings say which those are.
pub fn layout_with_config(
    flat: &[FlatFeature],
    config: &LayoutConfig,
) -> Result<LayoutResult, LayoutError> {
    let (tree, warnings) = FeatureTree::build(flat)?;

    let mut positions: BTreeMap<String, Point> = flat
        .iter()
        .map(|record| (record.id.clone(), Point::default()))
        .collect();
    let mut shift: HashMap<String, f32> = HashMap::with_capacity(flat.len());

    assign_depths(&tree, tree.root(), 0, config, &mut positions);
    contour::compute_shifts(&tree, tree.root(), config, &mut shift);
    assign_x(&tree, tree.root(), config, &shift, &mut positions)?;

    Ok(LayoutResult {
        positions,
        warnings,
    })
}

/// Top-down pass: vertical position is a pure function of depth.
fn assign_depths(
    tree: &FeatureTree,
    node: usize,
    depth: usize,
    config: &LayoutConfig,
    positions: &mut BTreeMap<String, Point>,
) {
    if let Some(point) = positions.get_mut(tree.node(node).id.as_str()) {
        point.y = config.y_base + depth as f32 * config.y_spacing;
    }
    for &child in &tree.node(node).children {
        assign_depths(tree, child, depth + 1, config, positions);
    }
}

/// Top-down pass: accumulate the per-child shifts into absolute x coordinates.
/// The parent-position check cannot fire under pre-order traversal from the
/// single built root; it guards the traversal invariant all the same.
fn assign_x(
    tree: &FeatureTree,
    node: usize,
    config: &LayoutConfig,
    shift: &HashMap<String, f32>,
    positions: &mut BTreeMap<String, Point>,
) -> Result<(), LayoutError> {
    let id = tree.node(node).id.as_str();
    let x = match tree.node(node).parent {
        None => config.x_base,
        Some(parent) => {
            let parent_id = tree.node(parent).id.as_str();
            let parent_x = positions.get(parent_id).map(|point| point.x).ok_or_else(|| {
                LayoutError::ParentNotPositioned {
                    node_id: id.to_string(),
                    parent_id: parent_id.to_string(),
                }
            })?;
            parent_x + shift.get(id).copied().unwrap_or(0.0)
        }
    };
    if let Some(point) = positions.get_mut(id) {
        point.x = x;
    }
    for &child in &tree.node(node).children {
        assign_x(tree, child, config, shift, positions)?;
    }
    Ok(())
}
