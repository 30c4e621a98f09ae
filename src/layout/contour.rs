use std::collections::HashMap;

use crate::config::LayoutConfig;

use super::tree::FeatureTree;

/// Contours are stored as difference chains: entry 0 is the subtree root's own
/// signed half-width, and the absolute horizontal extent at depth `j` below the
/// root is the prefix sum of the first `j + 1` entries. Keeping deltas instead
/// of absolutes makes splicing two chains a constant-size boundary fixup.
pub(super) type Contour = (Vec<f32>, Vec<f32>);

/// Bottom-up pass: compute the left/right silhouette of the subtree rooted at
/// `node` and record in `shift` the horizontal offset of every child relative
/// to its parent, spaced so sibling silhouettes never overlap and centered
/// under the parent.
pub(super) fn compute_shifts(
    tree: &FeatureTree,
    node: usize,
    config: &LayoutConfig,
    shift: &mut HashMap<String, f32>,
) -> Contour {
    let name_len = tree.node(node).name.chars().count() as f32;
    let left_half = (-config.text_scale * name_len)
        .max(-config.max_node_width / 2.0)
        .floor();
    let right_half = (config.text_scale * name_len)
        .min(config.max_node_width / 2.0)
        .ceil();
    let mut left = vec![left_half];
    let mut right = vec![right_half];

    let children = &tree.node(node).children;
    if children.is_empty() {
        return (left, right);
    }

    let contours: Vec<Contour> = children
        .iter()
        .map(|&child| compute_shifts(tree, child, config, shift))
        .collect();

    // Minimum separation of each child from the sibling block to its left.
    // d[0] stays zero; the whole block is re-centered afterwards.
    let mut d = vec![0.0f32; children.len()];
    let mut curr_right = contours[0].1.clone();
    let mut curr_left = contours[0].0.clone();

    for i in 1..children.len() {
        let next_left = &contours[i].0;
        let mut sum_left = 0.0f32;
        let mut sum_right = 0.0f32;
        for j in 0..curr_right.len().min(next_left.len()) {
            sum_left += next_left[j];
            sum_right += curr_right[j];
            d[i] = d[i].max(sum_right - sum_left);
        }
        d[i] += config.sibling_margin;

        // The running right silhouette becomes the new child's; levels where
        // the old one reached deeper are spliced back on, with the boundary
        // entry rebased through the accumulated sums so the deepest known
        // extent survives.
        let mut new_right = contours[i].1.clone();
        let depth_right = new_right.len();
        if curr_right.len() > depth_right {
            let boundary = -sum(&new_right) - d[i] + sum(&curr_right[..depth_right + 1]);
            new_right.push(boundary);
            new_right.extend_from_slice(&curr_right[depth_right + 1..]);
        }
        curr_right = new_right;

        // Mirror for the left silhouette, which stays anchored at the first
        // child and only grows when a later child reaches deeper.
        let depth_left = curr_left.len();
        if next_left.len() > depth_left {
            let boundary = -sum(&curr_left) + d[i] + sum(&next_left[..depth_left + 1]);
            curr_left.push(boundary);
            curr_left.extend_from_slice(&next_left[depth_left + 1..]);
        }
    }

    let total = sum(&d);
    let centering = (total / 2.0).ceil();
    let mut child_shift = vec![0.0f32; children.len()];
    let mut acc = 0.0f32;
    for (i, &child) in children.iter().enumerate() {
        acc += d[i];
        child_shift[i] = acc - centering;
        shift.insert(tree.node(child).id.clone(), child_shift[i]);
    }

    // This node's silhouette one level down starts at the first/last child's
    // own half-width, adjusted by that child's shift; deeper levels come from
    // the assembled chains.
    let last = children.len() - 1;
    left.push(child_shift[0] + contours[0].0[0] + right_half);
    left.extend_from_slice(&curr_left[1..]);
    right.push(child_shift[last] + contours[last].1[0] - right_half);
    right.extend_from_slice(&curr_right[1..]);

    (left, right)
}

fn sum(values: &[f32]) -> f32 {
    values.iter().sum()
}
