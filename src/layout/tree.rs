use std::collections::{HashMap, HashSet};

use crate::ir::FlatFeature;

use super::types::{LayoutError, LayoutWarning};

/// Arena-backed feature tree. All nodes are owned by the `nodes` vector;
/// parent/child links are plain indices into it.
#[derive(Debug)]
pub(super) struct FeatureTree {
    nodes: Vec<TreeNode>,
    root: usize,
}

#[derive(Debug)]
pub(super) struct TreeNode {
    pub(super) id: String,
    pub(super) name: String,
    pub(super) parent: Option<usize>,
    pub(super) children: Vec<usize>,
}

impl FeatureTree {
    /// Build the tree from the flat parent-pointer list.
    ///
    /// Root policy: a node with no `parent_id` is a root candidate; the first
    /// candidate in input order wins and any further candidate is reported as
    /// a [`LayoutWarning::MultipleRoots`] and left unattached. A non-null
    /// `parent_id` that does not name another input node is a hard error, not
    /// a root candidate. Duplicate ids are caller error: the lookup map keeps
    /// the last record.
    pub(super) fn build(
        flat: &[FlatFeature],
    ) -> Result<(Self, Vec<LayoutWarning>), LayoutError> {
        let mut nodes: Vec<TreeNode> = Vec::with_capacity(flat.len());
        let mut index_of: HashMap<&str, usize> = HashMap::with_capacity(flat.len());
        for (index, record) in flat.iter().enumerate() {
            nodes.push(TreeNode {
                id: record.id.clone(),
                name: record.name.clone(),
                parent: None,
                children: Vec::new(),
            });
            index_of.insert(record.id.as_str(), index);
        }
        let ids: HashSet<&str> = flat.iter().map(|record| record.id.as_str()).collect();

        let mut root: Option<usize> = None;
        let mut warnings = Vec::new();
        for (index, record) in flat.iter().enumerate() {
            match record.parent_id.as_deref() {
                Some(parent_id) => {
                    if !ids.contains(parent_id) {
                        return Err(LayoutError::UnknownParent {
                            node_id: record.id.clone(),
                            parent_id: parent_id.to_string(),
                        });
                    }
                    // Membership passed above, so a miss here means the
                    // registry and the id set disagree.
                    let parent = *index_of.get(parent_id).ok_or_else(|| {
                        LayoutError::Inconsistent {
                            node_id: record.id.clone(),
                            parent_id: parent_id.to_string(),
                        }
                    })?;
                    nodes[index].parent = Some(parent);
                    nodes[parent].children.push(index);
                }
                None => match root {
                    None => root = Some(index),
                    Some(kept) => warnings.push(LayoutWarning::MultipleRoots {
                        kept: nodes[kept].id.clone(),
                        ignored: record.id.clone(),
                    }),
                },
            }
        }

        let root = root.ok_or(LayoutError::NoRoot)?;
        Ok((Self { nodes, root }, warnings))
    }

    pub(super) fn root(&self) -> usize {
        self.root
    }

    pub(super) fn node(&self, index: usize) -> &TreeNode {
        &self.nodes[index]
    }
}
