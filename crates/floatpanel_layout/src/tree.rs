//! Layout tree management

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use taffy::prelude::*;

use crate::element::ElementBounds;

new_key_type! {
    pub struct LayoutNodeId;
}

/// Maps between floatpanel node IDs and Taffy node IDs
pub struct LayoutTree {
    taffy: TaffyTree<()>,
    node_map: SlotMap<LayoutNodeId, NodeId>,
    /// Reverse mapping from Taffy NodeId to our LayoutNodeId
    reverse_map: FxHashMap<NodeId, LayoutNodeId>,
}

impl LayoutTree {
    /// Frames come back unrounded so they match paths built from the same bounds
    pub fn new() -> Self {
        let mut taffy = TaffyTree::new();
        taffy.disable_rounding();
        Self {
            taffy,
            node_map: SlotMap::with_key(),
            reverse_map: FxHashMap::default(),
        }
    }

    /// Create a new layout node with the given style
    pub fn create_node(&mut self, style: impl Into<Style>) -> LayoutNodeId {
        let taffy_node = match self.taffy.new_leaf(style.into()) {
            Ok(node) => node,
            Err(err) => {
                // The null id is ignored by every other method
                tracing::error!("failed to create layout node: {err}");
                return LayoutNodeId::default();
            }
        };
        let id = self.node_map.insert(taffy_node);
        self.reverse_map.insert(taffy_node, id);
        id
    }

    /// Set the style for a node
    pub fn set_style(&mut self, id: LayoutNodeId, style: impl Into<Style>) {
        if let Some(&taffy_node) = self.node_map.get(id) {
            let _ = self.taffy.set_style(taffy_node, style.into());
        }
    }

    /// Add a child to a parent node
    pub fn add_child(&mut self, parent: LayoutNodeId, child: LayoutNodeId) {
        if let (Some(&parent_node), Some(&child_node)) =
            (self.node_map.get(parent), self.node_map.get(child))
        {
            let _ = self.taffy.add_child(parent_node, child_node);
        }
    }

    /// Compute layout for a tree rooted at the given node
    pub fn compute_layout(&mut self, root: LayoutNodeId, available_space: Size<AvailableSpace>) {
        if let Some(&taffy_node) = self.node_map.get(root) {
            if let Err(err) = self.taffy.compute_layout(taffy_node, available_space) {
                tracing::warn!("layout computation failed: {err}");
            }
        }
    }

    /// Get the computed layout for a node
    pub fn get_layout(&self, id: LayoutNodeId) -> Option<&Layout> {
        self.node_map
            .get(id)
            .and_then(|&taffy_node| self.taffy.layout(taffy_node).ok())
    }

    /// Get the parent of a node, if it has been attached to one
    pub fn parent(&self, id: LayoutNodeId) -> Option<LayoutNodeId> {
        let &taffy_node = self.node_map.get(id)?;
        let parent = self.taffy.parent(taffy_node)?;
        self.reverse_map.get(&parent).copied()
    }

    /// Get computed layout as ElementBounds with parent offset
    pub fn get_bounds(&self, id: LayoutNodeId, parent_offset: (f32, f32)) -> Option<ElementBounds> {
        self.get_layout(id)
            .map(|layout| ElementBounds::from_layout(layout, parent_offset))
    }

    /// Get computed bounds in the coordinate space of the tree's root
    ///
    /// Walks up the parent chain accumulating each ancestor's location.
    pub fn root_bounds(&self, id: LayoutNodeId) -> Option<ElementBounds> {
        let mut offset = (0.0, 0.0);
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            let parent_of_ancestor = self.parent(ancestor);
            // The root's own location is not part of its local coordinate space
            if parent_of_ancestor.is_some() {
                let layout = self.get_layout(ancestor)?;
                offset.0 += layout.location.x;
                offset.1 += layout.location.y;
            }
            current = parent_of_ancestor;
        }
        self.get_bounds(id, offset)
    }

    /// Remove a node
    pub fn remove_node(&mut self, id: LayoutNodeId) {
        if let Some(taffy_node) = self.node_map.remove(id) {
            self.reverse_map.remove(&taffy_node);
            let _ = self.taffy.remove(taffy_node);
        }
    }

    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }
}

impl Default for LayoutTree {
    fn default() -> Self {
        Self::new()
    }
}
