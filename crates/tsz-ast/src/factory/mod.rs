//! Node factory: constructs and updates syntax nodes.
//!
//! Every kind has a `create_*` entry point that allocates through the base
//! allocator, applies the parenthesizer rules to its expression and type
//! children and computes the node's transform flags. `update_*` entry points
//! compare every field against the existing node by identity and return the
//! existing node untouched when nothing changed; otherwise they build a new
//! node and record the old one as its `original`.
//!
//! The factory owns the `NodeArena`, so input and output trees of a transform
//! share one arena.

mod clone;
pub mod converters;
mod declarations;
mod expressions;
mod jsx;
mod names;
pub mod parenthesizer;
mod statements;
pub mod transform_flags;
mod types;

use crate::base::{NodeIndex, NodeList, TextRange};
use crate::flags::{NodeFactoryFlags, NodeFlags, TransformFlags};
use crate::node::{Node, NodeArray};
use crate::node_arena::{BaseNodeFactory, NodeArena, PooledData};
use crate::syntax_kind::SyntaxKind;
use converters::{DEFAULT_NODE_CONVERTERS, NULL_NODE_CONVERTERS, NodeConverters};
use parenthesizer::{DEFAULT_PARENTHESIZER_RULES, NULL_PARENTHESIZER_RULES, ParenthesizerRules};

/// Elements for `create_node_array`: an existing list (identity preserved
/// when possible) or a fresh sequence.
#[derive(Clone, Debug)]
pub enum NodeArrayInput {
    List(NodeList),
    Nodes(Vec<NodeIndex>),
}

impl From<NodeList> for NodeArrayInput {
    fn from(list: NodeList) -> Self {
        NodeArrayInput::List(list)
    }
}

impl From<Vec<NodeIndex>> for NodeArrayInput {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeArrayInput::Nodes(nodes)
    }
}

pub struct NodeFactory {
    arena: NodeArena,
    flags: NodeFactoryFlags,
    /// Flags stamped on every new node (`SYNTHESIZED` for transform output).
    base_node_flags: NodeFlags,
    parenthesizer: &'static dyn ParenthesizerRules,
    converters: &'static dyn NodeConverters,
}

impl std::fmt::Debug for NodeFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeFactory")
            .field("flags", &self.flags)
            .field("base_node_flags", &self.base_node_flags)
            .field("nodes", &self.arena.len())
            .finish()
    }
}

impl NodeFactory {
    /// Factory for synthesized nodes (transform output).
    pub fn new(arena: NodeArena, flags: NodeFactoryFlags) -> NodeFactory {
        Self::with_base_flags(arena, flags, NodeFlags::SYNTHESIZED)
    }

    /// Factory used while building parse trees: nodes are not marked
    /// synthesized, no parenthesization, no node converters and no
    /// `original` links.
    pub fn for_parser(arena: NodeArena) -> NodeFactory {
        Self::with_base_flags(
            arena,
            NodeFactoryFlags::NO_PARENTHESIZER_RULES
                | NodeFactoryFlags::NO_NODE_CONVERTERS
                | NodeFactoryFlags::NO_ORIGINAL_NODE,
            NodeFlags::empty(),
        )
    }

    fn with_base_flags(
        arena: NodeArena,
        flags: NodeFactoryFlags,
        base_node_flags: NodeFlags,
    ) -> NodeFactory {
        let parenthesizer: &'static dyn ParenthesizerRules =
            if flags.contains(NodeFactoryFlags::NO_PARENTHESIZER_RULES) {
                &NULL_PARENTHESIZER_RULES
            } else {
                &DEFAULT_PARENTHESIZER_RULES
            };
        let converters: &'static dyn NodeConverters =
            if flags.contains(NodeFactoryFlags::NO_NODE_CONVERTERS) {
                &NULL_NODE_CONVERTERS
            } else {
                &DEFAULT_NODE_CONVERTERS
            };
        NodeFactory {
            arena,
            flags,
            base_node_flags,
            parenthesizer,
            converters,
        }
    }

    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[inline]
    pub fn arena_mut(&mut self) -> &mut NodeArena {
        &mut self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    #[inline]
    pub fn flags(&self) -> NodeFactoryFlags {
        self.flags
    }

    #[inline]
    pub fn parenthesizer(&self) -> &'static dyn ParenthesizerRules {
        self.parenthesizer
    }

    #[inline]
    pub fn converters(&self) -> &'static dyn NodeConverters {
        self.converters
    }

    // ========================================================================
    // Allocation helpers
    // ========================================================================

    #[inline]
    pub(crate) fn alloc<D: PooledData>(&mut self, kind: SyntaxKind, data: D) -> NodeIndex {
        let flags = self.base_node_flags;
        self.arena.create_base_node(kind, flags, data)
    }

    #[inline]
    pub(crate) fn alloc_token(&mut self, kind: SyntaxKind) -> NodeIndex {
        let flags = self.base_node_flags;
        self.arena.create_base_token_node(kind, flags)
    }

    /// Store the computed transform flags and return the node.
    #[inline]
    pub(crate) fn finish(&mut self, node: NodeIndex, flags: TransformFlags) -> NodeIndex {
        self.arena.set_transform_flags(node, flags);
        node
    }

    /// Add node flags (`let`/`const`, `Namespace`, ...) to a fresh node.
    #[inline]
    pub(crate) fn add_node_flags(&mut self, node: NodeIndex, flags: NodeFlags) {
        if let Some(header) = self.arena.get_mut(node) {
            header.flags |= flags;
        }
    }

    /// Copy of a node's pool entry. Panics when `node` is not one of `kinds`:
    /// updating a node through the wrong entry point is a caller bug.
    #[track_caller]
    pub(crate) fn data_of<D: PooledData>(&self, node: NodeIndex, kinds: &[SyntaxKind]) -> D {
        let Some(header) = self.arena.get(node) else {
            panic!("expected one of {kinds:?}, found a missing node");
        };
        if !kinds.contains(&header.kind) {
            panic!("expected one of {kinds:?}, found {:?}", header.kind);
        }
        match self.arena.data::<D>(header) {
            Some(data) => data.clone(),
            None => panic!("node of kind {:?} has no data", header.kind),
        }
    }

    #[inline]
    pub(crate) fn kind_of(&self, node: NodeIndex) -> Option<SyntaxKind> {
        self.arena.kind(node)
    }

    /// Finish an update: copy the text range of `original` to `updated` and,
    /// unless disabled, remember `original`.
    pub fn update(&mut self, updated: NodeIndex, original: NodeIndex) -> NodeIndex {
        if updated != original {
            if !self.flags.contains(NodeFactoryFlags::NO_ORIGINAL_NODE) {
                self.arena.set_original(updated, original);
            }
            self.set_text_range_from(updated, original);
        }
        updated
    }

    /// Copy `source`'s pos/end onto `target`.
    pub fn set_text_range_from(&mut self, target: NodeIndex, source: NodeIndex) -> NodeIndex {
        if let Some(range) = self.arena.get(source).map(Node::range) {
            self.arena.set_text_range(target, range);
        }
        target
    }

    pub fn set_text_range(&mut self, target: NodeIndex, range: TextRange) -> NodeIndex {
        self.arena.set_text_range(target, range);
        target
    }

    pub fn set_original_node(&mut self, node: NodeIndex, original: NodeIndex) -> NodeIndex {
        self.arena.set_original(node, original);
        node
    }

    // ========================================================================
    // Node arrays
    // ========================================================================

    /// Create (or reuse) a node array.
    ///
    /// An existing list is returned as-is when `has_trailing_comma` is `None`
    /// or matches; a mismatching list is copied with the new trailing-comma
    /// flag. Fresh sequences are always wrapped. The cached transform flags
    /// of the result are always populated.
    pub fn create_node_array(
        &mut self,
        elements: impl Into<NodeArrayInput>,
        has_trailing_comma: Option<bool>,
    ) -> NodeList {
        match elements.into() {
            NodeArrayInput::List(list) => {
                let Some(existing) = self.arena.get_list(list) else {
                    panic!("unknown node list {list:?}");
                };
                if has_trailing_comma.is_none_or(|comma| comma == existing.has_trailing_comma) {
                    self.ensure_list_flags(list);
                    return list;
                }
                let mut copy = existing.clone();
                copy.has_trailing_comma = has_trailing_comma.unwrap_or_default();
                if copy.transform_flags.is_none() {
                    copy.transform_flags = Some(self.aggregate_children_flags(&copy.nodes));
                }
                self.arena.create_base_node_array(copy)
            }
            NodeArrayInput::Nodes(nodes) => {
                let flags = self.aggregate_children_flags(&nodes);
                let mut array = NodeArray::new(nodes, has_trailing_comma.unwrap_or_default());
                array.transform_flags = Some(flags);
                self.arena.create_base_node_array(array)
            }
        }
    }

    /// Shorthand for wrapping a fresh sequence.
    #[inline]
    pub fn node_list(&mut self, nodes: Vec<NodeIndex>) -> NodeList {
        self.create_node_array(NodeArrayInput::Nodes(nodes), None)
    }

    /// `None` for an empty or absent sequence, a fresh list otherwise.
    pub fn node_list_or_none(&mut self, nodes: Option<Vec<NodeIndex>>) -> Option<NodeList> {
        match nodes {
            Some(nodes) if !nodes.is_empty() => Some(self.node_list(nodes)),
            _ => None,
        }
    }

    /// Fill a list's cached flags if they were never computed.
    pub(crate) fn ensure_list_flags(&mut self, list: NodeList) -> TransformFlags {
        let Some(array) = self.arena.get_list(list) else {
            return TransformFlags::empty();
        };
        if let Some(flags) = array.transform_flags {
            return flags;
        }
        let flags = self.aggregate_children_flags(&array.nodes);
        if let Some(array) = self.arena.get_list_mut(list) {
            array.transform_flags = Some(flags);
        }
        flags
    }

    /// Elements of a list as an owned vector.
    #[inline]
    pub fn list_elements(&self, list: Option<NodeList>) -> Vec<NodeIndex> {
        self.arena.opt_list_nodes(list).to_vec()
    }
}

#[cfg(test)]
#[path = "../../tests/factory_tests.rs"]
mod tests;
