//! Arena handles shared by the node model, the factory and the visitor.

use serde::{Deserialize, Serialize};

/// Index of a node in a `NodeArena`. The index is the node's identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub fn into_option(self) -> Option<NodeIndex> {
        if self.is_some() { Some(self) } else { None }
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<Option<NodeIndex>> for NodeIndex {
    fn from(value: Option<NodeIndex>) -> Self {
        value.unwrap_or(NodeIndex::NONE)
    }
}

/// Handle to a `NodeArray` stored in the arena.
///
/// Two lists are the same list only if their handles are equal; this is the
/// identity `update_*` functions compare against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeList(pub u32);

/// Source range of a node or list. Synthesized nodes use `NO_POS` for both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    pub pos: u32,
    pub end: u32,
}

impl TextRange {
    pub const NO_POS: u32 = u32::MAX;
    pub const SYNTHESIZED: TextRange = TextRange {
        pos: Self::NO_POS,
        end: Self::NO_POS,
    };

    #[inline]
    pub fn new(pos: u32, end: u32) -> TextRange {
        TextRange { pos, end }
    }

    #[inline]
    pub fn is_synthesized(self) -> bool {
        self.pos == Self::NO_POS
    }
}
