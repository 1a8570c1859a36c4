//! Shallow node cloning.

use super::NodeFactory;
use crate::base::NodeIndex;
use crate::flags::NodeFlags;
use crate::node::Node;

impl NodeFactory {
    /// Copy a node: same kind and children, a fresh pool entry, the source's
    /// flags minus `SYNTHESIZED`, its transform flags verbatim, its text range
    /// and `original` pointing back at it.
    ///
    /// Children are shared, not copied. Identifier clones keep the source's
    /// auto-generation record, so a cloned generated name prints the same.
    #[track_caller]
    pub fn clone_node(&mut self, source: NodeIndex) -> NodeIndex {
        let Some(header) = self.arena.get(source).copied() else {
            panic!("cannot clone a missing node");
        };
        let data_index = if header.has_data() {
            self.arena.clone_data(header.category(), header.data_index)
        } else {
            Node::NO_DATA
        };
        let transform_flags = self.arena.transform_flags(source);
        let index = NodeIndex(self.arena.nodes.len() as u32);
        self.arena.nodes.push(Node {
            flags: header.flags & !NodeFlags::SYNTHESIZED,
            data_index,
            ..header
        });
        self.arena.extended_info.push(Default::default());
        self.arena.set_transform_flags(index, transform_flags);
        self.arena.set_original(index, source);
        index
    }
}
