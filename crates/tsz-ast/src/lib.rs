//! Syntax tree model and node factory for the tsz declaration emitter.
//!
//! This crate provides:
//! - `SyntaxKind` and the node/modifier/transform flag sets
//! - `NodeArena` - thin 16-byte node headers with typed data pools
//! - `NodeFactory` - create/update entry points with transform-flag
//!   propagation, parenthesizer rules and node converters
//! - `NodeVisitor` - child visitor that rebuilds nodes through the factory

// Node and list handles
pub mod base;
pub use base::{NodeIndex, NodeList, TextRange};

// Flag sets
pub mod flags;
pub use flags::{GeneratedIdentifierFlags, ModifierFlags, NodeFactoryFlags, NodeFlags, TransformFlags};

// Token and node kinds
pub mod syntax_kind;
pub use syntax_kind::SyntaxKind;

// Node headers, data layouts and the arena that stores them
pub mod node;
pub mod node_access;
pub mod node_arena;
pub use node::{Node, NodeArray, NodeCategory};
pub use node_arena::{BaseNodeFactory, NodeArena, PooledData};

// Node construction
pub mod factory;
pub use factory::NodeFactory;
pub use factory::converters::NodeConverters;
pub use factory::parenthesizer::ParenthesizerRules;

// Tree rewriting
pub mod visitor;
pub use visitor::{
    NodeVisitor, VisitResult, visit_each_child, visit_node, visit_nodes, visit_nodes_with,
    visit_opt_nodes,
};
