//! Transform-flag aggregation.
//!
//! A node's flags are its intrinsic bits plus the propagated flags of its
//! children. A child propagates its own flags minus the exclusion mask of its
//! kind, so facts such as "contains `this`" stop at the function boundary
//! that captures them.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::TransformFlags;
use crate::node::NodeCategory;
use crate::node_arena::NodeArena;
use crate::syntax_kind::SyntaxKind;

/// Bits a node of `kind` does not propagate to its parent.
pub fn get_transform_flags_subtree_exclusions(kind: SyntaxKind) -> TransformFlags {
    use SyntaxKind as K;
    if kind >= SyntaxKind::FIRST_TYPE_NODE && kind <= SyntaxKind::LAST_TYPE_NODE {
        return TransformFlags::TYPE_EXCLUDES;
    }
    match kind {
        K::CallExpression | K::NewExpression | K::ArrayLiteralExpression => {
            TransformFlags::ARRAY_LITERAL_OR_CALL_OR_NEW_EXCLUDES
        }
        K::ModuleDeclaration => TransformFlags::MODULE_EXCLUDES,
        K::Parameter => TransformFlags::PARAMETER_EXCLUDES,
        K::ArrowFunction => TransformFlags::ARROW_FUNCTION_EXCLUDES,
        K::FunctionExpression | K::FunctionDeclaration => TransformFlags::FUNCTION_EXCLUDES,
        K::VariableDeclarationList => TransformFlags::VARIABLE_DECLARATION_LIST_EXCLUDES,
        K::ClassDeclaration | K::ClassExpression => TransformFlags::CLASS_EXCLUDES,
        K::Constructor => TransformFlags::CONSTRUCTOR_EXCLUDES,
        K::PropertyDeclaration => TransformFlags::PROPERTY_EXCLUDES,
        K::MethodDeclaration | K::GetAccessor | K::SetAccessor => {
            TransformFlags::METHOD_OR_ACCESSOR_EXCLUDES
        }
        K::AnyKeyword
        | K::NumberKeyword
        | K::BigIntKeyword
        | K::NeverKeyword
        | K::StringKeyword
        | K::ObjectKeyword
        | K::BooleanKeyword
        | K::SymbolKeyword
        | K::VoidKeyword
        | K::TypeParameter
        | K::PropertySignature
        | K::MethodSignature
        | K::CallSignature
        | K::ConstructSignature
        | K::IndexSignature
        | K::InterfaceDeclaration
        | K::TypeAliasDeclaration => TransformFlags::TYPE_EXCLUDES,
        K::ObjectLiteralExpression => TransformFlags::OBJECT_LITERAL_EXCLUDES,
        K::CatchClause => TransformFlags::CATCH_CLAUSE_EXCLUDES,
        K::ObjectBindingPattern | K::ArrayBindingPattern => {
            TransformFlags::BINDING_PATTERN_EXCLUDES
        }
        K::TypeAssertionExpression
        | K::SatisfiesExpression
        | K::AsExpression
        | K::PartiallyEmittedExpression
        | K::ParenthesizedExpression
        | K::SuperKeyword => TransformFlags::OUTER_EXPRESSION_EXCLUDES,
        K::PropertyAccessExpression | K::ElementAccessExpression => {
            TransformFlags::PROPERTY_ACCESS_EXCLUDES
        }
        _ => TransformFlags::NODE_EXCLUDES,
    }
}

/// Kinds accepted as a declaration's property name.
pub fn is_property_name_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::ComputedPropertyName
    )
}

/// Flags a child contributes to its parent.
pub fn propagate_child_flags(arena: &NodeArena, child: NodeIndex) -> TransformFlags {
    let Some(node) = arena.get(child) else {
        return TransformFlags::empty();
    };
    let child_flags =
        arena.transform_flags(child) & !get_transform_flags_subtree_exclusions(node.kind);
    let name = arena.name_of_declaration(child);
    match arena.kind(name) {
        Some(kind) if is_property_name_kind(kind) => {
            child_flags
                | (arena.transform_flags(name) & TransformFlags::PROPERTY_NAME_PROPAGATING_FLAGS)
        }
        _ => child_flags,
    }
}

/// Flags an identifier in name position contributes; a name never makes its
/// parent a possible top-level `await`.
pub fn propagate_identifier_name_flags(arena: &NodeArena, name: NodeIndex) -> TransformFlags {
    propagate_child_flags(arena, name) & !TransformFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT
}

/// Union of `propagate_child_flags` over a sequence.
pub fn aggregate_children_flags(arena: &NodeArena, children: &[NodeIndex]) -> TransformFlags {
    children
        .iter()
        .fold(TransformFlags::empty(), |flags, &child| {
            flags | propagate_child_flags(arena, child)
        })
}

/// `ContainsObjectRestOrSpread` when an assignment pattern (object or array
/// literal on the left of `=`) contains an object rest at any depth.
pub fn propagate_assignment_pattern_flags(arena: &NodeArena, pattern: NodeIndex) -> TransformFlags {
    let flags = arena.transform_flags(pattern);
    if flags.contains(TransformFlags::CONTAINS_OBJECT_REST_OR_SPREAD) {
        return TransformFlags::CONTAINS_OBJECT_REST_OR_SPREAD;
    }
    if !flags.contains(TransformFlags::CONTAINS_ES2018) {
        return TransformFlags::empty();
    }
    let Some(list) = arena.node_data::<crate::node::ListData>(pattern) else {
        return TransformFlags::empty();
    };
    for &element in arena.list_nodes(list.elements) {
        let target = assignment_element_target(arena, element);
        if !matches!(
            arena.kind(target),
            Some(SyntaxKind::ObjectLiteralExpression | SyntaxKind::ArrayLiteralExpression)
        ) {
            continue;
        }
        let nested = propagate_assignment_pattern_flags(arena, target);
        if !nested.is_empty() {
            return nested;
        }
    }
    TransformFlags::empty()
}

fn assignment_element_target(arena: &NodeArena, element: NodeIndex) -> NodeIndex {
    let Some(node) = arena.get(element) else {
        return NodeIndex::NONE;
    };
    match node.category() {
        NodeCategory::PropertyAssignment if node.kind == SyntaxKind::PropertyAssignment => arena
            .get_property_assignment(node)
            .map_or(NodeIndex::NONE, |data| data.initializer),
        NodeCategory::Expression
            if matches!(
                node.kind,
                SyntaxKind::SpreadElement | SyntaxKind::SpreadAssignment
            ) =>
        {
            arena
                .get_expression(node)
                .map_or(NodeIndex::NONE, |data| data.expression)
        }
        NodeCategory::BinaryExpr => arena
            .get_binary_expr(node)
            .filter(|data| data.operator_token == SyntaxKind::EqualsToken)
            .map_or(element, |data| data.left),
        _ => element,
    }
}

impl NodeFactory {
    #[inline]
    pub(crate) fn child_flags(&self, child: NodeIndex) -> TransformFlags {
        propagate_child_flags(&self.arena, child)
    }

    #[inline]
    pub(crate) fn identifier_name_flags(&self, name: NodeIndex) -> TransformFlags {
        propagate_identifier_name_flags(&self.arena, name)
    }

    /// Identifiers propagate as names; other property names as children.
    pub(crate) fn name_flags(&self, name: NodeIndex) -> TransformFlags {
        if self.arena.is_identifier(name) {
            self.identifier_name_flags(name)
        } else {
            self.child_flags(name)
        }
    }

    /// Cached aggregate flags of a list (`propagateChildrenFlags`).
    pub(crate) fn children_flags(&mut self, list: Option<NodeList>) -> TransformFlags {
        match list {
            Some(list) => self.ensure_list_flags(list),
            None => TransformFlags::empty(),
        }
    }

    #[inline]
    pub(crate) fn aggregate_children_flags(&self, children: &[NodeIndex]) -> TransformFlags {
        aggregate_children_flags(&self.arena, children)
    }
}
