//! Parenthesizer rules.
//!
//! The factory routes expression and type children through these hooks so
//! that synthesized trees print with the parentheses the grammar needs.
//! `NULL_PARENTHESIZER_RULES` passes everything through unchanged and is
//! used while building parse trees.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::NodeFlags;
use crate::node::{
    AccessExprData, BinaryExprData, CallExprData, ConditionalExprData, ExpressionData,
    SignatureData, TaggedTemplateData, TypeAssertionData, UnaryExprData,
};
use crate::node_arena::NodeArena;
use crate::syntax_kind::SyntaxKind;
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Binding strength of an operator or expression form; higher binds tighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OperatorPrecedence(pub i8);

impl OperatorPrecedence {
    pub const INVALID: OperatorPrecedence = OperatorPrecedence(-1);
    pub const COMMA: OperatorPrecedence = OperatorPrecedence(0);
    pub const SPREAD: OperatorPrecedence = OperatorPrecedence(1);
    pub const YIELD: OperatorPrecedence = OperatorPrecedence(2);
    pub const ASSIGNMENT: OperatorPrecedence = OperatorPrecedence(3);
    pub const CONDITIONAL: OperatorPrecedence = OperatorPrecedence(4);
    /// `??` shares a level with the conditional operator.
    pub const COALESCE: OperatorPrecedence = OperatorPrecedence(4);
    pub const LOGICAL_OR: OperatorPrecedence = OperatorPrecedence(5);
    pub const LOGICAL_AND: OperatorPrecedence = OperatorPrecedence(6);
    pub const BITWISE_OR: OperatorPrecedence = OperatorPrecedence(7);
    pub const BITWISE_XOR: OperatorPrecedence = OperatorPrecedence(8);
    pub const BITWISE_AND: OperatorPrecedence = OperatorPrecedence(9);
    pub const EQUALITY: OperatorPrecedence = OperatorPrecedence(10);
    pub const RELATIONAL: OperatorPrecedence = OperatorPrecedence(11);
    pub const SHIFT: OperatorPrecedence = OperatorPrecedence(12);
    pub const ADDITIVE: OperatorPrecedence = OperatorPrecedence(13);
    pub const MULTIPLICATIVE: OperatorPrecedence = OperatorPrecedence(14);
    pub const EXPONENTIATION: OperatorPrecedence = OperatorPrecedence(15);
    pub const UNARY: OperatorPrecedence = OperatorPrecedence(16);
    pub const UPDATE: OperatorPrecedence = OperatorPrecedence(17);
    pub const LEFT_HAND_SIDE: OperatorPrecedence = OperatorPrecedence(18);
    pub const MEMBER: OperatorPrecedence = OperatorPrecedence(19);
    pub const PRIMARY: OperatorPrecedence = OperatorPrecedence(20);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Binary operator precedences, built on first use.
static BINARY_OPERATOR_PRECEDENCE: Lazy<FxHashMap<SyntaxKind, OperatorPrecedence>> =
    Lazy::new(|| {
        use SyntaxKind as K;
        let levels: [(OperatorPrecedence, &[SyntaxKind]); 12] = [
            (OperatorPrecedence::COALESCE, &[K::QuestionQuestionToken]),
            (OperatorPrecedence::LOGICAL_OR, &[K::BarBarToken]),
            (OperatorPrecedence::LOGICAL_AND, &[K::AmpersandAmpersandToken]),
            (OperatorPrecedence::BITWISE_OR, &[K::BarToken]),
            (OperatorPrecedence::BITWISE_XOR, &[K::CaretToken]),
            (OperatorPrecedence::BITWISE_AND, &[K::AmpersandToken]),
            (
                OperatorPrecedence::EQUALITY,
                &[
                    K::EqualsEqualsToken,
                    K::ExclamationEqualsToken,
                    K::EqualsEqualsEqualsToken,
                    K::ExclamationEqualsEqualsToken,
                ],
            ),
            (
                OperatorPrecedence::RELATIONAL,
                &[
                    K::LessThanToken,
                    K::GreaterThanToken,
                    K::LessThanEqualsToken,
                    K::GreaterThanEqualsToken,
                    K::InstanceOfKeyword,
                    K::InKeyword,
                    K::AsKeyword,
                    K::SatisfiesKeyword,
                ],
            ),
            (
                OperatorPrecedence::SHIFT,
                &[
                    K::LessThanLessThanToken,
                    K::GreaterThanGreaterThanToken,
                    K::GreaterThanGreaterThanGreaterThanToken,
                ],
            ),
            (OperatorPrecedence::ADDITIVE, &[K::PlusToken, K::MinusToken]),
            (
                OperatorPrecedence::MULTIPLICATIVE,
                &[K::AsteriskToken, K::SlashToken, K::PercentToken],
            ),
            (OperatorPrecedence::EXPONENTIATION, &[K::AsteriskAsteriskToken]),
        ];
        levels
            .iter()
            .flat_map(|(precedence, operators)| {
                operators.iter().map(move |&operator| (operator, *precedence))
            })
            .collect()
    });

/// Precedence of a binary operator token.
pub fn binary_operator_precedence(operator: SyntaxKind) -> OperatorPrecedence {
    BINARY_OPERATOR_PRECEDENCE
        .get(&operator)
        .copied()
        .unwrap_or(OperatorPrecedence::INVALID)
}

/// Precedence of an expression form. `operator` is only consulted for
/// binary expressions and `has_arguments` only for `new`.
pub fn operator_precedence(
    kind: SyntaxKind,
    operator: SyntaxKind,
    has_arguments: bool,
) -> OperatorPrecedence {
    use SyntaxKind as K;
    match kind {
        K::CommaListExpression => OperatorPrecedence::COMMA,
        K::SpreadElement => OperatorPrecedence::SPREAD,
        K::YieldExpression => OperatorPrecedence::YIELD,
        K::ConditionalExpression => OperatorPrecedence::CONDITIONAL,
        K::BinaryExpression => match operator {
            K::CommaToken => OperatorPrecedence::COMMA,
            op if op.is_assignment_operator() => OperatorPrecedence::ASSIGNMENT,
            op => binary_operator_precedence(op),
        },
        K::TypeAssertionExpression
        | K::NonNullExpression
        | K::PrefixUnaryExpression
        | K::TypeOfExpression
        | K::VoidExpression
        | K::DeleteExpression
        | K::AwaitExpression => OperatorPrecedence::UNARY,
        K::PostfixUnaryExpression => OperatorPrecedence::UPDATE,
        K::CallExpression => OperatorPrecedence::LEFT_HAND_SIDE,
        K::NewExpression if has_arguments => OperatorPrecedence::MEMBER,
        K::NewExpression => OperatorPrecedence::LEFT_HAND_SIDE,
        K::TaggedTemplateExpression
        | K::PropertyAccessExpression
        | K::ElementAccessExpression
        | K::MetaProperty => OperatorPrecedence::MEMBER,
        K::AsExpression | K::SatisfiesExpression => OperatorPrecedence::RELATIONAL,
        K::ThisKeyword
        | K::SuperKeyword
        | K::Identifier
        | K::PrivateIdentifier
        | K::NullKeyword
        | K::TrueKeyword
        | K::FalseKeyword
        | K::NumericLiteral
        | K::BigIntLiteral
        | K::StringLiteral
        | K::ArrayLiteralExpression
        | K::ObjectLiteralExpression
        | K::FunctionExpression
        | K::ArrowFunction
        | K::ClassExpression
        | K::RegularExpressionLiteral
        | K::NoSubstitutionTemplateLiteral
        | K::TemplateExpression
        | K::ParenthesizedExpression
        | K::OmittedExpression
        | K::JsxElement
        | K::JsxSelfClosingElement
        | K::JsxFragment => OperatorPrecedence::PRIMARY,
        _ => OperatorPrecedence::INVALID,
    }
}

pub fn operator_associativity(
    kind: SyntaxKind,
    operator: SyntaxKind,
    has_arguments: bool,
) -> Associativity {
    use SyntaxKind as K;
    match kind {
        K::NewExpression if has_arguments => Associativity::Left,
        K::NewExpression
        | K::PrefixUnaryExpression
        | K::TypeOfExpression
        | K::VoidExpression
        | K::DeleteExpression
        | K::AwaitExpression
        | K::ConditionalExpression
        | K::YieldExpression => Associativity::Right,
        K::BinaryExpression
            if operator == K::AsteriskAsteriskToken || operator.is_assignment_operator() =>
        {
            Associativity::Right
        }
        _ => Associativity::Left,
    }
}

// =============================================================================
// Expression shape queries
// =============================================================================

fn skip_partially_emitted(arena: &NodeArena, mut node: NodeIndex) -> NodeIndex {
    while arena.is_kind(node, SyntaxKind::PartiallyEmittedExpression) {
        match arena.node_data::<ExpressionData>(node) {
            Some(data) => node = data.expression,
            None => break,
        }
    }
    node
}

fn binary_operator_of(arena: &NodeArena, node: NodeIndex) -> Option<SyntaxKind> {
    arena
        .node_data::<BinaryExprData>(node)
        .map(|data| data.operator_token)
}

fn expression_precedence(arena: &NodeArena, node: NodeIndex) -> OperatorPrecedence {
    let Some(kind) = arena.kind(node) else {
        return OperatorPrecedence::INVALID;
    };
    let operator = binary_operator_of(arena, node).unwrap_or(SyntaxKind::Unknown);
    operator_precedence(kind, operator, new_has_arguments(arena, node))
}

fn expression_associativity(arena: &NodeArena, node: NodeIndex) -> Associativity {
    let Some(kind) = arena.kind(node) else {
        return Associativity::Left;
    };
    let operator = binary_operator_of(arena, node).unwrap_or(SyntaxKind::Unknown);
    operator_associativity(kind, operator, new_has_arguments(arena, node))
}

fn new_has_arguments(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.is_kind(node, SyntaxKind::NewExpression)
        && arena
            .node_data::<CallExprData>(node)
            .is_some_and(|data| data.arguments.is_some())
}

/// `a, b` either as a binary comma or a comma list.
pub fn is_comma_sequence(arena: &NodeArena, node: NodeIndex) -> bool {
    match arena.kind(node) {
        Some(SyntaxKind::CommaListExpression) => true,
        Some(SyntaxKind::BinaryExpression) => {
            binary_operator_of(arena, node) == Some(SyntaxKind::CommaToken)
        }
        _ => false,
    }
}

pub fn is_left_hand_side_expression_kind(kind: SyntaxKind) -> bool {
    use SyntaxKind as K;
    matches!(
        kind,
        K::PropertyAccessExpression
            | K::ElementAccessExpression
            | K::NewExpression
            | K::CallExpression
            | K::JsxElement
            | K::JsxSelfClosingElement
            | K::JsxFragment
            | K::TaggedTemplateExpression
            | K::ArrayLiteralExpression
            | K::ParenthesizedExpression
            | K::ObjectLiteralExpression
            | K::ClassExpression
            | K::FunctionExpression
            | K::Identifier
            | K::PrivateIdentifier
            | K::RegularExpressionLiteral
            | K::NumericLiteral
            | K::BigIntLiteral
            | K::StringLiteral
            | K::NoSubstitutionTemplateLiteral
            | K::TemplateExpression
            | K::FalseKeyword
            | K::NullKeyword
            | K::ThisKeyword
            | K::TrueKeyword
            | K::SuperKeyword
            | K::NonNullExpression
            | K::ExpressionWithTypeArguments
            | K::MetaProperty
            | K::ImportKeyword
    )
}

pub fn is_unary_expression_kind(kind: SyntaxKind) -> bool {
    is_left_hand_side_expression_kind(kind)
        || matches!(
            kind,
            SyntaxKind::PrefixUnaryExpression
                | SyntaxKind::PostfixUnaryExpression
                | SyntaxKind::DeleteExpression
                | SyntaxKind::TypeOfExpression
                | SyntaxKind::VoidExpression
                | SyntaxKind::AwaitExpression
                | SyntaxKind::TypeAssertionExpression
        )
}

fn is_optional_chain(arena: &NodeArena, node: NodeIndex) -> bool {
    arena.get(node).is_some_and(|header| {
        header.flags.contains(NodeFlags::OPTIONAL_CHAIN)
            && matches!(
                header.kind,
                SyntaxKind::PropertyAccessExpression
                    | SyntaxKind::ElementAccessExpression
                    | SyntaxKind::CallExpression
                    | SyntaxKind::NonNullExpression
            )
    })
}

/// Walk down the left spine of an expression to the token printed first.
pub fn leftmost_expression(
    arena: &NodeArena,
    mut node: NodeIndex,
    stop_at_call_expressions: bool,
) -> NodeIndex {
    use SyntaxKind as K;
    loop {
        let next = match arena.kind(node) {
            Some(K::PostfixUnaryExpression) => arena
                .node_data::<UnaryExprData>(node)
                .map(|data| data.operand),
            Some(K::BinaryExpression) => arena
                .node_data::<BinaryExprData>(node)
                .map(|data| data.left),
            Some(K::ConditionalExpression) => arena
                .node_data::<ConditionalExprData>(node)
                .map(|data| data.condition),
            Some(K::TaggedTemplateExpression) => arena
                .node_data::<TaggedTemplateData>(node)
                .map(|data| data.tag),
            Some(K::CallExpression) if stop_at_call_expressions => None,
            Some(K::CallExpression) => arena
                .node_data::<CallExprData>(node)
                .map(|data| data.expression),
            Some(K::PropertyAccessExpression | K::ElementAccessExpression) => arena
                .node_data::<AccessExprData>(node)
                .map(|data| data.expression),
            Some(K::AsExpression | K::SatisfiesExpression) => arena
                .node_data::<TypeAssertionData>(node)
                .map(|data| data.expression),
            Some(K::NonNullExpression | K::PartiallyEmittedExpression) => arena
                .node_data::<ExpressionData>(node)
                .map(|data| data.expression),
            _ => None,
        };
        match next {
            Some(next) if next.is_some() => node = next,
            _ => return node,
        }
    }
}

/// Literal kind shared by every operand of a chain of `+`, if any.
fn literal_kind_of_binary_plus_operand(arena: &NodeArena, node: NodeIndex) -> Option<SyntaxKind> {
    let node = skip_partially_emitted(arena, node);
    let kind = arena.kind(node)?;
    if kind.is_literal_kind() {
        return Some(kind);
    }
    let data = arena.node_data::<BinaryExprData>(node)?;
    if data.operator_token != SyntaxKind::PlusToken {
        return None;
    }
    let left = literal_kind_of_binary_plus_operand(arena, data.left)?;
    let right = literal_kind_of_binary_plus_operand(arena, data.right)?;
    (left == right).then_some(left)
}

fn binary_operand_needs_parentheses(
    arena: &NodeArena,
    operator: SyntaxKind,
    operand: NodeIndex,
    is_left_side: bool,
    left_operand: NodeIndex,
) -> bool {
    let operator_precedence = operator_precedence(SyntaxKind::BinaryExpression, operator, false);
    let operator_assoc = operator_associativity(SyntaxKind::BinaryExpression, operator, false);
    let emitted = skip_partially_emitted(arena, operand);
    let emitted_kind = arena.kind(emitted).unwrap_or(SyntaxKind::Unknown);

    if !is_left_side
        && emitted_kind == SyntaxKind::ArrowFunction
        && operator_precedence > OperatorPrecedence::ASSIGNMENT
    {
        return true;
    }
    // `-x ** 2` is a syntax error.
    if is_left_side
        && operator == SyntaxKind::AsteriskAsteriskToken
        && matches!(
            emitted_kind,
            SyntaxKind::PrefixUnaryExpression
                | SyntaxKind::TypeOfExpression
                | SyntaxKind::VoidExpression
                | SyntaxKind::DeleteExpression
                | SyntaxKind::AwaitExpression
                | SyntaxKind::TypeAssertionExpression
        )
    {
        return true;
    }

    let operand_precedence = expression_precedence(arena, emitted);
    match operand_precedence.cmp(&operator_precedence) {
        std::cmp::Ordering::Less => {
            !(!is_left_side
                && operator_assoc == Associativity::Right
                && emitted_kind == SyntaxKind::YieldExpression)
        }
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => {
            if is_left_side {
                return operator_assoc == Associativity::Right;
            }
            if binary_operator_of(arena, emitted) == Some(operator) {
                // `a * (b * c)` is `a * b * c`.
                if matches!(
                    operator,
                    SyntaxKind::AsteriskToken
                        | SyntaxKind::BarToken
                        | SyntaxKind::AmpersandToken
                        | SyntaxKind::CaretToken
                ) {
                    return false;
                }
                if operator == SyntaxKind::PlusToken {
                    let left_kind = left_operand
                        .into_option()
                        .and_then(|left| literal_kind_of_binary_plus_operand(arena, left));
                    if left_kind.is_some()
                        && left_kind == literal_kind_of_binary_plus_operand(arena, emitted)
                    {
                        return false;
                    }
                }
            }
            expression_associativity(arena, emitted) == Associativity::Left
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Hooks the factory calls on children before storing them.
pub trait ParenthesizerRules: Send + Sync {
    fn parenthesize_left_side_of_binary(
        &self,
        factory: &mut NodeFactory,
        operator: SyntaxKind,
        left: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_right_side_of_binary(
        &self,
        factory: &mut NodeFactory,
        operator: SyntaxKind,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_expression_of_computed_property_name(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_condition_of_conditional_expression(
        &self,
        factory: &mut NodeFactory,
        condition: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_branch_of_conditional_expression(
        &self,
        factory: &mut NodeFactory,
        branch: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_expression_of_export_default(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_expression_of_new(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_left_side_of_access(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
        optional_chain: bool,
    ) -> NodeIndex;
    fn parenthesize_operand_of_postfix_unary(
        &self,
        factory: &mut NodeFactory,
        operand: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_operand_of_prefix_unary(
        &self,
        factory: &mut NodeFactory,
        operand: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_expressions_of_comma_delimited_list(
        &self,
        factory: &mut NodeFactory,
        elements: NodeList,
    ) -> NodeList;
    fn parenthesize_expression_for_disallowed_comma(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_expression_of_expression_statement(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_concise_body_of_arrow_function(
        &self,
        factory: &mut NodeFactory,
        body: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_check_type_of_conditional_type(
        &self,
        factory: &mut NodeFactory,
        check_type: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_extends_type_of_conditional_type(
        &self,
        factory: &mut NodeFactory,
        extends_type: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_operand_of_type_operator(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_operand_of_readonly_type_operator(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_non_array_type_of_postfix_type(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_element_type_of_array_type(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_element_types_of_tuple_type(
        &self,
        factory: &mut NodeFactory,
        elements: NodeList,
    ) -> NodeList;
    fn parenthesize_type_of_optional_type(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_constituent_types_of_union_type(
        &self,
        factory: &mut NodeFactory,
        types: NodeList,
    ) -> NodeList;
    fn parenthesize_constituent_types_of_intersection_type(
        &self,
        factory: &mut NodeFactory,
        types: NodeList,
    ) -> NodeList;
    fn parenthesize_leading_type_argument(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex;
    fn parenthesize_type_arguments(
        &self,
        factory: &mut NodeFactory,
        type_arguments: Option<NodeList>,
    ) -> Option<NodeList>;
}

/// Rules that parenthesize whatever the grammar would otherwise misparse.
#[derive(Debug, Default)]
pub struct DefaultParenthesizerRules;

pub static DEFAULT_PARENTHESIZER_RULES: DefaultParenthesizerRules = DefaultParenthesizerRules;

/// Rules that return every input unchanged.
#[derive(Debug, Default)]
pub struct NullParenthesizerRules;

pub static NULL_PARENTHESIZER_RULES: NullParenthesizerRules = NullParenthesizerRules;

fn parenthesize(factory: &mut NodeFactory, expression: NodeIndex) -> NodeIndex {
    let paren = factory.create_parenthesized_expression(expression);
    factory.set_text_range_from(paren, expression)
}

fn parenthesize_type(factory: &mut NodeFactory, type_node: NodeIndex) -> NodeIndex {
    factory.create_parenthesized_type(type_node)
}

/// Apply `rule` to every element; the original list is kept when no element
/// changed.
fn map_list(
    factory: &mut NodeFactory,
    list: NodeList,
    mut rule: impl FnMut(&mut NodeFactory, usize, NodeIndex) -> NodeIndex,
) -> NodeList {
    let elements = factory.list_elements(Some(list));
    let mut changed = false;
    let mut mapped = Vec::with_capacity(elements.len());
    for (i, element) in elements.into_iter().enumerate() {
        let result = rule(factory, i, element);
        changed |= result != element;
        mapped.push(result);
    }
    if !changed {
        return list;
    }
    let has_trailing_comma = factory
        .arena()
        .get_list(list)
        .is_some_and(|array| array.has_trailing_comma);
    factory.create_node_array(mapped, Some(has_trailing_comma))
}

impl DefaultParenthesizerRules {
    fn parenthesize_binary_operand(
        factory: &mut NodeFactory,
        operator: SyntaxKind,
        operand: NodeIndex,
        is_left_side: bool,
        left_operand: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        let skipped = skip_partially_emitted(arena, operand);
        if arena.is_kind(skipped, SyntaxKind::ParenthesizedExpression) {
            return operand;
        }
        if binary_operand_needs_parentheses(arena, operator, operand, is_left_side, left_operand) {
            parenthesize(factory, operand)
        } else {
            operand
        }
    }

    fn constituent_of_union(factory: &mut NodeFactory, type_node: NodeIndex) -> NodeIndex {
        match factory.arena().kind(type_node) {
            Some(SyntaxKind::UnionType | SyntaxKind::IntersectionType) => {
                parenthesize_type(factory, type_node)
            }
            _ => DEFAULT_PARENTHESIZER_RULES
                .parenthesize_check_type_of_conditional_type(factory, type_node),
        }
    }

    fn constituent_of_intersection(factory: &mut NodeFactory, type_node: NodeIndex) -> NodeIndex {
        match factory.arena().kind(type_node) {
            Some(SyntaxKind::UnionType | SyntaxKind::IntersectionType) => {
                parenthesize_type(factory, type_node)
            }
            _ => Self::constituent_of_union(factory, type_node),
        }
    }
}

impl ParenthesizerRules for DefaultParenthesizerRules {
    fn parenthesize_left_side_of_binary(
        &self,
        factory: &mut NodeFactory,
        operator: SyntaxKind,
        left: NodeIndex,
    ) -> NodeIndex {
        Self::parenthesize_binary_operand(factory, operator, left, true, NodeIndex::NONE)
    }

    fn parenthesize_right_side_of_binary(
        &self,
        factory: &mut NodeFactory,
        operator: SyntaxKind,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        Self::parenthesize_binary_operand(factory, operator, right, false, left)
    }

    fn parenthesize_expression_of_computed_property_name(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        if is_comma_sequence(factory.arena(), expression) {
            parenthesize(factory, expression)
        } else {
            expression
        }
    }

    fn parenthesize_condition_of_conditional_expression(
        &self,
        factory: &mut NodeFactory,
        condition: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        let emitted = skip_partially_emitted(arena, condition);
        if expression_precedence(arena, emitted) > OperatorPrecedence::CONDITIONAL {
            condition
        } else {
            parenthesize(factory, condition)
        }
    }

    fn parenthesize_branch_of_conditional_expression(
        &self,
        factory: &mut NodeFactory,
        branch: NodeIndex,
    ) -> NodeIndex {
        let emitted = skip_partially_emitted(factory.arena(), branch);
        if is_comma_sequence(factory.arena(), emitted) {
            parenthesize(factory, branch)
        } else {
            branch
        }
    }

    fn parenthesize_expression_of_export_default(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        let emitted = skip_partially_emitted(arena, expression);
        let leftmost = leftmost_expression(arena, emitted, false);
        let needs_parens = is_comma_sequence(arena, emitted)
            || matches!(
                arena.kind(leftmost),
                Some(SyntaxKind::ClassExpression | SyntaxKind::FunctionExpression)
            );
        if needs_parens {
            parenthesize(factory, expression)
        } else {
            expression
        }
    }

    fn parenthesize_expression_of_new(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        let leftmost = leftmost_expression(arena, expression, true);
        match arena.kind(leftmost) {
            Some(SyntaxKind::CallExpression) => return parenthesize(factory, expression),
            Some(SyntaxKind::NewExpression) if !new_has_arguments(arena, leftmost) => {
                return parenthesize(factory, expression);
            }
            _ => {}
        }
        self.parenthesize_left_side_of_access(factory, expression, false)
    }

    fn parenthesize_left_side_of_access(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
        optional_chain: bool,
    ) -> NodeIndex {
        let arena = factory.arena();
        let emitted = skip_partially_emitted(arena, expression);
        let kind = arena.kind(emitted).unwrap_or(SyntaxKind::Unknown);
        let keeps_shape = is_left_hand_side_expression_kind(kind)
            && (kind != SyntaxKind::NewExpression || new_has_arguments(arena, emitted))
            && (optional_chain || !is_optional_chain(arena, emitted));
        if keeps_shape {
            expression
        } else {
            parenthesize(factory, expression)
        }
    }

    fn parenthesize_operand_of_postfix_unary(
        &self,
        factory: &mut NodeFactory,
        operand: NodeIndex,
    ) -> NodeIndex {
        match factory.arena().kind(operand) {
            Some(kind) if is_left_hand_side_expression_kind(kind) => operand,
            _ => parenthesize(factory, operand),
        }
    }

    fn parenthesize_operand_of_prefix_unary(
        &self,
        factory: &mut NodeFactory,
        operand: NodeIndex,
    ) -> NodeIndex {
        match factory.arena().kind(operand) {
            Some(kind) if is_unary_expression_kind(kind) => operand,
            _ => parenthesize(factory, operand),
        }
    }

    fn parenthesize_expressions_of_comma_delimited_list(
        &self,
        factory: &mut NodeFactory,
        elements: NodeList,
    ) -> NodeList {
        map_list(factory, elements, |factory, _, element| {
            self.parenthesize_expression_for_disallowed_comma(factory, element)
        })
    }

    fn parenthesize_expression_for_disallowed_comma(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        let emitted = skip_partially_emitted(arena, expression);
        if expression_precedence(arena, emitted) > OperatorPrecedence::COMMA {
            expression
        } else {
            parenthesize(factory, expression)
        }
    }

    fn parenthesize_expression_of_expression_statement(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        let emitted = skip_partially_emitted(factory.arena(), expression);
        // `(function () {})()` stays a call; only the callee is wrapped.
        if let Some(call) = factory.arena().node_data::<CallExprData>(emitted).copied() {
            if factory.arena().is_kind(emitted, SyntaxKind::CallExpression) {
                let callee = skip_partially_emitted(factory.arena(), call.expression);
                if matches!(
                    factory.arena().kind(callee),
                    Some(SyntaxKind::FunctionExpression | SyntaxKind::ArrowFunction)
                ) {
                    let wrapped = parenthesize(factory, call.expression);
                    let arguments = call
                        .arguments
                        .unwrap_or_else(|| factory.node_list(Vec::new()));
                    return factory.update_call_expression(
                        emitted,
                        wrapped,
                        call.type_arguments,
                        arguments,
                    );
                }
            }
        }
        let leftmost = leftmost_expression(factory.arena(), emitted, false);
        match factory.arena().kind(leftmost) {
            Some(SyntaxKind::ObjectLiteralExpression | SyntaxKind::FunctionExpression) => {
                parenthesize(factory, expression)
            }
            _ => expression,
        }
    }

    fn parenthesize_concise_body_of_arrow_function(
        &self,
        factory: &mut NodeFactory,
        body: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        if arena.is_kind(body, SyntaxKind::Block) {
            return body;
        }
        let leftmost = leftmost_expression(arena, body, false);
        if is_comma_sequence(arena, body)
            || arena.is_kind(leftmost, SyntaxKind::ObjectLiteralExpression)
        {
            parenthesize(factory, body)
        } else {
            body
        }
    }

    fn parenthesize_check_type_of_conditional_type(
        &self,
        factory: &mut NodeFactory,
        check_type: NodeIndex,
    ) -> NodeIndex {
        match factory.arena().kind(check_type) {
            Some(
                SyntaxKind::FunctionType | SyntaxKind::ConstructorType | SyntaxKind::ConditionalType,
            ) => parenthesize_type(factory, check_type),
            _ => check_type,
        }
    }

    fn parenthesize_extends_type_of_conditional_type(
        &self,
        factory: &mut NodeFactory,
        extends_type: NodeIndex,
    ) -> NodeIndex {
        if factory
            .arena()
            .is_kind(extends_type, SyntaxKind::ConditionalType)
        {
            parenthesize_type(factory, extends_type)
        } else {
            extends_type
        }
    }

    fn parenthesize_operand_of_type_operator(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        if factory
            .arena()
            .is_kind(type_node, SyntaxKind::IntersectionType)
        {
            parenthesize_type(factory, type_node)
        } else {
            Self::constituent_of_intersection(factory, type_node)
        }
    }

    fn parenthesize_operand_of_readonly_type_operator(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        if factory.arena().is_kind(type_node, SyntaxKind::TypeOperator) {
            parenthesize_type(factory, type_node)
        } else {
            self.parenthesize_operand_of_type_operator(factory, type_node)
        }
    }

    fn parenthesize_non_array_type_of_postfix_type(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        match factory.arena().kind(type_node) {
            Some(SyntaxKind::InferType | SyntaxKind::TypeOperator | SyntaxKind::TypeQuery) => {
                parenthesize_type(factory, type_node)
            }
            _ => self.parenthesize_operand_of_type_operator(factory, type_node),
        }
    }

    fn parenthesize_element_type_of_array_type(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.parenthesize_non_array_type_of_postfix_type(factory, type_node)
    }

    fn parenthesize_element_types_of_tuple_type(
        &self,
        _factory: &mut NodeFactory,
        elements: NodeList,
    ) -> NodeList {
        elements
    }

    fn parenthesize_type_of_optional_type(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.parenthesize_non_array_type_of_postfix_type(factory, type_node)
    }

    fn parenthesize_constituent_types_of_union_type(
        &self,
        factory: &mut NodeFactory,
        types: NodeList,
    ) -> NodeList {
        map_list(factory, types, |factory, _, member| {
            Self::constituent_of_union(factory, member)
        })
    }

    fn parenthesize_constituent_types_of_intersection_type(
        &self,
        factory: &mut NodeFactory,
        types: NodeList,
    ) -> NodeList {
        map_list(factory, types, |factory, _, member| {
            Self::constituent_of_intersection(factory, member)
        })
    }

    fn parenthesize_leading_type_argument(
        &self,
        factory: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let arena = factory.arena();
        let is_generic_function_type =
            matches!(
                arena.kind(type_node),
                Some(SyntaxKind::FunctionType | SyntaxKind::ConstructorType)
            ) && arena
                .node_data::<SignatureData>(type_node)
                .is_some_and(|data| data.type_parameters.is_some());
        if is_generic_function_type {
            parenthesize_type(factory, type_node)
        } else {
            type_node
        }
    }

    fn parenthesize_type_arguments(
        &self,
        factory: &mut NodeFactory,
        type_arguments: Option<NodeList>,
    ) -> Option<NodeList> {
        let list = type_arguments?;
        if factory.arena().list_nodes(list).is_empty() {
            return Some(list);
        }
        Some(map_list(factory, list, |factory, i, argument| {
            if i == 0 {
                self.parenthesize_leading_type_argument(factory, argument)
            } else {
                argument
            }
        }))
    }
}

impl ParenthesizerRules for NullParenthesizerRules {
    fn parenthesize_left_side_of_binary(
        &self,
        _: &mut NodeFactory,
        _: SyntaxKind,
        left: NodeIndex,
    ) -> NodeIndex {
        left
    }

    fn parenthesize_right_side_of_binary(
        &self,
        _: &mut NodeFactory,
        _: SyntaxKind,
        _: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        right
    }

    fn parenthesize_expression_of_computed_property_name(
        &self,
        _: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        expression
    }

    fn parenthesize_condition_of_conditional_expression(
        &self,
        _: &mut NodeFactory,
        condition: NodeIndex,
    ) -> NodeIndex {
        condition
    }

    fn parenthesize_branch_of_conditional_expression(
        &self,
        _: &mut NodeFactory,
        branch: NodeIndex,
    ) -> NodeIndex {
        branch
    }

    fn parenthesize_expression_of_export_default(
        &self,
        _: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        expression
    }

    fn parenthesize_expression_of_new(
        &self,
        _: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        expression
    }

    fn parenthesize_left_side_of_access(
        &self,
        _: &mut NodeFactory,
        expression: NodeIndex,
        _: bool,
    ) -> NodeIndex {
        expression
    }

    fn parenthesize_operand_of_postfix_unary(
        &self,
        _: &mut NodeFactory,
        operand: NodeIndex,
    ) -> NodeIndex {
        operand
    }

    fn parenthesize_operand_of_prefix_unary(
        &self,
        _: &mut NodeFactory,
        operand: NodeIndex,
    ) -> NodeIndex {
        operand
    }

    fn parenthesize_expressions_of_comma_delimited_list(
        &self,
        _: &mut NodeFactory,
        elements: NodeList,
    ) -> NodeList {
        elements
    }

    fn parenthesize_expression_for_disallowed_comma(
        &self,
        _: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        expression
    }

    fn parenthesize_expression_of_expression_statement(
        &self,
        _: &mut NodeFactory,
        expression: NodeIndex,
    ) -> NodeIndex {
        expression
    }

    fn parenthesize_concise_body_of_arrow_function(
        &self,
        _: &mut NodeFactory,
        body: NodeIndex,
    ) -> NodeIndex {
        body
    }

    fn parenthesize_check_type_of_conditional_type(
        &self,
        _: &mut NodeFactory,
        check_type: NodeIndex,
    ) -> NodeIndex {
        check_type
    }

    fn parenthesize_extends_type_of_conditional_type(
        &self,
        _: &mut NodeFactory,
        extends_type: NodeIndex,
    ) -> NodeIndex {
        extends_type
    }

    fn parenthesize_operand_of_type_operator(
        &self,
        _: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        type_node
    }

    fn parenthesize_operand_of_readonly_type_operator(
        &self,
        _: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        type_node
    }

    fn parenthesize_non_array_type_of_postfix_type(
        &self,
        _: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        type_node
    }

    fn parenthesize_element_type_of_array_type(
        &self,
        _: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        type_node
    }

    fn parenthesize_element_types_of_tuple_type(
        &self,
        _: &mut NodeFactory,
        elements: NodeList,
    ) -> NodeList {
        elements
    }

    fn parenthesize_type_of_optional_type(
        &self,
        _: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        type_node
    }

    fn parenthesize_constituent_types_of_union_type(
        &self,
        _: &mut NodeFactory,
        types: NodeList,
    ) -> NodeList {
        types
    }

    fn parenthesize_constituent_types_of_intersection_type(
        &self,
        _: &mut NodeFactory,
        types: NodeList,
    ) -> NodeList {
        types
    }

    fn parenthesize_leading_type_argument(
        &self,
        _: &mut NodeFactory,
        type_node: NodeIndex,
    ) -> NodeIndex {
        type_node
    }

    fn parenthesize_type_arguments(
        &self,
        _: &mut NodeFactory,
        type_arguments: Option<NodeList>,
    ) -> Option<NodeList> {
        type_arguments
    }
}
