//! Child visitor: rebuild a node from its visited children.
//!
//! A `NodeVisitor` decides what each node becomes (`VisitResult`);
//! `visit_each_child` feeds every child of a node through the visitor and
//! rebuilds the node with the matching `update_*` call, so an untouched
//! subtree comes back as the same `NodeIndex`.

use crate::base::{NodeIndex, NodeList};
use crate::factory::NodeFactory;
use crate::node::*;
use crate::node_arena::PooledData;
use crate::syntax_kind::SyntaxKind;
use smallvec::SmallVec;

/// What a visited node turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisitResult {
    /// Drop the node.
    Removed,
    Single(NodeIndex),
    /// Splice several nodes in place of one (list positions only).
    Many(SmallVec<[NodeIndex; 2]>),
}

impl From<NodeIndex> for VisitResult {
    fn from(node: NodeIndex) -> Self {
        if node.is_none() {
            VisitResult::Removed
        } else {
            VisitResult::Single(node)
        }
    }
}

impl From<Vec<NodeIndex>> for VisitResult {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        match nodes.len() {
            0 => VisitResult::Removed,
            1 => VisitResult::Single(nodes[0]),
            _ => VisitResult::Many(SmallVec::from_vec(nodes)),
        }
    }
}

impl VisitResult {
    pub fn into_vec(self) -> Vec<NodeIndex> {
        match self {
            VisitResult::Removed => Vec::new(),
            VisitResult::Single(node) => vec![node],
            VisitResult::Many(nodes) => nodes.into_vec(),
        }
    }
}

pub trait NodeVisitor {
    fn factory(&mut self) -> &mut NodeFactory;

    /// Transform one node. The default keeps the node and descends.
    fn visit(&mut self, node: NodeIndex) -> VisitResult {
        visit_each_child(self, node).into()
    }
}

/// Visit a single-node slot. Absent stays absent; a removed node becomes
/// absent. Panics when the visitor returns several nodes for the slot.
#[track_caller]
pub fn visit_node<V: NodeVisitor + ?Sized>(visitor: &mut V, node: NodeIndex) -> NodeIndex {
    if node.is_none() {
        return node;
    }
    match visitor.visit(node) {
        VisitResult::Removed => NodeIndex::NONE,
        VisitResult::Single(result) => result,
        VisitResult::Many(nodes) if nodes.len() == 1 => nodes[0],
        VisitResult::Many(nodes) => {
            panic!("visitor produced {} nodes for a single-node slot", nodes.len())
        }
    }
}

/// Visit every element of a list. The same list comes back when no element
/// changed; otherwise a new list with the old range and trailing comma.
pub fn visit_nodes<V: NodeVisitor + ?Sized>(visitor: &mut V, list: NodeList) -> NodeList {
    visit_nodes_with(visitor, list, |visitor, element| visitor.visit(element))
}

/// `visit_nodes` with an explicit per-element callback in place of
/// `NodeVisitor::visit`.
pub fn visit_nodes_with<V, F>(visitor: &mut V, list: NodeList, mut visit: F) -> NodeList
where
    V: NodeVisitor + ?Sized,
    F: FnMut(&mut V, NodeIndex) -> VisitResult,
{
    let (elements, pos, end, has_trailing_comma) = {
        let arena = visitor.factory().arena();
        let Some(array) = arena.get_list(list) else {
            return list;
        };
        (array.nodes.clone(), array.pos, array.end, array.has_trailing_comma)
    };
    let mut updated: Option<Vec<NodeIndex>> = None;
    for (i, &element) in elements.iter().enumerate() {
        let visited = visit(visitor, element);
        let unchanged = matches!(visited, VisitResult::Single(result) if result == element);
        if unchanged {
            if let Some(out) = updated.as_mut() {
                out.push(element);
            }
            continue;
        }
        let out = updated.get_or_insert_with(|| elements[..i].to_vec());
        out.extend(visited.into_vec());
    }
    let Some(nodes) = updated else {
        return list;
    };
    let factory = visitor.factory();
    let result = factory.create_node_array(nodes, Some(has_trailing_comma));
    if let Some(array) = factory.arena_mut().get_list_mut(result) {
        array.pos = pos;
        array.end = end;
    }
    result
}

pub fn visit_opt_nodes<V: NodeVisitor + ?Sized>(
    visitor: &mut V,
    list: Option<NodeList>,
) -> Option<NodeList> {
    list.map(|list| visit_nodes(visitor, list))
}

fn data_of<V: NodeVisitor + ?Sized, D: PooledData>(visitor: &mut V, header: &Node) -> Option<D> {
    visitor.factory().arena().data::<D>(header).cloned()
}

#[track_caller]
fn unexpected(kind: SyntaxKind) -> ! {
    panic!("unexpected {kind:?} in visit_each_child")
}

/// Rebuild `node` from its visited children.
#[track_caller]
pub fn visit_each_child<V: NodeVisitor + ?Sized>(visitor: &mut V, node: NodeIndex) -> NodeIndex {
    let Some(header) = visitor.factory().arena().get(node).copied() else {
        return node;
    };
    let kind = header.kind;

    macro_rules! data {
        ($ty:ty) => {
            match data_of::<V, $ty>(visitor, &header) {
                Some(data) => data,
                None => return node,
            }
        };
    }
    macro_rules! node {
        ($e:expr) => {
            visit_node(visitor, $e)
        };
    }
    macro_rules! list {
        ($e:expr) => {
            visit_nodes(visitor, $e)
        };
    }
    macro_rules! opt_list {
        ($e:expr) => {
            visit_opt_nodes(visitor, $e)
        };
    }
    macro_rules! f {
        () => {
            visitor.factory()
        };
    }
    use SyntaxKind as K;
    match header.category() {
        NodeCategory::Token | NodeCategory::Identifier | NodeCategory::Literal => node,
        NodeCategory::QualifiedName => {
            let d = data!(QualifiedNameData);
            let left = node!(d.left);
            let right = node!(d.right);
            if kind == K::JsxNamespacedName {
                f!().update_jsx_namespaced_name(node, left, right)
            } else {
                f!().update_qualified_name(node, left, right)
            }
        }
        NodeCategory::Expression => {
            let d = data!(ExpressionData);
            let e = node!(d.expression);
            let f = f!();
            match kind {
                K::ComputedPropertyName => f.update_computed_property_name(node, e),
                K::Decorator => f.update_decorator(node, e),
                K::ParenthesizedExpression => f.update_parenthesized_expression(node, e),
                K::DeleteExpression => f.update_delete_expression(node, e),
                K::TypeOfExpression => f.update_type_of_expression(node, e),
                K::VoidExpression => f.update_void_expression(node, e),
                K::AwaitExpression => f.update_await_expression(node, e),
                K::SpreadElement => f.update_spread_element(node, e),
                K::NonNullExpression => f.update_non_null_expression(node, e),
                K::ExpressionStatement => f.update_expression_statement(node, e),
                K::ThrowStatement => f.update_throw_statement(node, e),
                K::ReturnStatement => f.update_return_statement(node, e),
                K::ExternalModuleReference => f.update_external_module_reference(node, e),
                K::SpreadAssignment => f.update_spread_assignment(node, e),
                K::JsxSpreadAttribute => f.update_jsx_spread_attribute(node, e),
                K::JsxClosingElement => f.update_jsx_closing_element(node, e),
                K::PartiallyEmittedExpression => f.update_partially_emitted_expression(node, e),
                other => unexpected(other),
            }
        }
        NodeCategory::WrappedType => {
            let d = data!(WrappedTypeData);
            let t = node!(d.type_node);
            let f = f!();
            match kind {
                K::ArrayType => f.update_array_type_node(node, t),
                K::OptionalType => f.update_optional_type_node(node, t),
                K::RestType => f.update_rest_type_node(node, t),
                K::ParenthesizedType => f.update_parenthesized_type(node, t),
                K::InferType => f.update_infer_type_node(node, t),
                K::LiteralType => f.update_literal_type_node(node, t),
                other => unexpected(other),
            }
        }
        NodeCategory::TypeParameter => {
            let d = data!(TypeParameterData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let constraint = node!(d.constraint);
            let default = node!(d.default);
            f!().update_type_parameter_declaration(node, modifiers, name, constraint, default)
        }
        NodeCategory::Parameter => {
            let d = data!(ParameterData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let type_node = node!(d.type_annotation);
            let initializer = node!(d.initializer);
            f!().update_parameter_declaration(
                node,
                modifiers,
                d.dot_dot_dot_token,
                name,
                d.question_token,
                type_node,
                initializer,
            )
        }
        NodeCategory::Signature => {
            let d = data!(SignatureData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let type_parameters = opt_list!(d.type_parameters);
            let parameters = opt_list!(d.parameters);
            let type_node = node!(d.type_annotation);
            if kind == K::PropertySignature {
                return f!().update_property_signature(node, modifiers, name, d.question_token, type_node);
            }
            let Some(parameters) = parameters else {
                return node;
            };
            let f = f!();
            match kind {
                K::MethodSignature => f.update_method_signature(
                    node,
                    modifiers,
                    name,
                    d.question_token,
                    type_parameters,
                    parameters,
                    type_node,
                ),
                K::CallSignature => f.update_call_signature(node, type_parameters, parameters, type_node),
                K::ConstructSignature => {
                    f.update_construct_signature(node, type_parameters, parameters, type_node)
                }
                K::IndexSignature => f.update_index_signature(node, modifiers, parameters, type_node),
                K::FunctionType => f.update_function_type_node(node, type_parameters, parameters, type_node),
                K::ConstructorType => f.update_constructor_type_node(
                    node,
                    modifiers,
                    type_parameters,
                    parameters,
                    type_node,
                ),
                other => unexpected(other),
            }
        }
        NodeCategory::Function => {
            let d = data!(FunctionData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let type_parameters = opt_list!(d.type_parameters);
            let parameters = list!(d.parameters);
            let type_node = node!(d.type_annotation);
            let body = node!(d.body);
            let f = f!();
            match kind {
                K::FunctionDeclaration => f.update_function_declaration(
                    node,
                    modifiers,
                    d.asterisk_token,
                    name,
                    type_parameters,
                    parameters,
                    type_node,
                    body,
                ),
                K::FunctionExpression => f.update_function_expression(
                    node,
                    modifiers,
                    d.asterisk_token,
                    name,
                    type_parameters,
                    parameters,
                    type_node,
                    body,
                ),
                K::ArrowFunction => {
                    f.update_arrow_function(node, modifiers, type_parameters, parameters, type_node, body)
                }
                K::MethodDeclaration => f.update_method_declaration(
                    node,
                    modifiers,
                    d.asterisk_token,
                    name,
                    d.question_token,
                    type_parameters,
                    parameters,
                    type_node,
                    body,
                ),
                K::Constructor => f.update_constructor_declaration(node, modifiers, parameters, body),
                K::GetAccessor => {
                    f.update_get_accessor_declaration(node, modifiers, name, parameters, type_node, body)
                }
                K::SetAccessor => f.update_set_accessor_declaration(node, modifiers, name, parameters, body),
                K::ClassStaticBlockDeclaration => f.update_class_static_block_declaration(node, body),
                other => unexpected(other),
            }
        }
        NodeCategory::PropertyDecl => {
            let d = data!(PropertyDeclData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let type_node = node!(d.type_annotation);
            let initializer = node!(d.initializer);
            f!().update_property_declaration(
                node,
                modifiers,
                name,
                d.question_token,
                d.exclamation_token,
                type_node,
                initializer,
            )
        }
        NodeCategory::Class => {
            let d = data!(ClassData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let type_parameters = opt_list!(d.type_parameters);
            let heritage_clauses = opt_list!(d.heritage_clauses);
            let members = list!(d.members);
            let f = f!();
            match kind {
                K::ClassDeclaration => f.update_class_declaration(
                    node,
                    modifiers,
                    name,
                    type_parameters,
                    heritage_clauses,
                    members,
                ),
                K::ClassExpression => f.update_class_expression(
                    node,
                    modifiers,
                    name,
                    type_parameters,
                    heritage_clauses,
                    members,
                ),
                K::InterfaceDeclaration => f.update_interface_declaration(
                    node,
                    modifiers,
                    name,
                    type_parameters,
                    heritage_clauses,
                    members,
                ),
                other => unexpected(other),
            }
        }
        NodeCategory::TypeAlias => {
            let d = data!(TypeAliasData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let type_parameters = opt_list!(d.type_parameters);
            let type_node = node!(d.type_node);
            f!().update_type_alias_declaration(node, modifiers, name, type_parameters, type_node)
        }
        NodeCategory::Enum => {
            let d = data!(EnumData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let members = list!(d.members);
            f!().update_enum_declaration(node, modifiers, name, members)
        }
        NodeCategory::PropertyAssignment => {
            let d = data!(PropertyAssignmentData);
            let name = node!(d.name);
            let initializer = node!(d.initializer);
            let f = f!();
            match kind {
                K::EnumMember => f.update_enum_member(node, name, initializer),
                K::PropertyAssignment => f.update_property_assignment(node, name, initializer),
                K::ShorthandPropertyAssignment => {
                    f.update_shorthand_property_assignment(node, name, initializer)
                }
                K::JsxAttribute => f.update_jsx_attribute(node, name, initializer),
                K::ImportAttribute => f.update_import_attribute(node, name, initializer),
                other => unexpected(other),
            }
        }
        NodeCategory::Module => {
            let d = data!(ModuleData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let body = node!(d.body);
            f!().update_module_declaration(node, modifiers, name, body)
        }
        NodeCategory::Block => {
            let d = data!(BlockData);
            let statements = list!(d.statements);
            let f = f!();
            match kind {
                K::Block => f.update_block(node, statements),
                K::ModuleBlock => f.update_module_block(node, statements),
                K::CaseBlock => f.update_case_block(node, statements),
                other => unexpected(other),
            }
        }
        NodeCategory::Heritage => {
            let d = data!(HeritageData);
            let types = list!(d.types);
            f!().update_heritage_clause(node, types)
        }
        NodeCategory::TypeRef => {
            let d = data!(TypeRefData);
            let type_name = node!(d.type_name);
            let type_arguments = opt_list!(d.type_arguments);
            let f = f!();
            match kind {
                K::TypeReference => f.update_type_reference_node(node, type_name, type_arguments),
                K::ExpressionWithTypeArguments => {
                    f.update_expression_with_type_arguments(node, type_name, type_arguments)
                }
                K::TypeQuery => f.update_type_query_node(node, type_name, type_arguments),
                other => unexpected(other),
            }
        }
        NodeCategory::List => {
            let d = data!(ListData);
            let elements = list!(d.elements);
            let f = f!();
            match kind {
                K::UnionType => f.update_union_type_node(node, elements),
                K::IntersectionType => f.update_intersection_type_node(node, elements),
                K::TupleType => f.update_tuple_type_node(node, elements),
                K::TypeLiteral => f.update_type_literal_node(node, elements),
                K::ObjectBindingPattern => f.update_object_binding_pattern(node, elements),
                K::ArrayBindingPattern => f.update_array_binding_pattern(node, elements),
                K::ArrayLiteralExpression => f.update_array_literal_expression(node, elements),
                K::ObjectLiteralExpression => f.update_object_literal_expression(node, elements),
                K::NamedImports => f.update_named_imports(node, elements),
                K::NamedExports => f.update_named_exports(node, elements),
                K::JsxAttributes => f.update_jsx_attributes(node, elements),
                K::CommaListExpression => f.update_comma_list_expression(node, elements),
                K::VariableDeclarationList => f.update_variable_declaration_list(node, elements),
                other => unexpected(other),
            }
        }
        NodeCategory::ImportAttributes => {
            let d = data!(ImportAttributesData);
            let elements = list!(d.elements);
            f!().update_import_attributes(node, elements, d.multi_line)
        }
        NodeCategory::ConditionalType => {
            let d = data!(ConditionalTypeData);
            let check_type = node!(d.check_type);
            let extends_type = node!(d.extends_type);
            let true_type = node!(d.true_type);
            let false_type = node!(d.false_type);
            f!().update_conditional_type_node(node, check_type, extends_type, true_type, false_type)
        }
        NodeCategory::TypeOperator => {
            let d = data!(TypeOperatorData);
            let type_node = node!(d.type_node);
            f!().update_type_operator_node(node, type_node)
        }
        NodeCategory::IndexedAccessType => {
            let d = data!(IndexedAccessTypeData);
            let object_type = node!(d.object_type);
            let index_type = node!(d.index_type);
            f!().update_indexed_access_type_node(node, object_type, index_type)
        }
        NodeCategory::MappedType => {
            let d = data!(MappedTypeData);
            let type_parameter = node!(d.type_parameter);
            let name_type = node!(d.name_type);
            let type_node = node!(d.type_node);
            let members = opt_list!(d.members);
            f!().update_mapped_type_node(
                node,
                d.readonly_token,
                type_parameter,
                name_type,
                d.question_token,
                type_node,
                members,
            )
        }
        NodeCategory::ImportType => {
            let d = data!(ImportTypeData);
            let argument = node!(d.argument);
            let attributes = node!(d.attributes);
            let qualifier = node!(d.qualifier);
            let type_arguments = opt_list!(d.type_arguments);
            f!().update_import_type_node(node, argument, attributes, qualifier, type_arguments, d.is_type_of)
        }
        NodeCategory::Template => {
            let d = data!(TemplateData);
            let head = node!(d.head);
            let spans = list!(d.spans);
            if kind == K::TemplateLiteralType {
                f!().update_template_literal_type(node, head, spans)
            } else {
                f!().update_template_expression(node, head, spans)
            }
        }
        NodeCategory::TemplateSpan => {
            let d = data!(TemplateSpanData);
            let expression = node!(d.expression);
            let literal = node!(d.literal);
            if kind == K::TemplateLiteralTypeSpan {
                f!().update_template_literal_type_span(node, expression, literal)
            } else {
                f!().update_template_span(node, expression, literal)
            }
        }
        NodeCategory::NamedTupleMember => {
            let d = data!(NamedTupleMemberData);
            let name = node!(d.name);
            let type_node = node!(d.type_node);
            f!().update_named_tuple_member(node, d.dot_dot_dot_token, name, d.question_token, type_node)
        }
        NodeCategory::TypePredicate => {
            let d = data!(TypePredicateData);
            let parameter_name = node!(d.parameter_name);
            let type_node = node!(d.type_node);
            f!().update_type_predicate_node(node, d.asserts_modifier, parameter_name, type_node)
        }
        NodeCategory::BindingElement => {
            let d = data!(BindingElementData);
            let property_name = node!(d.property_name);
            let name = node!(d.name);
            let initializer = node!(d.initializer);
            f!().update_binding_element(node, d.dot_dot_dot_token, property_name, name, initializer)
        }
        NodeCategory::AccessExpr => {
            let d = data!(AccessExprData);
            let expression = node!(d.expression);
            let name_or_argument = node!(d.name_or_argument);
            if kind == K::PropertyAccessExpression {
                f!().update_property_access_expression(node, expression, name_or_argument)
            } else {
                f!().update_element_access_expression(node, expression, name_or_argument)
            }
        }
        NodeCategory::CallExpr => {
            let d = data!(CallExprData);
            let expression = node!(d.expression);
            let type_arguments = opt_list!(d.type_arguments);
            let arguments = opt_list!(d.arguments);
            if kind == K::NewExpression {
                return f!().update_new_expression(node, expression, type_arguments, arguments);
            }
            let Some(arguments) = arguments else {
                return node;
            };
            f!().update_call_expression(node, expression, type_arguments, arguments)
        }
        NodeCategory::TaggedTemplate => {
            let d = data!(TaggedTemplateData);
            let tag = node!(d.tag);
            let type_arguments = opt_list!(d.type_arguments);
            let template = node!(d.template);
            f!().update_tagged_template_expression(node, tag, type_arguments, template)
        }
        NodeCategory::TypeAssertion => {
            let d = data!(TypeAssertionData);
            if kind == K::TypeAssertionExpression {
                let type_node = node!(d.type_node);
                let expression = node!(d.expression);
                return f!().update_type_assertion(node, type_node, expression);
            }
            let expression = node!(d.expression);
            let type_node = node!(d.type_node);
            if kind == K::SatisfiesExpression {
                f!().update_satisfies_expression(node, expression, type_node)
            } else {
                f!().update_as_expression(node, expression, type_node)
            }
        }
        NodeCategory::UnaryExpr => {
            let d = data!(UnaryExprData);
            let operand = node!(d.operand);
            if kind == K::PrefixUnaryExpression {
                f!().update_prefix_unary_expression(node, operand)
            } else {
                f!().update_postfix_unary_expression(node, operand)
            }
        }
        NodeCategory::BinaryExpr => {
            let d = data!(BinaryExprData);
            let left = node!(d.left);
            let right = node!(d.right);
            f!().update_binary_expression(node, left, d.operator_token, right)
        }
        NodeCategory::ConditionalExpr => {
            let d = data!(ConditionalExprData);
            let condition = node!(d.condition);
            let when_true = node!(d.when_true);
            let when_false = node!(d.when_false);
            f!().update_conditional_expression(node, condition, when_true, when_false)
        }
        NodeCategory::Yield => {
            let d = data!(YieldData);
            let expression = node!(d.expression);
            f!().update_yield_expression(node, d.asterisk_token, expression)
        }
        NodeCategory::MetaProperty => {
            let d = data!(MetaPropertyData);
            let name = node!(d.name);
            f!().update_meta_property(node, name)
        }
        NodeCategory::VariableStatement => {
            let d = data!(VariableData);
            let modifiers = opt_list!(d.modifiers);
            let declaration_list = node!(d.declaration_list);
            f!().update_variable_statement(node, modifiers, declaration_list)
        }
        NodeCategory::VariableDeclaration => {
            let d = data!(VariableDeclarationData);
            let name = node!(d.name);
            let type_node = node!(d.type_annotation);
            let initializer = node!(d.initializer);
            f!().update_variable_declaration(node, name, d.exclamation_token, type_node, initializer)
        }
        NodeCategory::If => {
            let d = data!(IfStatementData);
            let expression = node!(d.expression);
            let then_statement = node!(d.then_statement);
            let else_statement = node!(d.else_statement);
            f!().update_if_statement(node, expression, then_statement, else_statement)
        }
        NodeCategory::Loop => {
            let d = data!(LoopData);
            match kind {
                K::DoStatement => {
                    let statement = node!(d.statement);
                    let condition = node!(d.condition);
                    f!().update_do_statement(node, statement, condition)
                }
                K::WhileStatement => {
                    let condition = node!(d.condition);
                    let statement = node!(d.statement);
                    f!().update_while_statement(node, condition, statement)
                }
                K::ForStatement => {
                    let initializer = node!(d.initializer);
                    let condition = node!(d.condition);
                    let incrementor = node!(d.incrementor);
                    let statement = node!(d.statement);
                    f!().update_for_statement(node, initializer, condition, incrementor, statement)
                }
                other => unexpected(other),
            }
        }
        NodeCategory::ForInOf => {
            let d = data!(ForInOfData);
            let initializer = node!(d.initializer);
            let expression = node!(d.expression);
            let statement = node!(d.statement);
            if kind == K::ForOfStatement {
                f!().update_for_of_statement(node, d.await_modifier, initializer, expression, statement)
            } else {
                f!().update_for_in_statement(node, initializer, expression, statement)
            }
        }
        NodeCategory::Name => {
            let d = data!(NameData);
            let name = node!(d.name);
            let f = f!();
            match kind {
                K::BreakStatement => f.update_break_statement(node, name),
                K::ContinueStatement => f.update_continue_statement(node, name),
                K::NamespaceImport => f.update_namespace_import(node, name),
                K::NamespaceExport => f.update_namespace_export(node, name),
                K::NamespaceExportDeclaration => f.update_namespace_export_declaration(node, name),
                other => unexpected(other),
            }
        }
        NodeCategory::Labeled => {
            let d = data!(LabeledData);
            let label = node!(d.label);
            let statement = node!(d.statement);
            f!().update_labeled_statement(node, label, statement)
        }
        NodeCategory::With => {
            let d = data!(WithData);
            let expression = node!(d.expression);
            let statement = node!(d.statement);
            f!().update_with_statement(node, expression, statement)
        }
        NodeCategory::Switch => {
            let d = data!(SwitchData);
            let expression = node!(d.expression);
            let case_block = node!(d.case_block);
            f!().update_switch_statement(node, expression, case_block)
        }
        NodeCategory::CaseClause => {
            let d = data!(CaseClauseData);
            let expression = node!(d.expression);
            let statements = list!(d.statements);
            if kind == K::DefaultClause {
                f!().update_default_clause(node, statements)
            } else {
                f!().update_case_clause(node, expression, statements)
            }
        }
        NodeCategory::Try => {
            let d = data!(TryData);
            let try_block = node!(d.try_block);
            let catch_clause = node!(d.catch_clause);
            let finally_block = node!(d.finally_block);
            f!().update_try_statement(node, try_block, catch_clause, finally_block)
        }
        NodeCategory::CatchClause => {
            let d = data!(CatchClauseData);
            let variable_declaration = node!(d.variable_declaration);
            let block = node!(d.block);
            f!().update_catch_clause(node, variable_declaration, block)
        }
        NodeCategory::ImportEquals => {
            let d = data!(ImportEqualsData);
            let modifiers = opt_list!(d.modifiers);
            let name = node!(d.name);
            let module_reference = node!(d.module_reference);
            f!().update_import_equals_declaration(node, modifiers, d.is_type_only, name, module_reference)
        }
        NodeCategory::ImportDecl => {
            let d = data!(ImportDeclData);
            let modifiers = opt_list!(d.modifiers);
            let import_clause = node!(d.import_clause);
            let module_specifier = node!(d.module_specifier);
            let attributes = node!(d.attributes);
            f!().update_import_declaration(node, modifiers, import_clause, module_specifier, attributes)
        }
        NodeCategory::ImportClause => {
            let d = data!(ImportClauseData);
            let name = node!(d.name);
            let named_bindings = node!(d.named_bindings);
            f!().update_import_clause(node, d.is_type_only, name, named_bindings)
        }
        NodeCategory::Specifier => {
            let d = data!(SpecifierData);
            let property_name = node!(d.property_name);
            let name = node!(d.name);
            if kind == K::ExportSpecifier {
                f!().update_export_specifier(node, d.is_type_only, property_name, name)
            } else {
                f!().update_import_specifier(node, d.is_type_only, property_name, name)
            }
        }
        NodeCategory::ExportDecl => {
            let d = data!(ExportDeclData);
            let modifiers = opt_list!(d.modifiers);
            let export_clause = node!(d.export_clause);
            let module_specifier = node!(d.module_specifier);
            let attributes = node!(d.attributes);
            f!().update_export_declaration(
                node,
                modifiers,
                d.is_type_only,
                export_clause,
                module_specifier,
                attributes,
            )
        }
        NodeCategory::ExportAssignment => {
            let d = data!(ExportAssignmentData);
            let modifiers = opt_list!(d.modifiers);
            let expression = node!(d.expression);
            f!().update_export_assignment(node, modifiers, expression)
        }
        NodeCategory::JsxElement => {
            let d = data!(JsxElementData);
            let opening = node!(d.opening_element);
            let children = list!(d.children);
            let closing = node!(d.closing_element);
            if kind == K::JsxFragment {
                f!().update_jsx_fragment(node, opening, children, closing)
            } else {
                f!().update_jsx_element(node, opening, children, closing)
            }
        }
        NodeCategory::JsxOpening => {
            let d = data!(JsxOpeningData);
            let tag_name = node!(d.tag_name);
            let type_arguments = opt_list!(d.type_arguments);
            let attributes = node!(d.attributes);
            if kind == K::JsxSelfClosingElement {
                f!().update_jsx_self_closing_element(node, tag_name, type_arguments, attributes)
            } else {
                f!().update_jsx_opening_element(node, tag_name, type_arguments, attributes)
            }
        }
        NodeCategory::JsxExpression => {
            let d = data!(JsxExpressionData);
            let expression = node!(d.expression);
            f!().update_jsx_expression(node, expression)
        }
        NodeCategory::SourceFile => {
            let d = data!(SourceFileData);
            let statements = list!(d.statements);
            f!().update_source_file(node, statements, d.is_declaration_file, d.has_no_default_lib)
        }
        NodeCategory::Bundle => {
            let d = data!(BundleData);
            let source_files = d
                .source_files
                .iter()
                .map(|&file| visit_node(visitor, file))
                .filter(|file| file.is_some())
                .collect();
            f!().update_bundle(node, source_files)
        }
    }
}
