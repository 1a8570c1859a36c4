//! Type nodes, type members and type parameters.
//!
//! Every type node reports exactly `ContainsTypeScript`; its children are
//! never consulted since `TYPE_EXCLUDES` masks everything else anyway.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::TransformFlags;
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeFactory {
    /// Wrap an optional list so that its cached flags are populated.
    pub(crate) fn as_node_array(&mut self, list: Option<NodeList>) -> Option<NodeList> {
        list.map(|list| self.create_node_array(list, None))
    }

    #[inline]
    fn finish_type(&mut self, node: NodeIndex) -> NodeIndex {
        self.finish(node, TransformFlags::CONTAINS_TYPESCRIPT)
    }

    // ========================================================================
    // Type parameters
    // ========================================================================

    pub fn create_type_parameter_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        constraint: NodeIndex,
        default: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let node = self.alloc(
            SyntaxKind::TypeParameter,
            TypeParameterData {
                modifiers,
                name,
                constraint,
                default,
            },
        );
        self.finish_type(node)
    }

    pub fn update_type_parameter_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        constraint: NodeIndex,
        default: NodeIndex,
    ) -> NodeIndex {
        let data: TypeParameterData = self.data_of(node, &[SyntaxKind::TypeParameter]);
        if data.modifiers == modifiers
            && data.name == name
            && data.constraint == constraint
            && data.default == default
        {
            return node;
        }
        let updated = self.create_type_parameter_declaration(modifiers, name, constraint, default);
        self.update(updated, node)
    }

    // ========================================================================
    // Type members
    // ========================================================================

    fn create_signature_like(&mut self, kind: SyntaxKind, data: SignatureData) -> NodeIndex {
        let data = SignatureData {
            modifiers: self.as_node_array(data.modifiers),
            type_parameters: self.as_node_array(data.type_parameters),
            parameters: self.as_node_array(data.parameters),
            ..data
        };
        let node = self.alloc(kind, data);
        self.finish_type(node)
    }

    fn update_signature_like(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        data: SignatureData,
    ) -> NodeIndex {
        let existing: SignatureData = self.data_of(node, &[kind]);
        if existing == data {
            return node;
        }
        let updated = self.create_signature_like(kind, data);
        self.update(updated, node)
    }

    pub fn create_property_signature(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::PropertySignature,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters: None,
                parameters: None,
                type_annotation: type_node,
            },
        )
    }

    pub fn update_property_signature(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::PropertySignature,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters: None,
                parameters: None,
                type_annotation: type_node,
            },
        )
    }

    pub fn create_method_signature(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::MethodSignature,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters,
                parameters: Some(parameters),
                type_annotation: type_node,
            },
        )
    }

    pub fn update_method_signature(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::MethodSignature,
            SignatureData {
                modifiers,
                name,
                question_token,
                type_parameters,
                parameters: Some(parameters),
                type_annotation: type_node,
            },
        )
    }

    pub fn create_call_signature(
        &mut self,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::CallSignature,
            Self::unnamed_signature(None, type_parameters, parameters, type_node),
        )
    }

    pub fn update_call_signature(
        &mut self,
        node: NodeIndex,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::CallSignature,
            Self::unnamed_signature(None, type_parameters, parameters, type_node),
        )
    }

    pub fn create_construct_signature(
        &mut self,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::ConstructSignature,
            Self::unnamed_signature(None, type_parameters, parameters, type_node),
        )
    }

    pub fn update_construct_signature(
        &mut self,
        node: NodeIndex,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::ConstructSignature,
            Self::unnamed_signature(None, type_parameters, parameters, type_node),
        )
    }

    pub fn create_index_signature(
        &mut self,
        modifiers: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::IndexSignature,
            Self::unnamed_signature(modifiers, None, parameters, type_node),
        )
    }

    pub fn update_index_signature(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::IndexSignature,
            Self::unnamed_signature(modifiers, None, parameters, type_node),
        )
    }

    fn unnamed_signature(
        modifiers: Option<NodeList>,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> SignatureData {
        SignatureData {
            modifiers,
            name: NodeIndex::NONE,
            question_token: false,
            type_parameters,
            parameters: Some(parameters),
            type_annotation: type_node,
        }
    }

    // ========================================================================
    // Types
    // ========================================================================

    /// Panics unless `kind` is a keyword usable as a type.
    #[track_caller]
    pub fn create_keyword_type_node(&mut self, kind: SyntaxKind) -> NodeIndex {
        if !kind.is_keyword_type_kind() {
            panic!("{kind:?} is not a keyword type");
        }
        self.create_token(kind)
    }

    pub fn create_type_predicate_node(
        &mut self,
        asserts_modifier: bool,
        parameter_name: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let node = self.alloc(
            SyntaxKind::TypePredicate,
            TypePredicateData {
                asserts_modifier,
                parameter_name,
                type_node,
            },
        );
        self.finish_type(node)
    }

    pub fn update_type_predicate_node(
        &mut self,
        node: NodeIndex,
        asserts_modifier: bool,
        parameter_name: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let data: TypePredicateData = self.data_of(node, &[SyntaxKind::TypePredicate]);
        if data.asserts_modifier == asserts_modifier
            && data.parameter_name == parameter_name
            && data.type_node == type_node
        {
            return node;
        }
        let updated = self.create_type_predicate_node(asserts_modifier, parameter_name, type_node);
        self.update(updated, node)
    }

    fn create_type_ref_like(
        &mut self,
        kind: SyntaxKind,
        type_name: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let type_arguments = self.as_node_array(type_arguments);
        let type_arguments = rules.parenthesize_type_arguments(self, type_arguments);
        let node = self.alloc(
            kind,
            TypeRefData {
                type_name,
                type_arguments,
            },
        );
        self.finish_type(node)
    }

    pub fn create_type_reference_node(
        &mut self,
        type_name: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        self.create_type_ref_like(SyntaxKind::TypeReference, type_name, type_arguments)
    }

    pub fn update_type_reference_node(
        &mut self,
        node: NodeIndex,
        type_name: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let data: TypeRefData = self.data_of(node, &[SyntaxKind::TypeReference]);
        if data.type_name == type_name && data.type_arguments == type_arguments {
            return node;
        }
        let updated = self.create_type_reference_node(type_name, type_arguments);
        self.update(updated, node)
    }

    pub fn create_type_query_node(
        &mut self,
        expr_name: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        self.create_type_ref_like(SyntaxKind::TypeQuery, expr_name, type_arguments)
    }

    pub fn update_type_query_node(
        &mut self,
        node: NodeIndex,
        expr_name: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let data: TypeRefData = self.data_of(node, &[SyntaxKind::TypeQuery]);
        if data.type_name == expr_name && data.type_arguments == type_arguments {
            return node;
        }
        let updated = self.create_type_query_node(expr_name, type_arguments);
        self.update(updated, node)
    }

    /// `expr<T>` in heritage clauses. Not a type node for flag purposes.
    pub fn create_expression_with_type_arguments(
        &mut self,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_left_side_of_access(self, expression, false);
        let type_arguments = self.as_node_array(type_arguments);
        let type_arguments = rules.parenthesize_type_arguments(self, type_arguments);
        let flags = self.child_flags(expression)
            | self.children_flags(type_arguments)
            | TransformFlags::CONTAINS_ES2015;
        let node = self.alloc(
            SyntaxKind::ExpressionWithTypeArguments,
            TypeRefData {
                type_name: expression,
                type_arguments,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_expression_with_type_arguments(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        let data: TypeRefData = self.data_of(node, &[SyntaxKind::ExpressionWithTypeArguments]);
        if data.type_name == expression && data.type_arguments == type_arguments {
            return node;
        }
        let updated = self.create_expression_with_type_arguments(expression, type_arguments);
        self.update(updated, node)
    }

    pub fn create_function_type_node(
        &mut self,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::FunctionType,
            Self::unnamed_signature(None, type_parameters, parameters, type_node),
        )
    }

    pub fn update_function_type_node(
        &mut self,
        node: NodeIndex,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::FunctionType,
            Self::unnamed_signature(None, type_parameters, parameters, type_node),
        )
    }

    /// `new (...) => T`, optionally `abstract`.
    pub fn create_constructor_type_node(
        &mut self,
        modifiers: Option<NodeList>,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_signature_like(
            SyntaxKind::ConstructorType,
            Self::unnamed_signature(modifiers, type_parameters, parameters, type_node),
        )
    }

    pub fn update_constructor_type_node(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_signature_like(
            node,
            SyntaxKind::ConstructorType,
            Self::unnamed_signature(modifiers, type_parameters, parameters, type_node),
        )
    }

    fn create_type_list_like(
        &mut self,
        kind: SyntaxKind,
        elements: NodeList,
        multi_line: bool,
    ) -> NodeIndex {
        let elements = self.create_node_array(elements, None);
        let node = self.alloc(
            kind,
            ListData {
                elements,
                multi_line,
            },
        );
        self.finish_type(node)
    }

    fn update_type_list_like(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        elements: NodeList,
    ) -> NodeIndex {
        let data: ListData = self.data_of(node, &[kind]);
        if data.elements == elements {
            return node;
        }
        let updated = match kind {
            SyntaxKind::TupleType => self.create_tuple_type_node(elements),
            SyntaxKind::UnionType => self.create_union_type_node(elements),
            SyntaxKind::IntersectionType => self.create_intersection_type_node(elements),
            _ => self.create_type_list_like(kind, elements, data.multi_line),
        };
        self.update(updated, node)
    }

    pub fn create_type_literal_node(&mut self, members: NodeList) -> NodeIndex {
        self.create_type_list_like(SyntaxKind::TypeLiteral, members, false)
    }

    pub fn update_type_literal_node(&mut self, node: NodeIndex, members: NodeList) -> NodeIndex {
        self.update_type_list_like(node, SyntaxKind::TypeLiteral, members)
    }

    pub fn create_tuple_type_node(&mut self, elements: NodeList) -> NodeIndex {
        let rules = self.parenthesizer;
        let elements = rules.parenthesize_element_types_of_tuple_type(self, elements);
        self.create_type_list_like(SyntaxKind::TupleType, elements, false)
    }

    pub fn update_tuple_type_node(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        self.update_type_list_like(node, SyntaxKind::TupleType, elements)
    }

    pub fn create_union_type_node(&mut self, types: NodeList) -> NodeIndex {
        let rules = self.parenthesizer;
        let types = rules.parenthesize_constituent_types_of_union_type(self, types);
        self.create_type_list_like(SyntaxKind::UnionType, types, false)
    }

    pub fn update_union_type_node(&mut self, node: NodeIndex, types: NodeList) -> NodeIndex {
        self.update_type_list_like(node, SyntaxKind::UnionType, types)
    }

    pub fn create_intersection_type_node(&mut self, types: NodeList) -> NodeIndex {
        let rules = self.parenthesizer;
        let types = rules.parenthesize_constituent_types_of_intersection_type(self, types);
        self.create_type_list_like(SyntaxKind::IntersectionType, types, false)
    }

    pub fn update_intersection_type_node(&mut self, node: NodeIndex, types: NodeList) -> NodeIndex {
        self.update_type_list_like(node, SyntaxKind::IntersectionType, types)
    }

    pub fn create_named_tuple_member(
        &mut self,
        dot_dot_dot_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let node = self.alloc(
            SyntaxKind::NamedTupleMember,
            NamedTupleMemberData {
                dot_dot_dot_token,
                name,
                question_token,
                type_node,
            },
        );
        self.finish_type(node)
    }

    pub fn update_named_tuple_member(
        &mut self,
        node: NodeIndex,
        dot_dot_dot_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let data: NamedTupleMemberData = self.data_of(node, &[SyntaxKind::NamedTupleMember]);
        if data.dot_dot_dot_token == dot_dot_dot_token
            && data.name == name
            && data.question_token == question_token
            && data.type_node == type_node
        {
            return node;
        }
        let updated =
            self.create_named_tuple_member(dot_dot_dot_token, name, question_token, type_node);
        self.update(updated, node)
    }

    fn create_wrapped_type(&mut self, kind: SyntaxKind, type_node: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let type_node = match kind {
            SyntaxKind::ArrayType => rules.parenthesize_element_type_of_array_type(self, type_node),
            SyntaxKind::OptionalType => rules.parenthesize_type_of_optional_type(self, type_node),
            _ => type_node,
        };
        let node = self.alloc(kind, WrappedTypeData { type_node });
        self.finish_type(node)
    }

    fn update_wrapped_type(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let data: WrappedTypeData = self.data_of(node, &[kind]);
        if data.type_node == type_node {
            return node;
        }
        let updated = self.create_wrapped_type(kind, type_node);
        self.update(updated, node)
    }

    pub fn create_array_type_node(&mut self, element_type: NodeIndex) -> NodeIndex {
        self.create_wrapped_type(SyntaxKind::ArrayType, element_type)
    }

    pub fn update_array_type_node(&mut self, node: NodeIndex, element_type: NodeIndex) -> NodeIndex {
        self.update_wrapped_type(node, SyntaxKind::ArrayType, element_type)
    }

    pub fn create_optional_type_node(&mut self, type_node: NodeIndex) -> NodeIndex {
        self.create_wrapped_type(SyntaxKind::OptionalType, type_node)
    }

    pub fn update_optional_type_node(&mut self, node: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        self.update_wrapped_type(node, SyntaxKind::OptionalType, type_node)
    }

    pub fn create_rest_type_node(&mut self, type_node: NodeIndex) -> NodeIndex {
        self.create_wrapped_type(SyntaxKind::RestType, type_node)
    }

    pub fn update_rest_type_node(&mut self, node: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        self.update_wrapped_type(node, SyntaxKind::RestType, type_node)
    }

    pub fn create_parenthesized_type(&mut self, type_node: NodeIndex) -> NodeIndex {
        self.create_wrapped_type(SyntaxKind::ParenthesizedType, type_node)
    }

    pub fn update_parenthesized_type(&mut self, node: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        self.update_wrapped_type(node, SyntaxKind::ParenthesizedType, type_node)
    }

    pub fn create_infer_type_node(&mut self, type_parameter: NodeIndex) -> NodeIndex {
        self.create_wrapped_type(SyntaxKind::InferType, type_parameter)
    }

    pub fn update_infer_type_node(&mut self, node: NodeIndex, type_parameter: NodeIndex) -> NodeIndex {
        self.update_wrapped_type(node, SyntaxKind::InferType, type_parameter)
    }

    /// `null`, `true`, `false`, a literal, or `-1` as a type.
    pub fn create_literal_type_node(&mut self, literal: NodeIndex) -> NodeIndex {
        self.create_wrapped_type(SyntaxKind::LiteralType, literal)
    }

    pub fn update_literal_type_node(&mut self, node: NodeIndex, literal: NodeIndex) -> NodeIndex {
        self.update_wrapped_type(node, SyntaxKind::LiteralType, literal)
    }

    pub fn create_this_type_node(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::ThisType);
        self.finish_type(node)
    }

    pub fn create_conditional_type_node(
        &mut self,
        check_type: NodeIndex,
        extends_type: NodeIndex,
        true_type: NodeIndex,
        false_type: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let check_type = rules.parenthesize_check_type_of_conditional_type(self, check_type);
        let extends_type = rules.parenthesize_extends_type_of_conditional_type(self, extends_type);
        let node = self.alloc(
            SyntaxKind::ConditionalType,
            ConditionalTypeData {
                check_type,
                extends_type,
                true_type,
                false_type,
            },
        );
        self.finish_type(node)
    }

    pub fn update_conditional_type_node(
        &mut self,
        node: NodeIndex,
        check_type: NodeIndex,
        extends_type: NodeIndex,
        true_type: NodeIndex,
        false_type: NodeIndex,
    ) -> NodeIndex {
        let data: ConditionalTypeData = self.data_of(node, &[SyntaxKind::ConditionalType]);
        if data.check_type == check_type
            && data.extends_type == extends_type
            && data.true_type == true_type
            && data.false_type == false_type
        {
            return node;
        }
        let updated =
            self.create_conditional_type_node(check_type, extends_type, true_type, false_type);
        self.update(updated, node)
    }

    /// `keyof T`, `unique symbol`, `readonly T[]`.
    pub fn create_type_operator_node(&mut self, operator: SyntaxKind, type_node: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let type_node = if operator == SyntaxKind::ReadonlyKeyword {
            rules.parenthesize_operand_of_readonly_type_operator(self, type_node)
        } else {
            rules.parenthesize_operand_of_type_operator(self, type_node)
        };
        let node = self.alloc(
            SyntaxKind::TypeOperator,
            TypeOperatorData { operator, type_node },
        );
        self.finish_type(node)
    }

    pub fn update_type_operator_node(&mut self, node: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        let data: TypeOperatorData = self.data_of(node, &[SyntaxKind::TypeOperator]);
        if data.type_node == type_node {
            return node;
        }
        let updated = self.create_type_operator_node(data.operator, type_node);
        self.update(updated, node)
    }

    pub fn create_indexed_access_type_node(
        &mut self,
        object_type: NodeIndex,
        index_type: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let object_type = rules.parenthesize_non_array_type_of_postfix_type(self, object_type);
        let node = self.alloc(
            SyntaxKind::IndexedAccessType,
            IndexedAccessTypeData {
                object_type,
                index_type,
            },
        );
        self.finish_type(node)
    }

    pub fn update_indexed_access_type_node(
        &mut self,
        node: NodeIndex,
        object_type: NodeIndex,
        index_type: NodeIndex,
    ) -> NodeIndex {
        let data: IndexedAccessTypeData = self.data_of(node, &[SyntaxKind::IndexedAccessType]);
        if data.object_type == object_type && data.index_type == index_type {
            return node;
        }
        let updated = self.create_indexed_access_type_node(object_type, index_type);
        self.update(updated, node)
    }

    pub fn create_mapped_type_node(
        &mut self,
        readonly_token: Option<SyntaxKind>,
        type_parameter: NodeIndex,
        name_type: NodeIndex,
        question_token: Option<SyntaxKind>,
        type_node: NodeIndex,
        members: Option<NodeList>,
    ) -> NodeIndex {
        let members = self.as_node_array(members);
        let node = self.alloc(
            SyntaxKind::MappedType,
            MappedTypeData {
                readonly_token,
                type_parameter,
                name_type,
                question_token,
                type_node,
                members,
            },
        );
        self.finish_type(node)
    }

    pub fn update_mapped_type_node(
        &mut self,
        node: NodeIndex,
        readonly_token: Option<SyntaxKind>,
        type_parameter: NodeIndex,
        name_type: NodeIndex,
        question_token: Option<SyntaxKind>,
        type_node: NodeIndex,
        members: Option<NodeList>,
    ) -> NodeIndex {
        let data: MappedTypeData = self.data_of(node, &[SyntaxKind::MappedType]);
        let candidate = MappedTypeData {
            readonly_token,
            type_parameter,
            name_type,
            question_token,
            type_node,
            members,
        };
        if data == candidate {
            return node;
        }
        let updated = self.create_mapped_type_node(
            readonly_token,
            type_parameter,
            name_type,
            question_token,
            type_node,
            members,
        );
        self.update(updated, node)
    }

    pub fn create_template_literal_type(&mut self, head: NodeIndex, spans: NodeList) -> NodeIndex {
        let spans = self.create_node_array(spans, None);
        let node = self.alloc(SyntaxKind::TemplateLiteralType, TemplateData { head, spans });
        self.finish_type(node)
    }

    pub fn update_template_literal_type(
        &mut self,
        node: NodeIndex,
        head: NodeIndex,
        spans: NodeList,
    ) -> NodeIndex {
        let data: TemplateData = self.data_of(node, &[SyntaxKind::TemplateLiteralType]);
        if data.head == head && data.spans == spans {
            return node;
        }
        let updated = self.create_template_literal_type(head, spans);
        self.update(updated, node)
    }

    pub fn create_template_literal_type_span(
        &mut self,
        type_node: NodeIndex,
        literal: NodeIndex,
    ) -> NodeIndex {
        let node = self.alloc(
            SyntaxKind::TemplateLiteralTypeSpan,
            TemplateSpanData {
                expression: type_node,
                literal,
            },
        );
        self.finish_type(node)
    }

    pub fn update_template_literal_type_span(
        &mut self,
        node: NodeIndex,
        type_node: NodeIndex,
        literal: NodeIndex,
    ) -> NodeIndex {
        let data: TemplateSpanData = self.data_of(node, &[SyntaxKind::TemplateLiteralTypeSpan]);
        if data.expression == type_node && data.literal == literal {
            return node;
        }
        let updated = self.create_template_literal_type_span(type_node, literal);
        self.update(updated, node)
    }

    /// `import("mod", { with: ... }).Qualifier<T>`, optionally `typeof`.
    pub fn create_import_type_node(
        &mut self,
        argument: NodeIndex,
        attributes: NodeIndex,
        qualifier: NodeIndex,
        type_arguments: Option<NodeList>,
        is_type_of: bool,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let type_arguments = self.as_node_array(type_arguments);
        let type_arguments = rules.parenthesize_type_arguments(self, type_arguments);
        let node = self.alloc(
            SyntaxKind::ImportType,
            ImportTypeData {
                is_type_of,
                argument,
                attributes,
                qualifier,
                type_arguments,
            },
        );
        self.finish_type(node)
    }

    pub fn update_import_type_node(
        &mut self,
        node: NodeIndex,
        argument: NodeIndex,
        attributes: NodeIndex,
        qualifier: NodeIndex,
        type_arguments: Option<NodeList>,
        is_type_of: bool,
    ) -> NodeIndex {
        let data: ImportTypeData = self.data_of(node, &[SyntaxKind::ImportType]);
        if data.argument == argument
            && data.attributes == attributes
            && data.qualifier == qualifier
            && data.type_arguments == type_arguments
            && data.is_type_of == is_type_of
        {
            return node;
        }
        let updated =
            self.create_import_type_node(argument, attributes, qualifier, type_arguments, is_type_of);
        self.update(updated, node)
    }
}
