//! Expressions, binding patterns and names that only appear in expressions.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags, TransformFlags};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use super::transform_flags::propagate_assignment_pattern_flags;

impl NodeFactory {
    pub(crate) fn is_async(&self, modifiers: Option<NodeList>) -> bool {
        self.arena
            .modifiers_to_flags(modifiers)
            .contains(ModifierFlags::ASYNC)
    }

    fn is_super_keyword(&self, node: NodeIndex) -> bool {
        self.arena.is_kind(node, SyntaxKind::SuperKeyword)
    }

    fn is_super_property(&self, node: NodeIndex) -> bool {
        matches!(
            self.kind_of(node),
            Some(SyntaxKind::PropertyAccessExpression | SyntaxKind::ElementAccessExpression)
        ) && self
            .arena
            .node_data::<AccessExprData>(node)
            .is_some_and(|data| self.is_super_keyword(data.expression))
    }

    fn is_optional_chain_node(&self, node: NodeIndex) -> bool {
        self.arena
            .get(node)
            .is_some_and(|header| header.flags.contains(NodeFlags::OPTIONAL_CHAIN))
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub fn create_qualified_name(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(left) | self.identifier_name_flags(right);
        let node = self.alloc(SyntaxKind::QualifiedName, QualifiedNameData { left, right });
        self.finish(node, flags)
    }

    pub fn update_qualified_name(
        &mut self,
        node: NodeIndex,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        let data: QualifiedNameData = self.data_of(node, &[SyntaxKind::QualifiedName]);
        if data.left == left && data.right == right {
            return node;
        }
        let updated = self.create_qualified_name(left, right);
        self.update(updated, node)
    }

    pub fn create_computed_property_name(&mut self, expression: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_expression_of_computed_property_name(self, expression);
        let flags = self.child_flags(expression)
            | TransformFlags::CONTAINS_ES2015
            | TransformFlags::CONTAINS_COMPUTED_PROPERTY_NAME;
        let node = self.alloc(SyntaxKind::ComputedPropertyName, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_computed_property_name(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::ComputedPropertyName]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_computed_property_name(expression);
        self.update(updated, node)
    }

    pub fn create_decorator(&mut self, expression: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_left_side_of_access(self, expression, false);
        let flags = self.child_flags(expression)
            | TransformFlags::CONTAINS_TYPESCRIPT
            | TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX
            | TransformFlags::CONTAINS_DECORATORS;
        let node = self.alloc(SyntaxKind::Decorator, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_decorator(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::Decorator]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_decorator(expression);
        self.update(updated, node)
    }

    // ========================================================================
    // Binding patterns
    // ========================================================================

    pub fn create_object_binding_pattern(&mut self, elements: NodeList) -> NodeIndex {
        let elements = self.create_node_array(elements, None);
        let mut flags = self.children_flags(Some(elements))
            | TransformFlags::CONTAINS_ES2015
            | TransformFlags::CONTAINS_BINDING_PATTERN;
        if flags.contains(TransformFlags::CONTAINS_REST_OR_SPREAD) {
            flags |= TransformFlags::CONTAINS_ES2018 | TransformFlags::CONTAINS_OBJECT_REST_OR_SPREAD;
        }
        let node = self.alloc(
            SyntaxKind::ObjectBindingPattern,
            ListData {
                elements,
                multi_line: false,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_object_binding_pattern(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::ObjectBindingPattern]);
        if data.elements == elements {
            return node;
        }
        let updated = self.create_object_binding_pattern(elements);
        self.update(updated, node)
    }

    pub fn create_array_binding_pattern(&mut self, elements: NodeList) -> NodeIndex {
        let elements = self.create_node_array(elements, None);
        let flags = self.children_flags(Some(elements))
            | TransformFlags::CONTAINS_ES2015
            | TransformFlags::CONTAINS_BINDING_PATTERN;
        let node = self.alloc(
            SyntaxKind::ArrayBindingPattern,
            ListData {
                elements,
                multi_line: false,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_array_binding_pattern(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::ArrayBindingPattern]);
        if data.elements == elements {
            return node;
        }
        let updated = self.create_array_binding_pattern(elements);
        self.update(updated, node)
    }

    pub fn create_binding_element(
        &mut self,
        dot_dot_dot_token: bool,
        property_name: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let initializer = if initializer.is_some() {
            rules.parenthesize_expression_for_disallowed_comma(self, initializer)
        } else {
            initializer
        };
        let mut flags = self.name_flags(property_name)
            | self.name_flags(name)
            | self.child_flags(initializer)
            | TransformFlags::CONTAINS_ES2015;
        if dot_dot_dot_token {
            flags |= TransformFlags::CONTAINS_REST_OR_SPREAD;
        }
        let node = self.alloc(
            SyntaxKind::BindingElement,
            BindingElementData {
                dot_dot_dot_token,
                property_name,
                name,
                initializer,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_binding_element(
        &mut self,
        node: NodeIndex,
        dot_dot_dot_token: bool,
        property_name: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data: BindingElementData = self.data_of(node, &[SyntaxKind::BindingElement]);
        if data.dot_dot_dot_token == dot_dot_dot_token
            && data.property_name == property_name
            && data.name == name
            && data.initializer == initializer
        {
            return node;
        }
        let updated =
            self.create_binding_element(dot_dot_dot_token, property_name, name, initializer);
        self.update(updated, node)
    }

    // ========================================================================
    // Literal expressions
    // ========================================================================

    pub fn create_array_literal_expression(&mut self, elements: NodeList, multi_line: bool) -> NodeIndex {
        let rules = self.parenthesizer;
        let elements = rules.parenthesize_expressions_of_comma_delimited_list(self, elements);
        let elements = self.create_node_array(elements, None);
        let flags = self.children_flags(Some(elements));
        let node = self.alloc(
            SyntaxKind::ArrayLiteralExpression,
            ListData {
                elements,
                multi_line,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_array_literal_expression(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::ArrayLiteralExpression]);
        if data.elements == elements {
            return node;
        }
        let updated = self.create_array_literal_expression(elements, data.multi_line);
        self.update(updated, node)
    }

    pub fn create_object_literal_expression(
        &mut self,
        properties: NodeList,
        multi_line: bool,
    ) -> NodeIndex {
        let properties = self.create_node_array(properties, None);
        let flags = self.children_flags(Some(properties));
        let node = self.alloc(
            SyntaxKind::ObjectLiteralExpression,
            ListData {
                elements: properties,
                multi_line,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_object_literal_expression(
        &mut self,
        node: NodeIndex,
        properties: NodeList,
    ) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::ObjectLiteralExpression]);
        if data.elements == properties {
            return node;
        }
        let updated = self.create_object_literal_expression(properties, data.multi_line);
        self.update(updated, node)
    }

    // ========================================================================
    // Property and element access
    // ========================================================================

    fn create_access(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        question_dot_token: bool,
        name_or_argument: NodeIndex,
        chain: bool,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_left_side_of_access(self, expression, chain);
        let mut flags = self.child_flags(expression);
        flags |= if kind == SyntaxKind::PropertyAccessExpression {
            if self.arena.is_identifier(name_or_argument) {
                self.identifier_name_flags(name_or_argument)
            } else {
                self.child_flags(name_or_argument)
                    | TransformFlags::CONTAINS_PRIVATE_IDENTIFIER_IN_EXPRESSION
            }
        } else {
            self.child_flags(name_or_argument)
        };
        if self.is_super_keyword(expression) {
            flags |= TransformFlags::CONTAINS_ES2017 | TransformFlags::CONTAINS_ES2018;
        }
        if chain {
            flags |= TransformFlags::CONTAINS_ES2020;
        }
        let node = self.alloc(
            kind,
            AccessExprData {
                expression,
                question_dot_token,
                name_or_argument,
            },
        );
        if chain {
            self.add_node_flags(node, NodeFlags::OPTIONAL_CHAIN);
        }
        self.finish(node, flags)
    }

    pub fn create_property_access_expression(
        &mut self,
        expression: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.create_access(SyntaxKind::PropertyAccessExpression, expression, false, name, false)
    }

    /// Updating a chain keeps it a chain.
    pub fn update_property_access_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        let data: AccessExprData = self.data_of(node, &[SyntaxKind::PropertyAccessExpression]);
        if self.is_optional_chain_node(node) {
            return self.update_property_access_chain(node, expression, data.question_dot_token, name);
        }
        if data.expression == expression && data.name_or_argument == name {
            return node;
        }
        let updated = self.create_property_access_expression(expression, name);
        self.update(updated, node)
    }

    pub fn create_property_access_chain(
        &mut self,
        expression: NodeIndex,
        question_dot_token: bool,
        name: NodeIndex,
    ) -> NodeIndex {
        self.create_access(
            SyntaxKind::PropertyAccessExpression,
            expression,
            question_dot_token,
            name,
            true,
        )
    }

    pub fn update_property_access_chain(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        question_dot_token: bool,
        name: NodeIndex,
    ) -> NodeIndex {
        let data: AccessExprData = self.data_of(node, &[SyntaxKind::PropertyAccessExpression]);
        if data.expression == expression
            && data.question_dot_token == question_dot_token
            && data.name_or_argument == name
        {
            return node;
        }
        let updated = self.create_property_access_chain(expression, question_dot_token, name);
        self.update(updated, node)
    }

    pub fn create_element_access_expression(
        &mut self,
        expression: NodeIndex,
        argument: NodeIndex,
    ) -> NodeIndex {
        self.create_access(SyntaxKind::ElementAccessExpression, expression, false, argument, false)
    }

    pub fn update_element_access_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        argument: NodeIndex,
    ) -> NodeIndex {
        let data: AccessExprData = self.data_of(node, &[SyntaxKind::ElementAccessExpression]);
        if self.is_optional_chain_node(node) {
            return self.update_element_access_chain(node, expression, data.question_dot_token, argument);
        }
        if data.expression == expression && data.name_or_argument == argument {
            return node;
        }
        let updated = self.create_element_access_expression(expression, argument);
        self.update(updated, node)
    }

    pub fn create_element_access_chain(
        &mut self,
        expression: NodeIndex,
        question_dot_token: bool,
        argument: NodeIndex,
    ) -> NodeIndex {
        self.create_access(
            SyntaxKind::ElementAccessExpression,
            expression,
            question_dot_token,
            argument,
            true,
        )
    }

    pub fn update_element_access_chain(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        question_dot_token: bool,
        argument: NodeIndex,
    ) -> NodeIndex {
        let data: AccessExprData = self.data_of(node, &[SyntaxKind::ElementAccessExpression]);
        if data.expression == expression
            && data.question_dot_token == question_dot_token
            && data.name_or_argument == argument
        {
            return node;
        }
        let updated = self.create_element_access_chain(expression, question_dot_token, argument);
        self.update(updated, node)
    }

    // ========================================================================
    // Calls
    // ========================================================================

    fn create_call(
        &mut self,
        expression: NodeIndex,
        question_dot_token: bool,
        type_arguments: Option<NodeList>,
        arguments: NodeList,
        chain: bool,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_left_side_of_access(self, expression, chain);
        let type_arguments = self.as_node_array(type_arguments);
        let arguments = rules.parenthesize_expressions_of_comma_delimited_list(self, arguments);
        let arguments = self.create_node_array(arguments, None);
        let mut flags = self.child_flags(expression)
            | self.children_flags(type_arguments)
            | self.children_flags(Some(arguments));
        if type_arguments.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        if self.is_super_property(expression) {
            flags |= TransformFlags::CONTAINS_LEXICAL_THIS;
        }
        if self.arena.is_kind(expression, SyntaxKind::ImportKeyword) {
            flags |= TransformFlags::CONTAINS_DYNAMIC_IMPORT;
        }
        if chain {
            flags |= TransformFlags::CONTAINS_ES2020;
        }
        let node = self.alloc(
            SyntaxKind::CallExpression,
            CallExprData {
                expression,
                question_dot_token,
                type_arguments,
                arguments: Some(arguments),
            },
        );
        if chain {
            self.add_node_flags(node, NodeFlags::OPTIONAL_CHAIN);
        }
        self.finish(node, flags)
    }

    pub fn create_call_expression(
        &mut self,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
        arguments: NodeList,
    ) -> NodeIndex {
        self.create_call(expression, false, type_arguments, arguments, false)
    }

    pub fn update_call_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
        arguments: NodeList,
    ) -> NodeIndex {
        let data: CallExprData = self.data_of(node, &[SyntaxKind::CallExpression]);
        if self.is_optional_chain_node(node) {
            return self.update_call_chain(
                node,
                expression,
                data.question_dot_token,
                type_arguments,
                arguments,
            );
        }
        if data.expression == expression
            && data.type_arguments == type_arguments
            && data.arguments == Some(arguments)
        {
            return node;
        }
        let updated = self.create_call_expression(expression, type_arguments, arguments);
        self.update(updated, node)
    }

    pub fn create_call_chain(
        &mut self,
        expression: NodeIndex,
        question_dot_token: bool,
        type_arguments: Option<NodeList>,
        arguments: NodeList,
    ) -> NodeIndex {
        self.create_call(expression, question_dot_token, type_arguments, arguments, true)
    }

    pub fn update_call_chain(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        question_dot_token: bool,
        type_arguments: Option<NodeList>,
        arguments: NodeList,
    ) -> NodeIndex {
        let data: CallExprData = self.data_of(node, &[SyntaxKind::CallExpression]);
        if data.expression == expression
            && data.question_dot_token == question_dot_token
            && data.type_arguments == type_arguments
            && data.arguments == Some(arguments)
        {
            return node;
        }
        let updated =
            self.create_call_chain(expression, question_dot_token, type_arguments, arguments);
        self.update(updated, node)
    }

    /// `new X<T>(args)`; `arguments` is `None` for `new X`.
    pub fn create_new_expression(
        &mut self,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
        arguments: Option<NodeList>,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_expression_of_new(self, expression);
        let type_arguments = self.as_node_array(type_arguments);
        let arguments = match arguments {
            Some(arguments) => {
                let arguments = rules.parenthesize_expressions_of_comma_delimited_list(self, arguments);
                Some(self.create_node_array(arguments, None))
            }
            None => None,
        };
        let mut flags = self.child_flags(expression)
            | self.children_flags(type_arguments)
            | self.children_flags(arguments)
            | TransformFlags::CONTAINS_ES2020;
        if type_arguments.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            SyntaxKind::NewExpression,
            CallExprData {
                expression,
                question_dot_token: false,
                type_arguments,
                arguments,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_new_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
        arguments: Option<NodeList>,
    ) -> NodeIndex {
        let data: CallExprData = self.data_of(node, &[SyntaxKind::NewExpression]);
        if data.expression == expression
            && data.type_arguments == type_arguments
            && data.arguments == arguments
        {
            return node;
        }
        let updated = self.create_new_expression(expression, type_arguments, arguments);
        self.update(updated, node)
    }

    pub fn create_tagged_template_expression(
        &mut self,
        tag: NodeIndex,
        type_arguments: Option<NodeList>,
        template: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let tag = rules.parenthesize_left_side_of_access(self, tag, false);
        let type_arguments = self.as_node_array(type_arguments);
        let mut flags = self.child_flags(tag)
            | self.children_flags(type_arguments)
            | self.child_flags(template)
            | TransformFlags::CONTAINS_ES2015;
        if type_arguments.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            SyntaxKind::TaggedTemplateExpression,
            TaggedTemplateData {
                tag,
                type_arguments,
                template,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_tagged_template_expression(
        &mut self,
        node: NodeIndex,
        tag: NodeIndex,
        type_arguments: Option<NodeList>,
        template: NodeIndex,
    ) -> NodeIndex {
        let data: TaggedTemplateData = self.data_of(node, &[SyntaxKind::TaggedTemplateExpression]);
        if data.tag == tag && data.type_arguments == type_arguments && data.template == template {
            return node;
        }
        let updated = self.create_tagged_template_expression(tag, type_arguments, template);
        self.update(updated, node)
    }

    // ========================================================================
    // Type assertions
    // ========================================================================

    fn create_type_assertion_like(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = if kind == SyntaxKind::TypeAssertionExpression {
            rules.parenthesize_operand_of_prefix_unary(self, expression)
        } else {
            expression
        };
        let flags = self.child_flags(expression)
            | self.child_flags(type_node)
            | TransformFlags::CONTAINS_TYPESCRIPT;
        let node = self.alloc(
            kind,
            TypeAssertionData {
                expression,
                type_node,
            },
        );
        self.finish(node, flags)
    }

    fn update_type_assertion_like(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let data: TypeAssertionData = self.data_of(node, &[kind]);
        if data.expression == expression && data.type_node == type_node {
            return node;
        }
        let updated = self.create_type_assertion_like(kind, expression, type_node);
        self.update(updated, node)
    }

    /// `<T>expression`
    pub fn create_type_assertion(&mut self, type_node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.create_type_assertion_like(SyntaxKind::TypeAssertionExpression, expression, type_node)
    }

    pub fn update_type_assertion(
        &mut self,
        node: NodeIndex,
        type_node: NodeIndex,
        expression: NodeIndex,
    ) -> NodeIndex {
        self.update_type_assertion_like(node, SyntaxKind::TypeAssertionExpression, expression, type_node)
    }

    pub fn create_as_expression(&mut self, expression: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        self.create_type_assertion_like(SyntaxKind::AsExpression, expression, type_node)
    }

    pub fn update_as_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_type_assertion_like(node, SyntaxKind::AsExpression, expression, type_node)
    }

    pub fn create_satisfies_expression(
        &mut self,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.create_type_assertion_like(SyntaxKind::SatisfiesExpression, expression, type_node)
    }

    pub fn update_satisfies_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.update_type_assertion_like(node, SyntaxKind::SatisfiesExpression, expression, type_node)
    }

    pub fn create_non_null_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_non_null(expression, false)
    }

    pub fn update_non_null_expression(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::NonNullExpression]);
        if data.expression == expression {
            return node;
        }
        let chain = self.is_optional_chain_node(node);
        let updated = self.create_non_null(expression, chain);
        self.update(updated, node)
    }

    pub fn create_non_null_chain(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_non_null(expression, true)
    }

    fn create_non_null(&mut self, expression: NodeIndex, chain: bool) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_left_side_of_access(self, expression, chain);
        let flags = self.child_flags(expression) | TransformFlags::CONTAINS_TYPESCRIPT;
        let node = self.alloc(SyntaxKind::NonNullExpression, ExpressionData { expression });
        if chain {
            self.add_node_flags(node, NodeFlags::OPTIONAL_CHAIN);
        }
        self.finish(node, flags)
    }

    // ========================================================================
    // Single-operand expressions
    // ========================================================================

    pub fn create_parenthesized_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(expression);
        let node = self.alloc(SyntaxKind::ParenthesizedExpression, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_parenthesized_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::ParenthesizedExpression]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_parenthesized_expression(expression);
        self.update(updated, node)
    }

    fn create_prefix_keyword_expression(&mut self, kind: SyntaxKind, expression: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_operand_of_prefix_unary(self, expression);
        let mut flags = self.child_flags(expression);
        if kind == SyntaxKind::AwaitExpression {
            flags |= TransformFlags::CONTAINS_ES2017
                | TransformFlags::CONTAINS_ES2018
                | TransformFlags::CONTAINS_AWAIT;
        }
        let node = self.alloc(kind, ExpressionData { expression });
        self.finish(node, flags)
    }

    fn update_prefix_keyword_expression(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[kind]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_prefix_keyword_expression(kind, expression);
        self.update(updated, node)
    }

    pub fn create_delete_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_prefix_keyword_expression(SyntaxKind::DeleteExpression, expression)
    }

    pub fn update_delete_expression(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_prefix_keyword_expression(node, SyntaxKind::DeleteExpression, expression)
    }

    pub fn create_type_of_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_prefix_keyword_expression(SyntaxKind::TypeOfExpression, expression)
    }

    pub fn update_type_of_expression(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_prefix_keyword_expression(node, SyntaxKind::TypeOfExpression, expression)
    }

    pub fn create_void_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_prefix_keyword_expression(SyntaxKind::VoidExpression, expression)
    }

    pub fn update_void_expression(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_prefix_keyword_expression(node, SyntaxKind::VoidExpression, expression)
    }

    /// `void 0`
    pub fn create_void_zero(&mut self) -> NodeIndex {
        let zero = self.create_numeric_literal("0");
        self.create_void_expression(zero)
    }

    pub fn create_await_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_prefix_keyword_expression(SyntaxKind::AwaitExpression, expression)
    }

    pub fn update_await_expression(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_prefix_keyword_expression(node, SyntaxKind::AwaitExpression, expression)
    }

    fn update_expression_flags(&self, operator: SyntaxKind, operand: NodeIndex) -> TransformFlags {
        let is_update = matches!(operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken);
        let is_plain_identifier = self
            .arena
            .node_data::<IdentifierData>(operand)
            .is_some_and(|data| data.auto_generate.is_none())
            && self.arena.is_identifier(operand);
        if is_update && is_plain_identifier {
            TransformFlags::CONTAINS_UPDATE_EXPRESSION_FOR_IDENTIFIER
        } else {
            TransformFlags::empty()
        }
    }

    pub fn create_prefix_unary_expression(&mut self, operator: SyntaxKind, operand: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let operand = rules.parenthesize_operand_of_prefix_unary(self, operand);
        let flags = self.child_flags(operand) | self.update_expression_flags(operator, operand);
        let node = self.alloc(
            SyntaxKind::PrefixUnaryExpression,
            UnaryExprData { operator, operand },
        );
        self.finish(node, flags)
    }

    pub fn update_prefix_unary_expression(&mut self, node: NodeIndex, operand: NodeIndex) -> NodeIndex {
        let data: UnaryExprData = self.data_of(node, &[SyntaxKind::PrefixUnaryExpression]);
        if data.operand == operand {
            return node;
        }
        let updated = self.create_prefix_unary_expression(data.operator, operand);
        self.update(updated, node)
    }

    pub fn create_postfix_unary_expression(&mut self, operand: NodeIndex, operator: SyntaxKind) -> NodeIndex {
        let rules = self.parenthesizer;
        let operand = rules.parenthesize_operand_of_postfix_unary(self, operand);
        let flags = self.child_flags(operand) | self.update_expression_flags(operator, operand);
        let node = self.alloc(
            SyntaxKind::PostfixUnaryExpression,
            UnaryExprData { operator, operand },
        );
        self.finish(node, flags)
    }

    pub fn update_postfix_unary_expression(&mut self, node: NodeIndex, operand: NodeIndex) -> NodeIndex {
        let data: UnaryExprData = self.data_of(node, &[SyntaxKind::PostfixUnaryExpression]);
        if data.operand == operand {
            return node;
        }
        let updated = self.create_postfix_unary_expression(operand, data.operator);
        self.update(updated, node)
    }

    // ========================================================================
    // Binary and conditional expressions
    // ========================================================================

    pub fn create_binary_expression(
        &mut self,
        left: NodeIndex,
        operator: SyntaxKind,
        right: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let left = rules.parenthesize_left_side_of_binary(self, operator, left);
        let right = rules.parenthesize_right_side_of_binary(self, operator, left, right);
        let mut flags = self.child_flags(left) | self.child_flags(right);
        match operator {
            SyntaxKind::QuestionQuestionToken => flags |= TransformFlags::CONTAINS_ES2020,
            SyntaxKind::EqualsToken => match self.kind_of(left) {
                Some(SyntaxKind::ObjectLiteralExpression) => {
                    flags |= TransformFlags::CONTAINS_ES2015
                        | TransformFlags::CONTAINS_ES2018
                        | TransformFlags::CONTAINS_DESTRUCTURING_ASSIGNMENT
                        | propagate_assignment_pattern_flags(&self.arena, left);
                }
                Some(SyntaxKind::ArrayLiteralExpression) => {
                    flags |= TransformFlags::CONTAINS_ES2015
                        | TransformFlags::CONTAINS_DESTRUCTURING_ASSIGNMENT
                        | propagate_assignment_pattern_flags(&self.arena, left);
                }
                _ => {}
            },
            SyntaxKind::AsteriskAsteriskToken | SyntaxKind::AsteriskAsteriskEqualsToken => {
                flags |= TransformFlags::CONTAINS_ES2016;
            }
            SyntaxKind::BarBarEqualsToken
            | SyntaxKind::AmpersandAmpersandEqualsToken
            | SyntaxKind::QuestionQuestionEqualsToken => flags |= TransformFlags::CONTAINS_ES2021,
            _ => {}
        }
        if operator == SyntaxKind::InKeyword && self.arena.is_private_identifier(left) {
            flags |= TransformFlags::CONTAINS_PRIVATE_IDENTIFIER_IN_EXPRESSION;
        }
        let node = self.alloc(
            SyntaxKind::BinaryExpression,
            BinaryExprData {
                left,
                operator_token: operator,
                right,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_binary_expression(
        &mut self,
        node: NodeIndex,
        left: NodeIndex,
        operator: SyntaxKind,
        right: NodeIndex,
    ) -> NodeIndex {
        let data: BinaryExprData = self.data_of(node, &[SyntaxKind::BinaryExpression]);
        if data.left == left && data.operator_token == operator && data.right == right {
            return node;
        }
        let updated = self.create_binary_expression(left, operator, right);
        self.update(updated, node)
    }

    pub fn create_assignment(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary_expression(left, SyntaxKind::EqualsToken, right)
    }

    pub fn create_comma(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary_expression(left, SyntaxKind::CommaToken, right)
    }

    pub fn create_logical_and(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary_expression(left, SyntaxKind::AmpersandAmpersandToken, right)
    }

    pub fn create_logical_or(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary_expression(left, SyntaxKind::BarBarToken, right)
    }

    pub fn create_strict_equality(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        self.create_binary_expression(left, SyntaxKind::EqualsEqualsEqualsToken, right)
    }

    pub fn create_conditional_expression(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let condition = rules.parenthesize_condition_of_conditional_expression(self, condition);
        let when_true = rules.parenthesize_branch_of_conditional_expression(self, when_true);
        let when_false = rules.parenthesize_branch_of_conditional_expression(self, when_false);
        let flags =
            self.child_flags(condition) | self.child_flags(when_true) | self.child_flags(when_false);
        let node = self.alloc(
            SyntaxKind::ConditionalExpression,
            ConditionalExprData {
                condition,
                when_true,
                when_false,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_conditional_expression(
        &mut self,
        node: NodeIndex,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        let data: ConditionalExprData = self.data_of(node, &[SyntaxKind::ConditionalExpression]);
        if data.condition == condition && data.when_true == when_true && data.when_false == when_false {
            return node;
        }
        let updated = self.create_conditional_expression(condition, when_true, when_false);
        self.update(updated, node)
    }

    // ========================================================================
    // Templates
    // ========================================================================

    pub fn create_template_expression(&mut self, head: NodeIndex, spans: NodeList) -> NodeIndex {
        let spans = self.create_node_array(spans, None);
        let flags = self.child_flags(head)
            | self.children_flags(Some(spans))
            | TransformFlags::CONTAINS_ES2015;
        let node = self.alloc(SyntaxKind::TemplateExpression, TemplateData { head, spans });
        self.finish(node, flags)
    }

    pub fn update_template_expression(
        &mut self,
        node: NodeIndex,
        head: NodeIndex,
        spans: NodeList,
    ) -> NodeIndex {
        let data: TemplateData = self.data_of(node, &[SyntaxKind::TemplateExpression]);
        if data.head == head && data.spans == spans {
            return node;
        }
        let updated = self.create_template_expression(head, spans);
        self.update(updated, node)
    }

    pub fn create_template_span(&mut self, expression: NodeIndex, literal: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(expression)
            | self.child_flags(literal)
            | TransformFlags::CONTAINS_ES2015;
        let node = self.alloc(
            SyntaxKind::TemplateSpan,
            TemplateSpanData {
                expression,
                literal,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_template_span(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        literal: NodeIndex,
    ) -> NodeIndex {
        let data: TemplateSpanData = self.data_of(node, &[SyntaxKind::TemplateSpan]);
        if data.expression == expression && data.literal == literal {
            return node;
        }
        let updated = self.create_template_span(expression, literal);
        self.update(updated, node)
    }

    // ========================================================================
    // Generators, spread, misc
    // ========================================================================

    /// Panics for `yield*` without an operand.
    #[track_caller]
    pub fn create_yield_expression(&mut self, asterisk_token: bool, expression: NodeIndex) -> NodeIndex {
        if asterisk_token && expression.is_none() {
            panic!("yield* requires an operand");
        }
        let rules = self.parenthesizer;
        let expression = if expression.is_some() {
            rules.parenthesize_expression_for_disallowed_comma(self, expression)
        } else {
            expression
        };
        let flags = self.child_flags(expression)
            | TransformFlags::CONTAINS_ES2015
            | TransformFlags::CONTAINS_ES2018
            | TransformFlags::CONTAINS_YIELD;
        let node = self.alloc(
            SyntaxKind::YieldExpression,
            YieldData {
                asterisk_token,
                expression,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_yield_expression(
        &mut self,
        node: NodeIndex,
        asterisk_token: bool,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: YieldData = self.data_of(node, &[SyntaxKind::YieldExpression]);
        if data.asterisk_token == asterisk_token && data.expression == expression {
            return node;
        }
        let updated = self.create_yield_expression(asterisk_token, expression);
        self.update(updated, node)
    }

    pub fn create_spread_element(&mut self, expression: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_expression_for_disallowed_comma(self, expression);
        let flags = self.child_flags(expression)
            | TransformFlags::CONTAINS_ES2015
            | TransformFlags::CONTAINS_REST_OR_SPREAD;
        let node = self.alloc(SyntaxKind::SpreadElement, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_spread_element(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::SpreadElement]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_spread_element(expression);
        self.update(updated, node)
    }

    pub fn create_omitted_expression(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::OmittedExpression);
        self.finish(node, TransformFlags::empty())
    }

    /// `new.target` or `import.meta`. Panics for any other keyword.
    #[track_caller]
    pub fn create_meta_property(&mut self, keyword_token: SyntaxKind, name: NodeIndex) -> NodeIndex {
        let keyword_flags = match keyword_token {
            SyntaxKind::NewKeyword => TransformFlags::CONTAINS_ES2015,
            SyntaxKind::ImportKeyword => TransformFlags::CONTAINS_ES2020,
            other => panic!("{other:?} cannot start a meta-property"),
        };
        let flags = self.child_flags(name) | keyword_flags;
        let node = self.alloc(
            SyntaxKind::MetaProperty,
            MetaPropertyData {
                keyword_token,
                name,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_meta_property(&mut self, node: NodeIndex, name: NodeIndex) -> NodeIndex {
        let data: MetaPropertyData = self.data_of(node, &[SyntaxKind::MetaProperty]);
        if data.name == name {
            return node;
        }
        let updated = self.create_meta_property(data.keyword_token, name);
        self.update(updated, node)
    }

    pub fn create_function_expression(
        &mut self,
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        let data = FunctionData {
            modifiers: self.as_node_array(modifiers),
            asterisk_token,
            name,
            question_token: false,
            type_parameters: self.as_node_array(type_parameters),
            parameters: self.create_node_array(parameters, None),
            type_annotation: type_node,
            body,
        };
        let flags = self.function_like_flags(&data) | TransformFlags::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION;
        let node = self.alloc(SyntaxKind::FunctionExpression, data);
        self.finish(node, flags)
    }

    pub fn update_function_expression(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        let data: FunctionData = self.data_of(node, &[SyntaxKind::FunctionExpression]);
        if data.modifiers == modifiers
            && data.asterisk_token == asterisk_token
            && data.name == name
            && data.type_parameters == type_parameters
            && data.parameters == parameters
            && data.type_annotation == type_node
            && data.body == body
        {
            return node;
        }
        let updated = self.create_function_expression(
            modifiers,
            asterisk_token,
            name,
            type_parameters,
            parameters,
            type_node,
            body,
        );
        self.update(updated, node)
    }

    /// Flags shared by function expressions and declarations: children,
    /// the async/generator target bits and TypeScript-only syntax.
    pub(crate) fn function_like_flags(&mut self, data: &FunctionData) -> TransformFlags {
        let is_async = self.is_async(data.modifiers);
        let is_generator = data.asterisk_token;
        let mut flags = self.children_flags(data.modifiers)
            | self.identifier_name_flags(data.name)
            | self.children_flags(data.type_parameters)
            | self.children_flags(Some(data.parameters))
            | self.child_flags(data.type_annotation)
            | (self.child_flags(data.body) & !TransformFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT);
        flags |= match (is_async, is_generator) {
            (true, true) => TransformFlags::CONTAINS_ES2018,
            (true, false) => TransformFlags::CONTAINS_ES2017,
            (false, true) => TransformFlags::CONTAINS_GENERATOR,
            (false, false) => TransformFlags::empty(),
        };
        if data.type_parameters.is_some() || data.type_annotation.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        flags
    }

    pub fn create_arrow_function(
        &mut self,
        modifiers: Option<NodeList>,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let body = rules.parenthesize_concise_body_of_arrow_function(self, body);
        let modifiers = self.as_node_array(modifiers);
        let type_parameters = self.as_node_array(type_parameters);
        let parameters = self.create_node_array(parameters, None);
        let mut flags = self.children_flags(modifiers)
            | self.children_flags(type_parameters)
            | self.children_flags(Some(parameters))
            | self.child_flags(type_node)
            | (self.child_flags(body) & !TransformFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT)
            | TransformFlags::CONTAINS_ES2015;
        if type_parameters.is_some() || type_node.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        if self.is_async(modifiers) {
            flags |= TransformFlags::CONTAINS_ES2017 | TransformFlags::CONTAINS_LEXICAL_THIS;
        }
        let node = self.alloc(
            SyntaxKind::ArrowFunction,
            FunctionData {
                modifiers,
                asterisk_token: false,
                name: NodeIndex::NONE,
                question_token: false,
                type_parameters,
                parameters,
                type_annotation: type_node,
                body,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_arrow_function(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        let data: FunctionData = self.data_of(node, &[SyntaxKind::ArrowFunction]);
        if data.modifiers == modifiers
            && data.type_parameters == type_parameters
            && data.parameters == parameters
            && data.type_annotation == type_node
            && data.body == body
        {
            return node;
        }
        let updated =
            self.create_arrow_function(modifiers, type_parameters, parameters, type_node, body);
        self.update(updated, node)
    }

    // ========================================================================
    // Transformation-only expressions
    // ========================================================================

    /// Wrapper whose own syntax is not printed; `original` points at the
    /// node it stands for.
    pub fn create_partially_emitted_expression(
        &mut self,
        expression: NodeIndex,
        original: NodeIndex,
    ) -> NodeIndex {
        let flags = self.child_flags(expression);
        let node = self.alloc(SyntaxKind::PartiallyEmittedExpression, ExpressionData { expression });
        if original.is_some() {
            self.set_original_node(node, original);
            self.set_text_range_from(node, original);
        }
        self.finish(node, flags)
    }

    pub fn update_partially_emitted_expression(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::PartiallyEmittedExpression]);
        if data.expression == expression {
            return node;
        }
        let original = self.arena.original(node);
        let updated = self.create_partially_emitted_expression(expression, original);
        self.update(updated, node)
    }

    /// Comma list; nested comma lists are flattened into this one.
    pub fn create_comma_list_expression(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        let mut flattened = Vec::with_capacity(elements.len());
        for element in elements {
            match self.arena.node_data::<ListData>(element) {
                Some(list) if self.arena.is_kind(element, SyntaxKind::CommaListExpression) => {
                    flattened.extend_from_slice(self.arena.list_nodes(list.elements));
                }
                _ => flattened.push(element),
            }
        }
        let elements = self.node_list(flattened);
        let flags = self.children_flags(Some(elements));
        let node = self.alloc(
            SyntaxKind::CommaListExpression,
            ListData {
                elements,
                multi_line: false,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_comma_list_expression(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::CommaListExpression]);
        if data.elements == elements {
            return node;
        }
        let elements = self.list_elements(Some(elements));
        let updated = self.create_comma_list_expression(elements);
        self.update(updated, node)
    }
}

