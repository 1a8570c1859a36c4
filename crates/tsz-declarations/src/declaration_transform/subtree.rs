//! Visiting below the statement level: class and interface members,
//! signatures, parameters and type nodes.

use tsz_ast::node::{
    BindingElementData, ClassData, ConditionalTypeData, ExpressionData, FunctionData,
    ImportTypeData, ListData, ParameterData, PropertyDeclData, SignatureData, TypeParameterData,
    TypeRefData, UnaryExprData, VariableDeclarationData, WrappedTypeData,
};
use tsz_ast::{
    ModifierFlags, NodeIndex, NodeList, SyntaxKind, VisitResult, visit_each_child, visit_node,
    visit_nodes_with, visit_opt_nodes,
};

use super::{DeclarationTransformer, TypeSource, can_produce_diagnostics, is_enclosing_declaration};
use crate::diagnostics::AccessibilityDiagnosticContext;

/// State saved on entry to a subtree and restored on exit.
struct SubtreeScope {
    previous_enclosing: Option<NodeIndex>,
    /// Set when the node can install a diagnostic context.
    previous_context: Option<Option<AccessibilityDiagnosticContext>>,
    previous_suppress: Option<bool>,
}

impl DeclarationTransformer<'_> {
    pub(super) fn visit_declaration_subtree(&mut self, input: NodeIndex) -> VisitResult {
        let Some(kind) = self.arena().kind(input) else {
            return VisitResult::Removed;
        };
        if self.should_strip_internal(input) || kind == SyntaxKind::SemicolonClassElement {
            return VisitResult::Removed;
        }
        if self.is_declaration_and_not_visible(input) {
            return VisitResult::Removed;
        }
        if self.has_dynamic_name(input)
            && !self
                .resolver
                .is_late_bound(self.arena().parse_tree_node(input))
        {
            tracing::trace!(node = input.0, "dropping member with unresolvable computed name");
            return VisitResult::Removed;
        }
        if self.arena().is_function_like(input) && self.resolver.is_implementation_of_overload(input) {
            return VisitResult::Removed;
        }

        let scope = self.enter_subtree(input, kind);

        if matches!(kind, SyntaxKind::MethodDeclaration | SyntaxKind::MethodSignature)
            && self
                .arena()
                .has_syntactic_modifier(input, ModifierFlags::PRIVATE)
        {
            // Private methods keep only their name, once per overload set.
            if !self.is_first_member_with_name(input) {
                return self.leave_subtree(input, scope, VisitResult::Removed);
            }
            let modifiers = self.ensure_modifiers(input);
            let name = self.arena().name_of_declaration(input);
            let stub = self.factory.create_property_declaration(
                modifiers,
                name,
                false,
                false,
                NodeIndex::NONE,
                NodeIndex::NONE,
            );
            return self.leave_subtree(input, scope, stub.into());
        }

        let result = self.transform_subtree_node(input, kind);
        self.leave_subtree(input, scope, result)
    }

    fn enter_subtree(&mut self, input: NodeIndex, kind: SyntaxKind) -> SubtreeScope {
        let previous_enclosing = is_enclosing_declaration(kind)
            .then(|| std::mem::replace(&mut self.state.enclosing_declaration, input));

        let previous_context = if can_produce_diagnostics(kind) {
            let previous = self.state.diagnostic_context.clone();
            if !self.state.suppress_new_diagnostic_contexts {
                self.enter_diagnostic_context(input);
            }
            Some(previous)
        } else {
            None
        };

        let parent_kind = self.arena().kind(self.arena().parent(input));
        let previous_suppress = (matches!(kind, SyntaxKind::TypeLiteral | SyntaxKind::MappedType)
            && parent_kind != Some(SyntaxKind::TypeAliasDeclaration))
        .then(|| std::mem::replace(&mut self.state.suppress_new_diagnostic_contexts, true));

        SubtreeScope {
            previous_enclosing,
            previous_context,
            previous_suppress,
        }
    }

    fn leave_subtree(
        &mut self,
        input: NodeIndex,
        scope: SubtreeScope,
        result: VisitResult,
    ) -> VisitResult {
        let produced = !matches!(result, VisitResult::Removed);
        if produced && scope.previous_context.is_some() && self.has_dynamic_name(input) {
            self.check_name(input);
        }

        if let Some(previous) = scope.previous_enclosing {
            self.state.enclosing_declaration = previous;
        }
        if let Some(previous) = scope.previous_context {
            self.state.diagnostic_context = previous;
        }
        if let Some(previous) = scope.previous_suppress {
            self.state.suppress_new_diagnostic_contexts = previous;
        }

        match result {
            VisitResult::Single(node) if node != input => {
                VisitResult::Single(self.factory.set_original_node(node, input))
            }
            VisitResult::Many(nodes) => {
                for &node in &nodes {
                    if node != input {
                        self.factory.set_original_node(node, input);
                    }
                }
                VisitResult::Many(nodes)
            }
            other => other,
        }
    }

    fn transform_subtree_node(&mut self, input: NodeIndex, kind: SyntaxKind) -> VisitResult {
        let enclosing = self.state.enclosing_declaration;
        match kind {
            SyntaxKind::ExpressionWithTypeArguments | SyntaxKind::TypeReference | SyntaxKind::TypeQuery => {
                let name = self
                    .arena()
                    .node_data::<TypeRefData>(input)
                    .map_or(NodeIndex::NONE, |data| data.type_name);
                if self.arena().is_entity_name(name) || self.arena().is_entity_name_expression(name) {
                    self.check_entity_name_visibility(name, enclosing);
                }
                visit_each_child(self, input).into()
            }
            SyntaxKind::ConstructSignature | SyntaxKind::CallSignature => {
                let Some(data) = self.arena().node_data::<SignatureData>(input).copied() else {
                    return input.into();
                };
                let type_parameters = self.ensure_type_params(input, data.type_parameters);
                let parameters = self.signature_parameters(input, data.parameters);
                let type_node = self.ensure_type(input, data.type_annotation, false);
                let node = if kind == SyntaxKind::ConstructSignature {
                    self.factory
                        .update_construct_signature(input, type_parameters, parameters, type_node)
                } else {
                    self.factory
                        .update_call_signature(input, type_parameters, parameters, type_node)
                };
                node.into()
            }
            SyntaxKind::Constructor => {
                let Some(data) = self.arena().node_data::<FunctionData>(input).copied() else {
                    return input.into();
                };
                // Parameter properties were already lifted onto the class.
                let modifiers = self.ensure_modifiers(input);
                let parameters =
                    self.update_params_list(input, data.parameters, Some(ModifierFlags::empty()));
                self.factory
                    .create_constructor_declaration(modifiers, parameters, NodeIndex::NONE)
                    .into()
            }
            SyntaxKind::MethodDeclaration => {
                let Some(data) = self.arena().node_data::<FunctionData>(input).copied() else {
                    return input.into();
                };
                if self.arena().is_private_identifier(data.name) {
                    return VisitResult::Removed;
                }
                let modifiers = self.ensure_modifiers(input);
                let type_parameters = self.ensure_type_params(input, data.type_parameters);
                let parameters = self.update_params_list(input, data.parameters, None);
                let type_node = self.ensure_type(input, data.type_annotation, false);
                self.factory
                    .create_method_declaration(
                        modifiers,
                        false,
                        data.name,
                        data.question_token,
                        type_parameters,
                        parameters,
                        type_node,
                        NodeIndex::NONE,
                    )
                    .into()
            }
            SyntaxKind::GetAccessor | SyntaxKind::SetAccessor => {
                let Some(data) = self.arena().node_data::<FunctionData>(input).copied() else {
                    return input.into();
                };
                if self.arena().is_private_identifier(data.name) {
                    return VisitResult::Removed;
                }
                let is_private = self
                    .arena()
                    .has_syntactic_modifier(input, ModifierFlags::PRIVATE);
                let modifiers = self.ensure_modifiers(input);
                let parameters = self.update_accessor_params_list(input, is_private);
                if kind == SyntaxKind::GetAccessor {
                    let accessor_type = self.type_annotation_from_all_accessor_declarations(input);
                    let type_node = self.ensure_type(input, accessor_type, false);
                    self.factory
                        .update_get_accessor_declaration(
                            input,
                            modifiers,
                            data.name,
                            parameters,
                            type_node,
                            NodeIndex::NONE,
                        )
                        .into()
                } else {
                    self.factory
                        .update_set_accessor_declaration(
                            input,
                            modifiers,
                            data.name,
                            parameters,
                            NodeIndex::NONE,
                        )
                        .into()
                }
            }
            SyntaxKind::PropertyDeclaration => {
                let Some(data) = self.arena().node_data::<PropertyDeclData>(input).copied() else {
                    return input.into();
                };
                if self.arena().is_private_identifier(data.name) {
                    return VisitResult::Removed;
                }
                let modifiers = self.ensure_modifiers(input);
                let type_node = self.ensure_type(input, data.type_annotation, false);
                let initializer = self.ensure_no_initializer(input);
                self.factory
                    .update_property_declaration(
                        input,
                        modifiers,
                        data.name,
                        data.question_token,
                        false,
                        type_node,
                        initializer,
                    )
                    .into()
            }
            SyntaxKind::PropertySignature => {
                let Some(data) = self.arena().node_data::<SignatureData>(input).copied() else {
                    return input.into();
                };
                if self.arena().is_private_identifier(data.name) {
                    return VisitResult::Removed;
                }
                let modifiers = self.ensure_modifiers(input);
                let type_node = self.ensure_type(input, data.type_annotation, false);
                self.factory
                    .update_property_signature(
                        input,
                        modifiers,
                        data.name,
                        data.question_token,
                        type_node,
                    )
                    .into()
            }
            SyntaxKind::MethodSignature => {
                let Some(data) = self.arena().node_data::<SignatureData>(input).copied() else {
                    return input.into();
                };
                if self.arena().is_private_identifier(data.name) {
                    return VisitResult::Removed;
                }
                let modifiers = self.ensure_modifiers(input);
                let type_parameters = self.ensure_type_params(input, data.type_parameters);
                let parameters = self.signature_parameters(input, data.parameters);
                let type_node = self.ensure_type(input, data.type_annotation, false);
                self.factory
                    .update_method_signature(
                        input,
                        modifiers,
                        data.name,
                        data.question_token,
                        type_parameters,
                        parameters,
                        type_node,
                    )
                    .into()
            }
            SyntaxKind::IndexSignature => {
                let Some(data) = self.arena().node_data::<SignatureData>(input).copied() else {
                    return input.into();
                };
                let modifiers = self.ensure_modifiers(input);
                let parameters = self.signature_parameters(input, data.parameters);
                let type_node = match visit_node(self, data.type_annotation) {
                    type_node if type_node.is_some() => type_node,
                    _ => self.any_type(),
                };
                self.factory
                    .update_index_signature(input, modifiers, parameters, type_node)
                    .into()
            }
            SyntaxKind::VariableDeclaration => {
                let Some(data) = self
                    .arena()
                    .node_data::<VariableDeclarationData>(input)
                    .copied()
                else {
                    return input.into();
                };
                if self.arena().is_binding_pattern(data.name) {
                    return self.recreate_binding_pattern(data.name).into();
                }
                let previous_suppress =
                    std::mem::replace(&mut self.state.suppress_new_diagnostic_contexts, true);
                let type_node = self.ensure_type(input, data.type_annotation, false);
                let initializer = self.ensure_no_initializer(input);
                self.state.suppress_new_diagnostic_contexts = previous_suppress;
                self.factory
                    .update_variable_declaration(input, data.name, false, type_node, initializer)
                    .into()
            }
            SyntaxKind::TypeParameter => {
                let Some(data) = self.arena().node_data::<TypeParameterData>(input).copied() else {
                    return input.into();
                };
                if self.is_private_method_type_parameter(input)
                    && (data.default.is_some() || data.constraint.is_some())
                {
                    return self
                        .factory
                        .update_type_parameter_declaration(
                            input,
                            data.modifiers,
                            data.name,
                            NodeIndex::NONE,
                            NodeIndex::NONE,
                        )
                        .into();
                }
                visit_each_child(self, input).into()
            }
            SyntaxKind::ConditionalType => {
                let Some(data) = self.arena().node_data::<ConditionalTypeData>(input).copied() else {
                    return input.into();
                };
                let check_type = visit_node(self, data.check_type);
                let extends_type = visit_node(self, data.extends_type);
                // `infer` positions are only in scope inside the true branch.
                let previous_enclosing =
                    std::mem::replace(&mut self.state.enclosing_declaration, data.true_type);
                let true_type = visit_node(self, data.true_type);
                self.state.enclosing_declaration = previous_enclosing;
                let false_type = visit_node(self, data.false_type);
                self.factory
                    .update_conditional_type_node(input, check_type, extends_type, true_type, false_type)
                    .into()
            }
            SyntaxKind::FunctionType | SyntaxKind::ConstructorType => {
                let Some(data) = self.arena().node_data::<SignatureData>(input).copied() else {
                    return input.into();
                };
                let modifiers = if kind == SyntaxKind::ConstructorType {
                    self.ensure_modifiers(input)
                } else {
                    None
                };
                let type_parameters = visit_opt_nodes(self, data.type_parameters);
                let parameters = self.signature_parameters(input, data.parameters);
                let type_node = visit_node(self, data.type_annotation);
                let node = if kind == SyntaxKind::ConstructorType {
                    self.factory.update_constructor_type_node(
                        input,
                        modifiers,
                        type_parameters,
                        parameters,
                        type_node,
                    )
                } else {
                    self.factory
                        .update_function_type_node(input, type_parameters, parameters, type_node)
                };
                node.into()
            }
            SyntaxKind::ImportType => {
                let Some(data) = self.arena().node_data::<ImportTypeData>(input).copied() else {
                    return input.into();
                };
                let literal = self
                    .arena()
                    .node_data::<WrappedTypeData>(data.argument)
                    .map_or(NodeIndex::NONE, |wrapped| wrapped.type_node);
                if !self.arena().is_kind(data.argument, SyntaxKind::LiteralType)
                    || !self.arena().is_string_literal(literal)
                {
                    return input.into();
                }
                let specifier = self.rewrite_module_specifier(input, literal);
                let argument = self.factory.update_literal_type_node(data.argument, specifier);
                let type_arguments = visit_opt_nodes(self, data.type_arguments);
                self.factory
                    .update_import_type_node(
                        input,
                        argument,
                        data.attributes,
                        data.qualifier,
                        type_arguments,
                        data.is_type_of,
                    )
                    .into()
            }
            _ => visit_each_child(self, input).into(),
        }
    }

    // ========================================================================
    // Visibility
    // ========================================================================

    pub(super) fn is_declaration_and_not_visible(&self, node: NodeIndex) -> bool {
        let node = self.arena().parse_tree_node(node);
        match self.arena().kind(node) {
            Some(
                SyntaxKind::FunctionDeclaration
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::TypeAliasDeclaration
                | SyntaxKind::EnumDeclaration,
            ) => !self.resolver.is_declaration_visible(node),
            Some(SyntaxKind::VariableDeclaration) => !self.binding_name_visible(node),
            Some(SyntaxKind::ClassStaticBlockDeclaration) => true,
            _ => false,
        }
    }

    /// A destructuring declaration is visible when any name it binds is.
    pub(super) fn binding_name_visible(&self, node: NodeIndex) -> bool {
        let arena = self.arena();
        if arena.is_kind(node, SyntaxKind::OmittedExpression) {
            return false;
        }
        let name = arena.name_of_declaration(node);
        if arena.is_binding_pattern(name) {
            return arena
                .node_data::<ListData>(name)
                .map_or(&[][..], |list| arena.list_nodes(list.elements))
                .iter()
                .any(|&element| self.binding_name_visible(element));
        }
        self.resolver.is_declaration_visible(node)
    }

    /// Computed name whose expression is not a plain literal.
    fn has_dynamic_name(&self, node: NodeIndex) -> bool {
        let arena = self.arena();
        let name = arena.name_of_declaration(node);
        if !arena.is_kind(name, SyntaxKind::ComputedPropertyName) {
            return false;
        }
        let expression = arena
            .node_data::<ExpressionData>(name)
            .map_or(NodeIndex::NONE, |data| data.expression);
        let is_literal = matches!(
            arena.kind(expression),
            Some(
                SyntaxKind::StringLiteral
                    | SyntaxKind::NoSubstitutionTemplateLiteral
                    | SyntaxKind::NumericLiteral
            )
        );
        let is_signed_numeric = arena.is_kind(expression, SyntaxKind::PrefixUnaryExpression)
            && arena
                .node_data::<UnaryExprData>(expression)
                .is_some_and(|unary| {
                    matches!(unary.operator, SyntaxKind::PlusToken | SyntaxKind::MinusToken)
                        && arena.is_kind(unary.operand, SyntaxKind::NumericLiteral)
                });
        !is_literal && !is_signed_numeric
    }

    /// Report when a late-bound name refers to something the output cannot
    /// name.
    fn check_name(&mut self, node: NodeIndex) {
        let name = self.arena().name_of_declaration(node);
        let previous_context = if self.state.suppress_new_diagnostic_contexts {
            None
        } else {
            let context = AccessibilityDiagnosticContext::for_node_name(self.arena(), node);
            Some(std::mem::replace(&mut self.state.diagnostic_context, context))
        };
        let fallback = self.state.error_fallback_node;
        self.set_error_nodes(name, fallback);

        if !self
            .resolver
            .is_late_bound(self.arena().parse_tree_node(node))
        {
            panic!("computed name of {node:?} was kept but is not late-bound");
        }
        let expression = self
            .arena()
            .node_data::<ExpressionData>(name)
            .map_or(NodeIndex::NONE, |data| data.expression);
        let enclosing = self.state.enclosing_declaration;
        self.check_entity_name_visibility(expression, enclosing);

        if let Some(previous) = previous_context {
            self.state.diagnostic_context = previous;
        }
        self.set_error_nodes(NodeIndex::NONE, fallback);
    }

    /// Whether `node` is the first class member declaring its name.
    fn is_first_member_with_name(&self, node: NodeIndex) -> bool {
        let arena = self.arena();
        let name = arena.entity_name_to_string(arena.name_of_declaration(node));
        let parent = arena.parent(node);
        let Some(class) = arena.node_data::<ClassData>(parent) else {
            return true;
        };
        arena
            .list_nodes(class.members)
            .iter()
            .copied()
            .find(|&member| arena.entity_name_to_string(arena.name_of_declaration(member)) == name)
            .is_none_or(|first| first == node)
    }

    fn is_private_method_type_parameter(&self, node: NodeIndex) -> bool {
        let parent = self.arena().parent(node);
        self.arena().is_kind(parent, SyntaxKind::MethodDeclaration)
            && self
                .arena()
                .has_syntactic_modifier(parent, ModifierFlags::PRIVATE)
    }

    // ========================================================================
    // Types and initializers
    // ========================================================================

    /// Output type annotation for `node`: the written one if present,
    /// otherwise inferred through the resolver, `any` when inference fails.
    /// Private members, and declarations printed with a literal
    /// initializer, get no annotation.
    pub(super) fn ensure_type(
        &mut self,
        node: NodeIndex,
        type_node: NodeIndex,
        ignore_private: bool,
    ) -> NodeIndex {
        if !ignore_private
            && self
                .arena()
                .has_syntactic_modifier(node, ModifierFlags::PRIVATE)
        {
            return NodeIndex::NONE;
        }
        if self.should_print_with_initializer(node) {
            return NodeIndex::NONE;
        }

        let kind = self.arena().kind(node);
        let should_use_resolver_type = kind == Some(SyntaxKind::Parameter)
            && (self.resolver.is_required_initialized_parameter(node)
                || self.resolver.is_optional_uninitialized_parameter_property(node));
        if type_node.is_some() && !should_use_resolver_type {
            return visit_node(self, type_node);
        }
        if !self.arena().is_parse_tree_node(node) {
            return if type_node.is_some() {
                visit_node(self, type_node)
            } else {
                self.any_type()
            };
        }
        if kind == Some(SyntaxKind::SetAccessor) {
            return self.any_type();
        }

        let name = self.arena().name_of_declaration(node);
        let fallback = self.state.error_fallback_node;
        self.set_error_nodes(name, fallback);
        let previous_context = (!self.state.suppress_new_diagnostic_contexts)
            .then(|| self.enter_diagnostic_context(node));
        let enclosing = self.state.enclosing_declaration;

        let inferred = match kind {
            Some(
                SyntaxKind::Parameter
                | SyntaxKind::PropertyDeclaration
                | SyntaxKind::PropertySignature,
            ) => {
                let reported = self.state.pending_diagnostics.len();
                let declared = self.serialize_type(node, TypeSource::Declaration, enclosing);
                let initializer = self.initializer_of(node);
                if declared.is_none()
                    && initializer.is_some()
                    && self.state.pending_diagnostics.len() == reported
                {
                    self.serialize_type(initializer, TypeSource::Expression, enclosing)
                } else {
                    declared
                }
            }
            Some(SyntaxKind::VariableDeclaration | SyntaxKind::BindingElement) => {
                self.serialize_type(node, TypeSource::Declaration, enclosing)
            }
            _ => self.serialize_type(node, TypeSource::ReturnType, enclosing),
        };

        self.set_error_nodes(NodeIndex::NONE, fallback);
        if let Some(previous) = previous_context {
            self.state.diagnostic_context = previous;
        }
        match inferred {
            Some(type_node) => type_node,
            None => {
                tracing::debug!(node = node.0, ?kind, "type could not be inferred, emitting `any`");
                self.any_type()
            }
        }
    }

    fn initializer_of(&self, node: NodeIndex) -> NodeIndex {
        let arena = self.arena();
        let initializer = match arena.kind(node) {
            Some(SyntaxKind::Parameter) => arena
                .node_data::<ParameterData>(node)
                .map(|data| data.initializer),
            Some(SyntaxKind::PropertyDeclaration) => arena
                .node_data::<PropertyDeclData>(node)
                .map(|data| data.initializer),
            Some(SyntaxKind::VariableDeclaration) => arena
                .node_data::<VariableDeclarationData>(node)
                .map(|data| data.initializer),
            Some(SyntaxKind::BindingElement) => arena
                .node_data::<BindingElementData>(node)
                .map(|data| data.initializer),
            _ => None,
        };
        initializer.unwrap_or(NodeIndex::NONE)
    }

    /// `const x = 1` and `readonly x = "a"` keep their literal initializer
    /// instead of a type annotation.
    fn should_print_with_initializer(&self, node: NodeIndex) -> bool {
        let can_have_literal_initializer = match self.arena().kind(node) {
            Some(SyntaxKind::Parameter | SyntaxKind::VariableDeclaration) => true,
            Some(SyntaxKind::PropertyDeclaration) => !self
                .arena()
                .has_syntactic_modifier(node, ModifierFlags::PRIVATE),
            _ => false,
        };
        can_have_literal_initializer
            && self.initializer_of(node).is_some()
            && self
                .resolver
                .is_literal_const_declaration(self.arena().parse_tree_node(node))
    }

    pub(super) fn ensure_no_initializer(&mut self, node: NodeIndex) -> NodeIndex {
        if !self.should_print_with_initializer(node) {
            return NodeIndex::NONE;
        }
        let parse_node = self.arena().parse_tree_node(node);
        self.literal_const_value(parse_node)
    }

    pub(super) fn ensure_type_params(
        &mut self,
        node: NodeIndex,
        params: Option<NodeList>,
    ) -> Option<NodeList> {
        if self
            .arena()
            .has_syntactic_modifier(node, ModifierFlags::PRIVATE)
        {
            return None;
        }
        visit_opt_nodes(self, params)
    }

    /// Accessor type from whichever of the get/set pair is annotated.
    fn type_annotation_from_all_accessor_declarations(&mut self, node: NodeIndex) -> NodeIndex {
        let accessors = self.resolver.get_all_accessor_declarations(node);
        let mut accessor_type = self.type_annotation_from_accessor(node);
        for other in [accessors.first_accessor, accessors.second_accessor] {
            if accessor_type.is_some() || other.is_none() || other == node {
                continue;
            }
            accessor_type = self.type_annotation_from_accessor(other);
            if accessor_type.is_some() {
                // Report against the accessor the type was taken from.
                self.enter_diagnostic_context(other);
            }
        }
        accessor_type
    }

    fn type_annotation_from_accessor(&self, accessor: NodeIndex) -> NodeIndex {
        let arena = self.arena();
        let Some(data) = arena.node_data::<FunctionData>(accessor) else {
            return NodeIndex::NONE;
        };
        match arena.kind(accessor) {
            Some(SyntaxKind::GetAccessor) => data.type_annotation,
            Some(SyntaxKind::SetAccessor) => self
                .set_accessor_value_parameter(accessor)
                .and_then(|parameter| arena.node_data::<ParameterData>(parameter))
                .map_or(NodeIndex::NONE, |parameter| parameter.type_annotation),
            _ => NodeIndex::NONE,
        }
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    fn signature_parameters(&mut self, node: NodeIndex, params: Option<NodeList>) -> NodeList {
        match params {
            Some(params) => self.update_params_list(node, params, None),
            None => self.factory.node_list(Vec::new()),
        }
    }

    /// Parameters of a signature, each run through `ensure_parameter`.
    /// Private members lose their parameters entirely.
    pub(super) fn update_params_list(
        &mut self,
        node: NodeIndex,
        params: NodeList,
        modifier_mask: Option<ModifierFlags>,
    ) -> NodeList {
        if self
            .arena()
            .has_syntactic_modifier(node, ModifierFlags::PRIVATE)
        {
            return self.factory.node_list(Vec::new());
        }
        let (elements, has_trailing_comma) = self
            .arena()
            .get_list(params)
            .map(|array| (array.nodes.clone(), array.has_trailing_comma))
            .unwrap_or_default();
        let parameters: Vec<NodeIndex> = elements
            .into_iter()
            .map(|parameter| self.ensure_parameter(parameter, modifier_mask, NodeIndex::NONE))
            .collect();
        self.factory
            .create_node_array(parameters, Some(has_trailing_comma))
    }

    fn ensure_parameter(
        &mut self,
        parameter: NodeIndex,
        modifier_mask: Option<ModifierFlags>,
        type_override: NodeIndex,
    ) -> NodeIndex {
        let Some(data) = self.arena().node_data::<ParameterData>(parameter).copied() else {
            return parameter;
        };
        let previous_context = (!self.state.suppress_new_diagnostic_contexts)
            .then(|| self.enter_diagnostic_context(parameter));

        let mask = modifier_mask.unwrap_or(ModifierFlags::ALL - ModifierFlags::PUBLIC);
        let modifiers = self.mask_modifiers(parameter, mask, ModifierFlags::empty());
        let name = self.filter_binding_pattern_initializers(data.name);
        let question_token = self.resolver.is_optional_parameter(parameter);
        let declared_type = if type_override.is_some() {
            type_override
        } else {
            data.type_annotation
        };
        let type_node = self.ensure_type(parameter, declared_type, true);
        let initializer = self.ensure_no_initializer(parameter);
        let updated = self.factory.update_parameter_declaration(
            parameter,
            modifiers,
            data.dot_dot_dot_token,
            name,
            question_token,
            type_node,
            initializer,
        );

        if let Some(previous) = previous_context {
            self.state.diagnostic_context = previous;
        }
        updated
    }

    /// Strip default values from a destructuring parameter name.
    fn filter_binding_pattern_initializers(&mut self, name: NodeIndex) -> NodeIndex {
        let kind = self.arena().kind(name);
        if !matches!(
            kind,
            Some(SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern)
        ) {
            return name;
        }
        let Some(elements) = self
            .arena()
            .node_data::<ListData>(name)
            .map(|list| list.elements)
        else {
            return name;
        };
        let elements = visit_nodes_with(self, elements, |transformer, element| {
            transformer.strip_binding_element_initializer(element).into()
        });
        if kind == Some(SyntaxKind::ObjectBindingPattern) {
            self.factory.update_object_binding_pattern(name, elements)
        } else {
            self.factory.update_array_binding_pattern(name, elements)
        }
    }

    fn strip_binding_element_initializer(&mut self, element: NodeIndex) -> NodeIndex {
        if self.arena().is_kind(element, SyntaxKind::OmittedExpression) {
            return element;
        }
        let Some(data) = self.arena().node_data::<BindingElementData>(element).copied() else {
            return element;
        };
        if self
            .arena()
            .is_kind(data.property_name, SyntaxKind::ComputedPropertyName)
        {
            let expression = self
                .arena()
                .node_data::<ExpressionData>(data.property_name)
                .map_or(NodeIndex::NONE, |computed| computed.expression);
            if self.arena().is_entity_name_expression(expression) {
                let enclosing = self.state.enclosing_declaration;
                self.check_entity_name_visibility(expression, enclosing);
            }
        }
        let name = self.filter_binding_pattern_initializers(data.name);
        self.factory.update_binding_element(
            element,
            data.dot_dot_dot_token,
            data.property_name,
            name,
            NodeIndex::NONE,
        )
    }

    fn this_parameter(&self, function: NodeIndex) -> Option<NodeIndex> {
        let arena = self.arena();
        let data = arena.node_data::<FunctionData>(function)?;
        let first = arena.list_nodes(data.parameters).first().copied()?;
        let name = arena.name_of_declaration(first);
        (arena.identifier_text(name) == Some("this")).then_some(first)
    }

    fn set_accessor_value_parameter(&self, accessor: NodeIndex) -> Option<NodeIndex> {
        let arena = self.arena();
        let data = arena.node_data::<FunctionData>(accessor)?;
        let parameters = arena.list_nodes(data.parameters);
        let index = usize::from(parameters.len() == 2 && self.this_parameter(accessor).is_some());
        parameters.get(index).copied()
    }

    /// Accessor parameters: the `this` parameter if any, and for setters the
    /// value parameter, typed from the accessor pair. A setter always gets a
    /// parameter, synthesized as `value` when it has none or is private.
    fn update_accessor_params_list(&mut self, input: NodeIndex, is_private: bool) -> NodeList {
        let mut parameters = Vec::with_capacity(2);
        if !is_private {
            if let Some(this_parameter) = self.this_parameter(input) {
                parameters.push(self.ensure_parameter(this_parameter, None, NodeIndex::NONE));
            }
        }
        if self.arena().is_kind(input, SyntaxKind::SetAccessor) {
            let mut value = NodeIndex::NONE;
            if !is_private {
                if let Some(value_parameter) = self.set_accessor_value_parameter(input) {
                    let accessor_type = self.type_annotation_from_all_accessor_declarations(input);
                    value = self.ensure_parameter(value_parameter, None, accessor_type);
                }
            }
            if value.is_none() {
                let name = self.factory.create_identifier("value");
                value = self.factory.create_parameter_declaration(
                    None,
                    false,
                    name,
                    false,
                    NodeIndex::NONE,
                    NodeIndex::NONE,
                );
            }
            parameters.push(value);
        }
        self.factory.node_list(parameters)
    }

    // ========================================================================
    // Destructuring
    // ========================================================================

    /// `const { a, b: [c] } = f()` becomes one declaration per visible
    /// bound name, each with an inferred type.
    fn recreate_binding_pattern(&mut self, pattern: NodeIndex) -> Vec<NodeIndex> {
        let elements = self
            .arena()
            .node_data::<ListData>(pattern)
            .map_or(&[][..], |list| self.arena().list_nodes(list.elements))
            .to_vec();
        let mut declarations = Vec::new();
        for element in elements {
            if self.arena().is_kind(element, SyntaxKind::OmittedExpression) {
                continue;
            }
            let name = self.arena().name_of_declaration(element);
            if name.is_none() || !self.binding_name_visible(element) {
                continue;
            }
            if self.arena().is_binding_pattern(name) {
                declarations.extend(self.recreate_binding_pattern(name));
                continue;
            }
            let type_node = self.ensure_type(element, NodeIndex::NONE, false);
            declarations.push(self.factory.create_variable_declaration(
                name,
                false,
                type_node,
                NodeIndex::NONE,
            ));
        }
        declarations
    }
}
