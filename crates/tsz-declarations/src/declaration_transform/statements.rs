//! Top-level statement handling: which statements survive and what each
//! declaration kind turns into.

use tsz_ast::node::{
    BlockData, ClassData, EnumData, ExportAssignmentData, ExportDeclData, ExpressionData,
    FunctionData, HeritageData, ImportClauseData, ImportDeclData, ImportEqualsData, ListData,
    ModuleData, ParameterData, PropertyAssignmentData, TypeAliasData, TypeRefData,
    VariableData,
};
use tsz_ast::syntax_kind::is_string_a_non_contextual_keyword;
use tsz_ast::{
    GeneratedIdentifierFlags, ModifierFlags, NodeFlags, NodeIndex, NodeList, SyntaxKind,
    VisitResult, visit_node, visit_nodes, visit_nodes_with, visit_opt_nodes,
};

use super::{DeclarationTransformer, TypeSource, can_produce_diagnostics, is_enclosing_declaration};
use crate::diagnostics::AccessibilityDiagnosticContext;
use crate::resolver::ConstantValue;

/// Statement kinds that can appear in declaration output.
fn is_preserved_declaration_statement(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::FunctionDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::VariableStatement
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::ExportDeclaration
            | SyntaxKind::ExportAssignment
    )
}

/// `true` when `text` is a valid identifier name.
fn is_identifier_text(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

impl DeclarationTransformer<'_> {
    /// First pass over a statement list. Export declarations and
    /// assignments are rewritten directly; every other declaration is
    /// transformed now, its result parked in the replacement map, and the
    /// original kept as a placeholder until late painting splices it in.
    pub(super) fn visit_declaration_statements(&mut self, input: NodeIndex) -> VisitResult {
        let Some(kind) = self.arena().kind(input) else {
            return VisitResult::Removed;
        };
        if !is_preserved_declaration_statement(kind) || self.should_strip_internal(input) {
            return VisitResult::Removed;
        }

        match kind {
            SyntaxKind::ExportDeclaration => {
                self.mark_scope_exports(input);
                let Some(data) = self.arena().node_data::<ExportDeclData>(input).copied() else {
                    return input.into();
                };
                let specifier = self.rewrite_module_specifier(input, data.module_specifier);
                let attributes = self.try_get_resolution_mode_override(data.attributes);
                self.factory
                    .update_export_declaration(
                        input,
                        data.modifiers,
                        data.is_type_only,
                        data.export_clause,
                        specifier,
                        attributes,
                    )
                    .into()
            }
            SyntaxKind::ExportAssignment => {
                self.mark_scope_exports(input);
                self.transform_export_assignment(input)
            }
            _ => {
                let result = self.transform_top_level_declaration(input);
                self.state
                    .late_statement_replacement_map
                    .insert(input, result);
                input.into()
            }
        }
    }

    fn mark_scope_exports(&mut self, input: NodeIndex) {
        if self
            .arena()
            .is_kind(self.arena().parent(input), SyntaxKind::SourceFile)
        {
            self.state.result_has_external_module_indicator = true;
        }
        self.state.result_has_scope_marker = true;
    }

    /// `export default <expr>` with a non-identifier expression becomes
    /// `declare const _default: T; export default _default;`.
    fn transform_export_assignment(&mut self, input: NodeIndex) -> VisitResult {
        let Some(data) = self.arena().node_data::<ExportAssignmentData>(input).copied() else {
            return input.into();
        };
        if self.arena().is_identifier(data.expression) {
            return input.into();
        }

        let name = self
            .factory
            .create_unique_name("_default", GeneratedIdentifierFlags::OPTIMISTIC, None, None);
        let previous_context = std::mem::replace(
            &mut self.state.diagnostic_context,
            Some(AccessibilityDiagnosticContext::for_default_export(input)),
        );
        self.set_error_nodes(NodeIndex::NONE, input);
        let type_node = match self.serialize_type(data.expression, TypeSource::Expression, input) {
            Some(type_node) => type_node,
            None => self.any_type(),
        };
        self.clear_error_nodes();
        self.state.diagnostic_context = previous_context;

        let modifiers = if self.state.needs_declare {
            self.factory
                .create_modifiers_from_modifier_flags(ModifierFlags::AMBIENT)
        } else {
            None
        };
        let declaration =
            self.factory
                .create_variable_declaration(name, false, type_node, NodeIndex::NONE);
        let declarations = self.factory.node_list(vec![declaration]);
        let declaration_list = self
            .factory
            .create_variable_declaration_list(declarations, NodeFlags::CONST);
        let statement = self
            .factory
            .create_variable_statement(modifiers, declaration_list);
        let export = self
            .factory
            .update_export_assignment(input, data.modifiers, name);
        tracing::debug!("hoisted default export expression into `_default`");
        vec![statement, export].into()
    }

    /// Transform one top-level declaration into its output statements.
    /// An empty result elides the statement.
    pub(super) fn transform_top_level_declaration(&mut self, input: NodeIndex) -> Vec<NodeIndex> {
        self.state.late_marked_statements.shift_remove(&input);
        if self.should_strip_internal(input) {
            return Vec::new();
        }
        let Some(kind) = self.arena().kind(input) else {
            return Vec::new();
        };
        match kind {
            SyntaxKind::ImportEqualsDeclaration => {
                return self.transform_import_equals_declaration(input);
            }
            SyntaxKind::ImportDeclaration => return self.transform_import_declaration(input),
            _ => {}
        }
        if self.is_declaration_and_not_visible(input) {
            tracing::trace!(node = input.0, ?kind, "declaration not visible");
            return Vec::new();
        }
        if self.arena().is_function_like(input) && self.resolver.is_implementation_of_overload(input) {
            return Vec::new();
        }

        let previous_enclosing = is_enclosing_declaration(kind)
            .then(|| std::mem::replace(&mut self.state.enclosing_declaration, input));
        let can_produce_diagnostic = can_produce_diagnostics(kind);
        let previous_context = self.state.diagnostic_context.clone();
        if can_produce_diagnostic {
            self.enter_diagnostic_context(input);
        }
        let previous_needs_declare = self.state.needs_declare;

        let result = match kind {
            SyntaxKind::TypeAliasDeclaration => vec![self.transform_type_alias(input)],
            SyntaxKind::InterfaceDeclaration => vec![self.transform_interface(input)],
            SyntaxKind::FunctionDeclaration => self.transform_function_declaration(input),
            SyntaxKind::ModuleDeclaration => {
                vec![self.transform_module_declaration(input, previous_needs_declare)]
            }
            SyntaxKind::ClassDeclaration => self.transform_class_declaration(input),
            SyntaxKind::VariableStatement => self.transform_variable_statement(input),
            SyntaxKind::EnumDeclaration => vec![self.transform_enum_declaration(input)],
            other => panic!("unhandled top-level declaration kind {other:?}"),
        };

        if let Some(previous) = previous_enclosing {
            self.state.enclosing_declaration = previous;
        }
        if can_produce_diagnostic {
            self.state.diagnostic_context = previous_context;
        }
        self.state.needs_declare = previous_needs_declare;
        result
    }

    /// Link a rebuilt top-level declaration to its source.
    fn finish_declaration(&mut self, node: NodeIndex, input: NodeIndex) -> NodeIndex {
        if node == input || node.is_none() {
            return node;
        }
        self.clear_error_nodes();
        self.factory.set_original_node(node, input)
    }

    // ========================================================================
    // Imports
    // ========================================================================

    fn transform_import_equals_declaration(&mut self, input: NodeIndex) -> Vec<NodeIndex> {
        if !self.resolver.is_declaration_visible(input) {
            return Vec::new();
        }
        let Some(data) = self.arena().node_data::<ImportEqualsData>(input).copied() else {
            return Vec::new();
        };

        if self
            .arena()
            .is_kind(data.module_reference, SyntaxKind::ExternalModuleReference)
        {
            let specifier = self
                .arena()
                .node_data::<ExpressionData>(data.module_reference)
                .map_or(NodeIndex::NONE, |reference| reference.expression);
            let specifier = self.rewrite_module_specifier(input, specifier);
            let reference = self
                .factory
                .update_external_module_reference(data.module_reference, specifier);
            return vec![self.factory.update_import_equals_declaration(
                input,
                data.modifiers,
                data.is_type_only,
                data.name,
                reference,
            )];
        }

        let previous_context = self.enter_diagnostic_context(input);
        let enclosing = self.state.enclosing_declaration;
        self.check_entity_name_visibility(data.module_reference, enclosing);
        self.state.diagnostic_context = previous_context;
        vec![input]
    }

    /// Keep only the visible parts of an import. Imports without a clause
    /// are side-effect imports and always stay; a clause with nothing
    /// visible drops the import unless a module augmentation needs it.
    fn transform_import_declaration(&mut self, input: NodeIndex) -> Vec<NodeIndex> {
        let Some(data) = self.arena().node_data::<ImportDeclData>(input).copied() else {
            return Vec::new();
        };

        if data.import_clause.is_none() {
            let specifier = self.rewrite_module_specifier(input, data.module_specifier);
            let attributes = self.try_get_resolution_mode_override(data.attributes);
            return vec![self.factory.update_import_declaration(
                input,
                data.modifiers,
                data.import_clause,
                specifier,
                attributes,
            )];
        }

        let Some(clause) = self
            .arena()
            .node_data::<ImportClauseData>(data.import_clause)
            .copied()
        else {
            return Vec::new();
        };

        let visible_default = if clause.name.is_some()
            && self.resolver.is_declaration_visible(data.import_clause)
        {
            clause.name
        } else {
            NodeIndex::NONE
        };

        let named_bindings = if clause.named_bindings.is_none() {
            NodeIndex::NONE
        } else if self
            .arena()
            .is_kind(clause.named_bindings, SyntaxKind::NamespaceImport)
        {
            if self.resolver.is_declaration_visible(clause.named_bindings) {
                clause.named_bindings
            } else {
                NodeIndex::NONE
            }
        } else {
            let elements = self
                .arena()
                .node_data::<ListData>(clause.named_bindings)
                .map_or(&[][..], |list| self.arena().list_nodes(list.elements))
                .to_vec();
            let visible: Vec<NodeIndex> = elements
                .into_iter()
                .filter(|&element| self.resolver.is_declaration_visible(element))
                .collect();
            if visible.is_empty() {
                NodeIndex::NONE
            } else {
                let list = self.factory.node_list(visible);
                self.factory.update_named_imports(clause.named_bindings, list)
            }
        };

        if visible_default.is_none() && named_bindings.is_none() {
            if self.resolver.is_import_required_by_augmentation(input) {
                tracing::debug!(node = input.0, "keeping import required by augmentation");
                let specifier = self.rewrite_module_specifier(input, data.module_specifier);
                return vec![self.factory.update_import_declaration(
                    input,
                    data.modifiers,
                    NodeIndex::NONE,
                    specifier,
                    NodeIndex::NONE,
                )];
            }
            return Vec::new();
        }

        let import_clause = self.factory.update_import_clause(
            data.import_clause,
            clause.is_type_only,
            visible_default,
            named_bindings,
        );
        let specifier = self.rewrite_module_specifier(input, data.module_specifier);
        let attributes = self.try_get_resolution_mode_override(data.attributes);
        vec![self.factory.update_import_declaration(
            input,
            data.modifiers,
            import_clause,
            specifier,
            attributes,
        )]
    }

    // ========================================================================
    // Types
    // ========================================================================

    fn transform_type_alias(&mut self, input: NodeIndex) -> NodeIndex {
        let Some(data) = self.arena().node_data::<TypeAliasData>(input).copied() else {
            return input;
        };
        self.state.needs_declare = false;
        let modifiers = self.ensure_modifiers(input);
        let type_parameters = visit_opt_nodes(self, data.type_parameters);
        let type_node = visit_node(self, data.type_node);
        let node = self.factory.update_type_alias_declaration(
            input,
            modifiers,
            data.name,
            type_parameters,
            type_node,
        );
        self.finish_declaration(node, input)
    }

    fn transform_interface(&mut self, input: NodeIndex) -> NodeIndex {
        let Some(data) = self.arena().node_data::<ClassData>(input).copied() else {
            return input;
        };
        let modifiers = self.ensure_modifiers(input);
        let type_parameters = self.ensure_type_params(input, data.type_parameters);
        let heritage_clauses = self.transform_heritage_clauses(data.heritage_clauses);
        let members = visit_nodes(self, data.members);
        let node = self.factory.update_interface_declaration(
            input,
            modifiers,
            data.name,
            type_parameters,
            heritage_clauses,
            members,
        );
        self.finish_declaration(node, input)
    }

    /// Heritage clauses keep only entity-name references; an `extends null`
    /// also survives. Empty clauses are dropped.
    fn transform_heritage_clauses(&mut self, clauses: Option<NodeList>) -> Option<NodeList> {
        let clauses = self.factory.list_elements(clauses);
        if clauses.is_empty() {
            return None;
        }
        let mut kept = Vec::with_capacity(clauses.len());
        for clause in clauses {
            let Some(heritage) = self.arena().node_data::<HeritageData>(clause).copied() else {
                continue;
            };
            let types: Vec<NodeIndex> = self
                .arena()
                .list_nodes(heritage.types)
                .iter()
                .copied()
                .filter(|&heritage_type| {
                    let expression = self
                        .arena()
                        .node_data::<TypeRefData>(heritage_type)
                        .map_or(NodeIndex::NONE, |data| data.type_name);
                    self.arena().is_entity_name_expression(expression)
                        || (heritage.token == SyntaxKind::ExtendsKeyword
                            && self.arena().is_kind(expression, SyntaxKind::NullKeyword))
                })
                .collect();
            let types = self.factory.node_list(types);
            let types = visit_nodes(self, types);
            if self.arena().list_nodes(types).is_empty() {
                continue;
            }
            kept.push(self.factory.update_heritage_clause(clause, types));
        }
        self.factory.node_list_or_none(Some(kept))
    }

    // ========================================================================
    // Functions
    // ========================================================================

    fn transform_function_declaration(&mut self, input: NodeIndex) -> Vec<NodeIndex> {
        let Some(data) = self.arena().node_data::<FunctionData>(input).copied() else {
            return Vec::new();
        };
        let modifiers = self.ensure_modifiers(input);
        let type_parameters = self.ensure_type_params(input, data.type_parameters);
        let parameters = self.update_params_list(input, data.parameters, None);
        let return_type = self.ensure_type(input, data.type_annotation, false);
        let clean = self.factory.update_function_declaration(
            input,
            modifiers,
            false,
            data.name,
            type_parameters,
            parameters,
            return_type,
            NodeIndex::NONE,
        );
        let clean = self.finish_declaration(clean, input);

        if self.resolver.is_expando_function_declaration(input)
            && self.should_emit_function_properties(input)
        {
            return self.transform_expando_function(input, clean);
        }
        vec![clean]
    }

    /// Only the last overload, or the implementation, carries the namespace
    /// of assigned properties.
    fn should_emit_function_properties(&self, input: NodeIndex) -> bool {
        let arena = self.arena();
        let has_body = arena
            .node_data::<FunctionData>(input)
            .is_some_and(|data| data.body.is_some());
        if has_body {
            return true;
        }
        let name = arena.name_text(arena.name_of_declaration(input));
        let siblings = self.sibling_statements(input);
        let last_overload = siblings.iter().rev().copied().find(|&statement| {
            arena.is_kind(statement, SyntaxKind::FunctionDeclaration)
                && arena
                    .node_data::<FunctionData>(statement)
                    .is_some_and(|data| data.body.is_none())
                && arena.name_text(arena.name_of_declaration(statement)) == name
        });
        last_overload == Some(input)
    }

    fn sibling_statements(&self, node: NodeIndex) -> &[NodeIndex] {
        let arena = self.arena();
        let parent = arena.parent(node);
        match arena.kind(parent) {
            Some(SyntaxKind::SourceFile) => arena
                .node_data::<tsz_ast::node::SourceFileData>(parent)
                .map_or(&[][..], |file| arena.list_nodes(file.statements)),
            Some(SyntaxKind::ModuleBlock) => arena
                .node_data::<BlockData>(parent)
                .map_or(&[][..], |block| arena.list_nodes(block.statements)),
            _ => &[],
        }
    }

    /// `function f() {}` with `f.a = 1` becomes the function plus
    /// `declare namespace f { const a: number; }`.
    fn transform_expando_function(&mut self, input: NodeIndex, clean: NodeIndex) -> Vec<NodeIndex> {
        let properties = self.resolver.get_properties_of_container_function(input);
        let mut declarations = Vec::with_capacity(properties.len());
        let mut export_mappings: Vec<(NodeIndex, String)> = Vec::new();

        for property in properties {
            if !is_identifier_text(&property.name) {
                continue;
            }
            let previous_context = self.enter_diagnostic_context(property.value_declaration);
            let type_node =
                self.serialize_type(property.value_declaration, TypeSource::Declaration, input);
            self.state.diagnostic_context = previous_context;
            let type_node = match type_node {
                Some(type_node) => type_node,
                None => self.any_type(),
            };

            let is_keyword = is_string_a_non_contextual_keyword(&property.name);
            let name = if is_keyword {
                let generated = self.factory.get_generated_name_for_node(
                    property.value_declaration,
                    GeneratedIdentifierFlags::empty(),
                    None,
                    None,
                );
                export_mappings.push((generated, property.name.clone()));
                generated
            } else {
                self.factory.create_identifier(&property.name)
            };
            let declaration =
                self.factory
                    .create_variable_declaration(name, false, type_node, NodeIndex::NONE);
            let list = self.factory.node_list(vec![declaration]);
            let declaration_list = self
                .factory
                .create_variable_declaration_list(list, NodeFlags::empty());
            let modifiers = if is_keyword {
                None
            } else {
                self.factory
                    .create_modifiers_from_modifier_flags(ModifierFlags::EXPORT)
            };
            declarations.push(
                self.factory
                    .create_variable_statement(modifiers, declaration_list),
            );
        }

        if export_mappings.is_empty() {
            // Members of an ambient namespace are exported implicitly.
            declarations = declarations
                .into_iter()
                .map(|declaration| self.factory.update_modifiers(declaration, None))
                .collect();
        } else {
            let specifiers: Vec<NodeIndex> = export_mappings
                .into_iter()
                .map(|(generated, exported)| {
                    let exported = self.factory.create_identifier(&exported);
                    self.factory.create_export_specifier(false, generated, exported)
                })
                .collect();
            let specifiers = self.factory.node_list(specifiers);
            let named_exports = self.factory.create_named_exports(specifiers);
            declarations.push(self.factory.create_export_declaration(
                None,
                false,
                named_exports,
                NodeIndex::NONE,
                NodeIndex::NONE,
            ));
        }

        let function_name = match self.arena().node_data::<FunctionData>(input) {
            Some(data) if data.name.is_some() => data.name,
            _ => self.factory.create_identifier("_default"),
        };
        let statements = self.factory.node_list(declarations);
        let body = self.factory.create_module_block(statements);
        let modifiers = self.ensure_modifiers(input);
        let namespace = self.factory.create_module_declaration(
            modifiers,
            function_name,
            body,
            NodeFlags::NAMESPACE,
        );
        tracing::debug!(node = input.0, "emitting namespace for function properties");

        if !self
            .arena()
            .has_syntactic_modifier(clean, ModifierFlags::DEFAULT)
        {
            return vec![clean, namespace];
        }

        // `export default function f` with properties: declare both halves
        // locally and re-export the merged symbol.
        let flags = (self.arena().syntactic_modifier_flags(clean) & !ModifierFlags::EXPORT_DEFAULT)
            | ModifierFlags::AMBIENT;
        let Some(clean_data) = self.arena().node_data::<FunctionData>(clean).copied() else {
            return vec![clean, namespace];
        };
        let function_modifiers = self.factory.create_modifiers_from_modifier_flags(flags);
        let local_function = self.factory.update_function_declaration(
            clean,
            function_modifiers,
            false,
            clean_data.name,
            clean_data.type_parameters,
            clean_data.parameters,
            clean_data.type_annotation,
            NodeIndex::NONE,
        );
        let namespace_modifiers = self.factory.create_modifiers_from_modifier_flags(flags);
        let local_namespace =
            self.factory
                .update_module_declaration(namespace, namespace_modifiers, function_name, body);
        let export_default = self
            .factory
            .create_export_assignment(None, false, function_name);

        if self
            .arena()
            .is_kind(self.arena().parent(input), SyntaxKind::SourceFile)
        {
            self.state.result_has_external_module_indicator = true;
        }
        self.state.result_has_scope_marker = true;
        vec![local_function, local_namespace, export_default]
    }

    // ========================================================================
    // Namespaces
    // ========================================================================

    fn transform_module_declaration(
        &mut self,
        input: NodeIndex,
        previous_needs_declare: bool,
    ) -> NodeIndex {
        let Some(data) = self.arena().node_data::<ModuleData>(input).copied() else {
            return input;
        };
        self.state.needs_declare = false;
        let inner = data.body;

        if self.arena().is_kind(inner, SyntaxKind::ModuleBlock) {
            let previous_needs_scope_fix = self.state.needs_scope_fix_marker;
            let previous_has_scope_marker = self.state.result_has_scope_marker;
            self.state.result_has_scope_marker = false;
            self.state.needs_scope_fix_marker = false;

            let statements = match self.arena().node_data::<BlockData>(inner) {
                Some(block) => block.statements,
                None => self.factory.node_list(Vec::new()),
            };
            let statements = self.visit_statement_list(statements);
            let mut late_statements = self.transform_and_replace_late_painted_statements(statements);

            let is_ambient = self
                .arena()
                .get(input)
                .is_some_and(|node| node.flags.contains(NodeFlags::AMBIENT))
                || self
                    .arena()
                    .has_syntactic_modifier(input, ModifierFlags::AMBIENT);
            if is_ambient {
                self.state.needs_scope_fix_marker = false;
            }

            if !self.arena().is_global_scope_augmentation(input)
                && !self.has_scope_marker(late_statements)
                && !self.state.result_has_scope_marker
            {
                if self.state.needs_scope_fix_marker {
                    tracing::debug!(node = input.0, "adding `export {{}}` scope marker to namespace");
                    let mut nodes = self.arena().list_nodes(late_statements).to_vec();
                    nodes.push(self.factory.create_empty_exports());
                    late_statements = self.factory.node_list(nodes);
                } else {
                    late_statements = visit_nodes_with(self, late_statements, |transformer, statement| {
                        transformer.strip_export_modifiers(statement).into()
                    });
                }
            }

            let body = self.factory.update_module_block(inner, late_statements);
            self.state.needs_declare = previous_needs_declare;
            self.state.needs_scope_fix_marker = previous_needs_scope_fix;
            self.state.result_has_scope_marker = previous_has_scope_marker;

            let modifiers = self.ensure_modifiers(input);
            let name = if self.arena().is_external_module_augmentation(input) {
                self.rewrite_module_specifier(input, data.name)
            } else {
                data.name
            };
            let node = self
                .factory
                .update_module_declaration(input, modifiers, name, body);
            return self.finish_declaration(node, input);
        }

        self.state.needs_declare = previous_needs_declare;
        let modifiers = self.ensure_modifiers(input);
        self.state.needs_declare = false;

        // `namespace A.B` nests the inner declaration directly as the body.
        let body = if inner.is_some() {
            // The transformed inner declaration comes back through the replacement map.
            self.visit_declaration_statements(inner);
            self.state
                .late_statement_replacement_map
                .remove(&inner)
                .and_then(|result| result.first().copied())
                .unwrap_or(NodeIndex::NONE)
        } else {
            NodeIndex::NONE
        };
        let node = self
            .factory
            .update_module_declaration(input, modifiers, data.name, body);
        self.finish_declaration(node, input)
    }

    fn has_scope_marker(&self, statements: NodeList) -> bool {
        self.arena().list_nodes(statements).iter().any(|&statement| {
            matches!(
                self.arena().kind(statement),
                Some(SyntaxKind::ExportAssignment | SyntaxKind::ExportDeclaration)
            )
        })
    }

    fn strip_export_modifiers(&mut self, statement: NodeIndex) -> NodeIndex {
        let arena = self.arena();
        if arena.is_kind(statement, SyntaxKind::ImportEqualsDeclaration)
            || arena.has_syntactic_modifier(statement, ModifierFlags::DEFAULT)
            || !arena.has_syntactic_modifier(statement, ModifierFlags::EXPORT)
        {
            return statement;
        }
        let flags = arena.syntactic_modifier_flags(statement) - ModifierFlags::EXPORT;
        let modifiers = self.factory.create_modifiers_from_modifier_flags(flags);
        self.factory.update_modifiers(statement, modifiers)
    }

    // ========================================================================
    // Classes
    // ========================================================================

    fn transform_class_declaration(&mut self, input: NodeIndex) -> Vec<NodeIndex> {
        let Some(data) = self.arena().node_data::<ClassData>(input).copied() else {
            return Vec::new();
        };
        self.set_error_nodes(data.name, input);
        let modifiers = self.ensure_modifiers(input);
        let type_parameters = self.ensure_type_params(input, data.type_parameters);

        let parameter_properties = self.parameter_properties(data.members);
        let has_private_identifier = self
            .arena()
            .list_nodes(data.members)
            .iter()
            .any(|&member| {
                let name = self.arena().name_of_declaration(member);
                self.arena().is_private_identifier(name)
            });

        let mut members = Vec::new();
        if has_private_identifier {
            let name = self.factory.create_private_identifier("#private");
            members.push(self.factory.create_property_declaration(
                None,
                name,
                false,
                false,
                NodeIndex::NONE,
                NodeIndex::NONE,
            ));
        }
        members.extend(parameter_properties);
        let visited = visit_nodes(self, data.members);
        members.extend_from_slice(self.arena().list_nodes(visited));
        let members = self.factory.node_list(members);

        let clauses = self.factory.list_elements(data.heritage_clauses);
        let extends = clauses.iter().copied().find_map(|clause| {
            let heritage = self.arena().node_data::<HeritageData>(clause)?;
            if heritage.token != SyntaxKind::ExtendsKeyword {
                return None;
            }
            self.arena().list_nodes(heritage.types).first().copied()
        });
        let extends_expression = extends.map_or(NodeIndex::NONE, |heritage_type| {
            self.arena()
                .node_data::<TypeRefData>(heritage_type)
                .map_or(NodeIndex::NONE, |data| data.type_name)
        });

        let needs_hoisting = extends.is_some()
            && !self.arena().is_entity_name_expression(extends_expression)
            && !self
                .arena()
                .is_kind(extends_expression, SyntaxKind::NullKeyword);
        let Some(extends) = extends.filter(|_| needs_hoisting) else {
            let heritage_clauses = self.transform_heritage_clauses(data.heritage_clauses);
            let node = self.factory.update_class_declaration(
                input,
                modifiers,
                data.name,
                type_parameters,
                heritage_clauses,
                members,
            );
            return vec![self.finish_declaration(node, input)];
        };

        // `class C extends mixin(Base)`: hoist the base expression into a
        // `C_base` constant and extend that instead.
        let class_name = self
            .arena()
            .name_text(data.name)
            .unwrap_or("default")
            .to_string();
        let base_name = self.factory.create_unique_name(
            &format!("{class_name}_base"),
            GeneratedIdentifierFlags::OPTIMISTIC,
            None,
            None,
        );
        tracing::debug!(class = %class_name, "hoisting non-entity extends expression");

        let hoisted_context =
            AccessibilityDiagnosticContext::for_hoisted_extends(self.arena(), input, extends);
        let previous_context = self.state.diagnostic_context.replace(hoisted_context);
        let base_type = match self.serialize_type(extends_expression, TypeSource::Expression, input) {
            Some(type_node) => type_node,
            None => self.any_type(),
        };
        self.state.diagnostic_context = previous_context;

        let declaration =
            self.factory
                .create_variable_declaration(base_name, false, base_type, NodeIndex::NONE);
        let list = self.factory.node_list(vec![declaration]);
        let declaration_list = self
            .factory
            .create_variable_declaration_list(list, NodeFlags::CONST);
        let base_modifiers = if self.state.needs_declare {
            self.factory
                .create_modifiers_from_modifier_flags(ModifierFlags::AMBIENT)
        } else {
            None
        };
        let base_statement = self
            .factory
            .create_variable_statement(base_modifiers, declaration_list);

        let mut heritage_clauses = Vec::with_capacity(clauses.len());
        for clause in clauses {
            let Some(heritage) = self.arena().node_data::<HeritageData>(clause).copied() else {
                continue;
            };
            let types = self.arena().list_nodes(heritage.types).to_vec();
            if heritage.token == SyntaxKind::ExtendsKeyword {
                let previous_context = types
                    .first()
                    .map(|&first| self.enter_diagnostic_context(first));
                let mut rewritten = Vec::with_capacity(types.len());
                for heritage_type in types {
                    let type_arguments = self
                        .arena()
                        .node_data::<TypeRefData>(heritage_type)
                        .and_then(|data| data.type_arguments);
                    let type_arguments = visit_opt_nodes(self, type_arguments);
                    rewritten.push(self.factory.update_expression_with_type_arguments(
                        heritage_type,
                        base_name,
                        type_arguments,
                    ));
                }
                if let Some(previous) = previous_context {
                    self.state.diagnostic_context = previous;
                }
                let rewritten = self.factory.node_list(rewritten);
                heritage_clauses.push(self.factory.update_heritage_clause(clause, rewritten));
            } else {
                let kept: Vec<NodeIndex> = types
                    .into_iter()
                    .filter(|&heritage_type| {
                        let expression = self
                            .arena()
                            .node_data::<TypeRefData>(heritage_type)
                            .map_or(NodeIndex::NONE, |data| data.type_name);
                        self.arena().is_entity_name_expression(expression)
                            || self.arena().is_kind(expression, SyntaxKind::NullKeyword)
                    })
                    .collect();
                let kept = self.factory.node_list(kept);
                let kept = visit_nodes(self, kept);
                heritage_clauses.push(self.factory.update_heritage_clause(clause, kept));
            }
        }
        let heritage_clauses = self.factory.node_list(heritage_clauses);

        let node = self.factory.update_class_declaration(
            input,
            modifiers,
            data.name,
            type_parameters,
            Some(heritage_clauses),
            members,
        );
        vec![base_statement, self.finish_declaration(node, input)]
    }

    /// Property declarations for the parameter properties of the first
    /// constructor with a body.
    fn parameter_properties(&mut self, members: NodeList) -> Vec<NodeIndex> {
        let constructor = self.arena().list_nodes(members).iter().copied().find(|&member| {
            self.arena().is_kind(member, SyntaxKind::Constructor)
                && self
                    .arena()
                    .node_data::<FunctionData>(member)
                    .is_some_and(|data| data.body.is_some())
        });
        let Some(constructor) = constructor else {
            return Vec::new();
        };
        let parameters = self
            .arena()
            .node_data::<FunctionData>(constructor)
            .map_or(&[][..], |data| self.arena().list_nodes(data.parameters))
            .to_vec();

        let previous_context = self.state.diagnostic_context.clone();
        let mut properties = Vec::new();
        for parameter in parameters {
            if !self
                .arena()
                .has_syntactic_modifier(parameter, ModifierFlags::PARAMETER_PROPERTY_MODIFIER)
                || self.should_strip_internal(parameter)
            {
                continue;
            }
            self.enter_diagnostic_context(parameter);
            let Some(data) = self.arena().node_data::<ParameterData>(parameter).copied() else {
                continue;
            };
            if self.arena().is_identifier(data.name) {
                let modifiers = self.ensure_modifiers(parameter);
                let type_node = self.ensure_type(parameter, data.type_annotation, false);
                let initializer = self.ensure_no_initializer(parameter);
                let property = self.factory.create_property_declaration(
                    modifiers,
                    data.name,
                    data.question_token,
                    false,
                    type_node,
                    initializer,
                );
                properties.push(self.factory.set_original_node(property, parameter));
            } else {
                self.binding_pattern_properties(parameter, data.name, &mut properties);
            }
        }
        self.state.diagnostic_context = previous_context;
        properties
    }

    /// One property per identifier bound by a destructured parameter
    /// property.
    fn binding_pattern_properties(
        &mut self,
        parameter: NodeIndex,
        pattern: NodeIndex,
        properties: &mut Vec<NodeIndex>,
    ) {
        let elements = self
            .arena()
            .node_data::<ListData>(pattern)
            .map_or(&[][..], |list| self.arena().list_nodes(list.elements))
            .to_vec();
        for element in elements {
            if self.arena().is_kind(element, SyntaxKind::OmittedExpression) {
                continue;
            }
            let name = self.arena().name_of_declaration(element);
            if self.arena().is_binding_pattern(name) {
                self.binding_pattern_properties(parameter, name, properties);
                continue;
            }
            if !self.arena().is_identifier(name) {
                continue;
            }
            let modifiers = self.ensure_modifiers(parameter);
            let type_node = self.ensure_type(element, NodeIndex::NONE, false);
            properties.push(self.factory.create_property_declaration(
                modifiers,
                name,
                false,
                false,
                type_node,
                NodeIndex::NONE,
            ));
        }
    }

    // ========================================================================
    // Variables and enums
    // ========================================================================

    fn transform_variable_statement(&mut self, input: NodeIndex) -> Vec<NodeIndex> {
        let Some(data) = self.arena().node_data::<VariableData>(input).copied() else {
            return Vec::new();
        };
        let Some(list) = self
            .arena()
            .node_data::<ListData>(data.declaration_list)
            .copied()
        else {
            return Vec::new();
        };
        let any_visible = self
            .arena()
            .list_nodes(list.elements)
            .to_vec()
            .into_iter()
            .any(|declaration| self.binding_name_visible(declaration));
        if !any_visible {
            return Vec::new();
        }

        let declarations = visit_nodes(self, list.elements);
        if self.arena().list_nodes(declarations).is_empty() {
            return Vec::new();
        }
        let modifiers = self.ensure_modifiers(input);

        let is_using = self
            .arena()
            .get(data.declaration_list)
            .is_some_and(|node| node.flags.contains(NodeFlags::USING));
        let declaration_list = if is_using {
            // `using` has no declaration form; it is emitted as `const`.
            let replaced = self
                .factory
                .create_variable_declaration_list(declarations, NodeFlags::CONST);
            self.factory
                .set_text_range_from(replaced, data.declaration_list);
            self.factory
                .set_original_node(replaced, data.declaration_list)
        } else {
            self.factory
                .update_variable_declaration_list(data.declaration_list, declarations)
        };
        let node = self
            .factory
            .update_variable_statement(input, modifiers, declaration_list);
        vec![self.finish_declaration(node, input)]
    }

    fn transform_enum_declaration(&mut self, input: NodeIndex) -> NodeIndex {
        let Some(data) = self.arena().node_data::<EnumData>(input).copied() else {
            return input;
        };
        let enum_members = self.arena().list_nodes(data.members).to_vec();
        let mut members = Vec::with_capacity(enum_members.len());
        for member in enum_members {
            if self.should_strip_internal(member) {
                continue;
            }
            let Some(member_data) = self.arena().node_data::<PropertyAssignmentData>(member).copied()
            else {
                continue;
            };
            let initializer = match self.resolver.get_constant_value(member) {
                None => NodeIndex::NONE,
                Some(ConstantValue::String(text)) => self.factory.create_string_literal(&text, false),
                Some(ConstantValue::Number(value)) if value < 0.0 => {
                    let magnitude = self.factory.create_numeric_literal_from_value(-value);
                    self.factory
                        .create_prefix_unary_expression(SyntaxKind::MinusToken, magnitude)
                }
                Some(ConstantValue::Number(value)) => {
                    self.factory.create_numeric_literal_from_value(value)
                }
            };
            members.push(
                self.factory
                    .update_enum_member(member, member_data.name, initializer),
            );
        }
        let members = self.factory.node_list(members);
        let modifiers = self.ensure_modifiers(input);
        let node = self
            .factory
            .update_enum_declaration(input, modifiers, data.name, members);
        self.finish_declaration(node, input)
    }
}
