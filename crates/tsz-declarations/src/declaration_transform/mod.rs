//! Declaration transform.
//!
//! Rewrites a bound source file (or a bundle of them) into the tree of its
//! `.d.ts` output:
//!
//! - top-level statements are reduced to their visible declarations,
//!   with bodies and initializers dropped and missing types inferred
//!   through the `EmitResolver`
//! - import/alias statements that inferred types turn out to need are
//!   painted visible late and spliced back in at their original position
//! - accessibility failures are collected as diagnostics instead of
//!   aborting the emit
//!
//! The transform is a `NodeVisitor`: nodes it has no special handling for
//! are rebuilt from their visited children.

mod state;
mod statements;
mod subtree;
mod tracker;

use tsz_ast::node::{BundleData, ImportAttributesData, PropertyAssignmentData, SourceFileData};
use tsz_ast::{
    ModifierFlags, NodeFactory, NodeIndex, NodeList, NodeVisitor, SyntaxKind, VisitResult,
    visit_nodes_with,
};
use tsz_common::Diagnostic;
use tsz_common::diagnostics::diagnostic_messages as msg;

use crate::diagnostics::{AccessibilityDiagnosticContext, PendingDiagnostic};
use crate::resolver::{
    DeclarationEmitHost, DeclarationEmitOptions, DeclarationTransformResult, EmitResolver,
};
use state::EmitState;
use tracker::DeclarationTracker;

/// Which resolver entry point infers a missing type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TypeSource {
    Declaration,
    ReturnType,
    Expression,
}

pub struct DeclarationTransformer<'a> {
    factory: &'a mut NodeFactory,
    resolver: &'a dyn EmitResolver,
    host: &'a dyn DeclarationEmitHost,
    options: DeclarationEmitOptions,
    state: EmitState,
    /// Diagnostics of every file finished so far.
    diagnostics: Vec<Diagnostic>,
}

impl<'a> DeclarationTransformer<'a> {
    pub fn new(
        factory: &'a mut NodeFactory,
        resolver: &'a dyn EmitResolver,
        host: &'a dyn DeclarationEmitHost,
        options: DeclarationEmitOptions,
    ) -> Self {
        DeclarationTransformer {
            factory,
            resolver,
            host,
            options,
            state: EmitState::new(NodeIndex::NONE, "", false),
            diagnostics: Vec::new(),
        }
    }

    /// Transform a `SourceFile` or `Bundle`. Parent pointers of the input
    /// tree must be set.
    #[track_caller]
    pub fn transform(&mut self, node: NodeIndex) -> DeclarationTransformResult {
        let node = match self.factory.arena().kind(node) {
            Some(SyntaxKind::SourceFile) => self.transform_source_file(node),
            Some(SyntaxKind::Bundle) => self.transform_bundle(node),
            other => panic!("declaration transform expects a source file or bundle, found {other:?}"),
        };
        DeclarationTransformResult {
            node,
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }

    fn arena(&self) -> &tsz_ast::NodeArena {
        self.factory.arena()
    }

    // ========================================================================
    // Files and bundles
    // ========================================================================

    fn source_file_data(&self, node: NodeIndex) -> SourceFileData {
        match self.arena().node_data::<SourceFileData>(node) {
            Some(data) => data.clone(),
            None => panic!("node {node:?} is not a source file"),
        }
    }

    fn transform_source_file(&mut self, node: NodeIndex) -> NodeIndex {
        let file = self.source_file_data(node);
        if file.is_declaration_file {
            tracing::debug!(file = %file.file_name, "declaration file passes through unchanged");
            return node;
        }

        let _span = tracing::debug_span!("declaration_transform", file = %file.file_name).entered();
        self.begin_file(node, &file.file_name, false);
        self.state.needs_declare = true;

        let statements = self.visit_statement_list(file.statements);
        let statements = self.transform_and_replace_late_painted_statements(statements);
        let statements = if file.is_external_module
            && (!self.state.result_has_external_module_indicator
                || (self.state.needs_scope_fix_marker && !self.state.result_has_scope_marker))
        {
            tracing::debug!("appending `export {{}}` to keep the output a module");
            let mut nodes = self.arena().list_nodes(statements).to_vec();
            nodes.push(self.factory.create_empty_exports());
            self.list_with_range_of(nodes, file.statements)
        } else {
            statements
        };

        let updated = self
            .factory
            .update_source_file(node, statements, true, file.has_no_default_lib);
        self.finish_file();
        updated
    }

    fn transform_bundle(&mut self, node: NodeIndex) -> NodeIndex {
        let Some(bundle) = self.arena().node_data::<BundleData>(node).cloned() else {
            panic!("node {node:?} is not a bundle");
        };

        let mut source_files = Vec::with_capacity(bundle.source_files.len());
        for source_file in bundle.source_files {
            let file = self.source_file_data(source_file);
            if file.is_declaration_file {
                tracing::debug!(file = %file.file_name, "skipping declaration file in bundle");
                continue;
            }

            let _span =
                tracing::debug_span!("declaration_transform", file = %file.file_name, bundled = true)
                    .entered();
            self.begin_file(source_file, &file.file_name, true);

            let updated = if file.is_external_module {
                self.state.needs_declare = false;
                let statements = self.visit_statement_list(file.statements);
                let statements = self.transform_and_replace_late_painted_statements(statements);

                let module_name = self.host.resolved_external_module_name(source_file);
                let modifiers = self
                    .factory
                    .create_modifiers_from_modifier_flags(ModifierFlags::AMBIENT);
                let name = self.factory.create_string_literal(&module_name, false);
                let body = self.factory.create_module_block(statements);
                let module = self.factory.create_module_declaration(
                    modifiers,
                    name,
                    body,
                    tsz_ast::NodeFlags::empty(),
                );
                let wrapped = self.list_with_range_of(vec![module], file.statements);
                self.factory
                    .update_source_file(source_file, wrapped, true, file.has_no_default_lib)
            } else {
                self.state.needs_declare = true;
                let statements = self.visit_statement_list(file.statements);
                let statements = self.transform_and_replace_late_painted_statements(statements);
                self.factory
                    .update_source_file(source_file, statements, true, file.has_no_default_lib)
            };
            source_files.push(updated);
            self.finish_file();
        }

        self.factory.update_bundle(node, source_files)
    }

    fn begin_file(&mut self, source_file: NodeIndex, file_name: &str, is_bundled_emit: bool) {
        self.state = EmitState::new(source_file, file_name, is_bundled_emit);
    }

    fn finish_file(&mut self) {
        let arena = self.factory.arena();
        let file_name = self.state.file_name.as_str();
        let pending = std::mem::take(&mut self.state.pending_diagnostics);
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), file = file_name, "declaration diagnostics");
        }
        self.diagnostics
            .extend(pending.iter().map(|diagnostic| diagnostic.resolve(arena, file_name)));
    }

    /// New statement list carrying the source range of `original`.
    fn list_with_range_of(&mut self, nodes: Vec<NodeIndex>, original: NodeList) -> NodeList {
        let range = self
            .arena()
            .get_list(original)
            .map(|array| (array.pos, array.end));
        let list = self.factory.node_list(nodes);
        if let Some((pos, end)) = range {
            if let Some(array) = self.factory.arena_mut().get_list_mut(list) {
                array.pos = pos;
                array.end = end;
            }
        }
        list
    }

    fn visit_statement_list(&mut self, statements: NodeList) -> NodeList {
        visit_nodes_with(self, statements, |transformer, statement| {
            transformer.visit_declaration_statements(statement)
        })
    }

    // ========================================================================
    // Late painting
    // ========================================================================

    /// Transform every statement queued for late painting, then splice the
    /// stored results into `statements` in place of their originals.
    fn transform_and_replace_late_painted_statements(&mut self, statements: NodeList) -> NodeList {
        while let Some(statement) = self.state.late_marked_statements.shift_remove_index(0) {
            let kind = self.arena().kind(statement);
            if !kind.is_some_and(is_late_visibility_painted_statement) {
                panic!("statement of kind {kind:?} cannot be painted visible");
            }
            tracing::debug!(statement = statement.0, ?kind, "painting late-visible statement");

            let prior_needs_declare = self.state.needs_declare;
            let parent = self.arena().parent(statement);
            self.state.needs_declare = self.arena().is_kind(parent, SyntaxKind::SourceFile)
                && !(self.arena().is_external_module(parent) && self.state.is_bundled_emit);
            let result = self.transform_top_level_declaration(statement);
            self.state.needs_declare = prior_needs_declare;

            self.state.late_painted.insert(statement);
            self.state
                .late_statement_replacement_map
                .insert(statement, result);
        }

        visit_nodes_with(self, statements, |transformer, statement| {
            transformer.visit_late_visibility_marked_statement(statement)
        })
    }

    fn visit_late_visibility_marked_statement(&mut self, statement: NodeIndex) -> VisitResult {
        let painted = self
            .arena()
            .kind(statement)
            .is_some_and(is_late_visibility_painted_statement);
        if !painted {
            return statement.into();
        }
        let Some(result) = self.state.late_statement_replacement_map.remove(&statement) else {
            return statement.into();
        };

        let parent_is_file = self
            .arena()
            .is_kind(self.arena().parent(statement), SyntaxKind::SourceFile);
        for &node in &result {
            if self.needs_scope_marker(node) {
                self.state.needs_scope_fix_marker = true;
            }
            if parent_is_file && self.is_external_module_indicator(node) {
                self.state.result_has_external_module_indicator = true;
            }
        }
        result.into()
    }

    fn is_any_import_or_re_export(&self, node: NodeIndex) -> bool {
        matches!(
            self.arena().kind(node),
            Some(
                SyntaxKind::ImportDeclaration
                    | SyntaxKind::ImportEqualsDeclaration
                    | SyntaxKind::ExportDeclaration
            )
        )
    }

    fn needs_scope_marker(&self, node: NodeIndex) -> bool {
        let arena = self.arena();
        !self.is_any_import_or_re_export(node)
            && !arena.is_kind(node, SyntaxKind::ExportAssignment)
            && !arena.has_syntactic_modifier(node, ModifierFlags::EXPORT)
            && !arena.is_ambient_module(node)
    }

    fn is_external_module_indicator(&self, node: NodeIndex) -> bool {
        self.is_any_import_or_re_export(node)
            || self.arena().is_kind(node, SyntaxKind::ExportAssignment)
            || self
                .arena()
                .has_syntactic_modifier(node, ModifierFlags::EXPORT)
    }

    // ========================================================================
    // Modifiers
    // ========================================================================

    /// Modifier list for the output declaration: `public`, `async` and
    /// `override` are dropped; `declare` is added at the top level.
    fn ensure_modifiers(&mut self, node: NodeIndex) -> Option<NodeList> {
        let current = self.arena().syntactic_modifier_flags(node);
        let flags = self.ensure_modifier_flags(node);
        if current == flags {
            let modifiers = self.arena().modifiers_of(node);
            let nodes = self.arena().opt_list_nodes(modifiers);
            if nodes
                .iter()
                .all(|&modifier| !self.arena().is_kind(modifier, SyntaxKind::Decorator))
            {
                return modifiers;
            }
            let kept: Vec<NodeIndex> = nodes
                .iter()
                .copied()
                .filter(|&modifier| !self.arena().is_kind(modifier, SyntaxKind::Decorator))
                .collect();
            return self.factory.node_list_or_none(Some(kept));
        }
        self.factory.create_modifiers_from_modifier_flags(flags)
    }

    fn ensure_modifier_flags(&self, node: NodeIndex) -> ModifierFlags {
        let mut mask =
            ModifierFlags::ALL - (ModifierFlags::PUBLIC | ModifierFlags::ASYNC | ModifierFlags::OVERRIDE);
        let mut additions = if self.state.needs_declare
            && !self.arena().is_kind(node, SyntaxKind::InterfaceDeclaration)
        {
            ModifierFlags::AMBIENT
        } else {
            ModifierFlags::empty()
        };

        let parent = self.arena().parent(node);
        let parent_is_file = self.arena().is_kind(parent, SyntaxKind::SourceFile);
        if !parent_is_file || (self.state.is_bundled_emit && self.arena().is_external_module(parent)) {
            mask -= ModifierFlags::AMBIENT;
            additions = ModifierFlags::empty();
        }
        self.mask_modifier_flags(node, mask, additions)
    }

    fn mask_modifier_flags(
        &self,
        node: NodeIndex,
        mask: ModifierFlags,
        additions: ModifierFlags,
    ) -> ModifierFlags {
        let mut flags = (self.arena().syntactic_modifier_flags(node) & mask) | additions;
        if flags.contains(ModifierFlags::DEFAULT) {
            // `export default` is never `declare`d.
            flags |= ModifierFlags::EXPORT;
            flags -= ModifierFlags::AMBIENT;
        }
        flags
    }

    fn mask_modifiers(
        &mut self,
        node: NodeIndex,
        mask: ModifierFlags,
        additions: ModifierFlags,
    ) -> Option<NodeList> {
        let flags = self.mask_modifier_flags(node, mask, additions);
        self.factory.create_modifiers_from_modifier_flags(flags)
    }

    // ========================================================================
    // Module specifiers
    // ========================================================================

    fn rewrite_module_specifier(&mut self, parent: NodeIndex, specifier: NodeIndex) -> NodeIndex {
        if specifier.is_none() {
            return specifier;
        }
        let parent_kind = self.arena().kind(parent);
        if parent_kind != Some(SyntaxKind::ModuleDeclaration)
            && parent_kind != Some(SyntaxKind::ImportType)
        {
            self.state.result_has_external_module_indicator = true;
        }
        if self.state.is_bundled_emit && self.arena().is_string_literal_like(specifier) {
            if let Some(name) = self.host.external_module_name_for_declaration(parent) {
                tracing::trace!(module = %name, "rewriting bundled module specifier");
                return self.factory.create_string_literal(&name, false);
            }
        }
        specifier
    }

    /// Keep an attribute list only when it is exactly a `resolution-mode`
    /// override of `"import"` or `"require"`.
    fn try_get_resolution_mode_override(&mut self, attributes: NodeIndex) -> NodeIndex {
        let Some(data) = self.arena().node_data::<ImportAttributesData>(attributes) else {
            return NodeIndex::NONE;
        };
        let &[element] = self.arena().list_nodes(data.elements) else {
            return NodeIndex::NONE;
        };
        let Some(attribute) = self.arena().node_data::<PropertyAssignmentData>(element) else {
            return NodeIndex::NONE;
        };
        if !self.arena().is_string_literal_like(attribute.name)
            || self.arena().literal_text(attribute.name) != Some("resolution-mode")
        {
            return NodeIndex::NONE;
        }
        if !self.arena().is_string_literal_like(attribute.initializer) {
            return NodeIndex::NONE;
        }
        match self.arena().literal_text(attribute.initializer) {
            Some("import" | "require") => {}
            _ => return NodeIndex::NONE,
        }

        if !self.options.is_nightly {
            self.state.pending_diagnostics.push(PendingDiagnostic::new(
                attributes,
                &msg::RESOLUTION_MODE_ASSERTIONS_ARE_UNSTABLE,
                Vec::new(),
            ));
        }
        attributes
    }

    // ========================================================================
    // Diagnostics and type inference
    // ========================================================================

    fn should_strip_internal(&self, node: NodeIndex) -> bool {
        self.options.strip_internal
            && self
                .host
                .is_internal_declaration(node, self.state.current_source_file)
    }

    fn check_entity_name_visibility(&mut self, entity_name: NodeIndex, enclosing: NodeIndex) {
        let result = self.resolver.is_entity_name_visible(entity_name, enclosing);
        self.state.handle_symbol_accessibility_error(result);
    }

    /// Install the diagnostic context for `node`, returning the previous one.
    fn enter_diagnostic_context(&mut self, node: NodeIndex) -> Option<AccessibilityDiagnosticContext> {
        let context = AccessibilityDiagnosticContext::for_node(self.factory.arena(), node);
        std::mem::replace(&mut self.state.diagnostic_context, context)
    }

    fn set_error_nodes(&mut self, name: NodeIndex, fallback: NodeIndex) {
        let arena = self.factory.arena();
        let display = if name.is_some() {
            arena.entity_name_to_string(name)
        } else if fallback.is_some() {
            arena.declaration_name_to_string(fallback)
        } else {
            String::new()
        };
        self.state.error_name_node = name;
        self.state.error_fallback_node = fallback;
        self.state.error_declaration_name = display;
    }

    fn clear_error_nodes(&mut self) {
        self.set_error_nodes(NodeIndex::NONE, NodeIndex::NONE);
    }

    fn serialize_type(
        &mut self,
        node: NodeIndex,
        source: TypeSource,
        enclosing: NodeIndex,
    ) -> Option<NodeIndex> {
        let resolver = self.resolver;
        let factory = &mut *self.factory;
        let mut tracker = DeclarationTracker {
            resolver,
            state: &mut self.state,
        };
        match source {
            TypeSource::Declaration => {
                resolver.create_type_of_declaration(factory, node, enclosing, &mut tracker)
            }
            TypeSource::ReturnType => resolver.create_return_type_of_signature_declaration(
                factory,
                node,
                enclosing,
                &mut tracker,
            ),
            TypeSource::Expression => {
                resolver.create_type_of_expression(factory, node, enclosing, &mut tracker)
            }
        }
    }

    fn literal_const_value(&mut self, node: NodeIndex) -> NodeIndex {
        let resolver = self.resolver;
        let factory = &mut *self.factory;
        let mut tracker = DeclarationTracker {
            resolver,
            state: &mut self.state,
        };
        resolver.create_literal_const_value(factory, node, &mut tracker)
    }

    fn any_type(&mut self) -> NodeIndex {
        self.factory.create_keyword_type_node(SyntaxKind::AnyKeyword)
    }
}

impl NodeVisitor for DeclarationTransformer<'_> {
    fn factory(&mut self) -> &mut NodeFactory {
        self.factory
    }

    fn visit(&mut self, node: NodeIndex) -> VisitResult {
        self.visit_declaration_subtree(node)
    }
}

/// Statements that can be queued for late painting.
fn is_late_visibility_painted_statement(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ImportDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::VariableStatement
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::EnumDeclaration
    )
}

/// Nodes that open a new scope for resolving names in inferred types.
fn is_enclosing_declaration(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::SourceFile
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::Constructor
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::CallSignature
            | SyntaxKind::ConstructSignature
            | SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
            | SyntaxKind::IndexSignature
            | SyntaxKind::MappedType
    )
}

/// Nodes that install their own accessibility diagnostic context.
fn can_produce_diagnostics(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::VariableDeclaration
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::PropertySignature
            | SyntaxKind::BindingElement
            | SyntaxKind::SetAccessor
            | SyntaxKind::GetAccessor
            | SyntaxKind::ConstructSignature
            | SyntaxKind::CallSignature
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::MethodSignature
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::Parameter
            | SyntaxKind::Constructor
            | SyntaxKind::TypeParameter
            | SyntaxKind::ExpressionWithTypeArguments
            | SyntaxKind::TypeReference
            | SyntaxKind::ConditionalType
            | SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
            | SyntaxKind::ImportType
            | SyntaxKind::IndexSignature
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::ImportEqualsDeclaration
    )
}

#[cfg(test)]
#[path = "../../tests/declaration_transform_tests.rs"]
mod tests;
