//! Read-only queries over the arena: child enumeration, names, modifiers and
//! the kind predicates used by the factory, the visitor and transforms.

use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags};
use crate::node::*;
use crate::node_arena::NodeArena;
use crate::syntax_kind::SyntaxKind;
use smallvec::SmallVec;

pub type ChildList = SmallVec<[NodeIndex; 8]>;

#[inline]
fn push_node(out: &mut ChildList, index: NodeIndex) {
    if index.is_some() {
        out.push(index);
    }
}

/// Modifier flag for a single modifier kind (`NONE` for non-modifiers).
pub fn modifier_to_flag(kind: SyntaxKind) -> ModifierFlags {
    match kind {
        SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
        SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
        SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
        SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
        SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
        SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
        SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
        SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
        SyntaxKind::ConstKeyword => ModifierFlags::CONST,
        SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
        SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
        SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
        SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
        SyntaxKind::InKeyword => ModifierFlags::IN,
        SyntaxKind::OutKeyword => ModifierFlags::OUT,
        SyntaxKind::Decorator => ModifierFlags::DECORATOR,
        _ => ModifierFlags::empty(),
    }
}

impl NodeArena {
    /// Direct children of a node in source order. Absent children are skipped.
    pub fn children(&self, index: NodeIndex) -> ChildList {
        let mut out = ChildList::new();
        let Some(node) = self.get(index) else {
            return out;
        };
        let push_list = |out: &mut ChildList, list: Option<NodeList>| {
            out.extend(self.opt_list_nodes(list).iter().copied());
        };

        match node.category() {
            NodeCategory::Token | NodeCategory::Identifier | NodeCategory::Literal => {}
            NodeCategory::QualifiedName => {
                if let Some(data) = self.get_qualified_name(node) {
                    push_node(&mut out, data.left);
                    push_node(&mut out, data.right);
                }
            }
            NodeCategory::Expression => {
                if let Some(data) = self.get_expression(node) {
                    push_node(&mut out, data.expression);
                }
            }
            NodeCategory::WrappedType => {
                if let Some(data) = self.get_wrapped_type(node) {
                    push_node(&mut out, data.type_node);
                }
            }
            NodeCategory::TypeParameter => {
                if let Some(data) = self.get_type_parameter(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.constraint);
                    push_node(&mut out, data.default);
                }
            }
            NodeCategory::Parameter => {
                if let Some(data) = self.get_parameter(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.type_annotation);
                    push_node(&mut out, data.initializer);
                }
            }
            NodeCategory::Signature => {
                if let Some(data) = self.get_signature(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_list(&mut out, data.type_parameters);
                    push_list(&mut out, data.parameters);
                    push_node(&mut out, data.type_annotation);
                }
            }
            NodeCategory::Function => {
                if let Some(data) = self.get_function(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_list(&mut out, data.type_parameters);
                    push_list(&mut out, Some(data.parameters));
                    push_node(&mut out, data.type_annotation);
                    push_node(&mut out, data.body);
                }
            }
            NodeCategory::PropertyDecl => {
                if let Some(data) = self.get_property_decl(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.type_annotation);
                    push_node(&mut out, data.initializer);
                }
            }
            NodeCategory::Class => {
                if let Some(data) = self.get_class(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_list(&mut out, data.type_parameters);
                    push_list(&mut out, data.heritage_clauses);
                    push_list(&mut out, Some(data.members));
                }
            }
            NodeCategory::TypeAlias => {
                if let Some(data) = self.get_type_alias(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_list(&mut out, data.type_parameters);
                    push_node(&mut out, data.type_node);
                }
            }
            NodeCategory::Enum => {
                if let Some(data) = self.get_enum(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_list(&mut out, Some(data.members));
                }
            }
            NodeCategory::PropertyAssignment => {
                if let Some(data) = self.get_property_assignment(node) {
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.initializer);
                }
            }
            NodeCategory::Module => {
                if let Some(data) = self.get_module(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.body);
                }
            }
            NodeCategory::Block => {
                if let Some(data) = self.get_block(node) {
                    push_list(&mut out, Some(data.statements));
                }
            }
            NodeCategory::Heritage => {
                if let Some(data) = self.get_heritage(node) {
                    push_list(&mut out, Some(data.types));
                }
            }
            NodeCategory::TypeRef => {
                if let Some(data) = self.get_type_ref(node) {
                    push_node(&mut out, data.type_name);
                    push_list(&mut out, data.type_arguments);
                }
            }
            NodeCategory::List => {
                if let Some(data) = self.get_list_data(node) {
                    push_list(&mut out, Some(data.elements));
                }
            }
            NodeCategory::ImportAttributes => {
                if let Some(data) = self.get_import_attributes(node) {
                    push_list(&mut out, Some(data.elements));
                }
            }
            NodeCategory::ConditionalType => {
                if let Some(data) = self.get_conditional_type(node) {
                    push_node(&mut out, data.check_type);
                    push_node(&mut out, data.extends_type);
                    push_node(&mut out, data.true_type);
                    push_node(&mut out, data.false_type);
                }
            }
            NodeCategory::TypeOperator => {
                if let Some(data) = self.get_type_operator(node) {
                    push_node(&mut out, data.type_node);
                }
            }
            NodeCategory::IndexedAccessType => {
                if let Some(data) = self.get_indexed_access_type(node) {
                    push_node(&mut out, data.object_type);
                    push_node(&mut out, data.index_type);
                }
            }
            NodeCategory::MappedType => {
                if let Some(data) = self.get_mapped_type(node) {
                    push_node(&mut out, data.type_parameter);
                    push_node(&mut out, data.name_type);
                    push_node(&mut out, data.type_node);
                    push_list(&mut out, data.members);
                }
            }
            NodeCategory::ImportType => {
                if let Some(data) = self.get_import_type(node) {
                    push_node(&mut out, data.argument);
                    push_node(&mut out, data.attributes);
                    push_node(&mut out, data.qualifier);
                    push_list(&mut out, data.type_arguments);
                }
            }
            NodeCategory::Template => {
                if let Some(data) = self.get_template(node) {
                    push_node(&mut out, data.head);
                    push_list(&mut out, Some(data.spans));
                }
            }
            NodeCategory::TemplateSpan => {
                if let Some(data) = self.get_template_span(node) {
                    push_node(&mut out, data.expression);
                    push_node(&mut out, data.literal);
                }
            }
            NodeCategory::NamedTupleMember => {
                if let Some(data) = self.get_named_tuple_member(node) {
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.type_node);
                }
            }
            NodeCategory::TypePredicate => {
                if let Some(data) = self.get_type_predicate(node) {
                    push_node(&mut out, data.parameter_name);
                    push_node(&mut out, data.type_node);
                }
            }
            NodeCategory::BindingElement => {
                if let Some(data) = self.get_binding_element(node) {
                    push_node(&mut out, data.property_name);
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.initializer);
                }
            }
            NodeCategory::AccessExpr => {
                if let Some(data) = self.get_access_expr(node) {
                    push_node(&mut out, data.expression);
                    push_node(&mut out, data.name_or_argument);
                }
            }
            NodeCategory::CallExpr => {
                if let Some(data) = self.get_call_expr(node) {
                    push_node(&mut out, data.expression);
                    push_list(&mut out, data.type_arguments);
                    push_list(&mut out, data.arguments);
                }
            }
            NodeCategory::TaggedTemplate => {
                if let Some(data) = self.get_tagged_template(node) {
                    push_node(&mut out, data.tag);
                    push_list(&mut out, data.type_arguments);
                    push_node(&mut out, data.template);
                }
            }
            NodeCategory::TypeAssertion => {
                if let Some(data) = self.get_type_assertion(node) {
                    if node.kind == SyntaxKind::TypeAssertionExpression {
                        push_node(&mut out, data.type_node);
                        push_node(&mut out, data.expression);
                    } else {
                        push_node(&mut out, data.expression);
                        push_node(&mut out, data.type_node);
                    }
                }
            }
            NodeCategory::UnaryExpr => {
                if let Some(data) = self.get_unary_expr(node) {
                    push_node(&mut out, data.operand);
                }
            }
            NodeCategory::BinaryExpr => {
                if let Some(data) = self.get_binary_expr(node) {
                    push_node(&mut out, data.left);
                    push_node(&mut out, data.right);
                }
            }
            NodeCategory::ConditionalExpr => {
                if let Some(data) = self.get_conditional_expr(node) {
                    push_node(&mut out, data.condition);
                    push_node(&mut out, data.when_true);
                    push_node(&mut out, data.when_false);
                }
            }
            NodeCategory::Yield => {
                if let Some(data) = self.get_yield(node) {
                    push_node(&mut out, data.expression);
                }
            }
            NodeCategory::MetaProperty => {
                if let Some(data) = self.get_meta_property(node) {
                    push_node(&mut out, data.name);
                }
            }
            NodeCategory::VariableStatement => {
                if let Some(data) = self.get_variable(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.declaration_list);
                }
            }
            NodeCategory::VariableDeclaration => {
                if let Some(data) = self.get_variable_declaration(node) {
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.type_annotation);
                    push_node(&mut out, data.initializer);
                }
            }
            NodeCategory::If => {
                if let Some(data) = self.get_if_statement(node) {
                    push_node(&mut out, data.expression);
                    push_node(&mut out, data.then_statement);
                    push_node(&mut out, data.else_statement);
                }
            }
            NodeCategory::Loop => {
                if let Some(data) = self.get_loop(node) {
                    if node.kind == SyntaxKind::DoStatement {
                        push_node(&mut out, data.statement);
                        push_node(&mut out, data.condition);
                    } else {
                        push_node(&mut out, data.initializer);
                        push_node(&mut out, data.condition);
                        push_node(&mut out, data.incrementor);
                        push_node(&mut out, data.statement);
                    }
                }
            }
            NodeCategory::ForInOf => {
                if let Some(data) = self.get_for_in_of(node) {
                    push_node(&mut out, data.initializer);
                    push_node(&mut out, data.expression);
                    push_node(&mut out, data.statement);
                }
            }
            NodeCategory::Name => {
                if let Some(data) = self.get_name_data(node) {
                    push_node(&mut out, data.name);
                }
            }
            NodeCategory::Labeled => {
                if let Some(data) = self.get_labeled_statement(node) {
                    push_node(&mut out, data.label);
                    push_node(&mut out, data.statement);
                }
            }
            NodeCategory::With => {
                if let Some(data) = self.get_with_statement(node) {
                    push_node(&mut out, data.expression);
                    push_node(&mut out, data.statement);
                }
            }
            NodeCategory::Switch => {
                if let Some(data) = self.get_switch(node) {
                    push_node(&mut out, data.expression);
                    push_node(&mut out, data.case_block);
                }
            }
            NodeCategory::CaseClause => {
                if let Some(data) = self.get_case_clause(node) {
                    push_node(&mut out, data.expression);
                    push_list(&mut out, Some(data.statements));
                }
            }
            NodeCategory::Try => {
                if let Some(data) = self.get_try(node) {
                    push_node(&mut out, data.try_block);
                    push_node(&mut out, data.catch_clause);
                    push_node(&mut out, data.finally_block);
                }
            }
            NodeCategory::CatchClause => {
                if let Some(data) = self.get_catch_clause(node) {
                    push_node(&mut out, data.variable_declaration);
                    push_node(&mut out, data.block);
                }
            }
            NodeCategory::ImportEquals => {
                if let Some(data) = self.get_import_equals(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.module_reference);
                }
            }
            NodeCategory::ImportDecl => {
                if let Some(data) = self.get_import_decl(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.import_clause);
                    push_node(&mut out, data.module_specifier);
                    push_node(&mut out, data.attributes);
                }
            }
            NodeCategory::ImportClause => {
                if let Some(data) = self.get_import_clause(node) {
                    push_node(&mut out, data.name);
                    push_node(&mut out, data.named_bindings);
                }
            }
            NodeCategory::Specifier => {
                if let Some(data) = self.get_specifier(node) {
                    push_node(&mut out, data.property_name);
                    push_node(&mut out, data.name);
                }
            }
            NodeCategory::ExportDecl => {
                if let Some(data) = self.get_export_decl(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.export_clause);
                    push_node(&mut out, data.module_specifier);
                    push_node(&mut out, data.attributes);
                }
            }
            NodeCategory::ExportAssignment => {
                if let Some(data) = self.get_export_assignment(node) {
                    push_list(&mut out, data.modifiers);
                    push_node(&mut out, data.expression);
                }
            }
            NodeCategory::JsxElement => {
                if let Some(data) = self.get_jsx_element(node) {
                    push_node(&mut out, data.opening_element);
                    push_list(&mut out, Some(data.children));
                    push_node(&mut out, data.closing_element);
                }
            }
            NodeCategory::JsxOpening => {
                if let Some(data) = self.get_jsx_opening(node) {
                    push_node(&mut out, data.tag_name);
                    push_list(&mut out, data.type_arguments);
                    push_node(&mut out, data.attributes);
                }
            }
            NodeCategory::JsxExpression => {
                if let Some(data) = self.get_jsx_expression(node) {
                    push_node(&mut out, data.expression);
                }
            }
            NodeCategory::SourceFile => {
                if let Some(data) = self.get_source_file(node) {
                    push_list(&mut out, Some(data.statements));
                    push_node(&mut out, data.end_of_file_token);
                }
            }
            NodeCategory::Bundle => {
                if let Some(data) = self.get_bundle(node) {
                    out.extend(data.source_files.iter().copied());
                }
            }
        }
        out
    }

    // ========================================================================
    // Names and text
    // ========================================================================

    /// Text of an Identifier or PrivateIdentifier.
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_identifier(node).map(|data| data.escaped_text.as_str())
    }

    /// Text of a literal token.
    pub fn literal_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        self.get_literal(node).map(|data| data.text.as_str())
    }

    /// Text of an identifier, private identifier or string/numeric literal.
    pub fn name_text(&self, index: NodeIndex) -> Option<&str> {
        self.identifier_text(index)
            .or_else(|| self.literal_text(index))
    }

    /// Name of a named declaration (`NONE` when unnamed or not a declaration).
    pub fn name_of_declaration(&self, index: NodeIndex) -> NodeIndex {
        let Some(node) = self.get(index) else {
            return NodeIndex::NONE;
        };
        let name = match node.category() {
            NodeCategory::TypeParameter => self.get_type_parameter(node).map(|d| d.name),
            NodeCategory::Parameter => self.get_parameter(node).map(|d| d.name),
            NodeCategory::Signature => self.get_signature(node).map(|d| d.name),
            NodeCategory::Function => self.get_function(node).map(|d| d.name),
            NodeCategory::PropertyDecl => self.get_property_decl(node).map(|d| d.name),
            NodeCategory::Class => self.get_class(node).map(|d| d.name),
            NodeCategory::TypeAlias => self.get_type_alias(node).map(|d| d.name),
            NodeCategory::Enum => self.get_enum(node).map(|d| d.name),
            NodeCategory::PropertyAssignment => self.get_property_assignment(node).map(|d| d.name),
            NodeCategory::Module => self.get_module(node).map(|d| d.name),
            NodeCategory::BindingElement => self.get_binding_element(node).map(|d| d.name),
            NodeCategory::VariableDeclaration => {
                self.get_variable_declaration(node).map(|d| d.name)
            }
            NodeCategory::ImportEquals => self.get_import_equals(node).map(|d| d.name),
            NodeCategory::ImportClause => self.get_import_clause(node).map(|d| d.name),
            NodeCategory::Specifier => self.get_specifier(node).map(|d| d.name),
            NodeCategory::NamedTupleMember => self.get_named_tuple_member(node).map(|d| d.name),
            NodeCategory::Name if node.kind != SyntaxKind::BreakStatement
                && node.kind != SyntaxKind::ContinueStatement =>
            {
                self.get_name_data(node).map(|d| d.name)
            }
            _ => None,
        };
        name.unwrap_or(NodeIndex::NONE)
    }

    /// Render an entity name, property access chain or simple name as source
    /// text (`A.B.C`, `"mod"`, `#x`, `[computed]`).
    pub fn entity_name_to_string(&self, index: NodeIndex) -> String {
        let Some(node) = self.get(index) else {
            return String::new();
        };
        match node.kind {
            SyntaxKind::Identifier | SyntaxKind::PrivateIdentifier => self
                .identifier_text(index)
                .unwrap_or_default()
                .to_string(),
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => {
                format!("\"{}\"", self.literal_text(index).unwrap_or_default())
            }
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                self.literal_text(index).unwrap_or_default().to_string()
            }
            SyntaxKind::QualifiedName => match self.get_qualified_name(node) {
                Some(data) => format!(
                    "{}.{}",
                    self.entity_name_to_string(data.left),
                    self.entity_name_to_string(data.right)
                ),
                None => String::new(),
            },
            SyntaxKind::PropertyAccessExpression => match self.get_access_expr(node) {
                Some(data) => format!(
                    "{}.{}",
                    self.entity_name_to_string(data.expression),
                    self.entity_name_to_string(data.name_or_argument)
                ),
                None => String::new(),
            },
            SyntaxKind::ComputedPropertyName => match self.get_expression(node) {
                Some(data) => format!("[{}]", self.entity_name_to_string(data.expression)),
                None => String::new(),
            },
            SyntaxKind::ThisKeyword => "this".to_string(),
            SyntaxKind::SuperKeyword => "super".to_string(),
            SyntaxKind::NullKeyword => "null".to_string(),
            _ => String::new(),
        }
    }

    /// Display name of a declaration for diagnostics.
    pub fn declaration_name_to_string(&self, declaration: NodeIndex) -> String {
        let name = self.name_of_declaration(declaration);
        if name.is_none() {
            if self.is_kind(declaration, SyntaxKind::ExportAssignment)
                || self.has_syntactic_modifier(declaration, ModifierFlags::DEFAULT)
            {
                return "default".to_string();
            }
            return "(Missing)".to_string();
        }
        self.entity_name_to_string(name)
    }

    // ========================================================================
    // Modifiers
    // ========================================================================

    /// Syntactic modifier list of a node, if its kind carries one.
    pub fn modifiers_of(&self, index: NodeIndex) -> Option<NodeList> {
        let node = self.get(index)?;
        match node.category() {
            NodeCategory::TypeParameter => self.get_type_parameter(node)?.modifiers,
            NodeCategory::Parameter => self.get_parameter(node)?.modifiers,
            NodeCategory::Signature => self.get_signature(node)?.modifiers,
            NodeCategory::Function => self.get_function(node)?.modifiers,
            NodeCategory::PropertyDecl => self.get_property_decl(node)?.modifiers,
            NodeCategory::Class => self.get_class(node)?.modifiers,
            NodeCategory::TypeAlias => self.get_type_alias(node)?.modifiers,
            NodeCategory::Enum => self.get_enum(node)?.modifiers,
            NodeCategory::Module => self.get_module(node)?.modifiers,
            NodeCategory::VariableStatement => self.get_variable(node)?.modifiers,
            NodeCategory::ImportEquals => self.get_import_equals(node)?.modifiers,
            NodeCategory::ImportDecl => self.get_import_decl(node)?.modifiers,
            NodeCategory::ExportDecl => self.get_export_decl(node)?.modifiers,
            NodeCategory::ExportAssignment => self.get_export_assignment(node)?.modifiers,
            _ => None,
        }
    }

    /// Union of the flags of every modifier (and decorator) in a list.
    pub fn modifiers_to_flags(&self, modifiers: Option<NodeList>) -> ModifierFlags {
        self.opt_list_nodes(modifiers)
            .iter()
            .filter_map(|&modifier| self.kind(modifier))
            .fold(ModifierFlags::empty(), |flags, kind| {
                flags | modifier_to_flag(kind)
            })
    }

    #[inline]
    pub fn syntactic_modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        self.modifiers_to_flags(self.modifiers_of(index))
    }

    #[inline]
    pub fn has_syntactic_modifier(&self, index: NodeIndex, flags: ModifierFlags) -> bool {
        self.syntactic_modifier_flags(index).intersects(flags)
    }

    /// Modifier flags including those inherited by variable declarations and
    /// binding elements from their enclosing variable statement.
    pub fn combined_modifier_flags(&self, index: NodeIndex) -> ModifierFlags {
        let mut current = index;
        while let Some(kind) = self.kind(current) {
            match kind {
                SyntaxKind::BindingElement
                | SyntaxKind::ObjectBindingPattern
                | SyntaxKind::ArrayBindingPattern
                | SyntaxKind::VariableDeclaration
                | SyntaxKind::VariableDeclarationList => current = self.parent(current),
                _ => break,
            }
        }
        let mut flags = self.syntactic_modifier_flags(index);
        if current != index {
            flags |= self.syntactic_modifier_flags(current);
        }
        flags
    }

    /// `let`/`const`/`using` flags of a variable declaration list.
    pub fn combined_node_flags(&self, index: NodeIndex) -> NodeFlags {
        let mut current = index;
        let mut flags = NodeFlags::empty();
        while let Some(node) = self.get(current) {
            flags |= node.flags;
            match node.kind {
                SyntaxKind::BindingElement
                | SyntaxKind::ObjectBindingPattern
                | SyntaxKind::ArrayBindingPattern
                | SyntaxKind::VariableDeclaration => current = self.parent(current),
                _ => break,
            }
        }
        flags
    }

    // ========================================================================
    // Kind predicates
    // ========================================================================

    #[inline]
    pub fn is_identifier(&self, index: NodeIndex) -> bool {
        self.is_kind(index, SyntaxKind::Identifier)
    }

    #[inline]
    pub fn is_private_identifier(&self, index: NodeIndex) -> bool {
        self.is_kind(index, SyntaxKind::PrivateIdentifier)
    }

    #[inline]
    pub fn is_string_literal(&self, index: NodeIndex) -> bool {
        self.is_kind(index, SyntaxKind::StringLiteral)
    }

    #[inline]
    pub fn is_string_literal_like(&self, index: NodeIndex) -> bool {
        matches!(
            self.kind(index),
            Some(SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral)
        )
    }

    #[inline]
    pub fn is_binding_pattern(&self, index: NodeIndex) -> bool {
        matches!(
            self.kind(index),
            Some(SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern)
        )
    }

    /// Identifier or qualified name.
    #[inline]
    pub fn is_entity_name(&self, index: NodeIndex) -> bool {
        matches!(
            self.kind(index),
            Some(SyntaxKind::Identifier | SyntaxKind::QualifiedName)
        )
    }

    /// Identifier, or property access chain of identifiers rooted at one.
    pub fn is_entity_name_expression(&self, index: NodeIndex) -> bool {
        let Some(node) = self.get(index) else {
            return false;
        };
        match node.kind {
            SyntaxKind::Identifier => true,
            SyntaxKind::PropertyAccessExpression => self.get_access_expr(node).is_some_and(|d| {
                self.is_identifier(d.name_or_argument)
                    && self.is_entity_name_expression(d.expression)
            }),
            _ => false,
        }
    }

    /// Expression statements, declarations and other statement kinds.
    pub fn is_statement(&self, index: NodeIndex) -> bool {
        let Some(kind) = self.kind(index) else {
            return false;
        };
        matches!(
            kind,
            SyntaxKind::Block
                | SyntaxKind::EmptyStatement
                | SyntaxKind::VariableStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForInStatement
                | SyntaxKind::ForOfStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::WithStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::ThrowStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::DebuggerStatement
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::TypeAliasDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::ImportEqualsDeclaration
                | SyntaxKind::ImportDeclaration
                | SyntaxKind::ExportDeclaration
                | SyntaxKind::ExportAssignment
                | SyntaxKind::NamespaceExportDeclaration
                | SyntaxKind::NotEmittedStatement
        )
    }

    /// Function-like declarations and signatures.
    pub fn is_function_like(&self, index: NodeIndex) -> bool {
        matches!(
            self.get(index).map(Node::category),
            Some(NodeCategory::Function)
        ) || matches!(
            self.kind(index),
            Some(
                SyntaxKind::MethodSignature
                    | SyntaxKind::CallSignature
                    | SyntaxKind::ConstructSignature
                    | SyntaxKind::IndexSignature
                    | SyntaxKind::FunctionType
                    | SyntaxKind::ConstructorType
            )
        )
    }

    /// Declares a type (class, interface, alias, enum, type parameter).
    pub fn is_type_declaration(&self, index: NodeIndex) -> bool {
        matches!(
            self.kind(index),
            Some(
                SyntaxKind::TypeParameter
                    | SyntaxKind::ClassDeclaration
                    | SyntaxKind::InterfaceDeclaration
                    | SyntaxKind::TypeAliasDeclaration
                    | SyntaxKind::EnumDeclaration
            )
        )
    }

    /// `declare module "name"` (as opposed to a namespace).
    pub fn is_ambient_module(&self, index: NodeIndex) -> bool {
        let Some(node) = self.get(index) else {
            return false;
        };
        node.kind == SyntaxKind::ModuleDeclaration
            && (self
                .get_module(node)
                .is_some_and(|data| self.is_string_literal(data.name))
                || node.flags.contains(NodeFlags::GLOBAL_AUGMENTATION))
    }

    #[inline]
    pub fn is_global_scope_augmentation(&self, index: NodeIndex) -> bool {
        self.get(index)
            .is_some_and(|node| node.flags.contains(NodeFlags::GLOBAL_AUGMENTATION))
    }

    /// A string-named module declared inside an external module.
    pub fn is_external_module_augmentation(&self, index: NodeIndex) -> bool {
        if !self.is_ambient_module(index) || self.is_global_scope_augmentation(index) {
            return false;
        }
        let parent = self.parent(index);
        self.is_kind(parent, SyntaxKind::SourceFile) && self.is_external_module(parent)
    }

    /// Whether a source file is an external module (has imports/exports).
    pub fn is_external_module(&self, source_file: NodeIndex) -> bool {
        self.node_data::<SourceFileData>(source_file)
            .is_some_and(|data| data.is_external_module)
    }

    pub fn is_declaration_file(&self, source_file: NodeIndex) -> bool {
        self.node_data::<SourceFileData>(source_file)
            .is_some_and(|data| data.is_declaration_file)
    }

    /// Nearest enclosing source file.
    pub fn source_file_of(&self, index: NodeIndex) -> NodeIndex {
        let mut current = index;
        while let Some(kind) = self.kind(current) {
            if kind == SyntaxKind::SourceFile {
                return current;
            }
            current = self.parent(current);
        }
        NodeIndex::NONE
    }
}
