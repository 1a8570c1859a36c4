//! Accessibility diagnostics: which message to report when an emitted type or
//! name refers to something the declaration file cannot name.
//!
//! A context is captured when the transform enters a declaration (the arena
//! is readable then); it is consulted later from inside the resolver's type
//! serialization, where only the context itself is at hand.

use tsz_ast::{ModifierFlags, NodeArena, NodeIndex, SyntaxKind, TextRange};
use tsz_common::Diagnostic;
use tsz_common::diagnostics::{DiagnosticMessage, diagnostic_messages as msg};

use crate::resolver::{SymbolAccessibility, SymbolAccessibilityResult};

/// Message variants for one declaration position, chosen by how the
/// offending symbol failed to resolve.
#[derive(Clone, Copy, Debug)]
pub struct MessageSet {
    /// Symbol from an external module that has no importable name.
    pub cannot_be_named: Option<&'static DiagnosticMessage>,
    /// Symbol exported from a module that is not itself visible.
    pub private_module: Option<&'static DiagnosticMessage>,
    pub private_name: &'static DiagnosticMessage,
}

impl MessageSet {
    const fn all(
        cannot_be_named: &'static DiagnosticMessage,
        private_module: &'static DiagnosticMessage,
        private_name: &'static DiagnosticMessage,
    ) -> Self {
        MessageSet {
            cannot_be_named: Some(cannot_be_named),
            private_module: Some(private_module),
            private_name,
        }
    }

    const fn module_or_name(
        private_module: &'static DiagnosticMessage,
        private_name: &'static DiagnosticMessage,
    ) -> Self {
        MessageSet {
            cannot_be_named: None,
            private_module: Some(private_module),
            private_name,
        }
    }

    const fn name_only(private_name: &'static DiagnosticMessage) -> Self {
        MessageSet {
            cannot_be_named: None,
            private_module: None,
            private_name,
        }
    }

    fn select(&self, result: &SymbolAccessibilityResult) -> &'static DiagnosticMessage {
        if result.error_module_name.is_some() {
            if result.accessibility == SymbolAccessibility::CannotBeNamed {
                if let Some(message) = self.cannot_be_named {
                    return message;
                }
            }
            if let Some(message) = self.private_module {
                return message;
            }
        }
        self.private_name
    }
}

/// A diagnostic whose location is still a node; spans are resolved against
/// the arena once the resolver call that produced it has returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingDiagnostic {
    pub node: NodeIndex,
    pub message: &'static DiagnosticMessage,
    pub args: Vec<String>,
}

impl PendingDiagnostic {
    pub fn new(node: NodeIndex, message: &'static DiagnosticMessage, args: Vec<String>) -> Self {
        PendingDiagnostic { node, message, args }
    }

    pub fn resolve(&self, arena: &NodeArena, file: &str) -> Diagnostic {
        let (start, length) = match arena.get(self.node) {
            Some(node) if node.pos <= node.end && node.end != TextRange::NO_POS => {
                (node.pos, node.end - node.pos)
            }
            _ => (0, 0),
        };
        let args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        Diagnostic::from_message(file.to_string(), start, length, self.message, &args)
    }
}

/// Where an accessibility failure gets reported and with which message.
#[derive(Clone, Debug)]
pub struct AccessibilityDiagnosticContext {
    pub messages: MessageSet,
    pub error_node: NodeIndex,
    /// Declaration name placed before the symbol name, for messages that
    /// mention the declaration.
    pub type_name: Option<String>,
}

impl AccessibilityDiagnosticContext {
    fn named(messages: MessageSet, error_node: NodeIndex, type_name: String) -> Self {
        AccessibilityDiagnosticContext {
            messages,
            error_node,
            type_name: Some(type_name),
        }
    }

    fn unnamed(messages: MessageSet, error_node: NodeIndex) -> Self {
        AccessibilityDiagnosticContext {
            messages,
            error_node,
            type_name: None,
        }
    }

    pub fn diagnostic_for(&self, result: &SymbolAccessibilityResult) -> PendingDiagnostic {
        let message = self.messages.select(result);
        let mut args = Vec::with_capacity(3);
        if let Some(name) = &self.type_name {
            args.push(name.clone());
        }
        args.push(result.error_symbol_name.clone().unwrap_or_default());
        if let Some(module) = &result.error_module_name {
            args.push(module.clone());
        }
        let node = if result.error_node.is_some() {
            result.error_node
        } else {
            self.error_node
        };
        PendingDiagnostic::new(node, message, args)
    }

    /// File-level fallback used when no declaration context is active.
    pub fn for_file(source_file: NodeIndex) -> Self {
        AccessibilityDiagnosticContext::unnamed(
            MessageSet::module_or_name(
                &msg::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0_FROM_MODULE_1,
                &msg::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_0,
            ),
            source_file,
        )
    }

    /// `export default <expression>` hoisted into `_default`.
    pub fn for_default_export(export_assignment: NodeIndex) -> Self {
        AccessibilityDiagnosticContext::unnamed(
            MessageSet::name_only(&msg::DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME_0),
            export_assignment,
        )
    }

    /// Non-entity `extends` expression hoisted into `<Name>_base`.
    pub fn for_hoisted_extends(arena: &NodeArena, class: NodeIndex, clause_type: NodeIndex) -> Self {
        AccessibilityDiagnosticContext::named(
            MessageSet::name_only(&msg::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1),
            clause_type,
            arena.declaration_name_to_string(class),
        )
    }

    /// Context for a node the transform can report on, `None` for nodes that
    /// never produce accessibility diagnostics.
    pub fn for_node(arena: &NodeArena, node: NodeIndex) -> Option<Self> {
        use SyntaxKind as K;
        let kind = arena.kind(node)?;
        match kind {
            K::VariableDeclaration
            | K::BindingElement
            | K::PropertyDeclaration
            | K::PropertySignature
            | K::PropertyAccessExpression
            | K::ElementAccessExpression
            | K::BinaryExpression => variable_like(arena, node, kind),
            K::GetAccessor | K::SetAccessor => Some(accessor(arena, node, kind)),
            K::ConstructSignature
            | K::CallSignature
            | K::MethodDeclaration
            | K::MethodSignature
            | K::FunctionDeclaration
            | K::IndexSignature => Some(return_type(arena, node, kind)),
            K::Parameter => parameter(arena, node),
            K::TypeParameter => type_parameter(arena, node),
            K::ExpressionWithTypeArguments => heritage_type(arena, node),
            K::ImportEqualsDeclaration => Some(AccessibilityDiagnosticContext::named(
                MessageSet::name_only(&msg::IMPORT_DECLARATION_0_IS_USING_PRIVATE_NAME_1),
                node,
                arena.declaration_name_to_string(node),
            )),
            K::TypeAliasDeclaration => Some(AccessibilityDiagnosticContext::named(
                MessageSet::module_or_name(
                    &msg::EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1_FROM_MODULE_2,
                    &msg::EXPORTED_TYPE_ALIAS_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
                ),
                arena.node_data::<tsz_ast::node::TypeAliasData>(node)
                    .map_or(node, |data| data.type_node),
                arena.declaration_name_to_string(node),
            )),
            _ => None,
        }
    }

    /// Context for the late-bound computed name of a member, reported at
    /// the name.
    pub fn for_node_name(arena: &NodeArena, node: NodeIndex) -> Option<Self> {
        use SyntaxKind as K;
        let kind = arena.kind(node)?;
        let name = arena.name_of_declaration(node);
        let is_static = arena.has_syntactic_modifier(node, ModifierFlags::STATIC);
        let in_class = is_class_like(arena, arena.parent(node));
        let messages = match kind {
            K::PropertyDeclaration | K::PropertySignature | K::GetAccessor | K::SetAccessor => {
                property_messages(is_static, in_class)
            }
            K::MethodDeclaration | K::MethodSignature => {
                if is_static {
                    MessageSet::all(
                        &msg::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
                        &msg::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
                        &msg::PUBLIC_STATIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
                    )
                } else if in_class {
                    MessageSet::all(
                        &msg::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
                        &msg::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
                        &msg::PUBLIC_METHOD_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
                    )
                } else {
                    MessageSet::module_or_name(
                        &msg::METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
                        &msg::METHOD_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
                    )
                }
            }
            _ => return AccessibilityDiagnosticContext::for_node(arena, node),
        };
        Some(AccessibilityDiagnosticContext::named(
            messages,
            name,
            arena.declaration_name_to_string(node),
        ))
    }
}

fn is_class_like(arena: &NodeArena, node: NodeIndex) -> bool {
    matches!(
        arena.kind(node),
        Some(SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression)
    )
}

fn property_messages(is_static: bool, in_class: bool) -> MessageSet {
    if is_static {
        MessageSet::all(
            &msg::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PUBLIC_STATIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        )
    } else if in_class {
        MessageSet::all(
            &msg::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PUBLIC_PROPERTY_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        )
    } else {
        MessageSet::module_or_name(
            &msg::PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PROPERTY_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        )
    }
}

fn variable_like(
    arena: &NodeArena,
    node: NodeIndex,
    kind: SyntaxKind,
) -> Option<AccessibilityDiagnosticContext> {
    let messages = match kind {
        SyntaxKind::VariableDeclaration | SyntaxKind::BindingElement => MessageSet::all(
            &msg::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        _ => {
            let is_static = arena.has_syntactic_modifier(node, ModifierFlags::STATIC);
            let parent = arena.parent(node);
            // Expando assignments (`f.x = ...`) read like static members.
            let in_class = is_class_like(arena, parent)
                || !matches!(
                    kind,
                    SyntaxKind::PropertyDeclaration | SyntaxKind::PropertySignature
                );
            property_messages(is_static, in_class)
        }
    };
    let name = arena.name_of_declaration(node);
    Some(AccessibilityDiagnosticContext::named(
        messages,
        if name.is_some() { name } else { node },
        arena.declaration_name_to_string(node),
    ))
}

fn accessor(arena: &NodeArena, node: NodeIndex, kind: SyntaxKind) -> AccessibilityDiagnosticContext {
    let is_static = arena.has_syntactic_modifier(node, ModifierFlags::STATIC);
    let messages = match (kind, is_static) {
        (SyntaxKind::SetAccessor, true) => MessageSet::module_or_name(
            &msg::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        (SyntaxKind::SetAccessor, false) => MessageSet::module_or_name(
            &msg::PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_TYPE_OF_PUBLIC_SETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        (_, true) => MessageSet::all(
            &msg::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        (_, false) => MessageSet::all(
            &msg::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::RETURN_TYPE_OF_PUBLIC_GETTER_0_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
    };
    AccessibilityDiagnosticContext::named(
        messages,
        arena.name_of_declaration(node),
        arena.declaration_name_to_string(node),
    )
}

fn return_type(
    arena: &NodeArena,
    node: NodeIndex,
    kind: SyntaxKind,
) -> AccessibilityDiagnosticContext {
    use SyntaxKind as K;
    let is_static = arena.has_syntactic_modifier(node, ModifierFlags::STATIC);
    let messages = match kind {
        K::ConstructSignature => MessageSet::module_or_name(
            &msg::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
            &msg::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        ),
        K::CallSignature => MessageSet::module_or_name(
            &msg::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
            &msg::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        ),
        K::IndexSignature => MessageSet::module_or_name(
            &msg::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
            &msg::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        ),
        K::MethodDeclaration | K::MethodSignature if is_static => MessageSet::all(
            &msg::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
            &msg::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
            &msg::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
        ),
        K::MethodDeclaration | K::MethodSignature if is_class_like(arena, arena.parent(node)) => {
            MessageSet::all(
                &msg::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
                &msg::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
                &msg::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_0,
            )
        }
        K::MethodDeclaration | K::MethodSignature => MessageSet::module_or_name(
            &msg::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
            &msg::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_0,
        ),
        _ => MessageSet::all(
            &msg::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_EXTERNAL_MODULE_1_BUT_CANNOT_BE_NAMED,
            &msg::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_0_FROM_PRIVATE_MODULE_1,
            &msg::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_0,
        ),
    };
    let name = arena.name_of_declaration(node);
    AccessibilityDiagnosticContext::unnamed(messages, if name.is_some() { name } else { node })
}

fn parameter(arena: &NodeArena, node: NodeIndex) -> Option<AccessibilityDiagnosticContext> {
    use SyntaxKind as K;
    let container = arena.parent(node);
    let container_kind = arena.kind(container)?;
    let is_static = arena.has_syntactic_modifier(container, ModifierFlags::STATIC);
    let messages = match container_kind {
        K::Constructor => MessageSet::all(
            &msg::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        K::ConstructSignature | K::ConstructorType => MessageSet::module_or_name(
            &msg::PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        K::CallSignature => MessageSet::module_or_name(
            &msg::PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        K::IndexSignature => MessageSet::module_or_name(
            &msg::PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        K::MethodDeclaration | K::MethodSignature if is_static => MessageSet::all(
            &msg::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        K::MethodDeclaration | K::MethodSignature
            if is_class_like(arena, arena.parent(container)) =>
        {
            MessageSet::all(
                &msg::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
                &msg::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
                &msg::PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1,
            )
        }
        K::MethodDeclaration | K::MethodSignature => MessageSet::module_or_name(
            &msg::PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
        K::SetAccessor | K::GetAccessor => {
            return Some(accessor(arena, container, K::SetAccessor));
        }
        _ => MessageSet::all(
            &msg::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_EXTERNAL_MODULE_2_BUT_CANNOT_BE_NAMED,
            &msg::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_1_FROM_PRIVATE_MODULE_2,
            &msg::PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1,
        ),
    };
    let name = arena.name_of_declaration(node);
    Some(AccessibilityDiagnosticContext::named(
        messages,
        if name.is_some() { name } else { node },
        arena.declaration_name_to_string(node),
    ))
}

fn type_parameter(arena: &NodeArena, node: NodeIndex) -> Option<AccessibilityDiagnosticContext> {
    use SyntaxKind as K;
    let container = arena.parent(node);
    let message: &'static DiagnosticMessage = match arena.kind(container)? {
        K::ClassDeclaration | K::ClassExpression => {
            &msg::TYPE_PARAMETER_0_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::InterfaceDeclaration => {
            &msg::TYPE_PARAMETER_0_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::MappedType => &msg::TYPE_PARAMETER_0_OF_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME_1,
        K::ConstructorType | K::ConstructSignature => {
            &msg::TYPE_PARAMETER_0_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::CallSignature => {
            &msg::TYPE_PARAMETER_0_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::MethodDeclaration | K::MethodSignature
            if arena.has_syntactic_modifier(container, ModifierFlags::STATIC) =>
        {
            &msg::TYPE_PARAMETER_0_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::MethodDeclaration | K::MethodSignature
            if is_class_like(arena, arena.parent(container)) =>
        {
            &msg::TYPE_PARAMETER_0_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::MethodDeclaration | K::MethodSignature => {
            &msg::TYPE_PARAMETER_0_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::FunctionType | K::FunctionDeclaration => {
            &msg::TYPE_PARAMETER_0_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        K::TypeAliasDeclaration => {
            &msg::TYPE_PARAMETER_0_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
        _ => return None,
    };
    Some(AccessibilityDiagnosticContext::named(
        MessageSet::name_only(message),
        node,
        arena.declaration_name_to_string(node),
    ))
}

fn heritage_type(arena: &NodeArena, node: NodeIndex) -> Option<AccessibilityDiagnosticContext> {
    let clause = arena.parent(node);
    let heritage = arena.node_data::<tsz_ast::node::HeritageData>(clause)?;
    let declaration = arena.parent(clause);
    let message: &'static DiagnosticMessage = if is_class_like(arena, declaration) {
        if heritage.token == SyntaxKind::ImplementsKeyword {
            &msg::IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1
        } else {
            &msg::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_0_HAS_OR_IS_USING_PRIVATE_NAME_1
        }
    } else {
        &msg::EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_0_HAS_OR_IS_USING_PRIVATE_NAME_1
    };
    Some(AccessibilityDiagnosticContext::named(
        MessageSet::name_only(message),
        node,
        arena.declaration_name_to_string(declaration),
    ))
}
