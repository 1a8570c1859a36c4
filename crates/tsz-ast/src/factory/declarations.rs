//! Declarations: parameters, class members, functions, classes, interfaces,
//! aliases, enums, modules, imports and exports, object literal members.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags, TransformFlags};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeFactory {
    fn has_modifier(&self, modifiers: Option<NodeList>, flag: ModifierFlags) -> bool {
        self.arena.modifiers_to_flags(modifiers).contains(flag)
    }

    fn disallow_comma(&mut self, expression: NodeIndex) -> NodeIndex {
        if expression.is_none() {
            return expression;
        }
        let rules = self.parenthesizer;
        rules.parenthesize_expression_for_disallowed_comma(self, expression)
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    pub fn create_parameter_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        dot_dot_dot_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let initializer = self.disallow_comma(initializer);
        let is_this = self.arena.identifier_text(name) == Some("this");
        let flags = if is_this {
            TransformFlags::CONTAINS_TYPESCRIPT
        } else {
            let mut flags = self.children_flags(modifiers)
                | self.child_flags(name)
                | self.child_flags(type_node)
                | self.child_flags(initializer);
            if question_token || type_node.is_some() {
                flags |= TransformFlags::CONTAINS_TYPESCRIPT;
            }
            if dot_dot_dot_token || initializer.is_some() {
                flags |= TransformFlags::CONTAINS_ES2015;
            }
            if self
                .arena
                .modifiers_to_flags(modifiers)
                .intersects(ModifierFlags::PARAMETER_PROPERTY_MODIFIER)
            {
                flags |= TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX;
            }
            flags
        };
        let node = self.alloc(
            SyntaxKind::Parameter,
            ParameterData {
                modifiers,
                dot_dot_dot_token,
                name,
                question_token,
                type_annotation: type_node,
                initializer,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_parameter_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        dot_dot_dot_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data: ParameterData = self.data_of(node, &[SyntaxKind::Parameter]);
        if data.modifiers == modifiers
            && data.dot_dot_dot_token == dot_dot_dot_token
            && data.name == name
            && data.question_token == question_token
            && data.type_annotation == type_node
            && data.initializer == initializer
        {
            return node;
        }
        let updated = self.create_parameter_declaration(
            modifiers,
            dot_dot_dot_token,
            name,
            question_token,
            type_node,
            initializer,
        );
        self.update(updated, node)
    }

    // ========================================================================
    // Class members
    // ========================================================================

    pub fn create_property_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
        exclamation_token: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let initializer = self.disallow_comma(initializer);
        let modifier_flags = self.arena.modifiers_to_flags(modifiers);
        let mut flags = self.children_flags(modifiers)
            | self.name_flags(name)
            | self.child_flags(type_node)
            | self.child_flags(initializer)
            | TransformFlags::CONTAINS_CLASS_FIELDS;
        if modifier_flags.contains(ModifierFlags::AMBIENT)
            || question_token
            || exclamation_token
            || type_node.is_some()
        {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let computed = self.arena.is_kind(name, SyntaxKind::ComputedPropertyName);
        if computed || (modifier_flags.contains(ModifierFlags::STATIC) && initializer.is_some()) {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX;
        }
        let node = self.alloc(
            SyntaxKind::PropertyDeclaration,
            PropertyDeclData {
                modifiers,
                name,
                question_token,
                exclamation_token,
                type_annotation: type_node,
                initializer,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_property_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        question_token: bool,
        exclamation_token: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data: PropertyDeclData = self.data_of(node, &[SyntaxKind::PropertyDeclaration]);
        if data.modifiers == modifiers
            && data.name == name
            && data.question_token == question_token
            && data.exclamation_token == exclamation_token
            && data.type_annotation == type_node
            && data.initializer == initializer
        {
            return node;
        }
        let updated = self.create_property_declaration(
            modifiers,
            name,
            question_token,
            exclamation_token,
            type_node,
            initializer,
        );
        self.update(updated, node)
    }

    /// Shared constructor for the body-carrying function kinds declared here.
    fn create_function_like(&mut self, kind: SyntaxKind, data: FunctionData) -> NodeIndex {
        let data = FunctionData {
            modifiers: self.as_node_array(data.modifiers),
            type_parameters: self.as_node_array(data.type_parameters),
            parameters: self.create_node_array(data.parameters, None),
            ..data
        };
        let flags = self.function_like_declaration_flags(kind, &data);
        let node = self.alloc(kind, data);
        self.finish(node, flags)
    }

    fn update_function_like(&mut self, node: NodeIndex, kind: SyntaxKind, data: FunctionData) -> NodeIndex {
        let existing: FunctionData = self.data_of(node, &[kind]);
        if existing == data {
            return node;
        }
        let updated = self.create_function_like(kind, data);
        self.update(updated, node)
    }

    fn function_like_declaration_flags(&mut self, kind: SyntaxKind, data: &FunctionData) -> TransformFlags {
        if kind == SyntaxKind::ClassStaticBlockDeclaration {
            return self.child_flags(data.body) | TransformFlags::CONTAINS_CLASS_FIELDS;
        }
        if data.body.is_none() {
            return TransformFlags::CONTAINS_TYPESCRIPT;
        }
        match kind {
            SyntaxKind::FunctionDeclaration => {
                if self.has_modifier(data.modifiers, ModifierFlags::AMBIENT) {
                    TransformFlags::CONTAINS_TYPESCRIPT
                } else {
                    self.function_like_flags(data)
                        | TransformFlags::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION
                }
            }
            SyntaxKind::MethodDeclaration => {
                let mut flags = self.function_like_flags(data)
                    | self.name_flags(data.name)
                    | TransformFlags::CONTAINS_ES2015;
                if data.question_token {
                    flags |= TransformFlags::CONTAINS_TYPESCRIPT;
                }
                flags
            }
            SyntaxKind::Constructor => {
                self.children_flags(data.modifiers)
                    | self.children_flags(Some(data.parameters))
                    | (self.child_flags(data.body)
                        & !TransformFlags::CONTAINS_POSSIBLE_TOP_LEVEL_AWAIT)
                    | TransformFlags::CONTAINS_ES2015
            }
            _ => self.function_like_flags(data) | self.name_flags(data.name),
        }
    }

    fn function_data(
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> FunctionData {
        FunctionData {
            modifiers,
            asterisk_token,
            name,
            question_token,
            type_parameters,
            parameters,
            type_annotation: type_node,
            body,
        }
    }

    pub fn create_method_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.create_function_like(
            SyntaxKind::MethodDeclaration,
            Self::function_data(
                modifiers,
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
        )
    }

    pub fn update_method_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        question_token: bool,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.update_function_like(
            node,
            SyntaxKind::MethodDeclaration,
            Self::function_data(
                modifiers,
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
        )
    }

    pub fn create_constructor_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        parameters: NodeList,
        body: NodeIndex,
    ) -> NodeIndex {
        self.create_function_like(
            SyntaxKind::Constructor,
            Self::function_data(modifiers, false, NodeIndex::NONE, false, None, parameters, NodeIndex::NONE, body),
        )
    }

    pub fn update_constructor_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        parameters: NodeList,
        body: NodeIndex,
    ) -> NodeIndex {
        self.update_function_like(
            node,
            SyntaxKind::Constructor,
            Self::function_data(modifiers, false, NodeIndex::NONE, false, None, parameters, NodeIndex::NONE, body),
        )
    }

    pub fn create_get_accessor_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.create_function_like(
            SyntaxKind::GetAccessor,
            Self::function_data(modifiers, false, name, false, None, parameters, type_node, body),
        )
    }

    pub fn update_get_accessor_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.update_function_like(
            node,
            SyntaxKind::GetAccessor,
            Self::function_data(modifiers, false, name, false, None, parameters, type_node, body),
        )
    }

    pub fn create_set_accessor_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        parameters: NodeList,
        body: NodeIndex,
    ) -> NodeIndex {
        self.create_function_like(
            SyntaxKind::SetAccessor,
            Self::function_data(modifiers, false, name, false, None, parameters, NodeIndex::NONE, body),
        )
    }

    pub fn update_set_accessor_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        parameters: NodeList,
        body: NodeIndex,
    ) -> NodeIndex {
        self.update_function_like(
            node,
            SyntaxKind::SetAccessor,
            Self::function_data(modifiers, false, name, false, None, parameters, NodeIndex::NONE, body),
        )
    }

    pub fn create_class_static_block_declaration(&mut self, body: NodeIndex) -> NodeIndex {
        let parameters = self.node_list(Vec::new());
        self.create_function_like(
            SyntaxKind::ClassStaticBlockDeclaration,
            Self::function_data(None, false, NodeIndex::NONE, false, None, parameters, NodeIndex::NONE, body),
        )
    }

    pub fn update_class_static_block_declaration(&mut self, node: NodeIndex, body: NodeIndex) -> NodeIndex {
        let data: FunctionData = self.data_of(node, &[SyntaxKind::ClassStaticBlockDeclaration]);
        if data.body == body {
            return node;
        }
        let updated = self.create_class_static_block_declaration(body);
        self.update(updated, node)
    }

    pub fn create_semicolon_class_element(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::SemicolonClassElement);
        self.finish(node, TransformFlags::CONTAINS_ES2015)
    }

    // ========================================================================
    // Functions and classes
    // ========================================================================

    pub fn create_function_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        asterisk_token: bool,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        parameters: NodeList,
        type_node: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        self.create_function_like(
            SyntaxKind::FunctionDeclaration,
            Self::function_data(
                modifiers,
                asterisk_token,
                name,
                false,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
        )
    }

    pub fn update_function_declaration(
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
        self.update_function_like(
            node,
            SyntaxKind::FunctionDeclaration,
            Self::function_data(
                modifiers,
                asterisk_token,
                name,
                false,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
        )
    }

    fn create_class_like(&mut self, kind: SyntaxKind, data: ClassData) -> NodeIndex {
        let data = ClassData {
            modifiers: self.as_node_array(data.modifiers),
            type_parameters: self.as_node_array(data.type_parameters),
            heritage_clauses: self.as_node_array(data.heritage_clauses),
            members: self.create_node_array(data.members, None),
            ..data
        };
        let flags = if kind == SyntaxKind::InterfaceDeclaration
            || (kind == SyntaxKind::ClassDeclaration
                && self.has_modifier(data.modifiers, ModifierFlags::AMBIENT))
        {
            TransformFlags::CONTAINS_TYPESCRIPT
        } else {
            let mut flags = self.children_flags(data.modifiers)
                | self.identifier_name_flags(data.name)
                | self.children_flags(data.type_parameters)
                | self.children_flags(data.heritage_clauses)
                | self.children_flags(Some(data.members))
                | TransformFlags::CONTAINS_ES2015;
            if data.type_parameters.is_some()
                || flags.contains(TransformFlags::CONTAINS_TYPESCRIPT_CLASS_SYNTAX)
            {
                flags |= TransformFlags::CONTAINS_TYPESCRIPT;
            }
            flags
        };
        let node = self.alloc(kind, data);
        self.finish(node, flags)
    }

    fn update_class_like(&mut self, node: NodeIndex, kind: SyntaxKind, data: ClassData) -> NodeIndex {
        let existing: ClassData = self.data_of(node, &[kind]);
        if existing == data {
            return node;
        }
        let updated = self.create_class_like(kind, data);
        self.update(updated, node)
    }

    fn class_data(
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> ClassData {
        ClassData {
            modifiers,
            name,
            type_parameters,
            heritage_clauses,
            members,
        }
    }

    pub fn create_class_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> NodeIndex {
        self.create_class_like(
            SyntaxKind::ClassDeclaration,
            Self::class_data(modifiers, name, type_parameters, heritage_clauses, members),
        )
    }

    pub fn update_class_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> NodeIndex {
        self.update_class_like(
            node,
            SyntaxKind::ClassDeclaration,
            Self::class_data(modifiers, name, type_parameters, heritage_clauses, members),
        )
    }

    pub fn create_class_expression(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> NodeIndex {
        self.create_class_like(
            SyntaxKind::ClassExpression,
            Self::class_data(modifiers, name, type_parameters, heritage_clauses, members),
        )
    }

    pub fn update_class_expression(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> NodeIndex {
        self.update_class_like(
            node,
            SyntaxKind::ClassExpression,
            Self::class_data(modifiers, name, type_parameters, heritage_clauses, members),
        )
    }

    pub fn create_interface_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> NodeIndex {
        self.create_class_like(
            SyntaxKind::InterfaceDeclaration,
            Self::class_data(modifiers, name, type_parameters, heritage_clauses, members),
        )
    }

    pub fn update_interface_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        heritage_clauses: Option<NodeList>,
        members: NodeList,
    ) -> NodeIndex {
        self.update_class_like(
            node,
            SyntaxKind::InterfaceDeclaration,
            Self::class_data(modifiers, name, type_parameters, heritage_clauses, members),
        )
    }

    /// `extends` clauses are ES2015 syntax; `implements` is TypeScript-only.
    #[track_caller]
    pub fn create_heritage_clause(&mut self, token: SyntaxKind, types: NodeList) -> NodeIndex {
        let types = self.create_node_array(types, None);
        let flags = self.children_flags(Some(types))
            | match token {
                SyntaxKind::ExtendsKeyword => TransformFlags::CONTAINS_ES2015,
                SyntaxKind::ImplementsKeyword => TransformFlags::CONTAINS_TYPESCRIPT,
                other => panic!("invalid heritage clause token {other:?}"),
            };
        let node = self.alloc(SyntaxKind::HeritageClause, HeritageData { token, types });
        self.finish(node, flags)
    }

    pub fn update_heritage_clause(&mut self, node: NodeIndex, types: NodeList) -> NodeIndex {
        let data: HeritageData = self.data_of(node, &[SyntaxKind::HeritageClause]);
        if data.types == types {
            return node;
        }
        let updated = self.create_heritage_clause(data.token, types);
        self.update(updated, node)
    }

    // ========================================================================
    // Type aliases, enums and modules
    // ========================================================================

    pub fn create_type_alias_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let type_parameters = self.as_node_array(type_parameters);
        let node = self.alloc(
            SyntaxKind::TypeAliasDeclaration,
            TypeAliasData {
                modifiers,
                name,
                type_parameters,
                type_node,
            },
        );
        self.finish(node, TransformFlags::CONTAINS_TYPESCRIPT)
    }

    pub fn update_type_alias_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        type_parameters: Option<NodeList>,
        type_node: NodeIndex,
    ) -> NodeIndex {
        let data: TypeAliasData = self.data_of(node, &[SyntaxKind::TypeAliasDeclaration]);
        if data.modifiers == modifiers
            && data.name == name
            && data.type_parameters == type_parameters
            && data.type_node == type_node
        {
            return node;
        }
        let updated = self.create_type_alias_declaration(modifiers, name, type_parameters, type_node);
        self.update(updated, node)
    }

    pub fn create_enum_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        members: NodeList,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let members = self.create_node_array(members, None);
        let flags = self.children_flags(modifiers)
            | self.child_flags(name)
            | self.children_flags(Some(members))
            | TransformFlags::CONTAINS_TYPESCRIPT;
        let node = self.alloc(
            SyntaxKind::EnumDeclaration,
            EnumData {
                modifiers,
                name,
                members,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_enum_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        members: NodeList,
    ) -> NodeIndex {
        let data: EnumData = self.data_of(node, &[SyntaxKind::EnumDeclaration]);
        if data.modifiers == modifiers && data.name == name && data.members == members {
            return node;
        }
        let updated = self.create_enum_declaration(modifiers, name, members);
        self.update(updated, node)
    }

    pub fn create_enum_member(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let initializer = self.disallow_comma(initializer);
        self.create_property_assignment_like(
            SyntaxKind::EnumMember,
            name,
            initializer,
            TransformFlags::CONTAINS_TYPESCRIPT,
        )
    }

    pub fn update_enum_member(&mut self, node: NodeIndex, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let data: PropertyAssignmentData = self.data_of(node, &[SyntaxKind::EnumMember]);
        if data.name == name && data.initializer == initializer {
            return node;
        }
        let updated = self.create_enum_member(name, initializer);
        self.update(updated, node)
    }

    /// `namespace`/`module`/`global` declaration. `flags` carries
    /// `NAMESPACE`, `NESTED_NAMESPACE` and `GLOBAL_AUGMENTATION`.
    pub fn create_module_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        body: NodeIndex,
        flags: NodeFlags,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let transform_flags = if self.has_modifier(modifiers, ModifierFlags::AMBIENT) {
            TransformFlags::CONTAINS_TYPESCRIPT
        } else {
            self.children_flags(modifiers)
                | self.child_flags(name)
                | self.child_flags(body)
                | TransformFlags::CONTAINS_TYPESCRIPT
        };
        let node = self.alloc(
            SyntaxKind::ModuleDeclaration,
            ModuleData {
                modifiers,
                name,
                body,
            },
        );
        self.add_node_flags(
            node,
            flags
                & (NodeFlags::NAMESPACE
                    | NodeFlags::NESTED_NAMESPACE
                    | NodeFlags::GLOBAL_AUGMENTATION),
        );
        self.finish(node, transform_flags)
    }

    /// Keeps the declaration's namespace/global flags.
    pub fn update_module_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        name: NodeIndex,
        body: NodeIndex,
    ) -> NodeIndex {
        let data: ModuleData = self.data_of(node, &[SyntaxKind::ModuleDeclaration]);
        if data.modifiers == modifiers && data.name == name && data.body == body {
            return node;
        }
        let flags = self
            .arena
            .get(node)
            .map_or(NodeFlags::empty(), |header| header.flags);
        let updated = self.create_module_declaration(modifiers, name, body, flags);
        self.update(updated, node)
    }

    pub fn create_namespace_export_declaration(&mut self, name: NodeIndex) -> NodeIndex {
        let node = self.alloc(SyntaxKind::NamespaceExportDeclaration, NameData { name });
        self.finish(node, TransformFlags::CONTAINS_TYPESCRIPT)
    }

    pub fn update_namespace_export_declaration(&mut self, node: NodeIndex, name: NodeIndex) -> NodeIndex {
        let data: NameData = self.data_of(node, &[SyntaxKind::NamespaceExportDeclaration]);
        if data.name == name {
            return node;
        }
        let updated = self.create_namespace_export_declaration(name);
        self.update(updated, node)
    }

    // ========================================================================
    // Imports
    // ========================================================================

    pub fn create_import_equals_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        is_type_only: bool,
        name: NodeIndex,
        module_reference: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let mut flags = self.children_flags(modifiers)
            | self.identifier_name_flags(name)
            | self.child_flags(module_reference);
        if is_type_only
            || !self
                .arena
                .is_kind(module_reference, SyntaxKind::ExternalModuleReference)
        {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            SyntaxKind::ImportEqualsDeclaration,
            ImportEqualsData {
                modifiers,
                is_type_only,
                name,
                module_reference,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_import_equals_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        is_type_only: bool,
        name: NodeIndex,
        module_reference: NodeIndex,
    ) -> NodeIndex {
        let data: ImportEqualsData = self.data_of(node, &[SyntaxKind::ImportEqualsDeclaration]);
        if data.modifiers == modifiers
            && data.is_type_only == is_type_only
            && data.name == name
            && data.module_reference == module_reference
        {
            return node;
        }
        let updated = self.create_import_equals_declaration(modifiers, is_type_only, name, module_reference);
        self.update(updated, node)
    }

    pub fn create_import_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        import_clause: NodeIndex,
        module_specifier: NodeIndex,
        attributes: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let flags = self.children_flags(modifiers)
            | self.child_flags(import_clause)
            | self.child_flags(module_specifier)
            | self.child_flags(attributes);
        let node = self.alloc(
            SyntaxKind::ImportDeclaration,
            ImportDeclData {
                modifiers,
                import_clause,
                module_specifier,
                attributes,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_import_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        import_clause: NodeIndex,
        module_specifier: NodeIndex,
        attributes: NodeIndex,
    ) -> NodeIndex {
        let data: ImportDeclData = self.data_of(node, &[SyntaxKind::ImportDeclaration]);
        if data.modifiers == modifiers
            && data.import_clause == import_clause
            && data.module_specifier == module_specifier
            && data.attributes == attributes
        {
            return node;
        }
        let updated = self.create_import_declaration(modifiers, import_clause, module_specifier, attributes);
        self.update(updated, node)
    }

    pub fn create_import_clause(
        &mut self,
        is_type_only: bool,
        name: NodeIndex,
        named_bindings: NodeIndex,
    ) -> NodeIndex {
        let flags = if is_type_only {
            TransformFlags::CONTAINS_TYPESCRIPT
        } else {
            self.child_flags(name) | self.child_flags(named_bindings)
        };
        let node = self.alloc(
            SyntaxKind::ImportClause,
            ImportClauseData {
                is_type_only,
                name,
                named_bindings,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_import_clause(
        &mut self,
        node: NodeIndex,
        is_type_only: bool,
        name: NodeIndex,
        named_bindings: NodeIndex,
    ) -> NodeIndex {
        let data: ImportClauseData = self.data_of(node, &[SyntaxKind::ImportClause]);
        if data.is_type_only == is_type_only && data.name == name && data.named_bindings == named_bindings {
            return node;
        }
        let updated = self.create_import_clause(is_type_only, name, named_bindings);
        self.update(updated, node)
    }

    /// `with { ... }` (or the legacy `assert { ... }`) clause.
    pub fn create_import_attributes(
        &mut self,
        token: SyntaxKind,
        elements: NodeList,
        multi_line: bool,
    ) -> NodeIndex {
        let elements = self.create_node_array(elements, None);
        let flags = self.children_flags(Some(elements)) | TransformFlags::CONTAINS_ESNEXT;
        let node = self.alloc(
            SyntaxKind::ImportAttributes,
            ImportAttributesData {
                token,
                elements,
                multi_line,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_import_attributes(&mut self, node: NodeIndex, elements: NodeList, multi_line: bool) -> NodeIndex {
        let data: ImportAttributesData = self.data_of(node, &[SyntaxKind::ImportAttributes]);
        if data.elements == elements && data.multi_line == multi_line {
            return node;
        }
        let updated = self.create_import_attributes(data.token, elements, multi_line);
        self.update(updated, node)
    }

    pub fn create_import_attribute(&mut self, name: NodeIndex, value: NodeIndex) -> NodeIndex {
        self.create_property_assignment_like(
            SyntaxKind::ImportAttribute,
            name,
            value,
            TransformFlags::CONTAINS_ESNEXT,
        )
    }

    pub fn update_import_attribute(&mut self, node: NodeIndex, name: NodeIndex, value: NodeIndex) -> NodeIndex {
        let data: PropertyAssignmentData = self.data_of(node, &[SyntaxKind::ImportAttribute]);
        if data.name == name && data.initializer == value {
            return node;
        }
        let updated = self.create_import_attribute(name, value);
        self.update(updated, node)
    }

    pub fn create_namespace_import(&mut self, name: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(name);
        let node = self.alloc(SyntaxKind::NamespaceImport, NameData { name });
        self.finish(node, flags)
    }

    pub fn update_namespace_import(&mut self, node: NodeIndex, name: NodeIndex) -> NodeIndex {
        let data: NameData = self.data_of(node, &[SyntaxKind::NamespaceImport]);
        if data.name == name {
            return node;
        }
        let updated = self.create_namespace_import(name);
        self.update(updated, node)
    }

    /// `export * as name from "..."`
    pub fn create_namespace_export(&mut self, name: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(name) | TransformFlags::CONTAINS_ES2020;
        let node = self.alloc(SyntaxKind::NamespaceExport, NameData { name });
        self.finish(node, flags)
    }

    pub fn update_namespace_export(&mut self, node: NodeIndex, name: NodeIndex) -> NodeIndex {
        let data: NameData = self.data_of(node, &[SyntaxKind::NamespaceExport]);
        if data.name == name {
            return node;
        }
        let updated = self.create_namespace_export(name);
        self.update(updated, node)
    }

    fn create_named_bindings(&mut self, kind: SyntaxKind, elements: NodeList) -> NodeIndex {
        let elements = self.create_node_array(elements, None);
        let flags = self.children_flags(Some(elements));
        let node = self.alloc(
            kind,
            ListData {
                elements,
                multi_line: false,
            },
        );
        self.finish(node, flags)
    }

    fn update_named_bindings(&mut self, node: NodeIndex, kind: SyntaxKind, elements: NodeList) -> NodeIndex {
        let data: ListData = self.data_of(node, &[kind]);
        if data.elements == elements {
            return node;
        }
        let updated = self.create_named_bindings(kind, elements);
        self.update(updated, node)
    }

    pub fn create_named_imports(&mut self, elements: NodeList) -> NodeIndex {
        self.create_named_bindings(SyntaxKind::NamedImports, elements)
    }

    pub fn update_named_imports(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        self.update_named_bindings(node, SyntaxKind::NamedImports, elements)
    }

    pub fn create_named_exports(&mut self, elements: NodeList) -> NodeIndex {
        self.create_named_bindings(SyntaxKind::NamedExports, elements)
    }

    pub fn update_named_exports(&mut self, node: NodeIndex, elements: NodeList) -> NodeIndex {
        self.update_named_bindings(node, SyntaxKind::NamedExports, elements)
    }

    fn create_specifier(
        &mut self,
        kind: SyntaxKind,
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        let mut flags = self.child_flags(property_name) | self.child_flags(name);
        if is_type_only {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            kind,
            SpecifierData {
                is_type_only,
                property_name,
                name,
            },
        );
        self.finish(node, flags)
    }

    fn update_specifier(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        let data: SpecifierData = self.data_of(node, &[kind]);
        if data.is_type_only == is_type_only && data.property_name == property_name && data.name == name {
            return node;
        }
        let updated = self.create_specifier(kind, is_type_only, property_name, name);
        self.update(updated, node)
    }

    pub fn create_import_specifier(
        &mut self,
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.create_specifier(SyntaxKind::ImportSpecifier, is_type_only, property_name, name)
    }

    pub fn update_import_specifier(
        &mut self,
        node: NodeIndex,
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.update_specifier(node, SyntaxKind::ImportSpecifier, is_type_only, property_name, name)
    }

    pub fn create_export_specifier(
        &mut self,
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.create_specifier(SyntaxKind::ExportSpecifier, is_type_only, property_name, name)
    }

    pub fn update_export_specifier(
        &mut self,
        node: NodeIndex,
        is_type_only: bool,
        property_name: NodeIndex,
        name: NodeIndex,
    ) -> NodeIndex {
        self.update_specifier(node, SyntaxKind::ExportSpecifier, is_type_only, property_name, name)
    }

    pub fn create_external_module_reference(&mut self, expression: NodeIndex) -> NodeIndex {
        let flags = self.child_flags(expression);
        let node = self.alloc(SyntaxKind::ExternalModuleReference, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_external_module_reference(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::ExternalModuleReference]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_external_module_reference(expression);
        self.update(updated, node)
    }

    // ========================================================================
    // Exports
    // ========================================================================

    /// `export = expression` or `export default expression`.
    pub fn create_export_assignment(
        &mut self,
        modifiers: Option<NodeList>,
        is_export_equals: bool,
        expression: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let rules = self.parenthesizer;
        let expression = if is_export_equals {
            rules.parenthesize_right_side_of_binary(self, SyntaxKind::EqualsToken, NodeIndex::NONE, expression)
        } else {
            rules.parenthesize_expression_of_export_default(self, expression)
        };
        let flags = self.children_flags(modifiers) | self.child_flags(expression);
        let node = self.alloc(
            SyntaxKind::ExportAssignment,
            ExportAssignmentData {
                modifiers,
                is_export_equals,
                expression,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_export_assignment(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: ExportAssignmentData = self.data_of(node, &[SyntaxKind::ExportAssignment]);
        if data.modifiers == modifiers && data.expression == expression {
            return node;
        }
        let updated = self.create_export_assignment(modifiers, data.is_export_equals, expression);
        self.update(updated, node)
    }

    pub fn create_export_declaration(
        &mut self,
        modifiers: Option<NodeList>,
        is_type_only: bool,
        export_clause: NodeIndex,
        module_specifier: NodeIndex,
        attributes: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let mut flags = self.children_flags(modifiers)
            | self.child_flags(export_clause)
            | self.child_flags(module_specifier)
            | self.child_flags(attributes);
        if is_type_only {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            SyntaxKind::ExportDeclaration,
            ExportDeclData {
                modifiers,
                is_type_only,
                export_clause,
                module_specifier,
                attributes,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_export_declaration(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        is_type_only: bool,
        export_clause: NodeIndex,
        module_specifier: NodeIndex,
        attributes: NodeIndex,
    ) -> NodeIndex {
        let data: ExportDeclData = self.data_of(node, &[SyntaxKind::ExportDeclaration]);
        if data.modifiers == modifiers
            && data.is_type_only == is_type_only
            && data.export_clause == export_clause
            && data.module_specifier == module_specifier
            && data.attributes == attributes
        {
            return node;
        }
        let updated = self.create_export_declaration(
            modifiers,
            is_type_only,
            export_clause,
            module_specifier,
            attributes,
        );
        self.update(updated, node)
    }

    /// `export {};`, the marker that turns a file into a module without
    /// exporting anything.
    pub fn create_empty_exports(&mut self) -> NodeIndex {
        let elements = self.node_list(Vec::new());
        let clause = self.create_named_exports(elements);
        self.create_export_declaration(None, false, clause, NodeIndex::NONE, NodeIndex::NONE)
    }

    // ========================================================================
    // Object literal members
    // ========================================================================

    fn create_property_assignment_like(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        initializer: NodeIndex,
        intrinsic: TransformFlags,
    ) -> NodeIndex {
        let name_flags = if kind == SyntaxKind::ShorthandPropertyAssignment {
            self.identifier_name_flags(name)
        } else {
            self.name_flags(name)
        };
        let flags = name_flags | self.child_flags(initializer) | intrinsic;
        let node = self.alloc(kind, PropertyAssignmentData { name, initializer });
        self.finish(node, flags)
    }

    pub fn create_property_assignment(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let initializer = self.disallow_comma(initializer);
        self.create_property_assignment_like(
            SyntaxKind::PropertyAssignment,
            name,
            initializer,
            TransformFlags::empty(),
        )
    }

    pub fn update_property_assignment(
        &mut self,
        node: NodeIndex,
        name: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data: PropertyAssignmentData = self.data_of(node, &[SyntaxKind::PropertyAssignment]);
        if data.name == name && data.initializer == initializer {
            return node;
        }
        let updated = self.create_property_assignment(name, initializer);
        self.update(updated, node)
    }

    /// `{ name }` or `{ name = initializer }` in an assignment pattern.
    pub fn create_shorthand_property_assignment(
        &mut self,
        name: NodeIndex,
        object_assignment_initializer: NodeIndex,
    ) -> NodeIndex {
        let initializer = self.disallow_comma(object_assignment_initializer);
        self.create_property_assignment_like(
            SyntaxKind::ShorthandPropertyAssignment,
            name,
            initializer,
            TransformFlags::CONTAINS_ES2015,
        )
    }

    pub fn update_shorthand_property_assignment(
        &mut self,
        node: NodeIndex,
        name: NodeIndex,
        object_assignment_initializer: NodeIndex,
    ) -> NodeIndex {
        let data: PropertyAssignmentData =
            self.data_of(node, &[SyntaxKind::ShorthandPropertyAssignment]);
        if data.name == name && data.initializer == object_assignment_initializer {
            return node;
        }
        let updated = self.create_shorthand_property_assignment(name, object_assignment_initializer);
        self.update(updated, node)
    }

    pub fn create_spread_assignment(&mut self, expression: NodeIndex) -> NodeIndex {
        let expression = self.disallow_comma(expression);
        let flags = self.child_flags(expression)
            | TransformFlags::CONTAINS_ES2018
            | TransformFlags::CONTAINS_OBJECT_REST_OR_SPREAD;
        let node = self.alloc(SyntaxKind::SpreadAssignment, ExpressionData { expression });
        self.finish(node, flags)
    }

    pub fn update_spread_assignment(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[SyntaxKind::SpreadAssignment]);
        if data.expression == expression {
            return node;
        }
        let updated = self.create_spread_assignment(expression);
        self.update(updated, node)
    }

    // ========================================================================
    // Modifier replacement
    // ========================================================================

    /// Replace the modifier list of any modifier-bearing node, keeping every
    /// other field. Panics for kinds without modifiers.
    #[track_caller]
    pub fn update_modifiers(&mut self, node: NodeIndex, modifiers: Option<NodeList>) -> NodeIndex {
        let Some(kind) = self.kind_of(node) else {
            panic!("cannot update modifiers of a missing node");
        };
        use SyntaxKind as K;
        match kind {
            K::TypeParameter => {
                let d: TypeParameterData = self.data_of(node, &[kind]);
                self.update_type_parameter_declaration(node, modifiers, d.name, d.constraint, d.default)
            }
            K::Parameter => {
                let d: ParameterData = self.data_of(node, &[kind]);
                self.update_parameter_declaration(
                    node,
                    modifiers,
                    d.dot_dot_dot_token,
                    d.name,
                    d.question_token,
                    d.type_annotation,
                    d.initializer,
                )
            }
            K::PropertySignature => {
                let d: SignatureData = self.data_of(node, &[kind]);
                self.update_property_signature(node, modifiers, d.name, d.question_token, d.type_annotation)
            }
            K::MethodSignature => {
                let d: SignatureData = self.data_of(node, &[kind]);
                let parameters = d.parameters.unwrap_or_else(|| self.node_list(Vec::new()));
                self.update_method_signature(
                    node,
                    modifiers,
                    d.name,
                    d.question_token,
                    d.type_parameters,
                    parameters,
                    d.type_annotation,
                )
            }
            K::IndexSignature => {
                let d: SignatureData = self.data_of(node, &[kind]);
                let parameters = d.parameters.unwrap_or_else(|| self.node_list(Vec::new()));
                self.update_index_signature(node, modifiers, parameters, d.type_annotation)
            }
            K::ConstructorType => {
                let d: SignatureData = self.data_of(node, &[kind]);
                let parameters = d.parameters.unwrap_or_else(|| self.node_list(Vec::new()));
                self.update_constructor_type_node(node, modifiers, d.type_parameters, parameters, d.type_annotation)
            }
            K::PropertyDeclaration => {
                let d: PropertyDeclData = self.data_of(node, &[kind]);
                self.update_property_declaration(
                    node,
                    modifiers,
                    d.name,
                    d.question_token,
                    d.exclamation_token,
                    d.type_annotation,
                    d.initializer,
                )
            }
            K::FunctionExpression => {
                let d: FunctionData = self.data_of(node, &[kind]);
                self.update_function_expression(
                    node,
                    modifiers,
                    d.asterisk_token,
                    d.name,
                    d.type_parameters,
                    d.parameters,
                    d.type_annotation,
                    d.body,
                )
            }
            K::ArrowFunction => {
                let d: FunctionData = self.data_of(node, &[kind]);
                self.update_arrow_function(node, modifiers, d.type_parameters, d.parameters, d.type_annotation, d.body)
            }
            K::FunctionDeclaration | K::MethodDeclaration | K::Constructor | K::GetAccessor | K::SetAccessor => {
                let d: FunctionData = self.data_of(node, &[kind]);
                self.update_function_like(node, kind, FunctionData { modifiers, ..d })
            }
            K::ClassDeclaration | K::ClassExpression | K::InterfaceDeclaration => {
                let d: ClassData = self.data_of(node, &[kind]);
                self.update_class_like(node, kind, ClassData { modifiers, ..d })
            }
            K::TypeAliasDeclaration => {
                let d: TypeAliasData = self.data_of(node, &[kind]);
                self.update_type_alias_declaration(node, modifiers, d.name, d.type_parameters, d.type_node)
            }
            K::EnumDeclaration => {
                let d: EnumData = self.data_of(node, &[kind]);
                self.update_enum_declaration(node, modifiers, d.name, d.members)
            }
            K::ModuleDeclaration => {
                let d: ModuleData = self.data_of(node, &[kind]);
                self.update_module_declaration(node, modifiers, d.name, d.body)
            }
            K::VariableStatement => {
                let d: VariableData = self.data_of(node, &[kind]);
                self.update_variable_statement(node, modifiers, d.declaration_list)
            }
            K::ImportEqualsDeclaration => {
                let d: ImportEqualsData = self.data_of(node, &[kind]);
                self.update_import_equals_declaration(node, modifiers, d.is_type_only, d.name, d.module_reference)
            }
            K::ImportDeclaration => {
                let d: ImportDeclData = self.data_of(node, &[kind]);
                self.update_import_declaration(node, modifiers, d.import_clause, d.module_specifier, d.attributes)
            }
            K::ExportAssignment => {
                let d: ExportAssignmentData = self.data_of(node, &[kind]);
                self.update_export_assignment(node, modifiers, d.expression)
            }
            K::ExportDeclaration => {
                let d: ExportDeclData = self.data_of(node, &[kind]);
                self.update_export_declaration(
                    node,
                    modifiers,
                    d.is_type_only,
                    d.export_clause,
                    d.module_specifier,
                    d.attributes,
                )
            }
            other => panic!("{other:?} does not carry modifiers"),
        }
    }

    /// `update_modifiers` with a flag set rendered in canonical order.
    pub fn update_modifier_flags(&mut self, node: NodeIndex, flags: ModifierFlags) -> NodeIndex {
        let modifiers = self.create_modifiers_from_modifier_flags(flags);
        self.update_modifiers(node, modifiers)
    }
}
