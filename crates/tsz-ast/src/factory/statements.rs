//! Statements, variable declarations, source files and bundles.

use super::NodeFactory;
use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags, TransformFlags};
use crate::node::*;
use crate::syntax_kind::SyntaxKind;

impl NodeFactory {
    /// A `NotEmittedStatement` in statement position becomes an empty
    /// statement so that `if (x) <nothing>` still prints.
    fn as_embedded_statement(&mut self, statement: NodeIndex) -> NodeIndex {
        if !self.arena.is_kind(statement, SyntaxKind::NotEmittedStatement) {
            return statement;
        }
        let empty = self.create_empty_statement();
        self.set_original_node(empty, statement);
        self.set_text_range_from(empty, statement)
    }

    pub fn create_block(&mut self, statements: NodeList, multi_line: bool) -> NodeIndex {
        self.create_block_like(SyntaxKind::Block, statements, multi_line)
    }

    pub fn update_block(&mut self, node: NodeIndex, statements: NodeList) -> NodeIndex {
        self.update_block_like(node, SyntaxKind::Block, statements)
    }

    pub fn create_module_block(&mut self, statements: NodeList) -> NodeIndex {
        self.create_block_like(SyntaxKind::ModuleBlock, statements, false)
    }

    pub fn update_module_block(&mut self, node: NodeIndex, statements: NodeList) -> NodeIndex {
        self.update_block_like(node, SyntaxKind::ModuleBlock, statements)
    }

    pub fn create_case_block(&mut self, clauses: NodeList) -> NodeIndex {
        self.create_block_like(SyntaxKind::CaseBlock, clauses, false)
    }

    pub fn update_case_block(&mut self, node: NodeIndex, clauses: NodeList) -> NodeIndex {
        self.update_block_like(node, SyntaxKind::CaseBlock, clauses)
    }

    fn create_block_like(&mut self, kind: SyntaxKind, statements: NodeList, multi_line: bool) -> NodeIndex {
        let statements = self.create_node_array(statements, None);
        let flags = self.children_flags(Some(statements));
        let node = self.alloc(
            kind,
            BlockData {
                statements,
                multi_line,
            },
        );
        self.finish(node, flags)
    }

    fn update_block_like(&mut self, node: NodeIndex, kind: SyntaxKind, statements: NodeList) -> NodeIndex {
        let data: BlockData = self.data_of(node, &[kind]);
        if data.statements == statements {
            return node;
        }
        let updated = self.create_block_like(kind, statements, data.multi_line);
        self.update(updated, node)
    }

    pub fn create_empty_statement(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::EmptyStatement);
        self.finish(node, TransformFlags::empty())
    }

    pub fn create_debugger_statement(&mut self) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::DebuggerStatement);
        self.finish(node, TransformFlags::empty())
    }

    /// Placeholder that prints nothing but keeps `original`'s comments.
    pub fn create_not_emitted_statement(&mut self, original: NodeIndex) -> NodeIndex {
        let node = self.alloc_token(SyntaxKind::NotEmittedStatement);
        if original.is_some() {
            self.set_original_node(node, original);
            self.set_text_range_from(node, original);
        }
        self.finish(node, TransformFlags::empty())
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub fn create_variable_statement(
        &mut self,
        modifiers: Option<NodeList>,
        declaration_list: NodeIndex,
    ) -> NodeIndex {
        let modifiers = self.as_node_array(modifiers);
        let flags = if self
            .arena
            .modifiers_to_flags(modifiers)
            .contains(ModifierFlags::AMBIENT)
        {
            TransformFlags::CONTAINS_TYPESCRIPT
        } else {
            self.children_flags(modifiers) | self.child_flags(declaration_list)
        };
        let node = self.alloc(
            SyntaxKind::VariableStatement,
            VariableData {
                modifiers,
                declaration_list,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_variable_statement(
        &mut self,
        node: NodeIndex,
        modifiers: Option<NodeList>,
        declaration_list: NodeIndex,
    ) -> NodeIndex {
        let data: VariableData = self.data_of(node, &[SyntaxKind::VariableStatement]);
        if data.modifiers == modifiers && data.declaration_list == declaration_list {
            return node;
        }
        let updated = self.create_variable_statement(modifiers, declaration_list);
        self.update(updated, node)
    }

    /// `flags` selects `var` (empty), `let`, `const`, `using` or `await using`.
    pub fn create_variable_declaration_list(
        &mut self,
        declarations: NodeList,
        flags: NodeFlags,
    ) -> NodeIndex {
        let declarations = self.create_node_array(declarations, None);
        let mut transform_flags = self.children_flags(Some(declarations))
            | TransformFlags::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION;
        if flags.intersects(NodeFlags::BLOCK_SCOPED) {
            transform_flags |=
                TransformFlags::CONTAINS_ES2015 | TransformFlags::CONTAINS_BLOCK_SCOPED_BINDING;
        }
        if flags.contains(NodeFlags::USING) {
            transform_flags |= TransformFlags::CONTAINS_ESNEXT;
        }
        let node = self.alloc(
            SyntaxKind::VariableDeclarationList,
            ListData {
                elements: declarations,
                multi_line: false,
            },
        );
        self.add_node_flags(node, flags & NodeFlags::BLOCK_SCOPED);
        self.finish(node, transform_flags)
    }

    pub fn update_variable_declaration_list(
        &mut self,
        node: NodeIndex,
        declarations: NodeList,
    ) -> NodeIndex {
        let data: ListData = self.data_of(node, &[SyntaxKind::VariableDeclarationList]);
        if data.elements == declarations {
            return node;
        }
        let flags = self
            .arena
            .get(node)
            .map_or(NodeFlags::empty(), |header| header.flags & NodeFlags::BLOCK_SCOPED);
        let updated = self.create_variable_declaration_list(declarations, flags);
        self.update(updated, node)
    }

    pub fn create_variable_declaration(
        &mut self,
        name: NodeIndex,
        exclamation_token: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let rules = self.parenthesizer;
        let initializer = if initializer.is_some() {
            rules.parenthesize_expression_for_disallowed_comma(self, initializer)
        } else {
            initializer
        };
        let mut flags = self.name_flags(name) | self.child_flags(initializer);
        if exclamation_token || type_node.is_some() {
            flags |= TransformFlags::CONTAINS_TYPESCRIPT;
        }
        let node = self.alloc(
            SyntaxKind::VariableDeclaration,
            VariableDeclarationData {
                name,
                exclamation_token,
                type_annotation: type_node,
                initializer,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_variable_declaration(
        &mut self,
        node: NodeIndex,
        name: NodeIndex,
        exclamation_token: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        let data: VariableDeclarationData = self.data_of(node, &[SyntaxKind::VariableDeclaration]);
        if data.name == name
            && data.exclamation_token == exclamation_token
            && data.type_annotation == type_node
            && data.initializer == initializer
        {
            return node;
        }
        let updated = self.create_variable_declaration(name, exclamation_token, type_node, initializer);
        self.update(updated, node)
    }

    // ========================================================================
    // Simple statements
    // ========================================================================

    fn create_expression_holder(&mut self, kind: SyntaxKind, expression: NodeIndex) -> NodeIndex {
        let mut flags = self.child_flags(expression);
        if kind == SyntaxKind::ReturnStatement {
            flags |= TransformFlags::CONTAINS_ES2018
                | TransformFlags::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION;
        }
        let node = self.alloc(kind, ExpressionData { expression });
        self.finish(node, flags)
    }

    fn update_expression_holder(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        expression: NodeIndex,
    ) -> NodeIndex {
        let data: ExpressionData = self.data_of(node, &[kind]);
        if data.expression == expression {
            return node;
        }
        let updated = match kind {
            SyntaxKind::ExpressionStatement => self.create_expression_statement(expression),
            _ => self.create_expression_holder(kind, expression),
        };
        self.update(updated, node)
    }

    pub fn create_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_expression_of_expression_statement(self, expression);
        self.create_expression_holder(SyntaxKind::ExpressionStatement, expression)
    }

    pub fn update_expression_statement(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_expression_holder(node, SyntaxKind::ExpressionStatement, expression)
    }

    pub fn create_return_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_expression_holder(SyntaxKind::ReturnStatement, expression)
    }

    pub fn update_return_statement(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_expression_holder(node, SyntaxKind::ReturnStatement, expression)
    }

    pub fn create_throw_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.create_expression_holder(SyntaxKind::ThrowStatement, expression)
    }

    pub fn update_throw_statement(&mut self, node: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.update_expression_holder(node, SyntaxKind::ThrowStatement, expression)
    }

    pub fn create_if_statement(
        &mut self,
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    ) -> NodeIndex {
        let then_statement = self.as_embedded_statement(then_statement);
        let else_statement = self.as_embedded_statement(else_statement);
        let flags = self.child_flags(expression)
            | self.child_flags(then_statement)
            | self.child_flags(else_statement);
        let node = self.alloc(
            SyntaxKind::IfStatement,
            IfStatementData {
                expression,
                then_statement,
                else_statement,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_if_statement(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        then_statement: NodeIndex,
        else_statement: NodeIndex,
    ) -> NodeIndex {
        let data: IfStatementData = self.data_of(node, &[SyntaxKind::IfStatement]);
        if data.expression == expression
            && data.then_statement == then_statement
            && data.else_statement == else_statement
        {
            return node;
        }
        let updated = self.create_if_statement(expression, then_statement, else_statement);
        self.update(updated, node)
    }

    // ========================================================================
    // Loops
    // ========================================================================

    fn create_loop(&mut self, kind: SyntaxKind, data: LoopData) -> NodeIndex {
        let data = LoopData {
            statement: self.as_embedded_statement(data.statement),
            ..data
        };
        let flags = self.child_flags(data.initializer)
            | self.child_flags(data.condition)
            | self.child_flags(data.incrementor)
            | self.child_flags(data.statement);
        let node = self.alloc(kind, data);
        self.finish(node, flags)
    }

    fn update_loop(&mut self, node: NodeIndex, kind: SyntaxKind, data: LoopData) -> NodeIndex {
        let existing: LoopData = self.data_of(node, &[kind]);
        if existing == data {
            return node;
        }
        let updated = self.create_loop(kind, data);
        self.update(updated, node)
    }

    pub fn create_do_statement(&mut self, statement: NodeIndex, expression: NodeIndex) -> NodeIndex {
        self.create_loop(SyntaxKind::DoStatement, Self::loop_data(NodeIndex::NONE, expression, NodeIndex::NONE, statement))
    }

    pub fn update_do_statement(
        &mut self,
        node: NodeIndex,
        statement: NodeIndex,
        expression: NodeIndex,
    ) -> NodeIndex {
        self.update_loop(
            node,
            SyntaxKind::DoStatement,
            Self::loop_data(NodeIndex::NONE, expression, NodeIndex::NONE, statement),
        )
    }

    pub fn create_while_statement(&mut self, expression: NodeIndex, statement: NodeIndex) -> NodeIndex {
        self.create_loop(
            SyntaxKind::WhileStatement,
            Self::loop_data(NodeIndex::NONE, expression, NodeIndex::NONE, statement),
        )
    }

    pub fn update_while_statement(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.update_loop(
            node,
            SyntaxKind::WhileStatement,
            Self::loop_data(NodeIndex::NONE, expression, NodeIndex::NONE, statement),
        )
    }

    pub fn create_for_statement(
        &mut self,
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.create_loop(
            SyntaxKind::ForStatement,
            Self::loop_data(initializer, condition, incrementor, statement),
        )
    }

    pub fn update_for_statement(
        &mut self,
        node: NodeIndex,
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.update_loop(
            node,
            SyntaxKind::ForStatement,
            Self::loop_data(initializer, condition, incrementor, statement),
        )
    }

    fn loop_data(
        initializer: NodeIndex,
        condition: NodeIndex,
        incrementor: NodeIndex,
        statement: NodeIndex,
    ) -> LoopData {
        LoopData {
            initializer,
            condition,
            incrementor,
            statement,
        }
    }

    pub fn create_for_in_statement(
        &mut self,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.create_for_in_of(SyntaxKind::ForInStatement, false, initializer, expression, statement)
    }

    pub fn update_for_in_statement(
        &mut self,
        node: NodeIndex,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.update_for_in_of(node, SyntaxKind::ForInStatement, false, initializer, expression, statement)
    }

    pub fn create_for_of_statement(
        &mut self,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.create_for_in_of(
            SyntaxKind::ForOfStatement,
            await_modifier,
            initializer,
            expression,
            statement,
        )
    }

    pub fn update_for_of_statement(
        &mut self,
        node: NodeIndex,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.update_for_in_of(
            node,
            SyntaxKind::ForOfStatement,
            await_modifier,
            initializer,
            expression,
            statement,
        )
    }

    fn create_for_in_of(
        &mut self,
        kind: SyntaxKind,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let expression = if kind == SyntaxKind::ForOfStatement {
            let rules = self.parenthesizer;
            rules.parenthesize_expression_for_disallowed_comma(self, expression)
        } else {
            expression
        };
        let statement = self.as_embedded_statement(statement);
        let mut flags =
            self.child_flags(initializer) | self.child_flags(expression) | self.child_flags(statement);
        if kind == SyntaxKind::ForOfStatement {
            flags |= TransformFlags::CONTAINS_ES2015;
        }
        if await_modifier {
            flags |= TransformFlags::CONTAINS_ES2018;
        }
        let node = self.alloc(
            kind,
            ForInOfData {
                await_modifier,
                initializer,
                expression,
                statement,
            },
        );
        self.finish(node, flags)
    }

    fn update_for_in_of(
        &mut self,
        node: NodeIndex,
        kind: SyntaxKind,
        await_modifier: bool,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let data: ForInOfData = self.data_of(node, &[kind]);
        if data.await_modifier == await_modifier
            && data.initializer == initializer
            && data.expression == expression
            && data.statement == statement
        {
            return node;
        }
        let updated = self.create_for_in_of(kind, await_modifier, initializer, expression, statement);
        self.update(updated, node)
    }

    // ========================================================================
    // Jumps and labels
    // ========================================================================

    fn create_jump(&mut self, kind: SyntaxKind, label: NodeIndex) -> NodeIndex {
        let flags = self.identifier_name_flags(label)
            | TransformFlags::CONTAINS_HOISTED_DECLARATION_OR_COMPLETION;
        let node = self.alloc(kind, NameData { name: label });
        self.finish(node, flags)
    }

    fn update_jump(&mut self, node: NodeIndex, kind: SyntaxKind, label: NodeIndex) -> NodeIndex {
        let data: NameData = self.data_of(node, &[kind]);
        if data.name == label {
            return node;
        }
        let updated = self.create_jump(kind, label);
        self.update(updated, node)
    }

    pub fn create_continue_statement(&mut self, label: NodeIndex) -> NodeIndex {
        self.create_jump(SyntaxKind::ContinueStatement, label)
    }

    pub fn update_continue_statement(&mut self, node: NodeIndex, label: NodeIndex) -> NodeIndex {
        self.update_jump(node, SyntaxKind::ContinueStatement, label)
    }

    pub fn create_break_statement(&mut self, label: NodeIndex) -> NodeIndex {
        self.create_jump(SyntaxKind::BreakStatement, label)
    }

    pub fn update_break_statement(&mut self, node: NodeIndex, label: NodeIndex) -> NodeIndex {
        self.update_jump(node, SyntaxKind::BreakStatement, label)
    }

    pub fn create_labeled_statement(&mut self, label: NodeIndex, statement: NodeIndex) -> NodeIndex {
        let statement = self.as_embedded_statement(statement);
        let flags = self.identifier_name_flags(label) | self.child_flags(statement);
        let node = self.alloc(SyntaxKind::LabeledStatement, LabeledData { label, statement });
        self.finish(node, flags)
    }

    pub fn update_labeled_statement(
        &mut self,
        node: NodeIndex,
        label: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let data: LabeledData = self.data_of(node, &[SyntaxKind::LabeledStatement]);
        if data.label == label && data.statement == statement {
            return node;
        }
        let updated = self.create_labeled_statement(label, statement);
        self.update(updated, node)
    }

    pub fn create_with_statement(&mut self, expression: NodeIndex, statement: NodeIndex) -> NodeIndex {
        let statement = self.as_embedded_statement(statement);
        let flags = self.child_flags(expression) | self.child_flags(statement);
        let node = self.alloc(SyntaxKind::WithStatement, WithData { expression, statement });
        self.finish(node, flags)
    }

    pub fn update_with_statement(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        let data: WithData = self.data_of(node, &[SyntaxKind::WithStatement]);
        if data.expression == expression && data.statement == statement {
            return node;
        }
        let updated = self.create_with_statement(expression, statement);
        self.update(updated, node)
    }

    // ========================================================================
    // Switch and try
    // ========================================================================

    pub fn create_switch_statement(&mut self, expression: NodeIndex, case_block: NodeIndex) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_expression_for_disallowed_comma(self, expression);
        let flags = self.child_flags(expression) | self.child_flags(case_block);
        let node = self.alloc(
            SyntaxKind::SwitchStatement,
            SwitchData {
                expression,
                case_block,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_switch_statement(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        case_block: NodeIndex,
    ) -> NodeIndex {
        let data: SwitchData = self.data_of(node, &[SyntaxKind::SwitchStatement]);
        if data.expression == expression && data.case_block == case_block {
            return node;
        }
        let updated = self.create_switch_statement(expression, case_block);
        self.update(updated, node)
    }

    pub fn create_case_clause(&mut self, expression: NodeIndex, statements: NodeList) -> NodeIndex {
        let rules = self.parenthesizer;
        let expression = rules.parenthesize_expression_for_disallowed_comma(self, expression);
        self.create_clause(SyntaxKind::CaseClause, expression, statements)
    }

    pub fn update_case_clause(
        &mut self,
        node: NodeIndex,
        expression: NodeIndex,
        statements: NodeList,
    ) -> NodeIndex {
        let data: CaseClauseData = self.data_of(node, &[SyntaxKind::CaseClause]);
        if data.expression == expression && data.statements == statements {
            return node;
        }
        let updated = self.create_case_clause(expression, statements);
        self.update(updated, node)
    }

    pub fn create_default_clause(&mut self, statements: NodeList) -> NodeIndex {
        self.create_clause(SyntaxKind::DefaultClause, NodeIndex::NONE, statements)
    }

    pub fn update_default_clause(&mut self, node: NodeIndex, statements: NodeList) -> NodeIndex {
        let data: CaseClauseData = self.data_of(node, &[SyntaxKind::DefaultClause]);
        if data.statements == statements {
            return node;
        }
        let updated = self.create_default_clause(statements);
        self.update(updated, node)
    }

    fn create_clause(&mut self, kind: SyntaxKind, expression: NodeIndex, statements: NodeList) -> NodeIndex {
        let statements = self.create_node_array(statements, None);
        let flags = self.child_flags(expression) | self.children_flags(Some(statements));
        let node = self.alloc(
            kind,
            CaseClauseData {
                expression,
                statements,
            },
        );
        self.finish(node, flags)
    }

    pub fn create_try_statement(
        &mut self,
        try_block: NodeIndex,
        catch_clause: NodeIndex,
        finally_block: NodeIndex,
    ) -> NodeIndex {
        let flags = self.child_flags(try_block)
            | self.child_flags(catch_clause)
            | self.child_flags(finally_block);
        let node = self.alloc(
            SyntaxKind::TryStatement,
            TryData {
                try_block,
                catch_clause,
                finally_block,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_try_statement(
        &mut self,
        node: NodeIndex,
        try_block: NodeIndex,
        catch_clause: NodeIndex,
        finally_block: NodeIndex,
    ) -> NodeIndex {
        let data: TryData = self.data_of(node, &[SyntaxKind::TryStatement]);
        if data.try_block == try_block
            && data.catch_clause == catch_clause
            && data.finally_block == finally_block
        {
            return node;
        }
        let updated = self.create_try_statement(try_block, catch_clause, finally_block);
        self.update(updated, node)
    }

    /// `catch (x) {}`; an absent variable is the ES2019 optional binding.
    pub fn create_catch_clause(&mut self, variable_declaration: NodeIndex, block: NodeIndex) -> NodeIndex {
        let mut flags = self.child_flags(variable_declaration) | self.child_flags(block);
        if variable_declaration.is_none() {
            flags |= TransformFlags::CONTAINS_ES2019;
        }
        let node = self.alloc(
            SyntaxKind::CatchClause,
            CatchClauseData {
                variable_declaration,
                block,
            },
        );
        self.finish(node, flags)
    }

    pub fn update_catch_clause(
        &mut self,
        node: NodeIndex,
        variable_declaration: NodeIndex,
        block: NodeIndex,
    ) -> NodeIndex {
        let data: CatchClauseData = self.data_of(node, &[SyntaxKind::CatchClause]);
        if data.variable_declaration == variable_declaration && data.block == block {
            return node;
        }
        let updated = self.create_catch_clause(variable_declaration, block);
        self.update(updated, node)
    }

    // ========================================================================
    // Source files and bundles
    // ========================================================================

    fn has_module_indicator(&self, statements: NodeList) -> bool {
        self.arena.list_nodes(statements).iter().any(|&statement| {
            matches!(
                self.arena.kind(statement),
                Some(
                    SyntaxKind::ImportDeclaration
                        | SyntaxKind::ExportDeclaration
                        | SyntaxKind::ExportAssignment
                )
            ) || (self.arena.is_kind(statement, SyntaxKind::ImportEqualsDeclaration)
                && self
                    .arena
                    .node_data::<ImportEqualsData>(statement)
                    .is_some_and(|data| {
                        self.arena
                            .is_kind(data.module_reference, SyntaxKind::ExternalModuleReference)
                    }))
                || self
                    .arena
                    .has_syntactic_modifier(statement, ModifierFlags::EXPORT)
        })
    }

    /// A source file; it is an external module when a top-level statement
    /// imports or exports.
    pub fn create_source_file(
        &mut self,
        file_name: &str,
        statements: NodeList,
        end_of_file_token: NodeIndex,
    ) -> NodeIndex {
        let statements = self.create_node_array(statements, None);
        let is_external_module = self.has_module_indicator(statements);
        let flags = self.children_flags(Some(statements)) | self.child_flags(end_of_file_token);
        let node = self.alloc(
            SyntaxKind::SourceFile,
            SourceFileData {
                statements,
                end_of_file_token,
                file_name: file_name.to_string(),
                is_declaration_file: file_name.ends_with(".d.ts"),
                has_no_default_lib: false,
                is_external_module,
            },
        );
        self.finish(node, flags)
    }

    /// Replace a file's statements; file name and module-ness carry over.
    pub fn update_source_file(
        &mut self,
        node: NodeIndex,
        statements: NodeList,
        is_declaration_file: bool,
        has_no_default_lib: bool,
    ) -> NodeIndex {
        let data: SourceFileData = self.data_of(node, &[SyntaxKind::SourceFile]);
        if data.statements == statements
            && data.is_declaration_file == is_declaration_file
            && data.has_no_default_lib == has_no_default_lib
        {
            return node;
        }
        let statements = self.create_node_array(statements, None);
        let flags = self.children_flags(Some(statements)) | self.child_flags(data.end_of_file_token);
        let updated = self.alloc(
            SyntaxKind::SourceFile,
            SourceFileData {
                statements,
                is_declaration_file,
                has_no_default_lib,
                ..data
            },
        );
        self.finish(updated, flags);
        self.update(updated, node)
    }

    pub fn create_bundle(&mut self, source_files: Vec<NodeIndex>) -> NodeIndex {
        let flags = self.aggregate_children_flags(&source_files);
        let node = self.alloc(SyntaxKind::Bundle, BundleData { source_files });
        self.finish(node, flags)
    }

    pub fn update_bundle(&mut self, node: NodeIndex, source_files: Vec<NodeIndex>) -> NodeIndex {
        let data: BundleData = self.data_of(node, &[SyntaxKind::Bundle]);
        if data.source_files == source_files {
            return node;
        }
        let updated = self.create_bundle(source_files);
        self.update(updated, node)
    }
}
