//! Tests for the declaration transform: statement pruning, type inference
//! fallbacks, class member rewriting, late painting of aliases, scope
//! markers, bundles and accessibility diagnostics.
//!
//! Inputs are built with a parser factory so they count as parse tree nodes;
//! the transform then runs on a regular (synthesizing) factory over the same
//! arena.

use std::cell::RefCell;

use rustc_hash::{FxHashMap, FxHashSet};
use tsz_ast::node::{
    BundleData, ClassData, EnumData, ExportAssignmentData, ExportDeclData, FunctionData,
    HeritageData, ImportClauseData, ImportDeclData, ListData, ModuleData, ParameterData,
    PropertyAssignmentData, PropertyDeclData, SourceFileData, SpecifierData, TypeRefData,
    UnaryExprData, VariableData, VariableDeclarationData,
};
use tsz_ast::{
    ModifierFlags, NodeArena, NodeFactory, NodeFactoryFlags, NodeFlags, NodeIndex, SyntaxKind,
};
use tsz_common::diagnostics::diagnostic_messages as msg;

use super::DeclarationTransformer;
use crate::resolver::{
    AllAccessorDeclarations, ConstantValue, DeclarationEmitHost, DeclarationEmitOptions,
    DeclarationTransformResult, EmitResolver, ExpandoProperty, ModuleSpecifierRewriter,
    SymbolAccessibilityResult, SymbolId, SymbolMeaning, SymbolTracker,
};

// =============================================================================
// Test doubles
// =============================================================================

/// Checker stand-in. Everything is visible and nothing can be inferred
/// unless configured otherwise.
#[derive(Default)]
struct MockResolver {
    hidden: FxHashSet<NodeIndex>,
    /// Nodes made visible by accessibility queries.
    painted: RefCell<FxHashSet<NodeIndex>>,
    /// Keyword type inferred for a declaration, signature or expression.
    inferred: FxHashMap<NodeIndex, SyntaxKind>,
    /// Declarations whose type is a reference to a tracked symbol.
    type_symbols: FxHashMap<NodeIndex, (SymbolId, &'static str)>,
    /// Declarations whose type serialization hits a cycle.
    cyclic: FxHashSet<NodeIndex>,
    /// Accessibility of a symbol, plus the nodes painted visible by asking.
    symbols: FxHashMap<SymbolId, (SymbolAccessibilityResult, Vec<NodeIndex>)>,
    entities: FxHashMap<NodeIndex, (SymbolAccessibilityResult, Vec<NodeIndex>)>,
    literal_consts: FxHashMap<NodeIndex, &'static str>,
    constants: FxHashMap<NodeIndex, ConstantValue>,
    accessors: FxHashMap<NodeIndex, AllAccessorDeclarations>,
    overload_implementations: FxHashSet<NodeIndex>,
    expandos: FxHashMap<NodeIndex, Vec<ExpandoProperty>>,
}

impl MockResolver {
    fn paint(&self, nodes: &[NodeIndex]) {
        self.painted.borrow_mut().extend(nodes.iter().copied());
    }

    fn infer(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
        enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        if self.cyclic.contains(&node) {
            tracker.report_cyclic_structure_error();
            return None;
        }
        if let Some(&(symbol, name)) = self.type_symbols.get(&node) {
            if tracker.track_symbol(symbol, enclosing, SymbolMeaning::TYPE) {
                return None;
            }
            let name = factory.create_identifier(name);
            return Some(factory.create_type_reference_node(name, None));
        }
        self.inferred
            .get(&node)
            .map(|&kind| factory.create_keyword_type_node(kind))
    }
}

impl EmitResolver for MockResolver {
    fn is_declaration_visible(&self, node: NodeIndex) -> bool {
        !self.hidden.contains(&node) || self.painted.borrow().contains(&node)
    }

    fn is_symbol_accessible(
        &self,
        symbol: SymbolId,
        _enclosing_declaration: NodeIndex,
        _meaning: SymbolMeaning,
        should_compute_aliases_to_make_visible: bool,
    ) -> SymbolAccessibilityResult {
        match self.symbols.get(&symbol) {
            Some((result, painted)) => {
                if should_compute_aliases_to_make_visible {
                    self.paint(painted);
                }
                result.clone()
            }
            None => SymbolAccessibilityResult::accessible(),
        }
    }

    fn is_entity_name_visible(
        &self,
        entity_name: NodeIndex,
        _enclosing_declaration: NodeIndex,
    ) -> SymbolAccessibilityResult {
        match self.entities.get(&entity_name) {
            Some((result, painted)) => {
                self.paint(painted);
                result.clone()
            }
            None => SymbolAccessibilityResult::accessible(),
        }
    }

    fn create_type_of_declaration(
        &self,
        factory: &mut NodeFactory,
        declaration: NodeIndex,
        enclosing_declaration: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        self.infer(factory, declaration, enclosing_declaration, tracker)
    }

    fn create_return_type_of_signature_declaration(
        &self,
        factory: &mut NodeFactory,
        signature: NodeIndex,
        enclosing_declaration: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        self.infer(factory, signature, enclosing_declaration, tracker)
    }

    fn create_type_of_expression(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
        enclosing_declaration: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        self.infer(factory, expression, enclosing_declaration, tracker)
    }

    fn create_literal_const_value(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> NodeIndex {
        let text = self.literal_consts.get(&node).copied().unwrap_or("0");
        factory.create_numeric_literal(text)
    }

    fn get_constant_value(&self, node: NodeIndex) -> Option<ConstantValue> {
        self.constants.get(&node).cloned()
    }

    fn is_literal_const_declaration(&self, node: NodeIndex) -> bool {
        self.literal_consts.contains_key(&node)
    }

    fn get_all_accessor_declarations(&self, accessor: NodeIndex) -> AllAccessorDeclarations {
        self.accessors
            .get(&accessor)
            .copied()
            .unwrap_or_else(|| AllAccessorDeclarations::single(accessor, true))
    }

    fn is_implementation_of_overload(&self, node: NodeIndex) -> bool {
        self.overload_implementations.contains(&node)
    }

    fn is_optional_parameter(&self, _node: NodeIndex) -> bool {
        false
    }

    fn is_required_initialized_parameter(&self, _node: NodeIndex) -> bool {
        false
    }

    fn is_optional_uninitialized_parameter_property(&self, _node: NodeIndex) -> bool {
        false
    }

    fn is_late_bound(&self, _node: NodeIndex) -> bool {
        false
    }

    fn is_expando_function_declaration(&self, node: NodeIndex) -> bool {
        self.expandos.contains_key(&node)
    }

    fn get_properties_of_container_function(&self, node: NodeIndex) -> Vec<ExpandoProperty> {
        self.expandos.get(&node).cloned().unwrap_or_default()
    }

    fn is_import_required_by_augmentation(&self, _node: NodeIndex) -> bool {
        false
    }
}

#[derive(Default)]
struct MockHost {
    module_names: FxHashMap<NodeIndex, String>,
    specifiers: FxHashMap<NodeIndex, String>,
    internal: FxHashSet<NodeIndex>,
}

impl ModuleSpecifierRewriter for MockHost {
    fn external_module_name_for_declaration(&self, declaration: NodeIndex) -> Option<String> {
        self.specifiers.get(&declaration).cloned()
    }
}

impl DeclarationEmitHost for MockHost {
    fn resolved_external_module_name(&self, source_file: NodeIndex) -> String {
        self.module_names
            .get(&source_file)
            .cloned()
            .unwrap_or_default()
    }

    fn is_internal_declaration(&self, node: NodeIndex, _source_file: NodeIndex) -> bool {
        self.internal.contains(&node)
    }
}

// =============================================================================
// Builders
// =============================================================================

fn parser() -> NodeFactory {
    NodeFactory::for_parser(NodeArena::new())
}

/// Hand the parsed arena to a synthesizing factory for the transform.
fn emitter(parser: NodeFactory) -> NodeFactory {
    NodeFactory::new(parser.into_arena(), NodeFactoryFlags::empty())
}

fn source_file(p: &mut NodeFactory, name: &str, statements: Vec<NodeIndex>) -> NodeIndex {
    let statements = p.node_list(statements);
    let eof = p.create_token(SyntaxKind::EndOfFileToken);
    let file = p.create_source_file(name, statements, eof);
    p.arena_mut().set_parent_recursive(file);
    file
}

fn run(
    f: &mut NodeFactory,
    resolver: &MockResolver,
    host: &MockHost,
    options: DeclarationEmitOptions,
    node: NodeIndex,
) -> DeclarationTransformResult {
    DeclarationTransformer::new(f, resolver, host, options).transform(node)
}

fn block(p: &mut NodeFactory, statements: Vec<NodeIndex>) -> NodeIndex {
    let statements = p.node_list(statements);
    p.create_block(statements, false)
}

fn call(p: &mut NodeFactory, callee: &str) -> NodeIndex {
    let callee = p.create_identifier(callee);
    let arguments = p.node_list(Vec::new());
    p.create_call_expression(callee, None, arguments)
}

fn interface(p: &mut NodeFactory, flags: ModifierFlags, name: &str) -> NodeIndex {
    let modifiers = p.create_modifiers_from_modifier_flags(flags);
    let name = p.create_identifier(name);
    let members = p.node_list(Vec::new());
    p.create_interface_declaration(modifiers, name, None, None, members)
}

fn class(p: &mut NodeFactory, flags: ModifierFlags, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
    let modifiers = p.create_modifiers_from_modifier_flags(flags);
    let name = p.create_identifier(name);
    let members = p.node_list(members);
    p.create_class_declaration(modifiers, name, None, None, members)
}

/// `<modifiers> <let|const|using> name = initializer;`, returning the
/// statement and its declaration.
fn variable(
    p: &mut NodeFactory,
    flags: ModifierFlags,
    list_flags: NodeFlags,
    name: &str,
    initializer: NodeIndex,
) -> (NodeIndex, NodeIndex) {
    let name = p.create_identifier(name);
    let declaration = p.create_variable_declaration(name, false, NodeIndex::NONE, initializer);
    let declarations = p.node_list(vec![declaration]);
    let list = p.create_variable_declaration_list(declarations, list_flags);
    let modifiers = p.create_modifiers_from_modifier_flags(flags);
    (p.create_variable_statement(modifiers, list), declaration)
}

fn parameter(p: &mut NodeFactory, flags: ModifierFlags, name: &str, type_node: NodeIndex) -> NodeIndex {
    let modifiers = p.create_modifiers_from_modifier_flags(flags);
    let name = p.create_identifier(name);
    p.create_parameter_declaration(modifiers, false, name, false, type_node, NodeIndex::NONE)
}

/// `import { <name> } from "<module>";`, returning the import and its
/// specifier.
fn named_import(p: &mut NodeFactory, name: &str, module: &str) -> (NodeIndex, NodeIndex) {
    let name = p.create_identifier(name);
    let specifier = p.create_import_specifier(false, NodeIndex::NONE, name);
    let elements = p.node_list(vec![specifier]);
    let named = p.create_named_imports(elements);
    let clause = p.create_import_clause(false, NodeIndex::NONE, named);
    let module = p.create_string_literal(module, false);
    (
        p.create_import_declaration(None, clause, module, NodeIndex::NONE),
        specifier,
    )
}

// =============================================================================
// Output readers
// =============================================================================

fn file_statements(f: &NodeFactory, file: NodeIndex) -> Vec<NodeIndex> {
    let data = f
        .arena()
        .node_data::<SourceFileData>(file)
        .expect("source file");
    f.arena().list_nodes(data.statements).to_vec()
}

fn namespace_statements(f: &NodeFactory, namespace: NodeIndex) -> Vec<NodeIndex> {
    let body = f
        .arena()
        .node_data::<ModuleData>(namespace)
        .expect("module declaration")
        .body;
    let statements = f
        .arena()
        .node_data::<tsz_ast::node::BlockData>(body)
        .expect("module block")
        .statements;
    f.arena().list_nodes(statements).to_vec()
}

fn variable_declarations(f: &NodeFactory, statement: NodeIndex) -> Vec<NodeIndex> {
    let list = f
        .arena()
        .node_data::<VariableData>(statement)
        .expect("variable statement")
        .declaration_list;
    let elements = f
        .arena()
        .node_data::<ListData>(list)
        .expect("declaration list")
        .elements;
    f.arena().list_nodes(elements).to_vec()
}

fn variable_declaration(f: &NodeFactory, declaration: NodeIndex) -> VariableDeclarationData {
    *f.arena()
        .node_data::<VariableDeclarationData>(declaration)
        .expect("variable declaration")
}

fn class_members(f: &NodeFactory, class: NodeIndex) -> Vec<NodeIndex> {
    let members = f
        .arena()
        .node_data::<ClassData>(class)
        .expect("class-like declaration")
        .members;
    f.arena().list_nodes(members).to_vec()
}

fn kinds(f: &NodeFactory, nodes: &[NodeIndex]) -> Vec<SyntaxKind> {
    nodes
        .iter()
        .map(|&node| f.arena().kind(node).expect("node kind"))
        .collect()
}

fn text(f: &NodeFactory, node: NodeIndex) -> String {
    f.arena()
        .identifier_text(node)
        .or_else(|| f.arena().literal_text(node))
        .unwrap_or_default()
        .to_string()
}

fn declaration_name(f: &NodeFactory, node: NodeIndex) -> String {
    text(f, f.arena().name_of_declaration(node))
}

fn modifiers(f: &NodeFactory, node: NodeIndex) -> ModifierFlags {
    f.arena().syntactic_modifier_flags(node)
}

// =============================================================================
// Statements and files
// =============================================================================

#[test]
fn test_declaration_file_passes_through() {
    let mut p = parser();
    let a = interface(&mut p, ModifierFlags::empty(), "A");
    let file = source_file(&mut p, "lib.d.ts", vec![a]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert_eq!(result.node, file);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_function_body_is_dropped_and_declare_added() {
    let mut p = parser();
    let number = p.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let x = parameter(&mut p, ModifierFlags::empty(), "x", number);
    let parameters = p.node_list(vec![x]);
    let string = p.create_keyword_type_node(SyntaxKind::StringKeyword);
    let body = block(&mut p, Vec::new());
    let name = p.create_identifier("f");
    let function = p.create_function_declaration(None, false, name, None, parameters, string, body);
    let invocation = call(&mut p, "f");
    let statement = p.create_expression_statement(invocation);
    let file = source_file(&mut p, "a.ts", vec![function, statement]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(kinds(&f, &statements), vec![SyntaxKind::FunctionDeclaration]);
    let data = *f
        .arena()
        .node_data::<FunctionData>(statements[0])
        .expect("function");
    assert!(data.body.is_none());
    assert_eq!(modifiers(&f, statements[0]), ModifierFlags::AMBIENT);
    assert!(f.arena().is_kind(data.type_annotation, SyntaxKind::StringKeyword));
    let output_parameter = f.arena().list_nodes(data.parameters)[0];
    let parameter_type = f
        .arena()
        .node_data::<ParameterData>(output_parameter)
        .expect("parameter")
        .type_annotation;
    assert!(f.arena().is_kind(parameter_type, SyntaxKind::NumberKeyword));

    let file_data = f
        .arena()
        .node_data::<SourceFileData>(result.node)
        .expect("source file");
    assert!(file_data.is_declaration_file);
}

#[test]
fn test_invisible_declarations_are_pruned() {
    let mut p = parser();
    let a = interface(&mut p, ModifierFlags::EXPORT, "A");
    let hidden = class(&mut p, ModifierFlags::empty(), "Hidden", Vec::new());
    let file = source_file(&mut p, "a.ts", vec![a, hidden]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        hidden: [hidden].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(kinds(&f, &statements), vec![SyntaxKind::InterfaceDeclaration]);
    assert_eq!(declaration_name(&f, statements[0]), "A");
    // Interfaces are never `declare`d and the export already marks a module.
    assert_eq!(modifiers(&f, statements[0]), ModifierFlags::EXPORT);
}

#[test]
fn test_type_alias_is_not_declared() {
    let mut p = parser();
    let name = p.create_identifier("T");
    let string = p.create_keyword_type_node(SyntaxKind::StringKeyword);
    let alias = p.create_type_alias_declaration(None, name, None, string);
    let file = source_file(&mut p, "a.ts", vec![alias]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(kinds(&f, &statements), vec![SyntaxKind::TypeAliasDeclaration]);
    assert_eq!(modifiers(&f, statements[0]), ModifierFlags::empty());
}

#[test]
fn test_overload_implementation_is_dropped() {
    let mut p = parser();
    let string = p.create_keyword_type_node(SyntaxKind::StringKeyword);
    let a = parameter(&mut p, ModifierFlags::empty(), "a", string);
    let parameters = p.node_list(vec![a]);
    let void = p.create_keyword_type_node(SyntaxKind::VoidKeyword);
    let name = p.create_identifier("g");
    let overload =
        p.create_function_declaration(None, false, name, None, parameters, void, NodeIndex::NONE);
    let any = p.create_keyword_type_node(SyntaxKind::AnyKeyword);
    let a = parameter(&mut p, ModifierFlags::empty(), "a", any);
    let parameters = p.node_list(vec![a]);
    let body = block(&mut p, Vec::new());
    let name = p.create_identifier("g");
    let implementation =
        p.create_function_declaration(None, false, name, None, parameters, NodeIndex::NONE, body);
    let file = source_file(&mut p, "a.ts", vec![overload, implementation]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        overload_implementations: [implementation].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(statements.len(), 1);
    let data = f
        .arena()
        .node_data::<FunctionData>(statements[0])
        .expect("function");
    assert!(f.arena().is_kind(data.type_annotation, SyntaxKind::VoidKeyword));
}

#[test]
fn test_strip_internal_removes_marked_declarations() {
    let mut p = parser();
    let public = interface(&mut p, ModifierFlags::empty(), "Public");
    let internal = interface(&mut p, ModifierFlags::empty(), "Internal");
    let file = source_file(&mut p, "a.ts", vec![public, internal]);
    let mut f = emitter(p);
    let resolver = MockResolver::default();
    let host = MockHost {
        internal: [internal].into_iter().collect(),
        ..MockHost::default()
    };

    let kept = run(&mut f, &resolver, &host, DeclarationEmitOptions::default(), file);
    assert_eq!(file_statements(&f, kept.node).len(), 2);

    let options = DeclarationEmitOptions {
        strip_internal: true,
        ..DeclarationEmitOptions::default()
    };
    let stripped = run(&mut f, &resolver, &host, options, file);
    let statements = file_statements(&f, stripped.node);
    assert_eq!(statements.len(), 1);
    assert_eq!(declaration_name(&f, statements[0]), "Public");
}

#[test]
#[should_panic(expected = "expects a source file or bundle")]
fn test_transform_rejects_non_file_nodes() {
    let mut f = emitter(parser());
    let identifier = f.create_identifier("x");
    run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        identifier,
    );
}

#[test]
fn test_options_deserialize_from_camel_case() {
    let options: DeclarationEmitOptions =
        serde_json::from_str(r#"{ "stripInternal": true }"#).expect("valid options");
    assert!(options.strip_internal);
    assert!(!options.is_nightly);
}

// =============================================================================
// Variables and inferred types
// =============================================================================

#[test]
fn test_missing_variable_type_is_inferred() {
    let mut p = parser();
    let initializer = call(&mut p, "make");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::EXPORT, NodeFlags::CONST, "x", initializer);
    let file = source_file(&mut p, "a.ts", vec![statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [(declaration, SyntaxKind::NumberKeyword)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert!(result.diagnostics.is_empty());
    let statements = file_statements(&f, result.node);
    assert_eq!(statements.len(), 1, "an exported variable needs no `export {{}}`");
    assert_eq!(
        modifiers(&f, statements[0]),
        ModifierFlags::EXPORT | ModifierFlags::AMBIENT
    );
    let declarations = variable_declarations(&f, statements[0]);
    let data = variable_declaration(&f, declarations[0]);
    assert!(f.arena().is_kind(data.type_annotation, SyntaxKind::NumberKeyword));
    assert!(data.initializer.is_none());
}

#[test]
fn test_unnameable_inferred_type_falls_back_to_any() {
    let mut p = parser();
    let initializer = call(&mut p, "make");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::EXPORT, NodeFlags::CONST, "x", initializer);
    let file = source_file(&mut p, "a.ts", vec![statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        type_symbols: [(declaration, (SymbolId(1), "Secret"))].into_iter().collect(),
        symbols: [(
            SymbolId(1),
            (SymbolAccessibilityResult::not_accessible("Secret", None), Vec::new()),
        )]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.code, msg::EXPORTED_VARIABLE_0_HAS_OR_IS_USING_PRIVATE_NAME_1.code);
    assert!(diagnostic.message_text.contains("'x'"));
    assert!(diagnostic.message_text.contains("'Secret'"));
    assert_eq!(diagnostic.file, "a.ts");

    let declarations = variable_declarations(&f, file_statements(&f, result.node)[0]);
    let data = variable_declaration(&f, declarations[0]);
    assert!(f.arena().is_kind(data.type_annotation, SyntaxKind::AnyKeyword));
}

#[test]
fn test_cyclic_type_report_names_the_declaration() {
    let mut p = parser();
    let initializer = call(&mut p, "make");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::EXPORT, NodeFlags::LET, "tree", initializer);
    let file = source_file(&mut p, "a.ts", vec![statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        cyclic: [declaration].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(
        result.diagnostics[0].code,
        msg::THE_INFERRED_TYPE_OF_0_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE.code
    );
    assert!(result.diagnostics[0].message_text.contains("tree"));
}

#[test]
fn test_literal_const_keeps_initializer() {
    let mut p = parser();
    let one = p.create_numeric_literal("1");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::EXPORT, NodeFlags::CONST, "x", one);
    let file = source_file(&mut p, "a.ts", vec![statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        literal_consts: [(declaration, "1")].into_iter().collect(),
        inferred: [(declaration, SyntaxKind::NumberKeyword)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let declarations = variable_declarations(&f, file_statements(&f, result.node)[0]);
    let data = variable_declaration(&f, declarations[0]);
    assert!(data.type_annotation.is_none());
    assert!(f.arena().is_kind(data.initializer, SyntaxKind::NumericLiteral));
    assert_eq!(text(&f, data.initializer), "1");
}

#[test]
fn test_using_declaration_becomes_const() {
    let mut p = parser();
    let initializer = call(&mut p, "open");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::empty(), NodeFlags::USING, "r", initializer);
    let file = source_file(&mut p, "a.ts", vec![statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [(declaration, SyntaxKind::ObjectKeyword)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    let list = f
        .arena()
        .node_data::<VariableData>(output)
        .expect("variable statement")
        .declaration_list;
    let flags = f.arena().get(list).expect("declaration list").flags;
    assert!(flags.contains(NodeFlags::CONST));
    assert!(!flags.contains(NodeFlags::USING));
}

#[test]
fn test_destructured_variable_is_flattened() {
    let mut p = parser();
    let a = p.create_identifier("a");
    let a_element = p.create_binding_element(false, NodeIndex::NONE, a, NodeIndex::NONE);
    let b = p.create_identifier("b");
    let b_element = p.create_binding_element(false, NodeIndex::NONE, b, NodeIndex::NONE);
    let elements = p.node_list(vec![a_element, b_element]);
    let pattern = p.create_object_binding_pattern(elements);
    let object = p.create_identifier("obj");
    let declaration = p.create_variable_declaration(pattern, false, NodeIndex::NONE, object);
    let declarations = p.node_list(vec![declaration]);
    let list = p.create_variable_declaration_list(declarations, NodeFlags::CONST);
    let export = p.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let statement = p.create_variable_statement(export, list);
    let file = source_file(&mut p, "a.ts", vec![statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [
            (a_element, SyntaxKind::NumberKeyword),
            (b_element, SyntaxKind::StringKeyword),
        ]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let declarations = variable_declarations(&f, file_statements(&f, result.node)[0]);
    assert_eq!(declarations.len(), 2);
    let first = variable_declaration(&f, declarations[0]);
    let second = variable_declaration(&f, declarations[1]);
    assert_eq!(text(&f, first.name), "a");
    assert!(f.arena().is_kind(first.type_annotation, SyntaxKind::NumberKeyword));
    assert_eq!(text(&f, second.name), "b");
    assert!(f.arena().is_kind(second.type_annotation, SyntaxKind::StringKeyword));
}

#[test]
fn test_enum_members_use_constant_values() {
    let mut p = parser();
    let names = ["A", "B", "C"].map(|name| p.create_identifier(name));
    let members: Vec<NodeIndex> = names
        .iter()
        .map(|&name| p.create_enum_member(name, NodeIndex::NONE))
        .collect();
    let member_list = p.node_list(members.clone());
    let name = p.create_identifier("E");
    let declaration = p.create_enum_declaration(None, name, member_list);
    let file = source_file(&mut p, "a.ts", vec![declaration]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        constants: [
            (members[0], ConstantValue::Number(0.0)),
            (members[1], ConstantValue::Number(-1.0)),
            (members[2], ConstantValue::String("x".to_string())),
        ]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    assert_eq!(modifiers(&f, output), ModifierFlags::AMBIENT);
    let member_list = f.arena().node_data::<EnumData>(output).expect("enum").members;
    let initializers: Vec<NodeIndex> = f
        .arena()
        .list_nodes(member_list)
        .iter()
        .map(|&member| {
            f.arena()
                .node_data::<PropertyAssignmentData>(member)
                .expect("enum member")
                .initializer
        })
        .collect();

    assert!(f.arena().is_kind(initializers[0], SyntaxKind::NumericLiteral));
    assert_eq!(text(&f, initializers[0]), "0");

    let negative = f
        .arena()
        .node_data::<UnaryExprData>(initializers[1])
        .expect("prefix minus");
    assert_eq!(negative.operator, SyntaxKind::MinusToken);
    assert_eq!(text(&f, negative.operand), "1");

    assert!(f.arena().is_kind(initializers[2], SyntaxKind::StringLiteral));
    assert_eq!(text(&f, initializers[2]), "x");
}

// =============================================================================
// Classes
// =============================================================================

#[test]
fn test_class_private_members_are_collapsed() {
    let mut p = parser();
    let secret_name = p.create_private_identifier("#secret");
    let one = p.create_numeric_literal("1");
    let secret =
        p.create_property_declaration(None, secret_name, false, false, NodeIndex::NONE, one);

    let private = p.create_modifiers_from_modifier_flags(ModifierFlags::PRIVATE);
    let name = p.create_identifier("m");
    let void = p.create_keyword_type_node(SyntaxKind::VoidKeyword);
    let no_parameters = p.node_list(Vec::new());
    let overload = p.create_method_declaration(
        private,
        false,
        name,
        false,
        None,
        no_parameters,
        void,
        NodeIndex::NONE,
    );
    let private = p.create_modifiers_from_modifier_flags(ModifierFlags::PRIVATE);
    let name = p.create_identifier("m");
    let string = p.create_keyword_type_node(SyntaxKind::StringKeyword);
    let a = parameter(&mut p, ModifierFlags::empty(), "a", string);
    let parameters = p.node_list(vec![a]);
    let body = block(&mut p, Vec::new());
    let implementation = p.create_method_declaration(
        private,
        false,
        name,
        false,
        None,
        parameters,
        NodeIndex::NONE,
        body,
    );

    let string = p.create_keyword_type_node(SyntaxKind::StringKeyword);
    let property = parameter(
        &mut p,
        ModifierFlags::PUBLIC | ModifierFlags::READONLY,
        "p",
        string,
    );
    let constructor_parameters = p.node_list(vec![property]);
    let constructor_body = block(&mut p, Vec::new());
    let constructor =
        p.create_constructor_declaration(None, constructor_parameters, constructor_body);

    let declaration = class(
        &mut p,
        ModifierFlags::EXPORT,
        "C",
        vec![secret, overload, implementation, constructor],
    );
    let file = source_file(&mut p, "a.ts", vec![declaration]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    assert_eq!(
        modifiers(&f, output),
        ModifierFlags::EXPORT | ModifierFlags::AMBIENT
    );
    let members = class_members(&f, output);
    assert_eq!(
        kinds(&f, &members),
        vec![
            SyntaxKind::PropertyDeclaration,
            SyntaxKind::PropertyDeclaration,
            SyntaxKind::PropertyDeclaration,
            SyntaxKind::Constructor,
        ]
    );

    let marker = f.arena().name_of_declaration(members[0]);
    assert!(f.arena().is_private_identifier(marker));
    assert_eq!(text(&f, marker), "#private");

    assert_eq!(declaration_name(&f, members[1]), "p");
    assert_eq!(modifiers(&f, members[1]), ModifierFlags::READONLY);
    let property_type = f
        .arena()
        .node_data::<PropertyDeclData>(members[1])
        .expect("parameter property")
        .type_annotation;
    assert!(f.arena().is_kind(property_type, SyntaxKind::StringKeyword));

    assert_eq!(declaration_name(&f, members[2]), "m");
    assert_eq!(modifiers(&f, members[2]), ModifierFlags::PRIVATE);
    let stub = f
        .arena()
        .node_data::<PropertyDeclData>(members[2])
        .expect("private method stub");
    assert!(stub.type_annotation.is_none());

    let constructor = *f
        .arena()
        .node_data::<FunctionData>(members[3])
        .expect("constructor");
    assert!(constructor.body.is_none());
    let constructor_parameter = f.arena().list_nodes(constructor.parameters)[0];
    assert_eq!(modifiers(&f, constructor_parameter), ModifierFlags::empty());
}

#[test]
fn test_non_entity_extends_is_hoisted_into_base_constant() {
    let mut p = parser();
    let callee = p.create_identifier("mixin");
    let base = p.create_identifier("Base");
    let arguments = p.node_list(vec![base]);
    let mixin = p.create_call_expression(callee, None, arguments);
    let heritage_type = p.create_expression_with_type_arguments(mixin, None);
    let types = p.node_list(vec![heritage_type]);
    let clause = p.create_heritage_clause(SyntaxKind::ExtendsKeyword, types);
    let clauses = p.node_list(vec![clause]);
    let export = p.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let name = p.create_identifier("D");
    let members = p.node_list(Vec::new());
    let declaration = p.create_class_declaration(export, name, None, Some(clauses), members);
    let file = source_file(&mut p, "a.ts", vec![declaration]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [(mixin, SyntaxKind::ObjectKeyword)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    // The unexported `D_base` needs an `export {}` to keep module scoping.
    assert_eq!(
        kinds(&f, &statements),
        vec![
            SyntaxKind::VariableStatement,
            SyntaxKind::ClassDeclaration,
            SyntaxKind::ExportDeclaration,
        ]
    );
    assert_eq!(modifiers(&f, statements[0]), ModifierFlags::AMBIENT);
    let base = variable_declaration(&f, variable_declarations(&f, statements[0])[0]);
    assert_eq!(text(&f, base.name), "D_base");
    assert!(f.arena().is_kind(base.type_annotation, SyntaxKind::ObjectKeyword));

    let clauses = f
        .arena()
        .node_data::<ClassData>(statements[1])
        .and_then(|data| data.heritage_clauses)
        .expect("heritage clauses");
    let clause = f.arena().list_nodes(clauses)[0];
    let types = f
        .arena()
        .node_data::<HeritageData>(clause)
        .expect("heritage clause")
        .types;
    let extended = f.arena().list_nodes(types)[0];
    let expression = f
        .arena()
        .node_data::<TypeRefData>(extended)
        .expect("expression with type arguments")
        .type_name;
    assert_eq!(text(&f, expression), "D_base");
}

#[test]
fn test_setter_takes_type_from_getter() {
    let mut p = parser();
    let name = p.create_identifier("v");
    let no_parameters = p.node_list(Vec::new());
    let number = p.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let getter_body = block(&mut p, Vec::new());
    let getter =
        p.create_get_accessor_declaration(None, name, no_parameters, number, getter_body);
    let name = p.create_identifier("v");
    let x = parameter(&mut p, ModifierFlags::empty(), "x", NodeIndex::NONE);
    let parameters = p.node_list(vec![x]);
    let setter_body = block(&mut p, Vec::new());
    let setter = p.create_set_accessor_declaration(None, name, parameters, setter_body);
    let declaration = class(&mut p, ModifierFlags::empty(), "K", vec![getter, setter]);
    let file = source_file(&mut p, "a.ts", vec![declaration]);
    let mut f = emitter(p);
    let pair = AllAccessorDeclarations {
        first_accessor: getter,
        second_accessor: setter,
        get_accessor: getter,
        set_accessor: setter,
    };
    let resolver = MockResolver {
        accessors: [(getter, pair), (setter, pair)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let members = class_members(&f, file_statements(&f, result.node)[0]);
    assert_eq!(
        kinds(&f, &members),
        vec![SyntaxKind::GetAccessor, SyntaxKind::SetAccessor]
    );
    let setter = *f
        .arena()
        .node_data::<FunctionData>(members[1])
        .expect("set accessor");
    assert!(setter.body.is_none());
    let value = f.arena().list_nodes(setter.parameters)[0];
    let value = f.arena().node_data::<ParameterData>(value).expect("parameter");
    assert_eq!(text(&f, value.name), "x");
    assert!(f.arena().is_kind(value.type_annotation, SyntaxKind::NumberKeyword));
}

#[test]
fn test_private_setter_gets_untyped_value_parameter() {
    let mut p = parser();
    let private = p.create_modifiers_from_modifier_flags(ModifierFlags::PRIVATE);
    let name = p.create_identifier("w");
    let number = p.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let v = parameter(&mut p, ModifierFlags::empty(), "v", number);
    let parameters = p.node_list(vec![v]);
    let body = block(&mut p, Vec::new());
    let setter = p.create_set_accessor_declaration(private, name, parameters, body);
    let declaration = class(&mut p, ModifierFlags::empty(), "K", vec![setter]);
    let file = source_file(&mut p, "a.ts", vec![declaration]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let members = class_members(&f, file_statements(&f, result.node)[0]);
    assert_eq!(modifiers(&f, members[0]), ModifierFlags::PRIVATE);
    let setter = *f
        .arena()
        .node_data::<FunctionData>(members[0])
        .expect("set accessor");
    let parameters = f.arena().list_nodes(setter.parameters);
    assert_eq!(parameters.len(), 1);
    let value = f
        .arena()
        .node_data::<ParameterData>(parameters[0])
        .expect("parameter");
    assert_eq!(text(&f, value.name), "value");
    assert!(value.type_annotation.is_none());
}

// =============================================================================
// Exports and scope markers
// =============================================================================

#[test]
fn test_default_export_expression_is_hoisted() {
    let mut p = parser();
    let one = p.create_numeric_literal("1");
    let two = p.create_numeric_literal("2");
    let sum = p.create_binary_expression(one, SyntaxKind::PlusToken, two);
    let assignment = p.create_export_assignment(None, false, sum);
    let file = source_file(&mut p, "a.ts", vec![assignment]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [(sum, SyntaxKind::NumberKeyword)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(
        kinds(&f, &statements),
        vec![SyntaxKind::VariableStatement, SyntaxKind::ExportAssignment]
    );
    assert_eq!(modifiers(&f, statements[0]), ModifierFlags::AMBIENT);
    let hoisted = variable_declaration(&f, variable_declarations(&f, statements[0])[0]);
    assert_eq!(text(&f, hoisted.name), "_default");
    assert!(f.arena().is_kind(hoisted.type_annotation, SyntaxKind::NumberKeyword));
    let exported = f
        .arena()
        .node_data::<ExportAssignmentData>(statements[1])
        .expect("export assignment")
        .expression;
    assert_eq!(text(&f, exported), "_default");
}

#[test]
fn test_module_without_remaining_exports_gets_empty_export() {
    let mut p = parser();
    let (import, specifier) = named_import(&mut p, "a", "./a");
    let initializer = call(&mut p, "make");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::empty(), NodeFlags::CONST, "local", initializer);
    let file = source_file(&mut p, "a.ts", vec![import, statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        hidden: [specifier].into_iter().collect(),
        inferred: [(declaration, SyntaxKind::NumberKeyword)].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(
        kinds(&f, &statements),
        vec![SyntaxKind::VariableStatement, SyntaxKind::ExportDeclaration]
    );
    assert_eq!(modifiers(&f, statements[0]), ModifierFlags::AMBIENT);
    let clause = f
        .arena()
        .node_data::<ExportDeclData>(statements[1])
        .expect("export declaration")
        .export_clause;
    let elements = f
        .arena()
        .node_data::<ListData>(clause)
        .expect("named exports")
        .elements;
    assert!(f.arena().list_nodes(elements).is_empty());
}

#[test]
fn test_ambient_namespace_members_lose_export() {
    let mut p = parser();
    let member = interface(&mut p, ModifierFlags::EXPORT, "I");
    let statements = p.node_list(vec![member]);
    let body = p.create_module_block(statements);
    let declare = p.create_modifiers_from_modifier_flags(ModifierFlags::AMBIENT);
    let name = p.create_identifier("N");
    let namespace = p.create_module_declaration(declare, name, body, NodeFlags::NAMESPACE);
    let file = source_file(&mut p, "a.ts", vec![namespace]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    assert_eq!(modifiers(&f, output), ModifierFlags::AMBIENT);
    let members = namespace_statements(&f, output);
    assert_eq!(kinds(&f, &members), vec![SyntaxKind::InterfaceDeclaration]);
    assert_eq!(modifiers(&f, members[0]), ModifierFlags::empty());
}

#[test]
fn test_namespace_with_local_declaration_gets_scope_marker() {
    let mut p = parser();
    let exported = interface(&mut p, ModifierFlags::EXPORT, "A");
    let local = interface(&mut p, ModifierFlags::empty(), "B");
    let statements = p.node_list(vec![exported, local]);
    let body = p.create_module_block(statements);
    let name = p.create_identifier("N");
    let namespace = p.create_module_declaration(None, name, body, NodeFlags::NAMESPACE);
    let file = source_file(&mut p, "a.ts", vec![namespace]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    assert_eq!(modifiers(&f, output), ModifierFlags::AMBIENT);
    let members = namespace_statements(&f, output);
    assert_eq!(
        kinds(&f, &members),
        vec![
            SyntaxKind::InterfaceDeclaration,
            SyntaxKind::InterfaceDeclaration,
            SyntaxKind::ExportDeclaration,
        ]
    );
    assert_eq!(modifiers(&f, members[0]), ModifierFlags::EXPORT);
    assert_eq!(modifiers(&f, members[1]), ModifierFlags::empty());
}

#[test]
fn test_invisible_namespace_member_is_omitted() {
    let mut p = parser();
    let exported = interface(&mut p, ModifierFlags::EXPORT, "A");
    let hidden = interface(&mut p, ModifierFlags::empty(), "Hidden");
    let statements = p.node_list(vec![exported, hidden]);
    let body = p.create_module_block(statements);
    let name = p.create_identifier("N");
    let namespace = p.create_module_declaration(None, name, body, NodeFlags::NAMESPACE);
    let file = source_file(&mut p, "a.ts", vec![namespace]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        hidden: [hidden].into_iter().collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert!(result.diagnostics.is_empty());
    let output = file_statements(&f, result.node)[0];
    let members = namespace_statements(&f, output);
    assert_eq!(kinds(&f, &members), vec![SyntaxKind::InterfaceDeclaration]);
    assert_eq!(declaration_name(&f, members[0]), "A");
}

#[test]
fn test_dotted_namespace_keeps_nested_body() {
    let mut p = parser();
    let member = interface(&mut p, ModifierFlags::EXPORT, "I");
    let statements = p.node_list(vec![member]);
    let block = p.create_module_block(statements);
    let b = p.create_identifier("B");
    let inner = p.create_module_declaration(
        None,
        b,
        block,
        NodeFlags::NAMESPACE | NodeFlags::NESTED_NAMESPACE,
    );
    let a = p.create_identifier("A");
    let outer = p.create_module_declaration(None, a, inner, NodeFlags::NAMESPACE);
    let file = source_file(&mut p, "a.ts", vec![outer]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    assert_eq!(declaration_name(&f, output), "A");
    let nested = f
        .arena()
        .node_data::<ModuleData>(output)
        .expect("module declaration")
        .body;
    assert!(f.arena().is_kind(nested, SyntaxKind::ModuleDeclaration));
    assert_eq!(declaration_name(&f, nested), "B");
    let members = namespace_statements(&f, nested);
    assert_eq!(kinds(&f, &members), vec![SyntaxKind::InterfaceDeclaration]);
    assert_eq!(declaration_name(&f, members[0]), "I");
}

#[test]
fn test_expando_function_emits_namespace() {
    let mut p = parser();
    let export = p.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let name = p.create_identifier("f");
    let parameters = p.node_list(Vec::new());
    let body = block(&mut p, Vec::new());
    let function =
        p.create_function_declaration(export, false, name, None, parameters, NodeIndex::NONE, body);
    let target = p.create_identifier("f");
    let property = p.create_identifier("a");
    let access = p.create_property_access_expression(target, property);
    let one = p.create_numeric_literal("1");
    let assignment = p.create_binary_expression(access, SyntaxKind::EqualsToken, one);
    let statement = p.create_expression_statement(assignment);
    let file = source_file(&mut p, "a.ts", vec![function, statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [
            (function, SyntaxKind::VoidKeyword),
            (assignment, SyntaxKind::NumberKeyword),
        ]
        .into_iter()
        .collect(),
        expandos: [(
            function,
            vec![ExpandoProperty {
                name: "a".to_string(),
                value_declaration: assignment,
            }],
        )]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(
        kinds(&f, &statements),
        vec![SyntaxKind::FunctionDeclaration, SyntaxKind::ModuleDeclaration]
    );
    let namespace = statements[1];
    assert!(
        f.arena()
            .get(namespace)
            .expect("namespace")
            .flags
            .contains(NodeFlags::NAMESPACE)
    );
    assert_eq!(declaration_name(&f, namespace), "f");
    assert_eq!(
        modifiers(&f, namespace),
        ModifierFlags::EXPORT | ModifierFlags::AMBIENT
    );

    let members = namespace_statements(&f, namespace);
    assert_eq!(kinds(&f, &members), vec![SyntaxKind::VariableStatement]);
    assert_eq!(modifiers(&f, members[0]), ModifierFlags::empty());
    let property = variable_declaration(&f, variable_declarations(&f, members[0])[0]);
    assert_eq!(text(&f, property.name), "a");
    assert!(f.arena().is_kind(property.type_annotation, SyntaxKind::NumberKeyword));
}

#[test]
fn test_expando_keyword_property_is_exported_by_alias() {
    let mut p = parser();
    let name = p.create_identifier("f");
    let parameters = p.node_list(Vec::new());
    let body = block(&mut p, Vec::new());
    let function =
        p.create_function_declaration(None, false, name, None, parameters, NodeIndex::NONE, body);
    let target = p.create_identifier("f");
    let property = p.create_identifier("a");
    let access = p.create_property_access_expression(target, property);
    let one = p.create_numeric_literal("1");
    let plain = p.create_binary_expression(access, SyntaxKind::EqualsToken, one);
    let target = p.create_identifier("f");
    let property = p.create_identifier("default");
    let access = p.create_property_access_expression(target, property);
    let two = p.create_numeric_literal("2");
    let keyword = p.create_binary_expression(access, SyntaxKind::EqualsToken, two);
    let first = p.create_expression_statement(plain);
    let second = p.create_expression_statement(keyword);
    let file = source_file(&mut p, "a.ts", vec![function, first, second]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        inferred: [
            (plain, SyntaxKind::NumberKeyword),
            (keyword, SyntaxKind::NumberKeyword),
        ]
        .into_iter()
        .collect(),
        expandos: [(
            function,
            vec![
                ExpandoProperty {
                    name: "a".to_string(),
                    value_declaration: plain,
                },
                ExpandoProperty {
                    name: "default".to_string(),
                    value_declaration: keyword,
                },
            ],
        )]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let namespace = file_statements(&f, result.node)[1];
    let members = namespace_statements(&f, namespace);
    assert_eq!(
        kinds(&f, &members),
        vec![
            SyntaxKind::VariableStatement,
            SyntaxKind::VariableStatement,
            SyntaxKind::ExportDeclaration,
        ]
    );
    assert_eq!(modifiers(&f, members[0]), ModifierFlags::EXPORT);
    assert_eq!(modifiers(&f, members[1]), ModifierFlags::empty());

    let local = variable_declaration(&f, variable_declarations(&f, members[1])[0]);
    let clause = f
        .arena()
        .node_data::<ExportDeclData>(members[2])
        .expect("export declaration")
        .export_clause;
    let elements = f.arena().node_data::<ListData>(clause).expect("named exports").elements;
    let specifier = *f
        .arena()
        .node_data::<SpecifierData>(f.arena().list_nodes(elements)[0])
        .expect("export specifier");
    assert_eq!(specifier.property_name, local.name);
    assert_eq!(text(&f, specifier.name), "default");
}

// =============================================================================
// Imports and late painting
// =============================================================================

#[test]
fn test_late_painted_import_is_restored_in_place() {
    let mut p = parser();
    let (import, specifier) = named_import(&mut p, "Foo", "./foo");
    let initializer = call(&mut p, "make");
    let (statement, declaration) =
        variable(&mut p, ModifierFlags::EXPORT, NodeFlags::CONST, "x", initializer);
    let file = source_file(&mut p, "a.ts", vec![import, statement]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        hidden: [specifier].into_iter().collect(),
        type_symbols: [(declaration, (SymbolId(7), "Foo"))].into_iter().collect(),
        symbols: [(
            SymbolId(7),
            (
                SymbolAccessibilityResult::accessible_with_aliases(vec![import]),
                vec![specifier],
            ),
        )]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert!(result.diagnostics.is_empty());
    let statements = file_statements(&f, result.node);
    assert_eq!(
        kinds(&f, &statements),
        vec![SyntaxKind::ImportDeclaration, SyntaxKind::VariableStatement]
    );
    let clause = f
        .arena()
        .node_data::<ImportDeclData>(statements[0])
        .expect("import")
        .import_clause;
    let bindings = f
        .arena()
        .node_data::<ImportClauseData>(clause)
        .expect("import clause")
        .named_bindings;
    let elements = f
        .arena()
        .node_data::<ListData>(bindings)
        .expect("named imports")
        .elements;
    assert_eq!(f.arena().list_nodes(elements), &[specifier]);

    let typed = variable_declaration(&f, variable_declarations(&f, statements[1])[0]);
    assert!(f.arena().is_kind(typed.type_annotation, SyntaxKind::TypeReference));
}

#[test]
fn test_late_painting_terminates_on_alias_cycle() {
    let mut p = parser();
    let n = p.create_identifier("N");
    let x = p.create_identifier("X");
    let n_x = p.create_qualified_name(n, x);
    let export = p.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let a = p.create_identifier("A");
    let import_a = p.create_import_equals_declaration(export, false, a, n_x);
    let m = p.create_identifier("M");
    let y = p.create_identifier("Y");
    let m_y = p.create_qualified_name(m, y);
    let n = p.create_identifier("N");
    let import_n = p.create_import_equals_declaration(None, false, n, m_y);
    let file = source_file(&mut p, "a.ts", vec![import_a, import_n]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        hidden: [import_n].into_iter().collect(),
        entities: [
            (
                n_x,
                (
                    SymbolAccessibilityResult::accessible_with_aliases(vec![import_n]),
                    vec![import_n],
                ),
            ),
            (
                m_y,
                (
                    SymbolAccessibilityResult::accessible_with_aliases(vec![import_a]),
                    Vec::new(),
                ),
            ),
        ]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let statements = file_statements(&f, result.node);
    assert_eq!(
        kinds(&f, &statements),
        vec![
            SyntaxKind::ImportEqualsDeclaration,
            SyntaxKind::ImportEqualsDeclaration,
        ]
    );
    assert_eq!(declaration_name(&f, statements[1]), "N");
}

#[test]
fn test_late_painting_follows_alias_chain() {
    // import B = A; import C = B; export import D = C;
    let mut p = parser();
    let b = p.create_identifier("B");
    let a_ref = p.create_identifier("A");
    let import_b = p.create_import_equals_declaration(None, false, b, a_ref);
    let c = p.create_identifier("C");
    let b_ref = p.create_identifier("B");
    let import_c = p.create_import_equals_declaration(None, false, c, b_ref);
    let export = p.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let d = p.create_identifier("D");
    let c_ref = p.create_identifier("C");
    let import_d = p.create_import_equals_declaration(export, false, d, c_ref);
    let file = source_file(&mut p, "a.ts", vec![import_b, import_c, import_d]);
    let mut f = emitter(p);
    let resolver = MockResolver {
        hidden: [import_b, import_c].into_iter().collect(),
        entities: [
            (
                c_ref,
                (
                    SymbolAccessibilityResult::accessible_with_aliases(vec![import_c]),
                    vec![import_c],
                ),
            ),
            (
                b_ref,
                (
                    SymbolAccessibilityResult::accessible_with_aliases(vec![import_b]),
                    vec![import_b],
                ),
            ),
        ]
        .into_iter()
        .collect(),
        ..MockResolver::default()
    };

    let result = run(
        &mut f,
        &resolver,
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    assert!(result.diagnostics.is_empty());
    let statements = file_statements(&f, result.node);
    assert_eq!(
        kinds(&f, &statements),
        vec![SyntaxKind::ImportEqualsDeclaration; 3]
    );
    let names: Vec<String> = statements
        .iter()
        .map(|&statement| declaration_name(&f, statement))
        .collect();
    assert_eq!(names, ["B", "C", "D"]);
}

/// `import type { T } from "./t" with { <key>: "<value>" };`
fn import_with_attribute(p: &mut NodeFactory, key: NodeIndex, value: &str) -> (NodeIndex, NodeIndex) {
    let t = p.create_identifier("T");
    let specifier = p.create_import_specifier(false, NodeIndex::NONE, t);
    let elements = p.node_list(vec![specifier]);
    let named = p.create_named_imports(elements);
    let clause = p.create_import_clause(true, NodeIndex::NONE, named);
    let value = p.create_string_literal(value, false);
    let attribute = p.create_import_attribute(key, value);
    let elements = p.node_list(vec![attribute]);
    let attributes = p.create_import_attributes(SyntaxKind::WithKeyword, elements, false);
    let module = p.create_string_literal("./t", false);
    (
        p.create_import_declaration(None, clause, module, attributes),
        attributes,
    )
}

#[test]
fn test_resolution_mode_attribute_is_reported_outside_nightly() {
    for is_nightly in [false, true] {
        let mut p = parser();
        let key = p.create_string_literal("resolution-mode", false);
        let (import, attributes) = import_with_attribute(&mut p, key, "import");
        let file = source_file(&mut p, "a.ts", vec![import]);
        let mut f = emitter(p);
        let options = DeclarationEmitOptions {
            is_nightly,
            ..DeclarationEmitOptions::default()
        };

        let result = run(
            &mut f,
            &MockResolver::default(),
            &MockHost::default(),
            options,
            file,
        );

        let output = file_statements(&f, result.node)[0];
        let kept = f
            .arena()
            .node_data::<ImportDeclData>(output)
            .expect("import")
            .attributes;
        assert_eq!(kept, attributes);
        if is_nightly {
            assert!(result.diagnostics.is_empty());
        } else {
            assert_eq!(result.diagnostics.len(), 1);
            assert_eq!(
                result.diagnostics[0].code,
                msg::RESOLUTION_MODE_ASSERTIONS_ARE_UNSTABLE.code
            );
        }
    }
}

#[test]
fn test_other_import_attributes_are_dropped() {
    let mut p = parser();
    let key = p.create_identifier("type");
    let (import, _) = import_with_attribute(&mut p, key, "json");
    let file = source_file(&mut p, "a.ts", vec![import]);
    let mut f = emitter(p);

    let result = run(
        &mut f,
        &MockResolver::default(),
        &MockHost::default(),
        DeclarationEmitOptions::default(),
        file,
    );

    let output = file_statements(&f, result.node)[0];
    let attributes = f
        .arena()
        .node_data::<ImportDeclData>(output)
        .expect("import")
        .attributes;
    assert!(attributes.is_none());
    assert!(result.diagnostics.is_empty());
}

// =============================================================================
// Bundles
// =============================================================================

#[test]
fn test_bundle_wraps_external_modules() {
    let mut p = parser();
    let a = interface(&mut p, ModifierFlags::EXPORT, "A");
    let sibling = p.create_string_literal("./b", false);
    let reexport =
        p.create_export_declaration(None, false, NodeIndex::NONE, sibling, NodeIndex::NONE);
    let module_file = source_file(&mut p, "a.ts", vec![a, reexport]);
    let b = interface(&mut p, ModifierFlags::empty(), "B");
    let script_file = source_file(&mut p, "b.ts", vec![b]);
    let c = interface(&mut p, ModifierFlags::empty(), "C");
    let declaration_file = source_file(&mut p, "c.d.ts", vec![c]);
    let bundle = p.create_bundle(vec![module_file, script_file, declaration_file]);
    let mut f = emitter(p);
    let host = MockHost {
        module_names: [(module_file, "lib/a".to_string())].into_iter().collect(),
        specifiers: [(reexport, "lib/b".to_string())].into_iter().collect(),
        ..MockHost::default()
    };

    let result = run(
        &mut f,
        &MockResolver::default(),
        &host,
        DeclarationEmitOptions::default(),
        bundle,
    );

    let files = f
        .arena()
        .node_data::<BundleData>(result.node)
        .expect("bundle")
        .source_files
        .clone();
    assert_eq!(files.len(), 2, "declaration files are not re-emitted");

    let wrapped = file_statements(&f, files[0]);
    assert_eq!(kinds(&f, &wrapped), vec![SyntaxKind::ModuleDeclaration]);
    assert_eq!(modifiers(&f, wrapped[0]), ModifierFlags::AMBIENT);
    let module_name = f
        .arena()
        .node_data::<ModuleData>(wrapped[0])
        .expect("ambient module")
        .name;
    assert_eq!(text(&f, module_name), "lib/a");

    let members = namespace_statements(&f, wrapped[0]);
    assert_eq!(
        kinds(&f, &members),
        vec![SyntaxKind::InterfaceDeclaration, SyntaxKind::ExportDeclaration]
    );
    assert_eq!(modifiers(&f, members[0]), ModifierFlags::EXPORT);
    let specifier = f
        .arena()
        .node_data::<ExportDeclData>(members[1])
        .expect("re-export")
        .module_specifier;
    assert_eq!(text(&f, specifier), "lib/b");

    let script = file_statements(&f, files[1]);
    assert_eq!(kinds(&f, &script), vec![SyntaxKind::InterfaceDeclaration]);
    assert_eq!(declaration_name(&f, script[0]), "B");
}
