//! Tests for the node factory: update identity, transform flags, node
//! arrays, generated names, cloning, parenthesization and converters.

use super::NodeFactory;
use crate::base::{NodeIndex, TextRange};
use crate::factory::transform_flags::propagate_child_flags;
use crate::flags::{GeneratedIdentifierFlags, ModifierFlags, NodeFactoryFlags, NodeFlags, TransformFlags};
use crate::node::{
    BinaryExprData, BlockData, ExpressionData, IdentifierData, LiteralData, SourceFileData,
};
use crate::node_arena::NodeArena;
use crate::syntax_kind::SyntaxKind;
use crate::visitor::{NodeVisitor, VisitResult, visit_each_child};

fn factory() -> NodeFactory {
    NodeFactory::new(NodeArena::new(), NodeFactoryFlags::empty())
}

fn auto_generate_id(factory: &NodeFactory, node: NodeIndex) -> u32 {
    factory
        .arena()
        .node_data::<IdentifierData>(node)
        .and_then(|data| data.auto_generate.as_ref())
        .map(|info| info.id)
        .expect("generated identifier")
}

// =============================================================================
// Update identity
// =============================================================================

#[test]
fn test_update_with_same_children_returns_same_node() {
    let mut f = factory();
    let a = f.create_identifier("a");
    let b = f.create_identifier("b");
    let sum = f.create_binary_expression(a, SyntaxKind::PlusToken, b);
    let count = f.arena().len();

    let updated = f.update_binary_expression(sum, a, SyntaxKind::PlusToken, b);

    assert_eq!(updated, sum);
    assert_eq!(f.arena().len(), count, "no node should be allocated");
}

#[test]
fn test_update_with_new_child_records_original_and_range() {
    let mut f = factory();
    let a = f.create_identifier("a");
    let b = f.create_identifier("b");
    let sum = f.create_binary_expression(a, SyntaxKind::PlusToken, b);
    f.set_text_range(sum, TextRange::new(4, 9));

    let c = f.create_identifier("c");
    let updated = f.update_binary_expression(sum, a, SyntaxKind::PlusToken, c);

    assert_ne!(updated, sum);
    assert_eq!(f.arena().original(updated), sum);
    let header = f.arena().get(updated).expect("updated node");
    assert_eq!((header.pos, header.end), (4, 9));
    let data = f.arena().node_data::<BinaryExprData>(updated).expect("binary data");
    assert_eq!(data.right, c);
}

#[test]
fn test_parser_factory_skips_original_links() {
    let mut f = NodeFactory::for_parser(NodeArena::new());
    let a = f.create_identifier("a");
    let statement = f.create_expression_statement(a);
    let b = f.create_identifier("b");

    let updated = f.update_expression_statement(statement, b);

    assert_ne!(updated, statement);
    assert!(f.arena().original(updated).is_none());
    let header = f.arena().get(updated).expect("updated node");
    assert!(!header.flags.contains(NodeFlags::SYNTHESIZED));
}

#[test]
fn test_synthesized_nodes_are_flagged() {
    let mut f = factory();
    let id = f.create_identifier("x");
    let header = f.arena().get(id).expect("identifier");
    assert!(header.flags.contains(NodeFlags::SYNTHESIZED));
}

#[test]
#[should_panic(expected = "expected one of")]
fn test_update_through_wrong_entry_point_panics() {
    let mut f = factory();
    let id = f.create_identifier("x");
    let statements = f.node_list(Vec::new());
    f.update_block(id, statements);
}

// =============================================================================
// Transform flags
// =============================================================================

#[test]
fn test_lexical_this_escapes_arrow_but_not_function() {
    let mut f = factory();

    let this_in_arrow = f.create_this();
    let params = f.node_list(Vec::new());
    let arrow = f.create_arrow_function(None, None, params, NodeIndex::NONE, this_in_arrow);
    assert!(f.arena().transform_flags(arrow).contains(TransformFlags::CONTAINS_LEXICAL_THIS));
    assert!(
        propagate_child_flags(f.arena(), arrow).contains(TransformFlags::CONTAINS_LEXICAL_THIS),
        "an arrow function captures the enclosing `this`"
    );

    let this_in_function = f.create_this();
    let ret = f.create_return_statement(this_in_function);
    let statements = f.node_list(vec![ret]);
    let body = f.create_block(statements, true);
    let params = f.node_list(Vec::new());
    let function = f.create_function_expression(
        None,
        false,
        NodeIndex::NONE,
        None,
        params,
        NodeIndex::NONE,
        body,
    );
    assert!(f.arena().transform_flags(function).contains(TransformFlags::CONTAINS_LEXICAL_THIS));
    assert!(
        !propagate_child_flags(f.arena(), function).contains(TransformFlags::CONTAINS_LEXICAL_THIS),
        "a function expression binds its own `this`"
    );
}

#[test]
fn test_type_nodes_only_propagate_typescript() {
    let mut f = factory();
    let string_type = f.create_keyword_type_node(SyntaxKind::StringKeyword);
    let array = f.create_array_type_node(string_type);

    assert_eq!(
        propagate_child_flags(f.arena(), array),
        TransformFlags::CONTAINS_TYPESCRIPT
    );
}

#[test]
fn test_const_declaration_list_marks_block_scoped_binding() {
    let mut f = factory();
    let name = f.create_identifier("x");
    let one = f.create_numeric_literal("1");
    let declaration = f.create_variable_declaration(name, false, NodeIndex::NONE, one);
    let declarations = f.node_list(vec![declaration]);
    let list = f.create_variable_declaration_list(declarations, NodeFlags::CONST);

    let flags = f.arena().transform_flags(list);
    assert!(flags.contains(TransformFlags::CONTAINS_ES2015));
    assert!(flags.contains(TransformFlags::CONTAINS_BLOCK_SCOPED_BINDING));
    let header = f.arena().get(list).expect("declaration list");
    assert!(header.flags.contains(NodeFlags::CONST));
}

#[test]
fn test_declare_variable_statement_is_typescript_only() {
    let mut f = factory();
    let name = f.create_identifier("x");
    let declaration = f.create_variable_declaration(name, false, NodeIndex::NONE, NodeIndex::NONE);
    let declarations = f.node_list(vec![declaration]);
    let list = f.create_variable_declaration_list(declarations, NodeFlags::LET);
    let modifiers = f.create_modifiers_from_modifier_flags(ModifierFlags::AMBIENT);

    let statement = f.create_variable_statement(modifiers, list);

    assert_eq!(
        f.arena().transform_flags(statement),
        TransformFlags::CONTAINS_TYPESCRIPT
    );
}

// =============================================================================
// Node arrays
// =============================================================================

#[test]
fn test_node_array_caches_aggregate_flags() {
    let mut f = factory();
    let spread_target = f.create_identifier("rest");
    let spread = f.create_spread_element(spread_target);
    let list = f.node_list(vec![spread]);

    let cached = f
        .arena()
        .get_list(list)
        .and_then(|array| array.transform_flags)
        .expect("flags cached on creation");
    assert!(cached.contains(TransformFlags::CONTAINS_REST_OR_SPREAD));
}

#[test]
fn test_existing_list_is_reused_unless_trailing_comma_differs() {
    let mut f = factory();
    let a = f.create_identifier("a");
    let list = f.node_list(vec![a]);

    assert_eq!(f.create_node_array(list, None), list);
    assert_eq!(f.create_node_array(list, Some(false)), list);

    let with_comma = f.create_node_array(list, Some(true));
    assert_ne!(with_comma, list);
    let array = f.arena().get_list(with_comma).expect("copied list");
    assert!(array.has_trailing_comma);
    assert_eq!(array.nodes, vec![a]);
}

// =============================================================================
// Generated names
// =============================================================================

#[test]
fn test_generated_names_never_share_an_id() {
    let mut first = factory();
    let mut second = factory();

    let a = first.create_temp_variable(false, None, None);
    let b = first.create_loop_variable(false);
    let c = second.create_unique_name("value", GeneratedIdentifierFlags::empty(), None, None);

    let ids = [
        auto_generate_id(&first, a),
        auto_generate_id(&first, b),
        auto_generate_id(&second, c),
    ];
    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);
    assert_ne!(ids[0], ids[2]);
}

#[test]
fn test_generated_name_for_node_uses_identifier_text() {
    let mut f = factory();
    let source = f.create_identifier("foo");
    let generated =
        f.get_generated_name_for_node(source, GeneratedIdentifierFlags::empty(), None, None);

    let data = f.arena().node_data::<IdentifierData>(generated).expect("identifier");
    assert_eq!(data.escaped_text, "foo");
    let info = data.auto_generate.as_ref().expect("auto-generate info");
    assert_eq!(info.node, source);
    assert!(info.flags.contains(GeneratedIdentifierFlags::NODE));
}

#[test]
#[should_panic(expected = "file-level names must also be optimistic")]
fn test_file_level_unique_name_requires_optimistic() {
    let mut f = factory();
    f.create_unique_name("x", GeneratedIdentifierFlags::FILE_LEVEL, None, None);
}

#[test]
#[should_panic(expected = "must be #")]
fn test_private_identifier_requires_hash() {
    let mut f = factory();
    f.create_private_identifier("secret");
}

#[test]
#[should_panic(expected = "invalid token kind")]
fn test_create_token_rejects_node_kinds() {
    let mut f = factory();
    f.create_token(SyntaxKind::Block);
}

#[test]
fn test_numeric_literal_from_value_matches_js_number_text() {
    let mut f = factory();
    let cases = [
        (42.0, "42"),
        (0.5, "0.5"),
        (0.000001, "0.000001"),
        (1.5e-7, "1.5e-7"),
        (123456789012345680000.0, "123456789012345680000"),
        (1e21, "1e+21"),
        (2.5e30, "2.5e+30"),
    ];
    for (value, expected) in cases {
        let literal = f.create_numeric_literal_from_value(value);
        let data = f.arena().node_data::<LiteralData>(literal).expect("numeric literal");
        assert_eq!(data.text, expected, "text for {value}");
    }
}

#[test]
fn test_modifiers_from_flags_use_canonical_order() {
    let mut f = factory();
    let modifiers = f
        .create_modifiers_from_modifier_flags(ModifierFlags::STATIC | ModifierFlags::EXPORT)
        .expect("modifiers");
    let kinds: Vec<_> = f
        .arena()
        .list_nodes(modifiers)
        .iter()
        .filter_map(|&m| f.arena().kind(m))
        .collect();
    assert_eq!(kinds, vec![SyntaxKind::ExportKeyword, SyntaxKind::StaticKeyword]);
    assert!(f.create_modifiers_from_modifier_flags(ModifierFlags::empty()).is_none());
}

// =============================================================================
// Cloning
// =============================================================================

#[test]
fn test_clone_node_copies_shape_and_links_original() {
    let mut f = factory();
    let id = f.create_identifier("value");
    f.set_text_range(id, TextRange::new(10, 15));

    let clone = f.clone_node(id);

    assert_ne!(clone, id);
    assert_eq!(f.arena().original(clone), id);
    assert_eq!(f.arena().identifier_text(clone), Some("value"));
    assert_eq!(f.arena().transform_flags(clone), f.arena().transform_flags(id));
    let header = f.arena().get(clone).expect("clone");
    assert_eq!((header.pos, header.end), (10, 15));
    assert!(!header.flags.contains(NodeFlags::SYNTHESIZED));
}

// =============================================================================
// Parenthesization
// =============================================================================

#[test]
fn test_lower_precedence_left_operand_is_parenthesized() {
    let mut f = factory();
    let a = f.create_identifier("a");
    let b = f.create_identifier("b");
    let sum = f.create_binary_expression(a, SyntaxKind::PlusToken, b);
    let c = f.create_identifier("c");

    let product = f.create_binary_expression(sum, SyntaxKind::AsteriskToken, c);

    let data = f.arena().node_data::<BinaryExprData>(product).expect("binary");
    assert_eq!(f.arena().kind(data.left), Some(SyntaxKind::ParenthesizedExpression));
    let inner = f.arena().node_data::<ExpressionData>(data.left).expect("parens");
    assert_eq!(inner.expression, sum);
}

#[test]
fn test_parser_factory_does_not_parenthesize() {
    let mut f = NodeFactory::for_parser(NodeArena::new());
    let a = f.create_identifier("a");
    let b = f.create_identifier("b");
    let sum = f.create_binary_expression(a, SyntaxKind::PlusToken, b);
    let c = f.create_identifier("c");

    let product = f.create_binary_expression(sum, SyntaxKind::AsteriskToken, c);

    let data = f.arena().node_data::<BinaryExprData>(product).expect("binary");
    assert_eq!(data.left, sum);
}

#[test]
fn test_object_literal_statement_is_parenthesized() {
    let mut f = factory();
    let properties = f.node_list(Vec::new());
    let object = f.create_object_literal_expression(properties, false);

    let statement = f.create_expression_statement(object);

    let data = f.arena().node_data::<ExpressionData>(statement).expect("statement");
    assert_eq!(f.arena().kind(data.expression), Some(SyntaxKind::ParenthesizedExpression));
}

// =============================================================================
// Converters
// =============================================================================

#[test]
fn test_concise_body_converts_to_return_block() {
    let mut f = factory();
    let value = f.create_identifier("value");
    let converters = f.converters();

    let block = converters.convert_to_function_block(&mut f, value, false);

    assert_eq!(f.arena().kind(block), Some(SyntaxKind::Block));
    let data = f.arena().node_data::<BlockData>(block).expect("block");
    let statements = f.arena().list_nodes(data.statements).to_vec();
    assert_eq!(statements.len(), 1);
    assert_eq!(f.arena().kind(statements[0]), Some(SyntaxKind::ReturnStatement));
    assert_eq!(converters.convert_to_function_block(&mut f, block, false), block);
}

// =============================================================================
// Statements, source files and modifiers
// =============================================================================

#[test]
fn test_source_file_detects_module_and_declaration_file() {
    let mut f = factory();
    let name = f.create_identifier("x");
    let declaration = f.create_variable_declaration(name, false, NodeIndex::NONE, NodeIndex::NONE);
    let declarations = f.node_list(vec![declaration]);
    let list = f.create_variable_declaration_list(declarations, NodeFlags::CONST);
    let modifiers = f.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let statement = f.create_variable_statement(modifiers, list);
    let statements = f.node_list(vec![statement]);
    let eof = f.create_token(SyntaxKind::EndOfFileToken);

    let file = f.create_source_file("lib.d.ts", statements, eof);

    let data = f.arena().node_data::<SourceFileData>(file).expect("source file");
    assert!(data.is_declaration_file);
    assert!(data.is_external_module);
}

#[test]
fn test_script_without_exports_is_not_a_module() {
    let mut f = factory();
    let empty = f.create_empty_statement();
    let statements = f.node_list(vec![empty]);
    let eof = f.create_token(SyntaxKind::EndOfFileToken);

    let file = f.create_source_file("script.ts", statements, eof);

    assert!(!f.arena().is_external_module(file));
    let data = f.arena().node_data::<SourceFileData>(file).expect("source file");
    assert!(!data.is_declaration_file);
}

#[test]
fn test_update_modifier_flags_replaces_modifiers() {
    let mut f = factory();
    let name = f.create_identifier("run");
    let params = f.node_list(Vec::new());
    let function = f.create_function_declaration(
        None,
        false,
        name,
        None,
        params,
        NodeIndex::NONE,
        NodeIndex::NONE,
    );

    let exported = f.update_modifier_flags(function, ModifierFlags::EXPORT | ModifierFlags::AMBIENT);

    assert_ne!(exported, function);
    assert_eq!(
        f.arena().syntactic_modifier_flags(exported),
        ModifierFlags::EXPORT | ModifierFlags::AMBIENT
    );
    assert_eq!(f.arena().original(exported), function);
}

// =============================================================================
// Visitor
// =============================================================================

struct Rename {
    factory: NodeFactory,
    from: &'static str,
    to: &'static str,
}

impl NodeVisitor for Rename {
    fn factory(&mut self) -> &mut NodeFactory {
        &mut self.factory
    }

    fn visit(&mut self, node: NodeIndex) -> VisitResult {
        if self.factory.arena().identifier_text(node) == Some(self.from) {
            return self.factory.create_identifier(self.to).into();
        }
        visit_each_child(self, node).into()
    }
}

struct DropEmpty {
    factory: NodeFactory,
}

impl NodeVisitor for DropEmpty {
    fn factory(&mut self) -> &mut NodeFactory {
        &mut self.factory
    }

    fn visit(&mut self, node: NodeIndex) -> VisitResult {
        if self.factory.arena().is_kind(node, SyntaxKind::EmptyStatement) {
            return VisitResult::Removed;
        }
        visit_each_child(self, node).into()
    }
}

fn two_statement_file(f: &mut NodeFactory) -> (NodeIndex, NodeIndex, NodeIndex) {
    let a = f.create_identifier("a");
    let b = f.create_identifier("b");
    let sum = f.create_binary_expression(a, SyntaxKind::PlusToken, b);
    let first = f.create_expression_statement(sum);
    let c = f.create_identifier("c");
    let second = f.create_expression_statement(c);
    let statements = f.node_list(vec![first, second]);
    let eof = f.create_token(SyntaxKind::EndOfFileToken);
    let file = f.create_source_file("input.ts", statements, eof);
    (file, first, second)
}

#[test]
fn test_visitor_without_changes_returns_same_tree() {
    let mut f = factory();
    let (file, _, _) = two_statement_file(&mut f);
    let mut visitor = Rename {
        factory: f,
        from: "missing",
        to: "unused",
    };

    assert_eq!(visit_each_child(&mut visitor, file), file);
}

/// `interface`, `type`, `enum`, `class`, `namespace` and `function`
/// declarations with nested type nodes and statements.
fn wide_declaration_file(f: &mut NodeFactory) -> NodeIndex {
    // interface I<T extends string = "a"> { p?: T[]; m(x: number): string | undefined; }
    let t = f.create_identifier("T");
    let string = f.create_keyword_type_node(SyntaxKind::StringKeyword);
    let a = f.create_string_literal("a", false);
    let a_type = f.create_literal_type_node(a);
    let type_parameter = f.create_type_parameter_declaration(None, t, string, a_type);
    let type_parameters = f.node_list(vec![type_parameter]);
    let p = f.create_identifier("p");
    let t_ref_name = f.create_identifier("T");
    let t_ref = f.create_type_reference_node(t_ref_name, None);
    let t_array = f.create_array_type_node(t_ref);
    let property = f.create_property_signature(None, p, true, t_array);
    let m = f.create_identifier("m");
    let x = f.create_identifier("x");
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let x_param = f.create_parameter_declaration(None, false, x, false, number, NodeIndex::NONE);
    let params = f.node_list(vec![x_param]);
    let string = f.create_keyword_type_node(SyntaxKind::StringKeyword);
    let undefined = f.create_keyword_type_node(SyntaxKind::UndefinedKeyword);
    let union_members = f.node_list(vec![string, undefined]);
    let union = f.create_union_type_node(union_members);
    let method = f.create_method_signature(None, m, false, None, params, union);
    let members = f.node_list(vec![property, method]);
    let name = f.create_identifier("I");
    let export = f.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let interface = f.create_interface_declaration(export, name, Some(type_parameters), None, members);

    // type Alias = { k: [number, boolean] }["k"] extends readonly unknown[] ? keyof I<string> : never;
    let k = f.create_identifier("k");
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let boolean = f.create_keyword_type_node(SyntaxKind::BooleanKeyword);
    let elements = f.node_list(vec![number, boolean]);
    let tuple = f.create_tuple_type_node(elements);
    let k_signature = f.create_property_signature(None, k, false, tuple);
    let literal_members = f.node_list(vec![k_signature]);
    let literal = f.create_type_literal_node(literal_members);
    let k_text = f.create_string_literal("k", false);
    let k_type = f.create_literal_type_node(k_text);
    let indexed = f.create_indexed_access_type_node(literal, k_type);
    let unknown = f.create_keyword_type_node(SyntaxKind::UnknownKeyword);
    let unknown_array = f.create_array_type_node(unknown);
    let readonly = f.create_type_operator_node(SyntaxKind::ReadonlyKeyword, unknown_array);
    let i_name = f.create_identifier("I");
    let string = f.create_keyword_type_node(SyntaxKind::StringKeyword);
    let type_arguments = f.node_list(vec![string]);
    let i_ref = f.create_type_reference_node(i_name, Some(type_arguments));
    let keyof = f.create_type_operator_node(SyntaxKind::KeyOfKeyword, i_ref);
    let never = f.create_keyword_type_node(SyntaxKind::NeverKeyword);
    let conditional = f.create_conditional_type_node(indexed, readonly, keyof, never);
    let name = f.create_identifier("Alias");
    let alias = f.create_type_alias_declaration(None, name, None, conditional);

    // enum E { A = 1, B }
    let a = f.create_identifier("A");
    let one = f.create_numeric_literal("1");
    let first = f.create_enum_member(a, one);
    let b = f.create_identifier("B");
    let second = f.create_enum_member(b, NodeIndex::NONE);
    let enum_members = f.node_list(vec![first, second]);
    let name = f.create_identifier("E");
    let enumeration = f.create_enum_declaration(None, name, enum_members);

    // class C extends Base implements I<number> { ... }
    let base = f.create_identifier("Base");
    let base_type = f.create_expression_with_type_arguments(base, None);
    let extends_types = f.node_list(vec![base_type]);
    let extends = f.create_heritage_clause(SyntaxKind::ExtendsKeyword, extends_types);
    let i_name = f.create_identifier("I");
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let i_arguments = f.node_list(vec![number]);
    let i_type = f.create_expression_with_type_arguments(i_name, Some(i_arguments));
    let implements_types = f.node_list(vec![i_type]);
    let implements = f.create_heritage_clause(SyntaxKind::ImplementsKeyword, implements_types);
    let heritage = f.node_list(vec![extends, implements]);

    // private x: number = 1;
    let private = f.create_modifiers_from_modifier_flags(ModifierFlags::PRIVATE);
    let x = f.create_identifier("x");
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let one = f.create_numeric_literal("1");
    let field = f.create_property_declaration(private, x, false, false, number, one);
    // constructor(y: string) {}
    let y = f.create_identifier("y");
    let string = f.create_keyword_type_node(SyntaxKind::StringKeyword);
    let y_param = f.create_parameter_declaration(None, false, y, false, string, NodeIndex::NONE);
    let ctor_params = f.node_list(vec![y_param]);
    let empty = f.node_list(Vec::new());
    let ctor_body = f.create_block(empty, false);
    let constructor = f.create_constructor_declaration(None, ctor_params, ctor_body);
    // get v(): number { return this.x; }
    let this = f.create_this();
    let x = f.create_identifier("x");
    let access = f.create_property_access_expression(this, x);
    let ret = f.create_return_statement(access);
    let getter_statements = f.node_list(vec![ret]);
    let getter_body = f.create_block(getter_statements, true);
    let v = f.create_identifier("v");
    let no_params = f.node_list(Vec::new());
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let getter = f.create_get_accessor_declaration(None, v, no_params, number, getter_body);
    // run(): void { for (const e of list) { if (e) return; } }
    let e = f.create_identifier("e");
    let e_decl = f.create_variable_declaration(e, false, NodeIndex::NONE, NodeIndex::NONE);
    let e_decls = f.node_list(vec![e_decl]);
    let e_list = f.create_variable_declaration_list(e_decls, NodeFlags::CONST);
    let list = f.create_identifier("list");
    let e_ref = f.create_identifier("e");
    let bare_return = f.create_return_statement(NodeIndex::NONE);
    let guard = f.create_if_statement(e_ref, bare_return, NodeIndex::NONE);
    let loop_statements = f.node_list(vec![guard]);
    let loop_body = f.create_block(loop_statements, true);
    let for_of = f.create_for_of_statement(false, e_list, list, loop_body);
    let run_statements = f.node_list(vec![for_of]);
    let run_body = f.create_block(run_statements, true);
    let run = f.create_identifier("run");
    let no_params = f.node_list(Vec::new());
    let void = f.create_keyword_type_node(SyntaxKind::VoidKeyword);
    let run_method = f.create_method_declaration(None, false, run, false, None, no_params, void, run_body);
    let class_members = f.node_list(vec![field, constructor, getter, run_method]);
    let name = f.create_identifier("C");
    let class = f.create_class_declaration(None, name, None, Some(heritage), class_members);

    // namespace N { export const k = g(1); }
    let g = f.create_identifier("g");
    let one = f.create_numeric_literal("1");
    let arguments = f.node_list(vec![one]);
    let call = f.create_call_expression(g, None, arguments);
    let k = f.create_identifier("k");
    let k_decl = f.create_variable_declaration(k, false, NodeIndex::NONE, call);
    let k_decls = f.node_list(vec![k_decl]);
    let k_list = f.create_variable_declaration_list(k_decls, NodeFlags::CONST);
    let export = f.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
    let k_statement = f.create_variable_statement(export, k_list);
    let block_statements = f.node_list(vec![k_statement]);
    let block = f.create_module_block(block_statements);
    let name = f.create_identifier("N");
    let namespace = f.create_module_declaration(None, name, block, NodeFlags::NAMESPACE);

    // function fn(a: number): number { return a; }
    let a = f.create_identifier("a");
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let a_param = f.create_parameter_declaration(None, false, a, false, number, NodeIndex::NONE);
    let fn_params = f.node_list(vec![a_param]);
    let a_ref = f.create_identifier("a");
    let ret = f.create_return_statement(a_ref);
    let fn_statements = f.node_list(vec![ret]);
    let fn_body = f.create_block(fn_statements, true);
    let name = f.create_identifier("fn");
    let number = f.create_keyword_type_node(SyntaxKind::NumberKeyword);
    let function = f.create_function_declaration(None, false, name, None, fn_params, number, fn_body);

    let statements = f.node_list(vec![interface, alias, enumeration, class, namespace, function]);
    let eof = f.create_token(SyntaxKind::EndOfFileToken);
    f.create_source_file("wide.ts", statements, eof)
}

#[test]
fn test_identity_visit_keeps_every_declaration_kind() {
    let mut f = factory();
    let file = wide_declaration_file(&mut f);
    let count = f.arena().len();
    let mut visitor = Rename {
        factory: f,
        from: "missing",
        to: "unused",
    };

    let result = visit_each_child(&mut visitor, file);

    assert_eq!(result, file);
    assert_eq!(visitor.factory.arena().len(), count, "no node should be allocated");
}

#[test]
fn test_visitor_rebuilds_only_the_changed_path() {
    let mut f = factory();
    let (file, first, second) = two_statement_file(&mut f);
    let mut visitor = Rename {
        factory: f,
        from: "a",
        to: "z",
    };

    let result = visit_each_child(&mut visitor, file);

    let arena = visitor.factory.arena();
    assert_ne!(result, file);
    let data = arena.node_data::<SourceFileData>(result).expect("source file");
    let statements = arena.list_nodes(data.statements);
    assert_eq!(statements.len(), 2);
    assert_ne!(statements[0], first);
    assert_eq!(statements[1], second, "untouched statement keeps its identity");
    assert_eq!(arena.original(statements[0]), first);
    let expression = arena.node_data::<ExpressionData>(statements[0]).expect("statement");
    let binary = arena.node_data::<BinaryExprData>(expression.expression).expect("binary");
    assert_eq!(arena.identifier_text(binary.left), Some("z"));
}

#[test]
fn test_visitor_removes_list_elements() {
    let mut f = factory();
    let empty = f.create_empty_statement();
    let debugger = f.create_debugger_statement();
    let statements = f.node_list(vec![empty, debugger]);
    let block = f.create_block(statements, true);
    let mut visitor = DropEmpty { factory: f };

    let result = visit_each_child(&mut visitor, block);

    let arena = visitor.factory.arena();
    let data = arena.node_data::<BlockData>(result).expect("block");
    assert_eq!(arena.list_nodes(data.statements), &[debugger]);
}

#[test]
fn test_visit_result_from_none_is_removed() {
    assert_eq!(VisitResult::from(NodeIndex::NONE), VisitResult::Removed);
    assert_eq!(VisitResult::from(Vec::new()), VisitResult::Removed);
}
