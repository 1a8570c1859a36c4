//! Declaration Emit Benchmark
//!
//! Measures node factory construction and declaration transform throughput
//! over generated source files.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tsz_dts::tsz_ast::{ModifierFlags, NodeFlags, SyntaxKind};
use tsz_dts::tsz_declarations::{
    AllAccessorDeclarations, ConstantValue, DeclarationEmitHost, DeclarationEmitOptions,
    EmitResolver, ExpandoProperty, ModuleSpecifierRewriter, SymbolAccessibilityResult, SymbolId,
    SymbolMeaning, SymbolTracker,
};
use tsz_dts::{NodeArena, NodeFactory, NodeFactoryFlags, NodeIndex, emit_declarations};

// =============================================================================
// Resolver
// =============================================================================

/// Everything is visible and every missing type is `number`.
struct NumberResolver;

impl EmitResolver for NumberResolver {
    fn is_declaration_visible(&self, _node: NodeIndex) -> bool {
        true
    }

    fn is_symbol_accessible(
        &self,
        _symbol: SymbolId,
        _enclosing_declaration: NodeIndex,
        _meaning: SymbolMeaning,
        _should_compute_aliases_to_make_visible: bool,
    ) -> SymbolAccessibilityResult {
        SymbolAccessibilityResult::accessible()
    }

    fn is_entity_name_visible(
        &self,
        _entity_name: NodeIndex,
        _enclosing_declaration: NodeIndex,
    ) -> SymbolAccessibilityResult {
        SymbolAccessibilityResult::accessible()
    }

    fn create_type_of_declaration(
        &self,
        factory: &mut NodeFactory,
        _declaration: NodeIndex,
        _enclosing_declaration: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        Some(factory.create_keyword_type_node(SyntaxKind::NumberKeyword))
    }

    fn create_return_type_of_signature_declaration(
        &self,
        factory: &mut NodeFactory,
        _signature: NodeIndex,
        _enclosing_declaration: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        Some(factory.create_keyword_type_node(SyntaxKind::NumberKeyword))
    }

    fn create_type_of_expression(
        &self,
        factory: &mut NodeFactory,
        _expression: NodeIndex,
        _enclosing_declaration: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        Some(factory.create_keyword_type_node(SyntaxKind::NumberKeyword))
    }

    fn create_literal_const_value(
        &self,
        factory: &mut NodeFactory,
        _node: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> NodeIndex {
        factory.create_numeric_literal("0")
    }

    fn get_constant_value(&self, _node: NodeIndex) -> Option<ConstantValue> {
        None
    }

    fn is_literal_const_declaration(&self, _node: NodeIndex) -> bool {
        false
    }

    fn get_all_accessor_declarations(&self, accessor: NodeIndex) -> AllAccessorDeclarations {
        AllAccessorDeclarations::single(accessor, true)
    }

    fn is_implementation_of_overload(&self, _node: NodeIndex) -> bool {
        false
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

    fn is_expando_function_declaration(&self, _node: NodeIndex) -> bool {
        false
    }

    fn get_properties_of_container_function(&self, _node: NodeIndex) -> Vec<ExpandoProperty> {
        Vec::new()
    }

    fn is_import_required_by_augmentation(&self, _node: NodeIndex) -> bool {
        false
    }
}

struct BenchHost;

impl ModuleSpecifierRewriter for BenchHost {
    fn external_module_name_for_declaration(&self, _declaration: NodeIndex) -> Option<String> {
        None
    }
}

impl DeclarationEmitHost for BenchHost {
    fn resolved_external_module_name(&self, _source_file: NodeIndex) -> String {
        "bench".to_string()
    }
}

// =============================================================================
// Generated Sources
// =============================================================================

/// Build a module with `count` functions, classes and variables, each with
/// a body or initializer for the transform to strip.
fn build_module(factory: &mut NodeFactory, count: usize) -> NodeIndex {
    let mut statements = Vec::with_capacity(count * 3);
    for i in 0..count {
        // export function fn{i}(x: number) { return x + i; }
        let number = factory.create_keyword_type_node(SyntaxKind::NumberKeyword);
        let x = factory.create_identifier("x");
        let parameter =
            factory.create_parameter_declaration(None, false, x, false, number, NodeIndex::NONE);
        let parameters = factory.node_list(vec![parameter]);
        let x = factory.create_identifier("x");
        let offset = factory.create_numeric_literal(&i.to_string());
        let sum = factory.create_binary_expression(x, SyntaxKind::PlusToken, offset);
        let ret = factory.create_return_statement(sum);
        let body_statements = factory.node_list(vec![ret]);
        let body = factory.create_block(body_statements, true);
        let export = factory.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
        let name = factory.create_identifier(&format!("fn{i}"));
        statements.push(factory.create_function_declaration(
            export,
            false,
            name,
            None,
            parameters,
            NodeIndex::NONE,
            body,
        ));

        // export class C{i} { private p = 1; value = 2; }
        let private = factory.create_modifiers_from_modifier_flags(ModifierFlags::PRIVATE);
        let p = factory.create_identifier("p");
        let one = factory.create_numeric_literal("1");
        let hidden =
            factory.create_property_declaration(private, p, false, false, NodeIndex::NONE, one);
        let value = factory.create_identifier("value");
        let two = factory.create_numeric_literal("2");
        let visible =
            factory.create_property_declaration(None, value, false, false, NodeIndex::NONE, two);
        let members = factory.node_list(vec![hidden, visible]);
        let export = factory.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
        let name = factory.create_identifier(&format!("C{i}"));
        statements.push(factory.create_class_declaration(export, name, None, None, members));

        // export let v{i} = fn{i}(1);
        let callee = factory.create_identifier(&format!("fn{i}"));
        let one = factory.create_numeric_literal("1");
        let arguments = factory.node_list(vec![one]);
        let call = factory.create_call_expression(callee, None, arguments);
        let name = factory.create_identifier(&format!("v{i}"));
        let declaration = factory.create_variable_declaration(name, false, NodeIndex::NONE, call);
        let declarations = factory.node_list(vec![declaration]);
        let list = factory.create_variable_declaration_list(declarations, NodeFlags::LET);
        let export = factory.create_modifiers_from_modifier_flags(ModifierFlags::EXPORT);
        statements.push(factory.create_variable_statement(export, list));
    }

    let statements = factory.node_list(statements);
    let eof = factory.create_token(SyntaxKind::EndOfFileToken);
    let file = factory.create_source_file("bench.ts", statements, eof);
    factory.arena_mut().set_parent_recursive(file);
    file
}

// =============================================================================
// Factory Benchmarks
// =============================================================================

/// Benchmark: Build a module through the factory
fn bench_factory_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory_build");

    for count in [10usize, 100, 500] {
        group.throughput(Throughput::Elements((count * 3) as u64));
        group.bench_with_input(BenchmarkId::new("statements", count), &count, |b, &count| {
            b.iter(|| {
                let mut factory = NodeFactory::for_parser(NodeArena::new());
                let file = build_module(&mut factory, count);
                black_box((file, factory.into_arena()))
            })
        });
    }

    group.finish();
}

// =============================================================================
// Declaration Transform Benchmarks
// =============================================================================

/// Benchmark: Transform a module to its declaration tree
fn bench_declaration_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("declaration_transform");

    for count in [10usize, 100, 500] {
        group.throughput(Throughput::Elements((count * 3) as u64));
        group.bench_with_input(BenchmarkId::new("statements", count), &count, |b, &count| {
            b.iter(|| {
                let mut parser = NodeFactory::for_parser(NodeArena::new());
                let file = build_module(&mut parser, count);
                let mut factory =
                    NodeFactory::new(parser.into_arena(), NodeFactoryFlags::empty());
                let result = emit_declarations(
                    &mut factory,
                    &NumberResolver,
                    &BenchHost,
                    DeclarationEmitOptions::default(),
                    file,
                );
                black_box(result.node)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_factory_build, bench_declaration_transform);
criterion_main!(benches);
