//! Checker-side queries the declaration transform depends on.
//!
//! The transform never looks at symbols or types itself. Everything it needs
//! to know about visibility, accessibility and inferred types comes through
//! `EmitResolver`; type serialization reports back through `SymbolTracker`.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use tsz_ast::{NodeFactory, NodeIndex};
use tsz_common::Diagnostic;

/// Opaque checker symbol handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

bitflags! {
    /// Which declaration spaces a symbol reference is resolved in.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SymbolMeaning: u8 {
        const VALUE     = 1 << 0;
        const TYPE      = 1 << 1;
        const NAMESPACE = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolAccessibility {
    Accessible,
    NotAccessible,
    CannotBeNamed,
    NotResolved,
}

/// Answer to "can this symbol be named from here".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolAccessibilityResult {
    pub accessibility: SymbolAccessibility,
    /// Import/alias statements that must be emitted for the name to resolve.
    pub aliases_to_make_visible: Vec<NodeIndex>,
    pub error_symbol_name: Option<String>,
    pub error_module_name: Option<String>,
    /// Overrides the context's error location when set.
    pub error_node: NodeIndex,
}

impl SymbolAccessibilityResult {
    pub fn accessible() -> Self {
        SymbolAccessibilityResult {
            accessibility: SymbolAccessibility::Accessible,
            aliases_to_make_visible: Vec::new(),
            error_symbol_name: None,
            error_module_name: None,
            error_node: NodeIndex::NONE,
        }
    }

    /// Accessible once the given alias statements are emitted.
    pub fn accessible_with_aliases(aliases: Vec<NodeIndex>) -> Self {
        SymbolAccessibilityResult {
            aliases_to_make_visible: aliases,
            ..SymbolAccessibilityResult::accessible()
        }
    }

    pub fn not_accessible(symbol_name: &str, module_name: Option<&str>) -> Self {
        SymbolAccessibilityResult {
            accessibility: SymbolAccessibility::NotAccessible,
            aliases_to_make_visible: Vec::new(),
            error_symbol_name: Some(symbol_name.to_string()),
            error_module_name: module_name.map(str::to_string),
            error_node: NodeIndex::NONE,
        }
    }

    pub fn cannot_be_named(symbol_name: &str, module_name: &str) -> Self {
        SymbolAccessibilityResult {
            accessibility: SymbolAccessibility::CannotBeNamed,
            ..SymbolAccessibilityResult::not_accessible(symbol_name, Some(module_name))
        }
    }
}

/// Constant value of an enum member.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    String(String),
    Number(f64),
}

/// Get/set accessor declarations sharing one property name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllAccessorDeclarations {
    pub first_accessor: NodeIndex,
    pub second_accessor: NodeIndex,
    pub get_accessor: NodeIndex,
    pub set_accessor: NodeIndex,
}

impl AllAccessorDeclarations {
    /// A lone accessor with no counterpart.
    pub fn single(accessor: NodeIndex, is_getter: bool) -> Self {
        AllAccessorDeclarations {
            first_accessor: accessor,
            second_accessor: NodeIndex::NONE,
            get_accessor: if is_getter { accessor } else { NodeIndex::NONE },
            set_accessor: if is_getter { NodeIndex::NONE } else { accessor },
        }
    }
}

/// A property assigned onto a function declaration (`f.prop = value`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandoProperty {
    pub name: String,
    /// The assignment that declares the property; its type is serialized.
    pub value_declaration: NodeIndex,
}

/// Callbacks invoked while the resolver serializes a type.
///
/// `track_symbol` returns `true` when it reported an accessibility error,
/// in which case the serializer gives up on the type.
pub trait SymbolTracker {
    fn track_symbol(
        &mut self,
        symbol: SymbolId,
        enclosing_declaration: NodeIndex,
        meaning: SymbolMeaning,
    ) -> bool;
    fn report_inaccessible_this_error(&mut self);
    fn report_inaccessible_unique_symbol_error(&mut self);
    fn report_cyclic_structure_error(&mut self);
    fn report_truncation_error(&mut self);
    fn report_non_serializable_property(&mut self, property_name: &str);
    fn report_likely_unsafe_import_required_error(&mut self, specifier: &str);
    fn report_private_in_base_of_class_expression(&mut self, property_name: &str);
}

/// Checker queries used by declaration emit. All node arguments are parse
/// tree nodes of the file being transformed.
pub trait EmitResolver {
    fn is_declaration_visible(&self, node: NodeIndex) -> bool;

    /// With `should_compute_aliases_to_make_visible`, an accessible result
    /// lists the alias statements that must be painted visible, and the
    /// resolver marks them visible for later `is_declaration_visible` calls.
    fn is_symbol_accessible(
        &self,
        symbol: SymbolId,
        enclosing_declaration: NodeIndex,
        meaning: SymbolMeaning,
        should_compute_aliases_to_make_visible: bool,
    ) -> SymbolAccessibilityResult;

    fn is_entity_name_visible(
        &self,
        entity_name: NodeIndex,
        enclosing_declaration: NodeIndex,
    ) -> SymbolAccessibilityResult;

    /// Serialize the inferred type of a variable, property, parameter or
    /// binding element. `None` when it cannot be expressed.
    fn create_type_of_declaration(
        &self,
        factory: &mut NodeFactory,
        declaration: NodeIndex,
        enclosing_declaration: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex>;

    fn create_return_type_of_signature_declaration(
        &self,
        factory: &mut NodeFactory,
        signature: NodeIndex,
        enclosing_declaration: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex>;

    fn create_type_of_expression(
        &self,
        factory: &mut NodeFactory,
        expression: NodeIndex,
        enclosing_declaration: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex>;

    /// Literal expression for the initializer of a literal const declaration.
    fn create_literal_const_value(
        &self,
        factory: &mut NodeFactory,
        node: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> NodeIndex;

    fn get_constant_value(&self, node: NodeIndex) -> Option<ConstantValue>;
    fn is_literal_const_declaration(&self, node: NodeIndex) -> bool;
    fn get_all_accessor_declarations(&self, accessor: NodeIndex) -> AllAccessorDeclarations;
    fn is_implementation_of_overload(&self, node: NodeIndex) -> bool;
    fn is_optional_parameter(&self, node: NodeIndex) -> bool;
    fn is_required_initialized_parameter(&self, node: NodeIndex) -> bool;
    fn is_optional_uninitialized_parameter_property(&self, node: NodeIndex) -> bool;
    fn is_late_bound(&self, node: NodeIndex) -> bool;
    fn is_expando_function_declaration(&self, node: NodeIndex) -> bool;
    fn get_properties_of_container_function(&self, node: NodeIndex) -> Vec<ExpandoProperty>;
    fn is_import_required_by_augmentation(&self, node: NodeIndex) -> bool;
}

/// Rewrites module specifiers when several files are emitted as one bundle.
pub trait ModuleSpecifierRewriter {
    /// Bundle-relative module name for the specifier of an import, export,
    /// import-equals or module augmentation. `None` keeps the specifier.
    fn external_module_name_for_declaration(&self, declaration: NodeIndex) -> Option<String>;
}

/// Program-level services the transform needs besides the checker.
pub trait DeclarationEmitHost: ModuleSpecifierRewriter {
    /// Name a bundled external module is declared under
    /// (`declare module "<name>"`).
    fn resolved_external_module_name(&self, source_file: NodeIndex) -> String;

    /// Whether a declaration carries an `@internal` marker.
    fn is_internal_declaration(&self, _node: NodeIndex, _source_file: NodeIndex) -> bool {
        false
    }
}

/// Options controlling declaration emit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeclarationEmitOptions {
    /// Drop declarations marked `@internal`.
    pub strip_internal: bool,
    /// Nightly builds accept `resolution-mode` attributes silently.
    pub is_nightly: bool,
}

/// Output of one transform: the declaration tree and what went wrong.
#[derive(Clone, Debug)]
pub struct DeclarationTransformResult {
    pub node: NodeIndex,
    pub diagnostics: Vec<Diagnostic>,
}
