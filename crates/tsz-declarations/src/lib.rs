//! Declaration (`.d.ts`) transform for the tsz compiler.
//!
//! This crate provides:
//! - `DeclarationTransformer` - rewrites a bound source file or bundle into
//!   its declaration-only tree
//! - `EmitResolver`, `SymbolTracker` and `DeclarationEmitHost` - the checker
//!   and program queries the transform runs against
//! - accessibility diagnostic selection for declarations whose inferred
//!   types cannot be named

pub mod declaration_transform;
pub mod diagnostics;
pub mod resolver;

pub use declaration_transform::DeclarationTransformer;
pub use diagnostics::{AccessibilityDiagnosticContext, MessageSet, PendingDiagnostic};
pub use resolver::{
    AllAccessorDeclarations, ConstantValue, DeclarationEmitHost, DeclarationEmitOptions,
    DeclarationTransformResult, EmitResolver, ExpandoProperty, ModuleSpecifierRewriter,
    SymbolAccessibility, SymbolAccessibilityResult, SymbolId, SymbolMeaning, SymbolTracker,
};

use tsz_ast::{NodeFactory, NodeIndex};

/// Transform one `SourceFile` or `Bundle` with a fresh transformer.
pub fn transform_declarations(
    factory: &mut NodeFactory,
    resolver: &dyn EmitResolver,
    host: &dyn DeclarationEmitHost,
    options: DeclarationEmitOptions,
    node: NodeIndex,
) -> DeclarationTransformResult {
    DeclarationTransformer::new(factory, resolver, host, options).transform(node)
}
