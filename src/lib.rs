//! Syntax-tree factory and declaration (`.d.ts`) transform for the tsz
//! compiler.
//!
//! The work lives in the member crates:
//! - `tsz_ast` - node arena, `NodeFactory`, parenthesizer rules and the
//!   child visitor
//! - `tsz_declarations` - the declaration transform and the resolver
//!   interfaces it runs against
//!
//! This crate ties them together for embedders: tracing setup, option
//! loading and a one-call emit entry point.

pub mod tracing_config;

pub use tsz_ast;
pub use tsz_common;
pub use tsz_declarations;

pub use tsz_ast::{NodeArena, NodeFactory, NodeFactoryFlags, NodeIndex};
pub use tsz_declarations::{
    DeclarationEmitHost, DeclarationEmitOptions, DeclarationTransformResult, EmitResolver,
};

/// Read `DeclarationEmitOptions` from a JSON object such as the
/// `compilerOptions` block of a tsconfig. Unknown keys are ignored and
/// missing ones take their defaults.
pub fn parse_emit_options(json: &str) -> Result<DeclarationEmitOptions, serde_json::Error> {
    serde_json::from_str(json)
}

/// Run the declaration transform over a `SourceFile` or `Bundle` that was
/// built in `factory`'s arena.
pub fn emit_declarations(
    factory: &mut NodeFactory,
    resolver: &dyn EmitResolver,
    host: &dyn DeclarationEmitHost,
    options: DeclarationEmitOptions,
    node: NodeIndex,
) -> DeclarationTransformResult {
    let _span = tracing::info_span!(
        "emit_declarations",
        strip_internal = options.strip_internal,
        nightly = options.is_nightly
    )
    .entered();
    let result = tsz_declarations::transform_declarations(factory, resolver, host, options, node);
    tracing::info!(diagnostics = result.diagnostics.len(), "declaration emit finished");
    result
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
